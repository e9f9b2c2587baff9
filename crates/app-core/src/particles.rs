use crate::constants::{MAX_PARTICLES, PARTICLE_BOUND, PARTICLE_MAX_SPEED};
use glam::Vec3;
use rand::Rng;

/// Ambient background particles drifting inside a cube and bouncing off its
/// faces.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub bound: f32,
    pub tint: u32,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, tint: u32, rng: &mut R) -> Self {
        let b = PARTICLE_BOUND;
        let s = PARTICLE_MAX_SPEED;
        let count = count.min(MAX_PARTICLES);
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                rng.gen_range(-b..=b),
                rng.gen_range(-b..=b),
                rng.gen_range(-b..=b),
            ));
            velocities.push(Vec3::new(
                rng.gen_range(-s..=s),
                rng.gen_range(-s..=s),
                rng.gen_range(-s..=s),
            ));
        }
        Self {
            positions,
            velocities,
            bound: b,
            tint,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Integrate one step and reflect the velocity on every axis that left
    /// the cube. Positions are not clamped.
    pub fn update(&mut self) {
        let bound = self.bound;
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *p += *v;
            for axis in 0..3 {
                if p[axis].abs() > bound {
                    v[axis] = -v[axis];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_inside_cube_with_bounded_speed() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::new(500, 0xffffff, &mut rng);
        assert_eq!(field.len(), 500);
        for (p, v) in field.positions.iter().zip(&field.velocities) {
            assert!(p.abs().max_element() <= PARTICLE_BOUND);
            assert!(v.abs().max_element() <= PARTICLE_MAX_SPEED);
        }
    }

    #[test]
    fn reflects_only_the_crossing_axis() {
        let mut field = ParticleField {
            positions: vec![Vec3::new(24.995, 0.0, -3.0)],
            velocities: vec![Vec3::new(0.01, 0.005, -0.002)],
            bound: PARTICLE_BOUND,
            tint: 0,
        };
        field.update();
        assert_eq!(field.velocities[0], Vec3::new(-0.01, 0.005, -0.002));
        assert!(field.positions[0].x > PARTICLE_BOUND);
    }
}
