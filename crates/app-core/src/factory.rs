use crate::constants::{icosahedron_position, torus_knot_position, SPHERE_COUNT};
use crate::geometry::Geometry;
use crate::scene::{orbit_position, Behavior, Material, SceneObject};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Build the fixed inventory: a spinning cube, five orbiting spheres, a torus
/// knot above the origin and a wireframe icosahedron to the lower left.
pub fn build_objects<R: Rng + ?Sized>(rng: &mut R) -> Vec<SceneObject> {
    let mut objects = Vec::with_capacity(SPHERE_COUNT + 3);

    objects.push(
        SceneObject::new(
            "Cube",
            Geometry::Cube { size: 2.0 },
            Material {
                color: 0x667eea,
                metalness: 0.7,
                roughness: 0.2,
                emissive: 0x667eea,
                emissive_intensity: 0.1,
                wireframe: false,
            },
        )
        .with_shadows(true, true)
        .with_behavior(Behavior::Spinner { speed: 0.01 }),
    );

    for i in 0..SPHERE_COUNT {
        let angle = i as f32 / SPHERE_COUNT as f32 * TAU;
        // initial height uses the index, not the angle; the first tick snaps
        // the sphere onto its orbit path
        let initial_y = (i as f32).sin() * 2.0;
        let start = Vec3::new(orbit_position(angle).x, initial_y, orbit_position(angle).z);
        objects.push(
            SceneObject::new(
                format!("Sphere {}", i + 1),
                Geometry::Sphere {
                    radius: 0.4,
                    width_segments: 32,
                    height_segments: 32,
                },
                Material {
                    color: rng.gen_range(0..=0xffffff),
                    metalness: 0.5,
                    roughness: 0.3,
                    ..Material::default()
                },
            )
            .with_position(start)
            .with_shadows(true, false)
            .with_behavior(Behavior::Orbiter {
                angle,
                speed: 0.5 + rng.gen::<f32>() * 0.5,
                initial_y,
            }),
        );
    }

    objects.push(
        SceneObject::new(
            "Torus Knot",
            Geometry::TorusKnot {
                radius: 1.0,
                tube: 0.3,
                tubular_segments: 100,
                radial_segments: 16,
                p: 2,
                q: 3,
            },
            Material {
                color: 0x764ba2,
                metalness: 0.8,
                roughness: 0.1,
                ..Material::default()
            },
        )
        .with_position(torus_knot_position())
        .with_shadows(true, false)
        .with_behavior(Behavior::Spinner { speed: 0.005 }),
    );

    objects.push(
        SceneObject::new(
            "Icosahedron",
            Geometry::Icosahedron {
                radius: 0.8,
                detail: 0,
            },
            Material {
                color: 0xff6b6b,
                metalness: 0.6,
                roughness: 0.4,
                wireframe: true,
                ..Material::default()
            },
        )
        .with_position(icosahedron_position())
        .with_behavior(Behavior::Spinner { speed: 0.008 }),
    );

    objects
}
