//! Scene registry types.
//!
//! A `SceneObject` is created once by the factory and then mutated in place:
//! the animation step drives its transform through `Behavior`, and hover and
//! selection only ever touch `transform.scale` and `material.color`.

use crate::constants::{ORBIT_ANGLE_STEP, ORBIT_HEIGHT, ORBIT_RADIUS};
use crate::geometry::{Geometry, MeshData};
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: u32,
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: u32,
    pub emissive_intensity: f32,
    pub wireframe: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            metalness: 0.0,
            roughness: 1.0,
            emissive: 0x000000,
            emissive_intensity: 1.0,
            wireframe: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[inline]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local-to-world matrix (translate * rotate * scale).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
    }

    #[inline]
    pub fn set_uniform_scale(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }
}

/// Per-frame motion rule of an object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Behavior {
    /// Adds `speed` to rotation x and y every tick.
    Spinner { speed: f32 },
    /// Circles the origin; `angle` advances by `speed * ORBIT_ANGLE_STEP`.
    Orbiter {
        angle: f32,
        speed: f32,
        initial_y: f32,
    },
    Static,
}

#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: String,
    pub geometry: Geometry,
    pub mesh: MeshData,
    pub material: Material,
    pub transform: Transform,
    pub behavior: Behavior,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    bounding_radius: f32,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        let mesh = geometry.build();
        let bounding_radius = mesh.bounding_radius();
        Self {
            name: name.into(),
            geometry,
            mesh,
            material,
            transform: Transform::default(),
            behavior: Behavior::Static,
            cast_shadow: false,
            receive_shadow: false,
            bounding_radius,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_shadows(mut self, cast: bool, receive: bool) -> Self {
        self.cast_shadow = cast;
        self.receive_shadow = receive;
        self
    }

    /// Radius of the mesh in local space (before scaling).
    #[inline]
    pub fn local_bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    /// Advance this object's motion by one tick.
    pub fn advance(&mut self) {
        match &mut self.behavior {
            Behavior::Spinner { speed } => {
                self.transform.rotation.x += *speed;
                self.transform.rotation.y += *speed;
            }
            Behavior::Orbiter { angle, speed, .. } => {
                *angle += *speed * ORBIT_ANGLE_STEP;
                self.transform.position = orbit_position(*angle);
            }
            Behavior::Static => {}
        }
    }
}

/// Point on the tilted orbit path for a given angle.
#[inline]
pub fn orbit_position(angle: f32) -> Vec3 {
    Vec3::new(
        angle.cos() * ORBIT_RADIUS,
        (angle * 2.0).sin() * ORBIT_HEIGHT,
        angle.sin() * ORBIT_RADIUS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball() -> SceneObject {
        SceneObject::new(
            "ball",
            Geometry::Sphere {
                radius: 0.5,
                width_segments: 8,
                height_segments: 6,
            },
            Material::default(),
        )
    }

    #[test]
    fn spinner_rotates_x_and_y_only() {
        let mut o = ball().with_behavior(Behavior::Spinner { speed: 0.25 });
        o.advance();
        o.advance();
        assert_eq!(o.transform.rotation, Vec3::new(0.5, 0.5, 0.0));
        assert_eq!(o.transform.position, Vec3::ZERO);
    }

    #[test]
    fn static_objects_never_move() {
        let mut o = ball().with_position(Vec3::new(1.0, 2.0, 3.0));
        for _ in 0..10 {
            o.advance();
        }
        assert_eq!(o.transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(o.transform.rotation, Vec3::ZERO);
    }

    #[test]
    fn matrix_applies_scale_then_translation() {
        let mut t = Transform::at(Vec3::new(0.0, 1.0, 0.0));
        t.set_uniform_scale(2.0);
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-6);
    }
}
