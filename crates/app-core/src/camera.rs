//! Perspective camera with pointer easing and wheel zoom.
//!
//! The camera always looks at `target` (the scene origin). `eye.z` doubles as
//! the zoom distance; `eye.x`/`eye.y` drift toward a pointer-derived target.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOLLOW, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_POINTER_RANGE, ZOOM_MAX,
    ZOOM_MIN, ZOOM_SENSITIVITY,
};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Camera {
    pub fn new(eye_z: f32, aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, eye_z.clamp(ZOOM_MIN, ZOOM_MAX)),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// World-space ray from the eye through a point in normalized device
    /// coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (far - self.eye).normalize(),
        }
    }

    /// Move the eye along z by the wheel delta, clamped to the zoom range.
    pub fn zoom(&mut self, delta_y: f32) {
        self.eye.z = (self.eye.z + delta_y * ZOOM_SENSITIVITY).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Ease eye x/y a fixed fraction toward the pointer-derived target and
    /// re-aim at the origin.
    pub fn follow_pointer(&mut self, pointer_ndc: Vec2) {
        let tx = pointer_ndc.x * CAMERA_POINTER_RANGE;
        let ty = -pointer_ndc.y * CAMERA_POINTER_RANGE;
        self.eye.x += (tx - self.eye.x) * CAMERA_FOLLOW;
        self.eye.y += (ty - self.eye.y) * CAMERA_FOLLOW;
        self.target = Vec3::ZERO;
    }

    /// Unit right/up vectors of the view, used to billboard particles.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let fwd = (self.target - self.eye).normalize_or_zero();
        let right = fwd.cross(self.up).normalize_or_zero();
        let up = right.cross(fwd);
        (right, up)
    }
}

/// Convert client pixel coordinates to normalized device coordinates.
#[inline]
pub fn pointer_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_ray_points_at_origin() {
        let cam = Camera::new(8.0, 1.5);
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 8.0));
        assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn right_edge_ray_leans_right() {
        let cam = Camera::new(8.0, 1.0);
        let ray = cam.ray_from_ndc(Vec2::new(1.0, 0.0));
        assert!(ray.dir.x > 0.0);
        assert!(ray.dir.z < 0.0);
        // half-fov of 37.5 degrees at aspect 1
        let angle = ray.dir.x.atan2(-ray.dir.z).to_degrees();
        assert!((angle - 37.5).abs() < 0.1);
    }

    #[test]
    fn ndc_corners() {
        assert_eq!(pointer_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
        assert_eq!(pointer_to_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    }

    #[test]
    fn follow_moves_five_percent() {
        let mut cam = Camera::new(8.0, 1.0);
        cam.follow_pointer(Vec2::new(1.0, 1.0));
        assert!((cam.eye.x - 0.1).abs() < 1e-6);
        assert!((cam.eye.y + 0.1).abs() < 1e-6);
        assert_eq!(cam.eye.z, 8.0);
    }
}
