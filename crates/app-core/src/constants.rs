use glam::Vec3;

// Shared scene/interaction tuning constants used by both web and native frontends.

// Particles
pub const PARTICLE_COUNT: usize = 1000;
pub const MAX_PARTICLES: usize = 100_000; // upper bound accepted from config
pub const PARTICLE_BOUND: f32 = 25.0; // half-width of the cube particles bounce in
pub const PARTICLE_MAX_SPEED: f32 = 0.01; // per-axis velocity range is [-max, max]
pub const PARTICLE_SIZE: f32 = 0.06; // world-space quad size used by the renderer

// Orbits
pub const ORBIT_RADIUS: f32 = 4.0;
pub const ORBIT_HEIGHT: f32 = 2.0; // amplitude of the vertical sine
pub const ORBIT_ANGLE_STEP: f32 = 0.01; // angle += orbit_speed * step each tick
pub const SPHERE_COUNT: usize = 5;

// Interaction
pub const HOVER_SCALE: f32 = 1.1;
pub const SELECTED_SCALE: f32 = 1.3;
pub const NO_SELECTION_LABEL: &str = "None";

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 8.0;
pub const CAMERA_FOLLOW: f32 = 0.05; // fraction of remaining distance eased per tick
pub const CAMERA_POINTER_RANGE: f32 = 2.0; // pointer NDC -> camera target multiplier

// Zoom (mouse wheel)
pub const ZOOM_SENSITIVITY: f32 = 0.01;
pub const ZOOM_MIN: f32 = 3.0;
pub const ZOOM_MAX: f32 = 15.0;

// Fog
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 50.0;

// Frame-rate counter window
pub const FPS_WINDOW_MS: f64 = 1000.0;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Layout of the non-orbiting objects
pub const TORUS_KNOT_POSITION: [f32; 3] = [0.0, 3.0, 0.0];
pub const ICOSAHEDRON_POSITION: [f32; 3] = [-3.0, -2.0, 0.0];

#[inline]
pub fn torus_knot_position() -> Vec3 {
    Vec3::from(TORUS_KNOT_POSITION)
}

#[inline]
pub fn icosahedron_position() -> Vec3 {
    Vec3::from(ICOSAHEDRON_POSITION)
}
