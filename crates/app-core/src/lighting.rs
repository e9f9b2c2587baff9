use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: u32,
        intensity: f32,
    },
    Point {
        color: u32,
        intensity: f32,
        position: Vec3,
        range: f32,
        cast_shadow: bool,
    },
    Directional {
        color: u32,
        intensity: f32,
        position: Vec3,
    },
}

/// Ambient fill, a purple key light, a pink rim light and a soft top light.
pub fn default_rig() -> Vec<Light> {
    vec![
        Light::Ambient {
            color: 0xffffff,
            intensity: 0.4,
        },
        Light::Point {
            color: 0x667eea,
            intensity: 1.0,
            position: Vec3::new(5.0, 5.0, 5.0),
            range: 100.0,
            cast_shadow: true,
        },
        Light::Point {
            color: 0x764ba2,
            intensity: 0.8,
            position: Vec3::new(-5.0, -5.0, 5.0),
            range: 100.0,
            cast_shadow: false,
        },
        Light::Directional {
            color: 0xffffff,
            intensity: 0.3,
            position: Vec3::new(0.0, 10.0, 0.0),
        },
    ]
}
