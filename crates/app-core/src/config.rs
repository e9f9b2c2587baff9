use crate::constants::{CAMERA_START_Z, MAX_PARTICLES, PARTICLE_COUNT};
use crate::controls::Preset;
use crate::error::SceneError;

/// Startup parameters of a scene session.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub seed: u64,
    pub particle_count: usize,
    pub auto_rotate: bool,
    pub preset: Preset,
    pub camera_z: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            particle_count: PARTICLE_COUNT,
            auto_rotate: true,
            preset: Preset::Space,
            camera_z: CAMERA_START_Z,
        }
    }
}

impl SceneConfig {
    /// Keys accepted by `apply_param`, in the order front-ends should read them.
    pub const KEYS: [&'static str; 5] = ["seed", "particles", "preset", "autorotate", "zoom"];

    /// Override one field from a textual key/value pair (URL query or CLI).
    pub fn apply_param(&mut self, key: &str, value: &str) -> Result<(), SceneError> {
        let invalid = || SceneError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "seed" => self.seed = value.parse().map_err(|_| invalid())?,
            "particles" => {
                let n: usize = value.parse().map_err(|_| invalid())?;
                if n > MAX_PARTICLES {
                    return Err(invalid());
                }
                self.particle_count = n;
            }
            "preset" => self.preset = value.parse()?,
            "autorotate" => {
                self.auto_rotate = match value {
                    "1" | "true" | "on" | "yes" => true,
                    "0" | "false" | "off" | "no" => false,
                    _ => return Err(invalid()),
                }
            }
            "zoom" => {
                let z: f32 = value.parse().map_err(|_| invalid())?;
                if !z.is_finite() {
                    return Err(invalid());
                }
                self.camera_z = z;
            }
            _ => return Err(SceneError::UnknownConfigKey(key.to_string())),
        }
        log::debug!("[config] {key}={value}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_in_place() {
        let mut cfg = SceneConfig::default();
        cfg.apply_param("particles", "250").unwrap();
        cfg.apply_param("preset", "NEON").unwrap();
        cfg.apply_param("autorotate", "off").unwrap();
        assert_eq!(cfg.particle_count, 250);
        assert_eq!(cfg.preset, Preset::Neon);
        assert!(!cfg.auto_rotate);
    }

    #[test]
    fn bad_values_leave_config_untouched() {
        let mut cfg = SceneConfig::default();
        assert!(cfg.apply_param("particles", "-3").is_err());
        assert!(cfg.apply_param("zoom", "NaN").is_err());
        assert_eq!(
            cfg.apply_param("fov", "90"),
            Err(SceneError::UnknownConfigKey("fov".into()))
        );
        assert_eq!(cfg, SceneConfig::default());
    }

    #[test]
    fn particle_count_is_bounded() {
        let mut cfg = SceneConfig::default();
        cfg.apply_param("particles", &MAX_PARTICLES.to_string()).unwrap();
        assert_eq!(cfg.particle_count, MAX_PARTICLES);

        let mut cfg = SceneConfig::default();
        assert_eq!(
            cfg.apply_param("particles", "18446744073709551615"),
            Err(SceneError::InvalidConfig {
                key: "particles".into(),
                value: "18446744073709551615".into(),
            })
        );
        assert!(cfg
            .apply_param("particles", &(MAX_PARTICLES + 1).to_string())
            .is_err());
        assert_eq!(cfg.particle_count, PARTICLE_COUNT);
    }

    #[test]
    fn oversized_field_is_capped() {
        let cfg = SceneConfig {
            particle_count: usize::MAX,
            ..SceneConfig::default()
        };
        let state = crate::AppState::new(&cfg, 1.0, 0.0);
        assert_eq!(state.particles.positions.len(), MAX_PARTICLES);
    }
}
