use crate::constants::{FOG_FAR, FOG_NEAR};
use crate::error::SceneError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Space,
    Neon,
    Minimal,
}

/// Colors applied together when a preset is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetPalette {
    pub background: u32,
    pub fog: u32,
    pub particles: u32,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Space, Preset::Neon, Preset::Minimal];

    pub fn palette(self) -> PresetPalette {
        match self {
            Preset::Space => PresetPalette {
                background: 0x0a0e27,
                fog: 0x0a0e27,
                particles: 0xffffff,
            },
            Preset::Neon => PresetPalette {
                background: 0x120024,
                fog: 0x120024,
                particles: 0xff00ff,
            },
            Preset::Minimal => PresetPalette {
                background: 0xf2f2f2,
                fog: 0xf2f2f2,
                particles: 0x333333,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Space => "space",
            Preset::Neon => "neon",
            Preset::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SceneError::UnknownPreset(s.to_string()))
    }
}

/// Background and fog of the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub background: u32,
    pub fog_color: u32,
    pub fog_near: f32,
    pub fog_far: f32,
}

impl Environment {
    pub fn for_preset(preset: Preset) -> Self {
        let p = preset.palette();
        Self {
            background: p.background,
            fog_color: p.fog,
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
        }
    }
}

/// Discrete events coming from the control panel (or keyboard shortcuts).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    Color(u32),
    Wireframe(bool),
    AutoRotate(bool),
    Preset(Preset),
    Screenshot,
    ClearSelection,
}

/// Map a keyboard key to a control event given the current toggles.
pub fn control_for_key(key: &str, wireframe_on: bool, auto_rotate_on: bool) -> Option<ControlEvent> {
    match key {
        "w" | "W" => Some(ControlEvent::Wireframe(!wireframe_on)),
        " " => Some(ControlEvent::AutoRotate(!auto_rotate_on)),
        "1" => Some(ControlEvent::Preset(Preset::Space)),
        "2" => Some(ControlEvent::Preset(Preset::Neon)),
        "3" => Some(ControlEvent::Preset(Preset::Minimal)),
        "p" | "P" => Some(ControlEvent::Screenshot),
        "Escape" => Some(ControlEvent::ClearSelection),
        _ => None,
    }
}
