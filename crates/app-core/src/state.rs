//! Session state shared by the front-ends.
//!
//! `AppState` owns everything that changes during a session and is handed by
//! reference to the event handlers and the frame loop. Nothing here touches a
//! platform API, so native tests drive it exactly as the browser does.

use crate::animation::{FpsCounter, FrameStats};
use crate::camera::{Camera, Ray};
use crate::config::SceneConfig;
use crate::controls::{ControlEvent, Environment, Preset};
use crate::factory::build_objects;
use crate::interaction::{raycast, Cursor, Hits, Selection, SelectionChange};
use crate::lighting::{default_rig, Light};
use crate::particles::ParticleField;
use crate::scene::SceneObject;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Side effects a control event asks the front-end to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlEffect {
    None,
    /// The selection label/color picker must be refreshed.
    Selection(SelectionChange),
    /// Background, fog and particle tint changed.
    PresetApplied(Preset),
    /// A screenshot will be taken right after the next render.
    ScreenshotQueued,
}

pub struct AppState {
    pub objects: Vec<SceneObject>,
    pub particles: ParticleField,
    pub selection: Selection,
    pub camera: Camera,
    /// Last pointer position in normalized device coordinates.
    pub pointer: Vec2,
    pub auto_rotate: bool,
    pub preset: Preset,
    pub environment: Environment,
    pub lights: Vec<Light>,
    fps: FpsCounter,
    frame_index: u64,
    screenshot_pending: bool,
}

impl AppState {
    pub fn new(config: &SceneConfig, aspect: f32, now_ms: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let objects = build_objects(&mut rng);
        let particles = ParticleField::new(
            config.particle_count,
            config.preset.palette().particles,
            &mut rng,
        );
        log::info!(
            "[scene] objects={} particles={} preset={} seed={}",
            objects.len(),
            particles.len(),
            config.preset,
            config.seed
        );
        Self {
            objects,
            particles,
            selection: Selection::default(),
            camera: Camera::new(config.camera_z, aspect),
            pointer: Vec2::ZERO,
            auto_rotate: config.auto_rotate,
            preset: config.preset,
            environment: Environment::for_preset(config.preset),
            lights: default_rig(),
            fps: FpsCounter::new(now_ms),
            frame_index: 0,
            screenshot_pending: false,
        }
    }

    #[inline]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn selected(&self) -> Option<&SceneObject> {
        self.selection.selected.and_then(|i| self.objects.get(i))
    }

    /// True when every object is drawn as wireframe.
    pub fn wireframe(&self) -> bool {
        !self.objects.is_empty() && self.objects.iter().all(|o| o.material.wireframe)
    }

    pub fn last_fps(&self) -> Option<u32> {
        self.fps.last()
    }

    fn cast(&self) -> Hits {
        let ray: Ray = self.camera.ray_from_ndc(self.pointer);
        raycast(&ray, &self.objects)
    }

    /// Pointer moved to `ndc`: recompute hover state.
    pub fn pointer_moved(&mut self, ndc: Vec2) -> Cursor {
        self.pointer = ndc;
        let hits = self.cast();
        self.selection.hover(&mut self.objects, &hits)
    }

    /// Click at the last pointer position.
    pub fn clicked(&mut self) -> SelectionChange {
        let hits = self.cast();
        self.selection.click(&mut self.objects, &hits)
    }

    pub fn wheel(&mut self, delta_y: f32) {
        self.camera.zoom(delta_y);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.camera.set_aspect(width, height);
    }

    pub fn apply_control(&mut self, event: ControlEvent) -> ControlEffect {
        match event {
            ControlEvent::Color(color) => {
                let Some(i) = self.selection.selected else {
                    return ControlEffect::None;
                };
                let obj = &mut self.objects[i];
                obj.material.color = color;
                ControlEffect::Selection(SelectionChange {
                    selected: Some(i),
                    label: obj.name.clone(),
                    color: Some(color),
                })
            }
            ControlEvent::Wireframe(on) => {
                for o in &mut self.objects {
                    o.material.wireframe = on;
                }
                ControlEffect::None
            }
            ControlEvent::AutoRotate(on) => {
                self.auto_rotate = on;
                ControlEffect::None
            }
            ControlEvent::Preset(preset) => {
                self.preset = preset;
                self.environment = Environment::for_preset(preset);
                self.particles.tint = preset.palette().particles;
                log::info!("[preset] {}", preset);
                ControlEffect::PresetApplied(preset)
            }
            ControlEvent::Screenshot => {
                self.screenshot_pending = true;
                ControlEffect::ScreenshotQueued
            }
            ControlEvent::ClearSelection => {
                ControlEffect::Selection(self.selection.clear(&mut self.objects))
            }
        }
    }

    /// Returns true exactly once after a screenshot was requested.
    pub fn take_screenshot_request(&mut self) -> bool {
        std::mem::take(&mut self.screenshot_pending)
    }

    /// One animation step; the caller renders afterwards.
    pub fn tick(&mut self, now_ms: f64) -> FrameStats {
        let fps = self.fps.tick(now_ms);
        self.particles.update();
        if self.auto_rotate {
            for o in &mut self.objects {
                o.advance();
            }
        }
        self.camera.follow_pointer(self.pointer);
        self.frame_index += 1;
        FrameStats {
            fps,
            frame_index: self.frame_index,
        }
    }
}
