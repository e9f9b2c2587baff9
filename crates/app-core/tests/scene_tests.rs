// Host-side tests for the scene inventory, animation step and controls.

use app_core::*;
use glam::{Vec2, Vec3};

fn make_state() -> AppState {
    AppState::new(&SceneConfig::default(), 1.0, 0.0)
}

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn factory_builds_fixed_inventory() {
    let state = make_state();
    let names: Vec<&str> = state.objects.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Cube",
            "Sphere 1",
            "Sphere 2",
            "Sphere 3",
            "Sphere 4",
            "Sphere 5",
            "Torus Knot",
            "Icosahedron"
        ]
    );
    assert_eq!(state.object_count(), 8);
    assert_eq!(state.particles.len(), PARTICLE_COUNT);
    assert!(state.objects[7].material.wireframe);
    assert!(!state.wireframe());
}

#[test]
fn behaviors_match_object_kinds() {
    let state = make_state();
    assert_eq!(state.objects[0].behavior, Behavior::Spinner { speed: 0.01 });
    assert_eq!(state.objects[6].behavior, Behavior::Spinner { speed: 0.005 });
    assert_eq!(state.objects[7].behavior, Behavior::Spinner { speed: 0.008 });
    for (i, o) in state.objects[1..6].iter().enumerate() {
        match o.behavior {
            Behavior::Orbiter {
                angle,
                speed,
                initial_y,
            } => {
                let expected = i as f32 / 5.0 * std::f32::consts::TAU;
                assert!((angle - expected).abs() < 1e-6);
                assert!((0.5..=1.0).contains(&speed));
                assert!((initial_y - (i as f32).sin() * 2.0).abs() < 1e-6);
                assert!((o.transform.position.y - initial_y).abs() < 1e-6);
            }
            other => panic!("sphere {} has behavior {:?}", i + 1, other),
        }
    }
}

#[test]
fn same_seed_same_scene() {
    let a = make_state();
    let b = make_state();
    for (x, y) in a.objects.iter().zip(&b.objects) {
        assert_eq!(x.material, y.material);
        assert_eq!(x.behavior, y.behavior);
    }
    assert_eq!(a.particles.positions, b.particles.positions);
}

#[test]
fn orbit_after_hundred_ticks() {
    let mut state = make_state();
    state.objects[1].behavior = Behavior::Orbiter {
        angle: 0.0,
        speed: 0.5,
        initial_y: 0.0,
    };
    for i in 0..100 {
        state.tick(i as f64 * 16.0);
    }
    let Behavior::Orbiter { angle, .. } = state.objects[1].behavior else {
        panic!("behavior changed kind");
    };
    assert!((angle - 0.5).abs() < 1e-5);
    let expected = Vec3::new(0.5_f32.cos() * 4.0, 1.0_f32.sin() * 2.0, 0.5_f32.sin() * 4.0);
    assert!(approx(state.objects[1].transform.position, expected));
}

#[test]
fn spinners_rotate_each_tick() {
    let mut state = make_state();
    for i in 0..10 {
        state.tick(i as f64);
    }
    let r = state.objects[0].transform.rotation;
    assert!((r.x - 0.1).abs() < 1e-5);
    assert!((r.y - 0.1).abs() < 1e-5);
    assert_eq!(r.z, 0.0);
}

#[test]
fn auto_rotate_off_freezes_objects_but_not_particles() {
    let mut state = make_state();
    state.apply_control(ControlEvent::AutoRotate(false));
    let transforms: Vec<Transform> = state.objects.iter().map(|o| o.transform).collect();
    let behaviors: Vec<Behavior> = state.objects.iter().map(|o| o.behavior).collect();
    let particles_before = state.particles.positions.clone();
    for i in 0..250 {
        state.tick(i as f64 * 16.0);
    }
    for (o, (t, b)) in state.objects.iter().zip(transforms.iter().zip(&behaviors)) {
        assert_eq!(o.transform.rotation, t.rotation);
        assert_eq!(o.transform.position, t.position);
        assert_eq!(&o.behavior, b);
    }
    assert_ne!(state.particles.positions, particles_before);
}

#[test]
fn particle_reflection_bound_holds_every_step() {
    let mut state = make_state();
    let bound = state.particles.bound;
    for _ in 0..400 {
        let before = state.particles.velocities.clone();
        state.particles.update();
        for ((p, v), v0) in state
            .particles
            .positions
            .iter()
            .zip(&state.particles.velocities)
            .zip(&before)
        {
            for axis in 0..3 {
                assert!(p[axis].abs() <= bound + v[axis].abs() + 1e-6);
                let crossed = p[axis].abs() > bound;
                let flipped = v[axis] == -v0[axis] && v0[axis] != 0.0;
                assert_eq!(crossed, flipped, "axis {axis} p={p:?} v0={v0:?}");
            }
        }
    }
}

#[test]
fn zoom_clamps_both_ways() {
    let mut state = make_state();
    for _ in 0..5 {
        state.wheel(1000.0);
        assert_eq!(state.camera.eye.z, ZOOM_MAX);
    }
    for _ in 0..5 {
        state.wheel(-2000.0);
        assert_eq!(state.camera.eye.z, ZOOM_MIN);
    }
    state.wheel(150.0);
    assert!((state.camera.eye.z - 4.5).abs() < 1e-6);
}

#[test]
fn camera_eases_toward_pointer() {
    let mut state = make_state();
    state.pointer = Vec2::new(0.5, -0.5);
    for i in 0..400 {
        state.tick(i as f64);
    }
    assert!((state.camera.eye.x - 1.0).abs() < 1e-3);
    assert!((state.camera.eye.y - 1.0).abs() < 1e-3);
    assert_eq!(state.camera.target, Vec3::ZERO);
}

#[test]
fn neon_preset_only_changes_palette() {
    let mut state = make_state();
    let effect = state.apply_control(ControlEvent::Preset(Preset::Neon));
    assert_eq!(effect, ControlEffect::PresetApplied(Preset::Neon));
    assert_eq!(state.particles.tint, 0xff00ff);
    assert_eq!(state.environment.background, Preset::Neon.palette().background);
    assert_eq!(state.environment.fog_color, Preset::Neon.palette().fog);
    assert_eq!(state.object_count(), 8);
    assert_eq!(state.particles.len(), PARTICLE_COUNT);
}

#[test]
fn wireframe_toggle_covers_every_object() {
    let mut state = make_state();
    state.apply_control(ControlEvent::Wireframe(true));
    assert!(state.wireframe());
    state.apply_control(ControlEvent::Wireframe(false));
    assert!(state.objects.iter().all(|o| !o.material.wireframe));
}

#[test]
fn color_without_selection_is_noop() {
    let mut state = make_state();
    let before: Vec<u32> = state.objects.iter().map(|o| o.material.color).collect();
    assert_eq!(
        state.apply_control(ControlEvent::Color(0x123456)),
        ControlEffect::None
    );
    let after: Vec<u32> = state.objects.iter().map(|o| o.material.color).collect();
    assert_eq!(before, after);
}

#[test]
fn screenshot_request_is_taken_once() {
    let mut state = make_state();
    assert!(!state.take_screenshot_request());
    assert_eq!(
        state.apply_control(ControlEvent::Screenshot),
        ControlEffect::ScreenshotQueued
    );
    assert!(state.take_screenshot_request());
    assert!(!state.take_screenshot_request());
}

#[test]
fn keyboard_shortcuts_toggle_from_current_state() {
    assert_eq!(
        control_for_key("w", false, true),
        Some(ControlEvent::Wireframe(true))
    );
    assert_eq!(
        control_for_key("W", true, true),
        Some(ControlEvent::Wireframe(false))
    );
    assert_eq!(
        control_for_key(" ", false, true),
        Some(ControlEvent::AutoRotate(false))
    );
    assert_eq!(
        control_for_key("2", false, true),
        Some(ControlEvent::Preset(Preset::Neon))
    );
    assert_eq!(control_for_key("p", false, true), Some(ControlEvent::Screenshot));
    assert_eq!(
        control_for_key("Escape", false, true),
        Some(ControlEvent::ClearSelection)
    );
    assert_eq!(control_for_key("x", false, true), None);
}
