// Host-side tests for the repeating frame loop and its stop handle.

use app_core::*;

#[derive(Default)]
struct CountingSink {
    presented: u64,
    fps_reports: Vec<u32>,
}

impl FrameSink for CountingSink {
    fn present(&mut self, _state: &mut AppState, stats: &FrameStats) {
        self.presented += 1;
        assert_eq!(stats.frame_index, self.presented);
        if let Some(fps) = stats.fps {
            self.fps_reports.push(fps);
        }
    }
}

#[test]
fn runs_until_frame_budget() {
    let mut state = AppState::new(&SceneConfig::default(), 1.0, 0.0);
    let mut driver = HeadlessDriver::new(0.0, 20.0);
    let mut sink = CountingSink::default();
    let summary = driver.run(&mut state, &mut sink, 120, |_, _, _| {});
    assert_eq!(summary.frames, 120);
    assert_eq!(sink.presented, 120);
    assert_eq!(summary.elapsed_ms, 2400.0);
    assert_eq!(sink.fps_reports, vec![50, 50]);
    assert_eq!(summary.last_fps, Some(50));
    assert!(!driver.handle().is_running());
}

#[test]
fn stop_handle_halts_before_next_tick() {
    let mut state = AppState::new(&SceneConfig::default(), 1.0, 0.0);
    let mut driver = HeadlessDriver::new(0.0, 16.0);
    let mut sink = CountingSink::default();
    let summary = driver.run(&mut state, &mut sink, 1_000, |frame, _, handle| {
        if frame == 10 {
            handle.stop();
        }
    });
    assert_eq!(summary.frames, 10);
    assert_eq!(sink.presented, 10);
    assert_eq!(summary.last_fps, None);
}

#[test]
fn stopped_from_outside_never_ticks() {
    let mut state = AppState::new(&SceneConfig::default(), 1.0, 0.0);
    let mut driver = HeadlessDriver::new(0.0, 16.0);
    let external = driver.handle();
    external.stop();
    let summary = driver.run(&mut state, &mut NullSink, 10, |_, _, _| {});
    assert_eq!(summary.frames, 0);
    assert_eq!(driver.now_ms(), 0.0);
}

#[test]
fn scripted_input_reaches_state() {
    let mut state = AppState::new(&SceneConfig::default(), 1.0, 0.0);
    let mut driver = HeadlessDriver::new(0.0, 16.0);
    driver.run(&mut state, &mut NullSink, 5, |frame, state, _| match frame {
        1 => {
            state.pointer_moved(glam::Vec2::ZERO);
        }
        2 => {
            state.clicked();
        }
        3 => {
            state.apply_control(ControlEvent::Preset(Preset::Minimal));
        }
        _ => {}
    });
    assert_eq!(state.selected().map(|o| o.name.as_str()), Some("Cube"));
    assert_eq!(state.preset, Preset::Minimal);
}
