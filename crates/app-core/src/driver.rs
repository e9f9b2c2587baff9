use crate::animation::FrameStats;
use crate::state::AppState;
use std::cell::Cell;
use std::rc::Rc;

/// Shared on/off switch for a repeating frame task.
///
/// Clones observe the same flag. The loop checks `is_running` before
/// re-arming itself and tears down once it reads `false`.
#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Something that draws the state after each tick.
pub trait FrameSink {
    fn present(&mut self, state: &mut AppState, stats: &FrameStats);
}

/// Sink that draws nothing; used by headless hosts.
#[derive(Default)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn present(&mut self, _state: &mut AppState, _stats: &FrameStats) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed_ms: f64,
    pub last_fps: Option<u32>,
}

/// Frame loop for hosts without a display refresh signal: advances a
/// simulated clock by a fixed step per frame.
pub struct HeadlessDriver {
    handle: LoopHandle,
    now_ms: f64,
    step_ms: f64,
}

impl HeadlessDriver {
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self {
            handle: LoopHandle::new(),
            now_ms: start_ms,
            step_ms,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Run until `max_frames` ticks have elapsed or the handle is stopped.
    /// `before_frame` runs ahead of every tick and may inject input or stop
    /// the loop.
    pub fn run<S, F>(
        &mut self,
        state: &mut AppState,
        sink: &mut S,
        max_frames: u64,
        mut before_frame: F,
    ) -> RunSummary
    where
        S: FrameSink,
        F: FnMut(u64, &mut AppState, &LoopHandle),
    {
        let start = self.now_ms;
        let mut frames = 0;
        while frames < max_frames && self.handle.is_running() {
            before_frame(frames, state, &self.handle);
            if !self.handle.is_running() {
                break;
            }
            self.now_ms += self.step_ms;
            let stats = state.tick(self.now_ms);
            sink.present(state, &stats);
            frames += 1;
        }
        self.handle.stop();
        RunSummary {
            frames,
            elapsed_ms: self.now_ms - start,
            last_fps: state.last_fps(),
        }
    }
}
