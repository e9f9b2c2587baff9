use crate::constants::FPS_WINDOW_MS;

/// Counts frames over a one-second window.
#[derive(Clone, Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start_ms: f64,
    last_fps: Option<u32>,
}

impl FpsCounter {
    pub fn new(now_ms: f64) -> Self {
        Self {
            frames: 0,
            window_start_ms: now_ms,
            last_fps: None,
        }
    }

    /// Count one frame; returns the frame count once per elapsed window.
    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        if now_ms - self.window_start_ms >= FPS_WINDOW_MS {
            let fps = self.frames;
            self.frames = 0;
            self.window_start_ms = now_ms;
            self.last_fps = Some(fps);
            return Some(fps);
        }
        None
    }

    #[inline]
    pub fn last(&self) -> Option<u32> {
        self.last_fps
    }
}

/// Per-tick report handed back to the front-end.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameStats {
    /// Set once per FPS window.
    pub fps: Option<u32>,
    pub frame_index: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishes_once_per_window() {
        let mut fps = FpsCounter::new(0.0);
        let mut published = Vec::new();
        for i in 1..=180 {
            if let Some(n) = fps.tick(i as f64 * 1000.0 / 60.0) {
                published.push(n);
            }
        }
        assert_eq!(published, vec![60, 60, 60]);
        assert_eq!(fps.last(), Some(60));
    }
}
