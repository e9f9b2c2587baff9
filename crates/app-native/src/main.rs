use anyhow::Context;
use app_core::{
    AppState, ControlEvent, FrameSink, FrameStats, HeadlessDriver, Preset, RunSummary, SceneConfig,
};
use clap::Parser;
use glam::Vec2;

// 60 Hz display refresh
const FRAME_STEP_MS: f64 = 1000.0 / 60.0;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-native")]
#[command(about = "Run the scene simulation headless and log what it does", long_about = None)]
struct Cli {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Seed for sphere colors, orbit speeds and particles
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Particle count
    #[arg(long)]
    particles: Option<usize>,

    /// Starting preset: space, neon or minimal
    #[arg(long)]
    preset: Option<Preset>,

    /// Start with object animation paused
    #[arg(long = "no-auto-rotate", default_value = "false")]
    no_auto_rotate: bool,

    /// Skip the scripted pointer/click/wheel interaction
    #[arg(long = "no-script", default_value = "false")]
    no_script: bool,
}

impl Cli {
    fn scene_config(&self) -> anyhow::Result<SceneConfig> {
        let mut config = SceneConfig {
            seed: self.seed,
            auto_rotate: !self.no_auto_rotate,
            ..SceneConfig::default()
        };
        if let Some(n) = self.particles {
            config.apply_param("particles", &n.to_string())?;
        }
        if let Some(p) = self.preset {
            config.preset = p;
        }
        Ok(config)
    }
}

/// Logs FPS once per window and the selection as it changes.
#[derive(Default)]
struct LogSink {
    last_selected: Option<usize>,
}

impl FrameSink for LogSink {
    fn present(&mut self, state: &mut AppState, stats: &FrameStats) {
        if let Some(fps) = stats.fps {
            log::info!(
                "[frame {}] fps={} camera=({:.2},{:.2},{:.2})",
                stats.frame_index,
                fps,
                state.camera.eye.x,
                state.camera.eye.y,
                state.camera.eye.z
            );
        }
        if state.selection.selected != self.last_selected {
            self.last_selected = state.selection.selected;
            let name = state.selected().map_or("None", |o| o.name.as_str());
            log::info!("[frame {}] selected={}", stats.frame_index, name);
        }
    }
}

/// Interaction played back at fixed frames: hover and pick the cube, zoom
/// out, recolor it, cycle presets, then clear the selection.
fn scripted_input(frame: u64, state: &mut AppState) {
    match frame {
        30 => {
            let cursor = state.pointer_moved(Vec2::ZERO);
            log::info!("[script] pointer at center, cursor={}", cursor.as_css());
        }
        45 => {
            let change = state.clicked();
            log::info!("[script] click -> {}", change.label);
        }
        60 => {
            state.wheel(300.0);
            log::info!("[script] wheel -> z={:.2}", state.camera.eye.z);
        }
        90 => {
            state.apply_control(ControlEvent::Color(0x00ff88));
        }
        120 => {
            state.apply_control(ControlEvent::Wireframe(true));
        }
        180 => {
            state.apply_control(ControlEvent::Preset(Preset::Neon));
        }
        240 => {
            state.apply_control(ControlEvent::Wireframe(false));
            state.apply_control(ControlEvent::Preset(Preset::Minimal));
        }
        300 => {
            state.apply_control(ControlEvent::ClearSelection);
            state.pointer_moved(Vec2::new(0.5, -0.5));
        }
        _ => {}
    }
}

fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let config = cli.scene_config()?;
    let mut driver = HeadlessDriver::new(0.0, FRAME_STEP_MS);
    let mut state = AppState::new(&config, 16.0 / 9.0, driver.now_ms());
    let mut sink = LogSink::default();
    let script = !cli.no_script;
    let summary = driver.run(&mut state, &mut sink, cli.frames, |frame, state, _| {
        if script {
            scripted_input(frame, state);
        }
    });
    if summary.frames != cli.frames {
        anyhow::bail!(
            "loop stopped after {} of {} frames",
            summary.frames,
            cli.frames
        );
    }
    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    log::info!("[native] {:?}", cli);
    let summary = run(&cli).context("headless run failed")?;
    log::info!(
        "[native] frames={} simulated={:.0}ms last_fps={}",
        summary.frames,
        summary.elapsed_ms,
        summary
            .last_fps
            .map_or_else(|| "n/a".to_string(), |f| f.to_string())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_build_config() {
        let cli = Cli::parse_from([
            "scene-native",
            "--seed",
            "7",
            "--particles",
            "10",
            "--preset",
            "Neon",
            "--no-auto-rotate",
        ]);
        let config = cli.scene_config().unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.particle_count, 10);
        assert_eq!(config.preset, Preset::Neon);
        assert!(!config.auto_rotate);
    }

    #[test]
    fn oversized_particle_count_is_rejected() {
        let cli = Cli::parse_from(["scene-native", "--particles", "18446744073709551615"]);
        assert!(cli.scene_config().is_err());
        assert!(run(&cli).is_err());
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(Cli::try_parse_from(["scene-native", "--preset", "sunset"]).is_err());
    }

    #[test]
    fn scripted_run_completes_budget() {
        let cli = Cli::parse_from(["scene-native", "--frames", "120", "--particles", "50"]);
        let summary = run(&cli).unwrap();
        assert_eq!(summary.frames, 120);
        assert!(summary.last_fps.is_some_and(|f| (59..=61).contains(&f)));
    }

    #[test]
    fn script_picks_and_recolors_cube() {
        let mut state = AppState::new(&SceneConfig::default(), 16.0 / 9.0, 0.0);
        for frame in 0..=90 {
            scripted_input(frame, &mut state);
        }
        let cube = state.selected().unwrap();
        assert_eq!(cube.name, "Cube");
        assert_eq!(cube.material.color, 0x00ff88);
        assert!((state.camera.eye.z - 11.0).abs() < 1e-5);
    }
}
