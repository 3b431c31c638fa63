//! Stagebeat - application builder and runners

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use log::{info, LevelFilter};
use rtrb::RingBuffer;
use simple_logger::SimpleLogger;
use std::{fs, path::Path};

use stagebeat::{RenderState, Stage, StageConfig, Timeline};

use super::ui::UiApp;

/// Frames per second for headless runs
const HEADLESS_FPS: u32 = 60;

/// Keypresses that can queue up between two frames
const COMMAND_CAPACITY: usize = 64;

/// Main application builder
pub struct Stagebeat {
    timeline: Timeline,
    config: StageConfig,
}

impl Stagebeat {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            config: StageConfig::default(),
        }
    }

    pub fn config(mut self, config: StageConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the config with one read from a RON file
    pub fn config_file(self, path: &Path) -> EyreResult<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        let config: StageConfig = ron::from_str(&text)
            .wrap_err_with(|| format!("invalid config {}", path.display()))?;
        Ok(self.config(config))
    }

    /// Run the terminal preview until the user quits
    pub fn run(self) -> EyreResult<()> {
        let stage = Stage::new(&self.timeline, self.config);
        let (producer, consumer) = RingBuffer::new(COMMAND_CAPACITY);

        let mut terminal = ratatui::init();
        let result = UiApp::new(stage, producer, consumer).run(&mut terminal);
        ratatui::restore();
        result
    }

    /// Play `seconds` of frames without a terminal UI, logging a summary
    /// once per second of playback
    pub fn run_headless(self, seconds: f64) -> EyreResult<()> {
        SimpleLogger::new()
            .with_level(LevelFilter::Info)
            .env()
            .init()
            .wrap_err("failed to install logger")?;

        let mut stage = Stage::new(&self.timeline, self.config);
        info!(
            "{} instruments, {:.2}s loop",
            stage.instrument_names().len(),
            stage.transport().loop_at()
        );

        let delta = 1.0 / HEADLESS_FPS as f32;
        let frames = (seconds.max(0.0) * HEADLESS_FPS as f64).round() as u64;
        for frame in 1..=frames {
            let states = stage.frame(delta, &mut ());
            if frame % HEADLESS_FPS as u64 == 0 {
                info!(
                    "t={:>6.2}s kit={} on stage: {}",
                    stage.transport().time(),
                    stage.current_kit(),
                    on_stage(&states).join(" ")
                );
            }
        }
        Ok(())
    }
}

fn on_stage(states: &[RenderState]) -> Vec<&'static str> {
    states.iter().filter(|s| s.visible).map(|s| s.instrument).collect()
}
