//! Runs a scene without a window: frames are paced by sleeping and each
//! presented frame is summarised through `tracing`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use boxfall_engine::simulation::{
    EventSource, Frame, FrameDriver, InputEvent, Renderer, SimConfig, SystemClock,
};
use boxfall_engine::SimResult;
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "boxfall-headless", version, about = "Run a boxfall scene without a window")]
struct Cli {
    /// JSON scene config; defaults to the built-in five-box scene.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Close the "window" after this many frames.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Sleep between frames, standing in for vsync.
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Log a body summary every N frames (0 disables).
    #[arg(long, default_value_t = 60)]
    log_every: u64,
}

/// Sends `Close` once the frame budget is spent.
struct FrameBudget {
    remaining: u64,
}

impl EventSource for FrameBudget {
    fn poll_event(&mut self) -> Option<InputEvent> {
        match self.remaining {
            0 => {
                self.remaining = u64::MAX;
                Some(InputEvent::Close)
            }
            u64::MAX => None,
            _ => {
                self.remaining -= 1;
                None
            }
        }
    }
}

struct LogRenderer {
    pace: Duration,
    log_every: u64,
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &Frame<'_>) -> SimResult<()> {
        if !frame.contacts.is_empty() {
            debug!(frame = frame.index, pairs = ?frame.contacts, "contacts");
        }
        if self.log_every > 0 && frame.index % self.log_every == 0 {
            for body in frame.bodies {
                let c = body.color();
                info!(
                    frame = frame.index,
                    id = body.id,
                    x = body.pos().x,
                    y = body.pos().y,
                    rgba = %format!("{},{},{},{}", c.r, c.g, c.b, c.a),
                    "body"
                );
            }
        }
        if !self.pace.is_zero() {
            std::thread::sleep(self.pace);
        }
        Ok(())
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    SimConfig::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_ref())?;
    let driver = FrameDriver::from_config(SystemClock::new(), &config)
        .context("failed to build scene")?;

    let mut events = FrameBudget { remaining: cli.frames };
    let mut renderer = LogRenderer {
        pace: Duration::from_millis(cli.frame_ms),
        log_every: cli.log_every,
    };

    let summary = driver.run(&mut events, &mut renderer).context("simulation aborted")?;
    info!(
        frames = summary.frames,
        simulated_seconds = summary.simulated_seconds,
        "done"
    );
    Ok(())
}
