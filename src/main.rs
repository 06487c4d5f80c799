//! Radial Countdown - terminal demo for the countdown control
//!
//! Drives the control with console collaborators: draw and animate
//! instructions go to the log, the counter text is printed once per second,
//! and the snapshot store is a JSON file so the countdown position survives
//! process restarts. SIGUSR1 triggers the host-suspending hook, SIGUSR2 the
//! host-resuming hook, SIGINT/SIGTERM stop the countdown and exit.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use futures::stream::StreamExt;
use signal_hook::consts::{SIGINT, SIGTERM, SIGUSR1, SIGUSR2};
use signal_hook_tokio::Signals;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use radial_countdown::{
    ArcDashPattern, ArcRenderer, Color, ControlConfig, CountdownDelegate, RadialCountdown,
    SnapshotStore,
};

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "radial-countdown")]
#[command(about = "Terminal demo for the radial countdown control")]
#[command(version)]
struct Config {
    /// Countdown duration in seconds
    #[arg(short, long, default_value = "15")]
    duration: u32,

    /// Arc width between 1 and 10
    #[arg(long, default_value = "3")]
    arc_width: u8,

    /// Dash pattern for the outer arc: none, narrow, medium or wide
    #[arg(long, default_value = "none", value_parser = parse_dash_pattern)]
    dash_pattern: ArcDashPattern,

    /// File the countdown snapshot is persisted to
    #[arg(long, default_value = "radial-countdown-snapshot.json")]
    snapshot_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Config {
    /// Get the appropriate log level based on verbose flag
    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_dash_pattern(value: &str) -> Result<ArcDashPattern, String> {
    match value {
        "none" => Ok(ArcDashPattern::None),
        "narrow" => Ok(ArcDashPattern::Narrow),
        "medium" => Ok(ArcDashPattern::Medium),
        "wide" => Ok(ArcDashPattern::Wide),
        other => Err(format!("unknown dash pattern: {}", other)),
    }
}

/// Renderer collaborator that logs drawing instructions
struct ConsoleRenderer;

impl ArcRenderer for ConsoleRenderer {
    fn draw_fill(&mut self, color: Color) {
        debug!("draw fill {:?}", color);
    }

    fn draw_arc(&mut self, sweep_angle: f64, dash: &'static [f32], stroke_width: f64, color: Color) {
        debug!(
            "draw arc sweeping {:.3} rad, dash {:?}, stroke {:.2}, {:?}",
            sweep_angle, dash, stroke_width, color
        );
    }

    fn animate_arc(&mut self, from_fraction: f64, to_fraction: f64, duration_secs: u32) {
        debug!(
            "animate arc {:.3} -> {:.3} over {}s",
            from_fraction, to_fraction, duration_secs
        );
    }

    fn set_counter_text(&mut self, text: &str) {
        info!("counter {}", text);
    }

    fn set_counter_visible(&mut self, visible: bool) {
        debug!("counter visible: {}", visible);
    }

    fn set_counter_color(&mut self, color: Color) {
        debug!("counter color: {:?}", color);
    }
}

/// Snapshot store collaborator backed by a JSON file
struct FileSnapshotStore {
    path: PathBuf,
    entries: HashMap<String, i64>,
}

impl FileSnapshotStore {
    fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("ignoring unreadable snapshot file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn persist(&self) {
        let contents = match serde_json::to_string_pretty(&self.entries) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("failed to encode snapshot: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, contents) {
            warn!("failed to persist snapshot file {}: {}", self.path.display(), e);
        }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn put(&mut self, key: &str, value: i64) {
        self.entries.insert(key.to_string(), value);
        self.persist();
    }

    fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.persist();
        }
    }
}

/// Countdown events forwarded from the delegate to the main loop
enum CountdownEvent {
    Ticked(u32),
    Completed,
}

/// Delegate collaborator feeding the main select loop
struct ChannelDelegate {
    events: mpsc::UnboundedSender<CountdownEvent>,
}

impl CountdownDelegate for ChannelDelegate {
    fn ticked(&mut self, remaining: u32) {
        let _ = self.events.send(CountdownEvent::Ticked(remaining));
    }

    fn completed(&mut self) {
        let _ = self.events.send(CountdownEvent::Completed);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("radial_countdown={}", config.log_level()))
        .init();

    info!("Starting radial countdown demo");
    info!(
        "Configuration: duration={}s, arc_width={}, dash_pattern={:?}",
        config.duration, config.arc_width, config.dash_pattern
    );

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let store = FileSnapshotStore::open(config.snapshot_file.clone());
    let mut control = RadialCountdown::new(
        Box::new(ConsoleRenderer),
        Box::new(store),
        Box::new(ChannelDelegate { events: event_tx }),
    );

    control.configure(ControlConfig {
        arc_width: config.arc_width,
        arc_dash_pattern: config.dash_pattern,
        ..Default::default()
    });
    control.start(config.duration);

    info!("Signals: SIGUSR1 suspends, SIGUSR2 resumes, SIGINT/SIGTERM stops");

    let mut signals = Signals::new([SIGTERM, SIGINT, SIGUSR1, SIGUSR2])?;

    loop {
        tokio::select! {
            Some(event) = event_rx.recv() => match event {
                CountdownEvent::Ticked(remaining) => {
                    debug!("delegate ticked, {}s remaining", remaining);
                }
                CountdownEvent::Completed => {
                    info!("Countdown completed");
                    break;
                }
            },
            Some(signal) = signals.next() => match signal {
                SIGUSR1 => {
                    info!("Host suspending");
                    control.on_host_suspending();
                }
                SIGUSR2 => {
                    info!("Host resuming");
                    control.on_host_resuming();
                }
                _ => {
                    info!("Shutdown signal received");
                    control.stop();
                    break;
                }
            },
        }
    }

    info!("Demo shutdown complete");
    Ok(())
}
