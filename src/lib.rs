//! Radial Countdown - a reusable countdown control engine
//!
//! This library counts down from a configured duration to zero, drives a
//! circular progress indicator whose sweep angle tracks elapsed time, and
//! survives the host being suspended mid-countdown by persisting a snapshot
//! and reconciling it against wall-clock time on resumption. Rendering,
//! persistence and event delivery go through injected collaborator traits.

pub mod config;
pub mod control;
pub mod delegate;
pub mod engine;
pub mod geometry;
pub mod render;
pub mod snapshot;
pub mod state;
mod tasks;

// Re-export commonly used types
pub use config::{ArcDashPattern, Color, ControlConfig, MAX_ARC_WIDTH, MIN_ARC_WIDTH};
pub use control::RadialCountdown;
pub use delegate::CountdownDelegate;
pub use engine::{ResumeOutcome, TickOutcome, TimerEngine, SETTLE_ANIMATION_SECS};
pub use render::{ArcRenderer, Bounds};
pub use snapshot::{MemorySnapshotStore, Snapshot, SnapshotStore};
pub use state::{TimerState, MAX_DURATION_SECS};
