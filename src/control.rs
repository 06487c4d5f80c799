//! Countdown control orchestrator
//!
//! Wires the timer engine, geometry model, snapshot store and delegate
//! together and exposes the public configure / start / stop contract plus
//! the host lifecycle hooks. The engine sits behind a single mutex shared
//! with the ticker task, so host calls and ticks never run concurrently.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::{
    config::ControlConfig,
    delegate::CountdownDelegate,
    engine::{ResumeOutcome, TimerEngine},
    render::{ArcRenderer, Bounds},
    snapshot::SnapshotStore,
    state::TimerState,
    tasks::ticker,
};

/// The radial countdown control.
///
/// Collaborators are injected at construction: the renderer receives draw
/// and animate instructions, the snapshot store persists the countdown
/// position across host suspensions, and the delegate observes tick and
/// completion events. `start` and `stop` must be called from within a tokio
/// runtime, which carries the recurring one-second ticker.
pub struct RadialCountdown {
    engine: Arc<Mutex<TimerEngine>>,
    ticker: Option<JoinHandle<()>>,
}

impl RadialCountdown {
    pub fn new(
        renderer: Box<dyn ArcRenderer>,
        store: Box<dyn SnapshotStore>,
        delegate: Box<dyn CountdownDelegate>,
    ) -> Self {
        Self {
            engine: Arc::new(Mutex::new(TimerEngine::new(renderer, store, delegate))),
            ticker: None,
        }
    }

    /// Apply a configuration.
    ///
    /// Callable before any countdown starts and between countdowns to
    /// re-skin the control; never starts or stops a countdown.
    pub fn configure(&self, config: ControlConfig) {
        self.engine.lock().apply_config(config);
    }

    /// Start a countdown of the given duration in seconds.
    ///
    /// Calling this while a countdown is already running cleanly replaces
    /// it: the previous ticker is cancelled before the new one is spawned.
    pub fn start(&mut self, duration_secs: u32) {
        self.cancel_ticker();
        let epoch = self.engine.lock().start(duration_secs);
        self.ticker = Some(ticker::spawn_ticker(Arc::clone(&self.engine), epoch));
    }

    /// Stop the countdown and cancel the ticker.
    pub fn stop(&mut self) {
        self.cancel_ticker();
        self.engine.lock().stop();
    }

    /// The host is about to suspend; persist the countdown position.
    pub fn on_host_suspending(&self) {
        self.engine.lock().suspend(Utc::now());
    }

    /// The host resumed; reconcile the persisted position against
    /// wall-clock time.
    pub fn on_host_resuming(&mut self) {
        let outcome = self.engine.lock().resume(Utc::now());
        if let ResumeOutcome::Expired = outcome {
            self.cancel_ticker();
        }
    }

    /// Redraw into a drawable region, which must be square (1:1).
    pub fn redraw(&self, bounds: Bounds) {
        self.engine.lock().redraw(bounds);
    }

    /// Current countdown state.
    pub fn timer_state(&self) -> TimerState {
        self.engine.lock().state()
    }

    /// Currently applied configuration.
    pub fn config(&self) -> ControlConfig {
        self.engine.lock().config().clone()
    }

    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

impl Drop for RadialCountdown {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}
