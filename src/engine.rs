//! Countdown timer engine
//!
//! Owns the countdown state machine and drives the renderer, snapshot store
//! and delegate collaborators. All transitions are synchronous and
//! infallible: invalid inputs are clamped rather than rejected, and missing
//! persistence degrades to a no-op. The engine is driven from exactly one
//! place at a time; the control serializes host calls and the ticker task
//! behind a single mutex, and a ticker epoch makes any straggling tick from
//! a replaced ticker inert.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    config::ControlConfig,
    delegate::CountdownDelegate,
    geometry,
    render::{ArcRenderer, Bounds},
    snapshot::{Snapshot, SnapshotStore},
    state::TimerState,
};

/// Duration of the settle animation played when a countdown is stopped
/// mid-flight.
pub const SETTLE_ANIMATION_SECS: u32 = 1;

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown decremented to the contained remaining count.
    Ticked(u32),
    /// The countdown completed and the engine reset; the ticker must stop.
    Finished,
    /// The tick came from a replaced or cancelled ticker, or the engine is
    /// not running; nothing happened and the ticker must stop.
    Stale,
}

/// Result of reconciling a persisted snapshot on host resumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeOutcome {
    /// No usable snapshot was found; state is untouched.
    NoSnapshot,
    /// The countdown position was restored with the contained remaining
    /// seconds.
    Reconciled(u32),
    /// The countdown fully elapsed while suspended and the engine reset.
    /// No completion callback is fired for this reconciliation.
    Expired,
}

/// The countdown state machine.
///
/// Hosts normally drive this through [`crate::control::RadialCountdown`],
/// which owns the ticker task. The engine itself can also be driven
/// manually: `start` returns the ticker epoch expected by `tick`.
pub struct TimerEngine {
    state: TimerState,
    config: ControlConfig,
    epoch: u64,
    renderer: Box<dyn ArcRenderer>,
    store: Box<dyn SnapshotStore>,
    delegate: Box<dyn CountdownDelegate>,
}

impl TimerEngine {
    pub fn new(
        renderer: Box<dyn ArcRenderer>,
        store: Box<dyn SnapshotStore>,
        delegate: Box<dyn CountdownDelegate>,
    ) -> Self {
        let mut engine = Self {
            state: TimerState::default(),
            config: ControlConfig::default(),
            epoch: 0,
            renderer,
            store,
            delegate,
        };
        engine.apply_config(ControlConfig::default());
        engine
    }

    /// Current countdown state.
    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Currently applied configuration.
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Fraction of the current countdown already elapsed.
    pub fn completion_fraction(&self) -> f64 {
        geometry::completion_fraction(self.state.duration(), self.state.remaining())
    }

    /// Apply a configuration, clamping out-of-range values.
    ///
    /// Safe to call before any countdown and between countdowns; never
    /// starts or stops anything.
    pub fn apply_config(&mut self, config: ControlConfig) {
        self.config = config.clamped();
        self.renderer.set_counter_color(self.config.counter_text_color);
        let visible = !self.config.hide_inactive_counter || self.state.duration() > 0;
        self.renderer.set_counter_visible(visible);
        self.update_counter_text();
    }

    /// Begin a countdown of the requested duration, clamped to the one-hour
    /// display ceiling.
    ///
    /// Replaces any countdown already in progress; the returned epoch
    /// identifies the one live ticker and invalidates every earlier one.
    pub fn start(&mut self, requested_secs: u32) -> u64 {
        let epoch = self.invalidate_ticker();
        self.state.set_duration(requested_secs);
        self.state.set_remaining(self.state.duration());
        self.state.set_running(true);
        info!("countdown started for {}s", self.state.duration());
        self.renderer.set_counter_visible(true);
        self.update_counter_text();
        self.renderer.animate_arc(0.0, 1.0, self.state.duration());
        epoch
    }

    /// Advance the countdown by one second.
    ///
    /// The completion callback fires on the tick after the remaining count
    /// reaches zero, matching the displayed `0:00` second.
    pub fn tick(&mut self, epoch: u64) -> TickOutcome {
        if epoch != self.epoch || !self.state.is_running() {
            return TickOutcome::Stale;
        }
        if self.state.remaining() == 0 {
            self.delegate.completed();
            self.invalidate_ticker();
            self.reset();
            info!("countdown completed");
            return TickOutcome::Finished;
        }
        let remaining = self.state.decrement();
        self.delegate.ticked(remaining);
        self.update_counter_text();
        debug!("countdown tick, {}s remaining", remaining);
        TickOutcome::Ticked(remaining)
    }

    /// Stop the countdown.
    ///
    /// A countdown in progress gets a one-second settle animation bringing
    /// the arc to its resting position; stopping an idle engine issues no
    /// animation at all.
    pub fn stop(&mut self) {
        self.invalidate_ticker();
        if self.state.duration() > 0 {
            let fraction = self.completion_fraction();
            self.renderer
                .animate_arc(fraction, 1.0, SETTLE_ANIMATION_SECS);
            self.reset();
            info!("countdown stopped");
        }
        self.renderer
            .set_counter_text(&geometry::format_remaining(0));
    }

    /// Persist the countdown position ahead of a host suspension.
    ///
    /// Advisory only: the countdown state is untouched, since the host may
    /// or may not actually pause the process.
    pub fn suspend(&mut self, now: DateTime<Utc>) {
        let snapshot = Snapshot {
            captured_at: now.timestamp(),
            duration: self.state.duration(),
            remaining: self.state.remaining(),
        };
        snapshot.write_to(self.store.as_mut());
        debug!(
            "cached countdown snapshot, duration {}s remaining {}s",
            snapshot.duration, snapshot.remaining
        );
    }

    /// Reconcile the persisted position against wall-clock time after the
    /// host resumes.
    ///
    /// The snapshot is consumed by this call. A countdown that fully
    /// elapsed while suspended resets the engine without a completion
    /// callback; only a live tick reports completion.
    pub fn resume(&mut self, now: DateTime<Utc>) -> ResumeOutcome {
        let Some(snapshot) = Snapshot::read_from(self.store.as_ref()) else {
            debug!("no countdown snapshot to restore");
            return ResumeOutcome::NoSnapshot;
        };
        Snapshot::clear(self.store.as_mut());

        let elapsed = now.timestamp() - snapshot.captured_at;
        let reconciled = i64::from(snapshot.remaining) - elapsed;
        if reconciled < 0 {
            self.invalidate_ticker();
            self.reset();
            info!("countdown elapsed while suspended, resetting");
            return ResumeOutcome::Expired;
        }

        self.state.set_duration(snapshot.duration);
        // A wall clock stepped backwards would inflate the count; the setter
        // caps it at the restored duration.
        self.state
            .set_remaining(u32::try_from(reconciled).unwrap_or(u32::MAX));
        self.update_counter_text();
        let fraction = self.completion_fraction();
        self.renderer
            .animate_arc(fraction, 1.0, self.state.remaining());
        info!("countdown resumed with {}s remaining", self.state.remaining());
        ResumeOutcome::Reconciled(self.state.remaining())
    }

    /// Redraw the control into a drawable region.
    ///
    /// The region must be square; a non-square target is a host programming
    /// error and panics rather than attempting a degraded render.
    pub fn redraw(&mut self, bounds: Bounds) {
        assert!(
            bounds.is_square(),
            "countdown control requires a square (1:1) drawable region"
        );
        let fraction = self.completion_fraction();
        self.renderer.draw_fill(self.config.inner_color);
        self.renderer.draw_arc(
            geometry::sweep_angle(fraction),
            geometry::dash_segments(self.config.arc_dash_pattern),
            geometry::arc_stroke_width(bounds.width, self.config.arc_width),
            self.config.outer_color,
        );
        if self.state.duration() > 0 {
            self.renderer
                .animate_arc(fraction, 1.0, self.state.remaining());
            self.renderer.set_counter_visible(true);
        }
    }

    fn invalidate_ticker(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    fn reset(&mut self) {
        self.state.reset();
        if self.config.hide_inactive_counter {
            self.renderer.set_counter_visible(false);
        }
    }

    fn update_counter_text(&mut self) {
        let text = geometry::format_remaining(self.state.remaining());
        self.renderer.set_counter_text(&text);
    }
}
