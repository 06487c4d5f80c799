//! One-second countdown ticker task

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::engine::{TickOutcome, TimerEngine};

pub(crate) const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Spawn the recurring one-second ticker for the given engine epoch.
///
/// The task exits on its own when the countdown finishes or the epoch is
/// superseded; the control additionally aborts the handle on stop and
/// restart so no dangling periodic callback outlives its countdown.
pub(crate) fn spawn_ticker(engine: Arc<Mutex<TimerEngine>>, epoch: u64) -> JoinHandle<()> {
    tokio::spawn(run_ticker(engine, epoch))
}

async fn run_ticker(engine: Arc<Mutex<TimerEngine>>, epoch: u64) {
    // First fire lands one full period after start. Missed ticks coalesce
    // rather than burst: after a host stall the wall-clock reconciliation is
    // the authority, not a flood of catch-up ticks.
    let mut interval = time::interval_at(time::Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        match engine.lock().tick(epoch) {
            TickOutcome::Ticked(_) => {}
            TickOutcome::Finished => break,
            TickOutcome::Stale => {
                debug!("ticker superseded, exiting");
                break;
            }
        }
    }
}
