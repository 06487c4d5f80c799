//! State management module
//!
//! This module contains the countdown state owned by the timer engine.

pub mod timer_state;

// Re-export main types
pub use timer_state::{TimerState, MAX_DURATION_SECS};
