//! Recording doubles for the renderer and delegate collaborators
//!
//! Clones share their recordings, so a test keeps a handle for assertions
//! after moving a clone into the engine.

#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;

use radial_countdown::{ArcRenderer, Color, CountdownDelegate};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    Fill(Color),
    Arc {
        sweep_angle: f64,
        dash: &'static [f32],
        stroke_width: f64,
        color: Color,
    },
    Animate {
        from_fraction: f64,
        to_fraction: f64,
        duration_secs: u32,
    },
    CounterText(String),
    CounterVisible(bool),
    CounterColor(Color),
}

#[derive(Clone, Default)]
pub struct RecordingRenderer {
    calls: Arc<Mutex<Vec<RenderCall>>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    /// All animate instructions as (from, to, duration) triples.
    pub fn animations(&self) -> Vec<(f64, f64, u32)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                RenderCall::Animate {
                    from_fraction,
                    to_fraction,
                    duration_secs,
                } => Some((*from_fraction, *to_fraction, *duration_secs)),
                _ => None,
            })
            .collect()
    }

    pub fn last_counter_text(&self) -> Option<String> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::CounterText(text) => Some(text.clone()),
                _ => None,
            })
    }

    pub fn last_counter_visible(&self) -> Option<bool> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::CounterVisible(visible) => Some(*visible),
                _ => None,
            })
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl ArcRenderer for RecordingRenderer {
    fn draw_fill(&mut self, color: Color) {
        self.calls.lock().push(RenderCall::Fill(color));
    }

    fn draw_arc(&mut self, sweep_angle: f64, dash: &'static [f32], stroke_width: f64, color: Color) {
        self.calls.lock().push(RenderCall::Arc {
            sweep_angle,
            dash,
            stroke_width,
            color,
        });
    }

    fn animate_arc(&mut self, from_fraction: f64, to_fraction: f64, duration_secs: u32) {
        self.calls.lock().push(RenderCall::Animate {
            from_fraction,
            to_fraction,
            duration_secs,
        });
    }

    fn set_counter_text(&mut self, text: &str) {
        self.calls
            .lock()
            .push(RenderCall::CounterText(text.to_string()));
    }

    fn set_counter_visible(&mut self, visible: bool) {
        self.calls.lock().push(RenderCall::CounterVisible(visible));
    }

    fn set_counter_color(&mut self, color: Color) {
        self.calls.lock().push(RenderCall::CounterColor(color));
    }
}

#[derive(Clone, Default)]
pub struct RecordingDelegate {
    ticks: Arc<Mutex<Vec<u32>>>,
    completions: Arc<Mutex<u32>>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining counts reported through `ticked`, in order.
    pub fn ticks(&self) -> Vec<u32> {
        self.ticks.lock().clone()
    }

    /// Number of `completed` callbacks received.
    pub fn completions(&self) -> u32 {
        *self.completions.lock()
    }
}

impl CountdownDelegate for RecordingDelegate {
    fn ticked(&mut self, remaining: u32) {
        self.ticks.lock().push(remaining);
    }

    fn completed(&mut self) {
        *self.completions.lock() += 1;
    }
}
