//! Control configuration: colors, arc width and dash pattern

use serde::{Deserialize, Serialize};

/// Minimum configurable arc width.
pub const MIN_ARC_WIDTH: u8 = 1;
/// Maximum configurable arc width.
pub const MAX_ARC_WIDTH: u8 = 10;

/// An RGBA color handed to the renderer collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const GRAY: Color = Color::opaque(128, 128, 128);
    pub const BLUE: Color = Color::opaque(0, 0, 255);
    pub const WHITE: Color = Color::opaque(255, 255, 255);

    /// Create a fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Preset dash patterns for the outer arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcDashPattern {
    #[default]
    None,
    Narrow,
    Medium,
    Wide,
}

/// Configuration options for the countdown control.
///
/// All fields are optional from the host's point of view: `Default` matches
/// the documented defaults (gray fill, blue arc, white counter text, width 1,
/// no dash pattern, counter always visible). Invalid values are normalized
/// rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Inner fill color
    pub inner_color: Color,
    /// Outer arc color
    pub outer_color: Color,
    /// Counter text color
    pub counter_text_color: Color,
    /// Arc width as a 1-10 proportion of the view size, clamped on application
    pub arc_width: u8,
    /// Dash pattern for the outer arc
    pub arc_dash_pattern: ArcDashPattern,
    /// Display the counter text only while a countdown is active
    pub hide_inactive_counter: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            inner_color: Color::GRAY,
            outer_color: Color::BLUE,
            counter_text_color: Color::WHITE,
            arc_width: MIN_ARC_WIDTH,
            arc_dash_pattern: ArcDashPattern::None,
            hide_inactive_counter: false,
        }
    }
}

impl ControlConfig {
    /// Normalize the configuration, clamping the arc width into `[1, 10]`.
    pub fn clamped(mut self) -> Self {
        self.arc_width = self.arc_width.clamp(MIN_ARC_WIDTH, MAX_ARC_WIDTH);
        self
    }
}
