//! Pure geometry and percentage model
//!
//! Maps countdown state to a drawable sweep angle and the counter display
//! text. Everything here is a pure function of its inputs; the engine calls
//! into this module and hands the results to the renderer collaborator.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::config::ArcDashPattern;

/// Angle of the arc start position, 12 o'clock in a coordinate system where
/// zero is the positive x axis.
pub const ARC_START_ANGLE: f64 = -FRAC_PI_2;

/// Offset keeping the arc path from closing into a full circle, which
/// renders ambiguously. A renderer artifact workaround, not a numerical
/// requirement.
pub const START_END_DIFFERENTIAL: f64 = 0.01;

/// One full revolution in radians.
pub const FULL_CIRCLE_RADIANS: f64 = TAU;

/// Stroke width contributed by each configured arc width unit, as a
/// proportion of the drawable edge length.
pub const ARC_WIDTH_INCREMENT: f64 = 0.015;

/// Fraction of the countdown already elapsed, in `[0.0, 1.0]`.
///
/// A zero duration yields `0.0`; an idle control draws an empty arc rather
/// than dividing by zero.
pub fn completion_fraction(duration: u32, remaining: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    f64::from(duration - remaining.min(duration)) / f64::from(duration)
}

/// Angular span of the progress arc for a completion fraction, swept
/// clockwise from [`ARC_START_ANGLE`].
pub fn sweep_angle(fraction: f64) -> f64 {
    fraction * FULL_CIRCLE_RADIANS + START_END_DIFFERENTIAL
}

/// Absolute end angle of the progress arc for a completion fraction.
pub fn arc_end_angle(fraction: f64) -> f64 {
    ARC_START_ANGLE - sweep_angle(fraction)
}

/// Stroke width in drawable units for a configured arc width.
pub fn arc_stroke_width(edge: f64, arc_width: u8) -> f64 {
    edge * ARC_WIDTH_INCREMENT * f64::from(arc_width)
}

/// Dash segments as alternating (draw, gap) lengths for the outer arc.
pub fn dash_segments(pattern: ArcDashPattern) -> &'static [f32] {
    match pattern {
        ArcDashPattern::None => &[],
        ArcDashPattern::Narrow => &[2.0, 1.0],
        ArcDashPattern::Medium => &[4.0, 1.0],
        ArcDashPattern::Wide => &[6.0, 1.0],
    }
}

/// Counter display text for a remaining second count, formatted `M:SS` with
/// unpadded minutes and zero-padded seconds.
pub fn format_remaining(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
