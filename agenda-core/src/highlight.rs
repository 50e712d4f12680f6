//! Per-day highlighting hooks for the week grid.

use crate::day::Day;

/// Decides which days the grid highlights. A highlighted day may have its
/// morning and/or evening half marked as well.
pub trait HighlightDecorator {
    /// ARGB colour of the highlight line.
    fn highlight_line_color(&self) -> u32 {
        0
    }

    /// ARGB colour of highlighted day numbers.
    fn highlight_text_color(&self) -> u32 {
        0
    }

    fn highlight_past(&self) -> bool {
        false
    }

    fn is_highlighted(&self, day: &Day) -> bool;

    fn highlight_morning(&self, _day: &Day) -> bool {
        false
    }

    fn highlight_evening(&self, _day: &Day) -> bool {
        false
    }
}

/// Highlights nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHighlight;

impl HighlightDecorator for NoHighlight {
    fn is_highlighted(&self, _day: &Day) -> bool {
        false
    }
}
