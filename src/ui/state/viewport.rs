// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Scroll geometry of a horizontally scrolling track: where it is, how far it
//! can go, how far one arrow click moves it, and what the arrows should show.

use crate::dom::Layout;

/// Horizontal scroll position of a track and its reachable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollGeometry {
    /// Raw scroll offset as reported by the track.
    pub offset: f64,
    /// Content width minus visible width; zero or negative when nothing scrolls.
    pub max_scroll: f64,
}

/// Presentation of the two arrows for a given geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowState {
    /// Content fits; neither arrow is shown.
    Hidden,
    Visible {
        left_disabled: bool,
        right_disabled: bool,
    },
}

impl ScrollGeometry {
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        Self {
            offset: layout.scroll_left,
            max_scroll: layout.max_scroll(),
        }
    }

    /// Offset clamped into `[0, max_scroll]` (zero when nothing scrolls).
    #[must_use]
    pub fn clamped_offset(&self) -> f64 {
        self.offset.min(self.max_scroll).max(0.0)
    }

    /// Target offset for moving by `delta`, or `None` when the move would be
    /// shorter than one pixel (already at that boundary).
    #[must_use]
    pub fn plan_advance(&self, delta: f64) -> Option<f64> {
        let current = self.clamped_offset();
        let target = (current + delta).min(self.max_scroll).max(0.0);
        if (target - current).abs() < 1.0 {
            None
        } else {
            Some(target.round())
        }
    }

    #[must_use]
    pub fn arrow_state(&self) -> ArrowState {
        if self.max_scroll <= 0.0 {
            return ArrowState::Hidden;
        }
        ArrowState::Visible {
            left_disabled: self.offset <= 0.0,
            right_disabled: self.offset >= self.max_scroll - 1.0,
        }
    }
}

/// Inputs for computing the per-click step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMetrics {
    /// Rendered width of the first item, if the track has any.
    pub item_width: Option<f64>,
    /// Parsed gap between items, if declared.
    pub gap: Option<f64>,
    /// Visible width of the gallery wrapper.
    pub wrapper_width: f64,
}

impl StepMetrics {
    /// Distance one arrow click advances, rounded to whole pixels.
    ///
    /// A zero gap counts as undeclared and falls back to `fallback_gap`.
    #[must_use]
    pub fn step(&self, fallback_gap: f64, fallback_width_ratio: f64) -> f64 {
        match self.item_width {
            Some(width) => {
                let gap = self.gap.filter(|gap| *gap != 0.0).unwrap_or(fallback_gap);
                (width + gap).round()
            }
            None => (self.wrapper_width * fallback_width_ratio).round(),
        }
    }
}

/// Parses the leading number of a CSS length the way `parseFloat` does:
/// `"24px"` is 24, `"1.5e1rem"` is 15, `"normal"` is `None`.
#[must_use]
pub fn parse_css_length(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    value[..end].parse().ok()
}
