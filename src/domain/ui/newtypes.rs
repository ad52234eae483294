// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DESKTOP_BREAKPOINT, DEFAULT_FALLBACK_GAP, DEFAULT_FALLBACK_WIDTH_RATIO,
    DEFAULT_LOCK_MS, MAX_DESKTOP_BREAKPOINT, MAX_FALLBACK_GAP, MAX_FALLBACK_WIDTH_RATIO,
    MAX_LOCK_MS, MIN_DESKTOP_BREAKPOINT, MIN_FALLBACK_GAP, MIN_FALLBACK_WIDTH_RATIO, MIN_LOCK_MS,
};
use std::time::Duration;

// =============================================================================
// DesktopBreakpoint
// =============================================================================

/// Viewport width separating the mobile layout from the desktop layout.
///
/// Widths strictly greater than the breakpoint are desktop widths; this is the
/// only place that comparison is made.
///
/// # Example
///
/// ```
/// use pagewire::domain::ui::DesktopBreakpoint;
///
/// let breakpoint = DesktopBreakpoint::default();
/// assert!(!breakpoint.is_desktop(900.0));
/// assert!(breakpoint.is_desktop(901.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopBreakpoint(u32);

impl DesktopBreakpoint {
    /// Creates a new breakpoint, clamping to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_DESKTOP_BREAKPOINT, MAX_DESKTOP_BREAKPOINT))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns whether a viewport of this width uses the desktop layout.
    #[must_use]
    pub fn is_desktop(self, viewport_width: f64) -> bool {
        viewport_width > f64::from(self.0)
    }
}

impl Default for DesktopBreakpoint {
    fn default() -> Self {
        Self(DEFAULT_DESKTOP_BREAKPOINT)
    }
}

// =============================================================================
// LockDuration
// =============================================================================

/// How long a carousel ignores further scroll requests after starting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockDuration(u32);

impl LockDuration {
    /// Creates a new lock duration in milliseconds, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(MIN_LOCK_MS, MAX_LOCK_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for LockDuration {
    fn default() -> Self {
        Self(DEFAULT_LOCK_MS)
    }
}

// =============================================================================
// FallbackGap
// =============================================================================

/// Gap added to the item width when the track declares no usable gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallbackGap(f64);

impl FallbackGap {
    /// Creates a new gap in pixels, clamping to the valid range.
    /// NaN yields the default.
    #[must_use]
    pub fn new(pixels: f64) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(MIN_FALLBACK_GAP, MAX_FALLBACK_GAP))
    }

    /// Returns the value in pixels.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for FallbackGap {
    fn default() -> Self {
        Self(DEFAULT_FALLBACK_GAP)
    }
}

// =============================================================================
// WidthRatio
// =============================================================================

/// Share of the wrapper width scrolled when a track has no items.
///
/// Always positive, so an advance without items still moves in the clicked
/// direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRatio(f64);

impl WidthRatio {
    /// Creates a new ratio, clamping to the valid range. NaN yields the default.
    #[must_use]
    pub fn new(ratio: f64) -> Self {
        if ratio.is_nan() {
            return Self::default();
        }
        Self(ratio.clamp(MIN_FALLBACK_WIDTH_RATIO, MAX_FALLBACK_WIDTH_RATIO))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for WidthRatio {
    fn default() -> Self {
        Self(DEFAULT_FALLBACK_WIDTH_RATIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_clamps_to_valid_range() {
        assert_eq!(DesktopBreakpoint::new(0).value(), MIN_DESKTOP_BREAKPOINT);
        assert_eq!(
            DesktopBreakpoint::new(u32::MAX).value(),
            MAX_DESKTOP_BREAKPOINT
        );
    }

    #[test]
    fn breakpoint_is_exclusive() {
        let breakpoint = DesktopBreakpoint::new(900);
        assert!(!breakpoint.is_desktop(800.0));
        assert!(!breakpoint.is_desktop(900.0));
        assert!(breakpoint.is_desktop(900.5));
        assert!(breakpoint.is_desktop(1200.0));
    }

    #[test]
    fn breakpoint_default_returns_expected_value() {
        assert_eq!(
            DesktopBreakpoint::default().value(),
            DEFAULT_DESKTOP_BREAKPOINT
        );
    }

    #[test]
    fn lock_duration_clamps_to_valid_range() {
        assert_eq!(LockDuration::new(0).value(), MIN_LOCK_MS);
        assert_eq!(LockDuration::new(60_000).value(), MAX_LOCK_MS);
        assert_eq!(LockDuration::new(420).value(), 420);
    }

    #[test]
    fn lock_duration_converts_to_duration() {
        assert_eq!(
            LockDuration::default().as_duration(),
            Duration::from_millis(420)
        );
    }

    #[test]
    fn fallback_gap_clamps_to_valid_range() {
        assert_eq!(FallbackGap::new(-5.0).value(), MIN_FALLBACK_GAP);
        assert_eq!(FallbackGap::new(1e9).value(), MAX_FALLBACK_GAP);
        assert_eq!(FallbackGap::new(f64::INFINITY).value(), MAX_FALLBACK_GAP);
        assert_eq!(FallbackGap::new(12.5).value(), 12.5);
    }

    #[test]
    fn fallback_gap_nan_returns_default() {
        assert_eq!(FallbackGap::new(f64::NAN), FallbackGap::default());
        assert_eq!(FallbackGap::default().value(), DEFAULT_FALLBACK_GAP);
    }

    #[test]
    fn width_ratio_clamps_to_valid_range() {
        assert_eq!(WidthRatio::new(-0.5).value(), MIN_FALLBACK_WIDTH_RATIO);
        assert_eq!(WidthRatio::new(0.0).value(), MIN_FALLBACK_WIDTH_RATIO);
        assert_eq!(WidthRatio::new(3.0).value(), MAX_FALLBACK_WIDTH_RATIO);
        assert_eq!(WidthRatio::new(0.5).value(), 0.5);
    }

    #[test]
    fn width_ratio_nan_returns_default() {
        assert_eq!(WidthRatio::new(f64::NAN).value(), DEFAULT_FALLBACK_WIDTH_RATIO);
    }
}
