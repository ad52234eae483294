// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Animation lock duration and step fallbacks
//! - **Layout**: Desktop breakpoint
//! - **Markers**: Selectors identifying the page structure
//! - **Classes**: State classes written back to the page

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default animation lock duration after a smooth scroll request (in milliseconds).
/// Covers the typical native smooth-scroll duration of 250-450ms.
pub const DEFAULT_LOCK_MS: u32 = 420;

/// Minimum animation lock duration (in milliseconds).
pub const MIN_LOCK_MS: u32 = 50;

/// Maximum animation lock duration (in milliseconds).
pub const MAX_LOCK_MS: u32 = 5_000;

/// Gap between gallery items when the track declares none.
pub const DEFAULT_FALLBACK_GAP: f64 = 20.0;

/// Minimum fallback gap (in pixels).
pub const MIN_FALLBACK_GAP: f64 = 0.0;

/// Maximum fallback gap (in pixels).
pub const MAX_FALLBACK_GAP: f64 = 1_000.0;

/// Fraction of the wrapper width scrolled when no item exists yet.
pub const DEFAULT_FALLBACK_WIDTH_RATIO: f64 = 0.8;

/// Minimum wrapper width ratio.
pub const MIN_FALLBACK_WIDTH_RATIO: f64 = 0.1;

/// Maximum wrapper width ratio.
pub const MAX_FALLBACK_WIDTH_RATIO: f64 = 1.0;

/// Opacity applied to a disabled arrow.
pub const DISABLED_ARROW_OPACITY: &str = "0.5";

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Viewport width above which the desktop layout applies.
pub const DEFAULT_DESKTOP_BREAKPOINT: u32 = 900;

/// Minimum desktop breakpoint.
pub const MIN_DESKTOP_BREAKPOINT: u32 = 1;

/// Maximum desktop breakpoint.
pub const MAX_DESKTOP_BREAKPOINT: u32 = 10_000;

// ==========================================================================
// Marker Defaults
// ==========================================================================

pub const GALLERY_WRAPPER: &str = ".gallery-wrapper";
pub const GALLERY_TRACK: &str = ".gallery-track";
pub const GALLERY_ITEM: &str = ".gallery-item";
pub const ARROW_LEFT: &str = ".arrow.left";
pub const ARROW_RIGHT: &str = ".arrow.right";
pub const FADE_IMAGE: &str = "img.fade-in";
pub const HEADER: &str = "header";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_LIST: &str = "nav ul";
pub const NAV_PARENT: &str = ".nav-parent";
pub const NAV_LINK: &str = "a";
pub const NAV_CARET: &str = ".nav-caret";

// ==========================================================================
// Class Defaults
// ==========================================================================

pub const LOADED_CLASS: &str = "loaded";
pub const LOADER_CLASS: &str = "image-loader";
pub const NAV_OPEN_CLASS: &str = "nav-open";
pub const ACTIVE_CLASS: &str = "active";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Lock validation
    assert!(MIN_LOCK_MS > 0);
    assert!(MAX_LOCK_MS >= MIN_LOCK_MS);
    assert!(DEFAULT_LOCK_MS >= MIN_LOCK_MS);
    assert!(DEFAULT_LOCK_MS <= MAX_LOCK_MS);

    // Step fallback validation
    assert!(MIN_FALLBACK_GAP >= 0.0);
    assert!(MAX_FALLBACK_GAP >= MIN_FALLBACK_GAP);
    assert!(DEFAULT_FALLBACK_GAP >= MIN_FALLBACK_GAP);
    assert!(DEFAULT_FALLBACK_GAP <= MAX_FALLBACK_GAP);
    assert!(MIN_FALLBACK_WIDTH_RATIO > 0.0);
    assert!(MAX_FALLBACK_WIDTH_RATIO >= MIN_FALLBACK_WIDTH_RATIO);
    assert!(DEFAULT_FALLBACK_WIDTH_RATIO >= MIN_FALLBACK_WIDTH_RATIO);
    assert!(DEFAULT_FALLBACK_WIDTH_RATIO <= MAX_FALLBACK_WIDTH_RATIO);

    // Breakpoint validation
    assert!(MIN_DESKTOP_BREAKPOINT > 0);
    assert!(MAX_DESKTOP_BREAKPOINT >= MIN_DESKTOP_BREAKPOINT);
    assert!(DEFAULT_DESKTOP_BREAKPOINT >= MIN_DESKTOP_BREAKPOINT);
    assert!(DEFAULT_DESKTOP_BREAKPOINT <= MAX_DESKTOP_BREAKPOINT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_defaults_are_valid() {
        assert_eq!(DEFAULT_LOCK_MS, 420);
        assert!(DEFAULT_LOCK_MS >= MIN_LOCK_MS);
        assert!(DEFAULT_LOCK_MS <= MAX_LOCK_MS);
    }

    #[test]
    fn breakpoint_defaults_are_valid() {
        assert_eq!(DEFAULT_DESKTOP_BREAKPOINT, 900);
        assert!(DEFAULT_DESKTOP_BREAKPOINT >= MIN_DESKTOP_BREAKPOINT);
        assert!(DEFAULT_DESKTOP_BREAKPOINT <= MAX_DESKTOP_BREAKPOINT);
    }

    #[test]
    fn step_fallbacks_match_page_conventions() {
        assert_eq!(DEFAULT_FALLBACK_GAP, 20.0);
        assert_eq!(DEFAULT_FALLBACK_WIDTH_RATIO, 0.8);
    }
}
