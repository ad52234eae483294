// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration: which selectors identify the
//! page structure, which classes get written back, and the carousel/layout
//! tuning values. Configuration is plain TOML; every field has a default, so an
//! empty document is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use pagewire::config::{self, Config};
//!
//! let config = config::from_toml_str(
//!     r#"
//!     [carousel]
//!     lock_ms = 300
//!
//!     [markers]
//!     gallery_wrapper = ".slider"
//!     "#,
//! )
//! .expect("valid toml");
//!
//! assert_eq!(config.carousel.lock_duration().value(), 300);
//! assert_eq!(config.markers.gallery_wrapper, ".slider");
//! assert_eq!(config.markers.gallery_track, ".gallery-track");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::newtypes::{DesktopBreakpoint, FallbackGap, LockDuration, WidthRatio};
use crate::dom::Selector;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub carousel: CarouselConfig,
    pub layout: LayoutConfig,
    pub markers: MarkerConfig,
    pub classes: ClassConfig,
}

impl Config {
    /// Shorthand for `self.markers.compile()`.
    pub fn compile_markers(&self) -> Result<Markers> {
        self.markers.compile()
    }
}

/// Carousel tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub lock_ms: u32,
    pub fallback_gap: f64,
    pub fallback_width_ratio: f64,
    /// Release the animation lock as soon as the track reports `scrollend`
    /// instead of waiting for the full lock duration.
    pub release_on_scroll_end: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            lock_ms: DEFAULT_LOCK_MS,
            fallback_gap: DEFAULT_FALLBACK_GAP,
            fallback_width_ratio: DEFAULT_FALLBACK_WIDTH_RATIO,
            release_on_scroll_end: false,
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn lock_duration(&self) -> LockDuration {
        LockDuration::new(self.lock_ms)
    }

    #[must_use]
    pub fn fallback_gap(&self) -> FallbackGap {
        FallbackGap::new(self.fallback_gap)
    }

    #[must_use]
    pub fn fallback_width_ratio(&self) -> WidthRatio {
        WidthRatio::new(self.fallback_width_ratio)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub desktop_breakpoint: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn desktop_breakpoint(&self) -> DesktopBreakpoint {
        DesktopBreakpoint::new(self.desktop_breakpoint)
    }
}

/// Selector strings identifying the structural elements of the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    pub gallery_wrapper: String,
    pub gallery_track: String,
    pub gallery_item: String,
    pub arrow_left: String,
    pub arrow_right: String,
    pub fade_image: String,
    pub header: String,
    pub nav_toggle: String,
    pub nav_list: String,
    pub nav_parent: String,
    pub nav_link: String,
    pub nav_caret: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            gallery_wrapper: GALLERY_WRAPPER.to_string(),
            gallery_track: GALLERY_TRACK.to_string(),
            gallery_item: GALLERY_ITEM.to_string(),
            arrow_left: ARROW_LEFT.to_string(),
            arrow_right: ARROW_RIGHT.to_string(),
            fade_image: FADE_IMAGE.to_string(),
            header: HEADER.to_string(),
            nav_toggle: NAV_TOGGLE.to_string(),
            nav_list: NAV_LIST.to_string(),
            nav_parent: NAV_PARENT.to_string(),
            nav_link: NAV_LINK.to_string(),
            nav_caret: NAV_CARET.to_string(),
        }
    }
}

/// Marker selectors parsed once, ready for querying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub gallery_wrapper: Selector,
    pub gallery_track: Selector,
    pub gallery_item: Selector,
    pub arrow_left: Selector,
    pub arrow_right: Selector,
    pub fade_image: Selector,
    pub header: Selector,
    pub nav_toggle: Selector,
    pub nav_list: Selector,
    pub nav_parent: Selector,
    pub nav_link: Selector,
    /// Links that are direct children of a submenu parent.
    pub nav_parent_link: Selector,
    pub nav_caret: Selector,
}

impl MarkerConfig {
    /// Parses every marker, failing on the first unsupported selector.
    pub fn compile(&self) -> Result<Markers> {
        let nav_parent_link = format!("{} > {}", self.nav_parent, self.nav_link);
        Ok(Markers {
            gallery_wrapper: Selector::parse(&self.gallery_wrapper)?,
            gallery_track: Selector::parse(&self.gallery_track)?,
            gallery_item: Selector::parse(&self.gallery_item)?,
            arrow_left: Selector::parse(&self.arrow_left)?,
            arrow_right: Selector::parse(&self.arrow_right)?,
            fade_image: Selector::parse(&self.fade_image)?,
            header: Selector::parse(&self.header)?,
            nav_toggle: Selector::parse(&self.nav_toggle)?,
            nav_list: Selector::parse(&self.nav_list)?,
            nav_parent: Selector::parse(&self.nav_parent)?,
            nav_link: Selector::parse(&self.nav_link)?,
            nav_parent_link: Selector::parse(&nav_parent_link)?,
            nav_caret: Selector::parse(&self.nav_caret)?,
        })
    }
}

/// Class names written onto the page to expose state to the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassConfig {
    pub loaded: String,
    pub loader: String,
    pub nav_open: String,
    pub active: String,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            loaded: LOADED_CLASS.to_string(),
            loader: LOADER_CLASS.to_string(),
            nav_open: NAV_OPEN_CLASS.to_string(),
            active: ACTIVE_CLASS.to_string(),
        }
    }
}

pub fn from_toml_str(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Loads a configuration file. A file that is not valid TOML yields the
/// defaults rather than an error.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match from_toml_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid config at {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
