// SPDX-License-Identifier: MPL-2.0
//! Page root state and the wiring between the document and the components.
//!
//! [`Page::setup`] discovers every gallery, fade-in image and the header
//! navigation once. Afterwards the host forwards browser events as
//! [`DomEvent`]s to [`Page::dispatch`], which routes them to the component
//! that owns the target and reports how the original event must be treated.

mod message;
mod update;

pub use message::DomEvent;

use crate::clock::Clock;
use crate::config::Config;
use crate::dom::Dom;
use crate::error::Result;
use crate::ui::carousel::{self, Gallery};
use crate::ui::image_loader::ImageFade;
use crate::ui::navbar::NavMenu;
use std::fmt;

/// Every behavior instance found on one page.
pub struct Page<N, C> {
    galleries: Vec<Gallery<N>>,
    images: Vec<ImageFade<N>>,
    nav: Option<NavMenu<N>>,
    clock: C,
}

impl<N: fmt::Debug, C> fmt::Debug for Page<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("galleries", &self.galleries.len())
            .field("images", &self.images.len())
            .field("nav", &self.nav.is_some())
            .finish_non_exhaustive()
    }
}

impl<N: Clone + PartialEq + fmt::Debug, C: Clock> Page<N, C> {
    /// Discovers and initializes every behavior on the page.
    ///
    /// Fails only when a configured marker is not a supported selector or the
    /// host cannot run a query. Missing elements never fail: the affected
    /// behavior is simply absent.
    pub fn setup<D: Dom<Node = N>>(dom: &mut D, config: &Config, clock: C) -> Result<Self> {
        let markers = config.compile_markers()?;
        let settings = carousel::Settings::new(config, &markers);

        let galleries = Gallery::discover(dom, &markers, &settings)?;
        let images = ImageFade::discover(dom, &markers, &config.classes)?;
        let nav = NavMenu::discover(
            dom,
            &markers,
            &config.classes,
            config.layout.desktop_breakpoint(),
        )?;

        log::debug!(
            "page setup: {} galleries, {} images, navigation {}",
            galleries.len(),
            images.len(),
            if nav.is_some() { "enabled" } else { "absent" }
        );

        Ok(Self {
            galleries,
            images,
            nav,
            clock,
        })
    }

    pub fn galleries(&self) -> &[Gallery<N>] {
        &self.galleries
    }

    pub fn images(&self) -> &[ImageFade<N>] {
        &self.images
    }

    pub fn nav(&self) -> Option<&NavMenu<N>> {
        self.nav.as_ref()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::dom::MemoryDocument;
    use crate::error::Error;
    use crate::test_utils::{fade_image_fixture, gallery_fixture, nav_fixture, GalleryShape};

    #[test]
    fn setup_on_empty_page_finds_nothing() {
        let mut doc = MemoryDocument::new();
        let page = Page::setup(&mut doc, &Config::default(), ManualClock::default())
            .expect("setup");
        assert!(page.galleries().is_empty());
        assert!(page.images().is_empty());
        assert!(page.nav().is_none());
    }

    #[test]
    fn setup_discovers_every_behavior() {
        let mut doc = MemoryDocument::new();
        gallery_fixture(&mut doc, GalleryShape::default());
        gallery_fixture(&mut doc, GalleryShape::default());
        fade_image_fixture(&mut doc, false);
        nav_fixture(&mut doc, 2);

        let page = Page::setup(&mut doc, &Config::default(), ManualClock::default())
            .expect("setup");
        assert_eq!(page.galleries().len(), 2);
        assert_eq!(page.images().len(), 1);
        assert_eq!(page.nav().map(|nav| nav.submenus().len()), Some(2));
    }

    #[test]
    fn unsupported_marker_fails_setup() {
        let mut doc = MemoryDocument::new();
        let mut config = Config::default();
        config.markers.gallery_track = "#track".to_string();

        let err = Page::setup(&mut doc, &config, ManualClock::default()).unwrap_err();
        assert!(matches!(err, Error::Selector { .. }));
    }

    #[test]
    fn debug_output_summarizes_contents() {
        let mut doc = MemoryDocument::new();
        fade_image_fixture(&mut doc, true);
        let page = Page::setup(&mut doc, &Config::default(), ManualClock::default())
            .expect("setup");
        let rendered = format!("{page:?}");
        assert!(rendered.contains("images: 1"));
    }
}
