// SPDX-License-Identifier: MPL-2.0
//! Image fade-in sub-component with a loading placeholder.
//!
//! Every marked image gets a placeholder element right after it. The
//! placeholder is shown while the image loads and removed once the image
//! settles. Load errors settle the image too, so a broken image never stays
//! hidden behind its placeholder.

use crate::config::{ClassConfig, Markers};
use crate::dom::Dom;
use crate::error::Result;

/// How an image reached its final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Already complete when the placeholder was attached.
    Cached,
    /// The `load` event fired.
    Success,
    /// The `error` event fired.
    Error,
}

/// Loading state of one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded(Outcome),
}

/// Messages for the image loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The image finished loading.
    Loaded,
    /// The image failed to load.
    Failed,
}

/// Effects produced by the image loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect (already settled).
    None,
    /// The image settled with the given outcome.
    Settled(Outcome),
}

/// One marked image and its placeholder.
#[derive(Debug, Clone)]
pub struct ImageFade<N> {
    image: N,
    loader: Option<N>,
    state: LoadState,
    loaded_class: String,
}

impl<N: Clone + PartialEq + std::fmt::Debug> ImageFade<N> {
    /// Attaches a placeholder to every marked image on the page.
    pub fn discover<D: Dom<Node = N>>(
        dom: &mut D,
        markers: &Markers,
        classes: &ClassConfig,
    ) -> Result<Vec<Self>> {
        let images = dom.query_all(None, &markers.fade_image)?;
        images
            .into_iter()
            .map(|image| Self::attach(dom, image, classes))
            .collect()
    }

    /// Inserts the placeholder after `image` and settles at once if the image
    /// is already complete. Images without a parent get no placeholder.
    pub fn attach<D: Dom<Node = N>>(dom: &mut D, image: N, classes: &ClassConfig) -> Result<Self> {
        let loader = dom.create_element("div")?;
        dom.add_class(&loader, &classes.loader);
        dom.set_attribute(&loader, "aria-hidden", "true");
        dom.set_attribute(&loader, "hidden", "");
        let loader = dom.insert_after(&image, &loader).then_some(loader);

        let mut entry = Self {
            image,
            loader,
            state: LoadState::Pending,
            loaded_class: classes.loaded.clone(),
        };

        if dom.is_image_complete(&entry.image) {
            entry.settle(dom, Outcome::Cached);
        } else if let Some(loader) = &entry.loader {
            dom.remove_attribute(loader, "hidden");
        }
        Ok(entry)
    }

    /// Handle an image load message.
    pub fn handle<D: Dom<Node = N>>(&mut self, dom: &mut D, msg: Message) -> Effect {
        match msg {
            Message::Loaded => self.settle(dom, Outcome::Success),
            Message::Failed => self.settle(dom, Outcome::Error),
        }
    }

    fn settle<D: Dom<Node = N>>(&mut self, dom: &mut D, outcome: Outcome) -> Effect {
        if self.state != LoadState::Pending {
            return Effect::None;
        }
        self.state = LoadState::Loaded(outcome);
        dom.add_class(&self.image, &self.loaded_class);
        if let Some(loader) = self.loader.take() {
            if dom.parent(&loader).is_some() {
                dom.remove(&loader);
            }
        }
        log::trace!("image settled: {outcome:?}");
        Effect::Settled(outcome)
    }

    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_))
    }

    pub fn image(&self) -> &N {
        &self.image
    }

    /// The placeholder, while it is still attached.
    pub fn loader(&self) -> Option<&N> {
        self.loader.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::dom::{MemoryDocument, NodeId};
    use crate::test_utils::{fade_image_fixture, next_sibling};

    fn attach(doc: &mut MemoryDocument, image: NodeId) -> ImageFade<NodeId> {
        ImageFade::attach(doc, image, &Config::default().classes).expect("attach")
    }

    #[test]
    fn pending_image_shows_placeholder_after_it() {
        let mut doc = MemoryDocument::new();
        let image = fade_image_fixture(&mut doc, false);
        let entry = attach(&mut doc, image);

        let loader = *entry.loader().expect("placeholder attached");
        assert_eq!(next_sibling(&doc, image), Some(loader));
        assert!(doc.has_class(&loader, "image-loader"));
        assert_eq!(doc.attribute(&loader, "hidden"), None);
        assert_eq!(doc.attribute(&loader, "aria-hidden").as_deref(), Some("true"));
        assert_eq!(entry.state(), LoadState::Pending);
        assert!(!doc.has_class(&image, "loaded"));
    }

    #[test]
    fn cached_image_never_shows_placeholder() {
        let mut doc = MemoryDocument::new();
        let image = fade_image_fixture(&mut doc, true);
        let entry = attach(&mut doc, image);

        assert_eq!(entry.state(), LoadState::Loaded(Outcome::Cached));
        assert!(entry.loader().is_none());
        assert_eq!(next_sibling(&doc, image), None);
        assert!(doc.has_class(&image, "loaded"));
    }

    #[test]
    fn load_removes_placeholder_and_marks_loaded() {
        let mut doc = MemoryDocument::new();
        let image = fade_image_fixture(&mut doc, false);
        let mut entry = attach(&mut doc, image);

        assert_eq!(
            entry.handle(&mut doc, Message::Loaded),
            Effect::Settled(Outcome::Success)
        );
        assert!(doc.has_class(&image, "loaded"));
        assert_eq!(next_sibling(&doc, image), None);
        assert!(entry.loader().is_none());
    }

    #[test]
    fn error_settles_like_success() {
        let mut doc = MemoryDocument::new();
        let image = fade_image_fixture(&mut doc, false);
        let mut entry = attach(&mut doc, image);

        assert_eq!(
            entry.handle(&mut doc, Message::Failed),
            Effect::Settled(Outcome::Error)
        );
        assert!(entry.is_loaded());
        assert!(doc.has_class(&image, "loaded"));
        assert_eq!(next_sibling(&doc, image), None);
    }

    #[test]
    fn settles_exactly_once() {
        let mut doc = MemoryDocument::new();
        let image = fade_image_fixture(&mut doc, false);
        let mut entry = attach(&mut doc, image);

        entry.handle(&mut doc, Message::Failed);
        assert_eq!(entry.handle(&mut doc, Message::Loaded), Effect::None);
        assert_eq!(entry.state(), LoadState::Loaded(Outcome::Error));
        assert_eq!(next_sibling(&doc, image), None);
    }

    #[test]
    fn detached_image_still_settles() {
        let mut doc = MemoryDocument::new();
        let image = doc.detached("img");
        let mut entry = attach(&mut doc, image);

        assert!(entry.loader().is_none());
        assert_eq!(
            entry.handle(&mut doc, Message::Loaded),
            Effect::Settled(Outcome::Success)
        );
        assert!(doc.has_class(&image, "loaded"));
    }
}
