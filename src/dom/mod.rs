// SPDX-License-Identifier: MPL-2.0
//! Document access for the page behaviors.
//!
//! The behaviors never talk to a browser directly. They go through the [`Dom`]
//! trait, which the `web` adapter implements over `web-sys` and
//! [`MemoryDocument`] implements in memory for tests and headless hosts.

pub mod memory;
pub mod selector;

pub use memory::{MemoryDocument, NodeId, ScrollRequest};
pub use selector::{Combinator, ElementTree, Selector};

use crate::error::Result;
use std::fmt;

/// Rendered box metrics of one element, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Layout {
    /// Border-box width (`offsetWidth`).
    pub offset_width: f64,
    /// Visible content width (`clientWidth`).
    pub client_width: f64,
    /// Full scrollable content width (`scrollWidth`).
    pub scroll_width: f64,
    /// Current horizontal scroll offset (`scrollLeft`).
    pub scroll_left: f64,
}

impl Layout {
    /// Furthest reachable horizontal scroll offset; zero or negative when the
    /// content fits.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        self.scroll_width - self.client_width
    }
}

/// The document operations the behaviors rely on.
///
/// Query methods can fail on real hosts; mutations are fire-and-forget and an
/// implementation that cannot apply one should log it and carry on.
pub trait Dom {
    /// Handle to one element.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Every element matching `selector`, in document order. With a scope,
    /// only descendants of that element are returned.
    fn query_all(
        &self,
        scope: Option<&Self::Node>,
        selector: &Selector,
    ) -> Result<Vec<Self::Node>>;

    /// First element matching `selector`.
    fn query(&self, scope: Option<&Self::Node>, selector: &Selector) -> Result<Option<Self::Node>> {
        Ok(self.query_all(scope, selector)?.into_iter().next())
    }

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Inclusive containment: a node contains itself.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
    fn add_class(&mut self, node: &Self::Node, class: &str);
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    fn set_class(&mut self, node: &Self::Node, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Sets or clears (`None`) an inline style property.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: Option<&str>);

    fn set_disabled(&mut self, node: &Self::Node, disabled: bool) {
        if disabled {
            self.set_attribute(node, "disabled", "");
        } else {
            self.remove_attribute(node, "disabled");
        }
    }

    fn layout(&self, node: &Self::Node) -> Layout;

    /// Resolved value of a computed style property; `None` when empty.
    fn computed_style(&self, node: &Self::Node, property: &str) -> Option<String>;

    /// Requests a smooth horizontal scroll of `node` to `left`.
    fn scroll_to(&mut self, node: &Self::Node, left: f64);

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> Result<Self::Node>;

    /// Inserts `node` as the next sibling of `reference`. Returns `false` when
    /// `reference` has no parent.
    fn insert_after(&mut self, reference: &Self::Node, node: &Self::Node) -> bool;

    /// Detaches `node` from its parent, if any.
    fn remove(&mut self, node: &Self::Node);

    /// Whether an image element has finished loading (successfully or not).
    fn is_image_complete(&self, node: &Self::Node) -> bool;

    /// Layout viewport width (`innerWidth`).
    fn viewport_width(&self) -> f64;
}
