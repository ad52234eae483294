// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and synthetic page fixtures.

// Re-export approx macros for convenient use in tests
pub use approx::assert_relative_eq;

use crate::dom::{Dom, Layout, MemoryDocument, NodeId};

/// Nodes of a gallery built by [`gallery_fixture`].
#[derive(Debug, Clone)]
pub struct GalleryNodes {
    pub wrapper: NodeId,
    pub track: NodeId,
    pub items: Vec<NodeId>,
    pub left: NodeId,
    pub right: NodeId,
}

/// Geometry of a gallery fixture.
#[derive(Debug, Clone, Copy)]
pub struct GalleryShape {
    pub items: usize,
    pub item_width: f64,
    pub gap: Option<&'static str>,
    pub client_width: f64,
    pub scroll_width: f64,
}

impl Default for GalleryShape {
    /// Five 200px items with a 20px gap in a 620px window (1100px of content).
    fn default() -> Self {
        Self {
            items: 5,
            item_width: 200.0,
            gap: Some("20px"),
            client_width: 620.0,
            scroll_width: 1100.0,
        }
    }
}

/// Appends `div.gallery-wrapper > (button.arrow.left, div.gallery-track, button.arrow.right)`
/// to the document root.
pub fn gallery_fixture(doc: &mut MemoryDocument, shape: GalleryShape) -> GalleryNodes {
    let root = doc.root();
    let wrapper = doc.append(root, "div", &["gallery-wrapper"]);
    let left = doc.append(wrapper, "button", &["arrow", "left"]);
    let track = doc.append(wrapper, "div", &["gallery-track"]);
    let right = doc.append(wrapper, "button", &["arrow", "right"]);

    doc.set_layout(
        wrapper,
        Layout {
            offset_width: shape.client_width + 80.0,
            client_width: shape.client_width + 80.0,
            scroll_width: shape.client_width + 80.0,
            scroll_left: 0.0,
        },
    );
    doc.set_layout(
        track,
        Layout {
            offset_width: shape.client_width,
            client_width: shape.client_width,
            scroll_width: shape.scroll_width,
            scroll_left: 0.0,
        },
    );
    if let Some(gap) = shape.gap {
        doc.set_computed_style(track, "gap", gap);
    }

    let items = (0..shape.items)
        .map(|_| {
            let item = doc.append(track, "div", &["gallery-item"]);
            doc.set_layout(
                item,
                Layout {
                    offset_width: shape.item_width,
                    client_width: shape.item_width,
                    scroll_width: shape.item_width,
                    scroll_left: 0.0,
                },
            );
            item
        })
        .collect();

    GalleryNodes {
        wrapper,
        track,
        items,
        left,
        right,
    }
}

/// Nodes of a header built by [`nav_fixture`].
#[derive(Debug, Clone)]
pub struct NavNodes {
    pub header: NodeId,
    pub toggle: NodeId,
    pub list: NodeId,
    /// `(item, link, caret)` per submenu parent.
    pub parents: Vec<(NodeId, NodeId, NodeId)>,
    pub plain_link: NodeId,
    pub outside: NodeId,
}

/// Builds a header with a toggle, a nav list holding `submenus` submenu
/// parents (each with link, caret and nested list) plus one plain item, and a
/// `main` element outside the header.
pub fn nav_fixture(doc: &mut MemoryDocument, submenus: usize) -> NavNodes {
    let root = doc.root();
    let header = doc.append(root, "header", &[]);
    let toggle = doc.append(header, "button", &["nav-toggle"]);
    let nav = doc.append(header, "nav", &[]);
    let list = doc.append(nav, "ul", &[]);

    let parents = (0..submenus)
        .map(|_| {
            let item = doc.append(list, "li", &["nav-parent"]);
            let link = doc.append(item, "a", &[]);
            let caret = doc.append(item, "button", &["nav-caret"]);
            let submenu = doc.append(item, "ul", &["submenu"]);
            let child = doc.append(submenu, "li", &[]);
            doc.append(child, "a", &[]);
            (item, link, caret)
        })
        .collect();

    let plain = doc.append(list, "li", &[]);
    let plain_link = doc.append(plain, "a", &[]);
    let outside = doc.append(root, "main", &[]);
    doc.set_viewport_width(800.0);

    NavNodes {
        header,
        toggle,
        list,
        parents,
        plain_link,
        outside,
    }
}

/// Appends a `div > img.fade-in` to the root.
pub fn fade_image_fixture(doc: &mut MemoryDocument, complete: bool) -> NodeId {
    let root = doc.root();
    let holder = doc.append(root, "div", &["gallery-item"]);
    let image = doc.append(holder, "img", &["fade-in"]);
    doc.set_image_complete(image, complete);
    image
}

/// The element following `node` among its siblings.
pub fn next_sibling(doc: &MemoryDocument, node: NodeId) -> Option<NodeId> {
    let parent = doc.parent(&node)?;
    let siblings = doc.children(parent);
    let index = siblings.iter().position(|child| *child == node)?;
    siblings.get(index + 1).copied()
}
