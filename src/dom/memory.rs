// SPDX-License-Identifier: MPL-2.0
//! In-memory document implementing [`Dom`].
//!
//! Layout is not computed: tests and headless hosts set the metrics each
//! element should report. Scrolling behaves like a browser's, clamping the
//! requested offset to the scrollable range and landing immediately; every
//! request is also recorded so callers can assert on what was asked for.

use super::{Dom, ElementTree, Layout, Selector};
use crate::error::Result;
use std::collections::BTreeMap;

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A recorded `scroll_to` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub node: NodeId,
    pub left: f64,
}

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    computed: BTreeMap<String, String>,
    layout: Layout,
    complete: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    elements: Vec<Element>,
    viewport_width: f64,
    scroll_requests: Vec<ScrollRequest>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document holding a single `html` root element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: vec![Element {
                tag: "html".to_string(),
                ..Element::default()
            }],
            viewport_width: 1024.0,
            scroll_requests: Vec::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Creates an element with the given classes and appends it to `parent`.
    pub fn append(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let node = self.detached(tag);
        self.elements[node.0].classes = classes.iter().map(|c| (*c).to_string()).collect();
        self.append_child(parent, node);
        node
    }

    /// Creates an element outside the tree.
    pub fn detached(&mut self, tag: &str) -> NodeId {
        self.elements.push(Element {
            tag: tag.to_ascii_lowercase(),
            ..Element::default()
        });
        NodeId(self.elements.len() - 1)
    }

    /// Moves `child` to the end of `parent`'s children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    pub fn set_layout(&mut self, node: NodeId, layout: Layout) {
        self.elements[node.0].layout = layout;
    }

    pub fn set_scroll_left(&mut self, node: NodeId, left: f64) {
        self.elements[node.0].layout.scroll_left = left;
    }

    pub fn set_computed_style(&mut self, node: NodeId, property: &str, value: &str) {
        self.elements[node.0]
            .computed
            .insert(property.to_string(), value.to_string());
    }

    pub fn set_image_complete(&mut self, node: NodeId, complete: bool) {
        self.elements[node.0].complete = complete;
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> &str {
        &self.elements[node.0].tag
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.elements[node.0].children
    }

    /// Inline style value, if set.
    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.elements[node.0].styles.get(property).map(String::as_str)
    }

    #[must_use]
    pub fn scroll_left(&self, node: NodeId) -> f64 {
        self.elements[node.0].layout.scroll_left
    }

    #[must_use]
    pub fn scroll_requests(&self) -> &[ScrollRequest] {
        &self.scroll_requests
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.elements[node.0].parent.take() {
            self.elements[parent.0].children.retain(|child| *child != node);
        }
    }

    fn collect_descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in &self.elements[node.0].children {
            out.push(*child);
            self.collect_descendants(*child, out);
        }
    }
}

impl ElementTree for MemoryDocument {
    type Id = NodeId;

    fn tag_name(&self, id: NodeId) -> &str {
        &self.elements[id.0].tag
    }

    fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.elements[id.0].classes.iter().any(|c| c == class)
    }

    fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.elements[id.0].parent
    }
}

impl Dom for MemoryDocument {
    type Node = NodeId;

    fn query_all(&self, scope: Option<&NodeId>, selector: &Selector) -> Result<Vec<NodeId>> {
        let mut candidates = Vec::new();
        match scope {
            Some(scope) => self.collect_descendants(*scope, &mut candidates),
            None => {
                candidates.push(self.root());
                self.collect_descendants(self.root(), &mut candidates);
            }
        }
        Ok(candidates
            .into_iter()
            .filter(|node| selector.matches(self, *node))
            .collect())
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.elements[node.0].parent
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let mut current = Some(*node);
        while let Some(candidate) = current {
            if candidate == *ancestor {
                return true;
            }
            current = self.elements[candidate.0].parent;
        }
        false
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        ElementTree::has_class(self, *node, class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        let classes = &mut self.elements[node.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.elements[node.0].classes.retain(|c| c != class);
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.elements[node.0].attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.elements[node.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        self.elements[node.0].attributes.remove(name);
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: Option<&str>) {
        let styles = &mut self.elements[node.0].styles;
        match value {
            Some(value) if !value.is_empty() => {
                styles.insert(property.to_string(), value.to_string());
            }
            _ => {
                styles.remove(property);
            }
        }
    }

    fn layout(&self, node: &NodeId) -> Layout {
        self.elements[node.0].layout
    }

    fn computed_style(&self, node: &NodeId, property: &str) -> Option<String> {
        self.elements[node.0]
            .computed
            .get(property)
            .filter(|value| !value.is_empty())
            .cloned()
    }

    fn scroll_to(&mut self, node: &NodeId, left: f64) {
        self.scroll_requests.push(ScrollRequest { node: *node, left });
        let layout = &mut self.elements[node.0].layout;
        layout.scroll_left = left.clamp(0.0, layout.max_scroll().max(0.0));
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        Ok(self.detached(tag))
    }

    fn insert_after(&mut self, reference: &NodeId, node: &NodeId) -> bool {
        let Some(parent) = self.elements[reference.0].parent else {
            return false;
        };
        self.detach(*node);
        let siblings = &mut self.elements[parent.0].children;
        let index = siblings
            .iter()
            .position(|child| child == reference)
            .map_or(siblings.len(), |index| index + 1);
        siblings.insert(index, *node);
        self.elements[node.0].parent = Some(parent);
        true
    }

    fn remove(&mut self, node: &NodeId) {
        self.detach(*node);
    }

    fn is_image_complete(&self, node: &NodeId) -> bool {
        self.elements[node.0].complete
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }
}
