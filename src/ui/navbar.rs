// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for site-level navigation.
//!
//! This module drives the header's collapsible navigation: the toggle button
//! that opens the mobile panel, and the caret buttons that expand one submenu
//! at a time. Open and active state live on the page itself, as the
//! `nav-open` class on the header and the `active` class on submenu items, so
//! the stylesheet owns all visibility.

use crate::config::{ClassConfig, Markers};
use crate::domain::ui::DesktopBreakpoint;
use crate::dom::Dom;
use crate::error::Result;
use crate::ui::Dispatch;

/// Keyboard key pressed on a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key_value(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " => Self::Space,
            _ => Self::Other,
        }
    }

    /// Whether the key activates a caret like a click does.
    #[must_use]
    pub fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Messages for the navigation menu. Indices refer to [`NavMenu::submenus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message<N> {
    ToggleClicked,
    CaretClicked(usize),
    CaretKeyDown(usize, Key),
    PointerEntered(usize),
    PointerLeft(usize),
    /// A click reached the document; the node is the event target.
    DocumentClicked(N),
    Resized,
}

impl<N> Message<N> {
    /// How the triggering DOM event must be treated by the host.
    #[must_use]
    pub fn dispatch(&self) -> Dispatch {
        match self {
            Self::ToggleClicked => Dispatch {
                stop_propagation: true,
                prevent_default: false,
            },
            Self::CaretClicked(_) => Dispatch {
                stop_propagation: true,
                prevent_default: true,
            },
            Self::CaretKeyDown(_, key) if key.activates() => Dispatch {
                stop_propagation: false,
                prevent_default: true,
            },
            _ => Dispatch::default(),
        }
    }
}

/// Events propagated to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Opened,
    Closed,
    SubmenuToggled { index: usize, active: bool },
    /// The viewport is at desktop width; submenu state was cleared.
    DesktopReset { closed: bool },
}

/// A navigation item holding a nested submenu.
#[derive(Debug, Clone, PartialEq)]
pub struct Submenu<N> {
    pub item: N,
    pub link: N,
    pub caret: Option<N>,
}

#[derive(Debug, Clone)]
pub struct NavMenu<N> {
    header: N,
    toggle: N,
    list: N,
    /// Every submenu parent, including ones without a link.
    parents: Vec<N>,
    /// Links directly under a submenu parent.
    parent_links: Vec<N>,
    submenus: Vec<Submenu<N>>,
    breakpoint: DesktopBreakpoint,
    open_class: String,
    active_class: String,
}

impl<N: Clone + PartialEq + std::fmt::Debug> NavMenu<N> {
    /// Finds the header navigation. Returns `None` when the header, its
    /// toggle or its list is missing.
    pub fn discover<D: Dom<Node = N>>(
        dom: &mut D,
        markers: &Markers,
        classes: &ClassConfig,
        breakpoint: DesktopBreakpoint,
    ) -> Result<Option<Self>> {
        let Some(header) = dom.query(None, &markers.header)? else {
            log::debug!("no header; navigation disabled");
            return Ok(None);
        };
        let toggle = dom.query(Some(&header), &markers.nav_toggle)?;
        let list = dom.query(Some(&header), &markers.nav_list)?;
        let (Some(toggle), Some(list)) = (toggle, list) else {
            log::debug!("header lacks toggle or nav list; navigation disabled");
            return Ok(None);
        };

        let parents = dom.query_all(Some(&list), &markers.nav_parent)?;
        let mut submenus = Vec::new();
        for item in &parents {
            let Some(link) = dom.query(Some(item), &markers.nav_link)? else {
                continue;
            };
            dom.set_attribute(&link, "aria-haspopup", "true");
            let caret = dom.query(Some(item), &markers.nav_caret)?;
            submenus.push(Submenu {
                item: item.clone(),
                link,
                caret,
            });
        }
        let parent_links = dom.query_all(Some(&list), &markers.nav_parent_link)?;

        Ok(Some(Self {
            header,
            toggle,
            list,
            parents,
            parent_links,
            submenus,
            breakpoint,
            open_class: classes.nav_open.clone(),
            active_class: classes.active.clone(),
        }))
    }

    /// Process a navigation message and return the corresponding effect.
    pub fn handle<D: Dom<Node = N>>(&mut self, dom: &mut D, msg: Message<N>) -> Effect {
        match msg {
            Message::ToggleClicked => {
                if self.is_open(dom) {
                    self.close(dom);
                    Effect::Closed
                } else {
                    self.open(dom);
                    Effect::Opened
                }
            }
            Message::CaretClicked(index) => self.toggle_submenu(dom, index),
            Message::CaretKeyDown(index, key) => {
                if key.activates() {
                    self.toggle_submenu(dom, index)
                } else {
                    Effect::None
                }
            }
            Message::PointerEntered(index) => {
                self.hint_hover(dom, index, true);
                Effect::None
            }
            Message::PointerLeft(index) => {
                self.hint_hover(dom, index, false);
                Effect::None
            }
            Message::DocumentClicked(target) => {
                if !dom.contains(&self.header, &target) && self.is_open(dom) {
                    self.close(dom);
                    Effect::Closed
                } else {
                    Effect::None
                }
            }
            Message::Resized => {
                if !self.breakpoint.is_desktop(dom.viewport_width()) {
                    return Effect::None;
                }
                let closed = self.is_open(dom);
                if closed {
                    self.close(dom);
                }
                self.clear_active(dom);
                for link in &self.parent_links {
                    dom.set_attribute(link, "aria-expanded", "false");
                }
                Effect::DesktopReset { closed }
            }
        }
    }

    fn open<D: Dom<Node = N>>(&self, dom: &mut D) {
        dom.add_class(&self.header, &self.open_class);
        dom.set_attribute(&self.toggle, "aria-expanded", "true");
        log::trace!("navigation opened");
    }

    fn close<D: Dom<Node = N>>(&self, dom: &mut D) {
        dom.remove_class(&self.header, &self.open_class);
        dom.set_attribute(&self.toggle, "aria-expanded", "false");
        self.clear_active(dom);
        log::trace!("navigation closed");
    }

    fn clear_active<D: Dom<Node = N>>(&self, dom: &mut D) {
        for parent in &self.parents {
            dom.remove_class(parent, &self.active_class);
        }
    }

    /// Closes every other submenu, then flips this one.
    fn toggle_submenu<D: Dom<Node = N>>(&self, dom: &mut D, index: usize) -> Effect {
        let Some(submenu) = self.submenus.get(index) else {
            return Effect::None;
        };
        for parent in self.parents.iter().filter(|parent| **parent != submenu.item) {
            dom.remove_class(parent, &self.active_class);
        }
        let active = !dom.has_class(&submenu.item, &self.active_class);
        dom.set_class(&submenu.item, &self.active_class, active);
        if let Some(caret) = &submenu.caret {
            dom.set_attribute(caret, "aria-expanded", bool_attr(active));
        }
        Effect::SubmenuToggled { index, active }
    }

    /// Mirrors hover onto the caret's `aria-expanded` at desktop widths.
    fn hint_hover<D: Dom<Node = N>>(&self, dom: &mut D, index: usize, expanded: bool) {
        if !self.breakpoint.is_desktop(dom.viewport_width()) {
            return;
        }
        if let Some(caret) = self.submenus.get(index).and_then(|s| s.caret.as_ref()) {
            dom.set_attribute(caret, "aria-expanded", bool_attr(expanded));
        }
    }

    pub fn is_open<D: Dom<Node = N>>(&self, dom: &D) -> bool {
        dom.has_class(&self.header, &self.open_class)
    }

    /// Index of the active submenu, if any.
    pub fn active_index<D: Dom<Node = N>>(&self, dom: &D) -> Option<usize> {
        self.submenus
            .iter()
            .position(|submenu| dom.has_class(&submenu.item, &self.active_class))
    }

    pub fn header(&self) -> &N {
        &self.header
    }

    pub fn toggle(&self) -> &N {
        &self.toggle
    }

    pub fn list(&self) -> &N {
        &self.list
    }

    pub fn submenus(&self) -> &[Submenu<N>] {
        &self.submenus
    }

    /// Index of the submenu whose caret is `node`.
    pub fn caret_index(&self, node: &N) -> Option<usize> {
        self.submenus
            .iter()
            .position(|submenu| submenu.caret.as_ref() == Some(node))
    }

    /// Index of the submenu whose item is `node`.
    pub fn item_index(&self, node: &N) -> Option<usize> {
        self.submenus.iter().position(|submenu| submenu.item == *node)
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
