// SPDX-License-Identifier: MPL-2.0
//! Event routing for the page.
//!
//! Control events name the arrow, toggle or caret whose listener fired and act
//! on that control alone. For hosts that only listen on the document, `Click`
//! and `KeyDown` replay bubbling: the walk goes from the target up through its
//! ancestors, lets every control on the path react, and stops as soon as a
//! control asks for propagation to stop. If the walk reaches the top, the
//! document-level click handler (closing the navigation on outside clicks)
//! runs last.

use super::{DomEvent, Page};
use crate::clock::Clock;
use crate::dom::Dom;
use crate::ui::carousel::{self, Direction};
use crate::ui::image_loader;
use crate::ui::navbar::{self, Key};
use crate::ui::Dispatch;
use std::fmt;

impl<N: Clone + PartialEq + fmt::Debug, C: Clock> Page<N, C> {
    /// Routes one DOM event and returns how the host must treat it.
    pub fn dispatch<D: Dom<Node = N>>(&mut self, dom: &mut D, event: DomEvent<N>) -> Dispatch {
        log::trace!("dispatch {}", event.kind());
        match event {
            DomEvent::Click(target) => self.on_click(dom, target),
            DomEvent::KeyDown { target, key } => self.on_key_down(dom, &target, &key),
            DomEvent::ControlClick(control) => self.on_control_click(dom, &control),
            DomEvent::ControlKeyDown { control, key } => self.on_caret_key(dom, &control, &key),
            DomEvent::DocumentClick(target) => {
                self.on_document_click(dom, target);
                Dispatch::default()
            }
            DomEvent::MouseEnter(node) => self.on_pointer(dom, &node, true),
            DomEvent::MouseLeave(node) => self.on_pointer(dom, &node, false),
            DomEvent::Scroll(track) => {
                self.on_track(dom, &track, carousel::Message::Scrolled);
                Dispatch::default()
            }
            DomEvent::ScrollEnd(track) => {
                self.on_track(dom, &track, carousel::Message::ScrollEnded);
                Dispatch::default()
            }
            DomEvent::Resize => {
                self.on_resize(dom);
                Dispatch::default()
            }
            DomEvent::ImageLoad(image) => {
                self.on_image(dom, &image, image_loader::Message::Loaded);
                Dispatch::default()
            }
            DomEvent::ImageError(image) => {
                self.on_image(dom, &image, image_loader::Message::Failed);
                Dispatch::default()
            }
        }
    }

    fn on_click<D: Dom<Node = N>>(&mut self, dom: &mut D, target: N) -> Dispatch {
        let mut outcome = Dispatch::default();
        for node in bubble_path(dom, &target) {
            outcome = outcome.merge(self.on_control_click(dom, &node));
            if outcome.stop_propagation {
                return outcome;
            }
        }
        self.on_document_click(dom, target);
        outcome
    }

    /// Lets the arrow, toggle or caret that is `node` react to a click.
    fn on_control_click<D: Dom<Node = N>>(&mut self, dom: &mut D, node: &N) -> Dispatch {
        let now = self.clock.now();
        for gallery in &mut self.galleries {
            let direction = if gallery.left_arrow() == Some(node) {
                Some(Direction::Previous)
            } else if gallery.right_arrow() == Some(node) {
                Some(Direction::Next)
            } else {
                None
            };
            if let Some(direction) = direction {
                gallery.handle(dom, now, carousel::Message::ArrowClicked(direction));
            }
        }

        let Some(nav) = &mut self.nav else {
            return Dispatch::default();
        };
        let message = if nav.toggle() == node {
            Some(navbar::Message::ToggleClicked)
        } else {
            nav.caret_index(node).map(navbar::Message::CaretClicked)
        };
        match message {
            Some(message) => {
                let outcome = message.dispatch();
                nav.handle(dom, message);
                outcome
            }
            None => Dispatch::default(),
        }
    }

    fn on_document_click<D: Dom<Node = N>>(&mut self, dom: &mut D, target: N) {
        if let Some(nav) = &mut self.nav {
            nav.handle(dom, navbar::Message::DocumentClicked(target));
        }
    }

    fn on_key_down<D: Dom<Node = N>>(&mut self, dom: &mut D, target: &N, key: &str) -> Dispatch {
        let caret = self.nav.as_ref().and_then(|nav| {
            bubble_path(dom, target)
                .into_iter()
                .find(|node| nav.caret_index(node).is_some())
        });
        match caret {
            Some(caret) => self.on_caret_key(dom, &caret, key),
            None => Dispatch::default(),
        }
    }

    fn on_caret_key<D: Dom<Node = N>>(&mut self, dom: &mut D, caret: &N, key: &str) -> Dispatch {
        let Some(nav) = &mut self.nav else {
            return Dispatch::default();
        };
        let Some(index) = nav.caret_index(caret) else {
            return Dispatch::default();
        };

        let message = navbar::Message::CaretKeyDown(index, Key::from_key_value(key));
        let outcome = message.dispatch();
        nav.handle(dom, message);
        outcome
    }

    fn on_pointer<D: Dom<Node = N>>(&mut self, dom: &mut D, node: &N, entered: bool) -> Dispatch {
        if let Some(nav) = &mut self.nav {
            if let Some(index) = nav.item_index(node) {
                let message = if entered {
                    navbar::Message::PointerEntered(index)
                } else {
                    navbar::Message::PointerLeft(index)
                };
                nav.handle(dom, message);
            }
        }
        Dispatch::default()
    }

    fn on_track<D: Dom<Node = N>>(&mut self, dom: &mut D, track: &N, message: carousel::Message) {
        let now = self.clock.now();
        for gallery in self.galleries.iter_mut().filter(|g| g.track() == track) {
            gallery.handle(dom, now, message);
        }
    }

    fn on_resize<D: Dom<Node = N>>(&mut self, dom: &mut D) {
        let now = self.clock.now();
        for gallery in &mut self.galleries {
            gallery.handle(dom, now, carousel::Message::Resized);
        }
        if let Some(nav) = &mut self.nav {
            nav.handle(dom, navbar::Message::Resized);
        }
    }

    fn on_image<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        image: &N,
        message: image_loader::Message,
    ) {
        for entry in self.images.iter_mut().filter(|entry| entry.image() == image) {
            entry.handle(dom, message);
        }
    }
}

/// `target` followed by each of its ancestors, innermost first.
fn bubble_path<D: Dom>(dom: &D, target: &D::Node) -> Vec<D::Node> {
    std::iter::successors(Some(target.clone()), |node| dom.parent(node)).collect()
}
