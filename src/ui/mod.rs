// SPDX-License-Identifier: MPL-2.0
//! Page behavior components and their state.
//!
//! Each component follows the same "state down, messages up" shape: it owns
//! its state, receives a `Message`, mutates the document through [`crate::dom::Dom`]
//! and reports what happened as an `Effect`.
//!
//! - [`carousel`] - Arrow-driven gallery scrolling with an animation lock
//! - [`image_loader`] - Loading placeholder and fade-in class for images
//! - [`navbar`] - Header navigation toggle and submenus
//! - [`state`] - Framework-free state shared by the components

pub mod carousel;
pub mod image_loader;
pub mod navbar;
pub mod state;

/// What the host must do with the DOM event that produced a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Stop the event from reaching ancestors (including the document).
    pub stop_propagation: bool,
    /// Suppress the browser's default action.
    pub prevent_default: bool,
}

impl Dispatch {
    /// Combines two outcomes; any request wins.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            stop_propagation: self.stop_propagation || other.stop_propagation,
            prevent_default: self.prevent_default || other.prevent_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Dispatch;

    #[test]
    fn merge_keeps_every_request() {
        let stop = Dispatch {
            stop_propagation: true,
            prevent_default: false,
        };
        let prevent = Dispatch {
            stop_propagation: false,
            prevent_default: true,
        };
        let merged = stop.merge(prevent);
        assert!(merged.stop_propagation && merged.prevent_default);
        assert_eq!(Dispatch::default().merge(Dispatch::default()), Dispatch::default());
    }
}
