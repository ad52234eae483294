// SPDX-License-Identifier: MPL-2.0
//! DOM events consumed by `Page::dispatch`.

/// A browser event, reduced to what the page behaviors need.
///
/// There are two ways to feed clicks and key presses in:
///
/// - A host with listeners on each control (the browser host does this) sends
///   [`ControlClick`](Self::ControlClick) and
///   [`ControlKeyDown`](Self::ControlKeyDown) from the arrow, toggle or caret
///   listener, and [`DocumentClick`](Self::DocumentClick) from a document
///   listener that only sees clicks nobody stopped.
/// - A host with a single listener sends `Click` and `KeyDown` with the
///   original target; the page then replays bubbling from the target upwards.
///
/// The remaining variants name the element the listener was attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent<N> {
    Click(N),
    KeyDown { target: N, key: String },
    /// A click reached a listener on the control itself.
    ControlClick(N),
    /// A key press reached a listener on a submenu caret.
    ControlKeyDown { control: N, key: String },
    /// A click bubbled up to the document.
    DocumentClick(N),
    /// Pointer entered a submenu item (does not bubble).
    MouseEnter(N),
    MouseLeave(N),
    /// A gallery track scrolled.
    Scroll(N),
    /// A gallery track finished scrolling.
    ScrollEnd(N),
    Resize,
    ImageLoad(N),
    ImageError(N),
}

impl<N> DomEvent<N> {
    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Click(_) => "click",
            Self::KeyDown { .. } => "keydown",
            Self::ControlClick(_) => "control click",
            Self::ControlKeyDown { .. } => "control keydown",
            Self::DocumentClick(_) => "document click",
            Self::MouseEnter(_) => "mouseenter",
            Self::MouseLeave(_) => "mouseleave",
            Self::Scroll(_) => "scroll",
            Self::ScrollEnd(_) => "scrollend",
            Self::Resize => "resize",
            Self::ImageLoad(_) => "load",
            Self::ImageError(_) => "error",
        }
    }
}
