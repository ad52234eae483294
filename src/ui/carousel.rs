// SPDX-License-Identifier: MPL-2.0
//! Gallery carousel: arrow-driven smooth scrolling of a horizontal track.
//!
//! Each arrow click advances the track by one item (item width plus gap). A
//! click that arrives while the previous smooth scroll is presumed to still be
//! running is dropped, not queued. Arrow visibility and disabled state follow
//! the scroll position after every scroll and resize.

use crate::config::{Config, Markers, DISABLED_ARROW_OPACITY};
use crate::domain::ui::{FallbackGap, LockDuration, WidthRatio};
use crate::dom::{Dom, Selector};
use crate::error::Result;
use crate::ui::state::{parse_css_length, AnimationLock, ArrowState, ScrollGeometry, StepMetrics};
use std::time::Duration;

/// Direction of an arrow click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Previous => -1.0,
            Self::Next => 1.0,
        }
    }
}

/// Carousel tuning shared by every gallery on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub item: Selector,
    pub lock: LockDuration,
    pub fallback_gap: FallbackGap,
    pub fallback_width_ratio: WidthRatio,
    pub release_on_scroll_end: bool,
}

impl Settings {
    #[must_use]
    pub fn new(config: &Config, markers: &Markers) -> Self {
        Self {
            item: markers.gallery_item.clone(),
            lock: config.carousel.lock_duration(),
            fallback_gap: config.carousel.fallback_gap(),
            fallback_width_ratio: config.carousel.fallback_width_ratio(),
            release_on_scroll_end: config.carousel.release_on_scroll_end,
        }
    }
}

/// Messages for one gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// An arrow was clicked.
    ArrowClicked(Direction),
    /// The track scrolled (any cause).
    Scrolled,
    /// The track reported the end of a scroll.
    ScrollEnded,
    /// The window was resized.
    Resized,
}

/// Why an advance did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// A previous scroll still holds the animation lock.
    Locked,
    /// The track is already at the boundary in that direction.
    AtBoundary,
}

/// Effects produced by the gallery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A smooth scroll to `target` was requested.
    Scrolling { target: f64 },
    /// The advance was ignored.
    Dropped(DropReason),
    /// Arrows were synchronized to the given state.
    ArrowsUpdated(ArrowState),
}

/// One gallery container and its controls.
#[derive(Debug, Clone)]
pub struct Gallery<N> {
    wrapper: N,
    track: N,
    left: Option<N>,
    right: Option<N>,
    lock: AnimationLock,
    settings: Settings,
}

impl<N: Clone + PartialEq + std::fmt::Debug> Gallery<N> {
    /// Finds every gallery on the page and synchronizes its arrows once.
    /// Containers without a track are skipped.
    pub fn discover<D: Dom<Node = N>>(
        dom: &mut D,
        markers: &Markers,
        settings: &Settings,
    ) -> Result<Vec<Self>> {
        let mut galleries = Vec::new();
        for wrapper in dom.query_all(None, &markers.gallery_wrapper)? {
            let Some(track) = dom.query(Some(&wrapper), &markers.gallery_track)? else {
                log::debug!("skipping gallery without track: {wrapper:?}");
                continue;
            };
            let left = dom.query(Some(&wrapper), &markers.arrow_left)?;
            let right = dom.query(Some(&wrapper), &markers.arrow_right)?;
            let gallery = Self {
                wrapper,
                track,
                left,
                right,
                lock: AnimationLock::default(),
                settings: settings.clone(),
            };
            gallery.refresh(dom);
            galleries.push(gallery);
        }
        Ok(galleries)
    }

    /// Handle a gallery message.
    pub fn handle<D: Dom<Node = N>>(&mut self, dom: &mut D, now: Duration, msg: Message) -> Effect {
        self.lock.expire(now);
        match msg {
            Message::ArrowClicked(direction) => self.advance(dom, now, direction),
            Message::Scrolled | Message::Resized => self
                .refresh(dom)
                .map_or(Effect::None, Effect::ArrowsUpdated),
            Message::ScrollEnded => {
                if self.settings.release_on_scroll_end {
                    self.lock.release();
                }
                Effect::None
            }
        }
    }

    /// Moves the track one step in `direction` unless locked or at the edge.
    pub fn advance<D: Dom<Node = N>>(
        &mut self,
        dom: &mut D,
        now: Duration,
        direction: Direction,
    ) -> Effect {
        if self.lock.is_held(now) {
            log::trace!("gallery advance dropped: animation in flight");
            return Effect::Dropped(DropReason::Locked);
        }

        let step = self.scroll_step(dom);
        let geometry = ScrollGeometry::from_layout(&dom.layout(&self.track));
        let Some(target) = geometry.plan_advance(direction.sign() * step) else {
            log::trace!("gallery advance dropped: already at boundary");
            return Effect::Dropped(DropReason::AtBoundary);
        };

        self.lock.try_acquire(now, self.settings.lock);
        dom.scroll_to(&self.track, target);
        Effect::Scrolling { target }
    }

    /// Synchronizes arrow visibility and disabled state with the track.
    /// Returns `None` when the gallery has no arrows.
    pub fn refresh<D: Dom<Node = N>>(&self, dom: &mut D) -> Option<ArrowState> {
        if self.left.is_none() && self.right.is_none() {
            return None;
        }

        let state = ScrollGeometry::from_layout(&dom.layout(&self.track)).arrow_state();
        match state {
            ArrowState::Hidden => {
                for arrow in self.left.iter().chain(self.right.iter()) {
                    dom.set_style(arrow, "display", Some("none"));
                }
            }
            ArrowState::Visible {
                left_disabled,
                right_disabled,
            } => {
                let arrows = [(&self.left, left_disabled), (&self.right, right_disabled)];
                for (arrow, disabled) in arrows {
                    if let Some(arrow) = arrow {
                        dom.set_style(arrow, "display", None);
                        dom.set_disabled(arrow, disabled);
                        dom.set_style(arrow, "opacity", disabled.then_some(DISABLED_ARROW_OPACITY));
                    }
                }
            }
        }
        Some(state)
    }

    /// Distance one click advances, from the live layout.
    pub fn scroll_step<D: Dom<Node = N>>(&self, dom: &D) -> f64 {
        let item = dom
            .query(Some(&self.track), &self.settings.item)
            .unwrap_or_else(|err| {
                log::debug!("gallery item lookup failed: {err}");
                None
            });
        let gap = dom
            .computed_style(&self.track, "gap")
            .or_else(|| dom.computed_style(&self.track, "column-gap"))
            .and_then(|raw| parse_css_length(&raw));

        StepMetrics {
            item_width: item.map(|item| dom.layout(&item).offset_width),
            gap,
            wrapper_width: dom.layout(&self.wrapper).client_width,
        }
        .step(
            self.settings.fallback_gap.value(),
            self.settings.fallback_width_ratio.value(),
        )
    }

    /// Whether a click at `now` would be dropped by the animation lock.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        self.lock.is_held(now)
    }

    pub fn wrapper(&self) -> &N {
        &self.wrapper
    }

    pub fn track(&self) -> &N {
        &self.track
    }

    pub fn left_arrow(&self) -> Option<&N> {
        self.left.as_ref()
    }

    pub fn right_arrow(&self) -> Option<&N> {
        self.right.as_ref()
    }
}
