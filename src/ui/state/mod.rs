// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Framework-free state shared by the page components, kept apart from the
//! components so it can be tested on plain values.

pub mod animation_lock;
pub mod viewport;

// Re-export commonly used types for convenience
pub use animation_lock::AnimationLock;
pub use viewport::{parse_css_length, ArrowState, ScrollGeometry, StepMetrics};
