// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`DesktopBreakpoint`](ui::newtypes::DesktopBreakpoint),
//!   [`LockDuration`](ui::newtypes::LockDuration))

pub mod ui;
