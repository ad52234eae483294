// SPDX-License-Identifier: MPL-2.0
//! `pagewire` adds client-side behaviors to static pages: arrow-driven
//! gallery carousels, fade-in placeholders for images and a responsive header
//! navigation with submenus.
//!
//! The behaviors only touch the page through the [`dom::Dom`] trait. Enable
//! the `web` feature for the browser implementation and [`web::mount`]; use
//! [`dom::MemoryDocument`] to drive them headlessly.
//!
//! ```
//! use pagewire::app::{DomEvent, Page};
//! use pagewire::clock::ManualClock;
//! use pagewire::config::Config;
//! use pagewire::dom::{Dom, MemoryDocument};
//!
//! let mut doc = MemoryDocument::new();
//! let root = doc.root();
//! let header = doc.append(root, "header", &[]);
//! let toggle = doc.append(header, "button", &["nav-toggle"]);
//! let nav = doc.append(header, "nav", &[]);
//! doc.append(nav, "ul", &[]);
//!
//! let mut page = Page::setup(&mut doc, &Config::default(), ManualClock::default())?;
//! page.dispatch(&mut doc, DomEvent::Click(toggle));
//! assert!(doc.has_class(&header, "nav-open"));
//! # Ok::<(), pagewire::error::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/pagewire/0.1.0")]

pub mod app;
pub mod clock;
pub mod config;
pub mod dom;
pub mod domain;
pub mod error;
pub mod ui;
#[cfg(feature = "web")]
pub mod web;

#[cfg(test)]
pub(crate) mod test_utils;
