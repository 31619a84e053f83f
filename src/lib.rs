//! Library crate for user-cards.
//!
//! This crate exposes the building blocks of the TUI:
//! - Remote directory access and the user model (`api`)
//! - Application state, directory operations, and update loop (`app`)
//! - Error and result types (`error`)
//! - In-memory search helpers (`search`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `user-cards` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod app;
pub mod error;
pub mod search;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
