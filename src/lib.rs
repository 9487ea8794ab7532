//! Library crate for user-browser.
//!
//! This crate exposes the building blocks of the TUI:
//! - Application state, query controller and event loop (`app`)
//! - Error and result types (`error`)
//! - Remote users API client (`api`)
//! - UI rendering and widgets (`ui`)
//!
//! It is used by the `user-browser` binary and by tests.
#![doc = include_str!("../README.md")]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod app;
pub mod error;
pub mod ui;

// Re-export commonly used items at the crate root for convenience
/// Convenient error and result types shared across the crate.
pub use error::{DynError, Result};
