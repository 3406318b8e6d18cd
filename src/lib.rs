//! Compose Patterns Library
//!
//! Dynamic forms assembled from a list of field descriptors: text inputs with
//! validation strategies and action buttons whose enablement follows the
//! validity of the form. The model is renderer-agnostic; a terminal session
//! is always available and a GPUI window is built with the `gui` feature.

rust_i18n::i18n!("locales", fallback = "en");

#[cfg(feature = "gui")]
pub mod app;
pub mod cli;
#[cfg(feature = "gui")]
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod state;
#[cfg(feature = "gui")]
pub mod theme;
pub mod utils;
