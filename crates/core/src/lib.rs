//! Folio Core - Content types for a single-page portfolio.
//!
//! This crate provides the data model rendered by the `folio-site` crate:
//! - [`Profile`] - identity, bio and outbound links
//! - [`Skills`] - ordered skill categories
//! - [`Project`] - showcased work with optional links and highlights
//! - [`ContentStore`] - the immutable bundle of everything above
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no templating, no
//! HTTP. Content is constructed once (in code or deserialized from a content
//! file by the caller) and only read afterwards.
//!
//! # Modules
//!
//! - [`types`] - Content records, link helpers and icon glyphs
//! - [`audit`] - Opt-in report of placeholder and duplicate content
//! - [`store`] - The [`ContentStore`] and the built-in default content

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod audit;
pub mod store;
pub mod types;

pub use audit::{Finding, audit};
pub use store::ContentStore;
pub use types::*;
