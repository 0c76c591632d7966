//! Folio Content Library
//!
//! Loads portfolio records from a content root and renders their bodies.
//!
//! # Modules
//!
//! - [`repository`] - Typed, sorted access to the four record collections
//! - [`markdown`] - Markdown body rendering with heading anchors

pub mod markdown;
pub mod repository;

pub use markdown::{RenderedBody, TocEntry, render_body};
pub use repository::{
    Collection, CollectionReport, ContentRepository, RepositoryError, SkippedRecord,
};
