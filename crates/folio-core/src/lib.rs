//! Folio Core Library
//!
//! Record types, front matter parsing, configuration, and error handling for
//! file-backed portfolio content.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;

pub use config::Config;
pub use content::{
    Artwork, ArtworkType, CaseStudy, ContentKind, Project, Record, RecordFormat, Writing,
};
pub use error::{CoreError, Result};
