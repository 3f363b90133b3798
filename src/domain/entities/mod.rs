//! Core domain entities representing the pipeline's data model.
//!
//! None of these outlive a single request; nothing is persisted.
//!
//! # Entity Types
//!
//! - [`MovieQuery`] - Validated, sanitized search input
//! - [`MovieInfo`] - Title and English plot from the metadata provider
//! - [`Translation`] - Translated plot text
//! - [`MoviePlot`] - Title with translated plot, returned to the caller

pub mod movie;

pub use movie::{MovieInfo, MoviePlot, MovieQuery, Translation};
