//! Provider trait definitions for the domain layer.
//!
//! These traits abstract the two external HTTP APIs the pipeline depends on.
//! Concrete clients live in `crate::infrastructure`; mock implementations are
//! generated via `mockall` for unit tests.
//!
//! # Available Providers
//!
//! - [`MovieLookup`] - Movie metadata lookup by title
//! - [`Translator`] - Plain-text translation

pub mod movie_lookup;
pub mod translator;

pub use movie_lookup::MovieLookup;
pub use translator::Translator;

#[cfg(test)]
pub use movie_lookup::MockMovieLookup;
#[cfg(test)]
pub use translator::MockTranslator;
