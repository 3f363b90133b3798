//! Movie entities flowing through the lookup-and-translate pipeline.

use crate::domain::error::MovieError;

/// Minimum trimmed length of a searchable movie name, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// Maximum trimmed length of a searchable movie name, in characters.
pub const MAX_NAME_LEN: usize = 100;

pub const NAME_TOO_SHORT: &str = "name required, minimum 2 characters";
pub const NAME_TOO_LONG: &str = "name too long, maximum 100 characters";

/// A validated and sanitized movie name, ready to be sent to the lookup provider.
///
/// Only constructible through [`MovieQuery::parse`], so holding one means the
/// length bounds were checked and `<`/`>` were removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    name: String,
}

impl MovieQuery {
    /// Trims, validates, and sanitizes raw user input.
    ///
    /// # Validation
    ///
    /// 1. Trimmed length below [`MIN_NAME_LEN`] is rejected
    /// 2. Trimmed length above [`MAX_NAME_LEN`] is rejected
    /// 3. `<` and `>` are stripped; an empty remainder is rejected as too short
    ///
    /// # Errors
    ///
    /// Returns [`MovieError::Validation`] with a user-facing message.
    pub fn parse(raw: &str) -> Result<Self, MovieError> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();

        if len < MIN_NAME_LEN {
            return Err(MovieError::Validation(NAME_TOO_SHORT.to_string()));
        }

        if len > MAX_NAME_LEN {
            return Err(MovieError::Validation(NAME_TOO_LONG.to_string()));
        }

        let name = sanitize(trimmed);
        if name.is_empty() {
            return Err(MovieError::Validation(NAME_TOO_SHORT.to_string()));
        }

        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Removes `<` and `>` from user-supplied text.
///
/// Guards against naive interpolation into URLs or markup downstream; it is
/// not a general-purpose injection filter.
pub fn sanitize(input: &str) -> String {
    input.replace(['<', '>'], "")
}

/// Title and English plot as reported by the movie metadata provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieInfo {
    pub title: String,
    pub plot: String,
}

/// Text returned by the translation provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub translated_text: String,
}

/// Final result of the pipeline: the movie title with its translated plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoviePlot {
    pub title: String,
    pub plot: String,
}
