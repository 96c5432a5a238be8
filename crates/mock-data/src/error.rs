//! Error types for the mock-data crate.
//!
//! This module defines semantic error enums for reference data loading, field
//! generation, and template rendering, following the project's error handling
//! conventions with `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating a reference data
/// collection.
///
/// These errors cover file I/O, JSON parsing, and the non-empty invariant
/// every sequence must satisfy before generation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A dataset file could not be read.
    #[error("failed to read dataset file at '{}': {message}", path.display())]
    IoError {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A dataset contains malformed JSON or does not match its schema.
    #[error("invalid dataset '{name}': {message}")]
    ParseError {
        /// Logical dataset name (for example `countries`).
        name: &'static str,
        /// Description of the parse error.
        message: String,
    },

    /// A dataset parsed successfully but holds no entries.
    #[error("dataset '{name}' contains no entries")]
    EmptyDataset {
        /// Logical dataset name.
        name: &'static str,
    },
}

/// Errors that can occur while sampling a single field value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A categorical draw found an empty pool.
    ///
    /// [`ReferenceData`](crate::ReferenceData) validates every sequence at
    /// construction, so this indicates a broken invariant rather than bad
    /// caller input.
    #[error("reference pool '{pool}' is empty")]
    EmptyPool {
        /// Logical pool name.
        pool: &'static str,
    },

    /// A numeric range has no representable values.
    #[error("numeric range is empty: min {min} must be below max {max}")]
    InvalidRange {
        /// Inclusive lower bound.
        min: i64,
        /// Exclusive upper bound.
        max: i64,
    },
}

/// Errors raised by template rendering.
///
/// Template syntax errors, unknown functions, and bad generator arguments all
/// collapse into a single rendering failure; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The template failed to parse or execute.
    #[error("template rendering failed: {message}")]
    Template {
        /// Description of the failure, including the originating line where
        /// the engine reports one.
        message: String,
    },
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        // Chase the source chain so argument errors raised inside generator
        // functions keep their original message.
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Template { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_error_io_formats_correctly() {
        let err = CollectionError::IoError {
            path: PathBuf::from("/tmp/countries.json"),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read dataset file at '/tmp/countries.json': file not found"
        );
    }

    #[test]
    fn collection_error_parse_formats_correctly() {
        let err = CollectionError::ParseError {
            name: "countries",
            message: "unexpected token".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid dataset 'countries': unexpected token"
        );
    }

    #[test]
    fn collection_error_empty_formats_correctly() {
        let err = CollectionError::EmptyDataset { name: "paragraphs" };
        assert_eq!(err.to_string(), "dataset 'paragraphs' contains no entries");
    }

    #[test]
    fn generate_error_empty_pool_formats_correctly() {
        let err = GenerateError::EmptyPool {
            pool: "male names",
        };
        assert_eq!(err.to_string(), "reference pool 'male names' is empty");
    }

    #[test]
    fn generate_error_invalid_range_formats_correctly() {
        let err = GenerateError::InvalidRange { min: 10, max: 10 };
        assert_eq!(
            err.to_string(),
            "numeric range is empty: min 10 must be below max 10"
        );
    }

    #[test]
    fn render_error_from_minijinja_keeps_cause_chain() {
        let inner = minijinja::Error::new(
            minijinja::ErrorKind::InvalidOperation,
            "numeric range is empty",
        );
        let err = RenderError::from(inner);
        let RenderError::Template { message } = err;
        assert!(message.contains("numeric range is empty"), "{message}");
    }
}
