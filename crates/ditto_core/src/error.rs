//! Unified error handling for the generation pipeline.
//!
//! Every fatal condition maps onto one of four categories, each with its own
//! process exit code so callers can tell misconfiguration apart from a bad
//! input file or a broken template set:
//!
//! - [`DittoError::Configuration`] — exit 2
//! - [`DittoError::SourceParse`] — exit 3
//! - [`DittoError::Io`] — exit 4
//! - [`DittoError::Template`] / [`DittoError::Render`] — exit 5
//!
//! An already-existing destination file is *not* an error: the renderer logs
//! a warning and records it in the run report instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for all pipeline operations.
pub type Result<T> = std::result::Result<T, DittoError>;

/// Why the controller interface could not be turned into a method signature.
#[derive(Debug, Error)]
pub enum SourceParseError {
    #[error("could not extract controller interface package statement")]
    MissingPackageDeclaration,

    #[error("could not extract controller interface type name")]
    MissingPrimaryTypeName,

    #[error(
        "no method returns `ResponseEntity` with a single type argument and takes a single parameter"
    )]
    NoQualifyingMethod,

    #[error("method `{method}` carries no `RequestMapping` annotation")]
    MissingRouteAnnotation { method: String },

    #[error("`RequestMapping` on `{method}` must use named parameters (`key = value`)")]
    UnsupportedAnnotationForm { method: String },

    #[error("could not find an import statement for type `{type_name}`")]
    UnresolvedImport { type_name: String },

    #[error("java grammar failed to load: {0}")]
    Grammar(String),
}

/// Top-level failure of a generation run.
#[derive(Debug, Error)]
pub enum DittoError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("failed to parse `{}`", path.display())]
    SourceParse {
        path: PathBuf,
        #[source]
        source: SourceParseError,
    },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to compile template `{name}`")]
    Template {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render template `{name}`")]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

impl DittoError {
    /// Wrap an I/O failure with a human-readable description of the attempt.
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Process exit code for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => 2,
            Self::SourceParse { .. } => 3,
            Self::Io { .. } => 4,
            Self::Template { .. } | Self::Render { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_category() {
        let config = DittoError::Configuration("missing option".into());
        let parse = DittoError::SourceParse {
            path: PathBuf::from("X.java"),
            source: SourceParseError::NoQualifyingMethod,
        };
        let io_err = DittoError::io("reading X", io::Error::new(io::ErrorKind::NotFound, "gone"));

        assert_eq!(config.exit_code(), 2);
        assert_eq!(parse.exit_code(), 3);
        assert_eq!(io_err.exit_code(), 4);
    }

    #[test]
    fn test_source_parse_error_carries_path() {
        let err = DittoError::SourceParse {
            path: PathBuf::from("/tmp/OrderController.java"),
            source: SourceParseError::MissingPackageDeclaration,
        };
        assert!(err.to_string().contains("OrderController.java"));
    }
}
