//! Error types for color parsing and theme loading.
//!
//! [`ParseError`] covers single color strings; [`ThemeError`] covers whole
//! theme documents. Malformed entries inside a fallback list never surface as
//! errors — the resolver skips them — so `ParseError` is only seen by callers
//! parsing individual strings directly.

/// Error returned when a color string matches none of the supported grammars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The string is not a base color name, a low-res triplet, or a hex code.
    InvalidColorSyntax {
        /// The offending input string.
        value: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidColorSyntax { value } => {
                write!(f, "invalid color syntax: '{}'", value)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Error type for theme document loading failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A non-color field holds a value outside its typed domain.
    ///
    /// Unlike malformed color candidates, this aborts document construction:
    /// there is no fallback position to skip to for `shadow` or `borders`.
    InvalidFieldValue {
        /// Name of the offending field.
        field: String,
        /// The raw value as written in the source.
        value: String,
        /// Human-readable description of the accepted domain.
        expected: String,
    },

    /// The document source is not parseable as a top-level mapping.
    Parse {
        /// Error message from the parser.
        message: String,
    },

    /// File loading error.
    Load {
        /// Error message from the file loader.
        message: String,
    },
}

impl std::fmt::Display for ThemeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::InvalidFieldValue {
                field,
                value,
                expected,
            } => {
                write!(
                    f,
                    "invalid value '{}' for theme field '{}' (expected {})",
                    value, field, expected
                )
            }
            ThemeError::Parse { message } => {
                write!(f, "failed to parse theme: {}", message)
            }
            ThemeError::Load { message } => {
                write!(f, "failed to load theme: {}", message)
            }
        }
    }
}

impl std::error::Error for ThemeError {}
