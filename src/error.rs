//! Error types for matiz operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing or constructing colors.
///
/// Every failure is local and recoverable: callers are expected to chain
/// fallback strategies (as [`Color::parse`](crate::Color::parse) does,
/// trying hex before keywords). Numeric out-of-range inputs are not errors;
/// they are clamped or wrapped by the operation that receives them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Hex string contained non-hex characters or an unsupported length.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Keyword was not found in the selected keyword set.
    #[error("unknown color keyword: {0:?}")]
    UnknownKeyword(String),

    /// Functional notation used a name other than rgb/rgba/hsl/hsla.
    #[error("unknown color function: {0:?}")]
    UnknownFunction(String),

    /// Functional notation had the wrong number of arguments.
    #[error("expected {expected} color arguments, found {found}")]
    ArgumentCount {
        /// Arguments required by the function name.
        expected: usize,
        /// Arguments actually present.
        found: usize,
    },

    /// Percentage and raw numeric forms were mixed, or a percentage
    /// appeared on a component that does not accept one (and vice versa).
    #[error("invalid percentage usage in color arguments")]
    UnitMismatch,

    /// Argument list contained a character outside `[0-9.,%-]`, or the
    /// functional syntax was malformed (e.g. missing closing parenthesis).
    #[error("malformed color string: {0:?}")]
    MalformedString(String),

    /// Component array passed to an array setter was not 3 or 4 elements.
    #[error("expected 3 or 4 color components, found {0}")]
    ComponentCount(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ArgumentCount {
            expected: 4,
            found: 3,
        };
        assert!(err.to_string().contains('4'));
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn test_component_count_display() {
        let err = Error::ComponentCount(5);
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_unknown_keyword_display() {
        let err = Error::UnknownKeyword("bluish".to_string());
        assert!(err.to_string().contains("bluish"));
    }
}
