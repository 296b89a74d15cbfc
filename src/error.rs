/// Error type for srcinfo parsing and operations.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// A line of the input violated the format.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The requested package is not declared by any `pkgname`.
    #[error("package \"{0}\" is not part of this package base")]
    UnknownPackage(String),

    /// The input file could not be read.
    #[error("unable to read file: {path}: {message}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Message reported by the operating system.
        message: String,
    },
}

/// A rejected line, with its position and the rule it broke.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("line {}: {kind}: {text}", .line + 1)]
pub struct ParseError {
    /// 0-based index of the offending line in the input.
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
    /// Which rule was violated.
    pub kind: ErrorKind,
}

/// The rule a line violated.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// The line is not a `key = value` pair.
    #[error("{0}")]
    MalformedLine(Malformed),

    /// The key needs a header context that has not been established, or
    /// redeclares the package base.
    #[error("key \"{key}\" can not occur {position}")]
    Sequence {
        /// The key as written.
        key: String,
        /// Where the key was found, e.g. `before pkgbase`.
        position: &'static str,
    },

    /// A base-only key appeared after the first `pkgname`.
    #[error("key \"{0}\" can not occur after pkgname")]
    Placement(String),

    /// A `pkgname` was declared twice.
    #[error("pkgname \"{0}\" can not occur more than once")]
    DuplicateName(String),

    /// The key is not part of the format.
    #[error("unknown key \"{0}\"")]
    UnknownKey(String),
}

/// Ways a line can fail to split into a key and a value.
#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq, Hash)]
pub enum Malformed {
    #[error("line does not contain '='")]
    MissingEquals,
    #[error("key is empty")]
    EmptyKey,
    #[error("value is empty")]
    EmptyValue,
}

impl From<Malformed> for ErrorKind {
    fn from(m: Malformed) -> Self {
        ErrorKind::MalformedLine(m)
    }
}

impl ParseError {
    pub(crate) fn new(line: usize, text: &str, kind: impl Into<ErrorKind>) -> Self {
        ParseError {
            line,
            text: text.to_string(),
            kind: kind.into(),
        }
    }
}

/// Result type for srcinfo operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_one_based_line() {
        let err = ParseError::new(0, "pkgver = 1", ErrorKind::Placement("pkgver".into()));
        assert_eq!(
            err.to_string(),
            "line 1: key \"pkgver\" can not occur after pkgname: pkgver = 1"
        );
    }

    #[test]
    fn malformed_converts_into_kind() {
        let err = ParseError::new(4, "= x", Malformed::EmptyKey);
        assert_eq!(err.kind, ErrorKind::MalformedLine(Malformed::EmptyKey));
        assert_eq!(err.to_string(), "line 5: key is empty: = x");
    }

    #[test]
    fn parse_error_is_transparent() {
        let inner = ParseError::new(2, "foo = bar", ErrorKind::UnknownKey("foo".into()));
        let err = Error::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
    }
}
