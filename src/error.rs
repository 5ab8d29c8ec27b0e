//! Crate-level error types.

use std::fmt;

use crate::options::Mode;

/// Errors produced by the camutils crate.
#[derive(Debug)]
pub enum CamutilsError {
    /// A bookmark captured in one mode was handed to another mode.
    BookmarkModeMismatch {
        /// Mode of the receiving manipulator (or of the first bookmark).
        expected: Mode,
        /// Mode the offending bookmark was captured in.
        found: Mode,
    },
    /// No transition duration is defined for bookmarks of this mode.
    UnsupportedTransition(Mode),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CamutilsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BookmarkModeMismatch { expected, found } => write!(
                f,
                "bookmark mode mismatch: expected {expected}, found {found}"
            ),
            Self::UnsupportedTransition(mode) => {
                write!(f, "no transition duration defined for {mode} bookmarks")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CamutilsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CamutilsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_message_names_both_modes() {
        let err = CamutilsError::BookmarkModeMismatch {
            expected: Mode::Orbit,
            found: Mode::FreeFlight,
        };
        assert_eq!(
            err.to_string(),
            "bookmark mode mismatch: expected orbit, found free_flight"
        );
    }

    #[test]
    fn io_error_is_exposed_as_source() {
        use std::error::Error;
        let err = CamutilsError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(CamutilsError::OptionsParse("bad".into()).source().is_none());
    }
}
