use std::fmt;

/// Result type for protoscope-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// A session log line is not a valid protocol message
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    /// A message cannot be applied to the session being replayed
    /// (duplicate request id, response/error for an unknown request, ...)
    Replay {
        line: Option<usize>,
        message: String,
    },
}

impl Error {
    pub(crate) fn replay(message: impl Into<String>) -> Self {
        Error::Replay {
            line: None,
            message: message.into(),
        }
    }

    /// Attach a 1-based log line number to a replay error.
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Error::Replay {
                line: None,
                message,
            } => Error::Replay {
                line: Some(line),
                message,
            },
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse { line, source } => {
                write!(f, "Parse error at line {}: {}", line, source)
            }
            Error::Replay {
                line: Some(line),
                message,
            } => write!(f, "Replay error at line {}: {}", line, message),
            Error::Replay {
                line: None,
                message,
            } => write!(f, "Replay error: {}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse { source, .. } => Some(source),
            Error::Replay { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
