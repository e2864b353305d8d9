//! Error types for the slide poster.
//!
//! # Design
//! Only failures that prevent a response from being obtained are errors. A
//! 4xx/5xx reply is ordinary data and is printed like any other; there is no
//! status variant.

use std::{env, fmt, io};

/// A failure to obtain any response: DNS, connect, TLS or a broken stream.
///
/// Wraps the HTTP library's own error untranslated; `source()` returns it.
#[derive(Debug)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new(cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(cause.into())
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failed: {}", self.0)
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.0)
    }
}

/// Errors returned by `run`.
#[derive(Debug)]
pub enum Error {
    /// The token variable is unset or not valid unicode. Raised before any
    /// network activity.
    MissingToken { var: &'static str, source: env::VarError },

    /// The request never produced a response.
    Transport(TransportError),

    /// Writing the result lines to the output stream failed.
    Output(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingToken { var, source } => write!(f, "{var}: {source}"),
            Error::Transport(e) => write!(f, "{e}"),
            Error::Output(e) => write!(f, "writing output failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingToken { source, .. } => Some(source),
            Error::Transport(e) => Some(e),
            Error::Output(e) => Some(e),
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Output(e)
    }
}
