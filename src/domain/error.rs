use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Locator;

/// Library-wide error type for include resolution.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or client construction issue.
    #[error("{0}")]
    Configuration(String),

    /// An include entry or input path was empty.
    #[error("the file path is blank")]
    BlankPath,

    /// A path or URL could not be parsed as a locator.
    #[error("could not parse path '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// A locator appears in its own chain of ancestors.
    #[error("the url recursively includes itself ({locator})")]
    RecursiveInclude { locator: Locator },

    /// The HTTP(S) fetch returned something other than 200 OK.
    #[error("failed to load url : {status} : {locator}")]
    LoadFailed { status: u16, locator: Locator },

    /// Transport-level HTTP failure (connect, TLS, body read).
    #[error("HTTP request for {locator} failed: {details}")]
    Http { locator: Locator, details: String },

    /// Object-storage client, open or read failure.
    #[error("object storage error for bucket {bucket:?}, file {object:?}: {details}")]
    ObjectStorage { bucket: String, object: String, details: String },

    /// Reading a local file failed.
    #[error("unable to read {}: {source}", .path.display())]
    LocalRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document factory rejected a payload.
    #[error("invalid document{}: {details}", origin_suffix(.locator))]
    Document { locator: Option<Locator>, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

fn origin_suffix(locator: &Option<Locator>) -> String {
    match locator {
        Some(locator) => format!(" at {}", locator),
        None => String::new(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers that only care about the category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::LocalRead { source, .. } => source.kind(),
            AppError::BlankPath
            | AppError::Parse { .. }
            | AppError::RecursiveInclude { .. }
            | AppError::Document { .. }
            | AppError::Configuration(_)
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::LoadFailed { status: 404, .. } => io::ErrorKind::NotFound,
            AppError::LoadFailed { status: 403, .. } => io::ErrorKind::PermissionDenied,
            AppError::LoadFailed { .. } | AppError::Http { .. } | AppError::ObjectStorage { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}
