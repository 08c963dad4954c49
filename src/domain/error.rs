//! Domain error types.

/// Top-level error type for stockscreen.
#[derive(Debug, thiserror::Error)]
pub enum ScreenerError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("failed to build HTTP client: {reason}")]
    HttpClient { reason: String },

    #[error("no data retrieved for {requested} symbol(s)")]
    NoData { requested: usize },

    #[error("failed to export to {path}: {reason}")]
    Export { path: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScreenerError {
    /// Process exit status reported for this error.
    pub fn status(&self) -> u8 {
        match self {
            ScreenerError::Io(_) => 1,
            ScreenerError::ConfigParse { .. } | ScreenerError::ConfigInvalid { .. } => 2,
            ScreenerError::HttpClient { .. } => 3,
            ScreenerError::NoData { .. } => 5,
            ScreenerError::Export { .. } => 6,
        }
    }
}

impl From<&ScreenerError> for std::process::ExitCode {
    fn from(err: &ScreenerError) -> Self {
        std::process::ExitCode::from(err.status())
    }
}
