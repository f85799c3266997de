use std::path::PathBuf;

/// Rejected before the first draw, so a bad configuration never produces output.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("number of simulated attempts must be at least 1")]
    NoAttempts,
}

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("unknown answer symbol {0:?}, expected one of A, B, C, D")]
    UnknownChoice(String),

    #[error("failed to write results to {}: {}", .path.display(), .source)]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode results: {0}")]
    Csv(#[from] csv::Error),
}

impl QuizError {
    /// I/O kind behind an export failure, if that is what went wrong.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            QuizError::Export { source, .. } => Some(source.kind()),
            QuizError::Csv(e) => match e.kind() {
                csv::ErrorKind::Io(io) => Some(io.kind()),
                _ => None,
            },
            _ => None,
        }
    }
}
