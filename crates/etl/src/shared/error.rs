use std::path::PathBuf;
use thiserror::Error;

/// Ошибки на границе ввода-вывода (чтение исходников, запись результатов)
///
/// The cleaning/join/aggregation core never produces these: malformed text
/// degrades to 0 or an empty string there.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}: required column '{column}' not found (accepted headers: {accepted})")]
    MissingColumn {
        path: PathBuf,
        column: &'static str,
        accepted: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sheet sink error: {0}")]
    Sink(String),
}

impl EtlError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EtlError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        EtlError::Csv {
            path: path.into(),
            source,
        }
    }
}

pub type EtlResult<T> = Result<T, EtlError>;
