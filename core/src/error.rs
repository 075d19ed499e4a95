use serde_json::Value;
use thiserror::Error;

/// Feil ved oppslag/konstruksjon av en treningspakke. Alle er gjenopprettbare:
/// batch-kjøringen rapporterer dem og fortsetter.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PackageError {
    #[error("unknown workout type: {0:?}")]
    UnknownCode(String),

    #[error("{code}: expected {expected} readings, got {got}")]
    ArityMismatch {
        code: String,
        expected: usize,
        got: usize,
    },

    #[error("{code}: reading #{index} ({field}) must be {expected}, got {value}")]
    InvalidReading {
        code: String,
        field: &'static str,
        index: usize,
        expected: &'static str,
        value: Value,
    },
}

impl PackageError {
    /// Kort etikett brukt som metrikk-label.
    pub fn reason(&self) -> &'static str {
        match self {
            PackageError::UnknownCode(_) => "unknown_code",
            PackageError::ArityMismatch { .. } => "arity",
            PackageError::InvalidReading { .. } => "invalid_reading",
        }
    }
}

/// Feil ved innlesing av en batch-fil fra disk.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid batch file {path} at {at}: {source}")]
    Parse {
        path: String,
        at: String,
        #[source]
        source: serde_json::Error,
    },
}
