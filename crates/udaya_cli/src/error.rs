//! Application error types.

use thiserror::Error;
use udaya_engine::EngineError;
use udaya_vedic::VedicError;

/// Failures of the ephemeris oracle.
///
/// The `Display` text is what the sunrise/sunset boundary writes into the
/// response.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("cannot load ephemeris: {0}")]
    Load(#[from] EngineError),
    #[error("{0}")]
    Vedic(#[from] VedicError),
    #[error("sun never rises at latitude {latitude_deg}")]
    NeverRises { latitude_deg: f64 },
    #[error("sun never sets at latitude {latitude_deg}")]
    NeverSets { latitude_deg: f64 },
    /// Raised by non-engine oracles, such as test doubles.
    #[error("{0}")]
    Other(String),
}

/// Failures decoding the request.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RequestError {
    #[error("request is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` is not {expected}: {value}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}
