//! Error types for Vedic calculations.

use thiserror::Error;
use udaya_engine::EngineError;
use udaya_time::TimeError;

/// Errors from Vedic calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris engine.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    /// Error from time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Iterative algorithm did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// Ayanamsha name not recognised.
    #[error("unknown ayanamsha system '{0}'")]
    UnknownAyanamsha(String),
}
