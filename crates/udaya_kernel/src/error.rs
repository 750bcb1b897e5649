use thiserror::Error;

/// Errors raised while loading or evaluating SPK kernels.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum KernelError {
    #[error("I/O error: {0}")]
    Io(String),
    #[error("invalid DAF/SPK format: {0}")]
    InvalidFormat(String),
    #[error("invalid SPK data: {0}")]
    InvalidData(String),
    #[error("no SPK segment for target {target} relative to center {center}")]
    SegmentNotFound { target: i32, center: i32 },
    #[error("epoch {epoch_tdb_s} s past J2000 TDB outside coverage of {target} w.r.t. {center}")]
    EpochOutOfRange {
        target: i32,
        center: i32,
        epoch_tdb_s: f64,
    },
}

impl From<std::io::Error> for KernelError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
