//! NAIF SPK kernel support.
//!
//! Reads DAF/SPK files holding Type 2 (Chebyshev position) segments, as
//! distributed for the JPL planetary ephemerides (`de440s.bsp` and
//! friends), and evaluates target states relative to their centers.
//!
//! Files are read into memory once; evaluation works on the owned buffer.

pub mod chain;
pub mod chebyshev;
pub mod daf;
mod error;
pub mod spk;
#[cfg(any(test, feature = "test-support"))]
pub mod writer;

use std::fmt::{Debug, Formatter};
use std::path::Path;

pub use daf::{DafHeader, DafSummary, Endian};
pub use error::KernelError;
pub use chain::{center_across, evaluate_across, resolve_to_ssb_across};
pub use spk::{SpkEvaluation, SpkSegment, planet_body_to_barycenter};
#[cfg(any(test, feature = "test-support"))]
pub use writer::{SpkWriter, Type2Record, Type2Segment};

/// A loaded SPK kernel.
pub struct SpkKernel {
    bytes: Vec<u8>,
    header: DafHeader,
    segments: Vec<SpkSegment>,
}

impl Debug for SpkKernel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpkKernel")
            .field("bytes", &self.bytes.len())
            .field("header", &self.header)
            .field("segments", &self.segments.len())
            .finish()
    }
}

impl SpkKernel {
    /// Load an SPK file from disk.
    pub fn load(path: &Path) -> Result<Self, KernelError> {
        let bytes = std::fs::read(path)
            .map_err(|e| KernelError::Io(format!("{}: {e}", path.display())))?;
        Self::parse(bytes)
    }

    /// Parse an SPK image already in memory.
    ///
    /// Segments of types other than 2 are skipped.
    pub fn parse(bytes: Vec<u8>) -> Result<Self, KernelError> {
        let header = daf::read_header(&bytes)?;
        if header.nd != 2 || header.ni != 6 {
            return Err(KernelError::InvalidFormat(format!(
                "SPK requires ND=2, NI=6 (got ND={}, NI={})",
                header.nd, header.ni
            )));
        }
        let mut segments = Vec::new();
        for summary in daf::read_summaries(&bytes, &header)? {
            if let Some(seg) = SpkSegment::from_summary(&summary, &bytes, header.endian)? {
                segments.push(seg);
            }
        }
        Ok(Self {
            bytes,
            header,
            segments,
        })
    }

    pub fn header(&self) -> &DafHeader {
        &self.header
    }

    pub fn segments(&self) -> &[SpkSegment] {
        &self.segments
    }

    /// Size of the loaded file in bytes.
    pub fn len_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Center of the segment chain for `target`, if any segment has it.
    ///
    /// When several segments exist for a target, the last one in the file
    /// takes precedence.
    pub fn center_for(&self, target: i32) -> Option<i32> {
        self.segments
            .iter()
            .rev()
            .find(|s| s.target == target)
            .map(|s| s.center)
    }

    /// State of `target` relative to `center` at `epoch_tdb_s`.
    pub fn evaluate(
        &self,
        target: i32,
        center: i32,
        epoch_tdb_s: f64,
    ) -> Result<SpkEvaluation, KernelError> {
        let mut matching = self
            .segments
            .iter()
            .rev()
            .filter(|s| s.target == target && s.center == center)
            .peekable();
        if matching.peek().is_none() {
            return Err(KernelError::SegmentNotFound { target, center });
        }
        match matching.find(|s| s.covers(epoch_tdb_s)) {
            Some(seg) => seg.evaluate(&self.bytes, self.header.endian, epoch_tdb_s),
            None => Err(KernelError::EpochOutOfRange {
                target,
                center,
                epoch_tdb_s,
            }),
        }
    }

    /// State of `target` relative to the solar system barycenter (code 0),
    /// summing segments along the center chain. Planet codes without a
    /// segment fall back to their barycenter.
    pub fn resolve_to_ssb(
        &self,
        target: i32,
        epoch_tdb_s: f64,
    ) -> Result<SpkEvaluation, KernelError> {
        resolve_to_ssb_across(std::slice::from_ref(self), target, epoch_tdb_s)
    }
}
