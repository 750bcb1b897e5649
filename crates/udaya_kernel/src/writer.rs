//! Minimal little-endian SPK Type 2 writer.
//!
//! Produces single-summary-record kernels, enough for fixtures and small
//! custom ephemerides. The reader in this crate accepts its output.

use std::path::Path;

use crate::KernelError;
use crate::daf::{FTPSTR, RECORD_BYTES};
use crate::spk::SPK_TYPE_CHEBYSHEV_POSITION;

const ND: usize = 2;
const NI: usize = 6;
const SUMMARY_WORDS: usize = ND + NI.div_ceil(2);
const MAX_SEGMENTS: usize = (RECORD_BYTES / 8 - 3) / SUMMARY_WORDS;
/// Record 1 is the file record, 2 the summaries, 3 the segment names.
const FIRST_DATA_WORD: usize = 3 * RECORD_BYTES / 8 + 1;

/// NAIF frame code of ICRF/J2000.
pub const FRAME_J2000: i32 = 1;

/// One Chebyshev record: coefficients per axis over `mid ± radius` seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Type2Record {
    pub mid_s: f64,
    pub radius_s: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

/// A Type 2 segment ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Type2Segment {
    pub target: i32,
    pub center: i32,
    pub frame: i32,
    pub records: Vec<Type2Record>,
}

impl Type2Segment {
    /// Single-record segment moving linearly through `position_km` at the
    /// midpoint of `[start_s, end_s]` with constant `velocity_km_s`.
    pub fn linear(
        target: i32,
        center: i32,
        start_s: f64,
        end_s: f64,
        position_km: [f64; 3],
        velocity_km_s: [f64; 3],
    ) -> Self {
        let mid_s = 0.5 * (start_s + end_s);
        let radius_s = 0.5 * (end_s - start_s);
        let axis = |i: usize| vec![position_km[i], velocity_km_s[i] * radius_s];
        Self {
            target,
            center,
            frame: FRAME_J2000,
            records: vec![Type2Record {
                mid_s,
                radius_s,
                x: axis(0),
                y: axis(1),
                z: axis(2),
            }],
        }
    }

    /// Segment at a fixed position over `[start_s, end_s]`.
    pub fn stationary(
        target: i32,
        center: i32,
        start_s: f64,
        end_s: f64,
        position_km: [f64; 3],
    ) -> Self {
        Self::linear(target, center, start_s, end_s, position_km, [0.0; 3])
    }

    fn validate(&self) -> Result<(usize, f64, f64), KernelError> {
        let first = self.records.first().ok_or_else(|| {
            KernelError::InvalidData(format!("segment {} has no records", self.target))
        })?;
        let n = first.x.len();
        let interval = 2.0 * first.radius_s;
        if n == 0 || interval <= 0.0 {
            return Err(KernelError::InvalidData(format!(
                "segment {} has an empty first record",
                self.target
            )));
        }
        for r in &self.records {
            if r.x.len() != n || r.y.len() != n || r.z.len() != n || r.radius_s != first.radius_s {
                return Err(KernelError::InvalidData(format!(
                    "segment {} records differ in size",
                    self.target
                )));
            }
        }
        Ok((n, first.mid_s - first.radius_s, interval))
    }
}

/// Accumulates Type 2 segments and serialises them as a DAF/SPK file.
#[derive(Debug, Clone, Default)]
pub struct SpkWriter {
    segments: Vec<Type2Segment>,
}

impl SpkWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: Type2Segment) -> &mut Self {
        self.segments.push(segment);
        self
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, KernelError> {
        if self.segments.len() > MAX_SEGMENTS {
            return Err(KernelError::InvalidData(format!(
                "at most {MAX_SEGMENTS} segments per kernel"
            )));
        }

        let mut data: Vec<f64> = Vec::new();
        let mut summary = vec![0u8; RECORD_BYTES];
        summary[16..24].copy_from_slice(&(self.segments.len() as f64).to_le_bytes());

        for (i, seg) in self.segments.iter().enumerate() {
            let (n, init, interval) = seg.validate()?;
            let first_word = FIRST_DATA_WORD + data.len();
            for r in &seg.records {
                data.extend([r.mid_s, r.radius_s]);
                data.extend(&r.x);
                data.extend(&r.y);
                data.extend(&r.z);
            }
            let record_words = 2 + 3 * n;
            data.extend([init, interval, record_words as f64, seg.records.len() as f64]);
            let last_word = FIRST_DATA_WORD + data.len() - 1;
            let end_s = init + interval * seg.records.len() as f64;

            let at = 24 + i * SUMMARY_WORDS * 8;
            summary[at..at + 8].copy_from_slice(&init.to_le_bytes());
            summary[at + 8..at + 16].copy_from_slice(&end_s.to_le_bytes());
            let ints = [
                seg.target,
                seg.center,
                seg.frame,
                SPK_TYPE_CHEBYSHEV_POSITION,
                first_word as i32,
                last_word as i32,
            ];
            for (k, v) in ints.iter().enumerate() {
                let o = at + 16 + k * 4;
                summary[o..o + 4].copy_from_slice(&v.to_le_bytes());
            }
        }

        let mut file = vec![0u8; RECORD_BYTES];
        file[..8].copy_from_slice(b"DAF/SPK ");
        file[8..12].copy_from_slice(&(ND as i32).to_le_bytes());
        file[12..16].copy_from_slice(&(NI as i32).to_le_bytes());
        file[16..76].fill(b' ');
        file[76..80].copy_from_slice(&2i32.to_le_bytes());
        file[80..84].copy_from_slice(&2i32.to_le_bytes());
        let free = (FIRST_DATA_WORD + data.len()) as i32;
        file[84..88].copy_from_slice(&free.to_le_bytes());
        file[88..96].copy_from_slice(b"LTL-IEEE");
        file[699..699 + FTPSTR.len()].copy_from_slice(FTPSTR);

        let names = vec![b' '; RECORD_BYTES];

        let mut out = Vec::with_capacity(3 * RECORD_BYTES + data.len() * 8);
        out.extend(file);
        out.extend(summary);
        out.extend(names);
        for w in data {
            out.extend(w.to_le_bytes());
        }
        out.resize(out.len().div_ceil(RECORD_BYTES) * RECORD_BYTES, 0);
        Ok(out)
    }

    pub fn write(&self, path: &Path) -> Result<(), KernelError> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}
