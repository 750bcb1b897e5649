//! SPK segments and Type 2 (Chebyshev position-only) evaluation.
//!
//! A Type 2 segment stores `N` fixed-length records followed by a four-word
//! directory `[INIT, INTLEN, RSIZE, N]`. Each record is
//! `[MID, RADIUS, x₀..xₙ, y₀..yₙ, z₀..zₙ]` with positions in km; velocities
//! come from the derivative of the same series.

use crate::KernelError;
use crate::chebyshev::{clenshaw, clenshaw_derivative};
use crate::daf::{DafSummary, Endian, read_words};

/// SPK data type supported by this reader.
pub const SPK_TYPE_CHEBYSHEV_POSITION: i32 = 2;

/// An SPK segment descriptor with its Type 2 directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SpkSegment {
    pub target: i32,
    pub center: i32,
    pub frame: i32,
    pub data_type: i32,
    pub start_epoch_tdb_s: f64,
    pub end_epoch_tdb_s: f64,
    pub start_word: usize,
    pub end_word: usize,
    pub init_s: f64,
    pub interval_s: f64,
    pub record_words: usize,
    pub record_count: usize,
}

impl SpkSegment {
    /// Build a segment from its DAF summary and directory words.
    ///
    /// Returns `Ok(None)` for segment types other than Type 2.
    pub(crate) fn from_summary(
        summary: &DafSummary,
        bytes: &[u8],
        endian: Endian,
    ) -> Result<Option<Self>, KernelError> {
        let (&[start, end, ..], &[target, center, frame, data_type, first, last, ..]) =
            (summary.doubles.as_slice(), summary.ints.as_slice())
        else {
            return Err(KernelError::InvalidData("SPK summary needs ND=2, NI=6".into()));
        };
        if data_type != SPK_TYPE_CHEBYSHEV_POSITION {
            return Ok(None);
        }
        if first < 1 || last < first + 3 {
            return Err(KernelError::InvalidData(format!(
                "segment {target}/{center} has bad addresses {first}..{last}"
            )));
        }

        let (start_word, end_word) = (first as usize, last as usize);
        let dir = read_words(bytes, endian, end_word - 3, 4)?;
        let (init_s, interval_s, record_words, record_count) =
            (dir[0], dir[1], dir[2] as usize, dir[3] as usize);

        if interval_s <= 0.0 || record_count == 0 || record_words < 5 || (record_words - 2) % 3 != 0
        {
            return Err(KernelError::InvalidData(format!(
                "segment {target}/{center} has bad Type 2 directory {dir:?}"
            )));
        }
        if start_word + record_count * record_words + 3 != end_word {
            return Err(KernelError::InvalidData(format!(
                "segment {target}/{center}: {record_count} records of {record_words} words do not fill {start_word}..{end_word}"
            )));
        }

        Ok(Some(Self {
            target,
            center,
            frame,
            data_type,
            start_epoch_tdb_s: start,
            end_epoch_tdb_s: end,
            start_word,
            end_word,
            init_s,
            interval_s,
            record_words,
            record_count,
        }))
    }

    pub fn covers(&self, epoch_tdb_s: f64) -> bool {
        (self.start_epoch_tdb_s..=self.end_epoch_tdb_s).contains(&epoch_tdb_s)
    }

    /// Chebyshev coefficients per coordinate.
    pub fn coefficient_count(&self) -> usize {
        (self.record_words - 2) / 3
    }

    fn record_index(&self, epoch_tdb_s: f64) -> usize {
        let idx = ((epoch_tdb_s - self.init_s) / self.interval_s).floor();
        if idx <= 0.0 {
            0
        } else {
            (idx as usize).min(self.record_count - 1)
        }
    }

    pub(crate) fn evaluate(
        &self,
        bytes: &[u8],
        endian: Endian,
        epoch_tdb_s: f64,
    ) -> Result<SpkEvaluation, KernelError> {
        let index = self.record_index(epoch_tdb_s);
        let record = read_words(
            bytes,
            endian,
            self.start_word + index * self.record_words,
            self.record_words,
        )?;
        let (mid, radius) = (record[0], record[1]);
        if radius <= 0.0 {
            return Err(KernelError::InvalidData(format!(
                "record {index} of {}/{} has radius {radius}",
                self.target, self.center
            )));
        }

        let s = (epoch_tdb_s - mid) / radius;
        let n = self.coefficient_count();
        let mut eval = SpkEvaluation::default();
        for (axis, coeffs) in record[2..].chunks_exact(n).enumerate() {
            eval.position_km[axis] = clenshaw(coeffs, s);
            eval.velocity_km_s[axis] = clenshaw_derivative(coeffs, s) / radius;
        }
        Ok(eval)
    }
}

/// Position and velocity of a target relative to its segment center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpkEvaluation {
    pub position_km: [f64; 3],
    pub velocity_km_s: [f64; 3],
}

/// Map a planet body code (`x99`) to its system barycenter (`x`).
///
/// Other codes are returned unchanged. Short DE kernels such as
/// `de440s.bsp` only carry barycenters for Mars through Pluto.
pub const fn planet_body_to_barycenter(code: i32) -> i32 {
    if code >= 199 && code <= 999 && code % 100 == 99 {
        code / 100
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barycenter_mapping() {
        assert_eq!(planet_body_to_barycenter(199), 1);
        assert_eq!(planet_body_to_barycenter(499), 4);
        assert_eq!(planet_body_to_barycenter(999), 9);
        assert_eq!(planet_body_to_barycenter(399), 3);
        assert_eq!(planet_body_to_barycenter(301), 301);
        assert_eq!(planet_body_to_barycenter(10), 10);
        assert_eq!(planet_body_to_barycenter(0), 0);
    }

    fn segment(records: usize) -> SpkSegment {
        SpkSegment {
            target: 4,
            center: 0,
            frame: 1,
            data_type: 2,
            start_epoch_tdb_s: 0.0,
            end_epoch_tdb_s: 100.0 * records as f64,
            start_word: 1,
            end_word: 1 + records * 8 + 3,
            init_s: 0.0,
            interval_s: 100.0,
            record_words: 8,
            record_count: records,
        }
    }

    #[test]
    fn record_index_clamps() {
        let seg = segment(4);
        assert_eq!(seg.record_index(-5.0), 0);
        assert_eq!(seg.record_index(0.0), 0);
        assert_eq!(seg.record_index(150.0), 1);
        assert_eq!(seg.record_index(399.9), 3);
        assert_eq!(seg.record_index(400.0), 3);
        assert_eq!(seg.coefficient_count(), 2);
    }

    #[test]
    fn coverage_is_inclusive() {
        let seg = segment(2);
        assert!(seg.covers(0.0));
        assert!(seg.covers(200.0));
        assert!(!seg.covers(200.001));
        assert!(!seg.covers(-0.001));
    }
}
