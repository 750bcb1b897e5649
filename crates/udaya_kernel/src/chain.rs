//! Segment-chain resolution to the solar system barycenter over one or
//! more loaded kernels.

use crate::error::KernelError;
use crate::spk::{SpkEvaluation, planet_body_to_barycenter};
use crate::SpkKernel;

/// Longest chain followed before giving up on reaching code 0.
pub const MAX_CHAIN_HOPS: usize = 16;

/// Evaluate `(target, center)` from the first kernel that covers the
/// epoch. Later kernels are not consulted once one succeeds.
pub fn evaluate_across(
    kernels: &[SpkKernel],
    target: i32,
    center: i32,
    epoch_tdb_s: f64,
) -> Result<SpkEvaluation, KernelError> {
    let mut last_err = KernelError::SegmentNotFound { target, center };
    for kernel in kernels {
        match kernel.evaluate(target, center, epoch_tdb_s) {
            Ok(eval) => return Ok(eval),
            Err(e @ KernelError::EpochOutOfRange { .. }) => last_err = e,
            Err(KernelError::SegmentNotFound { .. }) => {}
            Err(e) => return Err(e),
        }
    }
    Err(last_err)
}

/// Center of `target` in the first kernel that has it.
pub fn center_across(kernels: &[SpkKernel], target: i32) -> Option<i32> {
    kernels.iter().find_map(|k| k.center_for(target))
}

/// State of `target` relative to the SSB (code 0), summing segments along
/// the center chain. Planet codes without a segment fall back to their
/// barycenter.
pub fn resolve_to_ssb_across(
    kernels: &[SpkKernel],
    target: i32,
    epoch_tdb_s: f64,
) -> Result<SpkEvaluation, KernelError> {
    let mut total = SpkEvaluation::default();
    let mut code = target;
    let mut hops = 0;
    while code != 0 {
        hops += 1;
        if hops > MAX_CHAIN_HOPS {
            return Err(KernelError::InvalidData(format!(
                "segment chain from {target} does not reach the barycenter"
            )));
        }
        let Some(center) = center_across(kernels, code) else {
            let bary = planet_body_to_barycenter(code);
            if bary == code {
                return Err(KernelError::SegmentNotFound {
                    target: code,
                    center: -1,
                });
            }
            code = bary;
            continue;
        };
        let eval = evaluate_across(kernels, code, center, epoch_tdb_s)?;
        for i in 0..3 {
            total.position_km[i] += eval.position_km[i];
            total.velocity_km_s[i] += eval.velocity_km_s[i];
        }
        code = center;
    }
    Ok(total)
}
