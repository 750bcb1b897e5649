//! UTC ↔ TAI ↔ TT ↔ TDB conversions driven by LSK constants.
//!
//! TDB − TT follows the NAIF approximation `K·sin(E)` with
//! `E = M + EB·sin(M)` and `M = M0 + M1·TT`, accurate to ~30 µs.
//! All epochs are seconds past J2000.0 on their own scale.

use crate::lsk::LskData;

/// Fixed-point iterations used to invert TDB and UTC relationships.
const INVERSE_ITERATIONS: usize = 3;

/// TDB − TT in seconds at a TT epoch.
pub fn tdb_minus_tt(tt_s: f64, lsk: &LskData) -> f64 {
    let m = lsk.m0 + lsk.m1 * tt_s;
    let e = m + lsk.eb * m.sin();
    lsk.k * e.sin()
}

/// UTC seconds past J2000 to TDB seconds past J2000.
pub fn utc_to_tdb(utc_s: f64, lsk: &LskData) -> f64 {
    let tai = utc_s + lsk.delta_at(utc_s);
    let tt = tai + lsk.delta_t_a;
    tt + tdb_minus_tt(tt, lsk)
}

/// TDB seconds past J2000 to UTC seconds past J2000.
///
/// Instants inside an inserted leap second map onto the following
/// UTC second.
pub fn tdb_to_utc(tdb_s: f64, lsk: &LskData) -> f64 {
    let mut tt = tdb_s;
    for _ in 0..INVERSE_ITERATIONS {
        tt = tdb_s - tdb_minus_tt(tt, lsk);
    }
    let tai = tt - lsk.delta_t_a;

    let mut utc = tai - lsk.delta_at(tai);
    for _ in 0..INVERSE_ITERATIONS {
        utc = tai - lsk.delta_at(utc);
    }
    utc
}
