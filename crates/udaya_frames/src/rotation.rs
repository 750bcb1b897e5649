//! ICRF ↔ ecliptic J2000 rotation.
//!
//! A rotation about the x axis by the J2000 mean obliquity. The ~20 mas
//! frame bias between ICRF and the mean J2000 equator is neglected.

use crate::obliquity::OBLIQUITY_J2000_RAD;

fn rotate_x(v: &[f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = angle.sin_cos();
    [v[0], c * v[1] + s * v[2], -s * v[1] + c * v[2]]
}

/// Rotate an ICRF (equatorial) vector into the ecliptic J2000 frame.
pub fn icrf_to_ecliptic(v: &[f64; 3]) -> [f64; 3] {
    rotate_x(v, OBLIQUITY_J2000_RAD)
}

/// Rotate an ecliptic J2000 vector back into ICRF.
pub fn ecliptic_to_icrf(v: &[f64; 3]) -> [f64; 3] {
    rotate_x(v, -OBLIQUITY_J2000_RAD)
}
