//! Mean obliquity of the ecliptic (IAU 2006, Hilton et al. 2006).

use std::f64::consts::PI;

const ARCSEC_TO_RAD: f64 = PI / 648_000.0;

/// Mean obliquity at J2000.0 in arcseconds.
pub const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.406;

/// Mean obliquity at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = OBLIQUITY_J2000_ARCSEC / 3600.0;

/// Mean obliquity at J2000.0 in radians.
pub const OBLIQUITY_J2000_RAD: f64 = OBLIQUITY_J2000_ARCSEC * ARCSEC_TO_RAD;

/// Mean obliquity of date in radians.
///
/// `t` is Julian centuries of TDB since J2000.0.
pub fn mean_obliquity_of_date_rad(t: f64) -> f64 {
    let arcsec = OBLIQUITY_J2000_ARCSEC
        + t * (-46.836_769
            + t * (-0.000_183_1 + t * (0.002_003_40 + t * (-0.000_000_576 - t * 0.000_000_043_4))));
    arcsec * ARCSEC_TO_RAD
}
