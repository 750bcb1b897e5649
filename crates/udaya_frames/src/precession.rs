//! IAU 2006 general precession in ecliptic longitude, p_A.
//!
//! Accumulated motion of the equinox along the ecliptic since J2000.0.
//! Adding p_A to a J2000 ecliptic longitude gives (to first order) the
//! longitude referred to the mean equinox of date; it is also the
//! secular part of every ayanamsha.
//!
//! Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).

/// p_A in arcseconds; `t` is Julian centuries of TDB since J2000.0.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    5028.796_195 * t + 1.105_434_8 * t2 + 0.000_079_64 * t3
        - 0.000_023_857 * t3 * t
        - 0.000_000_038_3 * t3 * t2
}

/// p_A in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}
