//! Earth rotation angle and mean sidereal time.
//!
//! Inputs are UT1 Julian Dates. Without an EOP table, callers pass UTC,
//! which keeps the error below one second of time (~15″ of rotation).
//!
//! ERA: IERS Conventions 2010, Eq. 5.15. GMST: Capitaine et al. 2003.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / 648_000.0;

/// Sidereal rotation rate of the Earth in revolutions per UT1 day.
pub const SIDEREAL_REVS_PER_DAY: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle in radians, `[0, 2π)`.
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    // Split the integral part of the day out to keep precision.
    let frac = du.rem_euclid(1.0);
    let turns = 0.779_057_273_264_0 + frac + (SIDEREAL_REVS_PER_DAY - 1.0) * du;
    (TAU * turns).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, `[0, 2π)`.
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_CENTURY;
    let poly = 0.014_506
        + t * (4612.156_534
            + t * (1.391_581_7 + t * (-0.000_000_44 + t * (-0.000_029_956 - t * 0.000_000_036_8))));
    (earth_rotation_angle_rad(jd_ut1) + poly * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time from GMST and east longitude, radians `[0, 2π)`.
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
