//! Lagna (Ascendant) and MC computation.
//!
//! Ecliptic longitude of the point rising on the eastern horizon, from local
//! sidereal time, geographic latitude and the mean obliquity of date
//! (Meeus, "Astronomical Algorithms", Ch. 13). The ascendant does not depend
//! on the house system.

use std::f64::consts::TAU;

use udaya_engine::Engine;
use udaya_frames::mean_obliquity_of_date_rad;
use udaya_time::{gmst_rad, jd_to_centuries, local_sidereal_time_rad};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::error::VedicError;
use crate::riseset_types::GeoLocation;
use crate::util::normalize_360;

/// Tropical ascendant in radians, `[0, 2π)`.
///
/// `asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))` with θ the local
/// sidereal time, φ the latitude and ε the obliquity.
pub fn ascendant_tropical_rad(lst_rad: f64, latitude_rad: f64, eps_rad: f64) -> f64 {
    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * eps_rad.cos() + latitude_rad.tan() * eps_rad.sin()),
    );
    asc.rem_euclid(TAU)
}

/// Tropical MC in radians, `[0, 2π)`: `atan2(sin θ, cos θ·cos ε)`.
pub fn mc_tropical_rad(lst_rad: f64, eps_rad: f64) -> f64 {
    f64::atan2(lst_rad.sin(), lst_rad.cos() * eps_rad.cos()).rem_euclid(TAU)
}

/// Local sidereal time in radians for a UTC instant (UT1 ≈ UTC).
pub fn local_sidereal_time_at(location: &GeoLocation, jd_utc: f64) -> f64 {
    local_sidereal_time_rad(gmst_rad(jd_utc), location.longitude_rad())
}

fn check_location(location: &GeoLocation) -> Result<(), VedicError> {
    location.validate()?;
    if location.latitude_deg.abs() >= 90.0 {
        return Err(VedicError::InvalidLocation(
            "ascendant is undefined at the poles",
        ));
    }
    Ok(())
}

/// Tropical ascendant of date in degrees, `[0, 360)`.
pub fn tropical_lagna_deg(
    engine: &Engine,
    location: &GeoLocation,
    jd_utc: f64,
) -> Result<f64, VedicError> {
    check_location(location)?;
    let t = jd_to_centuries(engine.utc_jd_to_tdb_jd(jd_utc));
    let lst = local_sidereal_time_at(location, jd_utc);
    let asc = ascendant_tropical_rad(lst, location.latitude_rad(), mean_obliquity_of_date_rad(t));
    Ok(normalize_360(asc.to_degrees()))
}

/// Sidereal ascendant in degrees, `[0, 360)`.
pub fn sidereal_lagna_deg(
    engine: &Engine,
    location: &GeoLocation,
    jd_utc: f64,
    system: AyanamshaSystem,
) -> Result<f64, VedicError> {
    let tropical = tropical_lagna_deg(engine, location, jd_utc)?;
    let t = jd_to_centuries(engine.utc_jd_to_tdb_jd(jd_utc));
    Ok(normalize_360(tropical - ayanamsha_deg(system, t)))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::test_support::engine_with_sun_at;
    use udaya_frames::OBLIQUITY_J2000_RAD;

    const EPS: f64 = OBLIQUITY_J2000_RAD;

    #[test]
    fn equator_lst_zero_rises_cancer() {
        // Equinox on the meridian: 0 Cancer on the eastern horizon.
        let asc = ascendant_tropical_rad(0.0, 0.0, EPS);
        assert!((asc - FRAC_PI_2).abs() < 1e-12, "{}", asc.to_degrees());
    }

    #[test]
    fn equator_lst_quarter_rises_libra() {
        let asc = ascendant_tropical_rad(FRAC_PI_2, 0.0, EPS);
        assert!((asc - PI).abs() < 1e-12, "{}", asc.to_degrees());
    }

    #[test]
    fn ascendant_is_on_eastern_horizon() {
        // The rising point has zero altitude and an eastern hour angle.
        let phi = 28.6_f64.to_radians();
        for i in 0..24 {
            let lst = TAU * i as f64 / 24.0;
            let asc = ascendant_tropical_rad(lst, phi, EPS);
            let (ra, dec) = udaya_frames::ecliptic_to_equatorial(asc, 0.0, EPS);
            let ha = (lst - ra + PI).rem_euclid(TAU) - PI;
            let alt = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * ha.cos()).asin();
            assert!(alt.abs() < 1e-9, "lst {i}h: altitude {alt}");
            assert!(ha < 0.0, "lst {i}h: hour angle {ha}");
        }
    }

    #[test]
    fn ascendant_sweeps_full_circle() {
        let phi = (-15.4_f64).to_radians();
        let (mut lo, mut hi) = (f64::MAX, f64::MIN);
        for i in 0..360 {
            let asc = ascendant_tropical_rad(TAU * i as f64 / 360.0, phi, EPS);
            lo = lo.min(asc);
            hi = hi.max(asc);
        }
        assert!(lo < 0.05 && hi > TAU - 0.05, "{lo} {hi}");
    }

    #[test]
    fn mc_at_lst_zero() {
        assert!(mc_tropical_rad(0.0, EPS).abs() < 1e-12);
        assert!((mc_tropical_rad(FRAC_PI_2, EPS) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn sidereal_lagna_subtracts_ayanamsha() {
        let engine = engine_with_sun_at(0.0);
        let loc = GeoLocation::new(-15.4167, 28.2833, 0.0);
        let jd = 2_460_390.25;
        let tropical = tropical_lagna_deg(&engine, &loc, jd).unwrap();
        let t = jd_to_centuries(engine.utc_jd_to_tdb_jd(jd));
        for &system in AyanamshaSystem::all() {
            let sidereal = sidereal_lagna_deg(&engine, &loc, jd, system).unwrap();
            let diff = normalize_360(tropical - sidereal);
            assert!((diff - ayanamsha_deg(system, t)).abs() < 1e-9, "{system:?}");
        }
    }

    #[test]
    fn lagna_advances_through_the_day() {
        let engine = engine_with_sun_at(0.0);
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let a = tropical_lagna_deg(&engine, &loc, 2_460_390.0).unwrap();
        let b = tropical_lagna_deg(&engine, &loc, 2_460_390.0 + 1.0 / 24.0).unwrap();
        let step = normalize_360(b - a);
        // About 15 degrees per hour at the equator, more or less by sign.
        assert!((5.0..30.0).contains(&step), "{step}");
    }

    #[test]
    fn poles_rejected() {
        let engine = engine_with_sun_at(0.0);
        let pole = GeoLocation::new(90.0, 0.0, 0.0);
        assert!(matches!(
            sidereal_lagna_deg(&engine, &pole, 2_460_390.0, AyanamshaSystem::Lahiri),
            Err(VedicError::InvalidLocation(_))
        ));
    }
}
