//! Sunrise/sunset computation.
//!
//! Iterative hour-angle method: estimate local transit from the Sun's right
//! ascension at noon, offset by the hour angle at which the Sun's center
//! reaches the target altitude, then refine with the Sun's position at the
//! estimated event time until the correction falls below a tenth of a
//! second.
//!
//! Sources: Meeus, "Astronomical Algorithms", Ch. 15; Montenbruck & Pfleger.

use std::f64::consts::TAU;

use tracing::trace;
use udaya_engine::{Body, Engine, Frame, Observer, Query};
use udaya_frames::{
    cartesian_to_spherical, ecliptic_to_equatorial, general_precession_longitude_deg,
    mean_obliquity_of_date_rad,
};
use udaya_time::{SIDEREAL_REVS_PER_DAY, gmst_rad, jd_to_centuries, local_sidereal_time_rad};

use crate::error::VedicError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::util::wrap_pi;

/// Refinement passes before giving up with `NoConvergence`.
const MAX_ITERATIONS: usize = 10;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// IAU 2015 nominal solar radius in km.
const SUN_RADIUS_KM: f64 = 696_000.0;

/// Hour-angle rate in radians per UTC day.
const SIDEREAL_RATE: f64 = TAU * SIDEREAL_REVS_PER_DAY;

/// Approximate UTC JD of local solar noon for the day starting at
/// `jd_ut_midnight` (0h UT).
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    let lon = (longitude_deg + 180.0).rem_euclid(360.0) - 180.0;
    jd_ut_midnight + 0.5 - lon / 360.0
}

/// Sun's geocentric `(ra, dec, distance_km)` referred to the mean equator
/// and equinox of date.
pub(crate) fn sun_equatorial_of_date(
    engine: &Engine,
    jd_tdb: f64,
) -> Result<(f64, f64, f64), VedicError> {
    let state = engine.query(Query {
        target: Body::Sun,
        observer: Observer::Body(Body::Earth),
        frame: Frame::EclipticJ2000,
        epoch_tdb_jd: jd_tdb,
    })?;
    let sph = cartesian_to_spherical(&state.position_km);
    let t = jd_to_centuries(jd_tdb);
    let lon = sph.lon_rad() + general_precession_longitude_deg(t).to_radians();
    let (ra, dec) = ecliptic_to_equatorial(lon, sph.lat_rad(), mean_obliquity_of_date_rad(t));
    Ok((ra, dec, sph.distance_km))
}

fn solar_semidiameter_arcmin(distance_km: f64) -> f64 {
    (SUN_RADIUS_KM / distance_km).asin().to_degrees() * 60.0
}

enum Horizon {
    HourAngle(f64),
    NeverRises,
    NeverSets,
}

/// Hour angle at which a body at `dec` reaches altitude `h0`.
fn horizon_hour_angle(phi: f64, dec: f64, h0: f64) -> Horizon {
    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h > 1.0 {
        Horizon::NeverRises
    } else if cos_h < -1.0 {
        Horizon::NeverSets
    } else {
        Horizon::HourAngle(cos_h.acos())
    }
}

/// Sun hour angle at a UTC instant, `[-π, π)`. UT1 is taken as UTC.
fn sun_hour_angle(location: &GeoLocation, jd_utc: f64, ra: f64) -> f64 {
    let lst = local_sidereal_time_rad(gmst_rad(jd_utc), location.longitude_rad());
    wrap_pi(lst - ra)
}

/// Compute a single sunrise or sunset for the solar day around
/// `jd_utc_noon`.
///
/// Use [`approximate_local_noon_jd`] to get `jd_utc_noon` from a calendar
/// date and longitude. Returns `NeverRises`/`NeverSets` when the Sun does not
/// cross the target altitude that day.
pub fn compute_rise_set(
    engine: &Engine,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_utc_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    location.validate()?;
    let phi = location.latitude_rad();
    let target_altitude = |dist: f64| {
        config
            .target_altitude_deg(solar_semidiameter_arcmin(dist), location.altitude_m)
            .to_radians()
    };

    let (ra, dec, dist) = sun_equatorial_of_date(engine, engine.utc_jd_to_tdb_jd(jd_utc_noon))?;
    let h = match horizon_hour_angle(phi, dec, target_altitude(dist)) {
        Horizon::HourAngle(h) => h,
        Horizon::NeverRises => return Ok(RiseSetResult::NeverRises),
        Horizon::NeverSets => return Ok(RiseSetResult::NeverSets),
    };

    let jd_transit = jd_utc_noon - sun_hour_angle(location, jd_utc_noon, ra) / SIDEREAL_RATE;
    let mut jd_event = if event.is_rising() {
        jd_transit - h / SIDEREAL_RATE
    } else {
        jd_transit + h / SIDEREAL_RATE
    };

    let mut converged = false;
    for iteration in 0..MAX_ITERATIONS {
        let (ra, dec, dist) = sun_equatorial_of_date(engine, engine.utc_jd_to_tdb_jd(jd_event))?;
        let h = match horizon_hour_angle(phi, dec, target_altitude(dist)) {
            Horizon::HourAngle(h) => h,
            Horizon::NeverRises => return Ok(RiseSetResult::NeverRises),
            Horizon::NeverSets => return Ok(RiseSetResult::NeverSets),
        };
        let ha_target = if event.is_rising() { -h } else { h };
        let correction =
            wrap_pi(ha_target - sun_hour_angle(location, jd_event, ra)) / SIDEREAL_RATE;
        jd_event += correction;
        trace!(?event, iteration, jd_event, correction, "rise/set refinement");
        if correction.abs() < CONVERGENCE_DAYS {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(VedicError::NoConvergence("sunrise/sunset refinement"));
    }

    Ok(RiseSetResult::Event {
        jd_utc: jd_event,
        jd_tdb: engine.utc_jd_to_tdb_jd(jd_event),
        event,
    })
}

/// First `event` at or after `jd_utc`.
///
/// Solves the solar days before, of and after the UT date of `jd_utc` and
/// returns the earliest event not preceding it. When none qualifies, the
/// last polar result (`NeverRises`/`NeverSets`) is returned.
pub fn next_rise_set(
    engine: &Engine,
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_utc: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    let jd_0h = (jd_utc - 0.5).floor() + 0.5;
    let mut polar = None;
    for offset in [-1.0, 0.0, 1.0] {
        let noon = approximate_local_noon_jd(jd_0h + offset, location.longitude_deg);
        match compute_rise_set(engine, location, event, noon, config)? {
            found @ RiseSetResult::Event { jd_utc: at, .. } if at >= jd_utc => return Ok(found),
            RiseSetResult::Event { .. } => {}
            other => polar = Some(other),
        }
    }
    polar.ok_or(VedicError::NoConvergence("no event on the following solar day"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{AU_KM, engine_with_sun_at};

    const NOON_2024_03_20: f64 = 2_460_390.0;

    fn altitude_at(engine: &Engine, location: &GeoLocation, jd_utc: f64) -> f64 {
        let (ra, dec, _) = sun_equatorial_of_date(engine, engine.utc_jd_to_tdb_jd(jd_utc)).unwrap();
        let phi = location.latitude_rad();
        let h = sun_hour_angle(location, jd_utc, ra);
        (phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos())
            .asin()
            .to_degrees()
    }

    #[test]
    fn local_noon() {
        let jd_0h = 2_460_000.5;
        assert!((approximate_local_noon_jd(jd_0h, 0.0) - (jd_0h + 0.5)).abs() < 1e-10);
        assert!((approximate_local_noon_jd(jd_0h, 90.0) - (jd_0h + 0.25)).abs() < 1e-10);
        assert!((approximate_local_noon_jd(jd_0h, -90.0) - (jd_0h + 0.75)).abs() < 1e-10);
        // 270 E is 90 W
        assert!((approximate_local_noon_jd(jd_0h, 270.0) - (jd_0h + 0.75)).abs() < 1e-10);
    }

    #[test]
    fn semidiameter_at_one_au() {
        let sd = solar_semidiameter_arcmin(AU_KM);
        assert!((sd - 16.0).abs() < 0.05, "{sd}");
        assert!(solar_semidiameter_arcmin(147.1e6) > solar_semidiameter_arcmin(152.1e6));
    }

    #[test]
    fn event_lies_on_target_altitude() {
        let engine = engine_with_sun_at(0.0);
        let config = RiseSetConfig::default();
        let loc = GeoLocation::new(-15.4167, 28.2833, 0.0);
        for event in [RiseSetEvent::Sunrise, RiseSetEvent::Sunset] {
            let noon = approximate_local_noon_jd(NOON_2024_03_20 - 0.5, loc.longitude_deg);
            let RiseSetResult::Event { jd_utc, jd_tdb, .. } =
                compute_rise_set(&engine, &loc, event, noon, &config).unwrap()
            else {
                panic!("expected an event");
            };
            let expected = config.target_altitude_deg(solar_semidiameter_arcmin(AU_KM), 0.0);
            let alt = altitude_at(&engine, &loc, jd_utc);
            assert!((alt - expected).abs() < 1e-3, "{event:?}: altitude {alt}");
            assert!(((jd_tdb - jd_utc) * 86_400.0 - 69.184).abs() < 2e-3);
            // Roughly six hours either side of local noon.
            let offset_h = (jd_utc - noon) * 24.0;
            let expected_side = if event.is_rising() { -1.0 } else { 1.0 };
            assert!((offset_h * expected_side - 6.0).abs() < 0.5, "{event:?}: {offset_h} h");
        }
    }

    #[test]
    fn polar_night_and_midnight_sun() {
        // Sun fixed at the December solstice point.
        let engine = engine_with_sun_at(270.0);
        let config = RiseSetConfig::default();
        let noon = NOON_2024_03_20;
        let north = GeoLocation::new(80.0, 0.0, 0.0);
        let south = GeoLocation::new(-80.0, 0.0, 0.0);
        assert_eq!(
            compute_rise_set(&engine, &north, RiseSetEvent::Sunrise, noon, &config).unwrap(),
            RiseSetResult::NeverRises
        );
        assert_eq!(
            compute_rise_set(&engine, &south, RiseSetEvent::Sunset, noon, &config).unwrap(),
            RiseSetResult::NeverSets
        );
        assert_eq!(
            next_rise_set(&engine, &north, RiseSetEvent::Sunrise, noon, &config).unwrap(),
            RiseSetResult::NeverRises
        );
    }

    #[test]
    fn next_event_not_before_start() {
        let engine = engine_with_sun_at(0.0);
        let config = RiseSetConfig::default();
        for lon in [-170.0, -30.0, 0.0, 77.2, 170.0] {
            let loc = GeoLocation::new(10.0, lon, 0.0);
            for event in [RiseSetEvent::Sunrise, RiseSetEvent::Sunset] {
                let RiseSetResult::Event { jd_utc, .. } =
                    next_rise_set(&engine, &loc, event, NOON_2024_03_20, &config).unwrap()
                else {
                    panic!("expected an event");
                };
                assert!(jd_utc >= NOON_2024_03_20, "lon {lon} {event:?}");
                assert!(jd_utc < NOON_2024_03_20 + 1.0, "lon {lon} {event:?}");
            }
        }
    }

    #[test]
    fn rejects_bad_location() {
        let engine = engine_with_sun_at(0.0);
        let loc = GeoLocation::new(f64::NAN, 0.0, 0.0);
        let err = compute_rise_set(
            &engine,
            &loc,
            RiseSetEvent::Sunrise,
            NOON_2024_03_20,
            &RiseSetConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, VedicError::InvalidLocation(_)));
    }

    #[test]
    fn engine_errors_propagate() {
        let engine = crate::test_support::engine_without_sun();
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let err = compute_rise_set(
            &engine,
            &loc,
            RiseSetEvent::Sunrise,
            NOON_2024_03_20,
            &RiseSetConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, VedicError::Engine(_)));
    }
}
