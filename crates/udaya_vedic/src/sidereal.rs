//! Geocentric sidereal longitudes of the planets.
//!
//! The geometric geocentric position from the engine is taken in the
//! ecliptic J2000 frame, moved to the mean equinox of date by adding p_A,
//! and referred to the sidereal zodiac by subtracting the ayanamsha.

use udaya_engine::{Body, Engine, Frame, Observer, Query};
use udaya_frames::{cartesian_to_spherical, general_precession_longitude_deg};
use udaya_time::jd_to_centuries;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::error::VedicError;
use crate::util::normalize_360;

/// Tropical ecliptic longitude of date in degrees, `[0, 360)`.
pub fn tropical_longitude_deg(
    engine: &Engine,
    body: Body,
    jd_utc: f64,
) -> Result<f64, VedicError> {
    let jd_tdb = engine.utc_jd_to_tdb_jd(jd_utc);
    let state = engine.query(Query {
        target: body,
        observer: Observer::Body(Body::Earth),
        frame: Frame::EclipticJ2000,
        epoch_tdb_jd: jd_tdb,
    })?;
    let lon_j2000 = cartesian_to_spherical(&state.position_km).lon_deg;
    let t = jd_to_centuries(jd_tdb);
    Ok(normalize_360(lon_j2000 + general_precession_longitude_deg(t)))
}

/// Sidereal ecliptic longitude in degrees, `[0, 360)`.
pub fn sidereal_longitude_deg(
    engine: &Engine,
    body: Body,
    jd_utc: f64,
    system: AyanamshaSystem,
) -> Result<f64, VedicError> {
    let tropical = tropical_longitude_deg(engine, body, jd_utc)?;
    let t = jd_to_centuries(engine.utc_jd_to_tdb_jd(jd_utc));
    Ok(normalize_360(tropical - ayanamsha_deg(system, t)))
}
