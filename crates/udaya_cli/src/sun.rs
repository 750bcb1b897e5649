//! Sunrise/sunset lookup, the one place where ephemeris failures are
//! absorbed into the response instead of aborting.

use tracing::warn;
use udaya_vedic::{GeoLocation, RiseSetConfig, RiseSetEvent};

use crate::ephemeris::Ephemeris;
use crate::error::EphemerisError;
use crate::sampling::Observation;

/// Hour of the request date from which the next events are searched (UT).
pub const SEARCH_FROM_HOUR_UT: f64 = 12.0;

pub const PRESSURE_HPA: f64 = 1013.25;
pub const TEMPERATURE_C: f64 = 15.0;

/// `H:MM UTC` with the hour unpadded and the minutes truncated.
pub fn format_utc<E: Ephemeris + ?Sized>(ephemeris: &E, jd: f64) -> String {
    let (_, _, day) = ephemeris.calendar(jd);
    let hour = day.fract() * 24.0;
    let minutes = (hour.fract() * 60.0).trunc() as u32;
    format!("{}:{minutes:02} UTC", hour.trunc() as u32)
}

fn lookup<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    obs: &Observation,
) -> Result<(String, String), EphemerisError> {
    let jd = ephemeris.julian_day(obs.year, obs.month, obs.day, SEARCH_FROM_HOUR_UT);
    let location = GeoLocation::new(obs.lat, obs.lon, 0.0);
    let conditions = RiseSetConfig {
        pressure_hpa: PRESSURE_HPA,
        temperature_c: TEMPERATURE_C,
        ..RiseSetConfig::default()
    };
    let rise = ephemeris.sun_event(RiseSetEvent::Sunrise, jd, &location, &conditions)?;
    let set = ephemeris.sun_event(RiseSetEvent::Sunset, jd, &location, &conditions)?;
    Ok((format_utc(ephemeris, rise), format_utc(ephemeris, set)))
}

/// `(sunrise, sunset)` text. If either lookup fails, both carry the
/// failure's message.
pub fn sunrise_sunset<E: Ephemeris + ?Sized>(ephemeris: &E, obs: &Observation) -> (String, String) {
    lookup(ephemeris, obs).unwrap_or_else(|e| {
        warn!(error = %e, "sunrise/sunset unavailable");
        let text = e.to_string();
        (text.clone(), text)
    })
}
