//! Sidereal ascendant windows.
//!
//! One JSON request in, one JSON response out: the ascendant and planetary
//! longitudes every half hour across a time-of-day window, the next
//! sunrise and sunset, and the most frequent ascendant sign.

pub mod config;
pub mod ephemeris;
pub mod error;
pub mod request;
pub mod response;
pub mod sampling;
pub mod sun;
pub mod window;

pub use config::Cli;
pub use ephemeris::{EngineEphemeris, Ephemeris};
pub use error::{EphemerisError, RequestError};
pub use request::Request;
pub use response::{Response, ruling_ascendant};
pub use sampling::{Observation, Planets, Sample, sample_window};
pub use sun::{format_utc, sunrise_sunset};
pub use window::{TimeWindow, WINDOWS, resolve_window};

use tracing::{debug, info_span};

/// Answer one request.
///
/// Sunrise/sunset failures are folded into the response text; anything
/// failing in the sampling loop is returned.
pub fn compute<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    request: &Request,
) -> Result<Response, EphemerisError> {
    let span = info_span!(
        "request",
        city = %request.city,
        date = %format_args!("{:04}-{:02}-{:02}", request.year, request.month, request.day),
        time_hint = %request.time_hint,
    );
    let _guard = span.enter();

    let obs = Observation {
        year: request.year,
        month: request.month,
        day: request.day,
        lat: request.lat,
        lon: request.lon,
        tz: request.tz,
    };
    let (sunrise, sunset) = sunrise_sunset(ephemeris, &obs);

    let window = resolve_window(&request.time_hint);
    debug!(window = window.label, "window resolved");
    let intervals = sample_window(ephemeris, &obs, window)?;
    let ruling_ascendant = ruling_ascendant(&intervals);

    Ok(Response {
        sunrise,
        sunset,
        intervals,
        city: request.city.clone(),
        lat: request.lat,
        lon: request.lon,
        tz: request.tz,
        ruling_ascendant,
    })
}
