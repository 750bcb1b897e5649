//! Half-hour sampling of the ascendant and planetary longitudes.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;
use udaya_engine::Body;
use udaya_vedic::rashi_from_degree;

use crate::ephemeris::Ephemeris;
use crate::error::EphemerisError;
use crate::window::TimeWindow;

/// Bodies reported per sample, in output order.
pub const PLANETS: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

pub const MINUTE_OFFSETS: [u32; 2] = [0, 30];

/// Sidereal longitudes keyed by body name, serialized as an ordered object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Planets(pub Vec<(Body, f64)>);

impl Planets {
    pub fn get(&self, body: Body) -> Option<f64> {
        self.0.iter().find(|(b, _)| *b == body).map(|&(_, lon)| lon)
    }
}

impl Serialize for Planets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (body, lon) in &self.0 {
            map.serialize_entry(body.name(), lon)?;
        }
        map.end()
    }
}

/// One half-hour instant.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Sample {
    /// Local wall-clock label, `HH:MM`.
    pub time: String,
    pub ascendant: f64,
    pub ascendant_sign: &'static str,
    pub planets: Planets,
}

/// Date and place of a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub lat: f64,
    pub lon: f64,
    pub tz: f64,
}

/// Sample every hour of `window` at minutes 0 and 30, all on the
/// requested date: `night` hours 00 to 03 are the early hours of that
/// date, not of the next one.
///
/// Any ephemeris failure aborts the whole loop.
pub fn sample_window<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    obs: &Observation,
    window: &TimeWindow,
) -> Result<Vec<Sample>, EphemerisError> {
    let hours = window.hours();
    let mut samples = Vec::with_capacity(hours.len() * MINUTE_OFFSETS.len());
    for hour in hours {
        for minute in MINUTE_OFFSETS {
            let decimal_hour = f64::from(hour) + f64::from(minute) / 60.0;
            let jd = ephemeris.julian_day(obs.year, obs.month, obs.day, decimal_hour - obs.tz);

            let ascendant = ephemeris.ascendant_deg(jd, obs.lat, obs.lon)?;
            let mut planets = Vec::with_capacity(PLANETS.len());
            for body in PLANETS {
                planets.push((body, ephemeris.longitude_deg(body, jd)?));
            }
            let sample = Sample {
                time: format!("{:02}:{:02}", hour % 24, minute),
                ascendant,
                ascendant_sign: rashi_from_degree(ascendant).western_name(),
                planets: Planets(planets),
            };
            debug!(time = %sample.time, jd, ascendant, sign = sample.ascendant_sign, "sample");
            samples.push(sample);
        }
    }
    Ok(samples)
}
