//! The ephemeris oracle seen by the application.
//!
//! The application performs no astronomy of its own; everything goes
//! through [`Ephemeris`]. [`EngineEphemeris`] is the kernel-backed
//! implementation.

use tracing::info;
use udaya_engine::{Body, Engine, EngineConfig};
use udaya_vedic::{
    AyanamshaSystem, GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, next_rise_set,
    sidereal_lagna_deg, sidereal_longitude_deg,
};

use crate::error::EphemerisError;

/// Ephemeris operations the application needs. All instants are UTC Julian
/// Dates and all longitudes are sidereal degrees in `[0, 360)`.
pub trait Ephemeris {
    /// Julian Date of a Gregorian date and decimal hour.
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64 {
        udaya_time::julian_day(year, month, day, hour)
    }

    /// `(year, month, day_with_fraction)` of a Julian Date.
    fn calendar(&self, jd: f64) -> (i32, u32, f64) {
        udaya_time::jd_to_calendar(jd)
    }

    /// Sidereal ascendant.
    fn ascendant_deg(&self, jd_utc: f64, lat: f64, lon: f64) -> Result<f64, EphemerisError>;

    /// Sidereal geocentric ecliptic longitude of `body`.
    fn longitude_deg(&self, body: Body, jd_utc: f64) -> Result<f64, EphemerisError>;

    /// First sunrise or sunset at or after `jd_utc`, as a UTC Julian Date.
    fn sun_event(
        &self,
        event: RiseSetEvent,
        jd_utc: f64,
        location: &GeoLocation,
        conditions: &RiseSetConfig,
    ) -> Result<f64, EphemerisError>;
}

/// [`Ephemeris`] backed by JPL/NAIF kernels.
#[derive(Debug)]
pub struct EngineEphemeris {
    engine: Engine,
    ayanamsha: AyanamshaSystem,
}

impl EngineEphemeris {
    pub fn new(engine: Engine, ayanamsha: AyanamshaSystem) -> Self {
        Self { engine, ayanamsha }
    }

    /// Load the kernels named in `config`.
    pub fn load(config: EngineConfig, ayanamsha: AyanamshaSystem) -> Result<Self, EphemerisError> {
        let spk_count = config.spk_paths.len();
        let engine = Engine::new(config)?;
        info!(spk_count, %ayanamsha, "ephemeris ready");
        Ok(Self::new(engine, ayanamsha))
    }
}

impl Ephemeris for EngineEphemeris {
    fn ascendant_deg(&self, jd_utc: f64, lat: f64, lon: f64) -> Result<f64, EphemerisError> {
        let location = GeoLocation::new(lat, lon, 0.0);
        Ok(sidereal_lagna_deg(&self.engine, &location, jd_utc, self.ayanamsha)?)
    }

    fn longitude_deg(&self, body: Body, jd_utc: f64) -> Result<f64, EphemerisError> {
        Ok(sidereal_longitude_deg(&self.engine, body, jd_utc, self.ayanamsha)?)
    }

    fn sun_event(
        &self,
        event: RiseSetEvent,
        jd_utc: f64,
        location: &GeoLocation,
        conditions: &RiseSetConfig,
    ) -> Result<f64, EphemerisError> {
        match next_rise_set(&self.engine, location, event, jd_utc, conditions)? {
            RiseSetResult::Event { jd_utc, .. } => Ok(jd_utc),
            RiseSetResult::NeverRises => Err(EphemerisError::NeverRises {
                latitude_deg: location.latitude_deg,
            }),
            RiseSetResult::NeverSets => Err(EphemerisError::NeverSets {
                latitude_deg: location.latitude_deg,
            }),
        }
    }
}
