//! Types for sunrise/sunset calculations.

use crate::error::VedicError;

/// Mean Earth radius in meters (for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Standard refraction at the horizon, in arcminutes, at 1010 hPa and 10 °C.
const STANDARD_REFRACTION_ARCMIN: f64 = 34.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Finite coordinates with latitude in [-90, 90].
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() {
            return Err(VedicError::InvalidLocation("longitude must be finite"));
        }
        if !self.altitude_m.is_finite() {
            return Err(VedicError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }
}

/// Sun horizon events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    /// Upper limb appears on the horizon.
    Sunrise,
    /// Upper limb disappears below the horizon.
    Sunset,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Atmospheric conditions and horizon model for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Surface pressure in hPa. Default: 1013.25.
    pub pressure_hpa: f64,
    /// Surface temperature in °C. Default: 15.
    pub temperature_c: f64,
    /// Lower the horizon by the geometric dip for observers above sea level.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            pressure_hpa: 1013.25,
            temperature_c: 15.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Horizon refraction in arcminutes, scaled from the standard 34′
    /// (Meeus, "Astronomical Algorithms", Eq. 16.4).
    pub fn refraction_arcmin(&self) -> f64 {
        STANDARD_REFRACTION_ARCMIN * (self.pressure_hpa / 1010.0)
            * (283.0 / (273.0 + self.temperature_c))
    }

    /// Geometric dip of the horizon in degrees: `sqrt(2h/R)` radians.
    pub fn dip_deg(&self, altitude_m: f64) -> f64 {
        if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt().to_degrees()
        } else {
            0.0
        }
    }

    /// Altitude of the Sun's center at the event, in degrees (negative).
    pub fn target_altitude_deg(&self, semidiameter_arcmin: f64, altitude_m: f64) -> f64 {
        -(self.refraction_arcmin() + semidiameter_arcmin) / 60.0 - self.dip_deg(altitude_m)
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given instant.
    Event {
        jd_utc: f64,
        jd_tdb: f64,
        event: RiseSetEvent,
    },
    /// Sun stays below the horizon for the solar day (polar night).
    NeverRises,
    /// Sun stays above the horizon for the solar day (midnight sun).
    NeverSets,
}
