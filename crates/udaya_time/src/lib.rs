//! Time scales for the udaya ephemeris.
//!
//! - Julian Date ↔ Gregorian calendar
//! - NAIF leap-second kernel (LSK) parsing
//! - UTC ↔ TDB conversion
//! - Earth rotation angle and sidereal time

pub mod error;
pub mod julian;
pub mod lsk;
pub mod scales;
pub mod sidereal;

use std::path::Path;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
    jd_to_decimal_hour, jd_to_tdb_seconds, julian_day, tdb_seconds_to_jd,
};
pub use lsk::LskData;
pub use sidereal::{
    SIDEREAL_REVS_PER_DAY, earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad,
};

/// A loaded leap-second kernel.
#[derive(Debug, Clone)]
pub struct LeapSecondKernel {
    data: LskData,
}

impl LeapSecondKernel {
    /// Load an LSK from disk.
    pub fn load(path: &Path) -> Result<Self, TimeError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse an LSK from its text.
    pub fn parse(content: &str) -> Result<Self, TimeError> {
        Ok(Self {
            data: lsk::parse_lsk(content)?,
        })
    }

    pub fn data(&self) -> &LskData {
        &self.data
    }

    /// UTC seconds past J2000 → TDB seconds past J2000.
    pub fn utc_to_tdb(&self, utc_s: f64) -> f64 {
        scales::utc_to_tdb(utc_s, &self.data)
    }

    /// TDB seconds past J2000 → UTC seconds past J2000.
    pub fn tdb_to_utc(&self, tdb_s: f64) -> f64 {
        scales::tdb_to_utc(tdb_s, &self.data)
    }

    /// Julian Date UTC → Julian Date TDB.
    pub fn utc_jd_to_tdb_jd(&self, jd_utc: f64) -> f64 {
        tdb_seconds_to_jd(self.utc_to_tdb(jd_to_tdb_seconds(jd_utc)))
    }

    /// Julian Date TDB → Julian Date UTC.
    pub fn tdb_jd_to_utc_jd(&self, jd_tdb: f64) -> f64 {
        tdb_seconds_to_jd(self.tdb_to_utc(jd_to_tdb_seconds(jd_tdb)))
    }
}
