//! Sidereal astrology primitives on top of the udaya engine.
//!
//! - Ayanamsha systems and their values at any epoch
//! - Sidereal planetary longitudes
//! - Lagna (ascendant) from local sidereal time
//! - Rashi (sign) lookup
//! - Sunrise and sunset

pub mod ayanamsha;
pub mod error;
pub mod lagna;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod sidereal;
pub mod util;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg};
pub use error::VedicError;
pub use lagna::{
    ascendant_tropical_rad, local_sidereal_time_at, mc_tropical_rad, sidereal_lagna_deg,
    tropical_lagna_deg,
};
pub use rashi::{ALL_RASHIS, Rashi, degrees_in_rashi, rashi_from_degree, rashi_index_from_degree};
pub use riseset::{approximate_local_noon_jd, compute_rise_set, next_rise_set};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use sidereal::{sidereal_longitude_deg, tropical_longitude_deg};
pub use util::normalize_360;
