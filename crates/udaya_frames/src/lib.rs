//! Reference frames for ephemeris output.
//!
//! ICRF ↔ ecliptic J2000 rotation, IAU 2006 obliquity and general
//! precession, and Cartesian ↔ spherical conversions.

pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

pub use obliquity::{OBLIQUITY_J2000_DEG, OBLIQUITY_J2000_RAD, mean_obliquity_of_date_rad};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
pub use rotation::{ecliptic_to_icrf, icrf_to_ecliptic};
pub use spherical::{
    SphericalCoords, cartesian_to_spherical, ecliptic_to_equatorial, spherical_to_cartesian,
};
