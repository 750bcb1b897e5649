//! Cartesian ↔ spherical coordinates and ecliptic → equatorial conversion.

use std::f64::consts::TAU;

/// Longitude/latitude/distance of a Cartesian vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, `[0, 360)`, measured from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, `[-90, 90]`.
    pub lat_deg: f64,
    pub distance_km: f64,
}

impl SphericalCoords {
    pub fn lon_rad(&self) -> f64 {
        self.lon_deg.to_radians()
    }

    pub fn lat_rad(&self) -> f64 {
        self.lat_deg.to_radians()
    }
}

pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_km: 0.0,
        };
    }
    SphericalCoords {
        lon_deg: y.atan2(x).rem_euclid(TAU).to_degrees(),
        lat_deg: (z / r).clamp(-1.0, 1.0).asin().to_degrees(),
        distance_km: r,
    }
}

pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = s.lon_rad().sin_cos();
    let (sin_lat, cos_lat) = s.lat_rad().sin_cos();
    [
        s.distance_km * cos_lat * cos_lon,
        s.distance_km * cos_lat * sin_lon,
        s.distance_km * sin_lat,
    ]
}

/// Ecliptic `(λ, β)` to equatorial `(α, δ)` for obliquity `eps`, all radians.
///
/// Meeus, "Astronomical Algorithms", Eq. 13.3–13.4. α is in `[0, 2π)`.
pub fn ecliptic_to_equatorial(lon_rad: f64, lat_rad: f64, eps_rad: f64) -> (f64, f64) {
    let (sin_l, cos_l) = lon_rad.sin_cos();
    let (sin_b, cos_b) = lat_rad.sin_cos();
    let (sin_e, cos_e) = eps_rad.sin_cos();
    let ra = (sin_l * cos_e - (sin_b / cos_b) * sin_e).atan2(cos_l);
    let dec = (sin_b * cos_e + cos_b * sin_e * sin_l).clamp(-1.0, 1.0).asin();
    (ra.rem_euclid(TAU), dec)
}
