//! Transformation of coordinates.
//!
//! This module provides:
//! - Coordinate types: `Ecliptic`, `Equatorial`, `Horizontal`, `Galactic`
//! - `Obliquity`: Sine and cosine of the obliquity, computed once per epoch
//! - `GlobeCoord`: Observer position on the Earth
//! - Free functions for each transformation, plus conversion methods
//!
//! # Conventions
//!
//! - Azimuth is measured westward from the south.
//! - Geographic longitude is positive west of Greenwich.
//! - Galactic coordinates refer to the B1950.0 pole and origin.
//!
//! # Examples
//!
//! ```
//! use astro_core::types::{Angle, RightAscension};
//! use astro_formulas::coord::{Equatorial, Obliquity};
//!
//! // Pollux, J2000
//! let pollux = Equatorial {
//!     ra: RightAscension::from_hms(7, 45, 18.946),
//!     dec: Angle::from_dms(false, 28, 1, 34.26),
//! };
//! let ecl = pollux.to_ecliptic(&Obliquity::new(Angle::from_deg(23.4392911)));
//! assert!((ecl.lon.deg() - 113.215630).abs() < 1e-6);
//! assert!((ecl.lat.deg() - 6.684170).abs() < 1e-6);
//! ```

use std::f64::consts::PI;

use astro_core::types::{Angle, RightAscension, Time};

/// Right ascension of the north galactic pole (B1950.0), degrees.
pub const GALACTIC_NORTH_RA_DEG: f64 = 192.25;

/// Declination of the north galactic pole (B1950.0), degrees.
pub const GALACTIC_NORTH_DEC_DEG: f64 = 27.4;

/// Galactic longitude of the ascending node of the galactic plane on the
/// B1950.0 equator, degrees.
pub const GALACTIC_LON0_DEG: f64 = 33.0;

/// Obliquity of the ecliptic, stored as its sine and cosine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obliquity {
    /// Sine of the obliquity
    pub sin: f64,
    /// Cosine of the obliquity
    pub cos: f64,
}

impl Obliquity {
    /// Precomputes sine and cosine of `eps`.
    pub fn new(eps: Angle) -> Self {
        let (sin, cos) = eps.sin_cos();
        Self { sin, cos }
    }
}

/// Ecliptic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ecliptic {
    /// Longitude (λ)
    pub lon: Angle,
    /// Latitude (β)
    pub lat: Angle,
}

/// Equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equatorial {
    /// Right ascension (α)
    pub ra: RightAscension,
    /// Declination (δ)
    pub dec: Angle,
}

/// Horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Horizontal {
    /// Azimuth (A), measured westward from the south
    pub az: Angle,
    /// Altitude (h)
    pub alt: Angle,
}

/// Galactic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Galactic {
    /// Galactic longitude (l)
    pub lon: Angle,
    /// Galactic latitude (b)
    pub lat: Angle,
}

/// Geographic position of an observer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobeCoord {
    /// Geographic latitude (φ), positive north
    pub lat: Angle,
    /// Geographic longitude (L), positive west
    pub lon: Angle,
}

/// Converts equatorial to ecliptic coordinates.
///
/// Returns `(λ, β)`.
pub fn eq_to_ecl(ra: RightAscension, dec: Angle, eps: &Obliquity) -> (Angle, Angle) {
    let (s_ra, c_ra) = ra.sin_cos();
    let (s_dec, c_dec) = dec.sin_cos();
    let lon = (s_ra * eps.cos + (s_dec / c_dec) * eps.sin).atan2(c_ra);
    let lat = (s_dec * eps.cos - c_dec * eps.sin * s_ra).asin();
    (Angle::from_rad(lon).modulo_1(), Angle::from_rad(lat))
}

/// Converts ecliptic to equatorial coordinates.
///
/// Returns `(α, δ)`.
pub fn ecl_to_eq(lon: Angle, lat: Angle, eps: &Obliquity) -> (RightAscension, Angle) {
    let (s_lon, c_lon) = lon.sin_cos();
    let (s_lat, c_lat) = lat.sin_cos();
    let ra = (s_lon * eps.cos - (s_lat / c_lat) * eps.sin).atan2(c_lon);
    let dec = (s_lat * eps.cos + c_lat * eps.sin * s_lon).asin();
    (RightAscension::from_rad(ra), Angle::from_rad(dec))
}

/// Converts equatorial to horizontal coordinates.
///
/// `st` is sidereal time at Greenwich; apparent sidereal time should be used
/// with apparent coordinates. Returns `(A, h)`.
pub fn eq_to_hz(
    ra: RightAscension,
    dec: Angle,
    observer: &GlobeCoord,
    st: Time,
) -> (Angle, Angle) {
    // Local hour angle
    let h = st.rad() - observer.lon.rad() - ra.rad();
    let (s_h, c_h) = h.sin_cos();
    let (s_lat, c_lat) = observer.lat.sin_cos();
    let (s_dec, c_dec) = dec.sin_cos();
    let az = s_h.atan2(c_h * s_lat - (s_dec / c_dec) * c_lat);
    let alt = (s_lat * s_dec + c_lat * c_dec * c_h).asin();
    (Angle::from_rad(az).modulo_1(), Angle::from_rad(alt))
}

/// Converts horizontal to equatorial coordinates.
///
/// Returns `(α, δ)`.
pub fn hz_to_eq(az: Angle, alt: Angle, observer: &GlobeCoord, st: Time) -> (RightAscension, Angle) {
    let (s_az, c_az) = az.sin_cos();
    let (s_alt, c_alt) = alt.sin_cos();
    let (s_lat, c_lat) = observer.lat.sin_cos();
    let h = s_az.atan2(c_az * s_lat + (s_alt / c_alt) * c_lat);
    let ra = RightAscension::from_rad(st.rad() - observer.lon.rad() - h);
    let dec = (s_lat * s_alt - c_lat * c_alt * c_az).asin();
    (ra, Angle::from_rad(dec))
}

/// Converts B1950.0 equatorial to galactic coordinates.
///
/// Returns `(l, b)`.
pub fn eq_to_gal(ra: RightAscension, dec: Angle) -> (Angle, Angle) {
    let pole_ra = GALACTIC_NORTH_RA_DEG.to_radians();
    let (s_pole, c_pole) = GALACTIC_NORTH_DEC_DEG.to_radians().sin_cos();
    let (s_dra, c_dra) = (pole_ra - ra.rad()).sin_cos();
    let (s_dec, c_dec) = dec.sin_cos();
    let x = s_dra.atan2(c_dra * s_pole - (s_dec / c_dec) * c_pole);
    let lon = Angle::from_rad(GALACTIC_LON0_DEG.to_radians() + 1.5 * PI - x).modulo_1();
    let lat = Angle::from_rad((s_dec * s_pole + c_dec * c_pole * c_dra).asin());
    (lon, lat)
}

/// Converts galactic to B1950.0 equatorial coordinates.
///
/// Returns `(α, δ)`.
pub fn gal_to_eq(lon: Angle, lat: Angle) -> (RightAscension, Angle) {
    let (s_pole, c_pole) = GALACTIC_NORTH_DEC_DEG.to_radians().sin_cos();
    let (s_dl, c_dl) = (lon.rad() - GALACTIC_LON0_DEG.to_radians() - PI / 2.0).sin_cos();
    let (s_lat, c_lat) = lat.sin_cos();
    let y = s_dl.atan2(c_dl * s_pole - (s_lat / c_lat) * c_pole);
    let ra = RightAscension::from_rad(y + GALACTIC_NORTH_RA_DEG.to_radians() - PI);
    let dec = (s_lat * s_pole + c_lat * c_pole * c_dl).asin();
    (ra, Angle::from_rad(dec))
}

impl Ecliptic {
    /// Converts to equatorial coordinates.
    pub fn to_equatorial(&self, eps: &Obliquity) -> Equatorial {
        let (ra, dec) = ecl_to_eq(self.lon, self.lat, eps);
        Equatorial { ra, dec }
    }
}

impl Equatorial {
    /// Converts to ecliptic coordinates.
    pub fn to_ecliptic(&self, eps: &Obliquity) -> Ecliptic {
        let (lon, lat) = eq_to_ecl(self.ra, self.dec, eps);
        Ecliptic { lon, lat }
    }

    /// Converts to horizontal coordinates for an observer at sidereal time
    /// `st` (Greenwich).
    pub fn to_horizontal(&self, observer: &GlobeCoord, st: Time) -> Horizontal {
        let (az, alt) = eq_to_hz(self.ra, self.dec, observer, st);
        Horizontal { az, alt }
    }

    /// Converts B1950.0 coordinates to galactic coordinates.
    pub fn to_galactic(&self) -> Galactic {
        let (lon, lat) = eq_to_gal(self.ra, self.dec);
        Galactic { lon, lat }
    }
}

impl Horizontal {
    /// Converts to equatorial coordinates.
    pub fn to_equatorial(&self, observer: &GlobeCoord, st: Time) -> Equatorial {
        let (ra, dec) = hz_to_eq(self.az, self.alt, observer, st);
        Equatorial { ra, dec }
    }
}

impl Galactic {
    /// Converts to B1950.0 equatorial coordinates.
    pub fn to_equatorial(&self) -> Equatorial {
        let (ra, dec) = gal_to_eq(self.lon, self.lat);
        Equatorial { ra, dec }
    }
}
