use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const EARTH_RADIUS_M: f64 = 6_371_000.0;
const NINETY: f64 = 90.0;
const ONE_EIGHTY: f64 = NINETY * 2.0;

/// A WGS-84 position in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance in meters, haversine on a spherical earth.
    /// `h` is clamped before the square roots so that rounding on
    /// near-identical points cannot produce a NaN.
    pub fn dist(self, rhs: &Self) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), rhs.lat.to_radians());
        let dlat = (rhs.lat - self.lat).to_radians();
        let dlng = (rhs.lng - self.lng).to_radians();
        let s1 = (dlat / 2.0).sin();
        let s2 = (dlng / 2.0).sin();
        let h = (s1 * s1 + lat1.cos() * lat2.cos() * s2 * s2).clamp(0.0, 1.0);
        2.0 * EARTH_RADIUS_M * h.sqrt().atan2((1.0 - h).sqrt())
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-NINETY..=NINETY).contains(&self.lat)
            && (-ONE_EIGHTY..=ONE_EIGHTY).contains(&self.lng)
    }

    /// Parses a `lat,lng` token.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut it = raw.split(',');
        let lat_s = it
            .next()
            .ok_or_else(|| Error::invalid_input(format!("missing latitude in: {raw}")))?;
        let lng_s = it
            .next()
            .ok_or_else(|| Error::invalid_input(format!("missing longitude in: {raw}")))?;
        if it.next().is_some() {
            return Err(Error::invalid_input(format!(
                "expected 'lat,lng' but got extra comma fields: {raw}"
            )));
        }

        let lat: f64 = lat_s
            .trim()
            .parse()
            .map_err(|_| Error::invalid_input(format!("invalid latitude: {lat_s}")))?;
        let lng: f64 = lng_s
            .trim()
            .parse()
            .map_err(|_| Error::invalid_input(format!("invalid longitude: {lng_s}")))?;
        Ok(Self { lat, lng })
    }
}

/// Free-function form of [`GeoPoint::dist`].
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    a.dist(&b)
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut b1 = ryu::Buffer::new();
        let mut b2 = ryu::Buffer::new();
        write!(f, "{},{}", b1.format(self.lat), b2.format(self.lng))
    }
}
