use crate::geo::point::GeoPoint;

/// Whether a record has a usable geocoded position.
///
/// Upstream voter data stores "never geocoded" as a null coordinate or as
/// the pair `0,0`; both collapse to [`Location::Unlocated`] here, once, so
/// the geometric code never has to re-check the sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Location {
    Located(GeoPoint),
    Unlocated,
}

impl Location {
    /// Applies the upstream sentinel rule: a missing coordinate, or the
    /// pair exactly `(0, 0)`, means the record was never geocoded. A
    /// single zero coordinate with a nonzero partner is a real position.
    pub fn from_nullable(lat: Option<f64>, lng: Option<f64>) -> Self {
        match (lat, lng) {
            (Some(lat), Some(lng)) if lat != 0.0 || lng != 0.0 => {
                Self::Located(GeoPoint::new(lat, lng))
            }
            _ => Self::Unlocated,
        }
    }

    pub fn point(self) -> Option<GeoPoint> {
        match self {
            Self::Located(point) => Some(point),
            Self::Unlocated => None,
        }
    }

    pub fn is_located(self) -> bool {
        matches!(self, Self::Located(_))
    }
}

/// The seam between geometry and caller-owned payloads: route planning is
/// generic over any type that can report a [`Location`], and never looks
/// at anything else.
pub trait Locatable {
    fn location(&self) -> Location;
}

impl Locatable for GeoPoint {
    /// Bare points go through the same sentinel rule as records, so a
    /// literal `0,0` is still treated as "no data" rather than a stop on
    /// the equator.
    fn location(&self) -> Location {
        Location::from_nullable(Some(self.lat), Some(self.lng))
    }
}
