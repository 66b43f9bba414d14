use serde::{Deserialize, Serialize};

use crate::geo::location::{Locatable, Location};
use crate::geo::point::GeoPoint;

/// Fewest vertices that can enclose an area. Below this the boundary is a
/// mid-drawing state and selects nothing.
pub const MIN_BOUNDARY_VERTICES: usize = 3;

/// A hand-drawn cut-list boundary: an open simple polygon in lat/lng
/// space. Closure back to the first vertex is implicit, there are no
/// holes, and no validation is done beyond the vertex count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Boundary {
    vertices: Vec<GeoPoint>,
}

impl Boundary {
    pub fn new(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn encloses_area(&self) -> bool {
        self.vertices.len() >= MIN_BOUNDARY_VERTICES
    }

    /// Even-odd ray-casting test. Longitude plays the vertical axis and
    /// latitude the horizontal one; the convention is arbitrary but must
    /// stay consistent with the edge-straddle check below. Points exactly
    /// on an edge get whatever the strict comparisons yield; callers must
    /// not rely on either answer there.
    pub fn contains(&self, point: GeoPoint) -> bool {
        if !self.encloses_area() {
            return false;
        }

        let mut inside = false;
        let mut j = self.vertices.len() - 1;
        for i in 0..self.vertices.len() {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.lng > point.lng) != (vj.lng > point.lng)
                && point.lat
                    < (vj.lat - vi.lat) * (point.lng - vi.lng) / (vj.lng - vi.lng) + vi.lat
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Order-preserving subset of `points` inside `boundary`. Unlocated
/// records are excluded unconditionally; a degenerate boundary selects
/// nothing. O(points x vertices), fine for hand-drawn boundaries over a
/// few thousand candidates.
pub fn points_in_boundary<T: Locatable>(points: Vec<T>, boundary: &Boundary) -> Vec<T> {
    if !boundary.encloses_area() {
        return Vec::new();
    }

    points
        .into_iter()
        .filter(|p| match p.location() {
            Location::Located(point) => boundary.contains(point),
            Location::Unlocated => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Boundary, points_in_boundary};
    use crate::geo::point::GeoPoint;

    fn square() -> Boundary {
        Boundary::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 10.0),
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(10.0, 0.0),
        ])
    }

    #[test]
    fn contains_accepts_an_interior_point() {
        assert!(square().contains(GeoPoint::new(5.0, 5.0)));
    }

    #[test]
    fn contains_rejects_an_exterior_point() {
        assert!(!square().contains(GeoPoint::new(20.0, 20.0)));
    }

    #[test]
    fn contains_is_false_below_three_vertices() {
        let line = Boundary::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 10.0)]);
        assert!(!line.contains(GeoPoint::new(5.0, 5.0)));
    }

    #[test]
    fn points_in_boundary_keeps_input_order() {
        let points = vec![
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(20.0, 20.0),
            GeoPoint::new(9.0, 9.0),
            GeoPoint::new(5.0, 5.0),
        ];
        let inside = points_in_boundary(points, &square());
        assert_eq!(
            inside,
            vec![
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(9.0, 9.0),
                GeoPoint::new(5.0, 5.0),
            ]
        );
    }

    #[test]
    fn points_in_boundary_excludes_the_unlocated_sentinel_even_on_a_vertex() {
        // (0,0) is a vertex of the square, but as a point it means
        // "never geocoded" and must not be selected.
        let inside = points_in_boundary(vec![GeoPoint::new(0.0, 0.0)], &square());
        assert!(inside.is_empty());
    }

    #[test]
    fn points_in_boundary_is_empty_for_a_degenerate_boundary() {
        let line = Boundary::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 10.0)]);
        let inside = points_in_boundary(vec![GeoPoint::new(5.0, 5.0)], &line);
        assert!(inside.is_empty());
    }

    #[test]
    fn boundary_round_trips_through_json() {
        let boundary = square();
        let json = serde_json::to_string(&boundary).expect("serialize boundary");
        let back: Boundary = serde_json::from_str(&json).expect("deserialize boundary");
        assert_eq!(back, boundary);
    }
}
