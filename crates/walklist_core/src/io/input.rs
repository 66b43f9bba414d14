use std::{fs, io::Read, path::Path};

use crate::geo::boundary::Boundary;
use crate::io::options::PlannerOptions;
use crate::voter::Voter;
use crate::{Error, Result};

/// Reads the voter records named by the options, from a file or stdin.
pub fn read_voters(options: &PlannerOptions) -> Result<Vec<Voter>> {
    let raw = match options.input_path() {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::other(format!("failed to read voter file {}: {e}", path.display()))
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_voters(&raw)
}

/// Parses a JSON array of voter records.
pub fn parse_voters(raw: &str) -> Result<Vec<Voter>> {
    serde_json::from_str(raw).map_err(|e| Error::invalid_data(format!("voter records: {e}")))
}

pub fn read_boundary(path: &Path) -> Result<Boundary> {
    let raw = fs::read_to_string(path).map_err(|e| {
        Error::other(format!(
            "failed to read boundary file {}: {e}",
            path.display()
        ))
    })?;
    parse_boundary(&raw)
}

/// Parses a boundary polygon: a JSON array of `{lat, lng}` points, the
/// shape the drawing UI stores. Vertex-count rules are left to the
/// boundary itself; a short mid-drawing polygon parses fine and simply
/// selects nothing.
pub fn parse_boundary(raw: &str) -> Result<Boundary> {
    serde_json::from_str(raw).map_err(|e| Error::invalid_data(format!("boundary polygon: {e}")))
}

#[cfg(test)]
mod tests {
    use super::{parse_boundary, parse_voters};
    use crate::geo::point::GeoPoint;

    #[test]
    fn parse_voters_reads_full_records() {
        let voters = parse_voters(
            r#"[{
                "unique_id": "v-1",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "street_num": "1600",
                "street_name": "7th St",
                "city": "Phoenix",
                "party": "Democrat",
                "latitude": 33.45,
                "longitude": -112.07,
                "is_mail_voter": true
            }]"#,
        )
        .expect("parse voters");

        assert_eq!(voters.len(), 1);
        assert_eq!(voters[0].unique_id, "v-1");
        assert_eq!(voters[0].display_name(), "Ada Lovelace");
        assert!(voters[0].is_mail_voter);
    }

    #[test]
    fn parse_voters_defaults_missing_fields() {
        let voters =
            parse_voters(r#"[{"unique_id": "v-2"}]"#).expect("sparse record should parse");
        assert_eq!(voters[0].latitude, None);
        assert_eq!(voters[0].display_name(), "Unknown");
        assert!(!voters[0].lives_elsewhere);
    }

    #[test]
    fn parse_voters_rejects_malformed_json() {
        let err = parse_voters("not json").expect_err("malformed input should fail");
        assert!(err.to_string().contains("voter records"));
    }

    #[test]
    fn parse_boundary_reads_a_point_array() {
        let boundary = parse_boundary(
            r#"[{"lat": 0.0, "lng": 0.0}, {"lat": 0.0, "lng": 10.0}, {"lat": 10.0, "lng": 10.0}]"#,
        )
        .expect("parse boundary");

        assert_eq!(
            boundary.vertices(),
            &[
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 10.0),
                GeoPoint::new(10.0, 10.0),
            ]
        );
        assert!(boundary.encloses_area());
    }

    #[test]
    fn parse_boundary_accepts_a_mid_drawing_polygon() {
        let boundary =
            parse_boundary(r#"[{"lat": 0.0, "lng": 0.0}]"#).expect("short polygon should parse");
        assert!(!boundary.encloses_area());
    }

    #[test]
    fn parse_boundary_rejects_malformed_json() {
        let err = parse_boundary("{}").expect_err("non-array input should fail");
        assert!(err.to_string().contains("boundary polygon"));
    }
}
