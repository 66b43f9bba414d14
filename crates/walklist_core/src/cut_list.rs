use crate::geo::boundary::{Boundary, points_in_boundary};
use crate::voter::Voter;

/// Party names with their own filter buckets; anything whose description
/// matches none of these keywords falls into the "Other" bucket.
const KNOWN_PARTY_KEYWORDS: [&str; 6] = [
    "democrat",
    "republic",
    "libertarian",
    "green",
    "independent",
    "non-partisan",
];

/// The "Other" party bucket selectable in a filter.
pub const PARTY_OTHER: &str = "Other";

/// Attribute filters applied after the geofence when building a cut
/// list. An empty party list means every party.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VoterFilter {
    pub parties: Vec<String>,
    pub lives_at_property_only: bool,
    pub mail_voters_only: bool,
}

impl VoterFilter {
    pub fn matches(&self, voter: &Voter) -> bool {
        if !self.parties.is_empty() && !self.matches_party(voter) {
            return false;
        }
        if self.lives_at_property_only && voter.lives_elsewhere {
            return false;
        }
        if self.mail_voters_only && !voter.is_mail_voter {
            return false;
        }
        true
    }

    fn matches_party(&self, voter: &Voter) -> bool {
        let party = voter.party.as_deref().unwrap_or("");
        self.parties.iter().any(|selected| {
            if selected == PARTY_OTHER {
                let lowered = party.to_lowercase();
                !KNOWN_PARTY_KEYWORDS.iter().any(|kw| lowered.contains(kw))
            } else {
                party == selected
            }
        })
    }
}

/// Builds the member set of a cut list: the geofence subset of `voters`,
/// then the attribute filters. Input order is preserved.
#[walklist_derive::timer("select")]
pub fn select_voters(voters: Vec<Voter>, boundary: &Boundary, filter: &VoterFilter) -> Vec<Voter> {
    let candidates = voters.len();
    let selected: Vec<Voter> = points_in_boundary(voters, boundary)
        .into_iter()
        .filter(|v| filter.matches(v))
        .collect();

    log::info!(
        "select: candidates={candidates} boundary_vertices={} selected={}",
        boundary.vertices().len(),
        selected.len()
    );

    selected
}

#[cfg(test)]
mod tests {
    use super::{VoterFilter, select_voters};
    use crate::geo::boundary::Boundary;
    use crate::geo::point::GeoPoint;
    use crate::voter::Voter;

    fn located_voter(unique_id: &str, lat: f64, lng: f64) -> Voter {
        Voter {
            unique_id: unique_id.to_string(),
            latitude: Some(lat),
            longitude: Some(lng),
            ..Voter::default()
        }
    }

    fn square() -> Boundary {
        Boundary::new(vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 10.0),
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(10.0, 0.0),
        ])
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = VoterFilter::default();
        assert!(filter.matches(&located_voter("1", 5.0, 5.0)));
    }

    #[test]
    fn party_filter_matches_exact_descriptions() {
        let filter = VoterFilter {
            parties: vec!["Democrat".to_string()],
            ..VoterFilter::default()
        };

        let mut v = located_voter("1", 5.0, 5.0);
        v.party = Some("Democrat".to_string());
        assert!(filter.matches(&v));

        v.party = Some("Republican".to_string());
        assert!(!filter.matches(&v));

        v.party = None;
        assert!(!filter.matches(&v));
    }

    #[test]
    fn other_bucket_catches_unknown_parties_only() {
        let filter = VoterFilter {
            parties: vec!["Other".to_string()],
            ..VoterFilter::default()
        };

        let mut v = located_voter("1", 5.0, 5.0);
        v.party = Some("No Labels".to_string());
        assert!(filter.matches(&v));

        v.party = Some("Registered Independent".to_string());
        assert!(!filter.matches(&v));

        v.party = Some("Democratic Party".to_string());
        assert!(!filter.matches(&v));
    }

    #[test]
    fn residency_and_mail_flags_narrow_the_selection() {
        let filter = VoterFilter {
            lives_at_property_only: true,
            mail_voters_only: true,
            ..VoterFilter::default()
        };

        let mut v = located_voter("1", 5.0, 5.0);
        v.is_mail_voter = true;
        assert!(filter.matches(&v));

        v.lives_elsewhere = true;
        assert!(!filter.matches(&v));

        v.lives_elsewhere = false;
        v.is_mail_voter = false;
        assert!(!filter.matches(&v));
    }

    #[test]
    fn select_voters_applies_geofence_then_filters() {
        let mut inside_dem = located_voter("1", 5.0, 5.0);
        inside_dem.party = Some("Democrat".to_string());
        let mut inside_rep = located_voter("2", 6.0, 6.0);
        inside_rep.party = Some("Republican".to_string());
        let mut outside_dem = located_voter("3", 20.0, 20.0);
        outside_dem.party = Some("Democrat".to_string());
        let unlocated = Voter {
            unique_id: "4".to_string(),
            party: Some("Democrat".to_string()),
            ..Voter::default()
        };

        let filter = VoterFilter {
            parties: vec!["Democrat".to_string()],
            ..VoterFilter::default()
        };
        let selected = select_voters(
            vec![inside_dem, inside_rep, outside_dem, unlocated],
            &square(),
            &filter,
        );

        let ids: Vec<&str> = selected.iter().map(|v| v.unique_id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn select_voters_returns_nothing_for_a_degenerate_boundary() {
        let boundary = Boundary::new(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 10.0)]);
        let selected = select_voters(
            vec![located_voter("1", 5.0, 5.0)],
            &boundary,
            &VoterFilter::default(),
        );
        assert!(selected.is_empty());
    }
}
