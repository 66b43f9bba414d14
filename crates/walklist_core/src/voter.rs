use serde::{Deserialize, Serialize};
use walklist_derive::New;

use crate::geo::location::{Locatable, Location};

/// Canvass results counted as supportive.
pub const POSITIVE_RESULTS: [&str; 5] = [
    "Supportive",
    "Strong Support",
    "Leaning",
    "Willing to Volunteer",
    "Requested Sign",
];

/// Canvass results counted as opposed.
pub const NEGATIVE_RESULTS: [&str; 4] =
    ["Opposed", "Strongly Opposed", "Do Not Contact", "Refused"];

pub const NEUTRAL_RESULTS: [&str; 3] = ["Undecided", "Needs Info", "Callback Requested"];

const NOT_CONTACTED: &str = "Not Contacted";
const UNKNOWN_NAME: &str = "Unknown";

/// One record out of the voter file. The route planner only ever reads
/// the coordinates; everything else is carried through untouched for
/// display. Coordinates are nullable upstream and `0,0` means "never
/// geocoded", see [`Location::from_nullable`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voter {
    pub unique_id: String,
    pub owner_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub street_num: Option<String>,
    pub street_dir: Option<String>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub party: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub canvass_result: Option<String>,
    pub lives_elsewhere: bool,
    pub is_mail_voter: bool,
}

impl Voter {
    /// Resident name if any part is present, else the owner name, else
    /// a fixed placeholder.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        if !first.is_empty() || !last.is_empty() {
            return format!("{first} {last}").trim().to_string();
        }
        self.owner_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_NAME.to_string())
    }

    /// Street parts joined by single spaces, skipping missing ones.
    pub fn street_address(&self) -> String {
        [
            self.street_num.as_deref(),
            self.street_dir.as_deref(),
            self.street_name.as_deref(),
            self.city.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    pub fn is_contacted(&self) -> bool {
        self.canvass_result
            .as_deref()
            .is_some_and(|r| r != NOT_CONTACTED)
    }
}

impl Locatable for Voter {
    fn location(&self) -> Location {
        Location::from_nullable(self.latitude, self.longitude)
    }
}

pub fn is_positive_result(result: Option<&str>) -> bool {
    result.is_some_and(|r| POSITIVE_RESULTS.contains(&r))
}

pub fn is_negative_result(result: Option<&str>) -> bool {
    result.is_some_and(|r| NEGATIVE_RESULTS.contains(&r))
}

pub fn is_neutral_result(result: Option<&str>) -> bool {
    result.is_some_and(|r| NEUTRAL_RESULTS.contains(&r))
}

/// Contact roll-up for a set of voters, as shown on a cut-list detail
/// screen.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, New)]
pub struct CanvassStats {
    pub total: usize,
    pub contacted: usize,
    pub positive: usize,
    pub negative: usize,
}

pub fn canvass_stats(voters: &[Voter]) -> CanvassStats {
    CanvassStats {
        total: voters.len(),
        contacted: voters.iter().filter(|v| v.is_contacted()).count(),
        positive: voters
            .iter()
            .filter(|v| is_positive_result(v.canvass_result.as_deref()))
            .count(),
        negative: voters
            .iter()
            .filter(|v| is_negative_result(v.canvass_result.as_deref()))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Voter, canvass_stats, is_negative_result, is_neutral_result, is_positive_result,
    };
    use crate::geo::location::Locatable;

    fn voter(unique_id: &str) -> Voter {
        Voter {
            unique_id: unique_id.to_string(),
            ..Voter::default()
        }
    }

    #[test]
    fn display_name_prefers_resident_name_parts() {
        let mut v = voter("1");
        v.first_name = Some("Ada".to_string());
        v.last_name = Some("Lovelace".to_string());
        v.owner_name = Some("Estate of Byron".to_string());
        assert_eq!(v.display_name(), "Ada Lovelace");
    }

    #[test]
    fn display_name_trims_when_only_one_part_is_present() {
        let mut v = voter("1");
        v.last_name = Some("Lovelace".to_string());
        assert_eq!(v.display_name(), "Lovelace");
    }

    #[test]
    fn display_name_falls_back_to_owner_then_placeholder() {
        let mut v = voter("1");
        v.owner_name = Some("Estate of Byron".to_string());
        assert_eq!(v.display_name(), "Estate of Byron");

        assert_eq!(voter("2").display_name(), "Unknown");
    }

    #[test]
    fn street_address_joins_present_parts() {
        let mut v = voter("1");
        v.street_num = Some("1600".to_string());
        v.street_dir = Some("N".to_string());
        v.street_name = Some("7th St".to_string());
        v.city = Some("Phoenix".to_string());
        assert_eq!(v.street_address(), "1600 N 7th St Phoenix");
    }

    #[test]
    fn street_address_skips_missing_and_empty_parts() {
        let mut v = voter("1");
        v.street_num = Some("1600".to_string());
        v.street_dir = Some(String::new());
        v.street_name = Some("7th St".to_string());
        assert_eq!(v.street_address(), "1600 7th St");
    }

    #[test]
    fn result_buckets_classify_known_values() {
        assert!(is_positive_result(Some("Supportive")));
        assert!(is_negative_result(Some("Refused")));
        assert!(is_neutral_result(Some("Undecided")));
        assert!(!is_positive_result(Some("Refused")));
        assert!(!is_positive_result(None));
    }

    #[test]
    fn location_applies_the_sentinel_rule() {
        let mut v = voter("1");
        assert!(!v.location().is_located());

        v.latitude = Some(0.0);
        v.longitude = Some(0.0);
        assert!(!v.location().is_located());

        v.latitude = Some(33.4484);
        v.longitude = Some(-112.074);
        assert!(v.location().is_located());
    }

    #[test]
    fn canvass_stats_counts_contact_buckets() {
        let mut a = voter("a");
        a.canvass_result = Some("Supportive".to_string());
        let mut b = voter("b");
        b.canvass_result = Some("Refused".to_string());
        let mut c = voter("c");
        c.canvass_result = Some("Not Contacted".to_string());
        let d = voter("d");

        let stats = canvass_stats(&[a, b, c, d]);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.contacted, 2);
        assert_eq!(stats.positive, 1);
        assert_eq!(stats.negative, 1);
    }
}
