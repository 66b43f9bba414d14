//! Route planning for door-to-door canvassing: pick the voters inside a
//! hand-drawn cut-list boundary, then order the stops into a
//! walk-efficient visiting sequence with distance and time estimates.
//!
//! The geometric core (`distance`, `points_in_boundary`, `sequence` and
//! the derived metrics) is pure and allocation-local: no I/O, no shared
//! state, safe to call concurrently on disjoint inputs. The `io` and
//! `logging` modules carry the surrounding plumbing for the CLI driver.

mod cut_list;
mod error;
mod format;
mod geo;
pub mod io;
pub mod logging;
mod route;
mod voter;

pub use cut_list::{PARTY_OTHER, VoterFilter, select_voters};
pub use error::{Error, Result};
pub use format::{format_distance, format_duration};
pub use geo::boundary::{Boundary, MIN_BOUNDARY_VERTICES, points_in_boundary};
pub use geo::location::{Locatable, Location};
pub use geo::point::{GeoPoint, distance};
pub use io::options::PlannerOptions;
pub use route::metrics::{Route, RouteMetrics, estimated_minutes, total_distance};
pub use route::sequence::sequence;
pub use voter::{
    CanvassStats, NEGATIVE_RESULTS, NEUTRAL_RESULTS, POSITIVE_RESULTS, Voter, canvass_stats,
    is_negative_result, is_neutral_result, is_positive_result,
};
