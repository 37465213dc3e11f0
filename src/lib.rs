//! NRR Core - Net Run Rate scenario solving for cricket league tables.
//!
//! Given a team's aggregates, a hypothetical next match and a target table position, this
//! library works out the match result range that keeps the team's revised NRR level with
//! the team it wants to displace. Python bindings are available behind the `python`
//! feature.

pub mod batting;
pub mod chase;
pub mod constants;
pub mod error;
pub mod nrr;
pub mod overs;
pub mod reachability;
pub mod request;
pub mod scenario;
pub mod standings;
pub mod synthetic;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use batting::{calculate_runs_to_restrict, Bounds, RunsRestriction};
pub use chase::{calculate_overs_to_chase, ChaseWindow};
pub use error::{NrrError, Result};
pub use nrr::{calculate_nrr, round_nrr};
pub use overs::{decimal_to_overs, overs_to_decimal, Overs};
pub use reachability::{can_reach_position, reachable_positions, ReachabilityCheck};
pub use request::{ScenarioRequest, TossResult};
pub use scenario::{
    calculate_scenario, calculate_scenarios, NrrAnalysis, Scenario, ScenarioOutcome,
    ScenarioResult,
};
pub use standings::{PointsTable, PointsTableRow, StandingsView, TeamListEntry};
pub use synthetic::synthetic_table;
pub use team::Team;
