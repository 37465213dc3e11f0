use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::batting::{calculate_runs_to_restrict, RunsRestriction};
use crate::chase::{calculate_overs_to_chase, ChaseWindow};
use crate::error::{NrrError, Result};
use crate::nrr::round_nrr;
use crate::reachability::can_reach_position;
use crate::request::{ScenarioRequest, TossResult};
use crate::standings::StandingsView;

/// A solved branch with its plain-language restatement.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario<T> {
    pub scenario: String,
    pub answer: String,
    #[serde(rename = "revisedNRR")]
    pub revised_nrr: String,
    pub details: T,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioOutcome {
    BattingFirst(Scenario<RunsRestriction>),
    BowlingFirst(Scenario<ChaseWindow>),
}

/// Where the team stands now against the team it wants to displace.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NrrAnalysis {
    #[serde(rename = "currentNRR")]
    pub current_nrr: f64,
    #[serde(rename = "targetNRR")]
    pub target_nrr: f64,
    pub nrr_gap: f64,
    pub current_position: u32,
    pub target_position: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioResult {
    #[serde(flatten)]
    pub outcome: ScenarioOutcome,
    pub analysis: NrrAnalysis,
}

/// Answer one scenario request.
///
/// Same-team and reachability failures are returned as they are, before any arithmetic.
/// Team names are compared ignoring ASCII case and surrounding whitespace, like name lookups.
/// Failures inside the solving branch come back wrapped in [`NrrError::Calculation`].
pub fn calculate_scenario<S: StandingsView + ?Sized>(
    standings: &S,
    request: &ScenarioRequest,
) -> Result<ScenarioResult> {
    let your_team = request.your_team.as_str();
    let opposition = request.opposition_team.as_str();

    if your_team.trim().eq_ignore_ascii_case(opposition.trim()) {
        return Err(NrrError::SameTeam);
    }

    let check = can_reach_position(standings, your_team, request.desired_position)?;
    if !check.can_reach {
        return Err(NrrError::PositionUnreachable {
            reason: check.reason.clone().unwrap_or_default(),
            check: Box::new(check),
        });
    }

    debug!(
        "solving {:?} for {} vs {} -> position {}",
        request.toss, your_team, opposition, request.desired_position
    );

    solve(standings, request).map_err(NrrError::in_calculation)
}

fn solve<S: StandingsView + ?Sized>(
    standings: &S,
    request: &ScenarioRequest,
) -> Result<ScenarioResult> {
    let your_team = request.your_team.as_str();
    let opposition = request.opposition_team.as_str();
    let overs = &request.overs;

    let outcome = match request.toss {
        TossResult::BattingFirst { runs_scored } => {
            let details = calculate_runs_to_restrict(
                standings,
                your_team,
                request.desired_position,
                overs,
                runs_scored,
            )?;
            ScenarioOutcome::BattingFirst(Scenario {
                scenario: format!(
                    "If {} score {} runs in {} overs",
                    your_team, runs_scored, overs
                ),
                answer: format!(
                    "{} need to restrict {} between {} to {} runs in {} overs.",
                    your_team, opposition, details.runs_range.min, details.runs_range.max, overs
                ),
                revised_nrr: format!(
                    "Revised NRR of {} will be between {} to {}.",
                    your_team, details.nrr_range.min, details.nrr_range.max
                ),
                details,
            })
        }
        TossResult::BowlingFirst { runs_to_chase } => {
            let details = calculate_overs_to_chase(
                standings,
                your_team,
                request.desired_position,
                overs,
                runs_to_chase,
            )?;
            ScenarioOutcome::BowlingFirst(Scenario {
                scenario: format!(
                    "If {} score {} runs in {} overs",
                    opposition, runs_to_chase, overs
                ),
                answer: format!(
                    "{} need to chase {} runs between {} and {} overs.",
                    your_team, runs_to_chase, details.overs_range.min, details.overs_range.max
                ),
                revised_nrr: format!(
                    "Revised NRR for {} will be between {} to {}.",
                    your_team, details.nrr_range.min, details.nrr_range.max
                ),
                details,
            })
        }
    };

    let team = standings.require_team(your_team)?;
    let target = standings.require_position(request.desired_position)?;

    Ok(ScenarioResult {
        outcome,
        analysis: NrrAnalysis {
            current_nrr: team.nrr,
            target_nrr: target.nrr,
            nrr_gap: round_nrr(target.nrr - team.nrr),
            current_position: team.position,
            target_position: request.desired_position,
        },
    })
}

/// Answer many independent requests in parallel. Results keep the input order.
pub fn calculate_scenarios<S: StandingsView + Sync + ?Sized>(
    standings: &S,
    requests: &[ScenarioRequest],
) -> Vec<Result<ScenarioResult>> {
    requests
        .par_iter()
        .map(|request| calculate_scenario(standings, request))
        .collect()
}
