use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::nrr::{calculate_nrr, round_nrr};
use crate::overs::Overs;
use crate::standings::StandingsView;

/// Inclusive `min..=max` pair as reported to callers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bounds<T> {
    pub min: T,
    pub max: T,
}

/// Batting-first answer: how few runs the opposition must be held to.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunsRestriction {
    pub runs_range: Bounds<u32>,
    pub nrr_range: Bounds<f64>,
    pub overs: Overs,
}

/// Solve the batting-first branch.
///
/// `your_team` scores `runs_scored` in `overs`; find the opposition total that leaves the
/// team's NRR exactly level with the team at `desired_position`, bracketed to whole runs.
pub fn calculate_runs_to_restrict<S: StandingsView + ?Sized>(
    standings: &S,
    your_team: &str,
    desired_position: u32,
    overs: &Overs,
    runs_scored: u32,
) -> Result<RunsRestriction> {
    let team = standings.require_team(your_team)?;
    let target = standings.require_position(desired_position)?;

    let overs_decimal = overs.to_decimal()?;
    let overs_for = team.overs_for_decimal()?;
    let overs_against = team.overs_against_decimal()?;
    let runs_against = team.runs_against as f64;

    let new_runs_for = team.runs_for as f64 + runs_scored as f64;
    let new_overs_for = overs_for + overs_decimal;
    let new_overs_against = overs_against + overs_decimal;
    let target_nrr = target.nrr;

    // Opposition runs that put the revised NRR exactly on target
    let break_even =
        (new_runs_for / new_overs_for - target_nrr) * new_overs_against - runs_against;

    let min_runs = break_even.floor().max(0.0) as u32;
    let max_runs = (break_even.ceil().max(0.0) as u32).max(min_runs);

    debug!(
        "{} batting first: {} in {} overs, target NRR {}, break-even {:.3} runs",
        team.name, runs_scored, overs, target_nrr, break_even
    );

    // Conceding more runs lowers NRR, so the max-runs endpoint gives the NRR floor
    let min_nrr = calculate_nrr(
        new_runs_for,
        new_overs_for,
        runs_against + max_runs as f64,
        new_overs_against,
    );
    let max_nrr = calculate_nrr(
        new_runs_for,
        new_overs_for,
        runs_against + min_runs as f64,
        new_overs_against,
    );

    Ok(RunsRestriction {
        runs_range: Bounds {
            min: min_runs,
            max: max_runs,
        },
        nrr_range: Bounds {
            min: round_nrr(min_nrr),
            max: round_nrr(max_nrr),
        },
        overs: overs.clone(),
    })
}
