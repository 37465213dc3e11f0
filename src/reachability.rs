use log::debug;
use serde::Serialize;

use crate::constants::POINTS_PER_WIN;
use crate::error::Result;
use crate::standings::StandingsView;

/// Outcome of the structural check run before any NRR arithmetic.
///
/// Passing it is necessary but not sufficient: the NRR band still has to be solved.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReachabilityCheck {
    pub can_reach: bool,
    pub reason: Option<String>,
    pub current_position: u32,
    pub current_points: u32,
    pub target_points: u32,
    pub max_possible_points: u32,
    pub points_gap: u32,
    /// Always false; NRR is not considered by this gate
    pub nrr_check: bool,
}

/// Check whether `your_team` could climb to `desired_position` by winning the next match.
///
/// Only strictly better ranks may be targeted, and the single win modeled must lift the
/// team's points to at least those of the team currently holding the rank.
pub fn can_reach_position<S: StandingsView + ?Sized>(
    standings: &S,
    your_team: &str,
    desired_position: u32,
) -> Result<ReachabilityCheck> {
    let team = standings.require_team(your_team)?;
    let target = standings.require_position(desired_position)?;

    let current_position = team.position;
    let max_possible_points = team.points.saturating_add(POINTS_PER_WIN);

    let mut check = ReachabilityCheck {
        can_reach: true,
        reason: None,
        current_position,
        current_points: team.points,
        target_points: target.points,
        max_possible_points,
        points_gap: 0,
        nrr_check: false,
    };

    if desired_position >= current_position {
        check.can_reach = false;
        check.reason = Some(format!(
            "Cannot reach position {}. Your team is currently at position {}, and you can only \
             target positions higher than your current position. Please select a position \
             between 1 and {}.",
            desired_position,
            current_position,
            current_position.saturating_sub(1)
        ));
    } else if max_possible_points < target.points {
        check.can_reach = false;
        check.points_gap = target.points - max_possible_points;
        check.reason = Some(format!(
            "Cannot reach position {}. Even after winning, your team will have {} points, but \
             position {} requires at least {} points. You need {} more points to reach this \
             position.",
            desired_position, max_possible_points, desired_position, target.points, check.points_gap
        ));
    }

    debug!(
        "{} (position {}, {} pts) -> position {}: can_reach={}",
        team.name, current_position, team.points, desired_position, check.can_reach
    );

    Ok(check)
}

/// Every position the structural check accepts for `your_team`, best rank first.
pub fn reachable_positions<S: StandingsView + ?Sized>(
    standings: &S,
    your_team: &str,
) -> Result<Vec<u32>> {
    let current_position = standings.require_team(your_team)?.position;

    let mut positions = Vec::new();
    for position in 1..current_position {
        if can_reach_position(standings, your_team, position)?.can_reach {
            positions.push(position);
        }
    }
    Ok(positions)
}
