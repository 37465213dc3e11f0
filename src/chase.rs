use log::debug;
use serde::Serialize;

use crate::batting::Bounds;
use crate::constants::{CHASE_OVERS_BUFFER, MIN_CHASE_OVERS};
use crate::error::Result;
use crate::nrr::{calculate_nrr, round_nrr};
use crate::overs::{decimal_to_overs, Overs};
use crate::standings::StandingsView;

/// Bowling-first answer: the window of overs in which the chase must be completed.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChaseWindow {
    /// Cricket notation
    pub overs_range: Bounds<String>,
    pub nrr_range: Bounds<f64>,
    pub runs_to_chase: u32,
}

/// Solve the bowling-first branch.
///
/// The opposition sets `runs_to_chase` in `overs`; the chase adds that many runs to both
/// sides of the team's aggregates. The slowest qualifying chase is solved exactly, the
/// fastest is estimated as a fixed buffer below it.
pub fn calculate_overs_to_chase<S: StandingsView + ?Sized>(
    standings: &S,
    your_team: &str,
    desired_position: u32,
    overs: &Overs,
    runs_to_chase: u32,
) -> Result<ChaseWindow> {
    let team = standings.require_team(your_team)?;
    let target = standings.require_position(desired_position)?;

    let overs_decimal = overs.to_decimal()?;
    let overs_for = team.overs_for_decimal()?;
    let new_overs_against = team.overs_against_decimal()? + overs_decimal;

    let new_runs_for = team.runs_for as f64 + runs_to_chase as f64;
    let new_runs_against = team.runs_against as f64 + runs_to_chase as f64;
    let target_nrr = target.nrr;

    let max_overs = new_runs_for / (target_nrr + new_runs_against / new_overs_against) - overs_for;
    let min_overs = (max_overs - CHASE_OVERS_BUFFER).max(MIN_CHASE_OVERS);

    let final_min = min_overs.min(overs_decimal).max(MIN_CHASE_OVERS);
    let final_max = max_overs.min(overs_decimal).max(final_min);

    debug!(
        "{} chasing {} in {} overs, target NRR {}, slowest chase {:.3} overs",
        team.name, runs_to_chase, overs, target_nrr, max_overs
    );

    // Using more overs lowers the scoring rate, so the slow end gives the NRR floor
    let min_nrr = calculate_nrr(
        new_runs_for,
        overs_for + final_max,
        new_runs_against,
        new_overs_against,
    );
    let max_nrr = calculate_nrr(
        new_runs_for,
        overs_for + final_min,
        new_runs_against,
        new_overs_against,
    );

    Ok(ChaseWindow {
        overs_range: Bounds {
            min: decimal_to_overs(final_min),
            max: decimal_to_overs(final_max),
        },
        nrr_range: Bounds {
            min: round_nrr(min_nrr),
            max: round_nrr(max_nrr),
        },
        runs_to_chase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NrrError;
    use crate::overs::overs_to_decimal;
    use crate::standings::PointsTable;

    #[test]
    fn test_ipl_rr_to_third() {
        let table = PointsTable::ipl_sample();
        let result = calculate_overs_to_chase(&table, "RR", 3, &Overs::from(20.0), 119).unwrap();

        assert_eq!(result.overs_range.min, "14.1");
        assert_eq!(result.overs_range.max, "19.1");
        assert_eq!(result.nrr_range, Bounds { min: 0.319, max: 0.601 });
        assert_eq!(result.runs_to_chase, 119);
    }

    #[test]
    fn test_window_capped_at_match_overs() {
        let table = PointsTable::ipl_sample();
        // A big chase tolerates a slower pace; the slow end runs past 20 overs and is capped
        let result = calculate_overs_to_chase(&table, "RR", 3, &Overs::from(20.0), 250).unwrap();
        assert_eq!(result.overs_range.max, "20.0");
        assert_eq!(result.overs_range.min, "15.0");
        assert!(overs_to_decimal(&result.overs_range.min).unwrap() <= 20.0);
        assert!(result.nrr_range.min >= 0.319);
        assert!(result.nrr_range.max >= result.nrr_range.min);
    }

    #[test]
    fn test_window_floor_when_target_out_of_reach() {
        let table = PointsTable::ipl_sample();
        // MI cannot lift its NRR to CSK's in one chase; both ends collapse to the floor
        let result = calculate_overs_to_chase(&table, "MI", 1, &Overs::from(20.0), 150).unwrap();
        assert_eq!(result.overs_range.min, "0.1");
        assert_eq!(result.overs_range.max, "0.1");
        assert_eq!(result.nrr_range.min, result.nrr_range.max);
    }

    #[test]
    fn test_huge_chase_does_not_overflow() {
        let table = PointsTable::ipl_sample();
        let result =
            calculate_overs_to_chase(&table, "RR", 3, &Overs::from(20.0), u32::MAX).unwrap();
        assert_eq!(result.runs_to_chase, u32::MAX);
        assert!(overs_to_decimal(&result.overs_range.max).unwrap() <= 20.0);
    }

    #[test]
    fn test_invalid_match_overs() {
        let table = PointsTable::ipl_sample();
        assert!(matches!(
            calculate_overs_to_chase(&table, "RR", 3, &Overs::from("twenty"), 150),
            Err(NrrError::InvalidOvers(_))
        ));
    }
}
