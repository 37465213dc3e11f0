use nrr_core::{
    calculate_nrr, calculate_overs_to_chase, calculate_runs_to_restrict, can_reach_position,
    decimal_to_overs, overs_to_decimal, synthetic_table, Overs, StandingsView,
};
use nrr_core::constants::MIN_CHASE_OVERS;
use proptest::prelude::*;

proptest! {
    #[test]
    fn notation_round_trips(overs in 0u32..50, balls in 0u32..6) {
        let text = format!("{}.{}", overs, balls);
        prop_assert_eq!(decimal_to_overs(overs_to_decimal(&text).unwrap()), text);
    }

    #[test]
    fn nrr_is_plain_rate_difference(
        rf in 0u32..3000, of in 1.0f64..400.0, ra in 0u32..3000, oa in 1.0f64..400.0
    ) {
        let nrr = calculate_nrr(rf as f64, of, ra as f64, oa);
        prop_assert_eq!(nrr, rf as f64 / of - ra as f64 / oa);
    }

    #[test]
    fn reachability_is_monotonic(seed in any::<u64>(), n_teams in 3u32..10) {
        let table = synthetic_table(n_teams, seed).unwrap();
        for team in table.teams() {
            let current = team.position;
            let mut reachable = false;
            // Walk from the best rank down; once reachable, every worse target stays so
            for position in 1..current {
                let check = can_reach_position(&table, &team.name, position).unwrap();
                if reachable {
                    prop_assert!(check.can_reach, "{} -> {}", team.name, position);
                }
                reachable |= check.can_reach;
            }
            let same = can_reach_position(&table, &team.name, current).unwrap();
            prop_assert!(!same.can_reach);
            prop_assert_eq!(same.points_gap, 0);
        }
    }

    #[test]
    fn restriction_endpoints_ordered(
        seed in any::<u64>(), runs_scored in 80u32..260, overs in 10u32..=20
    ) {
        let table = synthetic_table(6, seed).unwrap();
        let team = &table.teams()[5];
        let result = calculate_runs_to_restrict(
            &table, &team.name, 1, &Overs::from(overs as f64), runs_scored,
        ).unwrap();

        prop_assert!(result.runs_range.min <= result.runs_range.max);
        prop_assert!(result.nrr_range.min <= result.nrr_range.max);
        // Conceding the upper bound never beats the target by more than rounding
        if result.runs_range.max > 0 {
            prop_assert!(result.nrr_range.min <= table.teams()[0].nrr + 0.001);
        }
    }

    #[test]
    fn chase_window_within_match(
        seed in any::<u64>(), runs_to_chase in 80u32..260, overs in 10u32..=20
    ) {
        let table = synthetic_table(6, seed).unwrap();
        let team = &table.teams()[4];
        let overs = overs as f64;
        let result = calculate_overs_to_chase(
            &table, &team.name, 2, &Overs::from(overs), runs_to_chase,
        ).unwrap();

        let min = overs_to_decimal(&result.overs_range.min).unwrap();
        let max = overs_to_decimal(&result.overs_range.max).unwrap();
        prop_assert!(min <= max);
        // Notation rounds to the nearest ball, half a ball either side of the clamp
        prop_assert!(min >= MIN_CHASE_OVERS - 1.0 / 12.0);
        prop_assert!(max <= overs + 1e-9);
        // The 0.1-over floor never rounds down to zero balls
        prop_assert_ne!(result.overs_range.min.as_str(), "0.0");
        prop_assert!(result.nrr_range.max >= result.nrr_range.min);
    }
}
