use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::POINTS_PER_WIN;
use crate::error::Result;
use crate::overs::overs_to_decimal;
use crate::standings::PointsTable;
use crate::team::Team;

/// Matches each synthetic team has played
pub const SYNTHETIC_MATCHES: u32 = 10;

/// Generate a plausible league table of `n_teams` T20 sides.
///
/// Ranked by points, then NRR, so the table looks like one produced by a real league.
/// The same seed always yields the same table.
pub fn synthetic_table(n_teams: u32, seed: u64) -> Result<PointsTable> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut teams = Vec::with_capacity(n_teams as usize);

    for i in 0..n_teams {
        let won = rng.gen_range(0..=SYNTHETIC_MATCHES);
        let overs_for = random_aggregate_overs(&mut rng);
        let overs_against = random_aggregate_overs(&mut rng);
        let runs_for = random_runs(&mut rng, &overs_for)?;
        let runs_against = random_runs(&mut rng, &overs_against)?;

        let mut team = Team::new(
            &format!("T{}", i + 1),
            0,
            runs_for,
            &overs_for,
            runs_against,
            &overs_against,
        )?;
        team.id = i + 1;
        team.matches_played = SYNTHETIC_MATCHES;
        team.matches_won = won;
        team.matches_lost = SYNTHETIC_MATCHES - won;
        team.points = won * POINTS_PER_WIN;
        teams.push(team);
    }

    teams.sort_by(|a, b| b.points.cmp(&a.points).then(b.nrr.total_cmp(&a.nrr)));
    for (rank, team) in teams.iter_mut().enumerate() {
        team.position = rank as u32 + 1;
    }

    PointsTable::new(teams)
}

fn random_aggregate_overs(rng: &mut ChaCha8Rng) -> String {
    let whole = rng.gen_range(150..=200u32);
    let balls = rng.gen_range(0..6u32);
    format!("{}.{}", whole, balls)
}

fn random_runs(rng: &mut ChaCha8Rng, overs: &str) -> Result<u32> {
    let run_rate = rng.gen_range(6.5..10.5);
    Ok((overs_to_decimal(overs)? * run_rate).round() as u32)
}
