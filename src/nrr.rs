use crate::constants::NRR_DECIMALS;

/// Net Run Rate: runs scored per over minus runs conceded per over.
///
/// Both overs arguments are decimal. No rounding happens here; see [`round_nrr`].
pub fn calculate_nrr(runs_for: f64, overs_for: f64, runs_against: f64, overs_against: f64) -> f64 {
    let run_rate_for = runs_for / overs_for;
    let run_rate_against = runs_against / overs_against;
    run_rate_for - run_rate_against
}

/// Round an NRR figure to reporting precision.
pub fn round_nrr(value: f64) -> f64 {
    let scale = 10f64.powi(NRR_DECIMALS);
    // `+ 0.0` folds -0.0 into 0.0
    (value * scale).round() / scale + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nrr_identity() {
        let nrr = calculate_nrr(1130.0, 133.5, 1071.0, 138.75);
        assert_eq!(nrr, 1130.0 / 133.5 - 1071.0 / 138.75);
    }

    #[test]
    fn test_equal_rates_zero() {
        assert_eq!(calculate_nrr(160.0, 20.0, 160.0, 20.0), 0.0);
    }

    #[test]
    fn test_round_nrr() {
        assert_eq!(round_nrr(0.77134), 0.771);
        assert_eq!(round_nrr(-1.75036), -1.75);
        assert_eq!(round_nrr(0.5967), 0.597);
        assert!(round_nrr(-0.0001).is_sign_positive());
    }
}
