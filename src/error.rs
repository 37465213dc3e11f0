use thiserror::Error;

use crate::reachability::ReachabilityCheck;

pub type Result<T> = std::result::Result<T, NrrError>;

/// Everything that can go wrong while answering a scenario request.
///
/// All failures are request-scoped and deterministic in their input, so none are retried.
#[derive(Debug, Error)]
pub enum NrrError {
    #[error("Team {0} not found")]
    TeamNotFound(String),

    #[error("No team found at position {0}")]
    PositionNotFound(u32),

    #[error("Your team and opposition team cannot be the same")]
    SameTeam,

    /// The structural gate rejected the target position. `check` holds the points and
    /// positions that led to the rejection.
    #[error("{reason}")]
    PositionUnreachable {
        reason: String,
        check: Box<ReachabilityCheck>,
    },

    #[error("Invalid overs value {0:?}")]
    InvalidOvers(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A failure raised while a scenario branch was being solved.
    #[error("NRR Calculation Error: {0}")]
    Calculation(#[source] Box<NrrError>),

    #[error("Invalid points table: {0}")]
    InvalidStandings(String),

    #[error("Failed to read points table from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed points table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl NrrError {
    /// HTTP-style status class a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            NrrError::TeamNotFound(_) | NrrError::PositionNotFound(_) => 404,
            NrrError::SameTeam
            | NrrError::PositionUnreachable { .. }
            | NrrError::InvalidOvers(_)
            | NrrError::Validation(_) => 400,
            NrrError::Calculation(_)
            | NrrError::InvalidStandings(_)
            | NrrError::Io { .. }
            | NrrError::Json(_) => 500,
        }
    }

    /// Points still missing after a win, when that is why the position is out of reach.
    pub fn points_gap(&self) -> Option<u32> {
        match self {
            NrrError::PositionUnreachable { check, .. } if check.points_gap > 0 => {
                Some(check.points_gap)
            }
            _ => None,
        }
    }

    /// Wrap a failure that happened inside a solver branch.
    pub(crate) fn in_calculation(self) -> Self {
        match self {
            NrrError::Calculation(_) => self,
            other => NrrError::Calculation(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(NrrError::TeamNotFound("XI".to_string()).status_code(), 404);
        assert_eq!(NrrError::PositionNotFound(9).status_code(), 404);
        assert_eq!(NrrError::SameTeam.status_code(), 400);
        assert_eq!(NrrError::Validation("bad".to_string()).status_code(), 400);
        assert_eq!(
            NrrError::TeamNotFound("XI".to_string()).in_calculation().status_code(),
            500
        );
    }

    #[test]
    fn test_calculation_message_wraps_inner() {
        let err = NrrError::PositionNotFound(7).in_calculation();
        assert_eq!(
            err.to_string(),
            "NRR Calculation Error: No team found at position 7"
        );
        // Wrapping twice keeps a single layer
        let twice = err.in_calculation();
        assert_eq!(
            twice.to_string(),
            "NRR Calculation Error: No team found at position 7"
        );
    }
}
