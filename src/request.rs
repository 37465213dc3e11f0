use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DESIRED_POSITION, MAX_INNINGS_RUNS, MAX_MATCH_OVERS, MIN_MATCH_OVERS};
use crate::error::{NrrError, Result};
use crate::overs::Overs;

/// Who bats first in the hypothetical match, with the runs figure that side needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tossResult", rename_all = "snake_case")]
pub enum TossResult {
    /// Runs your team posts
    BattingFirst {
        #[serde(rename = "runsScored")]
        runs_scored: u32,
    },
    /// Runs the opposition posts, which your team then chases
    BowlingFirst {
        #[serde(rename = "runsToChase")]
        runs_to_chase: u32,
    },
}

/// A "what do we need to do" question about one upcoming match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRequest {
    pub your_team: String,
    pub opposition_team: String,
    pub overs: Overs,
    pub desired_position: u32,
    #[serde(flatten)]
    pub toss: TossResult,
}

impl ScenarioRequest {
    pub fn batting_first(
        your_team: &str,
        opposition_team: &str,
        overs: impl Into<Overs>,
        desired_position: u32,
        runs_scored: u32,
    ) -> Self {
        ScenarioRequest {
            your_team: your_team.to_string(),
            opposition_team: opposition_team.to_string(),
            overs: overs.into(),
            desired_position,
            toss: TossResult::BattingFirst { runs_scored },
        }
    }

    pub fn bowling_first(
        your_team: &str,
        opposition_team: &str,
        overs: impl Into<Overs>,
        desired_position: u32,
        runs_to_chase: u32,
    ) -> Self {
        ScenarioRequest {
            your_team: your_team.to_string(),
            opposition_team: opposition_team.to_string(),
            overs: overs.into(),
            desired_position,
            toss: TossResult::BowlingFirst { runs_to_chase },
        }
    }

    /// Parse a request body in the camelCase JSON shape.
    ///
    /// The runs field of the other toss outcome is rejected rather than ignored.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| NrrError::Validation(e.to_string()))?;

        let forbidden = match value.get("tossResult").and_then(|t| t.as_str()) {
            Some("batting_first") => Some("runsToChase"),
            Some("bowling_first") => Some("runsScored"),
            _ => None,
        };
        if let Some(field) = forbidden.filter(|f| value.get(*f).is_some()) {
            return Err(NrrError::Validation(format!("\"{}\" is not allowed", field)));
        }

        serde_json::from_value(value).map_err(|e| NrrError::Validation(e.to_string()))
    }

    /// Shape checks a transport applies before handing the request to the engine.
    ///
    /// Every violation is collected; team and position existence are left to the engine.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.your_team.trim().is_empty() {
            errors.push("Your team is required".to_string());
        }
        if self.opposition_team.trim().is_empty() {
            errors.push("Opposition team is required".to_string());
        }

        match &self.overs {
            Overs::Decimal(value) if !value.is_finite() || *value < MIN_MATCH_OVERS => {
                errors.push(format!("Overs must be at least {}", MIN_MATCH_OVERS));
            }
            Overs::Decimal(value) if *value > MAX_MATCH_OVERS => {
                errors.push(format!("Overs cannot exceed {}", MAX_MATCH_OVERS));
            }
            Overs::Notation(text) if !is_overs_pattern(text) => {
                errors.push(
                    "Invalid overs format. Use format like \"20\" or \"20.3\"".to_string(),
                );
            }
            _ => {}
        }

        if self.desired_position < 1 {
            errors.push("Desired position must be at least 1".to_string());
        } else if self.desired_position > MAX_DESIRED_POSITION {
            errors.push(format!(
                "Desired position cannot exceed {}",
                MAX_DESIRED_POSITION
            ));
        }

        match self.toss {
            TossResult::BattingFirst { runs_scored } if runs_scored > MAX_INNINGS_RUNS => {
                errors.push(format!("Runs scored cannot exceed {}", MAX_INNINGS_RUNS));
            }
            TossResult::BowlingFirst { runs_to_chase } if runs_to_chase > MAX_INNINGS_RUNS => {
                errors.push(format!("Runs to chase cannot exceed {}", MAX_INNINGS_RUNS));
            }
            _ => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(NrrError::Validation(errors.join(", ")))
        }
    }
}

/// One or two digits, optionally followed by `.` and one or two digits.
fn is_overs_pattern(text: &str) -> bool {
    let digits = |s: &str| (1..=2).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit());
    match text.split_once('.') {
        Some((overs, balls)) => digits(overs) && digits(balls),
        None => digits(text),
    }
}
