use serde::{Deserialize, Serialize};

use crate::constants::POINTS_PER_WIN;
use crate::error::Result;
use crate::nrr::{calculate_nrr, round_nrr};
use crate::overs::{notation_from_any, overs_to_decimal};

/// One row of the league table, with aggregate runs and overs across all matches played.
///
/// Overs aggregates are kept in cricket notation (`"133.1"`), exactly as published.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: u32,
    pub name: String,

    /// Table rank, 1 is top
    pub position: u32,

    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,

    pub runs_for: u32,
    #[serde(deserialize_with = "notation_from_any")]
    pub overs_for: String,

    pub runs_against: u32,
    #[serde(deserialize_with = "notation_from_any")]
    pub overs_against: String,

    /// Stored NRR, rounded to 3 decimals
    pub nrr: f64,
    pub points: u32,
}

impl Team {
    /// Create a team from its aggregates. The stored NRR is derived from them.
    ///
    /// The team starts with no recorded matches; see [`Team::with_record`].
    pub fn new(
        name: &str,
        position: u32,
        runs_for: u32,
        overs_for: &str,
        runs_against: u32,
        overs_against: &str,
    ) -> Result<Self> {
        let mut team = Team {
            id: position,
            name: name.to_string(),
            position,
            matches_played: 0,
            matches_won: 0,
            matches_lost: 0,
            runs_for,
            overs_for: overs_for.to_string(),
            runs_against,
            overs_against: overs_against.to_string(),
            nrr: 0.0,
            points: 0,
        };
        team.nrr = round_nrr(team.computed_nrr()?);
        Ok(team)
    }

    /// Set the win/loss record and the points it earns.
    pub fn with_record(mut self, won: u32, lost: u32) -> Self {
        self.matches_won = won;
        self.matches_lost = lost;
        self.matches_played = won + lost;
        self.points = won * POINTS_PER_WIN;
        self
    }

    /// Override the stored NRR.
    pub fn with_nrr(mut self, nrr: f64) -> Self {
        self.nrr = nrr;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn overs_for_decimal(&self) -> Result<f64> {
        overs_to_decimal(&self.overs_for)
    }

    pub fn overs_against_decimal(&self) -> Result<f64> {
        overs_to_decimal(&self.overs_against)
    }

    /// Unrounded NRR recomputed from the aggregates.
    pub fn computed_nrr(&self) -> Result<f64> {
        Ok(calculate_nrr(
            self.runs_for as f64,
            self.overs_for_decimal()?,
            self.runs_against as f64,
            self.overs_against_decimal()?,
        ))
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
