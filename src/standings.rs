use log::{info, warn};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::constants::{NRR_TOLERANCE, POINTS_PER_WIN};
use crate::error::{NrrError, Result};
use crate::team::Team;

/// Read-only access to the league table.
///
/// Implementors only supply [`StandingsView::teams`]; lookups are provided on top of it.
pub trait StandingsView {
    fn teams(&self) -> &[Team];

    /// Case-insensitive lookup by short name.
    fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams().iter().find(|t| t.matches_name(name))
    }

    fn team_at_position(&self, position: u32) -> Option<&Team> {
        self.teams().iter().find(|t| t.position == position)
    }

    fn require_team(&self, name: &str) -> Result<&Team> {
        self.team_by_name(name)
            .ok_or_else(|| NrrError::TeamNotFound(name.to_string()))
    }

    fn require_position(&self, position: u32) -> Result<&Team> {
        self.team_at_position(position)
            .ok_or(NrrError::PositionNotFound(position))
    }
}

/// A row of the rendered points table, `for`/`against` shown as `"runs / overs"`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsTableRow {
    pub id: u32,
    pub position: u32,
    pub name: String,
    pub matches_played: u32,
    pub matches_won: u32,
    pub matches_lost: u32,
    pub nrr: f64,
    #[serde(rename = "for")]
    pub runs_for: String,
    #[serde(rename = "against")]
    pub runs_against: String,
    pub points: u32,
}

/// Minimal team entry for pickers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TeamListEntry {
    pub id: u32,
    pub name: String,
    pub position: u32,
}

/// Immutable, validated league table ordered by position.
#[derive(Clone, Debug)]
pub struct PointsTable {
    teams: Vec<Team>,
}

impl PointsTable {
    /// Build a table, checking that positions run 1..=N with no gaps or duplicates,
    /// that names are unique, and that every overs aggregate parses.
    pub fn new(mut teams: Vec<Team>) -> Result<Self> {
        teams.sort_by_key(|t| t.position);

        let mut names = HashSet::new();
        for (i, team) in teams.iter().enumerate() {
            let expected = i as u32 + 1;
            if team.position != expected {
                return Err(NrrError::InvalidStandings(format!(
                    "expected a team at position {}, found {} at position {}",
                    expected, team.name, team.position
                )));
            }
            if !names.insert(team.name.to_ascii_lowercase()) {
                return Err(NrrError::InvalidStandings(format!(
                    "duplicate team name {}",
                    team.name
                )));
            }

            let computed = team.computed_nrr().map_err(|e| {
                NrrError::InvalidStandings(format!("team {}: {}", team.name, e))
            })?;
            if (computed - team.nrr).abs() > NRR_TOLERANCE {
                warn!(
                    "stored NRR {} for {} differs from aggregates ({:.4})",
                    team.nrr, team.name, computed
                );
            }
        }

        Ok(PointsTable { teams })
    }

    /// Parse a JSON array of teams (camelCase keys).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let teams: Vec<Team> = serde_json::from_str(json)?;
        Self::new(teams)
    }

    /// Read a JSON points table from disk.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| NrrError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json_str(&json)?;
        info!("loaded {} teams from {}", table.len(), path.display());
        Ok(table)
    }

    /// The five-team IPL table used as the default reference data.
    pub fn ipl_sample() -> Self {
        let team = |id: u32,
                    name: &str,
                    position: u32,
                    won: u32,
                    lost: u32,
                    rf: u32,
                    of: &str,
                    ra: u32,
                    oa: &str,
                    nrr: f64| Team {
            id,
            name: name.to_string(),
            position,
            matches_played: won + lost,
            matches_won: won,
            matches_lost: lost,
            runs_for: rf,
            overs_for: of.to_string(),
            runs_against: ra,
            overs_against: oa.to_string(),
            nrr,
            points: won * POINTS_PER_WIN,
        };

        PointsTable {
            teams: vec![
                team(1, "CSK", 1, 5, 2, 1130, "133.1", 1071, "138.5", 0.771),
                team(2, "RCB", 2, 4, 3, 1217, "140", 1066, "131.4", 0.597),
                team(3, "DC", 3, 4, 3, 1085, "126", 1136, "137", 0.319),
                team(4, "RR", 4, 3, 4, 1066, "128.2", 1094, "137.1", 0.331),
                team(5, "MI", 5, 2, 6, 1003, "155.2", 1134, "138.1", -1.75),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn rows(&self) -> Vec<PointsTableRow> {
        self.teams
            .iter()
            .map(|t| PointsTableRow {
                id: t.id,
                position: t.position,
                name: t.name.clone(),
                matches_played: t.matches_played,
                matches_won: t.matches_won,
                matches_lost: t.matches_lost,
                nrr: t.nrr,
                runs_for: format!("{} / {}", t.runs_for, t.overs_for),
                runs_against: format!("{} / {}", t.runs_against, t.overs_against),
                points: t.points,
            })
            .collect()
    }

    pub fn team_list(&self) -> Vec<TeamListEntry> {
        self.teams
            .iter()
            .map(|t| TeamListEntry {
                id: t.id,
                name: t.name.clone(),
                position: t.position,
            })
            .collect()
    }
}

impl StandingsView for PointsTable {
    fn teams(&self) -> &[Team] {
        &self.teams
    }
}

impl StandingsView for [Team] {
    fn teams(&self) -> &[Team] {
        self
    }
}
