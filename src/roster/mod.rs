//! Teams and players, keyed by the opaque identifiers the backend hands out.

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use fetch::RetryPolicy;

pub mod fetch;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roster file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("Response from '{url}' was not a valid roster: {source}")]
    Decode {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Environment variable '{var}' with the backend API key is not set")]
    MissingApiKey { var: String },

    #[error("Team '{id}' is not on the roster")]
    UnknownTeam { id: TeamId },

    #[error("Player '{id}' is not on the roster")]
    UnknownPlayer { id: PlayerId },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

macro_rules! opaque_id {
    ($($id:ident),*) => {$(
        impl $id {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $id {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $id {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Display for $id {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    )*};
}

opaque_id!(TeamId, PlayerId);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub team_id: TeamId,
    pub name: String,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl Player {
    /// Short fielding position, e.g. "SS", when the player has one.
    pub fn position_abbreviation(&self) -> Option<String> {
        self.position.as_deref().map(to_position_abbreviation)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(number) = &self.number {
            write!(f, " #{number}")?;
        }
        Ok(())
    }
}

/// The on-disk roster document: `{ "teams": [...], "players": [...] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RosterDocument {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
}

#[derive(Clone, Debug, Default)]
pub struct Roster {
    teams: Vec<Team>,
    team_index: FxHashMap<TeamId, usize>,
    players: Vec<Player>,
    player_index: FxHashMap<PlayerId, usize>,
}

impl Roster {
    pub fn new(teams: Vec<Team>, players: Vec<Player>) -> Self {
        let team_index = teams.iter().enumerate().map(|(idx, team)| (team.id.clone(), idx)).collect();
        let player_index = players.iter().enumerate().map(|(idx, player)| (player.id.clone(), idx)).collect();
        Self {
            teams,
            team_index,
            players,
            player_index,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, RosterError> {
        let content = fs::read_to_string(path).map_err(|e| RosterError::Read {
            path: path.to_owned(),
            source: e,
        })?;
        let document: RosterDocument = serde_json::from_str(&content).map_err(|e| RosterError::Parse {
            path: path.to_owned(),
            source: e,
        })?;
        Ok(Self::new(document.teams, document.players))
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, id: &TeamId) -> Result<&Team, RosterError> {
        self.team_index
            .get(id)
            .map(|&idx| &self.teams[idx])
            .ok_or_else(|| RosterError::UnknownTeam { id: id.clone() })
    }

    pub fn player(&self, id: &PlayerId) -> Result<&Player, RosterError> {
        self.player_index
            .get(id)
            .map(|&idx| &self.players[idx])
            .ok_or_else(|| RosterError::UnknownPlayer { id: id.clone() })
    }

    pub fn players_for(&self, team_id: &TeamId) -> Vec<&Player> {
        self.players.iter().filter(|player| &player.team_id == team_id).collect()
    }
}

/// Abbreviates full fielding position names, leaving anything unrecognised as written.
pub fn to_position_abbreviation(s: &str) -> String {
    let lower = s.trim().to_ascii_lowercase();
    let abbreviation = match &*lower {
        "pitcher" => "P",
        "catcher" => "C",
        "first baseman" | "first base" => "1B",
        "second baseman" | "second base" => "2B",
        "third baseman" | "third base" => "3B",
        "shortstop" => "SS",
        "left fielder" | "left field" => "LF",
        "center fielder" | "center field" => "CF",
        "right fielder" | "right field" => "RF",
        "designated hitter" => "DH",
        _ => s.trim(),
    };
    abbreviation.to_owned()
}
