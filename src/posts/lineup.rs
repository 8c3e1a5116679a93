use std::fmt::{Display, Formatter};

use crate::roster::Player;

#[derive(Clone, Debug)]
pub struct LineupEntry {
    batting_position: usize,
    fielding_position: Option<String>,
    name: String,
    number: Option<String>,
}

impl LineupEntry {
    pub fn new(batting_position: usize, player: &Player) -> Self {
        Self {
            batting_position,
            fielding_position: player.position_abbreviation(),
            name: player.name.clone(),
            number: player.number.clone(),
        }
    }
}

impl Display for LineupEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { batting_position, fielding_position, name, number } = self;
        write!(f, "`{batting_position}` |")?;
        if let Some(fielding_position) = fielding_position {
            write!(f, " **{fielding_position}**")?;
        }
        write!(f, " {name}")?;
        if let Some(number) = number {
            write!(f, " #{number}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct TeamLineup {
    team: String,
    entries: Vec<LineupEntry>,
}

impl TeamLineup {
    pub fn new(team: &str, players: &[&Player]) -> Self {
        Self {
            team: team.to_owned(),
            entries: players.iter().enumerate().map(|(idx, player)| LineupEntry::new(idx + 1, player)).collect(),
        }
    }
}

impl Display for TeamLineup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "### __{} Lineup__", self.team)?;
        if self.entries.is_empty() {
            return write!(f, "No players available. Please select a team.");
        }
        let lines = self.entries.iter().map(LineupEntry::to_string).collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Both batting orders, away first as they hit.
#[derive(Clone, Debug)]
pub struct Lineup {
    away: TeamLineup,
    home: TeamLineup,
}

impl Lineup {
    pub fn new(away: TeamLineup, home: TeamLineup) -> Self {
        Self { away, home }
    }
}

impl Display for Lineup {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.away)?;
        write!(f, "{}", self.home)
    }
}
