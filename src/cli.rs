use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use crate::config::{Config, RosterSource};
use crate::roster::{Roster, TeamId};
use crate::scorebook::Matchup;

#[derive(Debug, Parser)]
#[command(name = "scorekeeper", version, about = "Keep score of a baseball game from the terminal")]
pub struct Args {
    /// Home team display name
    #[arg(long)]
    pub home: Option<String>,

    /// Away team display name
    #[arg(long)]
    pub away: Option<String>,

    /// Home team id on the roster
    #[arg(long, value_name = "ID")]
    pub home_id: Option<String>,

    /// Away team id on the roster
    #[arg(long, value_name = "ID")]
    pub away_id: Option<String>,

    /// Roster JSON file, overriding the configured roster source
    #[arg(long, value_name = "FILE")]
    pub roster: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Never copy cards to the clipboard
    #[arg(long)]
    pub no_copy: bool,

    /// Hide notifications that only restate the count
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        config.context("Could not load configuration")
    }

    pub fn roster_source(&self, config: &Config) -> Option<RosterSource> {
        match &self.roster {
            Some(path) => Some(RosterSource::File(path.clone())),
            None => config.roster_source(),
        }
    }

    pub fn home_id(&self) -> Option<TeamId> {
        self.home_id.as_deref().map(TeamId::from)
    }

    pub fn away_id(&self) -> Option<TeamId> {
        self.away_id.as_deref().map(TeamId::from)
    }

    /// Team names by precedence: explicit name, roster team, configured default.
    pub fn matchup(&self, config: &Config, roster: Option<&Roster>) -> Result<Matchup> {
        let home = team_name(self.home.as_deref(), self.home_id().as_ref(), roster, &config.defaults.home_team)?;
        let away = team_name(self.away.as_deref(), self.away_id().as_ref(), roster, &config.defaults.away_team)?;
        Ok(Matchup::new(home, away)?)
    }
}

fn team_name(name: Option<&str>, id: Option<&TeamId>, roster: Option<&Roster>, default: &str) -> Result<String> {
    if let Some(name) = name {
        return Ok(name.to_owned());
    }
    match (id, roster) {
        (Some(id), Some(roster)) => Ok(roster.team(id)?.name.clone()),
        (Some(id), None) => {
            warn!(team = %id, "No roster loaded, using the default name");
            Ok(default.to_owned())
        }
        (None, _) => Ok(default.to_owned()),
    }
}
