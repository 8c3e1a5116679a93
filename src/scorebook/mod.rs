//! The running record of one game: the latest [`GameState`], who is playing,
//! who is up and everything that happened so far.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tracing::{debug, info};

use crate::game::{self, Event, GameState, Notification, Side};
use crate::roster::PlayerId;

pub use line_score::{LineScore, RenderedLineScore};
pub use play::Play;

pub mod line_score;
pub mod play;

pub const DEFAULT_HOME_TEAM: &str = "Home Team";
pub const DEFAULT_AWAY_TEAM: &str = "Away Team";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchupError {
    #[error("The {side} team needs a name")]
    EmptyName { side: Side },
}

/// Display names of both teams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchup {
    home: String,
    away: String,
}

impl Matchup {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Result<Self, MatchupError> {
        let home = home.into().trim().to_owned();
        let away = away.into().trim().to_owned();
        if home.is_empty() {
            return Err(MatchupError::EmptyName { side: Side::Home });
        }
        if away.is_empty() {
            return Err(MatchupError::EmptyName { side: Side::Away });
        }
        Ok(Self { home, away })
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn away(&self) -> &str {
        &self.away
    }

    pub fn name(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

impl Default for Matchup {
    fn default() -> Self {
        Self {
            home: DEFAULT_HOME_TEAM.to_owned(),
            away: DEFAULT_AWAY_TEAM.to_owned(),
        }
    }
}

pub struct Scorebook {
    matchup: Matchup,
    timezone: Tz,
    state: GameState,
    plays: Vec<Play>,
    line_score: LineScore,
    batter: Option<PlayerId>,
    pitcher: Option<PlayerId>,
}

impl Scorebook {
    pub fn new(matchup: Matchup, timezone: Tz) -> Self {
        let mut line_score = LineScore::new();
        line_score.reach(1, false);
        info!(home = matchup.home(), away = matchup.away(), "Game started");
        Self {
            matchup,
            timezone,
            state: GameState::new(),
            plays: Vec::new(),
            line_score,
            batter: None,
            pitcher: None,
        }
    }

    #[inline]
    pub fn record(&mut self, event: Event) -> &[Notification] {
        self.record_at(event, Utc::now())
    }

    pub fn record_at(&mut self, event: Event, at: DateTime<Utc>) -> &[Notification] {
        let before = self.state;
        let game::Transition { state, notifications } = game::apply(&before, event);
        debug!(?event, ?before, after = ?state, "Applied event");

        match event {
            Event::NewGame => {
                self.plays.clear();
                self.line_score = LineScore::new();
                self.batter = None;
                self.pitcher = None;
                info!(home = self.matchup.home(), away = self.matchup.away(), "New game started");
            }
            Event::Run => self.line_score.credit_run(before.inning, before.is_bottom),
            Event::Hit => self.line_score.credit_hit(before.is_bottom),
            _ => {}
        }
        // a new half-inning starts without a batter or pitcher
        if state.inning != before.inning || state.is_bottom != before.is_bottom {
            self.batter = None;
            self.pitcher = None;
        }
        self.line_score.reach(state.inning, state.is_bottom);
        self.state = state;

        self.plays.push(Play::new(at.with_timezone(&self.timezone), &before, event, notifications));
        self.plays.last().map(Play::notifications).unwrap_or_default()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn matchup(&self) -> &Matchup {
        &self.matchup
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn line_score(&self) -> &LineScore {
        &self.line_score
    }

    pub fn batting_team(&self) -> &str {
        self.matchup.name(self.state.batting_side())
    }

    pub fn fielding_team(&self) -> &str {
        self.matchup.name(self.state.fielding_side())
    }

    pub fn batter(&self) -> Option<&PlayerId> {
        self.batter.as_ref()
    }

    pub fn pitcher(&self) -> Option<&PlayerId> {
        self.pitcher.as_ref()
    }

    pub fn select_batter(&mut self, id: PlayerId) {
        debug!(batter = %id, "Selected batter");
        self.batter = Some(id);
    }

    pub fn select_pitcher(&mut self, id: PlayerId) {
        debug!(pitcher = %id, "Selected pitcher");
        self.pitcher = Some(id);
    }
}
