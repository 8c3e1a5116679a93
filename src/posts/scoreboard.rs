use std::fmt::{Display, Formatter};

use crate::game::{GameState, Side};
use crate::roster::{PlayerId, Roster};
use crate::scorebook::Scorebook;
use crate::util::{last_name, nth};

#[derive(Clone, Debug)]
pub struct Scoreboard {
    home: String,
    away: String,
    state: GameState,
    batter: Option<String>,
    pitcher: Option<String>,
}

impl Scoreboard {
    pub fn new(book: &Scorebook, roster: Option<&Roster>) -> Self {
        Self {
            home: book.matchup().home().to_owned(),
            away: book.matchup().away().to_owned(),
            state: *book.state(),
            batter: book.batter().map(|id| player_label(id, roster)),
            pitcher: book.pitcher().map(|id| player_label(id, roster)),
        }
    }
}

/// Last name and number from the roster, or the bare id when it has no such player.
fn player_label(id: &PlayerId, roster: Option<&Roster>) -> String {
    match roster.map(|roster| roster.player(id)) {
        Some(Ok(player)) => match &player.number {
            Some(number) => format!("{} #{number}", last_name(&player.name)),
            None => last_name(&player.name).to_owned(),
        },
        _ => id.to_string(),
    }
}

impl Display for Scoreboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { home, away, state, batter, pitcher } = self;
        let name_width = usize::max(home.chars().count(), away.chars().count());
        let batting = state.batting_side();
        let (away_bold, home_bold) = if batting == Side::Away { ("**", "") } else { ("", "**") };

        writeln!(f, "### __Scoreboard__")?;
        writeln!(f, "`{away: <name_width$}` {away_bold}{away_score}{away_bold}", away_score = state.away_score)?;
        writeln!(f, "`{home: <name_width$}` {home_bold}{home_score}{home_bold}", home_score = state.home_score)?;
        writeln!(
            f,
            "{half} **{inning}** | Count **{balls}-{strikes}** | **{outs}** out{out_suffix}",
            half = if state.is_bottom { "Bot" } else { "Top" },
            inning = nth(state.inning as usize),
            balls = state.balls,
            strikes = state.strikes,
            outs = state.outs,
            out_suffix = if state.outs == 1 { "" } else { "s" },
        )?;
        let (batting_team, fielding_team) = if batting == Side::Home { (home, away) } else { (away, home) };
        write!(f, "Batting: {batting_team} | Fielding: {fielding_team}")?;
        if batter.is_some() || pitcher.is_some() {
            write!(
                f,
                "\nAt Bat: {batter} | Pitching: {pitcher}",
                batter = batter.as_deref().unwrap_or("-"),
                pitcher = pitcher.as_deref().unwrap_or("-"),
            )?;
        }

        Ok(())
    }
}
