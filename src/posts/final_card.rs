use std::fmt::{Display, Formatter};

use crate::posts::history::PlayHistory;
use crate::scorebook::{RenderedLineScore, Scorebook};

#[derive(Clone, Debug)]
pub struct FinalCard {
    home: String,
    away: String,
    home_score: u32,
    away_score: u32,
    innings: u32,
    line_score: RenderedLineScore,
    scoring_plays: PlayHistory,
}

impl FinalCard {
    pub fn new(book: &Scorebook) -> Result<Self, std::fmt::Error> {
        let matchup = book.matchup();
        let state = book.state();
        Ok(Self {
            home: matchup.home().to_owned(),
            away: matchup.away().to_owned(),
            home_score: state.home_score,
            away_score: state.away_score,
            innings: state.inning,
            line_score: book.line_score().render(matchup.away(), matchup.home())?,
            scoring_plays: PlayHistory::scoring(book.plays()),
        })
    }
}

impl Display for FinalCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { home, away, home_score, away_score, innings, line_score, scoring_plays } = self;
        let (away_bold, home_bold) = match away_score.cmp(home_score) {
            std::cmp::Ordering::Greater => ("**", ""),
            std::cmp::Ordering::Less => ("", "**"),
            std::cmp::Ordering::Equal => ("", ""),
        };
        writeln!(f, "## Final Score")?;
        let plural = if *innings == 1 { "" } else { "s" };
        writeln!(f, "{away} {away_bold}{away_score}{away_bold}-{home_bold}{home_score}{home_bold} {home} ({innings} inning{plural})")?;
        writeln!(f, "### __Line Score__")?;
        writeln!(f, "```\n{line_score}\n```")?;
        writeln!(f, "### __Scoring Plays__")?;
        if scoring_plays.is_empty() {
            writeln!(f, "None")?;
        } else {
            writeln!(f, "{}", scoring_plays.lines().join("\n"))?;
        }
        write!(f, "> ")?;

        Ok(())
    }
}
