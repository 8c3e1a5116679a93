use std::fmt::{Display, Formatter};

use crate::game::Event;
use crate::scorebook::Play;

#[derive(Clone, Debug, Default)]
pub struct PlayHistory {
    plays: Vec<String>,
}

impl PlayHistory {
    pub fn new(plays: &[Play]) -> Self {
        Self {
            plays: plays.iter().map(Play::to_string).collect(),
        }
    }

    /// Only the plays that put a run on the board.
    pub fn scoring(plays: &[Play]) -> Self {
        Self {
            plays: plays.iter().filter(|play| play.event() == Event::Run).map(Play::to_string).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}

impl Display for PlayHistory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "### __Play History__")?;
        if self.plays.is_empty() {
            write!(f, "No plays yet")
        } else {
            write!(f, "{}", self.plays.join("\n"))
        }
    }
}
