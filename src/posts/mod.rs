use std::fmt::Display;

use anyhow::{anyhow, Result};

use crate::game::{Notification, Tone};
use crate::posts::final_card::FinalCard;
use crate::posts::history::PlayHistory;
use crate::posts::lineup::Lineup;
use crate::posts::scoreboard::Scoreboard;

pub mod final_card;
pub mod history;
pub mod lineup;
pub mod scoreboard;

#[derive(Clone, Debug)]
pub enum Post {
    Notification(Notification),
    Scoreboard(Scoreboard),
    PlayHistory(PlayHistory),
    Lineup(Lineup),
    FinalCard(FinalCard),
    Help(&'static str),
}

impl Post {
    pub fn send_with_settings(&self, stdout: bool, copy: bool) -> Result<()> {
        let text = self.to_string();

        if stdout {
            println!("{text}\n");
            let _ = std::io::Write::flush(&mut std::io::stdout())?;
        }

        if copy {
            cli_clipboard::set_contents(text).map_err(|_| anyhow!("Failed to set clipboard"))?;
        }

        Ok(())
    }

    /// Cards are worth sharing; notifications and help only matter on screen.
    pub fn is_card(&self) -> bool {
        matches!(self, Self::Scoreboard(_) | Self::PlayHistory(_) | Self::Lineup(_) | Self::FinalCard(_))
    }
}

impl Display for Post {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Notification(inner) => match inner.tone() {
                Tone::Info => write!(f, "> {inner}"),
                Tone::Success => write!(f, "> **{inner}**"),
            },
            Self::Scoreboard(inner) => write!(f, "{inner}"),
            Self::PlayHistory(inner) => write!(f, "{inner}"),
            Self::Lineup(inner) => write!(f, "{inner}"),
            Self::FinalCard(inner) => write!(f, "{inner}"),
            Self::Help(inner) => write!(f, "{inner}"),
        }
    }
}
