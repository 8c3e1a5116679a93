use std::str::FromStr;

use thiserror::Error;

use crate::game::Event;
use crate::roster::PlayerId;

pub const HELP: &str = "\
b, ball        ball
s, strike      strike
h, hit         hit, clears the count
o, out         out
r, run         run for the batting team
i, inning      skip to the next half-inning
n, new         start a new game
board          show the scoreboard
history        show the play history
lineup         show both lineups
batter <id>    select the current batter
pitcher <id>   select the current pitcher
end            show the final card
q, quit        stop keeping score";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Event(Event),
    Board,
    History,
    Lineup,
    Batter(PlayerId),
    Pitcher(PlayerId),
    End,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs a player id")]
    MissingPlayer { command: &'static str },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(first) = words.next() else { return Err(CommandError::Empty) };
        let first = first.to_ascii_lowercase();
        let argument = words.next();

        Ok(match &*first {
            "b" | "ball" => Self::Event(Event::Ball),
            "s" | "strike" => Self::Event(Event::Strike),
            "h" | "hit" => Self::Event(Event::Hit),
            "o" | "out" => Self::Event(Event::Out),
            "r" | "run" => Self::Event(Event::Run),
            "i" | "inning" => Self::Event(Event::AdvanceInning),
            "n" | "new" => Self::Event(Event::NewGame),
            "board" => Self::Board,
            "history" => Self::History,
            "lineup" => Self::Lineup,
            "batter" => Self::Batter(argument.map(PlayerId::from).ok_or(CommandError::MissingPlayer { command: "batter" })?),
            "pitcher" => Self::Pitcher(argument.map(PlayerId::from).ok_or(CommandError::MissingPlayer { command: "pitcher" })?),
            "end" => Self::End,
            "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Err(CommandError::Unknown(first)),
        })
    }
}
