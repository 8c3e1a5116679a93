//! The interactive loop: commands in, posts out.

use std::io::BufRead;

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};

use crate::command::{Command, HELP};
use crate::game::Side;
use crate::posts::final_card::FinalCard;
use crate::posts::history::PlayHistory;
use crate::posts::lineup::{Lineup, TeamLineup};
use crate::posts::scoreboard::Scoreboard;
use crate::posts::Post;
use crate::roster::{PlayerId, Roster, TeamId};
use crate::scorebook::Scorebook;

#[derive(Copy, Clone, Debug, Default)]
pub struct Settings {
    /// Copy cards the scorer asked for to the clipboard.
    pub copy: bool,
    /// Leave out notifications that only restate the count.
    pub quiet: bool,
}

/// What a command produced.
#[derive(Debug, Default)]
pub struct Reply {
    pub posts: Vec<Post>,
    /// The scorer asked for these cards, so they may be copied.
    pub requested: bool,
    pub quit: bool,
}

pub struct Session {
    book: Scorebook,
    roster: Option<Roster>,
    home_id: Option<TeamId>,
    away_id: Option<TeamId>,
    settings: Settings,
}

impl Session {
    pub fn new(book: Scorebook, roster: Option<Roster>, home_id: Option<TeamId>, away_id: Option<TeamId>, settings: Settings) -> Self {
        Self {
            book,
            roster,
            home_id,
            away_id,
            settings,
        }
    }

    pub fn book(&self) -> &Scorebook {
        &self.book
    }

    pub fn scoreboard(&self) -> Post {
        Post::Scoreboard(Scoreboard::new(&self.book, self.roster.as_ref()))
    }

    pub fn handle(&mut self, command: Command) -> Result<Reply> {
        Ok(match command {
            Command::Event(event) => {
                let notifications = self.book.record(event).to_vec();
                let mut posts = notifications
                    .into_iter()
                    .filter(|notification| !(self.settings.quiet && notification.is_count_only()))
                    .map(Post::Notification)
                    .collect::<Vec<_>>();
                posts.push(self.scoreboard());
                Reply { posts, ..Reply::default() }
            }
            Command::Board => requested(vec![self.scoreboard()]),
            Command::History => requested(vec![Post::PlayHistory(PlayHistory::new(self.book.plays()))]),
            Command::Lineup => requested(vec![Post::Lineup(self.lineup())]),
            Command::Batter(id) => {
                self.check_player(&id, self.book.state().batting_side())?;
                self.book.select_batter(id);
                Reply { posts: vec![self.scoreboard()], ..Reply::default() }
            }
            Command::Pitcher(id) => {
                self.check_player(&id, self.book.state().fielding_side())?;
                self.book.select_pitcher(id);
                Reply { posts: vec![self.scoreboard()], ..Reply::default() }
            }
            Command::End => {
                let card = FinalCard::new(&self.book).context("Could not render the final card")?;
                info!(home = self.book.state().home_score, away = self.book.state().away_score, "Game ended");
                requested(vec![Post::FinalCard(card)])
            }
            Command::Help => Reply { posts: vec![Post::Help(HELP)], ..Reply::default() },
            Command::Quit => Reply { quit: true, ..Reply::default() },
        })
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line.context("Could not read command")?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    eprintln!("{e}");
                    continue;
                }
            };
            match self.handle(command) {
                Ok(reply) => {
                    for post in &reply.posts {
                        let copy = self.settings.copy && reply.requested && post.is_card();
                        if let Err(e) = post.send_with_settings(true, copy) {
                            warn!(error = %e, "Could not send post");
                        }
                    }
                    if reply.quit {
                        break;
                    }
                }
                Err(e) => eprintln!("Error while keeping score: {e:#}"),
            }
        }
        Ok(())
    }

    fn team_id(&self, side: Side) -> Option<&TeamId> {
        match side {
            Side::Home => self.home_id.as_ref(),
            Side::Away => self.away_id.as_ref(),
        }
    }

    /// With a roster, a selected player has to exist and play for the given side.
    fn check_player(&self, id: &PlayerId, side: Side) -> Result<()> {
        let Some(roster) = &self.roster else { return Ok(()) };
        let player = roster.player(id)?;
        if let Some(team_id) = self.team_id(side) {
            if &player.team_id != team_id {
                return Err(anyhow!("{player} does not play for {team}", team = self.book.matchup().name(side)));
            }
        }
        Ok(())
    }

    fn lineup(&self) -> Lineup {
        let team = |side: Side| {
            let name = self.book.matchup().name(side);
            let players = match (&self.roster, self.team_id(side)) {
                (Some(roster), Some(id)) => roster.players_for(id),
                _ => Vec::new(),
            };
            TeamLineup::new(name, &players)
        };
        Lineup::new(team(Side::Away), team(Side::Home))
    }
}

fn requested(posts: Vec<Post>) -> Reply {
    Reply { posts, requested: true, quit: false }
}
