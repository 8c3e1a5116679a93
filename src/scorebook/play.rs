use std::fmt::{Display, Formatter};

use chrono::DateTime;
use chrono_tz::Tz;

use crate::game::{Event, GameState, Notification};
use crate::util::nth;

/// One recorded event together with the situation it happened in.
#[derive(Clone, Debug, PartialEq)]
pub struct Play {
    at: DateTime<Tz>,
    inning: u32,
    is_bottom: bool,
    outs: u8,
    event: Event,
    notifications: Vec<Notification>,
}

impl Play {
    pub fn new(at: DateTime<Tz>, before: &GameState, event: Event, notifications: Vec<Notification>) -> Self {
        Self {
            at,
            inning: before.inning,
            is_bottom: before.is_bottom,
            outs: before.outs,
            event,
            notifications,
        }
    }

    pub fn at(&self) -> DateTime<Tz> {
        self.at
    }

    pub fn event(&self) -> Event {
        self.event
    }

    pub fn inning(&self) -> u32 {
        self.inning
    }

    pub fn is_bottom(&self) -> bool {
        self.is_bottom
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}

impl Display for Play {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let half = if self.is_bottom { "Bot" } else { "Top" };
        let inning = nth(self.inning as usize);
        let outs = self.outs;
        let out_suffix = if outs == 1 { "" } else { "s" };
        write!(f, "`{time}` {half} **{inning}** • {outs} out{out_suffix} | {event}:", time = self.at.format("%H:%M"), event = self.event)?;
        for notification in &self.notifications {
            write!(f, " {notification}.")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::America::Toronto;

    use super::*;

    #[test]
    fn describes_the_situation_before_the_event() {
        let at = Toronto.with_ymd_and_hms(2024, 7, 1, 19, 7, 0).unwrap();
        let before = GameState { outs: 2, strikes: 2, ..GameState::new() };
        let play = Play::new(at, &before, Event::Strike, vec![Notification::Strikeout, Notification::HalfInningOver]);
        assert_eq!(
            play.to_string(),
            "`19:07` Top **1st** • 2 outs | Strike: Strike 3 - Batter is out. End of half-inning."
        );
    }
}
