//! The live count, outs, inning and score of a single game.
//!
//! Every change goes through [`apply`], a total function of the current
//! state and one [`Event`]. Callers keep the returned state as their copy of
//! the game; nothing in here holds state between calls.

use std::fmt::{Display, Formatter};

pub use notification::{Notification, Tone};

pub mod notification;

/// Balls that end an at-bat when one more is thrown.
pub const WALK_BALLS: u8 = 3;
/// Strikes that end an at-bat when one more is thrown.
pub const STRIKEOUT_STRIKES: u8 = 2;
/// Outs that end a half-inning when one more is recorded.
pub const RETIRING_OUTS: u8 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub home_score: u32,
    pub away_score: u32,
    pub inning: u32,
    pub is_bottom: bool,
    pub balls: u8,
    pub strikes: u8,
    pub outs: u8,
}

impl GameState {
    pub const fn new() -> Self {
        Self {
            home_score: 0,
            away_score: 0,
            inning: 1,
            is_bottom: false,
            balls: 0,
            strikes: 0,
            outs: 0,
        }
    }

    /// The side currently at the plate.
    pub fn batting_side(&self) -> Side {
        if self.is_bottom { Side::Home } else { Side::Away }
    }

    pub fn fielding_side(&self) -> Side {
        self.batting_side().opposite()
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    fn clear_count(&mut self) {
        self.balls = 0;
        self.strikes = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match *self {
            Self::Home => "home",
            Self::Away => "away",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    Ball,
    Strike,
    Hit,
    Out,
    Run,
    AdvanceInning,
    NewGame,
}

impl Event {
    pub const ALL: [Self; 7] = [
        Self::Ball,
        Self::Strike,
        Self::Hit,
        Self::Out,
        Self::Run,
        Self::AdvanceInning,
        Self::NewGame,
    ];
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match *self {
            Self::Ball => "Ball",
            Self::Strike => "Strike",
            Self::Hit => "Hit",
            Self::Out => "Out",
            Self::Run => "Run",
            Self::AdvanceInning => "Advance Inning",
            Self::NewGame => "New Game",
        })
    }
}

/// The state after an event and what the event did, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub notifications: Vec<Notification>,
}

pub fn apply(state: &GameState, event: Event) -> Transition {
    let mut next = *state;
    let mut notifications = Vec::with_capacity(2);

    match event {
        Event::Ball => {
            if next.balls == WALK_BALLS {
                next.clear_count();
                notifications.push(Notification::Walk);
            } else {
                next.balls += 1;
                notifications.push(Notification::Ball { balls: next.balls });
            }
        }
        Event::Strike => {
            if next.strikes == STRIKEOUT_STRIKES {
                next.clear_count();
                notifications.push(Notification::Strikeout);
                // a strikeout is always an out, no dropped third strike
                record_out(&mut next, &mut notifications);
            } else {
                next.strikes += 1;
                notifications.push(Notification::Strike { strikes: next.strikes });
            }
        }
        Event::Hit => {
            next.clear_count();
            notifications.push(Notification::Hit);
        }
        Event::Out => record_out(&mut next, &mut notifications),
        Event::Run => {
            let side = next.batting_side();
            match side {
                Side::Home => next.home_score = next.home_score.saturating_add(1),
                Side::Away => next.away_score = next.away_score.saturating_add(1),
            }
            notifications.push(Notification::Run { side });
        }
        Event::AdvanceInning => {
            turn_half_inning(&mut next);
            next.outs = 0;
            next.clear_count();
            notifications.push(Notification::InningAdvanced {
                inning: next.inning,
                is_bottom: next.is_bottom,
            });
        }
        Event::NewGame => {
            next = GameState::new();
            notifications.push(Notification::NewGame);
        }
    }

    Transition { state: next, notifications }
}

fn record_out(state: &mut GameState, notifications: &mut Vec<Notification>) {
    if state.outs == RETIRING_OUTS {
        state.outs = 0;
        let was_bottom = state.is_bottom;
        turn_half_inning(state);
        notifications.push(if was_bottom {
            Notification::InningOver
        } else {
            Notification::HalfInningOver
        });
    } else {
        state.outs += 1;
        notifications.push(Notification::Out { outs: state.outs });
    }
}

fn turn_half_inning(state: &mut GameState) {
    if state.is_bottom {
        state.inning = state.inning.saturating_add(1);
        state.is_bottom = false;
    } else {
        state.is_bottom = true;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn run(state: GameState, events: &[Event]) -> (GameState, Vec<Notification>) {
        events.iter().fold((state, Vec::new()), |(state, mut all), &event| {
            let transition = apply(&state, event);
            all.extend(transition.notifications);
            (transition.state, all)
        })
    }

    #[test]
    fn initial_state_is_top_of_first_with_empty_count() {
        let state = GameState::default();
        assert_eq!(state, GameState {
            home_score: 0,
            away_score: 0,
            inning: 1,
            is_bottom: false,
            balls: 0,
            strikes: 0,
            outs: 0,
        });
        assert_eq!(state.batting_side(), Side::Away);
    }

    #[test]
    fn four_balls_walk_the_batter_once() {
        let (state, notifications) = run(GameState::new(), &[Event::Ball; 4]);
        assert_eq!((state.balls, state.strikes), (0, 0));
        assert_eq!(notifications.iter().filter(|n| **n == Notification::Walk).count(), 1);
        assert_eq!(notifications.last(), Some(&Notification::Walk));
    }

    #[test]
    fn walk_clears_strikes_too() {
        let (state, _) = run(GameState::new(), &[Event::Strike, Event::Strike, Event::Ball, Event::Ball, Event::Ball, Event::Ball]);
        assert_eq!((state.balls, state.strikes, state.outs), (0, 0, 0));
    }

    #[test]
    fn three_strikes_record_an_out() {
        let (state, notifications) = run(GameState::new(), &[Event::Strike; 3]);
        assert_eq!((state.balls, state.strikes, state.outs), (0, 0, 1));
        assert_eq!(notifications[2..], [Notification::Strikeout, Notification::Out { outs: 1 }]);
    }

    #[test]
    fn strikeout_with_two_outs_ends_the_half_inning() {
        let state = GameState { outs: 2, strikes: 2, balls: 1, ..GameState::new() };
        let transition = apply(&state, Event::Strike);
        assert_eq!(transition.state, GameState { is_bottom: true, ..GameState::new() });
        assert_eq!(transition.notifications, [Notification::Strikeout, Notification::HalfInningOver]);
    }

    #[test]
    fn strikeout_with_two_outs_in_the_bottom_ends_the_inning() {
        let state = GameState { outs: 2, strikes: 2, is_bottom: true, inning: 4, ..GameState::new() };
        let transition = apply(&state, Event::Strike);
        assert_eq!((transition.state.inning, transition.state.is_bottom, transition.state.outs), (5, false, 0));
        assert_eq!(transition.notifications, [Notification::Strikeout, Notification::InningOver]);
    }

    #[test]
    fn three_outs_in_the_top_go_to_the_bottom() {
        let (state, notifications) = run(GameState::new(), &[Event::Out; 3]);
        assert_eq!((state.outs, state.is_bottom, state.inning), (0, true, 1));
        assert_eq!(notifications.last(), Some(&Notification::HalfInningOver));
    }

    #[test]
    fn three_outs_in_the_bottom_start_the_next_inning() {
        let start = GameState { is_bottom: true, inning: 3, ..GameState::new() };
        let (state, notifications) = run(start, &[Event::Out; 3]);
        assert_eq!((state.outs, state.is_bottom, state.inning), (0, false, 4));
        assert_eq!(notifications.last(), Some(&Notification::InningOver));
    }

    #[test]
    fn outs_keep_the_count() {
        let state = GameState { balls: 2, strikes: 1, ..GameState::new() };
        let next = apply(&state, Event::Out).state;
        assert_eq!((next.balls, next.strikes, next.outs), (2, 1, 1));
    }

    #[test]
    fn hit_clears_the_count_only() {
        let state = GameState { balls: 3, strikes: 2, outs: 1, ..GameState::new() };
        let transition = apply(&state, Event::Hit);
        assert_eq!(transition.state, GameState { outs: 1, ..GameState::new() });
        assert_eq!(transition.notifications, [Notification::Hit]);
    }

    #[test]
    fn runs_go_to_the_batting_side() {
        let top = apply(&GameState { home_score: 2, away_score: 5, ..GameState::new() }, Event::Run);
        assert_eq!((top.state.away_score, top.state.home_score), (6, 2));
        assert_eq!(top.notifications, [Notification::Run { side: Side::Away }]);

        let bottom = apply(&GameState { is_bottom: true, home_score: 2, away_score: 5, ..GameState::new() }, Event::Run);
        assert_eq!((bottom.state.away_score, bottom.state.home_score), (5, 3));
        assert_eq!(bottom.notifications, [Notification::Run { side: Side::Home }]);
    }

    #[test]
    fn runs_leave_count_and_outs_alone() {
        let state = GameState { balls: 1, strikes: 2, outs: 2, ..GameState::new() };
        let next = apply(&state, Event::Run).state;
        assert_eq!((next.balls, next.strikes, next.outs), (1, 2, 2));
    }

    #[test]
    fn advancing_the_inning_resets_count_and_outs() {
        let state = GameState { balls: 2, strikes: 1, outs: 2, ..GameState::new() };
        let top = apply(&state, Event::AdvanceInning);
        assert_eq!(top.state, GameState { is_bottom: true, ..GameState::new() });
        assert_eq!(top.notifications, [Notification::InningAdvanced { inning: 1, is_bottom: true }]);

        let bottom = apply(&top.state, Event::AdvanceInning);
        assert_eq!((bottom.state.inning, bottom.state.is_bottom), (2, false));
        assert_eq!(bottom.notifications, [Notification::InningAdvanced { inning: 2, is_bottom: false }]);
    }

    #[test]
    fn new_game_returns_the_initial_state() {
        let state = GameState {
            home_score: 7,
            away_score: 3,
            inning: 9,
            is_bottom: true,
            balls: 3,
            strikes: 2,
            outs: 2,
        };
        let transition = apply(&state, Event::NewGame);
        assert_eq!(transition.state, GameState::new());
        assert_eq!(transition.notifications, [Notification::NewGame]);
    }

    #[test]
    fn every_event_reports_something() {
        for event in Event::ALL {
            assert!(!apply(&GameState::new(), event).notifications.is_empty(), "{event} was silent");
        }
    }

    #[test]
    fn reachable_states_never_rest_at_a_limit() {
        // explores everything reachable within a few innings
        let mut seen = HashSet::new();
        let mut frontier = vec![GameState::new()];
        while let Some(state) = frontier.pop() {
            if state.inning > 3 || state.home_score > 2 || state.away_score > 2 || !seen.insert(state) {
                continue;
            }
            for event in Event::ALL {
                let next = apply(&state, event).state;
                assert!(next.balls <= WALK_BALLS, "{state:?} + {event} -> {next:?}");
                assert!(next.strikes <= STRIKEOUT_STRIKES, "{state:?} + {event} -> {next:?}");
                assert!(next.outs <= RETIRING_OUTS, "{state:?} + {event} -> {next:?}");
                assert!(next.inning >= state.inning || event == Event::NewGame);
                frontier.push(next);
            }
        }
        assert!(seen.len() > 1000);
    }
}
