use std::fmt::{Display, Formatter};

use crate::game::Side;

/// How loudly a notification should be shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notification {
    Ball { balls: u8 },
    Walk,
    Strike { strikes: u8 },
    Strikeout,
    Hit,
    Out { outs: u8 },
    HalfInningOver,
    InningOver,
    Run { side: Side },
    InningAdvanced { inning: u32, is_bottom: bool },
    NewGame,
}

impl Notification {
    pub fn tone(&self) -> Tone {
        match self {
            Self::Hit | Self::Run { .. } => Tone::Success,
            _ => Tone::Info,
        }
    }

    /// Whether the notification only restates the count or outs.
    pub fn is_count_only(&self) -> bool {
        matches!(self, Self::Ball { .. } | Self::Strike { .. } | Self::Out { .. })
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Ball { balls } => write!(f, "Ball {balls}"),
            Self::Walk => write!(f, "Ball 4 - Batter walks to first base"),
            Self::Strike { strikes } => write!(f, "Strike {strikes}"),
            Self::Strikeout => write!(f, "Strike 3 - Batter is out"),
            Self::Hit => write!(f, "Hit recorded"),
            Self::Out { outs } => write!(f, "{outs} out{suffix}", suffix = if outs == 1 { "" } else { "s" }),
            Self::HalfInningOver => write!(f, "End of half-inning"),
            Self::InningOver => write!(f, "End of inning"),
            Self::Run { side } => write!(f, "Run scored for the {side} team!"),
            Self::InningAdvanced { inning, is_bottom } => write!(
                f,
                "Moving to {half} of inning {inning}",
                half = if is_bottom { "bottom" } else { "top" },
            ),
            Self::NewGame => write!(f, "New game started"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(Notification::Walk.to_string(), "Ball 4 - Batter walks to first base");
        assert_eq!(Notification::Strikeout.to_string(), "Strike 3 - Batter is out");
        assert_eq!(Notification::Run { side: Side::Home }.to_string(), "Run scored for the home team!");
        assert_eq!(Notification::Run { side: Side::Away }.to_string(), "Run scored for the away team!");
        assert_eq!(Notification::InningAdvanced { inning: 2, is_bottom: false }.to_string(), "Moving to top of inning 2");
        assert_eq!(Notification::InningAdvanced { inning: 1, is_bottom: true }.to_string(), "Moving to bottom of inning 1");
        assert_eq!(Notification::Out { outs: 1 }.to_string(), "1 out");
        assert_eq!(Notification::Out { outs: 2 }.to_string(), "2 outs");
    }

    #[test]
    fn hits_and_runs_are_highlighted() {
        assert_eq!(Notification::Hit.tone(), Tone::Success);
        assert_eq!(Notification::Run { side: Side::Away }.tone(), Tone::Success);
        assert_eq!(Notification::Walk.tone(), Tone::Info);
        assert_eq!(Notification::InningOver.tone(), Tone::Info);
    }
}
