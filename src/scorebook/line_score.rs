use std::fmt::{Display, Formatter, Write};

use crate::util::{abbreviate, digits};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Frame {
    away: u32,
    home: Option<u32>,
}

/// Runs per inning for both sides plus run and hit totals.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineScore {
    frames: Vec<Frame>,
    away_hits: u32,
    home_hits: u32,
}

impl LineScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens every frame up to and including the given half-inning.
    pub fn reach(&mut self, inning: u32, is_bottom: bool) {
        let inning = inning.max(1) as usize;
        while self.frames.len() < inning {
            self.frames.push(Frame::default());
        }
        for (idx, frame) in self.frames.iter_mut().enumerate() {
            if (idx + 1 < inning || is_bottom) && frame.home.is_none() {
                frame.home = Some(0);
            }
        }
    }

    pub fn credit_run(&mut self, inning: u32, is_bottom: bool) {
        self.reach(inning, is_bottom);
        let frame = &mut self.frames[inning.max(1) as usize - 1];
        if is_bottom {
            frame.home = Some(frame.home.unwrap_or(0) + 1);
        } else {
            frame.away += 1;
        }
    }

    pub fn credit_hit(&mut self, is_bottom: bool) {
        if is_bottom {
            self.home_hits += 1;
        } else {
            self.away_hits += 1;
        }
    }

    pub fn innings(&self) -> usize {
        self.frames.len()
    }

    pub fn away_runs(&self) -> u32 {
        self.frames.iter().map(|frame| frame.away).sum()
    }

    pub fn home_runs(&self) -> u32 {
        self.frames.iter().filter_map(|frame| frame.home).sum()
    }

    pub fn away_hits(&self) -> u32 {
        self.away_hits
    }

    pub fn home_hits(&self) -> u32 {
        self.home_hits
    }

    pub fn render(&self, away: &str, home: &str) -> Result<RenderedLineScore, std::fmt::Error> {
        let mut header = "    ".to_owned();
        let mut away_line = format!("{abbreviation: <3} ", abbreviation = abbreviate(away));
        let mut home_line = format!("{abbreviation: <3} ", abbreviation = abbreviate(home));

        for (idx, frame) in self.frames.iter().enumerate() {
            write!(&mut header, "|{n: ^3}", n = idx + 1)?;
            write!(&mut away_line, "|{n: ^3}", n = frame.away)?;
            write!(
                &mut home_line,
                "|{n: ^3}",
                n = frame.home.map_or_else(|| "-".to_owned(), |runs| runs.to_string())
            )?;
        }
        let (away_runs, home_runs) = (self.away_runs(), self.home_runs());
        let runs_width = usize::max(digits(away_runs), digits(home_runs));
        let hits_width = usize::max(digits(self.away_hits), digits(self.home_hits));
        write!(&mut header, "|| {r: >runs_width$} | {h: >hits_width$} |", r = "R", h = "H")?;
        write!(&mut away_line, "|| {r: >runs_width$} | {h: >hits_width$} |", r = away_runs, h = self.away_hits)?;
        write!(&mut home_line, "|| {r: >runs_width$} | {h: >hits_width$} |", r = home_runs, h = self.home_hits)?;

        Ok(RenderedLineScore { header, away_line, home_line })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedLineScore {
    header: String,
    away_line: String,
    home_line: String,
}

impl Display for RenderedLineScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self { header, away_line, home_line } = self;
        writeln!(f, "{header}")?;
        writeln!(f, "{away_line}")?;
        write!(f, "{home_line}")?;

        Ok(())
    }
}
