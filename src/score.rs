// src/score.rs
//
// Score strings ("2-1", "0:0") → tracked-team / opponent goals, and the
// win/loss/draw rule used to color result cells.
//
// The tracked team is always listed first. Every '-' is read as a
// separator, so "1-0" and "1:0" are the same score and a literal hyphen
// anywhere else in the text changes the meaning of the cell.

use eframe::egui::Color32;

use crate::data::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Score {
    pub team: i64,
    pub opponent: i64,
}

impl Score {
    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering::*;
        match self.team.cmp(&self.opponent) {
            Greater => Outcome::Win,
            Less => Outcome::Loss,
            Equal => Outcome::Draw,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// Cell background for the live table.
    pub fn color(&self) -> Color32 {
        match self {
            Outcome::Win  => Color32::from_rgb(0x2E, 0x7D, 0x32),
            Outcome::Loss => Color32::from_rgb(0xC6, 0x28, 0x28),
            Outcome::Draw => Color32::from_rgb(0xB2, 0x8A, 0x00),
        }
    }

    /// One-letter marker for text output.
    pub fn letter(&self) -> &'static str {
        match self {
            Outcome::Win  => "W",
            Outcome::Loss => "L",
            Outcome::Draw => "D",
        }
    }
}

/// Parse a cell as a score. Only text cells are eligible; anything that
/// isn't `<int>[-:]<int>` (whitespace around either side allowed) is `None`.
pub fn parse_score(cell: &Cell) -> Option<Score> {
    match cell {
        Cell::Text(s) => parse_score_str(s),
        _ => None,
    }
}

pub fn parse_score_str(s: &str) -> Option<Score> {
    let norm = s.replace('-', ":");
    let (left, right) = norm.split_once(':')?;
    let team = left.trim().parse::<i64>().ok()?;
    let opponent = right.trim().parse::<i64>().ok()?;
    Some(Score { team, opponent })
}

/// Styling directive for a result cell; `None` means "leave unstyled".
pub fn classify(cell: &Cell) -> Option<Outcome> {
    parse_score(cell).map(|s| s.outcome())
}
