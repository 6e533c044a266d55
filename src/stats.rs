// src/stats.rs
//
// Aggregates over a match list: win/draw/loss tallies and goals, overall,
// per opponent (head-to-head) or per season. Cells that don't parse as a
// score are skipped and counted in `unparsed`.
//
// Results come back as DataSets so they render through the same table view
// as loaded files.

use std::collections::HashMap;

use crate::data::{Cell, DataSet};
use crate::score::{self, Outcome, Score};

pub const TOTAL_LABEL: &str = "razem";

const SUMMARY_HEADERS: [&str; 8] = [
    "mecze", "wygrane", "remisy", "porażki", "bramki zdobyte", "bramki stracone", "bilans", "% wygranych",
];

/// Goal totals saturate at the `i64` bounds instead of overflowing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub unparsed: u32,
}

impl ResultSummary {
    pub fn add(&mut self, s: Score) {
        self.played += 1;
        self.goals_for = self.goals_for.saturating_add(s.team);
        self.goals_against = self.goals_against.saturating_add(s.opponent);
        match s.outcome() {
            Outcome::Win => self.wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Loss => self.losses += 1,
        }
    }

    pub fn add_cell(&mut self, cell: &Cell) {
        match score::parse_score(cell) {
            Some(s) => self.add(s),
            None => self.unparsed += 1,
        }
    }

    pub fn merge(&mut self, other: &ResultSummary) {
        self.played += other.played;
        self.wins += other.wins;
        self.draws += other.draws;
        self.losses += other.losses;
        self.goals_for = self.goals_for.saturating_add(other.goals_for);
        self.goals_against = self.goals_against.saturating_add(other.goals_against);
        self.unparsed += other.unparsed;
    }

    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let mut s = Self::default();
        for c in cells {
            s.add_cell(c);
        }
        s
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for.saturating_sub(self.goals_against)
    }

    /// Percentage of played matches won, one decimal place. 0 when nothing played.
    pub fn win_pct(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        (self.wins as f64 * 1000.0 / self.played as f64).round() / 10.0
    }

    fn to_cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.played as i64),
            Cell::Int(self.wins as i64),
            Cell::Int(self.draws as i64),
            Cell::Int(self.losses as i64),
            Cell::Int(self.goals_for),
            Cell::Int(self.goals_against),
            Cell::Int(self.goal_difference()),
            Cell::Float(self.win_pct()),
        ]
    }
}

/// One summary per distinct value of `key_col`, in first-seen order.
pub fn group_summaries(ds: &DataSet, key_col: usize, score_col: usize) -> Vec<(String, ResultSummary)> {
    let mut order: Vec<String> = Vec::new();
    let mut by_key: HashMap<String, ResultSummary> = HashMap::new();

    for row in &ds.rows {
        let (Some(key), Some(cell)) = (row.get(key_col), row.get(score_col)) else { continue };
        let key = key.to_string().trim().to_string();
        let entry = by_key.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            ResultSummary::default()
        });
        entry.add_cell(cell);
    }

    order
        .into_iter()
        .filter_map(|k| by_key.remove(&k).map(|s| (k, s)))
        .collect()
}

fn summary_table(key_header: &str, groups: Vec<(String, ResultSummary)>, with_total: bool) -> DataSet {
    let headers = std::iter::once(key_header)
        .chain(SUMMARY_HEADERS)
        .map(String::from)
        .collect();

    let mut total = ResultSummary::default();
    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(groups.len() + 1);
    for (key, s) in &groups {
        total.merge(s);
        let mut r = vec![Cell::from(key.as_str())];
        r.extend(s.to_cells());
        rows.push(r);
    }
    if with_total {
        let mut r = vec![Cell::from(TOTAL_LABEL)];
        r.extend(total.to_cells());
        rows.push(r);
    }
    if total.unparsed > 0 {
        logd!("Stats: {} match(es) without a readable score skipped", total.unparsed);
    }
    DataSet::new(headers, rows)
}

/// Record against each opponent, most-played first, then by name.
pub fn head_to_head(ds: &DataSet, opponent_col: usize, score_col: usize) -> DataSet {
    let mut groups = group_summaries(ds, opponent_col, score_col);
    groups.retain(|(_, s)| s.played > 0);
    groups.sort_by(|(ka, a), (kb, b)| b.played.cmp(&a.played).then_with(|| ka.cmp(kb)));
    summary_table("przeciwnik", groups, false)
}

/// Per-season tallies plus a total row; only the total without a season column.
pub fn result_statistics(ds: &DataSet, season_col: Option<usize>, score_col: usize) -> DataSet {
    match season_col {
        Some(sc) => summary_table("sezon", group_summaries(ds, sc, score_col), true),
        None => {
            let total = ResultSummary::from_cells(ds.column_cells(score_col));
            summary_table("sezon", vec![(s!(TOTAL_LABEL), total)], false)
        }
    }
}
