// src/config/options.rs
use std::path::{Path, PathBuf};
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub data: DataOptions,
}

impl AppOptions {
    /// Defaults, with the data directory taken from the environment if set.
    pub fn from_env() -> Self {
        Self { data: DataOptions::from_env() }
    }
}

/// The report views, in menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportKind {
    CurrentSeason,
    PlayerSearch,
    MatchHistory,
    TopScorers,
    Attendance,
    HeadToHead,
    Coaches,
    Transfers,
    ResultStats,
    YouthLeague,
}

impl ReportKind {
    pub const ALL: [ReportKind; 10] = [
        ReportKind::CurrentSeason,
        ReportKind::PlayerSearch,
        ReportKind::MatchHistory,
        ReportKind::TopScorers,
        ReportKind::Attendance,
        ReportKind::HeadToHead,
        ReportKind::Coaches,
        ReportKind::Transfers,
        ReportKind::ResultStats,
        ReportKind::YouthLeague,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::CurrentSeason => "Current season",
            ReportKind::PlayerSearch  => "Player search",
            ReportKind::MatchHistory  => "Match history",
            ReportKind::TopScorers    => "Top scorers",
            ReportKind::Attendance    => "Attendance",
            ReportKind::HeadToHead    => "Head-to-head",
            ReportKind::Coaches       => "Coaches",
            ReportKind::Transfers     => "Transfers",
            ReportKind::ResultStats   => "Result statistics",
            ReportKind::YouthLeague   => "Youth league",
        }
    }

    /// Short name used on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::CurrentSeason => "season",
            ReportKind::PlayerSearch  => "players",
            ReportKind::MatchHistory  => "matches",
            ReportKind::TopScorers    => "scorers",
            ReportKind::Attendance    => "attendance",
            ReportKind::HeadToHead    => "h2h",
            ReportKind::Coaches       => "coaches",
            ReportKind::Transfers     => "transfers",
            ReportKind::ResultStats   => "results",
            ReportKind::YouthLeague   => "youth",
        }
    }

    /// CSV file backing this report. Head-to-head and result statistics
    /// are derived from the match history file.
    pub fn source_file(&self) -> &'static str {
        match self {
            ReportKind::CurrentSeason => "sezon.csv",
            ReportKind::PlayerSearch  => "zawodnicy.csv",
            ReportKind::MatchHistory
            | ReportKind::HeadToHead
            | ReportKind::ResultStats => "mecze.csv",
            ReportKind::TopScorers    => "strzelcy.csv",
            ReportKind::Attendance    => "frekwencja.csv",
            ReportKind::Coaches       => "trenerzy.csv",
            ReportKind::Transfers     => "transfery.csv",
            ReportKind::YouthLeague   => "mlodziez.csv",
        }
    }

    pub fn from_slug(s: &str) -> Option<ReportKind> {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|k| k.slug() == s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    data_dir: PathBuf,
    pub placeholder: String,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            placeholder: s!(MISSING),
        }
    }
}

impl DataOptions {
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.trim().is_empty() {
                opts.set_data_dir(dir.trim());
            }
        }
        opts
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn set_data_dir<P: Into<PathBuf>>(&mut self, dir: P) {
        self.data_dir = dir.into();
    }

    /// Full path of the CSV file behind `kind`.
    pub fn path_for(&self, kind: ReportKind) -> PathBuf {
        self.data_dir.join(kind.source_file())
    }
}
