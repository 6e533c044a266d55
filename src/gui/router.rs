// src/gui/router.rs
use crate::config::options::ReportKind::{ self, * };
use super::pages::{ self, Page };

/// Menu order.
pub static PAGES: &[&'static dyn Page] = &[
    &pages::current_season::PAGE,
    &pages::player_search::PAGE,
    &pages::match_history::PAGE,
    &pages::top_scorers::PAGE,
    &pages::attendance::PAGE,
    &pages::head_to_head::PAGE,
    &pages::coaches::PAGE,
    &pages::transfers::PAGE,
    &pages::result_stats::PAGE,
    &pages::youth_league::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: &ReportKind) -> &'static dyn Page {
    match kind {
        CurrentSeason => &pages::current_season::PAGE,
        PlayerSearch  => &pages::player_search::PAGE,
        MatchHistory  => &pages::match_history::PAGE,
        TopScorers    => &pages::top_scorers::PAGE,
        Attendance    => &pages::attendance::PAGE,
        HeadToHead    => &pages::head_to_head::PAGE,
        Coaches       => &pages::coaches::PAGE,
        Transfers     => &pages::transfers::PAGE,
        ResultStats   => &pages::result_stats::PAGE,
        YouthLeague   => &pages::youth_league::PAGE,
    }
}

/// Position of `kind` in the menu.
pub fn index_of(kind: &ReportKind) -> Option<usize> {
    PAGES.iter().position(|p| p.kind() == *kind)
}
