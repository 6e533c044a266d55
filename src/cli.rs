// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    cache::LoadCache,
    config::{
        options::{AppOptions, ReportKind},
        state::GuiState },
    core::sanitize::normalize_column,
    flags::FlagTable,
    gui::{pages, router},
    table::SortOrder,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub list: bool,
    pub report: Option<ReportKind>,
    pub data_dir: Option<PathBuf>,
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub descending: bool,
}

const HELP: &str = "\
Usage:
  cli --list
  cli --report <name> [--data-dir <dir>] [--filter <text>] [--sort <column>] [--desc]

Reports: season, players, matches, scorers, attendance, h2h, coaches,
         transfers, results, youth";

pub fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args(env::args().skip(1))?;
    let Some(args) = args else {
        eprintln!("{HELP}");
        return Ok(());
    };

    if args.list {
        for kind in ReportKind::ALL {
            println!("{:<11}{} ({})", kind.slug(), kind.label(), kind.source_file());
        }
        return Ok(());
    }

    let kind = args.report.ok_or("Specify --report <name> or --list")?;
    print!("{}", render_report(&args, kind)?);
    Ok(())
}

/// Load the report's file and render it as tab-separated text.
pub fn render_report(args: &CliArgs, kind: ReportKind) -> Result<String, Box<dyn Error>> {
    let mut options = AppOptions::from_env();
    if let Some(dir) = &args.data_dir {
        options.data.set_data_dir(dir.clone());
    }

    let page = router::page_for(&kind);
    let mut gui = GuiState::default();
    if let Some(f) = &args.filter {
        if page.filter_column().is_none() {
            return Err(format!("Report '{}' has no search column", kind.slug()).into());
        }
        gui.filters.insert(kind, f.clone());
    }

    let mut cache = LoadCache::new(&options.data.placeholder);
    let ds = cache.get_or_load(&options.data.path_for(kind))?;
    let mut view = pages::render_view(page, &ds, &gui, &FlagTable::default())?;

    if let Some(name) = &args.sort {
        let col = normalize_column(name);
        let ix = view.column(&col).ok_or_else(|| format!("Unknown column: {}", col))?;
        let order = if args.descending { SortOrder::Descending } else { SortOrder::Ascending };
        view.sort_by(ix, order);
    }

    logf!("CLI: {:?} rendered ({} rows)", kind, view.nrows());
    Ok(view.to_text('\t'))
}

/// `Ok(None)` means help was requested.
pub fn parse_args<I>(args: I) -> Result<Option<CliArgs>, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--list" | "-l" => out.list = true,
            "--report" | "-r" => {
                let v = args.next().ok_or("Missing value for --report")?;
                out.report = Some(
                    ReportKind::from_slug(&v).ok_or_else(|| format!("Unknown report: {}", v))?,
                );
            }
            "--data-dir" | "-d" => {
                out.data_dir = Some(PathBuf::from(args.next().ok_or("Missing value for --data-dir")?));
            }
            "--filter" | "-f" => out.filter = Some(args.next().ok_or("Missing value for --filter")?),
            "--sort" | "-s" => out.sort = Some(args.next().ok_or("Missing value for --sort")?),
            "--desc" => out.descending = true,
            "-h" | "--help" => return Ok(None),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if out.descending && out.sort.is_none() {
        return Err("--desc needs --sort <column>".into());
    }

    Ok(Some(out))
}
