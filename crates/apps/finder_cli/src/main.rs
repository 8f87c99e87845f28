use std::cell::RefCell;
use std::env;

use clap::Parser;
use facility::{HttpFacilityClient, SearchCategory, SearchConfig, SearchError};
use foundation::geo::LatLng;
use runtime::{Finder, FixedLocation, Notice, NoticeBus, SearchParams, SessionOutcome, run_search};
use scene::headless::{HeadlessList, HeadlessMap};
use scene::{ActionKind, EntryAction, Scene};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

#[derive(Parser, Debug)]
#[command(author, version, about = "Find nearby hospitals, pharmacies and emergency rooms")]
struct Args {
    /// general, pharmacy or emergency
    category: SearchCategory,

    /// Search origin latitude
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Search origin longitude
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,

    /// Free-text filter (general only)
    #[arg(long)]
    keyword: Option<String>,

    /// Radius in kilometres (general and pharmacy)
    #[arg(long)]
    radius: Option<f64>,

    /// Backend base URL (default: $FINDER_API_BASE or http://127.0.0.1:5000)
    #[arg(long)]
    api_base: Option<String>,

    /// Select the entry at this index after the search
    #[arg(long)]
    select: Option<usize>,

    /// Print the records as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid api base {0:?}: {1}")]
    ApiBase(String, url::ParseError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("no entry at index {0}")]
    NoSuchEntry(usize),
    #[error("encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

type CliFinder = Finder<HeadlessMap, HeadlessList, NoticeBus>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main(Args::parse()).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn real_main(args: Args) -> Result<(), CliError> {
    let api_base = args.api_base.clone().unwrap_or_else(|| {
        env::var("FINDER_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
    });
    let base = Url::parse(&api_base).map_err(|e| CliError::ApiBase(api_base.clone(), e))?;
    let config = SearchConfig::from_env();
    let origin = LatLng::new(args.lat, args.lng);
    info!(%base, category = %args.category, %origin, "searching");

    let finder = RefCell::new(Finder::new(
        HeadlessMap::new(),
        HeadlessList::new(),
        NoticeBus::new(),
        config,
    ));
    finder.borrow_mut().show_initial_view();

    let outcome = run_search(
        &finder,
        &FixedLocation::at(origin),
        &HttpFacilityClient::new(base),
        params(&args),
    )
    .await;
    let mut finder = finder.into_inner();

    for line in notice_lines(finder.notifier().notices()) {
        eprintln!("{line}");
    }
    match outcome {
        SessionOutcome::Rebuilt { .. } => {}
        SessionOutcome::Failed(err) => return Err(err.into()),
        SessionOutcome::Superseded { .. } => return Ok(()),
    }

    if args.json {
        let records: Vec<_> = finder.scene().results().records().collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for line in table(finder.scene(), origin) {
            println!("{line}");
        }
    }

    if let Some(index) = args.select {
        select(&mut finder, index)?;
    }
    Ok(())
}

fn params(args: &Args) -> SearchParams {
    let mut params = SearchParams::new(args.category);
    if let Some(keyword) = &args.keyword {
        params = params.with_keyword(keyword.clone());
    }
    if let Some(radius) = args.radius {
        params = params.with_radius_km(radius);
    }
    params
}

fn select(finder: &mut CliFinder, index: usize) -> Result<(), CliError> {
    let key = finder
        .scene()
        .results()
        .key_at(index)
        .ok_or(CliError::NoSuchEntry(index))?;
    if !finder.select(key) {
        return Err(CliError::NoSuchEntry(index));
    }
    if let Some(entry) = finder.scene().results().get(key) {
        println!();
        println!("selected #{index}: {}", entry.record.name);
    }
    if let Some(EntryAction::Detail { query, .. }) = finder.activate(key, ActionKind::Detail) {
        println!("  detail: {}", query.resolve(None));
    }
    if let Some(EntryAction::Call { href, .. }) = finder.activate(key, ActionKind::Call) {
        println!("  call:   {href}");
    }
    Ok(())
}

fn notice_lines(notices: &[Notice]) -> Vec<String> {
    notices
        .iter()
        .filter_map(|notice| match notice {
            Notice::Alert(text) => Some(format!("! {text}")),
            Notice::Success(toast) => Some(format!("✔ {} {}", toast.title, toast.text)),
            Notice::Status(text) if !text.is_empty() => Some(format!("… {text}")),
            _ => None,
        })
        .collect()
}

/// One header line plus one line per entry, in result order.
fn table(scene: &Scene<HeadlessMap, HeadlessList>, origin: LatLng) -> Vec<String> {
    let mut lines = vec![format!(
        "{:>3}  {:<28} {:>8} {:>8}  {:<14} {:<16} {}",
        "#", "name", "reported", "computed", "status", "phone", "address"
    )];
    for item in scene.list().items() {
        let entry = &item.entry;
        let computed = scene
            .results()
            .get(entry.key)
            .map(|e| format!("{:.2}km", origin.distance_km(e.record.position())))
            .unwrap_or_default();
        let status = entry
            .availability
            .as_ref()
            .map(|a| a.label.clone())
            .or_else(|| entry.open_status.clone())
            .unwrap_or_default();
        lines.push(format!(
            "{:>3}  {:<28} {:>8} {:>8}  {:<14} {:<16} {}",
            entry.key.index(),
            format!("{} {}", entry.icon, entry.name),
            entry.distance_label,
            computed,
            status,
            entry.phone,
            entry.address
        ));
    }
    lines
}
