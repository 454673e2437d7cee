use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use garages_client::GarageClient;
use garages_core::{name_key, normalize_garages, AppConfig, Environment, Garage, RawGarage};
use garages_page::{notices, plan_submission, GaragePage, GarageRow};

#[derive(Debug, Parser)]
#[command(name = "garages")]
#[command(about = "List and add garages through the garages API")]
struct Cli {
    /// API root, overriding `GARAGES_API_BASE_URL`.
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the garage table, one row per distinct name.
    List {
        /// Show every garage, including repeated names.
        #[arg(long)]
        all: bool,
    },
    /// Add garages from a JSON file, skipping those that already exist.
    Add {
        /// JSON array of garage records, in any of the server's field spellings.
        #[arg(long)]
        from: PathBuf,

        /// Only add garages with this name (case-insensitive). Repeatable.
        #[arg(long = "name")]
        names: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = garages_core::load_app_config()?;
    init_tracing(&config.env, &config.log_level);

    tracing::debug!(env = %config.env, config = ?config, "configuration loaded");

    let client = build_client(&config, cli.base_url.as_deref())?;
    let mut page = GaragePage::new(client);

    match cli.command {
        Commands::List { all } => {
            page.load().await;
            let state = page.state();
            if let Some(error) = &state.error_message {
                anyhow::bail!("{error}");
            }
            let rows = if all { state.all_rows() } else { state.rows() };
            print!("{}", render_table(&rows));
        }
        Commands::Add { from, names } => {
            let candidates = select_candidates(normalize_garages(&read_raw_garages(&from)?), &names);

            page.load().await;
            if let Some(error) = &page.state().error_message {
                anyhow::bail!("{error}");
            }

            page.set_selection(candidates);
            let state = page.state();
            if let Some(notice) = duplicate_notice(&state.known, &state.selected) {
                println!("{notice}");
            }
            page.submit_selection().await;

            let state = page.state();
            match (&state.success_message, &state.error_message) {
                (Some(success), _) => println!("{success}"),
                (None, Some(error)) => anyhow::bail!("{error}"),
                (None, None) => {}
            }
        }
    }

    Ok(())
}

fn init_tracing(env: &Environment, log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let decorated = decorated_logs(env);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(decorated)
        .with_target(decorated)
        .with_writer(std::io::stderr)
        .init();
}

/// Colours and module targets only in development; plain lines elsewhere.
fn decorated_logs(env: &Environment) -> bool {
    matches!(env, Environment::Development)
}

/// The "K already exist; adding M new" notice, when the selection holds
/// garages the server already has. The page reports the same split in its
/// error slot, where a successful submit clears it.
fn duplicate_notice(known: &[Garage], selected: &[Garage]) -> Option<String> {
    let plan = plan_submission(known, selected).ok()?;
    if plan.duplicates.is_empty() {
        return None;
    }
    Some(notices::some_duplicates(plan.duplicates.len(), plan.new.len()))
}

fn build_client(config: &AppConfig, base_url: Option<&str>) -> anyhow::Result<GarageClient> {
    let base_url = base_url.unwrap_or(&config.api_base_url);
    GarageClient::with_base_url(base_url, config.request_timeout_secs, &config.user_agent)
        .with_context(|| format!("failed to build API client for {base_url}"))
}

fn read_raw_garages(path: &Path) -> anyhow::Result<Vec<RawGarage>> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&body)
        .with_context(|| format!("{} is not a JSON array of garages", path.display()))
}

/// Keeps the candidates whose name matches one of `names`; all of them when
/// no names are given.
fn select_candidates(candidates: Vec<Garage>, names: &[String]) -> Vec<Garage> {
    if names.is_empty() {
        return candidates;
    }
    let wanted: Vec<String> = names.iter().map(|n| name_key(n)).collect();
    candidates
        .into_iter()
        .filter(|g| wanted.contains(&name_key(&g.name)))
        .collect()
}

fn render_table(rows: &[GarageRow]) -> String {
    const HEADERS: [&str; 4] = ["name", "city", "address", "phone"];

    let cells: Vec<[&str; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.name.as_str(),
                r.city.as_str(),
                r.address.as_str(),
                r.phone.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(HEADERS).chain(cells) {
        let padded: Vec<String> = line
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    }
    out
}
