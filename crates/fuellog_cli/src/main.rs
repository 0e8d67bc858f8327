//! Command-line front end for the fuel log.
//!
//! # Responsibility
//! - Map each form submit, tab click and status display onto a subcommand.
//! - Keep all validation and persistence inside `fuellog_core`.

use clap::{Parser, Subcommand};
use fuellog_core::db::open_db;
use fuellog_core::{
    init_logging, AppConfig, AppContext, ConnectionState, CostEntry, DisabledSyncBackend,
    FuelEntry, HttpSyncBackend, Section, SqliteKeyValueStore, SyncBackend,
};
use log::warn;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "fuellog", version, about = "Log vehicle fuel fill-ups and costs")]
struct Cli {
    /// Local store file (overrides FUELLOG_DB_PATH).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Sync backend endpoint to probe (overrides FUELLOG_SYNC_URL).
    #[arg(long, global = true)]
    sync_url: Option<String>,

    /// Probe timeout in milliseconds (overrides FUELLOG_SYNC_TIMEOUT_MS).
    #[arg(long, global = true)]
    sync_timeout_ms: Option<u64>,

    /// Log level (overrides FUELLOG_LOG_LEVEL).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute log directory (overrides FUELLOG_LOG_DIR).
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Record a fuel fill-up.
    Fuel {
        /// Defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// Odometer reading at the start.
        #[arg(long, allow_hyphen_values = true)]
        start: String,
        /// Odometer reading at fill-up.
        #[arg(long, allow_hyphen_values = true)]
        end: String,
        /// Fuel volume.
        #[arg(long, allow_hyphen_values = true)]
        fuel: String,
        #[arg(long, allow_hyphen_values = true)]
        cost: String,
    },
    /// Record a miscellaneous cost.
    Cost {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        item: String,
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
    },
    /// Show one section by its tab id (fuelSection, costSection, summarySection).
    Show {
        #[arg(default_value = "fuelSection")]
        tab: String,
    },
    /// Probe the sync backend and print the status indicator.
    Status,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let probe = tokio::spawn(probe_backend(config.sync_url.clone(), config.sync_timeout));

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("cannot open store `{}`: {err}", config.db_path.display());
            return ExitCode::FAILURE;
        }
    };
    let mut app = AppContext::bootstrap(SqliteKeyValueStore::new(conn));

    let outcome = run_command(&mut app, cli.command);

    let state = probe.await.unwrap_or_else(|err| {
        warn!("event=sync_connect module=cli status=error error={err}");
        ConnectionState::Offline
    });
    app.apply_connection_state(state);
    println!("sync: {}", app.sync_indicator());

    outcome
}

fn resolve_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(db) = cli.db.clone() {
        config.db_path = db;
    }
    if let Some(url) = cli.sync_url.clone() {
        config.sync_url = Some(url);
    }
    if let Some(ms) = cli.sync_timeout_ms.filter(|ms| *ms > 0) {
        config.sync_timeout = Duration::from_millis(ms);
    }
    if let Some(level) = cli.log_level.clone() {
        config.log_level = level;
    }
    if let Some(dir) = cli.log_dir.clone() {
        config.log_dir = Some(dir);
    }
    config
}

async fn probe_backend(url: Option<String>, timeout: Duration) -> ConnectionState {
    match url {
        Some(url) => HttpSyncBackend::new(url, timeout).connect().await,
        None => DisabledSyncBackend.connect().await,
    }
}

fn run_command(app: &mut AppContext<SqliteKeyValueStore>, command: Command) -> ExitCode {
    let submitted = match command {
        Command::Fuel {
            date,
            start,
            end,
            fuel,
            cost,
        } => {
            let form = app.fuel_form_mut();
            if let Some(date) = date {
                form.date = date;
            }
            form.meter_start = start;
            form.meter_end = end;
            form.fuel = fuel;
            form.cost = cost;
            app.submit_fuel()
        }
        Command::Cost { date, item, amount } => {
            let form = app.cost_form_mut();
            if let Some(date) = date {
                form.date = date;
            }
            form.item = item;
            form.amount = amount;
            app.submit_cost()
        }
        Command::Show { tab } => {
            return match app.select_tab(&tab) {
                Ok(section) => {
                    render_section(app, section);
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::FAILURE
                }
            };
        }
        Command::Status => return ExitCode::SUCCESS,
    };

    match submitted {
        Ok(committed) => {
            println!("{} ({} total)", committed.notice, committed.count);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn render_section(app: &AppContext<SqliteKeyValueStore>, section: Section) {
    let tabs = Section::ALL
        .iter()
        .map(|candidate| {
            if app.tabs().is_tab_active(*candidate) {
                format!("[{}]", candidate.title())
            } else {
                format!(" {} ", candidate.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!("{tabs}\n");

    match section {
        Section::Fuel => render_fuel(app.fuel_records()),
        Section::Cost => render_costs(app.cost_records()),
        Section::Summary => println!(
            "{} fuel entries, {} cost entries",
            app.fuel_records().len(),
            app.cost_records().len()
        ),
    }
}

fn render_fuel(records: &[FuelEntry]) {
    if records.is_empty() {
        println!("No fuel entries.");
        return;
    }
    println!(
        "{:<12} {:>10} {:>10} {:>9} {:>8} {:>8}",
        "date", "start", "end", "distance", "fuel", "cost"
    );
    for entry in records {
        println!(
            "{:<12} {:>10} {:>10} {:>9} {:>8} {:>8}",
            entry.date, entry.start, entry.end, entry.distance, entry.fuel, entry.cost
        );
    }
}

fn render_costs(records: &[CostEntry]) {
    if records.is_empty() {
        println!("No cost entries.");
        return;
    }
    println!("{:<12} {:<24} {:>8}", "date", "item", "amount");
    for entry in records {
        println!("{:<12} {:<24} {:>8}", entry.date, entry.item, entry.amount);
    }
}
