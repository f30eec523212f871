//! Culinaria expense reporter
//!
//! Reads an exported snapshot (JSON) from a file or stdin, computes the
//! expense and event budget reports, and writes them to stdout.

mod render;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use culinaria_core::budget::EventBudgetService;
use culinaria_core::expense::{
    ExpenseSnapshot, ReportCache, Severity, check_integrity, ensure_consistent,
};
use culinaria_shared::config::{LoggingConfig, OutputFormat};
use culinaria_shared::{AppConfig, AppError};

use render::ReportView;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load();
    let logging = config
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    let result = config
        .map_err(AppError::from)
        .context("Failed to load configuration")
        .and_then(|config| run(&config));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<AppError>()
                .map_or(1, AppError::exit_code);
            error!(exit_code = code, "Report failed: {err:#}");
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter.as_str()));

    let json = logging.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
    });
    let plain = (!logging.json).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(plain)
        .init();
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let input = read_input(path.as_deref())?;

    let snapshot = ExpenseSnapshot::from_json(&input)
        .map_err(|err| AppError::Validation(err.to_string()))
        .context("Failed to parse snapshot")?;
    info!(
        orders = snapshot.orders.len(),
        items = snapshot.order_items.len(),
        teachers = snapshot.teachers.len(),
        events = snapshot.events.len(),
        "Snapshot loaded"
    );

    let issues = check_integrity(&snapshot.dataset());
    for issue in &issues {
        match issue.severity() {
            Severity::Warning => warn!("{issue}"),
            Severity::Info => debug!("{issue}"),
        }
    }
    if config.report.strict {
        ensure_consistent(&issues)
            .map_err(|err| AppError::Integrity(err.to_string()))
            .context("Strict mode rejected the snapshot")?;
    }

    for event in &snapshot.events {
        if let Err(err) = EventBudgetService::validate_event_budget(event) {
            if config.report.strict {
                return Err(AppError::Validation(err.to_string()).into());
            }
            warn!(event_id = %event.id, "{err}");
        }
    }

    let cache = ReportCache::with_config(config.cache.max_capacity, config.cache.ttl_secs);
    let cached = cache.compute_cached(&snapshot.dataset());
    debug!(
        fingerprint = %cached.fingerprint,
        cached = cached.cached,
        "Expense report ready"
    );

    let events = EventBudgetService::budget_vs_actual(
        &snapshot.events,
        &snapshot.orders,
        &snapshot.order_items,
        &snapshot.products,
    );
    info!(
        total_expense = %cached.report.total_expense,
        total_revenue = %cached.report.total_revenue,
        over_budget_events = events.over_budget().count(),
        "Reports computed"
    );

    let view = ReportView {
        snapshot: &snapshot,
        cached: &cached,
        events: &events,
        issues: &issues,
    };

    let mut out = io::stdout().lock();
    let written = match config.report.output {
        OutputFormat::Json => render::write_json(&mut out, &view),
        OutputFormat::Text => render::write_text(&mut out, &view, config.report.currency),
    };
    written
        .map_err(AppError::from)
        .context("Failed to write report")?;

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = path {
        return std::fs::read_to_string(path)
            .map_err(AppError::from)
            .with_context(|| format!("Failed to read snapshot {}", path.display()));
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .map_err(AppError::from)
        .context("Failed to read snapshot from stdin")?;
    Ok(input)
}
