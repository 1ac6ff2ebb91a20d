//! Quest log web daemon entry point.
//!
//! # Responsibility
//! - Read configuration from the environment.
//! - Load the persisted snapshot once, then serve the tracker API.

mod routes;
mod server;

use std::env;

use anyhow::{Context, Result};
use log::info;
use questlog_core::{core_version, default_log_level, init_logging, JsonSnapshotStore, TrackerService};

const DEFAULT_ADDR: &str = "127.0.0.1:7878";
const DEFAULT_DATA_FILE: &str = "data.json";

#[tokio::main]
async fn main() -> Result<()> {
    let log_level =
        env::var("QUESTLOG_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = env::var("QUESTLOG_LOG_DIR").unwrap_or_else(|_| default_log_dir());
    if let Err(err) = init_logging(&log_level, &log_dir) {
        // The tracker still works without a log file; say so and move on.
        eprintln!("questlog_web: logging disabled: {err}");
    }

    let data_file = env::var("QUESTLOG_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    let addr = env::var("QUESTLOG_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let store = JsonSnapshotStore::new(&data_file);
    let tracker = TrackerService::load(store)
        .with_context(|| format!("failed to load snapshot from `{data_file}`"))?;

    info!(
        "event=app_start module=web status=ok version={} data_file={} daily_tasks={} one_time_tasks={}",
        core_version(),
        data_file,
        tracker.snapshot().daily_tasks.len(),
        tracker.snapshot().one_time_tasks.len()
    );

    server::run(server::AppState::new(tracker), &addr).await
}

fn default_log_dir() -> String {
    env::temp_dir()
        .join("questlog")
        .join("logs")
        .to_string_lossy()
        .into_owned()
}
