//! HTTP server for the quest log API.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use log::info;
use questlog_core::{JsonSnapshotStore, TrackerService};
use tokio::sync::Mutex;

use crate::routes;

/// Application state shared across handlers.
///
/// The single tracker sits behind one mutex so every request runs its
/// operation and flush exclusively, preserving the tracker's
/// single-writer model.
pub struct AppState {
    pub tracker: Mutex<TrackerService<JsonSnapshotStore>>,
}

impl AppState {
    pub fn new(tracker: TrackerService<JsonSnapshotStore>) -> Self {
        Self {
            tracker: Mutex::new(tracker),
        }
    }
}

/// Runs the HTTP server until the process is stopped.
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let state = Arc::new(state);

    let app = Router::new()
        .merge(routes::view_routes())
        .merge(routes::task_routes())
        .merge(routes::admin_routes())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("event=http_listen module=web status=ok addr={addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
