//! API routes for the quest log.
//!
//! Mutating endpoints answer with the operation's user-facing messages;
//! the client shows each batch once and discards it.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::{Local, NaiveDate};
use log::error;
use questlog_core::{core_version, Notice, TaskId, Tier, TrackerError, ViewState};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::server::AppState;

type AppStateArc = Arc<AppState>;
type MutationReply = (StatusCode, Json<MutationResponse>);

/// Messages produced by one mutating request.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub messages: Vec<String>,
}

// ============================================================================
// View routes
// ============================================================================

pub fn view_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

async fn index(State(state): State<AppStateArc>) -> Result<Json<ViewState>, MutationReply> {
    let mut tracker = state.tracker.lock().await;
    tracker
        .view_state(today())
        .map(Json)
        .map_err(error_response)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "version": core_version() }))
}

// ============================================================================
// Task routes
// ============================================================================

pub fn task_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/tasks", post(add_task))
        .route("/complete/daily", post(complete_daily))
        .route("/complete/one_time", post(complete_one_time))
}

#[derive(Debug, Deserialize)]
struct AddTaskForm {
    /// `daily` (default) or `one_time`.
    #[serde(default)]
    kind: String,
    /// Task text, submitted under the form field name `task`.
    #[serde(default)]
    task: String,
    /// Tier name; anything unrecognized counts as `easy`.
    #[serde(default)]
    tier: String,
}

async fn add_task(
    State(state): State<AppStateArc>,
    Form(form): Form<AddTaskForm>,
) -> MutationReply {
    let tier = Tier::parse_or_easy(&form.tier);
    let mut tracker = state.tracker.lock().await;

    let result = if form.kind == "one_time" {
        tracker.add_one_time_task(&form.task, tier, today())
    } else {
        tracker.add_daily_task(&form.task, tier, today())
    };

    match result {
        Ok(notices) => ok_response(&notices),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
struct CompleteTaskForm {
    #[serde(default)]
    task_id: String,
}

async fn complete_daily(
    State(state): State<AppStateArc>,
    Form(form): Form<CompleteTaskForm>,
) -> MutationReply {
    let Some(id) = parse_task_id(&form.task_id) else {
        return not_found_response();
    };

    let mut tracker = state.tracker.lock().await;
    match tracker.complete_daily_task(id, today()) {
        Ok(notices) => ok_response(&notices),
        Err(err) => error_response(err),
    }
}

async fn complete_one_time(
    State(state): State<AppStateArc>,
    Form(form): Form<CompleteTaskForm>,
) -> MutationReply {
    let Some(id) = parse_task_id(&form.task_id) else {
        return not_found_response();
    };

    let mut tracker = state.tracker.lock().await;
    match tracker.complete_one_time_task(id, today()) {
        Ok(notices) => ok_response(&notices),
        Err(err) => error_response(err),
    }
}

// ============================================================================
// Admin routes
// ============================================================================

pub fn admin_routes() -> Router<AppStateArc> {
    Router::new().route("/reset", post(reset_all))
}

async fn reset_all(State(state): State<AppStateArc>) -> MutationReply {
    let mut tracker = state.tracker.lock().await;
    match tracker.reset_all() {
        Ok(notices) => ok_response(&notices),
        Err(err) => error_response(err),
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// An id that does not parse can only belong to a task that does not
/// exist; treat it like any other unknown id.
fn parse_task_id(value: &str) -> Option<TaskId> {
    Uuid::parse_str(value.trim()).ok()
}

fn ok_response(notices: &[Notice]) -> MutationReply {
    (
        StatusCode::OK,
        Json(MutationResponse {
            messages: notices.iter().map(Notice::to_string).collect(),
        }),
    )
}

fn not_found_response() -> MutationReply {
    (
        StatusCode::NOT_FOUND,
        Json(MutationResponse {
            messages: vec!["Task not found.".to_string()],
        }),
    )
}

fn error_response(err: TrackerError) -> MutationReply {
    match err {
        TrackerError::EmptyTaskText => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(MutationResponse {
                messages: vec!["Please write a task before adding.".to_string()],
            }),
        ),
        TrackerError::TaskNotFound(_) => not_found_response(),
        TrackerError::Store(err) => {
            error!("event=request_failed module=web error_code=store error={err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MutationResponse {
                    messages: vec!["Saving your progress failed. Please try again.".to_string()],
                }),
            )
        }
    }
}
