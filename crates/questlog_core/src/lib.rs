//! Core domain logic for Questlog.
//! This crate is the single source of truth for progression invariants.

pub mod logging;
pub mod model;
pub mod progression;
pub mod service;
pub mod store;
pub mod streak;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::snapshot::Snapshot;
pub use model::task::{DailyTask, OneTimeTask, TaskId, Tier};
pub use progression::{
    apply_award, rank_for_level, xp_for_completion, AwardOutcome, MAX_RANK, MIN_XP, RANKS,
    XP_PER_LEVEL,
};
pub use service::tracker_service::{
    Notice, TrackerError, TrackerResult, TrackerService, ViewState, XpPreview,
};
pub use store::{JsonSnapshotStore, SnapshotStore, StoreError, StoreResult};
pub use streak::advance_streak;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
