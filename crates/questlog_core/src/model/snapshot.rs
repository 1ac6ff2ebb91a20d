//! Persisted tracker snapshot.
//!
//! # Responsibility
//! - Hold the complete tracker state: task collections plus progression
//!   counters.
//! - Serve as both the in-memory working state and the persisted wire
//!   shape, so a flush can never write a partial view.
//!
//! # Invariants
//! - `xp` stays within `[0, XP_PER_LEVEL)` between operations.
//! - Dates serialize as ISO-8601 (`YYYY-MM-DD`) strings or `null`.
//! - Field layout is fixed; saving an unchanged snapshot rewrites
//!   identical bytes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::task::{DailyTask, OneTimeTask};

/// Complete tracker state, flushed wholesale after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Recurring tasks; never removed by completion.
    pub daily_tasks: Vec<DailyTask>,
    /// Pending one-time tasks; removed when completed.
    pub one_time_tasks: Vec<OneTimeTask>,
    /// XP accumulated toward the next level.
    pub xp: u32,
    /// Current level; unbounded.
    pub level: u32,
    /// Consecutive days with at least one completion.
    pub streak: u32,
    /// Last day any task was completed.
    pub last_completed_date: Option<NaiveDate>,
    /// Last day the daily reset ran. Never regresses.
    pub last_reset_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::Snapshot;

    #[test]
    fn default_snapshot_is_empty() {
        let snapshot = Snapshot::default();

        assert!(snapshot.daily_tasks.is_empty());
        assert!(snapshot.one_time_tasks.is_empty());
        assert_eq!(snapshot.xp, 0);
        assert_eq!(snapshot.level, 0);
        assert_eq!(snapshot.streak, 0);
        assert_eq!(snapshot.last_completed_date, None);
        assert_eq!(snapshot.last_reset_date, None);
    }
}
