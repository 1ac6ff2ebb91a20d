//! Consecutive-day completion streak bookkeeping.
//!
//! # Responsibility
//! - Decide the new streak value when a completion lands on a given day.
//!
//! # Invariants
//! - Multiple completions on one day never inflate the streak.
//! - Any gap of two or more days restarts the streak at 1.
//! - A recorded completion day after `today` (clock skew) also restarts
//!   at 1.

use chrono::{Duration, NaiveDate};

/// Returns the streak value after a completion on `today`.
///
/// `last_completed` is the day any task was last completed, across both
/// task kinds; the streak is global, not per-task. The caller stamps
/// `last_completed_date = today` after consulting this.
pub fn advance_streak(streak: u32, last_completed: Option<NaiveDate>, today: NaiveDate) -> u32 {
    match last_completed {
        None => 1,
        Some(last) if last == today => streak,
        Some(last) if today - last == Duration::days(1) => streak + 1,
        Some(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::advance_streak;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn first_completion_starts_at_one() {
        assert_eq!(advance_streak(0, None, day(1)), 1);
    }

    #[test]
    fn same_day_completion_leaves_streak_unchanged() {
        assert_eq!(advance_streak(4, Some(day(10)), day(10)), 4);
    }

    #[test]
    fn next_day_completion_extends_streak() {
        assert_eq!(advance_streak(4, Some(day(10)), day(11)), 5);
    }

    #[test]
    fn gap_restarts_streak() {
        assert_eq!(advance_streak(4, Some(day(10)), day(12)), 1);
        assert_eq!(advance_streak(9, Some(day(1)), day(30)), 1);
    }

    #[test]
    fn completion_date_after_today_restarts_streak() {
        assert_eq!(advance_streak(4, Some(day(12)), day(10)), 1);
    }
}
