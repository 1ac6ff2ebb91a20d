//! Tracker use-case service.
//!
//! # Responsibility
//! - Own the process-wide tracker snapshot and serialize all mutations
//!   through it.
//! - Flush the full snapshot through the gateway after every successful
//!   mutation.
//!
//! # Invariants
//! - Mutations are applied in memory first; a failed flush is reported
//!   to the caller while the in-memory state stays consistent for retry.
//! - The lazy daily reset runs before any operation that reads or
//!   mutates daily `done` flags.
//! - An award is always priced at the level in effect before it lands.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use log::{debug, info};
use serde::Serialize;

use crate::model::snapshot::Snapshot;
use crate::model::task::{DailyTask, OneTimeTask, TaskId, Tier};
use crate::progression;
use crate::store::{SnapshotStore, StoreError};
use crate::streak;

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Service error for tracker use-cases.
#[derive(Debug)]
pub enum TrackerError {
    /// Submitted task text is empty or whitespace-only.
    EmptyTaskText,
    /// No task with this id exists in the addressed collection.
    TaskNotFound(TaskId),
    /// Persistence-layer failure; the in-memory state is still valid.
    Store(StoreError),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTaskText => write!(f, "task text must not be empty"),
            Self::TaskNotFound(task_id) => write!(f, "task not found: {task_id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for TrackerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// User-facing outcome notice produced by a mutating operation.
///
/// The transport layer renders each notice exactly once and discards it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    DailyTaskAdded,
    OneTimeTaskAdded,
    XpGained { amount: u32 },
    OneTimeXpGained { amount: u32 },
    LevelUp,
    AlreadyCompletedToday,
    DataReset,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DailyTaskAdded => write!(f, "Daily task added."),
            Self::OneTimeTaskAdded => write!(f, "One-time task added."),
            Self::XpGained { amount } => write!(f, "+{amount} XP!"),
            Self::OneTimeXpGained { amount } => write!(f, "+{amount} XP! (one-time task)"),
            Self::LevelUp => write!(f, "Level up! 🎉"),
            Self::AlreadyCompletedToday => write!(f, "Already completed today."),
            Self::DataReset => write!(f, "All data reset."),
        }
    }
}

/// XP a completion would pay per tier at the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct XpPreview {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

/// Read model for the main page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub daily_tasks: Vec<DailyTask>,
    pub one_time_tasks: Vec<OneTimeTask>,
    pub xp: u32,
    pub xp_per_level: u32,
    pub level: u32,
    pub rank: &'static str,
    pub progress_percent: u32,
    pub streak: u32,
    pub xp_preview: XpPreview,
}

/// Coordinating facade over the tracker snapshot and its gateway.
pub struct TrackerService<S: SnapshotStore> {
    store: S,
    state: Snapshot,
}

impl<S: SnapshotStore> TrackerService<S> {
    /// Loads persisted state through the gateway, defaulting to the
    /// empty snapshot when no document exists yet.
    pub fn load(store: S) -> TrackerResult<Self> {
        let state = store.load()?.unwrap_or_default();
        Ok(Self { store, state })
    }

    /// Returns the current in-memory snapshot.
    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    /// Clears daily `done` flags once per new calendar day.
    ///
    /// Returns whether a reset ran. Idempotent within a day, and a
    /// `last_reset_date` in the future never regresses.
    pub fn reset_daily_if_new_day(&mut self, today: NaiveDate) -> TrackerResult<bool> {
        if matches!(self.state.last_reset_date, Some(last) if last >= today) {
            return Ok(false);
        }

        for task in &mut self.state.daily_tasks {
            task.done = false;
        }
        self.state.last_reset_date = Some(today);
        self.flush()?;

        info!(
            "event=daily_reset module=service status=ok date={today} daily_tasks={}",
            self.state.daily_tasks.len()
        );
        Ok(true)
    }

    /// Returns the read model for rendering, after the lazy daily reset.
    pub fn view_state(&mut self, today: NaiveDate) -> TrackerResult<ViewState> {
        self.reset_daily_if_new_day(today)?;

        let level = self.state.level;
        Ok(ViewState {
            daily_tasks: self.state.daily_tasks.clone(),
            one_time_tasks: self.state.one_time_tasks.clone(),
            xp: self.state.xp,
            xp_per_level: progression::XP_PER_LEVEL,
            level,
            rank: progression::rank_for_level(level),
            progress_percent: self.state.xp * 100 / progression::XP_PER_LEVEL,
            streak: self.state.streak,
            xp_preview: XpPreview {
                easy: progression::xp_for_completion(Tier::Easy, level),
                medium: progression::xp_for_completion(Tier::Medium, level),
                hard: progression::xp_for_completion(Tier::Hard, level),
            },
        })
    }

    /// Files a new recurring task.
    pub fn add_daily_task(
        &mut self,
        text: &str,
        tier: Tier,
        today: NaiveDate,
    ) -> TrackerResult<Vec<Notice>> {
        self.reset_daily_if_new_day(today)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(TrackerError::EmptyTaskText);
        }

        let task = DailyTask::new(text, tier);
        debug!(
            "event=task_added module=service kind=daily task_id={} tier={}",
            task.id,
            tier.as_str()
        );
        self.state.daily_tasks.push(task);
        self.flush()?;

        Ok(vec![Notice::DailyTaskAdded])
    }

    /// Files a new one-time task stamped with `today`.
    pub fn add_one_time_task(
        &mut self,
        text: &str,
        tier: Tier,
        today: NaiveDate,
    ) -> TrackerResult<Vec<Notice>> {
        self.reset_daily_if_new_day(today)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(TrackerError::EmptyTaskText);
        }

        let task = OneTimeTask::new(text, tier, today);
        debug!(
            "event=task_added module=service kind=one_time task_id={} tier={}",
            task.id,
            tier.as_str()
        );
        self.state.one_time_tasks.push(task);
        self.flush()?;

        Ok(vec![Notice::OneTimeTaskAdded])
    }

    /// Completes a daily task, awarding XP at most once per day.
    pub fn complete_daily_task(
        &mut self,
        id: TaskId,
        today: NaiveDate,
    ) -> TrackerResult<Vec<Notice>> {
        self.reset_daily_if_new_day(today)?;

        let Some(task) = self.state.daily_tasks.iter_mut().find(|task| task.id == id) else {
            return Err(TrackerError::TaskNotFound(id));
        };

        if task.last_completed_date == Some(today) {
            // Same-day repeat: re-checking the box is fine, paying the
            // reward twice is not.
            task.done = true;
            self.flush()?;
            return Ok(vec![Notice::AlreadyCompletedToday]);
        }

        // Price the award before it lands; the award itself may lift the
        // level.
        let amount = progression::xp_for_completion(task.tier, self.state.level);
        task.last_completed_date = Some(today);
        task.done = true;

        let leveled_up = self.award_and_record(amount, today);
        self.flush()?;

        info!(
            "event=task_completed module=service kind=daily task_id={id} xp_gained={amount} \
             level={} streak={}",
            self.state.level, self.state.streak
        );

        let mut notices = vec![Notice::XpGained { amount }];
        if leveled_up {
            notices.push(Notice::LevelUp);
        }
        Ok(notices)
    }

    /// Completes and consumes a one-time task.
    ///
    /// The award is always priced at the medium tier, whatever tier the
    /// task was filed under.
    pub fn complete_one_time_task(
        &mut self,
        id: TaskId,
        today: NaiveDate,
    ) -> TrackerResult<Vec<Notice>> {
        let Some(position) = self
            .state
            .one_time_tasks
            .iter()
            .position(|task| task.id == id)
        else {
            return Err(TrackerError::TaskNotFound(id));
        };

        let amount = progression::xp_for_completion(Tier::Medium, self.state.level);
        self.state.one_time_tasks.remove(position);

        let leveled_up = self.award_and_record(amount, today);
        self.flush()?;

        info!(
            "event=task_completed module=service kind=one_time task_id={id} xp_gained={amount} \
             level={} streak={}",
            self.state.level, self.state.streak
        );

        let mut notices = vec![Notice::OneTimeXpGained { amount }];
        if leveled_up {
            notices.push(Notice::LevelUp);
        }
        Ok(notices)
    }

    /// Wipes all tasks and progression back to the empty snapshot.
    pub fn reset_all(&mut self) -> TrackerResult<Vec<Notice>> {
        self.state = Snapshot::default();
        self.flush()?;

        info!("event=data_reset module=service status=ok");
        Ok(vec![Notice::DataReset])
    }

    /// Folds an award into the counters and advances the streak.
    fn award_and_record(&mut self, amount: u32, today: NaiveDate) -> bool {
        let outcome = progression::apply_award(self.state.xp, self.state.level, amount);
        self.state.xp = outcome.xp;
        self.state.level = outcome.level;

        self.state.streak =
            streak::advance_streak(self.state.streak, self.state.last_completed_date, today);
        self.state.last_completed_date = Some(today);

        outcome.leveled_up
    }

    fn flush(&self) -> TrackerResult<()> {
        self.store.save(&self.state)?;
        Ok(())
    }
}
