use std::{fmt::Display, str::FromStr};

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

/// Appended to a task's description once it is marked complete.
pub(crate) const COMPLETED_SUFFIX: &str = " (completed)";

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub(crate) enum Priority {
    #[serde(alias = "high")]
    High,
    #[default]
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "low")]
    Low,
}

impl Priority {
    pub(crate) const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Sort key, lower sorts first.
    pub(crate) fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }

    /// The next value in selector order, wrapping around.
    pub(crate) fn next(self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::High,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Priority::High => Priority::Low,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        })
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.to_string().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

/// Opaque handle to a stored task. Handed out by the store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct TaskId(pub(crate) u64);

impl Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TSK-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Task {
    pub(crate) description: String,
    pub(crate) added_on: NaiveDate,
    pub(crate) due_date: NaiveDate,
    pub(crate) due_time: NaiveTime,
    pub(crate) priority: Priority,
}

impl Task {
    pub(crate) fn is_completed(&self) -> bool {
        self.description.ends_with(COMPLETED_SUFFIX)
    }

    /// Returns `false` when the task was already complete and nothing changed.
    pub(crate) fn mark_complete(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        self.description.push_str(COMPLETED_SUFFIX);
        true
    }
}
