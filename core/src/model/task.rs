use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TaskError};
use crate::time::{format_due_date, parse_due_date, start_of_day};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(s)
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "h" | "high" => Ok(Priority::High),
            "m" | "med" | "medium" => Ok(Priority::Medium),
            "l" | "low" => Ok(Priority::Low),
            _ => Err(TaskError::InvalidPriority(s.to_string())),
        }
    }
}

/// Plain tasks and priority tasks share every field except the tier.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", content = "priority", rename_all = "snake_case")]
pub enum TaskKind {
    Plain,
    Prioritized(Priority),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    // Only `mark_complete` writes this, and only ever to true.
    completed: bool,
    pub kind: TaskKind,
}

impl Task {
    pub fn new(title: String, description: String, due_date: &str) -> Result<Self> {
        let due_date = parse_due_date(due_date)?;
        Ok(Self::from_parts(title, description, due_date, TaskKind::Plain))
    }

    pub fn with_priority(
        title: String,
        description: String,
        due_date: &str,
        priority: Priority,
    ) -> Result<Self> {
        let due_date = parse_due_date(due_date)?;
        Ok(Self::from_parts(
            title,
            description,
            due_date,
            TaskKind::Prioritized(priority),
        ))
    }

    pub fn from_parts(title: String, description: String, due_date: NaiveDate, kind: TaskKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            due_date,
            completed: false,
            kind,
        }
    }

    pub fn priority(&self) -> Option<Priority> {
        match self.kind {
            TaskKind::Plain => None,
            TaskKind::Prioritized(p) => Some(p),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn mark_complete(&mut self) {
        self.completed = true;
    }

    /// A pending task is overdue from midnight of its due day onward, so a
    /// task due today is already overdue at 00:00:01.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.completed && now > start_of_day(self.due_date)
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "✔️ Completed"
        } else {
            "❌ Pending"
        }
    }

    pub fn render_summary(&self) -> String {
        let base = format!(
            "{} - {} | Due: {}",
            self.title,
            self.status_label(),
            format_due_date(self.due_date)
        );
        match self.priority() {
            Some(p) => format!("{} | Priority: {}", base, p),
            None => base,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_summary())
    }
}
