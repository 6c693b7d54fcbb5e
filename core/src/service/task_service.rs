use crate::error::{Result, TaskError};
use crate::input::{parse_args, ParsedInput, QUICK_ADD_ALIASES, QUICK_ADD_KEYS};
use crate::model::task::{Priority, Task};
use crate::repository::TaskRepository;
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionOutcome {
    Completed(Task),
    NotFound,
}

impl CompletionOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, CompletionOutcome::Completed(_))
    }
}

/// Owns the store and is its only mutator. Single caller at a time; wrap in a
/// mutex before sharing across threads.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn add(&mut self, task: Task) -> Result<Task> {
        debug!(id = %task.id, title = %task.title, "adding task");
        Ok(self.repo.create(task)?)
    }

    pub fn add_task(&mut self, title: String, description: String, due_date: &str) -> Result<Task> {
        let task = Task::new(title, description, due_date).inspect_err(|e| warn!("rejected task: {}", e))?;
        self.add(task)
    }

    pub fn add_priority_task(
        &mut self,
        title: String,
        description: String,
        due_date: &str,
        priority: Priority,
    ) -> Result<Task> {
        let task = Task::with_priority(title, description, due_date, priority)
            .inspect_err(|e| warn!("rejected priority task: {}", e))?;
        self.add(task)
    }

    /// Adds from a single line such as `Pay rent due:2025-02-01 pri:h desc:online`.
    pub fn quick_add(&mut self, line: &str) -> Result<Task> {
        let args: Vec<String> = line.split_whitespace().map(|s| s.to_string()).collect();
        let ParsedInput { name, metadata, ambiguous } = parse_args(&args, QUICK_ADD_KEYS, QUICK_ADD_ALIASES);

        if let Some(token) = ambiguous.into_iter().next() {
            return Err(TaskError::AmbiguousKey(token));
        }
        if name.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let due = metadata.get("due").ok_or(TaskError::MissingDueDate)?;
        let description = metadata.get("description").cloned().unwrap_or_default();

        match metadata.get("priority") {
            Some(p) => {
                let priority = p.parse::<Priority>()?;
                self.add_priority_task(name, description, due, priority)
            }
            None => self.add_task(name, description, due),
        }
    }

    pub fn list_all(&self) -> Result<Vec<Task>> {
        let tasks = self.repo.list()?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks)
    }

    pub fn list_overdue(&self, now: NaiveDateTime) -> Result<Vec<Task>> {
        let overdue: Vec<Task> = self
            .repo
            .list()?
            .into_iter()
            .filter(|t| t.is_overdue(now))
            .collect();
        debug!(count = overdue.len(), %now, "listed overdue tasks");
        Ok(overdue)
    }

    pub fn complete_by_title(&mut self, title: &str) -> Result<CompletionOutcome> {
        let Some(mut task) = self.repo.find_by_title(title)? else {
            warn!(title, "no task with that title");
            return Ok(CompletionOutcome::NotFound);
        };
        task.mark_complete();
        self.repo.update(&task)?;
        info!(id = %task.id, title, "task completed");
        Ok(CompletionOutcome::Completed(task))
    }
}
