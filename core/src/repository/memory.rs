use anyhow::{anyhow, Result};

use crate::model::task::Task;
use crate::repository::traits::TaskRepository;

/// Process-lifetime store. Nothing is written anywhere; dropping it drops the tasks.
#[derive(Debug, Default, Clone)]
pub struct MemoryTaskRepository {
    tasks: Vec<Task>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for MemoryTaskRepository {
    fn create(&mut self, task: Task) -> Result<Task> {
        self.tasks.push(task.clone());
        Ok(task)
    }

    fn list(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn find_by_title(&self, title: &str) -> Result<Option<Task>> {
        Ok(self.tasks.iter().find(|t| t.title == title).cloned())
    }

    fn update(&mut self, task: &Task) -> Result<()> {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == task.id) {
            self.tasks[pos] = task.clone();
            Ok(())
        } else {
            Err(anyhow!("Task with ID {} not found", task.id))
        }
    }
}
