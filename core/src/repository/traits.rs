use crate::model::task::Task;
use anyhow::Result;

pub trait TaskRepository {
    /// Appends to the end; insertion order is the listing order.
    fn create(&mut self, task: Task) -> Result<Task>;
    fn list(&self) -> Result<Vec<Task>>;
    /// First task in insertion order whose title matches exactly.
    fn find_by_title(&self, title: &str) -> Result<Option<Task>>;
    fn update(&mut self, task: &Task) -> Result<()>;
}
