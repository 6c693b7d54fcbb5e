pub mod error;
pub mod model;
pub mod repository;
pub mod input;
pub mod time;
pub mod service;

pub use error::TaskError;
pub use model::task::{Task, TaskKind, Priority};
pub use repository::{TaskRepository, MemoryTaskRepository};
pub use input::{parse_args, expand_key, ParsedInput, QUICK_ADD_ALIASES, QUICK_ADD_KEYS};
pub use time::{parse_due_date, start_of_day, format_due_date};
pub use service::task_service::{TaskService, CompletionOutcome};
