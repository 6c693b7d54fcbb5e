use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("invalid due date '{input}' (expected YYYY-MM-DD): {source}")]
    DateParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid priority '{0}' (expected High, Medium or Low)")]
    InvalidPriority(String),

    #[error("task title is required")]
    EmptyTitle,

    #[error("a due date is required (due:YYYY-MM-DD)")]
    MissingDueDate,

    #[error("ambiguous key in '{0}' (use due:, priority: or description:)")]
    AmbiguousKey(String),

    #[error(transparent)]
    Repository(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
