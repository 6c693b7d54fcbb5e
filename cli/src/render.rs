use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use taskmgr_core::{format_due_date, Task};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            status: task.status_label().to_string(),
            due: format_due_date(task.due_date),
            priority: task.priority().map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
            description: task.description.clone(),
        }
    }
}

/// One summary line per task, or a boxed table when `as_table` is set.
pub fn render_tasks(tasks: &[Task], as_table: bool) -> String {
    if as_table {
        let mut table = Table::new(tasks.iter().map(TaskRow::from));
        table
            .with(Style::modern())
            .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
        table.to_string()
    } else {
        tasks
            .iter()
            .map(|t| t.render_summary())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskmgr_core::Priority;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("Laundry".to_string(), "darks".to_string(), "2025-01-05").unwrap(),
            Task::with_priority("Taxes".to_string(), String::new(), "2025-04-15", Priority::High).unwrap(),
        ]
    }

    #[test]
    fn test_render_lines() {
        assert_eq!(
            render_tasks(&sample(), false),
            "Laundry - ❌ Pending | Due: 2025-01-05\nTaxes - ❌ Pending | Due: 2025-04-15 | Priority: High"
        );
        assert_eq!(render_tasks(&[], false), "");
    }

    #[test]
    fn test_render_table() {
        let out = render_tasks(&sample(), true);
        assert!(out.contains("Title"));
        assert!(out.contains("Laundry"));
        assert!(out.contains("darks"));
        assert!(out.contains("High"));
        assert!(out.contains("2025-04-15"));
    }
}
