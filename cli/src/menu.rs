use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::NaiveDateTime;
use taskmgr_core::{CompletionOutcome, Priority, TaskRepository, TaskService};

use crate::render::render_tasks;

const OPTIONS: &[&str] = &[
    "1. Add Task",
    "2. Add Priority Task",
    "3. View All Tasks",
    "4. View Overdue Tasks",
    "5. Mark Task as Done",
    "6. Export Tasks as JSON",
    "7. Exit",
];

pub struct Menu<'a, R, I, W, C>
where
    R: TaskRepository,
    I: BufRead,
    W: Write,
    C: Fn() -> NaiveDateTime,
{
    service: &'a mut TaskService<R>,
    input: I,
    out: W,
    clock: C,
    table: bool,
}

impl<'a, R, I, W, C> Menu<'a, R, I, W, C>
where
    R: TaskRepository,
    I: BufRead,
    W: Write,
    C: Fn() -> NaiveDateTime,
{
    pub fn new(service: &'a mut TaskService<R>, input: I, out: W, clock: C, table: bool) -> Self {
        Self { service, input, out, clock, table }
    }

    /// Runs until the user picks Exit or input reaches EOF.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "📝 Welcome to Task Manager App 📝")?;
        loop {
            writeln!(self.out)?;
            for option in OPTIONS {
                writeln!(self.out, "{}", option)?;
            }

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let keep_going = match choice.trim() {
                "1" => self.add_task()?,
                "2" => self.add_priority_task()?,
                "3" => {
                    self.show_all()?;
                    true
                }
                "4" => {
                    self.show_overdue()?;
                    true
                }
                "5" => self.mark_done()?,
                "6" => {
                    self.export_json()?;
                    true
                }
                "7" => break,
                _ => {
                    writeln!(self.out, "❗ Invalid choice. Try again.")?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(self.out, "👋 Goodbye!")?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_common_fields(&mut self) -> Result<Option<(String, String, String)>> {
        let Some(title) = self.prompt("Title: ")? else { return Ok(None) };
        let Some(description) = self.prompt("Description: ")? else { return Ok(None) };
        let Some(due) = self.prompt("Due date (YYYY-MM-DD): ")? else { return Ok(None) };
        Ok(Some((title, description, due)))
    }

    // The add handlers return false when input hit EOF mid-prompt.
    fn add_task(&mut self) -> Result<bool> {
        let Some((title, description, due)) = self.read_common_fields()? else {
            return Ok(false);
        };
        match self.service.add_task(title, description, &due) {
            Ok(_) => writeln!(self.out, "✅ Task added.")?,
            Err(e) => writeln!(self.out, "❗ {}", e)?,
        }
        Ok(true)
    }

    fn add_priority_task(&mut self) -> Result<bool> {
        let Some((title, description, due)) = self.read_common_fields()? else {
            return Ok(false);
        };
        let Some(priority) = self.prompt("Priority (High/Medium/Low): ")? else {
            return Ok(false);
        };

        let added = priority
            .parse::<Priority>()
            .and_then(|p| self.service.add_priority_task(title, description, &due, p));
        match added {
            Ok(_) => writeln!(self.out, "✅ Priority task added.")?,
            Err(e) => writeln!(self.out, "❗ {}", e)?,
        }
        Ok(true)
    }

    fn show_all(&mut self) -> Result<()> {
        let tasks = self.service.list_all()?;
        if tasks.is_empty() {
            writeln!(self.out, "📭 No tasks available.")?;
        } else {
            writeln!(self.out, "{}", render_tasks(&tasks, self.table))?;
        }
        Ok(())
    }

    fn show_overdue(&mut self) -> Result<()> {
        let overdue = self.service.list_overdue((self.clock)())?;
        if overdue.is_empty() {
            writeln!(self.out, "🎉 No overdue tasks.")?;
        } else {
            writeln!(self.out, "⏰ Overdue Tasks:")?;
            writeln!(self.out, "{}", render_tasks(&overdue, self.table))?;
        }
        Ok(())
    }

    fn mark_done(&mut self) -> Result<bool> {
        let Some(title) = self.prompt("Enter task title to mark done: ")? else {
            return Ok(false);
        };
        match self.service.complete_by_title(&title)? {
            CompletionOutcome::Completed(_) => {
                writeln!(self.out, "✅ Task '{}' marked as completed.", title)?
            }
            CompletionOutcome::NotFound => writeln!(self.out, "❌ Task '{}' not found.", title)?,
        }
        Ok(true)
    }

    fn export_json(&mut self) -> Result<()> {
        let tasks = self.service.list_all()?;
        writeln!(self.out, "{}", serde_json::to_string_pretty(&tasks)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use taskmgr_core::MemoryTaskRepository;

    fn fixed_now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-05-10 09:30:00", "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn run_script(service: &mut TaskService<MemoryTaskRepository>, script: &str) -> String {
        let mut out = Vec::new();
        Menu::new(service, Cursor::new(script.to_string()), &mut out, fixed_now, false)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_full_session() {
        let mut service = TaskService::new(MemoryTaskRepository::new());
        let script = "\
1\nPay rent\nmonthly\n2024-05-01\n\
2\nShip release\nv2\n2024-06-01\nhigh\n\
3\n\
4\n\
5\nPay rent\n\
4\n\
7\n";
        let out = run_script(&mut service, script);

        assert!(out.starts_with("📝 Welcome to Task Manager App 📝"));
        assert!(out.contains("✅ Task added."));
        assert!(out.contains("✅ Priority task added."));
        assert!(out.contains("Pay rent - ❌ Pending | Due: 2024-05-01"));
        assert!(out.contains("Ship release - ❌ Pending | Due: 2024-06-01 | Priority: High"));
        assert!(out.contains("⏰ Overdue Tasks:"));
        assert!(out.contains("✅ Task 'Pay rent' marked as completed."));
        assert!(out.contains("🎉 No overdue tasks."));
        assert!(out.trim_end().ends_with("👋 Goodbye!"));

        let tasks = service.list_all().unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].is_completed());
    }

    #[test]
    fn test_errors_are_reported_not_fatal() {
        let mut service = TaskService::new(MemoryTaskRepository::new());
        let script = "\
1\nBad\n\n2020-13-40\n\
2\nAlso bad\n\n2024-01-01\nurgent\n\
5\nGhost\n\
9\n\
3\n\
7\n";
        let out = run_script(&mut service, script);

        assert!(out.contains("❗ invalid due date '2020-13-40'"));
        assert!(out.contains("❗ invalid priority 'urgent'"));
        assert!(out.contains("❌ Task 'Ghost' not found."));
        assert!(out.contains("❗ Invalid choice. Try again."));
        assert!(out.contains("📭 No tasks available."));
        assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_eof_ends_session() {
        let mut service = TaskService::new(MemoryTaskRepository::new());
        let out = run_script(&mut service, "1\nHalf entered\n");
        assert!(out.trim_end().ends_with("👋 Goodbye!"));
        assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_export_json() {
        let mut service = TaskService::new(MemoryTaskRepository::new());
        service.add_task("Water plants".to_string(), String::new(), "2024-05-11").unwrap();
        let out = run_script(&mut service, "6\n7\n");
        assert!(out.contains("\"title\": \"Water plants\""));
        assert!(out.contains("\"due_date\": \"2024-05-11\""));
    }
}
