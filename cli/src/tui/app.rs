use chrono::NaiveDateTime;
use ratatui::widgets::TableState;
use taskmgr_core::{CompletionOutcome, MemoryTaskRepository, Task, TaskService};
use unicode_width::UnicodeWidthStr;

pub enum InputMode {
    Normal,
    Adding,
}

pub struct App {
    pub service: TaskService<MemoryTaskRepository>,
    pub tasks: Vec<Task>,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub overdue_only: bool,
    pub status_message: Option<String>,
    clock: fn() -> NaiveDateTime,
}

impl App {
    pub fn new(service: TaskService<MemoryTaskRepository>, clock: fn() -> NaiveDateTime) -> App {
        let mut app = App {
            service,
            tasks: Vec::new(),
            state: TableState::default(),
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            overdue_only: false,
            status_message: None,
            clock,
        };
        app.reload_tasks();
        app
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    pub fn next(&mut self) {
        if self.tasks.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.tasks.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.tasks.is_empty() { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tasks.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.state.selected().and_then(|i| self.tasks.get(i))
    }

    /// Completion goes through the title lookup, so with duplicate titles the
    /// first-inserted one is completed whichever row is highlighted.
    pub fn complete_selected(&mut self) {
        let Some(title) = self.selected_task().map(|t| t.title.clone()) else {
            return;
        };
        self.status_message = Some(match self.service.complete_by_title(&title) {
            Ok(CompletionOutcome::Completed(_)) => format!("Task '{}' marked as completed.", title),
            Ok(CompletionOutcome::NotFound) => format!("Task '{}' not found.", title),
            Err(e) => format!("Error: {}", e),
        });
        self.reload_tasks();
    }

    pub fn toggle_overdue_filter(&mut self) {
        self.overdue_only = !self.overdue_only;
        self.reload_tasks();
    }

    fn reload_tasks(&mut self) {
        let result = if self.overdue_only {
            self.service.list_overdue(self.now())
        } else {
            self.service.list_all()
        };
        match result {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => self.status_message = Some(format!("Error: {}", e)),
        }

        // Keep the selection inside the (possibly shorter) list
        match self.state.selected() {
            _ if self.tasks.is_empty() => self.state.select(None),
            Some(i) if i >= self.tasks.len() => self.state.select(Some(self.tasks.len() - 1)),
            None => self.state.select(Some(0)),
            Some(_) => {}
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Terminal columns between the start of the input and the cursor.
    pub fn cursor_column(&self) -> u16 {
        let before: String = self.input.chars().take(self.cursor_position).collect();
        u16::try_from(before.width()).unwrap_or(u16::MAX)
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        if let InputMode::Adding = self.input_mode {
            self.submit_add();
        }

        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();
    }

    fn submit_add(&mut self) {
        match self.service.quick_add(&self.input) {
            Ok(task) => {
                self.status_message = Some(format!("Task '{}' added.", task.title));
                self.reload_tasks();
                if let Some(pos) = self.tasks.iter().position(|t| t.id == task.id) {
                    self.state.select(Some(pos));
                }
            }
            Err(e) => self.status_message = Some(format!("Error: {}", e)),
        }
    }
}
