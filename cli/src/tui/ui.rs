use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Paragraph, Row, Table, Wrap},
    Frame,
};
use taskmgr_core::{format_due_date, Priority};

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Input / status
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let title = if app.overdue_only { "TASK MANAGER · OVERDUE" } else { "TASK MANAGER" };
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60),
            Constraint::Percentage(40),
        ])
        .split(main_chunks[1]);

    draw_task_list(f, app, content_chunks[0]);
    draw_detail_view(f, app, content_chunks[1]);
    draw_input(f, app, main_chunks[2]);

    let help = match app.input_mode {
        InputMode::Normal => "j/k: Navigate | a: Add | Enter: Done | o: Overdue only | q: Quit",
        InputMode::Adding => "Title due:YYYY-MM-DD [pri:h|m|l] [desc:text] | Enter: Save | Esc: Cancel",
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[3]);
}

fn draw_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let now = app.now();
    let rows: Vec<Row> = app.tasks.iter().map(|task| {
        let status_icon = if task.is_completed() { "✔" } else { "☐" };

        let (pri_str, priority_style) = match task.priority() {
            Some(Priority::High) => ("H", Style::default().fg(Color::Red)),
            Some(Priority::Medium) => ("M", Style::default().fg(Color::Yellow)),
            Some(Priority::Low) => ("L", Style::default().fg(Color::Green)),
            None => ("-", Style::default().fg(Color::DarkGray)),
        };

        let row_style = if task.is_overdue(now) {
            Style::default().fg(Color::Red)
        } else if task.is_completed() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Row::new(vec![
            Span::styled(status_icon, Style::default()),
            Span::styled(pri_str, priority_style),
            Span::raw(format_due_date(task.due_date)),
            Span::styled(task.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ])
        .style(row_style)
    }).collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),  // Status
            Constraint::Length(3),  // Priority
            Constraint::Length(11), // Due
            Constraint::Min(10),    // Title
        ]
    )
    .header(Row::new(vec!["St", "Pr", "Due", "Task"]).style(Style::default().fg(Color::Yellow)))
    .block(Block::default().title(" Tasks ").borders(Borders::ALL).border_type(BorderType::Rounded))
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_detail_view(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title(" Detail ").borders(Borders::ALL).border_type(BorderType::Rounded);

    let Some(task) = app.selected_task() else {
        f.render_widget(block, area);
        return;
    };

    let overdue = if task.is_overdue(app.now()) { "Yes" } else { "No" };
    let mut detail_text = vec![
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(Color::Blue)),
            Span::styled(task.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("ID: ", Style::default().fg(Color::DarkGray)),
            Span::raw(task.id.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Blue)),
            Span::raw(task.status_label()),
        ]),
        Line::from(vec![
            Span::styled("Priority: ", Style::default().fg(Color::Blue)),
            Span::raw(task.priority().map(|p| p.to_string()).unwrap_or_else(|| "None".to_string())),
        ]),
        Line::from(vec![
            Span::styled("Due: ", Style::default().fg(Color::Blue)),
            Span::raw(format_due_date(task.due_date)),
        ]),
        Line::from(vec![
            Span::styled("Overdue: ", Style::default().fg(Color::Blue)),
            Span::raw(overdue),
        ]),
        Line::from(""),
    ];

    if !task.description.is_empty() {
        detail_text.push(Line::from(Span::styled("Description:", Style::default().fg(Color::Blue))));
        detail_text.push(Line::from(task.description.as_str()));
    }

    let detail_block = Paragraph::new(detail_text)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(detail_block, area);
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    match app.input_mode {
        InputMode::Adding => {
            let input = Paragraph::new(app.input.as_str())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().title(" Add ").borders(Borders::ALL).border_type(BorderType::Rounded));
            f.render_widget(input, area);
            // +1 for the left border
            f.set_cursor_position((area.x + 1 + app.cursor_column(), area.y + 1));
        }
        InputMode::Normal => {
            let msg = app.status_message.as_deref().unwrap_or("");
            let style = if msg.starts_with("Error") {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            let status = Paragraph::new(msg)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
            f.render_widget(status, area);
        }
    }
}
