use crate::{types::Priority, validate::TaskInput};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use tui_textarea::{CursorMove, TextArea};

/// The entry form: three text fields and a priority selector.
pub(crate) struct Form {
    pub(crate) task: TextArea<'static>,
    pub(crate) due_date: TextArea<'static>,
    pub(crate) due_time: TextArea<'static>,
    pub(crate) priority: Priority,
}

pub(crate) fn field(title: &'static str, placeholder: &'static str) -> TextArea<'static> {
    let mut area = TextArea::default();
    area.set_cursor_line_style(Style::default());
    area.set_placeholder_text(placeholder);
    area.set_style(Style::default().fg(Color::White));
    area.set_block(Block::default().borders(Borders::ALL).title(title));
    area
}

/// Single-line contents of a field.
pub(crate) fn contents(area: &TextArea<'_>) -> String {
    area.lines().join("")
}

pub(crate) fn clear(area: &mut TextArea<'_>) {
    area.move_cursor(CursorMove::Bottom);
    area.move_cursor(CursorMove::End);
    while !area.is_empty() {
        area.delete_line_by_head();
        if !area.delete_newline() {
            break;
        }
    }
}

pub(crate) fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Shows or hides the cursor and tints the border of a text field.
pub(crate) fn set_focused(area: &mut TextArea<'_>, focused: bool) {
    area.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
    if let Some(block) = area.block().cloned() {
        area.set_block(block.border_style(focus_style(focused)));
    }
}

impl Form {
    pub(crate) fn new(priority: Priority) -> Self {
        Form {
            task: field("Task", "What needs doing?"),
            due_date: field("Due Date", "YYYY-MM-DD"),
            due_time: field("Due Time", "HH:MM"),
            priority,
        }
    }

    pub(crate) fn input(&self) -> TaskInput {
        TaskInput {
            text: contents(&self.task),
            due_date: contents(&self.due_date),
            due_time: contents(&self.due_time),
            priority: self.priority.to_string(),
        }
    }

    pub(crate) fn reset(&mut self, priority: Priority) {
        clear(&mut self.task);
        clear(&mut self.due_date);
        clear(&mut self.due_time);
        self.priority = priority;
    }
}

pub(crate) fn render_form(frame: &mut Frame, area: Rect, form: &Form, priority_focused: bool) {
    let [task_row, due_row] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(area);
    let [date, time, priority] = Layout::horizontal([
        Constraint::Percentage(40),
        Constraint::Percentage(30),
        Constraint::Percentage(30),
    ])
    .areas(due_row);

    let selector = Paragraph::new(format!("< {} >", form.priority))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Priority")
                .border_style(focus_style(priority_focused)),
        );

    frame.render_widget(&form.task, task_row);
    frame.render_widget(&form.due_date, date);
    frame.render_widget(&form.due_time, time);
    frame.render_widget(selector, priority);
}
