use crate::{
    app::{App, AppState, Focus},
    error::Result,
    types::{DATE_FORMAT, TIME_FORMAT},
    views::{
        form::{focus_style, render_form},
        warning::render_warning,
    },
};
use crossterm::event::{self, Event, KeyEventKind};
use log::debug;
use ratatui::{
    prelude::*,
    style::Style,
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
    Frame,
};

const HEADERS: [&str; 5] = ["Task", "Added", "Due Date", "Due Time", "Priority"];

pub(crate) fn render_home<B>(term: &mut Terminal<B>, app: &mut App) -> Result<AppState>
where
    B: Backend,
{
    loop {
        term.draw(|frame| draw(frame, app))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if let AppState::Exit = app.handle(key.into()) {
            debug!("Leaving home view.");
            break;
        }
    }
    Ok(AppState::Exit)
}

fn task_table(app: &App) -> Table<'_> {
    let header = Row::new(HEADERS).style(Style::default().add_modifier(Modifier::BOLD));
    let rows = app.store.entries().iter().map(|entry| {
        let task = &entry.task;
        let style = if task.is_completed() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        Row::new([
            task.description.clone(),
            task.added_on.format(DATE_FORMAT).to_string(),
            task.due_date.format(DATE_FORMAT).to_string(),
            task.due_time.format(TIME_FORMAT).to_string(),
            task.priority.to_string(),
        ])
        .style(style)
    });
    let widths = [
        Constraint::Min(16),
        Constraint::Length(10),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(8),
    ];
    Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tasks")
                .border_style(focus_style(app.focus == Focus::Tasks)),
        )
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(app.config.highlight_symbol.as_str())
}

fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Task | Focus::DueDate | Focus::DueTime => {
            "Enter add  Tab next field  Ctrl-Q quit"
        }
        Focus::Priority => "←/→ change  Enter add  Tab next  Ctrl-Q quit",
        Focus::Tasks => "↑/↓ select  d delete  x complete  : command  Esc deselect",
        Focus::Command => "add  delete  complete  priority <h|m|l>  reset  quit",
    }
}

/// Draws the whole screen from `app`. Nothing here is kept between frames.
pub(crate) fn draw(frame: &mut Frame, app: &App) {
    let [title, form, table, count, command, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let heading = Paragraph::new(app.config.title.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(heading, title);

    render_form(frame, form, &app.form, app.focus == Focus::Priority);

    let mut state = TableState::default().with_selected(app.selected_index());
    frame.render_stateful_widget(task_table(app), table, &mut state);

    frame.render_widget(
        Paragraph::new(format!("Total Tasks: {}", app.store.count())).alignment(Alignment::Center),
        count,
    );
    frame.render_widget(&app.command, command);
    frame.render_widget(
        Paragraph::new(hints(app.focus)).style(Style::default().fg(Color::DarkGray)),
        help,
    );

    if let Some(warning) = &app.warning {
        render_warning(frame, &warning.to_string());
    }
}
