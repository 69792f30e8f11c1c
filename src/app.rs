use crate::{
    commands::{parse_home_command, HomeCommand},
    config::Config,
    error::{Action, TaskError},
    store::TaskStore,
    types::{Priority, Task, TaskId},
    validate::validate,
    views::form::{clear, contents, field, set_focused, Form},
};
use chrono::{Local, NaiveDate};
use log::{info, warn};
use tui_textarea::{Input, Key, TextArea};

pub(crate) enum AppState {
    Home,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Task,
    DueDate,
    DueTime,
    Priority,
    Tasks,
    Command,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Task,
        Focus::DueDate,
        Focus::DueTime,
        Focus::Priority,
        Focus::Tasks,
        Focus::Command,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Everything the running program knows: the tasks, the form being filled
/// in, which row is selected and any warning waiting to be dismissed.
pub(crate) struct App {
    pub(crate) config: Config,
    pub(crate) store: TaskStore,
    pub(crate) form: Form,
    pub(crate) command: TextArea<'static>,
    pub(crate) focus: Focus,
    pub(crate) selected: Option<TaskId>,
    pub(crate) warning: Option<TaskError>,
    today: fn() -> NaiveDate,
}

impl App {
    pub(crate) fn new(config: Config) -> Self {
        Self::with_clock(config, || Local::now().date_naive())
    }

    pub(crate) fn with_clock(config: Config, today: fn() -> NaiveDate) -> Self {
        let command = field("Command", "Enter a command...");
        let mut app = App {
            form: Form::new(config.default_priority),
            config,
            store: TaskStore::new(),
            command,
            focus: Focus::Task,
            selected: None,
            warning: None,
            today,
        };
        app.set_focus(Focus::Task);
        app
    }

    pub(crate) fn add(&mut self) -> Result<TaskId, TaskError> {
        let task = validate(&self.form.input(), (self.today)())?;
        let id = self.store.insert(task);
        info!("Added {id}, {} tasks total", self.store.count());
        self.form.reset(self.config.default_priority);
        Ok(id)
    }

    pub(crate) fn delete_selected(&mut self) -> Result<Task, TaskError> {
        let id = self
            .selected
            .take()
            .ok_or(TaskError::NoSelection(Action::Delete))?;
        let task = self.store.delete(id)?;
        info!("Deleted {id}, {} tasks total", self.store.count());
        Ok(task)
    }

    pub(crate) fn complete_selected(&mut self) -> Result<(), TaskError> {
        let id = self
            .selected
            .ok_or(TaskError::NoSelection(Action::Complete))?;
        self.store.mark_complete(id)
    }

    /// Row of the selected task in the current display order.
    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected.and_then(|id| self.store.position(id))
    }

    pub(crate) fn select_next(&mut self) {
        let count = self.store.count();
        if count == 0 {
            return;
        }
        let index = self
            .selected_index()
            .map_or(0, |i| (i + 1).min(count - 1));
        self.selected = self.store.id_at(index);
    }

    pub(crate) fn select_prev(&mut self) {
        let count = self.store.count();
        if count == 0 {
            return;
        }
        let index = self
            .selected_index()
            .map_or(count - 1, |i| i.saturating_sub(1));
        self.selected = self.store.id_at(index);
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        if focus == Focus::Tasks && self.selected_index().is_none() {
            self.selected = self.store.id_at(0);
        }
        for (owner, area) in [
            (Focus::Task, &mut self.form.task),
            (Focus::DueDate, &mut self.form.due_date),
            (Focus::DueTime, &mut self.form.due_time),
            (Focus::Command, &mut self.command),
        ] {
            set_focused(area, owner == focus);
        }
    }

    /// Applies one key press. Errors end up in [`App::warning`], which blocks
    /// all other input until it is dismissed.
    pub(crate) fn handle(&mut self, input: Input) -> AppState {
        if self.warning.is_some() {
            if matches!(input.key, Key::Enter | Key::Esc) {
                self.warning = None;
            }
            return AppState::Home;
        }
        match self.dispatch(input) {
            Ok(state) => state,
            Err(e) => {
                warn!("{e}");
                self.warning = Some(e);
                AppState::Home
            }
        }
    }

    fn dispatch(&mut self, input: Input) -> Result<AppState, TaskError> {
        match input {
            Input {
                key: Key::Char('q'),
                ctrl: true,
                ..
            } => return Ok(AppState::Exit),
            Input {
                key: Key::Tab,
                shift,
                ..
            } => {
                let focus = if shift {
                    self.focus.prev()
                } else {
                    self.focus.next()
                };
                self.set_focus(focus);
                return Ok(AppState::Home);
            }
            _ => {}
        }
        let submit = matches!(
            input,
            Input {
                key: Key::Enter,
                ..
            } | Input {
                key: Key::Char('m'),
                ctrl: true,
                ..
            }
        );
        match self.focus {
            Focus::Task | Focus::DueDate | Focus::DueTime => {
                if submit {
                    self.add()?;
                } else if input.key == Key::Esc {
                    return Ok(AppState::Exit);
                } else {
                    let area = match self.focus {
                        Focus::Task => &mut self.form.task,
                        Focus::DueDate => &mut self.form.due_date,
                        _ => &mut self.form.due_time,
                    };
                    area.input(input);
                }
            }
            Focus::Priority => match input.key {
                _ if submit => {
                    self.add()?;
                }
                Key::Left | Key::Up => self.form.priority = self.form.priority.prev(),
                Key::Right | Key::Down | Key::Char(' ') => {
                    self.form.priority = self.form.priority.next()
                }
                Key::Char('h') => self.form.priority = Priority::High,
                Key::Char('m') => self.form.priority = Priority::Medium,
                Key::Char('l') => self.form.priority = Priority::Low,
                Key::Esc => return Ok(AppState::Exit),
                _ => {}
            },
            Focus::Tasks => match input.key {
                Key::Up | Key::Char('k') => self.select_prev(),
                Key::Down | Key::Char('j') => self.select_next(),
                Key::Delete | Key::Char('d') => {
                    self.delete_selected()?;
                }
                Key::Char('c') | Key::Char('x') => self.complete_selected()?,
                Key::Char(':') => self.set_focus(Focus::Command),
                Key::Esc => self.selected = None,
                _ => {}
            },
            Focus::Command => {
                if submit {
                    return self.run_command();
                } else if input.key == Key::Esc {
                    clear(&mut self.command);
                    self.set_focus(Focus::Tasks);
                } else {
                    self.command.input(input);
                }
            }
        }
        Ok(AppState::Home)
    }

    fn run_command(&mut self) -> Result<AppState, TaskError> {
        let line = contents(&self.command);
        clear(&mut self.command);
        if line.trim().is_empty() {
            return Ok(AppState::Home);
        }
        match parse_home_command(&line)? {
            HomeCommand::Add => {
                self.add()?;
            }
            HomeCommand::Delete => {
                self.delete_selected()?;
            }
            HomeCommand::Complete => self.complete_selected()?,
            HomeCommand::Priority(p) => self.form.priority = p,
            HomeCommand::Reset => self.form.reset(self.config.default_priority),
            HomeCommand::Quit => return Ok(AppState::Exit),
        }
        Ok(AppState::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()
    }

    fn app() -> App {
        App::with_clock(Config::default(), today)
    }

    fn press(key: Key) -> Input {
        Input {
            key,
            ..Input::default()
        }
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle(press(Key::Char(c)));
        }
    }

    /// Fills the form through key presses and submits it from the priority
    /// selector.
    fn add(app: &mut App, text: &str, date: &str, time: &str, priority: Priority) {
        app.set_focus(Focus::Task);
        type_str(app, text);
        app.handle(press(Key::Tab));
        type_str(app, date);
        app.handle(press(Key::Tab));
        type_str(app, time);
        app.handle(press(Key::Tab));
        assert_eq!(app.focus, Focus::Priority);
        app.form.priority = priority;
        app.handle(press(Key::Enter));
    }

    fn descriptions(app: &App) -> Vec<&str> {
        app.store
            .entries()
            .iter()
            .map(|e| e.task.description.as_str())
            .collect()
    }

    fn run(app: &mut App, command: &str) -> AppState {
        app.set_focus(Focus::Command);
        type_str(app, command);
        app.handle(press(Key::Enter))
    }

    #[test]
    fn add_through_the_form() {
        let mut app = app();
        add(&mut app, "Buy milk", "2024-03-01", "09:00", Priority::High);
        assert_eq!(app.warning, None);
        assert_eq!(app.store.count(), 1);
        let task = &app.store.entries()[0].task;
        assert_eq!(task.description, "Buy milk");
        assert_eq!(task.added_on, today());
        assert_eq!(task.priority, Priority::High);
        assert_eq!(app.form.input().text, "");
        assert_eq!(app.form.priority, Priority::Medium);
    }

    #[test]
    fn add_stamps_the_real_date_by_default() {
        let mut app = App::new(Config::default());
        type_str(&mut app, "Buy milk");
        app.form.due_date.insert_str("2024-03-01");
        app.form.due_time.insert_str("09:00");
        let before = Local::now().date_naive();
        let id = app.add().unwrap();
        let after = Local::now().date_naive();
        let added_on = app.store.get(id).unwrap().added_on;
        assert!(added_on == before || added_on == after);
    }

    #[test]
    fn enter_in_a_text_field_submits() {
        let mut app = app();
        type_str(&mut app, "Buy milk");
        app.form.due_date.insert_str("2024-03-01");
        app.form.due_time.insert_str("09:00");
        app.handle(press(Key::Enter));
        assert_eq!(app.store.count(), 1);
        assert_eq!(app.store.entries()[0].task.priority, Priority::Medium);
    }

    #[test]
    fn example_order() {
        let mut app = app();
        add(&mut app, "Buy milk", "2024-03-01", "09:00", Priority::High);
        add(&mut app, "Call bank", "2024-03-01", "10:00", Priority::Low);
        add(&mut app, "Email boss", "2024-03-01", "08:00", Priority::High);
        assert_eq!(descriptions(&app), ["Buy milk", "Email boss", "Call bank"]);
        assert_eq!(app.store.count(), 3);
    }

    #[test]
    fn invalid_add_warns_and_keeps_the_form() {
        let mut app = app();
        add(&mut app, "Task", "2024-13-01", "09:00", Priority::Medium);
        assert_eq!(app.warning, Some(TaskError::BadFormat(Field::DueDate)));
        assert_eq!(app.store.count(), 0);
        assert_eq!(app.form.input().due_date, "2024-13-01");
    }

    #[test]
    fn missing_field_warns() {
        let mut app = app();
        add(&mut app, "Task", "2024-03-01", "", Priority::Medium);
        assert_eq!(app.warning, Some(TaskError::MissingField(Field::DueTime)));
        assert_eq!(app.store.count(), 0);
    }

    #[test]
    fn warning_blocks_input_until_dismissed() {
        let mut app = app();
        app.handle(press(Key::Enter));
        assert!(matches!(app.warning, Some(TaskError::MissingField(_))));
        type_str(&mut app, "ignored");
        assert_eq!(app.form.input().text, "");
        app.handle(press(Key::Esc));
        assert_eq!(app.warning, None);
        type_str(&mut app, "typed");
        assert_eq!(app.form.input().text, "typed");
    }

    #[test]
    fn delete_without_selection_warns() {
        let mut app = app();
        add(&mut app, "a", "2024-03-01", "09:00", Priority::High);
        app.set_focus(Focus::Tasks);
        app.handle(press(Key::Esc));
        app.handle(press(Key::Char('d')));
        assert_eq!(app.warning, Some(TaskError::NoSelection(Action::Delete)));
        assert_eq!(app.store.count(), 1);
    }

    #[test]
    fn complete_without_selection_warns() {
        let mut app = app();
        assert_eq!(
            app.complete_selected(),
            Err(TaskError::NoSelection(Action::Complete))
        );
    }

    #[test]
    fn delete_selected_row() {
        let mut app = app();
        add(&mut app, "a", "2024-03-01", "09:00", Priority::High);
        add(&mut app, "b", "2024-03-01", "09:00", Priority::Medium);
        add(&mut app, "c", "2024-03-01", "09:00", Priority::Low);
        app.set_focus(Focus::Tasks);
        assert_eq!(app.selected_index(), Some(0));
        app.handle(press(Key::Down));
        app.handle(press(Key::Char('d')));
        assert_eq!(descriptions(&app), ["a", "c"]);
        assert_eq!(app.selected, None);
        assert_eq!(app.warning, None);
    }

    #[test]
    fn stale_selection_is_not_found() {
        let mut app = app();
        add(&mut app, "a", "2024-03-01", "09:00", Priority::High);
        add(&mut app, "b", "2024-03-01", "09:00", Priority::High);
        let id = app.store.id_at(0).unwrap();
        app.store.delete(id).unwrap();
        app.selected = Some(id);
        assert_eq!(app.delete_selected().map(|_| ()), Err(TaskError::NotFound(id)));
        assert_eq!(app.store.count(), 1);
    }

    #[test]
    fn mark_selected_twice() {
        let mut app = app();
        add(&mut app, "a", "2024-03-01", "09:00", Priority::High);
        app.set_focus(Focus::Tasks);
        app.handle(press(Key::Char('x')));
        app.handle(press(Key::Char('c')));
        assert_eq!(descriptions(&app), ["a (completed)"]);
        assert_eq!(app.warning, None);
    }

    #[test]
    fn selection_follows_the_task_across_inserts() {
        let mut app = app();
        add(&mut app, "low", "2024-03-01", "09:00", Priority::Low);
        app.set_focus(Focus::Tasks);
        let low = app.selected.unwrap();
        add(&mut app, "high", "2024-03-01", "09:00", Priority::High);
        assert_eq!(app.selected, Some(low));
        assert_eq!(app.selected_index(), Some(1));
    }

    #[test]
    fn selection_stops_at_the_ends() {
        let mut app = app();
        add(&mut app, "a", "2024-03-01", "09:00", Priority::High);
        add(&mut app, "b", "2024-03-01", "09:00", Priority::High);
        app.set_focus(Focus::Tasks);
        app.handle(press(Key::Up));
        assert_eq!(app.selected_index(), Some(0));
        app.handle(press(Key::Down));
        app.handle(press(Key::Down));
        assert_eq!(app.selected_index(), Some(1));
        app.handle(press(Key::Esc));
        app.handle(press(Key::Up));
        assert_eq!(app.selected_index(), Some(1));
    }

    #[test]
    fn priority_selector_keys() {
        let mut app = app();
        app.set_focus(Focus::Priority);
        app.handle(press(Key::Left));
        assert_eq!(app.form.priority, Priority::High);
        app.handle(press(Key::Right));
        app.handle(press(Key::Right));
        assert_eq!(app.form.priority, Priority::Low);
        app.handle(press(Key::Char('h')));
        assert_eq!(app.form.priority, Priority::High);
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut app = app();
        app.handle(Input {
            key: Key::Tab,
            shift: true,
            ..Input::default()
        });
        assert_eq!(app.focus, Focus::Command);
        app.handle(press(Key::Tab));
        assert_eq!(app.focus, Focus::Task);
    }

    #[test]
    fn commands_drive_the_store() {
        let mut app = app();
        app.form.task.insert_str("Buy milk");
        app.form.due_date.insert_str("2024-03-01");
        app.form.due_time.insert_str("09:00");
        run(&mut app, "p low");
        assert_eq!(app.form.priority, Priority::Low);
        run(&mut app, "add");
        assert_eq!(app.store.count(), 1);
        assert_eq!(app.store.entries()[0].task.priority, Priority::Low);

        app.selected = app.store.id_at(0);
        run(&mut app, "complete");
        assert_eq!(descriptions(&app), ["Buy milk (completed)"]);
        run(&mut app, "d");
        assert_eq!(app.store.count(), 0);
        assert_eq!(app.warning, None);
        assert_eq!(contents(&app.command), "");
    }

    #[test]
    fn reset_command_clears_the_form() {
        let mut app = app();
        app.form.task.insert_str("half typed");
        app.form.priority = Priority::High;
        run(&mut app, "reset");
        assert_eq!(app.form.input().text, "");
        assert_eq!(app.form.priority, Priority::Medium);
    }

    #[test]
    fn unknown_command_warns() {
        let mut app = app();
        run(&mut app, "frobnicate");
        assert_eq!(
            app.warning,
            Some(TaskError::UnknownCommand("frobnicate".to_owned()))
        );
    }

    #[test]
    fn quitting() {
        let mut app = app();
        assert!(matches!(run(&mut app, "quit"), AppState::Exit));
        let mut app = self::app();
        assert!(matches!(
            app.handle(Input {
                key: Key::Char('q'),
                ctrl: true,
                ..Input::default()
            }),
            AppState::Exit
        ));
    }
}
