use crate::types::TaskId;
use std::{fmt::Display, io::Error as IOError};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] IOError),
    #[error("could not resolve XDG directories: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// A form field, used to say which input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Task,
    DueDate,
    DueTime,
    Priority,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Task => "task",
            Field::DueDate => "due date (YYYY-MM-DD)",
            Field::DueTime => "due time (HH:MM)",
            Field::Priority => "priority (High, Medium or Low)",
        })
    }
}

/// The action that needed a selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Delete,
    Complete,
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Delete => "delete",
            Action::Complete => "mark as completed",
        })
    }
}

/// Errors raised by a single user action. All of them are shown to the user
/// and none of them end the program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum TaskError {
    #[error("You must enter a task, due date, and due time.")]
    MissingField(Field),
    #[error("Invalid {0} format.")]
    BadFormat(Field),
    #[error("You must select a task to {0}.")]
    NoSelection(Action),
    #[error("{0} no longer exists.")]
    NotFound(TaskId),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}
