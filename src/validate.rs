//! Turns the raw form strings into a [`Task`].

use chrono::{NaiveDate, NaiveTime};

use crate::{
    error::{Field, TaskError},
    types::{Priority, Task, DATE_FORMAT, TIME_FORMAT},
};

/// The four raw strings of the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TaskInput {
    pub(crate) text: String,
    pub(crate) due_date: String,
    pub(crate) due_time: String,
    pub(crate) priority: String,
}

impl TaskInput {
    #[cfg(test)]
    pub(crate) fn new(text: &str, due_date: &str, due_time: &str, priority: &str) -> Self {
        TaskInput {
            text: text.to_owned(),
            due_date: due_date.to_owned(),
            due_time: due_time.to_owned(),
            priority: priority.to_owned(),
        }
    }
}

/// Checks `input` and builds a task added on `today`.
///
/// Emptiness is checked before format so a half-filled form always reports
/// [`TaskError::MissingField`]. An empty priority means Medium.
pub(crate) fn validate(input: &TaskInput, today: NaiveDate) -> Result<Task, TaskError> {
    for (value, field) in [
        (&input.text, Field::Task),
        (&input.due_date, Field::DueDate),
        (&input.due_time, Field::DueTime),
    ] {
        if value.is_empty() {
            return Err(TaskError::MissingField(field));
        }
    }
    let due_date = parse_date(&input.due_date).ok_or(TaskError::BadFormat(Field::DueDate))?;
    let due_time = parse_time(&input.due_time).ok_or(TaskError::BadFormat(Field::DueTime))?;
    let priority = if input.priority.is_empty() {
        Priority::default()
    } else {
        input
            .priority
            .parse()
            .map_err(|_| TaskError::BadFormat(Field::Priority))?
    };
    Ok(Task {
        description: input.text.clone(),
        added_on: today,
        due_date,
        due_time,
        priority,
    })
}

// chrono accepts unpadded fields ("2024-3-1"), so the date shape is checked
// separately before parsing. Times may drop the leading zero of the hour.
fn digits_with_separators(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, m)| match m {
            b'9' => c.is_ascii_digit(),
            sep => c == sep,
        })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if !digits_with_separators(s, "9999-99-99") {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    if !s.bytes().all(|c| c.is_ascii_digit() || c == b':') {
        return None;
    }
    NaiveTime::parse_from_str(s, TIME_FORMAT).ok()
}
