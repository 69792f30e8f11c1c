use log::debug;

use crate::{
    error::TaskError,
    types::{Task, TaskId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) id: TaskId,
    pub(crate) task: Task,
}

/// In-memory task list, kept in display order.
///
/// The order is only re-derived on [`TaskStore::insert`]. Deleting or
/// completing a task never moves the others.
#[derive(Debug, Default)]
pub(crate) struct TaskStore {
    entries: Vec<Entry>,
    next_id: u64,
}

impl TaskStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, task: Task) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        debug!("Inserting {id} with priority {}", task.priority);
        self.entries.push(Entry { id, task });
        self.sort();
        id
    }

    pub(crate) fn delete(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self.position(id).ok_or(TaskError::NotFound(id))?;
        debug!("Deleting {id}");
        Ok(self.entries.remove(index).task)
    }

    pub(crate) fn mark_complete(&mut self, id: TaskId) -> Result<(), TaskError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(TaskError::NotFound(id))?;
        if entry.task.mark_complete() {
            debug!("Marked {id} complete");
        }
        Ok(())
    }

    /// Stable sort by priority rank, so equal priorities keep insertion order.
    pub(crate) fn sort(&mut self) {
        self.entries.sort_by_key(|e| e.task.priority.rank());
    }

    pub(crate) fn count(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: TaskId) -> Option<&Task> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.task)
    }

    pub(crate) fn position(&self, id: TaskId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub(crate) fn id_at(&self, index: usize) -> Option<TaskId> {
        self.entries.get(index).map(|e| e.id)
    }
}
