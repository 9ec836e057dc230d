//! In-memory task list with a single-row edit mode.

use tracing::debug;

use crate::domain::task::Task;
use crate::errors::{CashError, ValidationError};

pub type Result<T> = std::result::Result<T, CashError>;

/// Row currently being edited and its draft text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub index: usize,
    pub draft: String,
}

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    editing: Option<EditSession>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    pub fn add(&mut self, description: &str) -> Result<usize> {
        let text = non_empty(description)?;
        self.tasks.push(Task::new(text));
        debug!(index = self.tasks.len() - 1, "task added");
        Ok(self.tasks.len() - 1)
    }

    /// Enters edit mode for `index`, seeding the draft with its description.
    pub fn begin_edit(&mut self, index: usize) -> Result<&EditSession> {
        let draft = self.task(index)?.description.clone();
        Ok(&*self.editing.insert(EditSession { index, draft }))
    }

    /// Replaces the draft text of the active edit session.
    pub fn update_draft(&mut self, draft: &str) -> Result<()> {
        let session = self
            .editing
            .as_mut()
            .ok_or_else(|| ValidationError::Invalid("no task is being edited".into()))?;
        session.draft = draft.to_string();
        Ok(())
    }

    /// Commits the draft. An empty draft is rejected and edit mode stays on.
    pub fn save_edit(&mut self) -> Result<&Task> {
        let session = self
            .editing
            .as_ref()
            .ok_or_else(|| ValidationError::Invalid("no task is being edited".into()))?;
        let text = non_empty(&session.draft)?;
        let index = session.index;
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(CashError::TaskNotFound(index))?;
        task.description = text;
        self.editing = None;
        debug!(index, "task edited");
        Ok(&self.tasks[index])
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn delete(&mut self, index: usize) -> Result<Task> {
        self.task(index)?;
        let removed = self.tasks.remove(index);
        self.editing = match self.editing.take() {
            Some(session) if session.index == index => None,
            Some(mut session) if session.index > index => {
                session.index -= 1;
                Some(session)
            }
            other => other,
        };
        debug!(index, "task deleted");
        Ok(removed)
    }

    pub fn set_done(&mut self, index: usize, done: bool) -> Result<()> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(CashError::TaskNotFound(index))?;
        task.done = done;
        Ok(())
    }

    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let done = !self.task(index)?.done;
        self.set_done(index, done)?;
        Ok(done)
    }

    fn task(&self, index: usize) -> Result<&Task> {
        self.tasks.get(index).ok_or(CashError::TaskNotFound(index))
    }
}

fn non_empty(text: &str) -> std::result::Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ValidationError::EmptyTaskText)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add("My first task").unwrap();
        list.add("My second task").unwrap();
        list
    }

    #[test]
    fn add_rejects_blank_text() {
        let mut list = sample();
        let err = list.add("   ").unwrap_err();
        assert!(matches!(
            err,
            CashError::Validation(ValidationError::EmptyTaskText)
        ));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn edit_round_trip_updates_description() {
        let mut list = sample();
        let session = list.begin_edit(1).unwrap();
        assert_eq!(session.draft, "My second task");
        list.update_draft("Renamed").unwrap();
        let task = list.save_edit().unwrap();
        assert_eq!(task.description, "Renamed");
        assert!(list.editing().is_none());
    }

    #[test]
    fn empty_draft_is_rejected_and_edit_mode_kept() {
        let mut list = sample();
        list.begin_edit(0).unwrap();
        list.update_draft(" ").unwrap();
        assert!(list.save_edit().is_err());
        assert_eq!(list.editing().map(|s| s.index), Some(0));
        assert_eq!(list.tasks()[0].description, "My first task");
        list.cancel_edit();
        assert!(list.editing().is_none());
    }

    #[test]
    fn delete_adjusts_active_edit() {
        let mut list = sample();
        list.add("Third").unwrap();
        list.begin_edit(2).unwrap();
        list.delete(0).unwrap();
        assert_eq!(list.editing().map(|s| s.index), Some(1));
        list.delete(1).unwrap();
        assert!(list.editing().is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mut list = sample();
        assert!(matches!(list.delete(5), Err(CashError::TaskNotFound(5))));
        assert!(matches!(list.begin_edit(9), Err(CashError::TaskNotFound(9))));
        assert!(matches!(list.set_done(2, true), Err(CashError::TaskNotFound(2))));
    }

    #[test]
    fn toggle_flips_done_flag() {
        let mut list = sample();
        assert!(list.toggle(0).unwrap());
        assert!(list.tasks()[0].done);
        assert!(!list.toggle(0).unwrap());
    }
}
