use serde::{Deserialize, Serialize};

use crate::domain::common::Displayable;

/// A to-do entry. Tasks are addressed by their position in the owning list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            done: false,
        }
    }
}

impl Displayable for Task {
    fn display_label(&self) -> String {
        let mark = if self.done { 'x' } else { ' ' };
        format!("[{mark}] {}", self.description)
    }
}
