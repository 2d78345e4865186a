//! Task Model
//!
//! One task record: stable id, user-supplied text, completion flag.

use serde::{Deserialize, Serialize};

/// A single task entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier assigned by the store, never reused
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// New incomplete task
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
