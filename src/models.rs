//! Frontend Models
//!
//! Task records come from the todo-store crate; UI-only types live here.

pub use todo_store::Task;

/// Visibility filter for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether a task is visible under this filter
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts() {
        let mut task = Task::new(1, "Buy milk");

        assert!(Filter::All.accepts(&task));
        assert!(Filter::Active.accepts(&task));
        assert!(!Filter::Completed.accepts(&task));

        task.completed = true;
        assert!(Filter::All.accepts(&task));
        assert!(!Filter::Active.accepts(&task));
        assert!(Filter::Completed.accepts(&task));
    }
}
