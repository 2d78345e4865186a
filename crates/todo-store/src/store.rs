//! Task Store
//!
//! The shared observable state container. Holds the ordered task collection,
//! assigns ids from a monotonic counter, and fans every commit out to the
//! registered observers in registration order.

use std::fmt;

use crate::task::Task;

/// Handle returned by [`TaskStore::subscribe`], used to deregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

/// Store-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    TaskNotFound(u32),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::TaskNotFound(id) => write!(f, "no task with id {}", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Common result type for store commits
pub type StoreResult<T> = Result<T, StoreError>;

type Observer = Box<dyn FnMut(&[Task])>;

/// Observable container for the task collection.
///
/// All reads are synchronous borrows of the current collection; all writes
/// are commits that mutate the collection and then notify every observer
/// exactly once. A failed commit (unknown id) mutates nothing and notifies
/// nobody. Single-threaded; observers must not commit back into the store
/// from inside a notification.
pub struct TaskStore {
    tasks: Vec<Task>,
    next_task_id: u32,
    next_observer_id: u32,
    observers: Vec<(ObserverId, Observer)>,
}

impl TaskStore {
    /// Empty store, ids starting at 1
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_task_id: 1,
            next_observer_id: 1,
            observers: Vec::new(),
        }
    }

    /// Store pre-seeded with existing tasks.
    ///
    /// The id counter starts past the highest seeded id, so seeded ids are
    /// never handed out again.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_task_id = tasks.iter().map(|t| t.id + 1).max().unwrap_or(1);
        Self {
            tasks,
            next_task_id,
            next_observer_id: 1,
            observers: Vec::new(),
        }
    }

    /// Current collection, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id
    pub fn find(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Register an observer called with the new collection after every commit.
    ///
    /// Subscribing does not replay the current value; read [`tasks`](Self::tasks)
    /// for the initial snapshot.
    pub fn subscribe(&mut self, observer: impl FnMut(&[Task]) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Deregister an observer. Returns false if the id was already gone.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() < before
    }

    /// Append a new incomplete task, returning its id
    pub fn add(&mut self, text: impl Into<String>) -> u32 {
        let id = self.next_task_id;
        self.next_task_id += 1;
        self.tasks.push(Task::new(id, text));
        log::debug!("task {} added", id);
        self.notify();
        id
    }

    /// Flip one task's completion flag, returning the new value
    pub fn toggle(&mut self, id: u32) -> StoreResult<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.completed = !task.completed;
        let completed = task.completed;
        self.notify();
        Ok(completed)
    }

    /// Replace one task's text
    pub fn rename(&mut self, id: u32, text: impl Into<String>) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.text = text.into();
        self.notify();
        Ok(())
    }

    /// Delete one task, returning the removed record
    pub fn remove(&mut self, id: u32) -> StoreResult<Task> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        let removed = self.tasks.remove(index);
        self.notify();
        Ok(removed)
    }

    /// Drop all completed tasks, returning how many were removed.
    ///
    /// No notification fires when nothing was removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            log::debug!("cleared {} completed tasks", removed);
            self.notify();
        }
        removed
    }

    /// Replace the whole collection and notify.
    ///
    /// The id counter is bumped past the highest incoming id, so later adds
    /// keep handing out fresh ids.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        let max_next = tasks.iter().map(|t| t.id + 1).max().unwrap_or(1);
        self.next_task_id = self.next_task_id.max(max_next);
        self.tasks = tasks;
        self.notify();
    }

    /// Fan the current collection out to all observers, registration order
    fn notify(&mut self) {
        let tasks = &self.tasks;
        for (_, observer) in self.observers.iter_mut() {
            observer(tasks);
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn texts(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_in_call_order() {
        let mut store = TaskStore::new();
        store.add("one");
        store.add("two");
        store.add("three");

        assert_eq!(store.len(), 3);
        assert_eq!(texts(&store), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_add_assigns_unique_monotonic_ids() {
        let mut store = TaskStore::new();
        let a = store.add("a");
        let b = store.add("b");
        let c = store.add("c");

        assert_eq!((a, b, c), (1, 2, 3));
        assert!(store.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_add_then_toggle_scenario() {
        let mut store = TaskStore::new();
        let id = store.add("Buy milk");

        assert_eq!(store.tasks(), &[Task::new(id, "Buy milk")]);

        let completed = store.toggle(id).unwrap();
        assert!(completed);
        assert!(store.find(id).unwrap().completed);
        assert_eq!(store.find(id).unwrap().text, "Buy milk");
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut store = TaskStore::new();
        let id = store.add("flip me");

        store.toggle(id).unwrap();
        store.toggle(id).unwrap();

        assert!(!store.find(id).unwrap().completed);
    }

    #[test]
    fn test_toggle_leaves_other_tasks_untouched() {
        let mut store = TaskStore::new();
        let first = store.add("first");
        let second = store.add("second");

        store.toggle(first).unwrap();

        let other = store.find(second).unwrap();
        assert_eq!(other.text, "second");
        assert!(!other.completed);
    }

    #[test]
    fn test_toggle_unknown_id_fails_without_notifying() {
        let mut store = TaskStore::new();
        store.add("only");

        let calls = Rc::new(RefCell::new(0u32));
        let sink = calls.clone();
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        assert_eq!(store.toggle(99), Err(StoreError::TaskNotFound(99)));
        assert_eq!(*calls.borrow(), 0);
        assert!(!store.find(1).unwrap().completed);
    }

    #[test]
    fn test_observers_called_once_per_commit_with_latest_value() {
        let mut store = TaskStore::new();
        let calls_a = Rc::new(RefCell::new(Vec::new()));
        let calls_b = Rc::new(RefCell::new(Vec::new()));

        let sink = calls_a.clone();
        store.subscribe(move |tasks| sink.borrow_mut().push(tasks.len()));
        let sink = calls_b.clone();
        store.subscribe(move |tasks| sink.borrow_mut().push(tasks.len()));

        let id = store.add("one");
        store.add("two");
        store.toggle(id).unwrap();

        // three commits, three calls each, always with the current length
        assert_eq!(*calls_a.borrow(), vec![1, 2, 2]);
        assert_eq!(*calls_b.borrow(), vec![1, 2, 2]);
    }

    #[test]
    fn test_observers_notified_in_registration_order() {
        let mut store = TaskStore::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let sink = order.clone();
        store.subscribe(move |_| sink.borrow_mut().push("first"));
        let sink = order.clone();
        store.subscribe(move |_| sink.borrow_mut().push("second"));

        store.add("x");

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut store = TaskStore::new();
        let kept = Rc::new(RefCell::new(0u32));
        let dropped = Rc::new(RefCell::new(0u32));

        let sink = kept.clone();
        store.subscribe(move |_| *sink.borrow_mut() += 1);
        let sink = dropped.clone();
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add("before");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.add("after");

        assert_eq!(*kept.borrow(), 2);
        assert_eq!(*dropped.borrow(), 1);
    }

    #[test]
    fn test_rename_changes_text_only() {
        let mut store = TaskStore::new();
        let id = store.add("old");
        store.toggle(id).unwrap();

        store.rename(id, "new").unwrap();

        let task = store.find(id).unwrap();
        assert_eq!(task.text, "new");
        assert!(task.completed);
        assert_eq!(store.rename(99, "nope"), Err(StoreError::TaskNotFound(99)));
    }

    #[test]
    fn test_remove_returns_record() {
        let mut store = TaskStore::new();
        let keep = store.add("keep");
        let gone = store.add("gone");

        let removed = store.remove(gone).unwrap();
        assert_eq!(removed.text, "gone");
        assert_eq!(texts(&store), vec!["keep"]);
        assert!(store.find(keep).is_some());
        assert_eq!(store.remove(gone), Err(StoreError::TaskNotFound(gone)));
    }

    #[test]
    fn test_clear_completed_notifies_only_when_removing() {
        let mut store = TaskStore::new();
        let a = store.add("a");
        store.add("b");
        store.toggle(a).unwrap();

        let calls = Rc::new(RefCell::new(0u32));
        let sink = calls.clone();
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        assert_eq!(store.clear_completed(), 1);
        assert_eq!(texts(&store), vec!["b"]);
        assert_eq!(*calls.borrow(), 1);

        // nothing left to clear, no notification
        assert_eq!(store.clear_completed(), 0);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_seeded_store_keeps_ids_fresh() {
        let mut store = TaskStore::with_tasks(vec![
            Task::new(3, "seeded"),
            Task {
                id: 7,
                text: "done already".to_string(),
                completed: true,
            },
        ]);

        assert_eq!(store.len(), 2);
        assert!(store.find(7).unwrap().completed);
        assert_eq!(store.add("fresh"), 8);
    }

    #[test]
    fn test_replace_commits_and_keeps_counter_monotonic() {
        let mut store = TaskStore::new();
        store.add("a");

        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        store.subscribe(move |tasks| sink.borrow_mut().push(tasks.len()));

        store.replace(vec![Task::new(7, "swapped in")]);
        assert_eq!(texts(&store), vec!["swapped in"]);
        assert_eq!(*calls.borrow(), vec![1]);

        // counter moved past the replaced ids
        assert_eq!(store.add("next"), 8);
    }

    #[test]
    fn test_replace_with_empty_keeps_existing_counter() {
        let mut store = TaskStore::new();
        store.add("a");
        store.add("b");

        store.replace(Vec::new());

        assert!(store.is_empty());
        assert_eq!(store.add("c"), 3);
    }
}
