//! The task list adapter: in-memory row binding for a host list widget.
//!
//! `TaskAdapter` owns the ordered sequence of tasks a list widget displays.
//! Every mutation goes through the adapter, which queues a [`ListEdit`]
//! script the host drains via [`TaskAdapter::take_edits`] and applies to its
//! own row state (selection, scroll position). Row clicks are forwarded to a
//! registered listener as `(task, index)` pairs.
//!
//! `set_tasks` exists in two revisions, selected by [`RefreshStrategy`]:
//! a full repaint (`Reset`) or a computed minimal edit script keyed by task
//! identity for "same item" and by full equality for "same content".

use std::collections::HashSet;

use crate::task::Task;

/// A single change notification for the host list widget.
///
/// Indices refer to the sequence as it stands at the moment the edit is
/// applied, so a drained script replays in order against the host's previous
/// row set and reproduces the adapter's current sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEdit {
    /// Everything may have changed; repaint all rows.
    Reset,
    /// A row was inserted at `index`; later rows shifted up by one.
    Inserted { index: usize },
    /// The row at `index` changed content in place.
    Changed { index: usize },
    /// The row at `index` was removed; later rows shifted down by one.
    Removed { index: usize },
    /// The row at `from` moved to `to`; rows in between shifted by one.
    Moved { from: usize, to: usize },
}

/// How `set_tasks` reports a full replacement to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStrategy {
    /// Emit a single `Reset`; the host repaints every row.
    FullReset,
    /// Diff the new sequence against the old one and emit a minimal script.
    Diff,
}

type ClickListener = Box<dyn Fn(&Task, usize)>;

/// Binds an ordered task sequence to the rows of a host list widget.
///
/// The adapter is a single-threaded, main-loop-only component: no I/O, no
/// locking, no error propagation. Out-of-range indices, unknown ids and
/// absent input are silent no-ops. Sequences handed to the adapter must be
/// identity-unique (no two tasks sharing an `id`); `add_task` enforces this
/// for appends and the task feed enforces it for initial data.
pub struct TaskAdapter {
    tasks: Vec<Task>,
    strategy: RefreshStrategy,
    pending: Vec<ListEdit>,
    on_click: Option<ClickListener>,
}

impl TaskAdapter {
    /// Create an empty adapter using the given refresh strategy.
    pub fn new(strategy: RefreshStrategy) -> Self {
        TaskAdapter {
            tasks: Vec::new(),
            strategy,
            pending: Vec::new(),
            on_click: None,
        }
    }

    /// Register (or replace) the row-click listener.
    pub fn set_on_task_click(&mut self, listener: impl Fn(&Task, usize) + 'static) {
        self.on_click = Some(Box::new(listener));
    }

    /// Number of rows currently bound.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the adapter holds no rows.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The task bound at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// The full bound sequence, in row order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Position of the task with the given id, if present.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Drain the pending change notifications for the host to apply.
    pub fn take_edits(&mut self) -> Vec<ListEdit> {
        std::mem::take(&mut self.pending)
    }

    /// Replace the full backing sequence.
    ///
    /// `None` is a no-op: the sequence and the pending queue are left
    /// untouched. With `Some`, the notification depends on the strategy:
    /// `FullReset` queues a single `Reset`, `Diff` queues the minimal edit
    /// script between the previous and the new sequence.
    pub fn set_tasks(&mut self, tasks: Option<Vec<Task>>) {
        let Some(new) = tasks else {
            return;
        };
        match self.strategy {
            RefreshStrategy::FullReset => {
                self.tasks = new;
                self.pending.push(ListEdit::Reset);
            }
            RefreshStrategy::Diff => self.diff_into(new),
        }
    }

    /// Append one task, notifying a single insertion at the new last index.
    ///
    /// A task whose identity is already bound is rejected; returns whether
    /// the append happened.
    pub fn add_task(&mut self, task: Task) -> bool {
        if self.position_of(task.id).is_some() {
            return false;
        }
        self.tasks.push(task);
        self.pending.push(ListEdit::Inserted { index: self.tasks.len() - 1 });
        true
    }

    /// Replace the task at an explicit position, notifying a single content
    /// change there. Out-of-range positions are a no-op.
    pub fn update_task_at(&mut self, index: usize, task: Task) -> bool {
        match self.tasks.get_mut(index) {
            Some(slot) => {
                *slot = task;
                self.pending.push(ListEdit::Changed { index });
                true
            }
            None => false,
        }
    }

    /// Replace the task with matching identity, notifying a single content
    /// change at its position. Unknown identities are a no-op.
    pub fn update_task(&mut self, task: Task) -> bool {
        match self.position_of(task.id) {
            Some(index) => {
                self.tasks[index] = task;
                self.pending.push(ListEdit::Changed { index });
                true
            }
            None => false,
        }
    }

    /// Remove the task at an explicit position, notifying a single removal.
    /// Later rows shift down by one. Out-of-range positions are a no-op.
    pub fn remove_task_at(&mut self, index: usize) -> Option<Task> {
        if index >= self.tasks.len() {
            return None;
        }
        let removed = self.tasks.remove(index);
        self.pending.push(ListEdit::Removed { index });
        Some(removed)
    }

    /// Remove the task with the given identity, notifying a single removal
    /// at its position. Unknown identities are a no-op.
    pub fn remove_task(&mut self, id: u64) -> Option<Task> {
        let index = self.position_of(id)?;
        self.remove_task_at(index)
    }

    /// Report a row click to the registered listener as `(task, index)`.
    ///
    /// The task handed to the listener is the one currently bound at
    /// `index`, never a stale reference. No listener or an out-of-range
    /// index is a no-op.
    pub fn click(&self, index: usize) {
        if let (Some(listener), Some(task)) = (&self.on_click, self.tasks.get(index)) {
            listener(task, index);
        }
    }

    /// Transform the bound sequence into `new`, queueing the minimal edit
    /// script: removals first (descending, so indices stay live), then one
    /// placement pass that inserts missing items, moves displaced ones and
    /// flags content changes.
    fn diff_into(&mut self, new: Vec<Task>) {
        let keep: HashSet<u64> = new.iter().map(|t| t.id).collect();
        for i in (0..self.tasks.len()).rev() {
            if !keep.contains(&self.tasks[i].id) {
                self.tasks.remove(i);
                self.pending.push(ListEdit::Removed { index: i });
            }
        }

        for (i, target) in new.into_iter().enumerate() {
            match self.position_of(target.id) {
                None => {
                    self.tasks.insert(i, target);
                    self.pending.push(ListEdit::Inserted { index: i });
                }
                Some(j) => {
                    if j != i {
                        let item = self.tasks.remove(j);
                        self.tasks.insert(i, item);
                        self.pending.push(ListEdit::Moved { from: j, to: i });
                    }
                    if self.tasks[i] != target {
                        self.tasks[i] = target;
                        self.pending.push(ListEdit::Changed { index: i });
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::fields::{Category, Priority};

    fn task(id: u64, title: &str) -> Task {
        Task::new(id, title, format!("about {title}"), Priority::Medium, Category::Work)
    }

    fn sample_three() -> Vec<Task> {
        vec![task(1, "alpha"), task(2, "beta"), task(3, "gamma")]
    }

    /// Apply an edit script to a copy of `old`, pulling row content from
    /// `current` (the adapter's post-mutation sequence) the way a host
    /// widget re-binds rows after a notification.
    fn replay(old: &[Task], edits: &[ListEdit], current: &[Task]) -> Vec<Task> {
        let mut rows = old.to_vec();
        for edit in edits {
            match *edit {
                ListEdit::Reset => rows = current.to_vec(),
                ListEdit::Inserted { index } => rows.insert(index, current[index].clone()),
                ListEdit::Changed { index } => rows[index] = current[index].clone(),
                ListEdit::Removed { index } => {
                    rows.remove(index);
                }
                ListEdit::Moved { from, to } => {
                    let item = rows.remove(from);
                    rows.insert(to, item);
                }
            }
        }
        rows
    }

    #[test]
    fn test_set_tasks_binds_every_row_in_order() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        let list = sample_three();
        adapter.set_tasks(Some(list.clone()));

        assert_eq!(adapter.len(), list.len());
        for (i, t) in list.iter().enumerate() {
            assert_eq!(adapter.get(i), Some(t));
        }
    }

    #[test]
    fn test_set_tasks_none_is_a_no_op() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        adapter.set_tasks(None);
        assert_eq!(adapter.tasks(), sample_three().as_slice());
        assert!(adapter.take_edits().is_empty());
    }

    #[test]
    fn test_full_reset_strategy_emits_single_reset() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::FullReset);
        adapter.set_tasks(Some(sample_three()));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Reset]);

        adapter.set_tasks(Some(vec![task(9, "omega")]));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Reset]);
        assert_eq!(adapter.len(), 1);
    }

    #[test]
    fn test_add_task_appends_and_signals_last_index() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        assert!(adapter.add_task(task(4, "delta")));
        assert_eq!(adapter.len(), 4);
        assert_eq!(adapter.get(3), Some(&task(4, "delta")));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Inserted { index: 3 }]);
    }

    #[test]
    fn test_add_task_rejects_duplicate_identity() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        assert!(!adapter.add_task(task(2, "beta again")));
        assert_eq!(adapter.len(), 3);
        assert!(adapter.take_edits().is_empty());
    }

    #[test]
    fn test_update_task_at_changes_exactly_one_row() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        let before = sample_three();
        adapter.set_tasks(Some(before.clone()));
        adapter.take_edits();

        let replacement = task(2, "beta v2");
        assert!(adapter.update_task_at(1, replacement.clone()));
        assert_eq!(adapter.get(0), Some(&before[0]));
        assert_eq!(adapter.get(1), Some(&replacement));
        assert_eq!(adapter.get(2), Some(&before[2]));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Changed { index: 1 }]);
    }

    #[test]
    fn test_update_task_at_out_of_range_is_no_op() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        assert!(!adapter.update_task_at(7, task(7, "eta")));
        assert_eq!(adapter.len(), 3);
        assert!(adapter.take_edits().is_empty());
    }

    #[test]
    fn test_update_task_matches_by_identity() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        let replacement = task(3, "gamma v2");
        assert!(adapter.update_task(replacement.clone()));
        assert_eq!(adapter.get(2), Some(&replacement));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Changed { index: 2 }]);

        assert!(!adapter.update_task(task(42, "nobody")));
        assert!(adapter.take_edits().is_empty());
    }

    #[test]
    fn test_remove_task_at_shifts_later_rows_down() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        assert_eq!(adapter.remove_task_at(0), Some(task(1, "alpha")));
        assert_eq!(adapter.len(), 2);
        assert_eq!(adapter.get(0), Some(&task(2, "beta")));
        assert_eq!(adapter.get(1), Some(&task(3, "gamma")));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Removed { index: 0 }]);
    }

    #[test]
    fn test_remove_task_by_identity() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        assert_eq!(adapter.remove_task(2), Some(task(2, "beta")));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Removed { index: 1 }]);

        assert_eq!(adapter.remove_task(2), None);
        assert!(adapter.take_edits().is_empty());
    }

    #[test]
    fn test_click_reports_current_binding_not_stale() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));

        let seen: Rc<RefCell<Vec<(u64, usize)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        adapter.set_on_task_click(move |t, i| sink.borrow_mut().push((t.id, i)));

        adapter.click(1);
        // Mutate under the listener: row 1 is now a different task.
        adapter.remove_task_at(0);
        adapter.click(1);
        adapter.update_task_at(1, task(3, "gamma v2"));
        adapter.click(1);

        assert_eq!(*seen.borrow(), vec![(2, 1), (3, 1), (3, 1)]);
    }

    #[test]
    fn test_click_without_listener_or_out_of_range_is_no_op() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.click(0);

        let seen: Rc<RefCell<Vec<(u64, usize)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        adapter.set_on_task_click(move |t, i| sink.borrow_mut().push((t.id, i)));
        adapter.click(99);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_diff_unchanged_list_emits_nothing() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        adapter.set_tasks(Some(sample_three()));
        assert!(adapter.take_edits().is_empty());
    }

    #[test]
    fn test_diff_pure_append_emits_only_insertions() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        let mut next = sample_three();
        next.push(task(4, "delta"));
        adapter.set_tasks(Some(next));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Inserted { index: 3 }]);
    }

    #[test]
    fn test_diff_pure_removal_emits_only_removals() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        adapter.set_tasks(Some(vec![task(1, "alpha"), task(3, "gamma")]));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Removed { index: 1 }]);
    }

    #[test]
    fn test_diff_content_edit_emits_only_change() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        let mut next = sample_three();
        next[2] = task(3, "gamma v2");
        adapter.set_tasks(Some(next));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Changed { index: 2 }]);
    }

    #[test]
    fn test_diff_reorder_emits_moves() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        adapter.set_tasks(Some(sample_three()));
        adapter.take_edits();

        // [1,2,3] -> [3,1,2]: one move suffices.
        adapter.set_tasks(Some(vec![task(3, "gamma"), task(1, "alpha"), task(2, "beta")]));
        assert_eq!(adapter.take_edits(), vec![ListEdit::Moved { from: 2, to: 0 }]);
        assert_eq!(adapter.get(0), Some(&task(3, "gamma")));
    }

    #[test]
    fn test_diff_script_replays_old_into_new() {
        let cases: Vec<(Vec<Task>, Vec<Task>)> = vec![
            (sample_three(), vec![]),
            (vec![], sample_three()),
            (
                sample_three(),
                vec![task(4, "delta"), task(2, "beta v2"), task(1, "alpha")],
            ),
            (
                vec![task(1, "a"), task(2, "b"), task(3, "c"), task(4, "d")],
                vec![task(3, "c"), task(5, "e"), task(1, "a v2"), task(4, "d")],
            ),
        ];

        for (old, new) in cases {
            let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
            adapter.set_tasks(Some(old.clone()));
            adapter.take_edits();

            adapter.set_tasks(Some(new.clone()));
            let edits = adapter.take_edits();
            assert_eq!(replay(&old, &edits, adapter.tasks()), new);
            assert_eq!(adapter.tasks(), new.as_slice());
        }
    }

    #[test]
    fn test_count_queries() {
        let mut adapter = TaskAdapter::new(RefreshStrategy::Diff);
        assert!(adapter.is_empty());
        adapter.set_tasks(Some(sample_three()));
        assert_eq!(adapter.len(), 3);
        assert!(!adapter.is_empty());
        assert_eq!(adapter.position_of(3), Some(2));
        assert_eq!(adapter.position_of(99), None);
    }
}
