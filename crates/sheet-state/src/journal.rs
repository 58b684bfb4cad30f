//! `CommandJournal` (C9, `spec.md` §4.8): a LIFO undo stack of reversible
//! commands with a bounded memory budget, plus a redo stack that is cleared
//! by any new push. Generalizes the teacher's `core-state::UndoEngine` from
//! whole-buffer snapshot clone+hash-dedupe to arbitrary `Command` objects —
//! the bounded-history, oldest-first eviction, and redo-clearing policy
//! carry over directly; snapshot hashing does not (there is no single
//! buffer to hash, and `Command` equality isn't assumed).

use crate::command::Command;
use crate::error::StateError;

/// Default memory ceiling: 64 MiB (`spec.md` §4.8).
pub const DEFAULT_MEMORY_BUDGET_BYTES: usize = 64 * 1024 * 1024;
/// Default command-count ceiling, whichever binds first (`spec.md` §4.8).
pub const DEFAULT_MAX_COMMANDS: usize = 500;
/// Coalescing window: two adjacent pushes sharing a `coalesce_key` within
/// this many milliseconds merge into one undo step (`spec.md` §4.8).
pub const DEFAULT_COALESCE_WINDOW_MS: u64 = 500;

pub struct CommandJournal {
    undo_stack: Vec<Box<dyn Command>>,
    redo_stack: Vec<Box<dyn Command>>,
    memory_budget_bytes: usize,
    max_commands: usize,
    coalesce_window_ms: u64,
    last_push_ms: Option<u64>,
    next_id: u64,
}

impl Default for CommandJournal {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandJournal {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            memory_budget_bytes: DEFAULT_MEMORY_BUDGET_BYTES,
            max_commands: DEFAULT_MAX_COMMANDS,
            coalesce_window_ms: DEFAULT_COALESCE_WINDOW_MS,
            last_push_ms: None,
            next_id: 1,
        }
    }

    pub fn with_limits(mut self, memory_budget_bytes: usize, max_commands: usize) -> Self {
        self.memory_budget_bytes = memory_budget_bytes;
        self.max_commands = max_commands;
        self
    }

    /// Next identifier a caller should hand to a freshly constructed
    /// `Command` before pushing it (`spec.md` §3 `Command.id`).
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    fn total_memory(&self) -> usize {
        self.undo_stack.iter().map(|c| c.memory_size()).sum()
    }

    /// Apply `command` and push it onto the undo stack, clearing the redo
    /// stack (`spec.md` §4.8: "a new mutation truncates the redo tail").
    /// Coalesces into the top of the stack when both share a
    /// `coalesce_key`, the top accepts the absorb, and `now_ms` falls
    /// within the coalescing window of the last push.
    pub fn push(&mut self, mut command: Box<dyn Command>, now_ms: u64) {
        command.apply();
        self.redo_stack.clear();

        let within_window = self
            .last_push_ms
            .is_some_and(|last| now_ms.saturating_sub(last) <= self.coalesce_window_ms);
        let coalesced = within_window
            && command.coalesce_key().is_some()
            && self.undo_stack.last().is_some_and(|top| top.coalesce_key() == command.coalesce_key())
            && self
                .undo_stack
                .last_mut()
                .is_some_and(|top| top.try_absorb(command.as_ref()));

        if !coalesced {
            self.undo_stack.push(command);
        }
        self.last_push_ms = Some(now_ms);

        while self.undo_stack.len() > self.max_commands || self.total_memory() > self.memory_budget_bytes {
            if self.undo_stack.len() <= 1 {
                break;
            }
            self.undo_stack.remove(0);
        }

        tracing::debug!(
            target: "state.journal",
            undo_depth = self.undo_stack.len(),
            redo_depth = self.redo_stack.len(),
            coalesced,
            "push"
        );
    }

    /// Pop the top undo entry and revert it, moving it to the redo stack.
    /// Returns `false` (no-op) if the undo stack is empty.
    pub fn undo(&mut self) -> Result<bool, StateError> {
        let Some(mut command) = self.undo_stack.pop() else {
            return Ok(false);
        };
        command.revert()?;
        tracing::debug!(target: "state.journal", undo_depth = self.undo_stack.len(), "undo");
        self.redo_stack.push(command);
        Ok(true)
    }

    /// Pop the top redo entry and re-apply it, moving it back to the undo
    /// stack. Returns `false` (no-op) if the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        let Some(mut command) = self.redo_stack.pop() else {
            return false;
        };
        command.apply();
        tracing::debug!(target: "state.journal", redo_depth = self.redo_stack.len(), "redo");
        self.undo_stack.push(command);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::filter::{ApplyFilterCommand, ClearAllFiltersCommand, FilterMap, FilterPredicate};

    fn map_with(entries: &[(u32, FilterPredicate)]) -> Rc<RefCell<FilterMap>> {
        let mut m = FilterMap::default();
        for (col, pred) in entries {
            m.insert(*col, pred.clone());
        }
        Rc::new(RefCell::new(m))
    }

    /// `spec.md` §8, Scenario C's full journal interleaving.
    #[test]
    fn scenario_c_interleaved_undo_redo() {
        let map = map_with(&[(0, FilterPredicate::Custom("PredicateA".into()))]);
        let mut journal = CommandJournal::new();

        let id = journal.next_id();
        journal.push(
            Box::new(ApplyFilterCommand::new(id, map.clone(), 0, FilterPredicate::Custom("PredicateB".into()))),
            0,
        );
        assert_eq!(map.borrow().get(&0), Some(&FilterPredicate::Custom("PredicateB".into())));

        let id = journal.next_id();
        journal.push(Box::new(ClearAllFiltersCommand::new(id, map.clone())), 10_000);
        assert!(map.borrow().is_empty());

        journal.undo().unwrap();
        assert_eq!(map.borrow().get(&0), Some(&FilterPredicate::Custom("PredicateB".into())));
        journal.undo().unwrap();
        assert_eq!(map.borrow().get(&0), Some(&FilterPredicate::Custom("PredicateA".into())));
        journal.redo();
        assert_eq!(map.borrow().get(&0), Some(&FilterPredicate::Custom("PredicateB".into())));
        journal.redo();
        assert!(map.borrow().is_empty());
    }

    #[test]
    fn push_clears_redo_stack() {
        let map = map_with(&[]);
        let mut journal = CommandJournal::new();
        let id = journal.next_id();
        journal.push(Box::new(ApplyFilterCommand::new(id, map.clone(), 0, FilterPredicate::GreaterThan(1.0))), 0);
        journal.undo().unwrap();
        assert_eq!(journal.redo_depth(), 1);
        let id = journal.next_id();
        journal.push(Box::new(ApplyFilterCommand::new(id, map.clone(), 1, FilterPredicate::LessThan(1.0))), 0);
        assert_eq!(journal.redo_depth(), 0);
    }

    #[test]
    fn coalesces_same_column_within_window() {
        let map = map_with(&[]);
        let mut journal = CommandJournal::new();
        let id = journal.next_id();
        journal.push(Box::new(ApplyFilterCommand::new(id, map.clone(), 0, FilterPredicate::Contains("a".into()))), 0);
        let id = journal.next_id();
        journal.push(Box::new(ApplyFilterCommand::new(id, map.clone(), 0, FilterPredicate::Contains("ab".into()))), 100);
        assert_eq!(journal.undo_depth(), 1, "same-column edits within the window should merge");
        journal.undo().unwrap();
        assert!(!map.borrow().contains_key(&0), "one undo should remove the entire coalesced run");
    }

    #[test]
    fn does_not_coalesce_past_the_window() {
        let map = map_with(&[]);
        let mut journal = CommandJournal::new();
        let id = journal.next_id();
        journal.push(Box::new(ApplyFilterCommand::new(id, map.clone(), 0, FilterPredicate::Contains("a".into()))), 0);
        let id = journal.next_id();
        journal.push(
            Box::new(ApplyFilterCommand::new(id, map.clone(), 0, FilterPredicate::Contains("ab".into()))),
            DEFAULT_COALESCE_WINDOW_MS + 1,
        );
        assert_eq!(journal.undo_depth(), 2);
    }

    #[test]
    fn eviction_respects_max_commands() {
        let map = map_with(&[]);
        let mut journal = CommandJournal::new().with_limits(DEFAULT_MEMORY_BUDGET_BYTES, 3);
        for col in 0..5u32 {
            let id = journal.next_id();
            // Far enough apart in time that nothing coalesces.
            journal.push(
                Box::new(ApplyFilterCommand::new(id, map.clone(), col, FilterPredicate::GreaterThan(0.0))),
                col as u64 * 10_000,
            );
        }
        assert_eq!(journal.undo_depth(), 3);
    }

    #[test]
    fn undo_on_empty_stack_is_a_noop() {
        let mut journal = CommandJournal::new();
        assert_eq!(journal.undo().unwrap(), Ok(false).unwrap());
        assert!(!journal.redo());
    }
}
