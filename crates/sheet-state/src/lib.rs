//! `sheet-state`: the filter/command reversibility layer (C9, `spec.md`
//! §4.8) — a reversible `Command` contract, the bounded `CommandJournal`
//! undo/redo stack built on it, and the concrete filter commands the rest
//! of the workspace can push onto one.

pub mod command;
pub mod error;
pub mod filter;
pub mod journal;

pub use command::Command;
pub use error::StateError;
pub use filter::{ApplyFilterCommand, ClearAllFiltersCommand, FilterMap, FilterPredicate};
pub use journal::{
    CommandJournal, DEFAULT_COALESCE_WINDOW_MS, DEFAULT_MAX_COMMANDS, DEFAULT_MEMORY_BUDGET_BYTES,
};
