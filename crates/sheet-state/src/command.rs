//! The `Command` contract (`spec.md` §3/§4.8): `{ id, kind, description,
//! apply(), revert(), memorySize() }`, with `apply; revert` a fixed point on
//! whatever domain the command touches (`spec.md` §8, property 5).
//!
//! `Command` extends `Any` so [`crate::journal::CommandJournal`] can
//! downcast a freshly pushed command against the top of the undo stack when
//! deciding whether to coalesce (`spec.md` §4.8: "commands for the same
//! conceptual action may declare a coalesce key ... when two adjacent stack
//! entries share the key and were pushed within a 500 ms window, they merge
//! on push"). This mirrors the `dyn Any` downcasting the example pack uses
//! for heterogeneous table cell storage.

use std::any::Any;
use std::fmt::Debug;

use crate::error::StateError;

pub trait Command: Debug {
    fn id(&self) -> u64;
    fn kind(&self) -> &'static str;
    fn description(&self) -> String;

    /// Perform the mutation. Called exactly once by
    /// [`crate::journal::CommandJournal::push`] at push time, and again by
    /// `redo`.
    fn apply(&mut self);

    /// Undo the mutation. Called by `undo`. Implementations that can be
    /// misused directly (outside the journal) should return
    /// [`StateError::IllegalState`] if `revert` is called without a prior
    /// `apply` — the journal itself never triggers that path.
    fn revert(&mut self) -> Result<(), StateError>;

    /// Approximate retained memory, used for [`crate::journal::CommandJournal`]'s
    /// memory-bounded eviction policy (`spec.md` §4.8: "64 MiB or 500
    /// commands, whichever binds first").
    fn memory_size(&self) -> usize;

    /// Commands sharing a non-`None` key, pushed within the journal's
    /// coalescing window, are candidates to merge into one undo step
    /// (`spec.md` §4.8). `None` (the default) means "never coalesce."
    fn coalesce_key(&self) -> Option<&str> {
        None
    }

    /// Absorb `later`'s effect into `self` so that undoing `self` once
    /// undoes the whole coalesced run. Only called when `coalesce_key`
    /// matched and the push falls inside the coalescing window; `later` has
    /// already had `apply()` called on it by the time this runs, so
    /// implementations only need to update their own redo-relevant state
    /// (what a subsequent `apply()` would reapply), not perform the
    /// mutation again. Returns `true` if the absorb succeeded (caller drops
    /// `later` without pushing it as a separate entry).
    fn try_absorb(&mut self, later: &dyn Command) -> bool {
        let _ = later;
        false
    }

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
