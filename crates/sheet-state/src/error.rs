//! Error taxonomy for the command journal. `sheet-model` is the only
//! sibling this crate borrows a type from; everything else about
//! reversibility lives here.

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum StateError {
    /// `Command::revert` called on a command that was never applied, or was
    /// already reverted (`spec.md` §7: defensive, unreachable through the
    /// journal's own usage, but a `Command` can be constructed and misused
    /// directly by a host).
    #[error("revert called on a command with no matching apply")]
    IllegalState,
}
