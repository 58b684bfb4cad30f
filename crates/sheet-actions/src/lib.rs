//! `sheet-actions`: the intent pipeline's stateful half (`spec.md` §4.4,
//! §4.5, §4.7) — the pure `reduce` reducer (C5), the edit-mode state
//! machine it consults (C6), and the stateful `PointerTranslator` (C8) that
//! produces the `Intent`s `reduce` consumes.
//!
//! Grounded in the teacher's `core-actions`: `reduce` generalizes
//! `dispatcher::dispatch`'s per-`Action` match into a per-`Intent` match,
//! `edit_mode_manager` generalizes `dispatcher::mode::handle_mode_change`,
//! and `PointerTranslator` plays the role of `core-actions::key_translator`
//! for the pointer half of the input surface.

pub mod drag;
pub mod edit_mode_manager;
pub mod edit_state;
pub mod navigation;
pub mod pointer_translator;
pub mod reduce;
pub mod state;

pub use drag::{DragState, FillDragState};
pub use edit_mode_manager::{EditManagerResult, handle as handle_edit_mode};
pub use edit_state::{EditMode, EditState};
pub use pointer_translator::{PointerHit, PointerTranslator};
pub use reduce::reduce as reduce_intent;
pub use state::{IntentResult, SheetState};
