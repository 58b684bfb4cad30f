//! `sheet-events`: the shared event/intent/effect vocabulary — raw input
//! events, the `Intent` enum translators produce, and the `Effect` enum the
//! reducer hands back to the host (`spec.md` §4.4, §6).
//!
//! Unlike the teacher's `core-events`, there is no channel machinery here:
//! the core is called synchronously by a host frame loop, not driven by a
//! tokio event loop (`spec.md` §5; see `SPEC_FULL.md` §5 for the divergence).

pub mod effect;
pub mod intent;
pub mod raw;

pub use effect::{Effect, Rect};
pub use intent::{
    ClipboardActionKind, FindReplaceMode, HomeEndTarget, Intent, TabEnterKey, UndoRedoKind,
};
pub use raw::{
    Direction, KeyCode, KeyEvent, Modifiers, PointerButton, PointerEvent, PointerPhase,
    PointerType,
};
