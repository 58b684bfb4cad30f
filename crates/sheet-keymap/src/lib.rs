//! `sheet-keymap`: the keyboard half of the intent pipeline (`spec.md`
//! §4.6) — `KeyboardTranslator`, the data-driven keybinding table, and the
//! mode classification it dispatches on.

pub mod context;
pub mod table;

pub use context::{KeymapContext, KeymapMode, When};
pub use table::{KeyBinding, KeyboardTranslator, default_keymap};
