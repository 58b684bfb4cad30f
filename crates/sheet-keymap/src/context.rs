//! `KeymapMode`/`When`: the mode-awareness half of the keybinding table
//! (`spec.md` §4.6's `when ∈ {always, navigation, editing}` column).
//!
//! This is deliberately a coarser classification than
//! `sheet_actions::EditMode`'s four states — `sheet-keymap` does not depend
//! on `sheet-actions` (that dependency runs the other way: the host calls
//! the translator, then the reducer), so it only needs to know whether the
//! caller is currently composing cell content or not.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapMode {
    Navigation,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum When {
    Always,
    Navigation,
    Editing,
}

impl When {
    pub fn matches(self, mode: KeymapMode) -> bool {
        matches!(
            (self, mode),
            (When::Always, _)
                | (When::Navigation, KeymapMode::Navigation)
                | (When::Editing, KeymapMode::Editing)
        )
    }
}

/// The configuration knobs `translate` needs but that live in
/// `sheet-config::Config` (`spec.md` §6): `pageSize` for
/// `NavigatePage`, and whether `Cmd` is folded into `Ctrl` for this
/// platform. Kept as a small standalone struct rather than a dependency on
/// `sheet-config` so `sheet-keymap` stays a leaf crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeymapContext {
    pub page_size: u32,
    pub meta_as_ctrl: bool,
}

impl Default for KeymapContext {
    fn default() -> Self {
        Self {
            page_size: 20,
            meta_as_ctrl: cfg!(target_os = "macos"),
        }
    }
}
