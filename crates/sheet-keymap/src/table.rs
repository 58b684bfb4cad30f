//! `KeyboardTranslator` (C7): a stateless `(KeyEvent, mode) -> Intent | None`
//! function backed by a data table (`spec.md` §4.6). Each binding pairs a
//! predicate over a `KeyEvent` with a builder that turns it into an
//! `Intent`; `default_keymap()` reproduces §4.6's table verbatim. A host can
//! swap in its own `Vec<KeyBinding>` via `KeyboardTranslator::with_bindings`
//! to override shortcuts, matching the spec's "overridable by configuration".
//!
//! Unlike the teacher's `MappingTrie` (`core-keymap`), there is no multi-key
//! composition here — every spreadsheet binding resolves from a single
//! keystroke, so a flat linear scan replaces the trie walk. The trie/
//! `PendingContext` machinery is still available to a host that wants
//! multi-key chords; see `DESIGN.md`.

use sheet_events::{
    ClipboardActionKind, Direction, HomeEndTarget, Intent, KeyCode, KeyEvent, Modifiers,
    TabEnterKey, UndoRedoKind,
};
use sheet_model::Format;

use crate::context::{KeymapContext, KeymapMode, When};

type Matcher = fn(&KeyEvent) -> bool;
type Builder = fn(&KeyEvent, &KeymapContext) -> Intent;

pub struct KeyBinding {
    pub label: &'static str,
    pub when: When,
    matcher: Matcher,
    builder: Builder,
}

impl KeyBinding {
    const fn new(label: &'static str, when: When, matcher: Matcher, builder: Builder) -> Self {
        Self {
            label,
            when,
            matcher,
            builder,
        }
    }
}

fn is_arrow(e: &KeyEvent) -> bool {
    matches!(e.code, KeyCode::Arrow(_)) && !e.mods.contains(Modifiers::ALT)
}
fn build_arrow(e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    let direction = match e.code {
        KeyCode::Arrow(d) => d,
        _ => unreachable!(),
    };
    Intent::NavigateCell {
        direction,
        jump: e.mods.contains(Modifiers::CTRL),
        extend: e.mods.contains(Modifiers::SHIFT),
    }
}

fn is_page(e: &KeyEvent) -> bool {
    matches!(e.code, KeyCode::PageUp | KeyCode::PageDown)
        && !e.mods.contains(Modifiers::CTRL)
        && !e.mods.contains(Modifiers::ALT)
}
fn build_page(e: &KeyEvent, ctx: &KeymapContext) -> Intent {
    let direction = if e.code == KeyCode::PageUp {
        Direction::Up
    } else {
        Direction::Down
    };
    Intent::NavigatePage {
        direction,
        extend: e.mods.contains(Modifiers::SHIFT),
        page_size: ctx.page_size,
    }
}

fn is_home_end(e: &KeyEvent) -> bool {
    matches!(e.code, KeyCode::Home | KeyCode::End) && !e.mods.contains(Modifiers::ALT)
}
fn build_home_end(e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    let target = if e.code == KeyCode::Home {
        HomeEndTarget::Home
    } else {
        HomeEndTarget::End
    };
    Intent::NavigateHomeEnd {
        target,
        document_level: e.mods.contains(Modifiers::CTRL),
        extend: e.mods.contains(Modifiers::SHIFT),
    }
}

fn is_tab_enter(e: &KeyEvent) -> bool {
    matches!(e.code, KeyCode::Tab | KeyCode::Enter)
        && !e.mods.contains(Modifiers::CTRL)
        && !e.mods.contains(Modifiers::ALT)
}
fn build_tab_enter(e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    let key = if e.code == KeyCode::Tab {
        TabEnterKey::Tab
    } else {
        TabEnterKey::Enter
    };
    Intent::TabEnterNavigate {
        key,
        reverse: e.mods.contains(Modifiers::SHIFT),
    }
}

fn is_f2(e: &KeyEvent) -> bool {
    e.code == KeyCode::F(2) && e.mods.is_empty()
}
fn build_f2(_e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    Intent::StartEdit { seed: None }
}

fn is_escape(e: &KeyEvent) -> bool {
    e.code == KeyCode::Escape
}
fn build_escape(_e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    Intent::EscapePressed
}

fn is_delete(e: &KeyEvent) -> bool {
    matches!(e.code, KeyCode::Delete | KeyCode::Backspace) && e.mods.is_empty()
}
fn build_delete(_e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    Intent::DeleteContents
}

fn is_clipboard(e: &KeyEvent) -> bool {
    e.mods.contains(Modifiers::CTRL)
        && !e.mods.contains(Modifiers::ALT)
        && matches!(
            e.code,
            KeyCode::Char('c')
                | KeyCode::Char('C')
                | KeyCode::Char('x')
                | KeyCode::Char('X')
                | KeyCode::Char('v')
                | KeyCode::Char('V')
        )
}
fn build_clipboard(e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    let action = match e.code {
        KeyCode::Char('c') | KeyCode::Char('C') => ClipboardActionKind::Copy,
        KeyCode::Char('x') | KeyCode::Char('X') => ClipboardActionKind::Cut,
        _ => ClipboardActionKind::Paste,
    };
    Intent::ClipboardAction { action }
}

fn is_undo_redo(e: &KeyEvent) -> bool {
    e.mods.contains(Modifiers::CTRL)
        && !e.mods.contains(Modifiers::ALT)
        && matches!(
            e.code,
            KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('y') | KeyCode::Char('Y')
        )
}
fn build_undo_redo(e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    let is_z = matches!(e.code, KeyCode::Char('z') | KeyCode::Char('Z'));
    let action = if is_z {
        if e.mods.contains(Modifiers::SHIFT) {
            UndoRedoKind::Redo
        } else {
            UndoRedoKind::Undo
        }
    } else {
        UndoRedoKind::Redo
    };
    Intent::UndoRedo { action }
}

fn is_select_all(e: &KeyEvent) -> bool {
    e.mods.contains(Modifiers::CTRL)
        && !e.mods.contains(Modifiers::SHIFT)
        && !e.mods.contains(Modifiers::ALT)
        && matches!(e.code, KeyCode::Char('a') | KeyCode::Char('A'))
}
fn build_select_all(_e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    Intent::SelectAllCells
}

fn is_apply_format(e: &KeyEvent) -> bool {
    e.mods.contains(Modifiers::CTRL)
        && !e.mods.contains(Modifiers::ALT)
        && matches!(
            e.code,
            KeyCode::Char('b')
                | KeyCode::Char('B')
                | KeyCode::Char('i')
                | KeyCode::Char('I')
                | KeyCode::Char('u')
                | KeyCode::Char('U')
        )
}
fn build_apply_format(e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    let patch = match e.code {
        KeyCode::Char('b') | KeyCode::Char('B') => Format {
            bold: Some(true),
            ..Default::default()
        },
        KeyCode::Char('i') | KeyCode::Char('I') => Format {
            italic: Some(true),
            ..Default::default()
        },
        _ => Format {
            underline: Some(true),
            ..Default::default()
        },
    };
    Intent::ApplyFormat { patch }
}

fn is_printable(e: &KeyEvent) -> bool {
    matches!(e.code, KeyCode::Char(_))
        && !e.mods.contains(Modifiers::CTRL)
        && !e.mods.contains(Modifiers::ALT)
}
fn build_printable(e: &KeyEvent, _ctx: &KeymapContext) -> Intent {
    let ch = match e.code {
        KeyCode::Char(c) => c,
        _ => unreachable!(),
    };
    Intent::StartEdit { seed: Some(ch) }
}

/// `spec.md` §4.6's table, reproduced verbatim. Order matters: the first
/// matching binding wins, so more specific bindings (`Ctrl+A`) must precede
/// any binding they could otherwise fall through to — though here no two
/// bindings' predicates actually overlap, since `is_printable` excludes
/// every modifier combination the Ctrl-prefixed bindings require.
pub fn default_keymap() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("arrow", When::Navigation, is_arrow, build_arrow),
        KeyBinding::new("page", When::Navigation, is_page, build_page),
        KeyBinding::new("home_end", When::Navigation, is_home_end, build_home_end),
        KeyBinding::new("tab_enter", When::Always, is_tab_enter, build_tab_enter),
        KeyBinding::new("f2", When::Navigation, is_f2, build_f2),
        KeyBinding::new("escape", When::Always, is_escape, build_escape),
        KeyBinding::new("delete", When::Navigation, is_delete, build_delete),
        KeyBinding::new("clipboard", When::Always, is_clipboard, build_clipboard),
        KeyBinding::new("undo_redo", When::Always, is_undo_redo, build_undo_redo),
        KeyBinding::new(
            "select_all",
            When::Navigation,
            is_select_all,
            build_select_all,
        ),
        KeyBinding::new(
            "apply_format",
            When::Always,
            is_apply_format,
            build_apply_format,
        ),
        KeyBinding::new(
            "printable",
            When::Navigation,
            is_printable,
            build_printable,
        ),
    ]
}

pub struct KeyboardTranslator {
    bindings: Vec<KeyBinding>,
}

impl Default for KeyboardTranslator {
    fn default() -> Self {
        Self::new_default()
    }
}

impl KeyboardTranslator {
    pub fn new_default() -> Self {
        Self {
            bindings: default_keymap(),
        }
    }

    pub fn with_bindings(bindings: Vec<KeyBinding>) -> Self {
        Self { bindings }
    }

    /// `spec.md` §4.6: IME composition is never translated, and `Cmd` folds
    /// into `Ctrl` on platforms where `ctx.meta_as_ctrl` is set, before any
    /// binding is evaluated.
    pub fn translate(&self, event: &KeyEvent, mode: KeymapMode, ctx: &KeymapContext) -> Option<Intent> {
        if event.is_composing {
            return None;
        }
        let mut normalized = *event;
        if ctx.meta_as_ctrl && normalized.mods.contains(Modifiers::META) {
            normalized.mods |= Modifiers::CTRL;
        }
        for binding in &self.bindings {
            if !binding.when.matches(mode) {
                continue;
            }
            if (binding.matcher)(&normalized) {
                tracing::trace!(target: "keymap.translate", binding = binding.label, "matched");
                return Some((binding.builder)(&normalized, ctx));
            }
        }
        None
    }
}
