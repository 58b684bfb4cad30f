//! Raw input events: what `sheet-keymap`/`sheet-actions`'s pointer
//! translator consume before producing an [`crate::intent::Intent`]. These
//! are the spreadsheet analogue of the teacher's `core-events::KeyEvent` /
//! `MouseEvent` — normalized, device-originated, and otherwise uninterpreted.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        const CTRL  = 0b0000_0001;
        const ALT   = 0b0000_0010;
        const SHIFT = 0b0000_0100;
        const META  = 0b0000_1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Arrow(Direction),
    PageUp,
    PageDown,
    Home,
    End,
    Tab,
    Enter,
    Escape,
    Backspace,
    Delete,
    F(u8),
}

/// A normalized keystroke. `is_composing` mirrors the teacher's IME guard
/// (`spec.md` §4.6: "IME composition ... is never translated") — the
/// keymap must check it before resolving a binding, not after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: Modifiers,
    pub is_composing: bool,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: Modifiers) -> Self {
        Self {
            code,
            mods,
            is_composing: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerType {
    Mouse,
    Touch,
    Pen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// Raw pointer sample. Coordinates are in the same pre-zoom pixel space as
/// `RenderFrame` (`sheet-render`'s `pointToCell` is the intended consumer
/// for resolving `x`/`y` to a cell).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u64,
    pub pointer_type: PointerType,
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
    pub mods: Modifiers,
    pub button: Option<PointerButton>,
    /// Milliseconds since an arbitrary epoch fixed by the host; used only
    /// for relative comparisons (drag threshold timing, long-press, double
    /// click), never rendered.
    pub timestamp_ms: u64,
}
