//! The intent vocabulary (`spec.md` §4.4, §9 "Dynamic intent
//! discrimination"). A tagged enum, as the design notes direct, rather than
//! the source's dynamically dispatched `type` string.
//!
//! Sentinel row/column values for `InsertRows`/`InsertColumns` use `i64` so
//! `-1`/`-2` ("above active cell" / "below active cell", `spec.md` §4.4) are
//! representable without a separate out-of-band flag; `sheet-actions::reduce`
//! resolves them against `activeCell` before emitting effects.

use sheet_model::{Coord, Format, SelectionRange};

use crate::raw::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEndTarget {
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEnterKey {
    Tab,
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardActionKind {
    Copy,
    Cut,
    Paste,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoRedoKind {
    Undo,
    Redo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindReplaceMode {
    Find,
    Replace,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    // --- Pointer-originated (spec.md §4.4) ---
    SetActiveCell {
        cell: Coord,
    },
    ExtendSelection {
        to: Coord,
    },
    AddRange {
        cell: Coord,
    },
    BeginDragSelection {
        cell: Coord,
        additive: bool,
    },
    UpdateDragSelection {
        cell: Coord,
    },
    EndDragSelection,
    BeginFillDrag {
        source: SelectionRange,
    },
    UpdateFillDrag {
        target: Coord,
    },
    EndFillDrag,
    SelectRow {
        row: u32,
        extend: bool,
        additive: bool,
    },
    SelectColumn {
        col: u32,
        extend: bool,
        additive: bool,
    },
    SelectAll,
    BeginEdit {
        cell: Coord,
    },
    ShowContextMenu {
        at: Coord,
    },
    /// `row` sentinels: `-1` = above active cell, `-2` = below active cell.
    InsertRows {
        row: i64,
        count: u32,
    },
    DeleteRows {
        start_row: u32,
        end_row: u32,
    },
    /// `col` sentinels: `-1` = left of active cell, `-2` = right of active
    /// cell, mirroring `InsertRows`.
    InsertColumns {
        col: i64,
        count: u32,
    },
    DeleteColumns {
        start_col: u32,
        end_col: u32,
    },
    MergeCells,
    UnmergeCells,
    ShowFormatDialog,
    OpenFindReplace {
        mode: FindReplaceMode,
    },
    OpenSortDialog,
    OpenFilterDropdown {
        column: u32,
    },
    OpenDataValidation,

    // --- Keyboard-originated (spec.md §4.4) ---
    NavigateCell {
        direction: Direction,
        jump: bool,
        extend: bool,
    },
    NavigatePage {
        direction: Direction,
        extend: bool,
        page_size: u32,
    },
    NavigateHomeEnd {
        target: HomeEndTarget,
        document_level: bool,
        extend: bool,
    },
    TabEnterNavigate {
        key: TabEnterKey,
        reverse: bool,
    },
    StartEdit {
        seed: Option<char>,
    },
    ConfirmEdit,
    CancelEdit,
    EscapePressed,
    SelectAllCells,
    DeleteContents,
    ClipboardAction {
        action: ClipboardActionKind,
    },
    ApplyFormat {
        patch: Format,
    },
    UndoRedo {
        action: UndoRedoKind,
    },
}
