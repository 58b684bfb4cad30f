//! The effect stream (`spec.md` §6 "Produced: effect stream"). Effects are
//! requests the reducer hands back to the host; the core never performs
//! them itself (no clipboard bytes, no store mutation other than through the
//! external `CellDataSource`/`Command` APIs the host wires in).

use sheet_model::{Coord, Format, SelectionRange};

use crate::intent::{ClipboardActionKind, FindReplaceMode, UndoRedoKind};

/// Pixel rectangle used to anchor host-rendered popovers (e.g. the filter
/// dropdown) to the cell that triggered them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ScrollTo {
        row: u32,
        col: u32,
    },
    BeginEdit {
        cell: Coord,
        initial_value: Option<String>,
    },
    ConfirmEdit {
        cell: Coord,
        buffer: String,
    },
    CancelEdit,
    Clipboard(ClipboardActionKind),
    DeleteContents,
    Fill {
        from: SelectionRange,
        to: SelectionRange,
    },
    ApplyFormat(Format),
    UndoRedo(UndoRedoKind),
    InsertRows {
        row: u32,
        count: u32,
    },
    DeleteRows {
        start_row: u32,
        end_row: u32,
    },
    InsertColumns {
        col: u32,
        count: u32,
    },
    DeleteColumns {
        start_col: u32,
        end_col: u32,
    },
    MergeCells {
        region: SelectionRange,
    },
    UnmergeCells {
        anchor: Coord,
    },
    ShowFormatDialog,
    OpenFindReplace {
        mode: FindReplaceMode,
    },
    OpenSortDialog,
    OpenFilterDropdown {
        column: u32,
        anchor_rect: Rect,
    },
    OpenDataValidation,
    ShowContextMenu {
        at: Coord,
    },
    /// The "yield to the host's animation scheduling primitive" suspension
    /// point (`spec.md` §5): scroll and `UpdateDragSelection` coalesce to at
    /// most one of these per animation tick rather than one per intent.
    CoalescedRender,
}
