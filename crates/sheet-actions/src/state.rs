//! `SheetState`: everything the reducer (`spec.md` §4.4/§4.5) owns that is
//! not already owned by `sheet-model` or `sheet-merge` — selection geometry,
//! in-flight drag/fill tracking, the edit-mode state machine, and the
//! `SelectAll` dwell cycle.
//!
//! `CellDataSource`/`MergeIndex`/dimension data stay external, the same way
//! the teacher's `core-state::EditorState` borrows `core-text::Buffer`
//! rather than owning text storage itself.

use sheet_model::{MAX_COL, MAX_ROW, SelectionState};

use crate::drag::{DragState, FillDragState};
use crate::edit_state::EditState;

/// Everything `reduce` threads through a single intent. Produced fresh by
/// every call — `reduce` never mutates its input in place (`spec.md` §4.4:
/// "a pure function of the previous state and an intent").
#[derive(Debug, Clone, PartialEq)]
pub struct SheetState {
    pub selection: SelectionState,
    pub edit: EditState,
    pub drag: Option<DragState>,
    pub fill_drag: Option<FillDragState>,
    /// Stage of the `SelectAll` dwell cycle: 0 = none in progress, 1 =
    /// current region, 2 = used range, 3 = entire grid.
    pub select_all_stage: u8,
    pub last_select_all_at_ms: Option<u64>,
    /// Sheet bounds used for clamping. Defaults to the grammar's hard
    /// ceiling (`sheet_model::MAX_ROW`/`MAX_COL`); a host backed by a
    /// smaller configured sheet can narrow these (`spec.md` §6).
    pub max_row: u32,
    pub max_col: u32,
}

impl Default for SheetState {
    fn default() -> Self {
        Self {
            selection: SelectionState::default(),
            edit: EditState::default(),
            drag: None,
            fill_drag: None,
            select_all_stage: 0,
            last_select_all_at_ms: None,
            max_row: MAX_ROW,
            max_col: MAX_COL,
        }
    }
}

impl SheetState {
    pub fn at(active_cell: sheet_model::Coord) -> Self {
        Self {
            selection: SelectionState::new(active_cell),
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, max_row: u32, max_col: u32) -> Self {
        self.max_row = max_row;
        self.max_col = max_col;
        self
    }
}

/// What `reduce` hands back: the next state, plus the effects the host must
/// carry out (`spec.md` §6).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IntentResult {
    pub state: SheetState,
    pub effects: Vec<sheet_events::Effect>,
}

impl IntentResult {
    pub fn new(state: SheetState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: sheet_events::Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = sheet_events::Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}
