//! `EditModeManager` (`spec.md` §4.5): the `Navigate`/`Enter`/`Edit`/`Point`
//! transition table. `reduce` consults this *before* its own selection
//! handling for every intent — when it reports `forward_to_selection =
//! false`, the selection geometry in `SheetState` is left untouched for
//! that intent (mirrors the teacher's `dispatcher::mode::handle_mode_change`
//! short-circuit in `core-actions`).

use sheet_events::{Direction, Effect, Intent};
use sheet_model::{Cell, CellDataSource, CellValue, Coord, format_a1};

use crate::edit_state::{EditMode, EditState};

pub struct EditManagerResult {
    pub effects: Vec<Effect>,
    /// When `true`, `reduce`'s own selection-intent match still runs for
    /// this intent after these effects are applied.
    pub forward_to_selection: bool,
}

impl EditManagerResult {
    fn consumed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            forward_to_selection: false,
        }
    }

    fn pass_through() -> Self {
        Self {
            effects: Vec::new(),
            forward_to_selection: true,
        }
    }
}

/// Render a cell's content as the text an edit buffer should start from.
fn cell_buffer_text(cell: &Cell) -> String {
    if let Some(formula) = &cell.formula {
        return formula.clone();
    }
    match &cell.value {
        CellValue::Empty => String::new(),
        CellValue::Number(n) => n.to_string(),
        CellValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        CellValue::Text(s) => s.clone(),
        CellValue::Error(e) => e.clone(),
        CellValue::Formatted(s) => s.clone(),
    }
}

pub fn handle(
    edit: &mut EditState,
    intent: &Intent,
    active_cell: Option<Coord>,
    cells: &dyn CellDataSource,
) -> EditManagerResult {
    match intent {
        Intent::StartEdit { seed } => {
            let Some(cell) = active_cell else {
                return EditManagerResult::pass_through();
            };
            edit.mode = EditMode::Enter;
            edit.editing_cell = Some(cell);
            edit.buffer = seed.map(|c| c.to_string()).unwrap_or_default();
            edit.caret = edit.buffer.chars().count();
            edit.point_cell = None;
            edit.point_anchor = None;
            edit.point_ref_start = None;
            EditManagerResult::consumed(vec![Effect::BeginEdit {
                cell,
                initial_value: seed.map(|c| c.to_string()),
            }])
        }
        Intent::BeginEdit { cell } => {
            let text = cells.get_cell(*cell).map(cell_buffer_text).unwrap_or_default();
            edit.mode = EditMode::Edit;
            edit.editing_cell = Some(*cell);
            edit.caret = text.chars().count();
            edit.point_cell = None;
            edit.point_anchor = None;
            edit.point_ref_start = None;
            let initial_value = if text.is_empty() { None } else { Some(text.clone()) };
            edit.buffer = text;
            EditManagerResult {
                effects: vec![Effect::BeginEdit { cell: *cell, initial_value }],
                // BeginEdit both enters edit mode and moves the active cell
                // (a click-to-edit selects the cell it targets).
                forward_to_selection: true,
            }
        }
        Intent::ConfirmEdit => {
            if edit.mode == EditMode::Navigate {
                return EditManagerResult::consumed(Vec::new());
            }
            let cell = edit.editing_cell.unwrap_or_else(|| active_cell.unwrap_or(Coord::ORIGIN));
            let buffer = edit.buffer.clone();
            *edit = EditState::navigate();
            EditManagerResult::consumed(vec![Effect::ConfirmEdit { cell, buffer }])
        }
        Intent::CancelEdit => {
            if edit.mode == EditMode::Navigate {
                return EditManagerResult::consumed(Vec::new());
            }
            *edit = EditState::navigate();
            EditManagerResult::consumed(vec![Effect::CancelEdit])
        }
        Intent::EscapePressed => {
            if edit.mode == EditMode::Navigate {
                EditManagerResult::pass_through()
            } else {
                *edit = EditState::navigate();
                EditManagerResult::consumed(vec![Effect::CancelEdit])
            }
        }
        Intent::TabEnterNavigate { .. } => {
            if edit.mode == EditMode::Navigate {
                EditManagerResult::pass_through()
            } else {
                let cell = edit.editing_cell.unwrap_or_else(|| active_cell.unwrap_or(Coord::ORIGIN));
                let buffer = edit.buffer.clone();
                *edit = EditState::navigate();
                EditManagerResult {
                    effects: vec![Effect::ConfirmEdit { cell, buffer }],
                    forward_to_selection: true,
                }
            }
        }
        Intent::NavigateCell { direction, .. } => {
            if edit.mode == EditMode::Navigate {
                return EditManagerResult::pass_through();
            }
            match direction {
                Direction::Left => edit.move_caret(-1),
                Direction::Right => edit.move_caret(1),
                Direction::Up => edit.move_caret(i32::MIN as isize),
                Direction::Down => edit.move_caret(i32::MAX as isize),
            }
            EditManagerResult::consumed(Vec::new())
        }
        Intent::NavigatePage { .. } | Intent::NavigateHomeEnd { .. } => {
            if edit.mode == EditMode::Navigate {
                EditManagerResult::pass_through()
            } else {
                EditManagerResult::consumed(Vec::new())
            }
        }
        Intent::SetActiveCell { cell } | Intent::ExtendSelection { to: cell } if edit.mode == EditMode::Point => {
            let extend = matches!(intent, Intent::ExtendSelection { .. });
            let anchor = if extend { edit.point_anchor.unwrap_or(*cell) } else { *cell };
            let reference = if extend && anchor != *cell {
                format!("{}:{}", format_a1(anchor), format_a1(*cell))
            } else {
                format_a1(*cell)
            };
            replace_reference(edit, &reference);
            edit.point_cell = Some(*cell);
            edit.point_anchor = Some(anchor);
            EditManagerResult::consumed(Vec::new())
        }
        _ => EditManagerResult::pass_through(),
    }
}

/// Replace the span of the previously-inserted point-mode reference (if any)
/// with `reference`, rather than appending after it (`spec.md` §4.5: a point
/// click "inserts/replaces a formula reference at the caret"). The first
/// click in a point session has no prior span, so `point_ref_start` falls
/// back to the current caret and the reference is inserted there.
fn replace_reference(edit: &mut EditState, reference: &str) {
    let start = edit.point_ref_start.unwrap_or(edit.caret);
    let end = edit.caret;
    edit.replace_char_range(start, end, reference);
    edit.point_ref_start = Some(start);
    edit.mode = EditMode::Point;
}
