//! `reduce` (`spec.md` §4.4, component C5): `fn(&SheetState, Intent) ->
//! IntentResult`, a pure function of the previous state and one intent.
//! Mirrors the shape of the teacher's `dispatcher::dispatch`, generalized
//! from a `DispatchResult` flag struct to an explicit effect list, and from
//! `Action` (text-editor commands) to this workspace's spreadsheet `Intent`
//! vocabulary.

use sheet_events::{Effect, Intent, Rect, TabEnterKey};
use sheet_model::{CellDataSource, Coord, SelectionRange, SelectionState};

use crate::drag::{DragState, FillDragState};
use crate::edit_mode_manager;
use crate::navigation::{current_region, navigate_target, step_one};
use crate::state::{IntentResult, SheetState};

const SELECT_ALL_DWELL_MS: u64 = 1000;

/// `now_ms` feeds only the `SelectAll` dwell cycle (`spec.md` §4.4,
/// resolved Open Question (a): "a 1000ms dwell window"). Every other intent
/// is handled without reference to wall-clock time, keeping `reduce`
/// otherwise a pure function of its two primary arguments.
pub fn reduce(
    state: &SheetState,
    intent: Intent,
    cells: &dyn CellDataSource,
    now_ms: u64,
) -> IntentResult {
    let mut next = state.clone();
    if !matches!(intent, Intent::SelectAll | Intent::SelectAllCells) {
        next.select_all_stage = 0;
    }

    // Drag/fill-drag cancellation takes priority over edit-mode handling:
    // `EscapePressed` while a gesture is in flight reverts the gesture, not
    // the (unrelated) edit buffer (`spec.md` §5 cancellation semantics).
    if matches!(intent, Intent::EscapePressed) {
        if let Some(drag) = next.drag.take() {
            cancel_drag(&mut next.selection, drag);
            return IntentResult::new(next);
        }
        if let Some(fill) = next.fill_drag.take() {
            next.selection = fill.pre_drag_selection;
            return IntentResult::new(next);
        }
    }

    let edit_outcome = edit_mode_manager::handle(&mut next.edit, &intent, next.selection.active_cell, cells);
    if !edit_outcome.forward_to_selection {
        return IntentResult::new(next).with_effects(edit_outcome.effects);
    }
    let mut effects = edit_outcome.effects;

    match intent {
        Intent::SetActiveCell { cell } => {
            next.selection.set_active_cell(cell);
        }
        Intent::ExtendSelection { to } => match next.selection.active_cell {
            Some(active) => next.selection.set_last_range(SelectionRange { start: active, end: to }),
            None => next.selection.set_active_cell(to),
        },
        Intent::AddRange { cell } => add_range(&mut next.selection, cell),
        Intent::BeginDragSelection { cell, additive } => {
            next.fill_drag = None;
            next.drag = Some(DragState {
                start_cell: cell,
                additive,
                pre_drag_selection: next.selection.clone(),
            });
            if additive {
                add_range(&mut next.selection, cell);
            } else {
                next.selection.set_active_cell(cell);
            }
        }
        Intent::UpdateDragSelection { cell } => {
            if let Some(drag) = &next.drag {
                next.selection.active_cell = Some(drag.start_cell);
                next.selection.set_last_range(SelectionRange { start: drag.start_cell, end: cell });
            }
        }
        Intent::EndDragSelection => {
            next.drag = None;
        }
        Intent::BeginFillDrag { source } => {
            next.drag = None;
            next.fill_drag = Some(FillDragState::new(source, next.selection.clone()));
        }
        Intent::UpdateFillDrag { target } => {
            if let Some(fill) = next.fill_drag.as_mut() {
                let preview = fill_preview(fill.source, target);
                fill.current_preview = preview;
                next.selection.set_last_range(preview);
            }
        }
        Intent::EndFillDrag => {
            if let Some(fill) = next.fill_drag.take() {
                if fill.current_preview == fill.source {
                    next.selection = fill.pre_drag_selection;
                } else {
                    next.selection = SelectionState::new(fill.current_preview.start);
                    next.selection.set_last_range(fill.current_preview);
                    effects.push(Effect::Fill { from: fill.source, to: fill.current_preview });
                }
            }
        }
        Intent::SelectRow { row, extend, additive } => {
            select_line(&mut next.selection, RowOrCol::Row(row), extend, additive, next.max_row, next.max_col);
        }
        Intent::SelectColumn { col, extend, additive } => {
            select_line(&mut next.selection, RowOrCol::Col(col), extend, additive, next.max_row, next.max_col);
        }
        Intent::SelectAll | Intent::SelectAllCells => {
            let range = select_all_cycle(&mut next, now_ms, cells);
            let active = next.selection.active_cell.unwrap_or(Coord::ORIGIN);
            next.selection.active_cell = Some(active);
            next.selection.clear_ranges();
            next.selection.push_range(range);
        }
        Intent::BeginEdit { cell } => {
            next.selection.set_active_cell(cell);
        }
        Intent::ShowContextMenu { at } => {
            effects.push(Effect::ShowContextMenu { at });
        }
        Intent::InsertRows { row, count } => {
            let active = next.selection.active_cell.unwrap_or(Coord::ORIGIN);
            let resolved = resolve_insert_sentinel(row, active.row);
            effects.push(Effect::InsertRows { row: resolved, count });
        }
        Intent::DeleteRows { start_row, end_row } => {
            effects.push(Effect::DeleteRows { start_row, end_row });
        }
        Intent::InsertColumns { col, count } => {
            let active = next.selection.active_cell.unwrap_or(Coord::ORIGIN);
            let resolved = resolve_insert_sentinel(col, active.col);
            effects.push(Effect::InsertColumns { col: resolved, count });
        }
        Intent::DeleteColumns { start_col, end_col } => {
            effects.push(Effect::DeleteColumns { start_col, end_col });
        }
        Intent::MergeCells => {
            if let Some(range) = next.selection.last_range() {
                if !range.is_degenerate() {
                    effects.push(Effect::MergeCells { region: range });
                }
            }
        }
        Intent::UnmergeCells => {
            let anchor = next.selection.active_cell.unwrap_or(Coord::ORIGIN);
            effects.push(Effect::UnmergeCells { anchor });
        }
        Intent::ShowFormatDialog => effects.push(Effect::ShowFormatDialog),
        Intent::OpenFindReplace { mode } => effects.push(Effect::OpenFindReplace { mode }),
        Intent::OpenSortDialog => effects.push(Effect::OpenSortDialog),
        Intent::OpenFilterDropdown { column } => effects.push(Effect::OpenFilterDropdown {
            column,
            anchor_rect: Rect { x: 0.0, y: 0.0, width: 0.0, height: 0.0 },
        }),
        Intent::OpenDataValidation => effects.push(Effect::OpenDataValidation),
        Intent::NavigateCell { direction, jump, extend } => {
            navigate(&mut next.selection, direction, jump, extend, cells, next.max_row, next.max_col);
        }
        Intent::NavigatePage { direction, extend, page_size } => {
            navigate_page(&mut next.selection, direction, extend, page_size, next.max_row, next.max_col);
        }
        Intent::NavigateHomeEnd { target, document_level, extend } => {
            navigate_home_end(&mut next.selection, target, document_level, extend, cells, next.max_row, next.max_col);
        }
        Intent::TabEnterNavigate { key, reverse } => {
            next.selection = tab_enter_navigate(&next.selection, key, reverse, next.max_row, next.max_col);
        }
        Intent::EscapePressed => {
            // Reached only when not editing and not dragging (both cases
            // short-circuit earlier). First press: clears the selection
            // ranges but keeps `active_cell` (`spec.md` §4.4). Second press,
            // with editing inactive and ranges already empty: bubbles a
            // `CancelEdit` effect instead of re-clearing the same no-op.
            if next.selection.ranges.is_empty() {
                effects.push(Effect::CancelEdit);
            } else {
                next.selection.clear_ranges();
            }
        }
        Intent::StartEdit { .. } | Intent::ConfirmEdit | Intent::CancelEdit => {
            // Only reachable in the degenerate case the edit-mode manager
            // passes through unchanged (e.g. `StartEdit` with no active
            // cell); nothing for the selection reducer to do.
        }
        Intent::DeleteContents => effects.push(Effect::DeleteContents),
        Intent::ClipboardAction { action } => effects.push(Effect::Clipboard(action)),
        Intent::ApplyFormat { patch } => effects.push(Effect::ApplyFormat(patch)),
        Intent::UndoRedo { action } => effects.push(Effect::UndoRedo(action)),
    }

    IntentResult::new(next).with_effects(effects)
}

fn add_range(selection: &mut SelectionState, cell: Coord) {
    selection.active_cell = Some(cell);
    selection.push_range(SelectionRange::single(cell));
}

fn cancel_drag(selection: &mut SelectionState, drag: DragState) {
    if drag.additive {
        *selection = drag.pre_drag_selection;
    } else {
        selection.set_active_cell(drag.start_cell);
    }
}

fn resolve_insert_sentinel(value: i64, active_axis: u32) -> u32 {
    match value {
        -1 => active_axis,
        -2 => active_axis + 1,
        v if v >= 0 => v as u32,
        _ => active_axis,
    }
}

/// Axis-locked fill preview (`spec.md` §4.4): the axis with the larger
/// overshoot past `source`'s bounds wins, and the other axis stays frozen to
/// `source`'s extent.
fn fill_preview(source: SelectionRange, target: Coord) -> SelectionRange {
    let (r0, c0, r1, c1) = source.bounds();
    let row_dev = (r0 as i64 - target.row as i64)
        .max(target.row as i64 - r1 as i64)
        .max(0);
    let col_dev = (c0 as i64 - target.col as i64)
        .max(target.col as i64 - c1 as i64)
        .max(0);
    if row_dev >= col_dev {
        let pr0 = r0.min(target.row);
        let pr1 = r1.max(target.row);
        SelectionRange { start: Coord::new(pr0, c0), end: Coord::new(pr1, c1) }
    } else {
        let pc0 = c0.min(target.col);
        let pc1 = c1.max(target.col);
        SelectionRange { start: Coord::new(r0, pc0), end: Coord::new(r1, pc1) }
    }
}

enum RowOrCol {
    Row(u32),
    Col(u32),
}

fn select_line(
    selection: &mut SelectionState,
    which: RowOrCol,
    extend: bool,
    additive: bool,
    max_row: u32,
    max_col: u32,
) {
    let full = match which {
        RowOrCol::Row(row) => SelectionRange { start: Coord::new(row, 0), end: Coord::new(row, max_col) },
        RowOrCol::Col(col) => SelectionRange { start: Coord::new(0, col), end: Coord::new(max_row, col) },
    };
    if additive {
        selection.active_cell = Some(full.start);
        selection.push_range(full);
        return;
    }
    if extend {
        if let Some(active) = selection.active_cell {
            let anchor = match which {
                RowOrCol::Row(_) => Coord::new(active.row, 0),
                RowOrCol::Col(_) => Coord::new(0, active.col),
            };
            let end = match which {
                RowOrCol::Row(row) => Coord::new(row, max_col),
                RowOrCol::Col(col) => Coord::new(max_row, col),
            };
            selection.set_last_range(SelectionRange { start: anchor, end });
            return;
        }
    }
    selection.active_cell = Some(full.start);
    selection.clear_ranges();
    selection.push_range(full);
}

fn select_all_cycle(state: &mut SheetState, now_ms: u64, cells: &dyn CellDataSource) -> SelectionRange {
    let fresh = match state.last_select_all_at_ms {
        Some(prev) => now_ms.saturating_sub(prev) > SELECT_ALL_DWELL_MS,
        None => true,
    };
    state.select_all_stage = if fresh { 1 } else { (state.select_all_stage + 1).min(3) };
    state.last_select_all_at_ms = Some(now_ms);
    let active = state.selection.active_cell.unwrap_or(Coord::ORIGIN);
    match state.select_all_stage {
        1 => current_region(active, cells),
        2 => cells
            .get_used_range()
            .map(|r| SelectionRange { start: r.start, end: r.end })
            .unwrap_or_else(|| SelectionRange::single(active)),
        _ => SelectionRange { start: Coord::ORIGIN, end: Coord::new(state.max_row, state.max_col) },
    }
}

fn navigate(
    selection: &mut SelectionState,
    direction: sheet_events::Direction,
    jump: bool,
    extend: bool,
    cells: &dyn CellDataSource,
    max_row: u32,
    max_col: u32,
) {
    let Some(active) = selection.active_cell else {
        selection.set_active_cell(Coord::ORIGIN);
        return;
    };
    let base = selection.last_range().map(|r| r.end).unwrap_or(active);
    let target = navigate_target(base, direction, jump, cells, max_row, max_col);
    if extend {
        selection.set_last_range(SelectionRange { start: active, end: target });
    } else {
        selection.set_active_cell(target);
    }
}

fn navigate_page(
    selection: &mut SelectionState,
    direction: sheet_events::Direction,
    extend: bool,
    page_size: u32,
    max_row: u32,
    max_col: u32,
) {
    let Some(active) = selection.active_cell else {
        selection.set_active_cell(Coord::ORIGIN);
        return;
    };
    let base = selection.last_range().map(|r| r.end).unwrap_or(active);
    let target = match direction {
        sheet_events::Direction::Up => Coord::new(base.row.saturating_sub(page_size), base.col),
        sheet_events::Direction::Down => Coord::new((base.row + page_size).min(max_row), base.col),
        // Only Up/Down are meaningful for paging; Left/Right degrade to a
        // single-step move rather than being rejected outright.
        other => step_one(base, other, max_row, max_col),
    };
    if extend {
        selection.set_last_range(SelectionRange { start: active, end: target });
    } else {
        selection.set_active_cell(target);
    }
}

fn navigate_home_end(
    selection: &mut SelectionState,
    target: sheet_events::HomeEndTarget,
    document_level: bool,
    extend: bool,
    cells: &dyn CellDataSource,
    _max_row: u32,
    max_col: u32,
) {
    let Some(active) = selection.active_cell else {
        selection.set_active_cell(Coord::ORIGIN);
        return;
    };
    let base = selection.last_range().map(|r| r.end).unwrap_or(active);
    let resolved = match (target, document_level) {
        (sheet_events::HomeEndTarget::Home, true) => Coord::ORIGIN,
        (sheet_events::HomeEndTarget::Home, false) => Coord::new(base.row, 0),
        (sheet_events::HomeEndTarget::End, true) => cells
            .get_used_range()
            .map(|r| r.end)
            .unwrap_or(Coord::ORIGIN),
        (sheet_events::HomeEndTarget::End, false) => {
            let cols = cells.get_columns_in_row(base.row);
            Coord::new(base.row, cols.last().copied().unwrap_or(max_col))
        }
    };
    if extend {
        selection.set_last_range(SelectionRange { start: active, end: resolved });
    } else {
        selection.set_active_cell(resolved);
    }
}

/// `Tab`/`Enter` cycling within the active (non-degenerate) range, or a
/// plain one-step move when the range is degenerate (`spec.md` §4.4). This
/// intentionally moves `active_cell` while leaving `ranges` untouched — a
/// documented exception to `SelectionState::invariant_holds` (see
/// `DESIGN.md`).
fn tab_enter_navigate(
    selection: &SelectionState,
    key: TabEnterKey,
    reverse: bool,
    max_row: u32,
    max_col: u32,
) -> SelectionState {
    let Some(active) = selection.active_cell else {
        return SelectionState::new(Coord::ORIGIN);
    };
    let Some(range) = selection.last_range() else {
        return SelectionState::new(active);
    };
    let delta: i64 = if reverse { -1 } else { 1 };
    if range.is_degenerate() {
        let mut new_selection = selection.clone();
        let moved = match key {
            TabEnterKey::Tab => Coord::new(active.row, (active.col as i64 + delta).clamp(0, max_col as i64) as u32),
            TabEnterKey::Enter => Coord::new((active.row as i64 + delta).clamp(0, max_row as i64) as u32, active.col),
        };
        new_selection.set_active_cell(moved);
        return new_selection;
    }

    let (r0, c0, r1, c1) = range.bounds();
    let rows = (r1 - r0 + 1) as i64;
    let cols = (c1 - c0 + 1) as i64;
    let total = rows * cols;
    let ridx = (active.row - r0) as i64;
    let cidx = (active.col - c0) as i64;
    let (new_ridx, new_cidx) = match key {
        TabEnterKey::Tab => {
            let linear = (((ridx * cols + cidx) + delta) % total + total) % total;
            (linear / cols, linear % cols)
        }
        TabEnterKey::Enter => {
            let linear = (((cidx * rows + ridx) + delta) % total + total) % total;
            (linear % rows, linear / rows)
        }
    };
    let mut new_selection = selection.clone();
    new_selection.active_cell = Some(Coord::new(r0 + new_ridx as u32, c0 + new_cidx as u32));
    new_selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_events::Direction;
    use sheet_model::InMemoryCellStore;

    fn bounds(range: SelectionRange) -> (u32, u32, u32, u32) {
        (range.start.row, range.start.col, range.end.row, range.end.col)
    }

    /// `spec.md` §8, Scenario A: anchor-fixed extend, then perpendicular
    /// extend from the range's end (not the anchor), then a plain move that
    /// steps from the range end and collapses back to a single cell.
    #[test]
    fn scenario_a_extend_then_perpendicular_then_collapse() {
        let cells = InMemoryCellStore::new();
        let state = SheetState::at(Coord::new(2, 2));
        assert_eq!(state.selection.active_cell, Some(Coord::new(2, 2)));
        assert!(state.selection.ranges[0].is_degenerate());

        let r1 = reduce(
            &state,
            Intent::NavigateCell { direction: Direction::Right, jump: false, extend: true },
            &cells,
            0,
        );
        assert_eq!(r1.state.selection.active_cell, Some(Coord::new(2, 2)));
        assert_eq!(bounds(r1.state.selection.last_range().unwrap()), (2, 2, 2, 3));

        let r2 = reduce(
            &r1.state,
            Intent::NavigateCell { direction: Direction::Down, jump: false, extend: true },
            &cells,
            0,
        );
        assert_eq!(r2.state.selection.active_cell, Some(Coord::new(2, 2)));
        assert_eq!(bounds(r2.state.selection.last_range().unwrap()), (2, 2, 3, 3));

        let r3 = reduce(
            &r2.state,
            Intent::NavigateCell { direction: Direction::Left, jump: false, extend: false },
            &cells,
            0,
        );
        assert_eq!(r3.state.selection.active_cell, Some(Coord::new(3, 2)));
        assert_eq!(r3.state.selection.ranges.len(), 1);
        assert!(r3.state.selection.ranges[0].is_degenerate());
    }

    /// `spec.md` §8, Scenario B: the fill axis-lock formula picks whichever
    /// axis has the larger overshoot, freezing the other to the source's
    /// extent.
    #[test]
    fn scenario_b_fill_axis_lock() {
        let cells = InMemoryCellStore::new();
        let source = SelectionRange { start: Coord::new(1, 1), end: Coord::new(3, 1) };
        let mut state = SheetState::at(Coord::new(1, 1));
        state.selection.set_last_range(source);

        let r1 = reduce(&state, Intent::BeginFillDrag { source }, &cells, 0);
        let r2 = reduce(&r1.state, Intent::UpdateFillDrag { target: Coord::new(3, 5) }, &cells, 0);
        assert_eq!(bounds(r2.state.fill_drag.as_ref().unwrap().current_preview), (1, 1, 3, 5));

        let r3 = reduce(&r2.state, Intent::UpdateFillDrag { target: Coord::new(6, 3) }, &cells, 0);
        assert_eq!(bounds(r3.state.fill_drag.as_ref().unwrap().current_preview), (1, 1, 6, 1));

        let r4 = reduce(&r3.state, Intent::EndFillDrag, &cells, 0);
        assert!(r4.state.fill_drag.is_none());
        assert!(matches!(
            r4.effects.as_slice(),
            [Effect::Fill { from, to }] if *from == source && bounds(*to) == (1, 1, 6, 1)
        ));
    }

    #[test]
    fn add_range_then_new_extend_anchors_to_added_cell() {
        let cells = InMemoryCellStore::new();
        let state = SheetState::at(Coord::new(0, 0));
        let r1 = reduce(&state, Intent::AddRange { cell: Coord::new(5, 5) }, &cells, 0);
        assert_eq!(r1.state.selection.active_cell, Some(Coord::new(5, 5)));
        assert_eq!(r1.state.selection.ranges.len(), 2);
    }

    #[test]
    fn tab_cycle_within_range_wraps_and_preserves_ranges() {
        let cells = InMemoryCellStore::new();
        let mut state = SheetState::at(Coord::new(0, 0));
        state.selection.set_last_range(SelectionRange { start: Coord::new(0, 0), end: Coord::new(0, 1) });
        let r1 = reduce(&state, Intent::TabEnterNavigate { key: TabEnterKey::Tab, reverse: false }, &cells, 0);
        assert_eq!(r1.state.selection.active_cell, Some(Coord::new(0, 1)));
        assert_eq!(r1.state.selection.ranges.len(), 1);
        let r2 = reduce(&r1.state, Intent::TabEnterNavigate { key: TabEnterKey::Tab, reverse: false }, &cells, 0);
        assert_eq!(r2.state.selection.active_cell, Some(Coord::new(0, 0)));
    }

    #[test]
    fn escape_while_dragging_restores_pre_drag_selection_for_additive_drag() {
        let cells = InMemoryCellStore::new();
        let mut state = SheetState::at(Coord::new(0, 0));
        state.selection.push_range(SelectionRange::single(Coord::new(2, 2)));
        let r1 = reduce(&state, Intent::BeginDragSelection { cell: Coord::new(9, 9), additive: true }, &cells, 0);
        assert!(r1.state.drag.is_some());
        let r2 = reduce(&r1.state, Intent::UpdateDragSelection { cell: Coord::new(9, 12) }, &cells, 0);
        assert!(r2.state.drag.is_some());
        let r3 = reduce(&r2.state, Intent::EscapePressed, &cells, 0);
        assert!(r3.state.drag.is_none());
        assert_eq!(r3.state.selection.ranges.len(), 2);
    }

    #[test]
    fn select_all_cycles_through_three_stages_within_dwell_window() {
        let mut cells = InMemoryCellStore::new();
        cells.set_cell(Coord::new(5, 5), sheet_model::Cell::with_value(sheet_model::CellValue::Number(1.0)));
        let state = SheetState::at(Coord::new(5, 5)).with_bounds(99, 99);

        let r1 = reduce(&state, Intent::SelectAll, &cells, 0);
        assert_eq!(r1.state.select_all_stage, 1);
        let r2 = reduce(&r1.state, Intent::SelectAll, &cells, 100);
        assert_eq!(r2.state.select_all_stage, 2);
        assert_eq!(bounds(r2.state.selection.last_range().unwrap()), (5, 5, 5, 5));
        let r3 = reduce(&r2.state, Intent::SelectAll, &cells, 200);
        assert_eq!(r3.state.select_all_stage, 3);
        assert_eq!(bounds(r3.state.selection.last_range().unwrap()), (0, 0, 99, 99));

        let r4 = reduce(&r3.state, Intent::SelectAll, &cells, 5000);
        assert_eq!(r4.state.select_all_stage, 1);
    }

    /// `spec.md` §4.4: the first `Escape` (not editing, not dragging) clears
    /// the selection ranges but keeps `active_cell`; a second `Escape` with
    /// ranges already empty bubbles a `CancelEdit` effect instead of being a
    /// no-op re-clear.
    #[test]
    fn second_escape_with_empty_ranges_emits_cancel_edit() {
        let cells = InMemoryCellStore::new();
        let mut state = SheetState::at(Coord::new(3, 3));
        state.selection.push_range(SelectionRange::single(Coord::new(9, 9)));

        let r1 = reduce(&state, Intent::EscapePressed, &cells, 0);
        assert_eq!(r1.state.selection.active_cell, Some(Coord::new(3, 3)));
        assert!(r1.state.selection.ranges.is_empty());
        assert!(r1.effects.is_empty());

        let r2 = reduce(&r1.state, Intent::EscapePressed, &cells, 0);
        assert_eq!(r2.state.selection.active_cell, Some(Coord::new(3, 3)));
        assert!(r2.state.selection.ranges.is_empty());
        assert!(matches!(r2.effects.as_slice(), [Effect::CancelEdit]));
    }

    #[test]
    fn start_edit_then_confirm_round_trips_through_navigate_mode() {
        let cells = InMemoryCellStore::new();
        let state = SheetState::at(Coord::new(1, 1));
        let r1 = reduce(&state, Intent::StartEdit { seed: Some('5') }, &cells, 0);
        assert_eq!(r1.state.edit.mode, crate::edit_state::EditMode::Enter);
        assert_eq!(r1.state.edit.buffer, "5");
        let r2 = reduce(&r1.state, Intent::ConfirmEdit, &cells, 0);
        assert_eq!(r2.state.edit.mode, crate::edit_state::EditMode::Navigate);
        assert!(matches!(
            r2.effects.as_slice(),
            [Effect::ConfirmEdit { cell, buffer }] if *cell == Coord::new(1, 1) && buffer == "5"
        ));
    }
}
