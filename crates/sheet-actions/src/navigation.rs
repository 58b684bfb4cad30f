//! Pure coordinate math for `NavigateCell`/`NavigatePage`/`NavigateHomeEnd`/
//! `TabEnterNavigate` (`spec.md` §4.4), plus the `SelectAll` current-region
//! and used-range resolution. Kept free of `SheetState` so it can be unit
//! tested against bare coordinates.

use sheet_events::Direction;
use sheet_model::{CellDataSource, Coord, SelectionRange};

pub fn step_one(from: Coord, direction: Direction, max_row: u32, max_col: u32) -> Coord {
    match direction {
        Direction::Up => Coord::new(from.row.saturating_sub(1), from.col),
        Direction::Down => Coord::new((from.row + 1).min(max_row), from.col),
        Direction::Left => Coord::new(from.row, from.col.saturating_sub(1)),
        Direction::Right => Coord::new(from.row, (from.col + 1).min(max_col)),
    }
}

fn at_boundary(from: Coord, direction: Direction, max_row: u32, max_col: u32) -> bool {
    match direction {
        Direction::Up => from.row == 0,
        Direction::Down => from.row == max_row,
        Direction::Left => from.col == 0,
        Direction::Right => from.col == max_col,
    }
}

/// Walk `list` (ascending, values along the axis of travel) from `from`
/// according to the "contiguous run / next populated / boundary" jump rule
/// (`spec.md` §4.4 `NavigateCell` with `jump = true`).
fn jump_along(list: &[u32], from: u32, forward: bool, has_content_at_from: bool, boundary: u32) -> u32 {
    if has_content_at_from {
        if let Ok(idx) = list.binary_search(&from) {
            let mut i = idx;
            if forward {
                while i + 1 < list.len() && list[i + 1] == list[i] + 1 {
                    i += 1;
                }
            } else {
                while i > 0 && list[i - 1] + 1 == list[i] {
                    i -= 1;
                }
            }
            return list[i];
        }
        return from;
    }
    if forward {
        let idx = list.partition_point(|&x| x <= from);
        list.get(idx).copied().unwrap_or(boundary)
    } else {
        let idx = list.partition_point(|&x| x < from);
        if idx == 0 { boundary } else { list[idx - 1] }
    }
}

/// Resolve a single `NavigateCell` move, honoring `jump` (`spec.md` §4.4:
/// "From a non-empty cell ... jump to the grid boundary").
pub fn navigate_target(
    from: Coord,
    direction: Direction,
    jump: bool,
    cells: &dyn CellDataSource,
    max_row: u32,
    max_col: u32,
) -> Coord {
    if !jump {
        return step_one(from, direction, max_row, max_col);
    }
    if at_boundary(from, direction, max_row, max_col) {
        return from;
    }
    let has_content = cells.has_content(from);
    match direction {
        Direction::Up | Direction::Down => {
            let list = cells.get_rows_in_column(from.col);
            let forward = direction == Direction::Down;
            let boundary = if forward { max_row } else { 0 };
            let row = jump_along(&list, from.row, forward, has_content, boundary);
            Coord::new(row, from.col)
        }
        Direction::Left | Direction::Right => {
            let list = cells.get_columns_in_row(from.row);
            let forward = direction == Direction::Right;
            let boundary = if forward { max_col } else { 0 };
            let col = jump_along(&list, from.col, forward, has_content, boundary);
            Coord::new(from.row, col)
        }
    }
}

/// Excel-style "current region": grow a rectangle from `active` outward in
/// all four directions while an adjacent line still touches content, until
/// no edge can expand further. Used by the `SelectAll` dwell cycle's first
/// stage (`spec.md` §4.4).
pub fn current_region(active: Coord, cells: &dyn CellDataSource) -> SelectionRange {
    if !cells.has_content(active) {
        return SelectionRange::single(active);
    }
    let (mut r0, mut r1, mut c0, mut c1) = (active.row, active.row, active.col, active.col);
    loop {
        let mut expanded = false;
        if r0 > 0 {
            let candidate = r0 - 1;
            if row_touches(cells, candidate, c0, c1) {
                r0 = candidate;
                expanded = true;
            }
        }
        if r1 < u32::MAX {
            let candidate = r1 + 1;
            if row_touches(cells, candidate, c0, c1) {
                r1 = candidate;
                expanded = true;
            }
        }
        if c0 > 0 {
            let candidate = c0 - 1;
            if col_touches(cells, candidate, r0, r1) {
                c0 = candidate;
                expanded = true;
            }
        }
        if c1 < u32::MAX {
            let candidate = c1 + 1;
            if col_touches(cells, candidate, r0, r1) {
                c1 = candidate;
                expanded = true;
            }
        }
        if !expanded {
            break;
        }
    }
    SelectionRange {
        start: Coord::new(r0, c0),
        end: Coord::new(r1, c1),
    }
}

fn row_touches(cells: &dyn CellDataSource, row: u32, c0: u32, c1: u32) -> bool {
    cells
        .get_columns_in_row(row)
        .iter()
        .any(|&c| c >= c0 && c <= c1)
}

fn col_touches(cells: &dyn CellDataSource, col: u32, r0: u32, r1: u32) -> bool {
    cells
        .get_rows_in_column(col)
        .iter()
        .any(|&r| r >= r0 && r <= r1)
}
