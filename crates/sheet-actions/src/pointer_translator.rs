//! `PointerTranslator` (`spec.md` §4.7, component C8): turns the raw
//! `PointerEvent` stream into `Intent`s, owning the small amount of
//! per-gesture state (`spec.md` calls this "stateful" translation, unlike
//! the stateless `KeyboardTranslator`) needed to disambiguate a click from
//! a drag and to time long-presses and double-clicks.
//!
//! Geometry (which cell a pixel coordinate hits, whether it is over the
//! fill handle) is resolved by the host via `sheet_render::VirtualRenderer`
//! before calling in here — this translator never touches `DimensionIndex`
//! directly, mirroring the layering the teacher keeps between
//! `core-input`'s raw capture and `core-actions::key_translator`'s
//! interpretation.

use sheet_events::{Intent, Modifiers, PointerButton, PointerEvent, PointerPhase};
use sheet_model::{Coord, SelectionRange};

const DRAG_THRESHOLD_PX: f64 = 3.0;
const LONG_PRESS_MS: u64 = 500;
const LONG_PRESS_PX: f64 = 10.0;

/// What the host resolved a raw pointer sample to, ahead of translation.
/// `row`/`col` follow `VirtualRenderer::point_to_cell`'s header sentinel
/// convention: `-1` marks a header line, `(-1, -1)` the select-all corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerHit {
    pub row: i64,
    pub col: i64,
    pub over_fill_handle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerDown {
    start_x: f64,
    start_y: f64,
    start_time_ms: u64,
    start_cell: Coord,
    additive: bool,
    extend: bool,
    over_fill_handle: bool,
    is_dragging: bool,
    long_press_fired: bool,
}

#[derive(Debug, Default)]
pub struct PointerTranslator {
    down: Option<PointerDown>,
}

impl PointerTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `current_selection` is the reducer's `SheetState.selection.last_range()`
    /// at the moment of the event — needed to seed `BeginFillDrag`'s
    /// `source`, which this translator has no other way to know.
    pub fn on_event(
        &mut self,
        event: PointerEvent,
        hit: PointerHit,
        current_selection: Option<SelectionRange>,
    ) -> Vec<Intent> {
        match event.phase {
            sheet_events::PointerPhase::Down => self.on_down(event, hit, current_selection),
            sheet_events::PointerPhase::Move => self.on_move(event, hit),
            sheet_events::PointerPhase::Up => self.on_up(event, hit),
            sheet_events::PointerPhase::Cancel => self.on_cancel(),
        }
    }

    fn on_down(
        &mut self,
        event: PointerEvent,
        hit: PointerHit,
        current_selection: Option<SelectionRange>,
    ) -> Vec<Intent> {
        if event.button == Some(PointerButton::Right) {
            return vec![Intent::ShowContextMenu {
                at: cell_for(hit),
            }];
        }
        if hit.row == -1 && hit.col == -1 {
            return vec![Intent::SelectAll];
        }
        let additive = event.mods.contains(Modifiers::CTRL);
        let extend = event.mods.contains(Modifiers::SHIFT);
        if hit.row == -1 {
            self.down = None;
            return vec![Intent::SelectColumn {
                col: hit.col as u32,
                extend,
                additive,
            }];
        }
        if hit.col == -1 {
            self.down = None;
            return vec![Intent::SelectRow {
                row: hit.row as u32,
                extend,
                additive,
            }];
        }
        let start_cell = Coord::new(hit.row as u32, hit.col as u32);
        self.down = Some(PointerDown {
            start_x: event.x,
            start_y: event.y,
            start_time_ms: event.timestamp_ms,
            start_cell,
            additive,
            extend,
            over_fill_handle: hit.over_fill_handle,
            is_dragging: false,
            long_press_fired: false,
        });
        if hit.over_fill_handle {
            let source = current_selection.unwrap_or(SelectionRange::single(start_cell));
            return vec![Intent::BeginFillDrag { source }];
        }
        Vec::new()
    }

    fn on_move(&mut self, event: PointerEvent, hit: PointerHit) -> Vec<Intent> {
        let Some(down) = self.down.as_mut() else {
            return Vec::new();
        };
        let dx = event.x - down.start_x;
        let dy = event.y - down.start_y;
        let dist = (dx * dx + dy * dy).sqrt();
        let target = cell_for(hit);

        if !down.is_dragging {
            if dist >= DRAG_THRESHOLD_PX {
                down.is_dragging = true;
                if down.over_fill_handle {
                    return vec![Intent::UpdateFillDrag { target }];
                }
                return vec![
                    Intent::BeginDragSelection {
                        cell: down.start_cell,
                        additive: down.additive,
                    },
                    Intent::UpdateDragSelection { cell: target },
                ];
            }
            let elapsed = event.timestamp_ms.saturating_sub(down.start_time_ms);
            if !down.long_press_fired && elapsed >= LONG_PRESS_MS && dist < LONG_PRESS_PX {
                down.long_press_fired = true;
                return vec![Intent::ShowContextMenu { at: target }];
            }
            return Vec::new();
        }

        if down.over_fill_handle {
            vec![Intent::UpdateFillDrag { target }]
        } else {
            vec![Intent::UpdateDragSelection { cell: target }]
        }
    }

    /// `spec.md` §4.4/§4.7: a pointer-up that never crossed the drag
    /// threshold is a "pure click". With no Shift/Ctrl held, that is the
    /// single-click-to-edit contract: `SetActiveCell` then `BeginEdit`, both
    /// emitted at pointer-up (not down), since only pointer-up can tell a
    /// click apart from the start of a drag. With a modifier held, the
    /// selection intent is the whole contribution — no edit begins.
    fn on_up(&mut self, _event: PointerEvent, hit: PointerHit) -> Vec<Intent> {
        let Some(down) = self.down.take() else {
            return Vec::new();
        };
        if down.is_dragging {
            return vec![if down.over_fill_handle {
                Intent::EndFillDrag
            } else {
                Intent::EndDragSelection
            }];
        }
        let cell = cell_for(hit);
        if down.extend {
            vec![Intent::ExtendSelection { to: cell }]
        } else if down.additive {
            vec![Intent::AddRange { cell }]
        } else {
            vec![Intent::SetActiveCell { cell }, Intent::BeginEdit { cell }]
        }
    }

    fn on_cancel(&mut self) -> Vec<Intent> {
        match self.down.take() {
            Some(down) if down.is_dragging => vec![Intent::EscapePressed],
            _ => Vec::new(),
        }
    }
}

fn cell_for(hit: PointerHit) -> Coord {
    Coord::new(hit.row.max(0) as u32, hit.col.max(0) as u32)
}
