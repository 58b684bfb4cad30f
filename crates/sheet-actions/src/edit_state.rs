//! `EditState`: the buffer/caret half of the edit-mode state machine
//! (`spec.md` §4.5 "EditModeManager"). Mode *transitions* driven by the
//! `Intent` stream live in [`crate::edit_mode_manager`]; per-keystroke
//! buffer edits (not part of the `Intent` vocabulary — they are host text-
//! input events, the same way the teacher's insert-mode keystrokes bypass
//! `core-events::Action` and go straight at the buffer) are methods here.

use sheet_model::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Navigate,
    Enter,
    Edit,
    Point,
}

/// Characters after which a formula editor expects a cell reference next —
/// the position at which a pointer click or arrow-key press should be
/// diverted into [`EditMode::Point`] instead of being treated as ordinary
/// text editing. `spec.md` §4.5 names the transition ("caret reaches ref
/// slot") without pinning the trigger set; this is this crate's resolution,
/// recorded in `DESIGN.md`.
const REF_SLOT_CHARS: [char; 7] = ['=', '+', '-', '*', '/', '(', ','];

#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub mode: EditMode,
    pub editing_cell: Option<Coord>,
    pub buffer: String,
    pub caret: usize,
    /// Set only while `mode == Point`: the cell last resolved by a
    /// pointer/arrow intent diverted into reference-picking.
    pub point_cell: Option<Coord>,
    /// The first cell of the current point-reference session, fixed until a
    /// non-extend point click starts a new one. Used to build `A1:B2`-style
    /// range text when a later click arrives as `ExtendSelection`.
    pub point_anchor: Option<Coord>,
    /// Char offset where the currently-inserted reference text begins, so
    /// the next point click can replace it instead of appending after it.
    pub point_ref_start: Option<usize>,
}

impl Default for EditState {
    fn default() -> Self {
        Self::navigate()
    }
}

impl EditState {
    pub fn navigate() -> Self {
        Self {
            mode: EditMode::Navigate,
            editing_cell: None,
            buffer: String::new(),
            caret: 0,
            point_cell: None,
            point_anchor: None,
            point_ref_start: None,
        }
    }

    pub fn is_formula(&self) -> bool {
        self.buffer.starts_with('=')
    }

    fn char_at_caret_back(&self) -> Option<char> {
        if self.caret == 0 {
            return None;
        }
        self.buffer[..self.caret].chars().next_back()
    }

    /// Insert `ch` at the caret, advancing it, then apply the `Enter`/`Edit`
    /// <-> `Point` transition this crate resolves for "caret reaches ref
    /// slot" (`spec.md` §4.5).
    pub fn insert_char(&mut self, ch: char) {
        if !matches!(self.mode, EditMode::Enter | EditMode::Edit | EditMode::Point) {
            return;
        }
        let byte_idx = self.byte_index_for_char_offset(self.caret);
        self.buffer.insert(byte_idx, ch);
        self.caret += 1;
        self.reclassify_point_mode();
    }

    pub fn backspace(&mut self) {
        if self.caret == 0 || !matches!(self.mode, EditMode::Enter | EditMode::Edit | EditMode::Point) {
            return;
        }
        let start = self.byte_index_for_char_offset(self.caret - 1);
        let end = self.byte_index_for_char_offset(self.caret);
        self.buffer.replace_range(start..end, "");
        self.caret -= 1;
        self.reclassify_point_mode();
    }

    pub fn move_caret(&mut self, delta: isize) {
        let len = self.buffer.chars().count();
        let next = (self.caret as isize + delta).clamp(0, len as isize);
        self.caret = next as usize;
    }

    /// Replace the char range `[start, end)` with `text`, leaving the caret
    /// just past the inserted text. Used by point-mode reference insertion,
    /// which replaces its own previously-inserted span rather than typing.
    pub(crate) fn replace_char_range(&mut self, start: usize, end: usize, text: &str) {
        let byte_start = self.byte_index_for_char_offset(start);
        let byte_end = self.byte_index_for_char_offset(end);
        self.buffer.replace_range(byte_start..byte_end, text);
        self.caret = start + text.chars().count();
    }

    fn reclassify_point_mode(&mut self) {
        if !self.is_formula() {
            if self.mode == EditMode::Point {
                self.mode = EditMode::Edit;
                self.point_ref_start = None;
            }
            return;
        }
        match self.char_at_caret_back() {
            Some(c) if REF_SLOT_CHARS.contains(&c) => {
                if self.mode != EditMode::Point {
                    self.mode = EditMode::Point;
                }
            }
            Some(c) if c.is_ascii_alphanumeric() => {
                if self.mode == EditMode::Point {
                    self.mode = EditMode::Edit;
                    self.point_ref_start = None;
                }
            }
            _ => {}
        }
    }

    fn byte_index_for_char_offset(&self, offset: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(offset)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }
}
