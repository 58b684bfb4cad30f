//! `sheet-model`: the spreadsheet data model — cells, coordinates, the A1
//! grammar, selection geometry, cell formatting, and the `CellDataSource`
//! contract the rest of the workspace reads through.
//!
//! This crate owns no mutable runtime state of its own beyond the reference
//! `InMemoryCellStore`; `SelectionState` is mutated exclusively by
//! `sheet-actions::reduce` (`spec.md` §3 "Lifecycle").

pub mod cell;
pub mod cell_store;
pub mod coord;
pub mod error;
pub mod format;
pub mod selection;
pub mod value;

pub use cell::{Cell, MergeParticipation};
pub use cell_store::{
    CellDataSource, ConditionalFormatProvider, ConditionalFormatResult, DataBarPayload,
    IconPayload, InMemoryCellStore, UsedRange,
};
pub use coord::{Coord, MAX_COL, MAX_ROW, format_a1, parse_a1};
pub use error::ModelError;
pub use format::{Borders, Color, Format, HorizontalAlign, VerticalAlign};
pub use selection::{MAX_RANGES, SelectionRange, SelectionState};
pub use value::CellValue;
