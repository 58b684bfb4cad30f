//! `sheet-geometry`: the axis-wise `DimensionIndex` (C1) that maps row/column
//! indices to pixel offsets and back. Coordinate types and the A1 grammar
//! live in `sheet-model` (they are cell-identity concerns the data model
//! needs independent of rendering); this crate re-exports them so callers
//! that only deal in geometry don't need a second dependency.

pub mod dimension;
pub mod error;

pub use dimension::DimensionIndex;
pub use error::GeometryError;
pub use sheet_model::{Coord, MAX_COL, MAX_ROW, format_a1, parse_a1};
