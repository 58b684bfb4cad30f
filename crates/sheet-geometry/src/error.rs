//! Error taxonomy for dimension mutations. `sheet-geometry` sits below
//! `sheet-model` in the dependency graph, so it carries its own narrow error
//! type rather than depending on `sheet-model::ModelError` (`spec.md` §7).

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("negative dimension size is not a valid row/column size")]
    InvalidArgument,
}
