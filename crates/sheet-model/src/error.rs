//! Error taxonomy for the data model crate.
//!
//! Only the operations the specification names as fallible surface a
//! `Result`; everything else (coordinate clamping, the reducer, rendering)
//! is total. See `spec.md` §7 for the full taxonomy this mirrors.

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("malformed A1 reference: {0}")]
    InvalidReference(String),
}
