#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    #[error("merge region overlaps an existing merge region")]
    InvalidMerge,
}
