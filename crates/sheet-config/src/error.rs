//! `spec.md` §7: configuration parsing is the one place in this crate that
//! can fail, so it gets its own small error enum rather than pulling in
//! `sheet-model`'s `ModelError` for a single variant.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidArgument(#[from] toml::de::Error),
}
