//! `sheet-config`: `spec.md` §6's configuration options as a
//! `serde`-deserializable `Config`, parsed from TOML bytes the host supplies.
//! No filesystem access — that stays a host concern, matching the teacher's
//! separation between `core-config`'s parsing logic and `ox-bin`'s path
//! discovery.

pub mod config;
pub mod error;
pub mod platform;

pub use config::{Config, ConfigFile, EnterDirection, TabDirection};
pub use error::ConfigError;
pub use platform::ConfigPlatform;
