//! Platform traits the host passes in to resolve `metaAsCtrl`'s
//! platform-dependent default (`spec.md` §6), mirroring the teacher's
//! `ConfigPlatformTraits` (`core-config::ConfigPlatformTraits`) — this crate
//! never probes `std::env::consts::OS` itself, since a web/wasm host has no
//! such notion and should pass its own answer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigPlatform {
    pub is_apple: bool,
}

impl ConfigPlatform {
    pub const fn new(is_apple: bool) -> Self {
        Self { is_apple }
    }
}
