//! `Config` (`spec.md` §6): every named configuration option, parsed from a
//! TOML blob the host supplies. Generalizes the teacher's
//! `core-config::ConfigFile`/`Config` split (raw parsed data vs. a
//! platform-resolved effective value) from a single `effective_vertical_margin`
//! field to `effective_meta_as_ctrl`, the one option whose default depends on
//! the host platform rather than being a fixed literal.
//!
//! No filesystem access lives here — `discover`/`load_from` in the teacher's
//! crate read `oxidized.toml` from disk; this crate only parses bytes the
//! host already has (`Config::from_toml_str`).

use serde::Deserialize;

use crate::error::ConfigError;
use crate::platform::ConfigPlatform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterDirection {
    Down,
    Up,
}

impl<'de> Deserialize<'de> for TabDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "right" => Ok(TabDirection::Right),
            "left" => Ok(TabDirection::Left),
            other => Err(serde::de::Error::custom(format!(
                "unknown tabDirection {other:?}, expected \"right\" or \"left\""
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for EnterDirection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "down" => Ok(EnterDirection::Down),
            "up" => Ok(EnterDirection::Up),
            other => Err(serde::de::Error::custom(format!(
                "unknown enterDirection {other:?}, expected \"down\" or \"up\""
            ))),
        }
    }
}

/// The raw, directly-deserialized TOML shape. Field names follow the
/// `spec.md` §6 camelCase enumeration; `serde(rename)` maps them onto the
/// snake_case Rust fields `Config` exposes.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    #[serde(default = "ConfigFile::default_max_row")]
    pub max_row: u32,
    #[serde(default = "ConfigFile::default_max_col")]
    pub max_col: u32,
    #[serde(default = "ConfigFile::default_page_size")]
    pub page_size: u32,
    #[serde(default = "ConfigFile::default_overscan_rows")]
    pub overscan_rows: u32,
    #[serde(default = "ConfigFile::default_overscan_cols")]
    pub overscan_cols: u32,
    #[serde(default = "ConfigFile::default_tab_direction")]
    pub tab_direction: TabDirection,
    #[serde(default = "ConfigFile::default_enter_direction")]
    pub enter_direction: EnterDirection,
    #[serde(default = "ConfigFile::default_zoom_min")]
    pub zoom_min: f32,
    #[serde(default = "ConfigFile::default_zoom_max")]
    pub zoom_max: f32,
    #[serde(default = "ConfigFile::default_zoom_step")]
    pub zoom_step: f32,
    /// `None` means "unset, resolve from platform" (`spec.md` §6: "true on
    /// Apple"); `Some(_)` is an explicit host override.
    #[serde(default)]
    pub meta_as_ctrl: Option<bool>,
    #[serde(default = "ConfigFile::default_max_ranges")]
    pub max_ranges: usize,
    #[serde(default = "ConfigFile::default_long_press_ms")]
    pub long_press_ms: u64,
    #[serde(default = "ConfigFile::default_drag_threshold_px")]
    pub drag_threshold_px: f32,
    #[serde(default = "ConfigFile::default_autoscroll_edge_px")]
    pub autoscroll_edge_px: f32,
}

impl ConfigFile {
    const fn default_max_row() -> u32 {
        (1 << 20) - 1
    }
    const fn default_max_col() -> u32 {
        (1 << 14) - 1
    }
    const fn default_page_size() -> u32 {
        20
    }
    const fn default_overscan_rows() -> u32 {
        2
    }
    const fn default_overscan_cols() -> u32 {
        2
    }
    const fn default_tab_direction() -> TabDirection {
        TabDirection::Right
    }
    const fn default_enter_direction() -> EnterDirection {
        EnterDirection::Down
    }
    const fn default_zoom_min() -> f32 {
        0.5
    }
    const fn default_zoom_max() -> f32 {
        2.0
    }
    const fn default_zoom_step() -> f32 {
        0.1
    }
    const fn default_max_ranges() -> usize {
        2048
    }
    const fn default_long_press_ms() -> u64 {
        500
    }
    const fn default_drag_threshold_px() -> f32 {
        3.0
    }
    const fn default_autoscroll_edge_px() -> f32 {
        40.0
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            max_row: Self::default_max_row(),
            max_col: Self::default_max_col(),
            page_size: Self::default_page_size(),
            overscan_rows: Self::default_overscan_rows(),
            overscan_cols: Self::default_overscan_cols(),
            tab_direction: Self::default_tab_direction(),
            enter_direction: Self::default_enter_direction(),
            zoom_min: Self::default_zoom_min(),
            zoom_max: Self::default_zoom_max(),
            zoom_step: Self::default_zoom_step(),
            meta_as_ctrl: None,
            max_ranges: Self::default_max_ranges(),
            long_press_ms: Self::default_long_press_ms(),
            drag_threshold_px: Self::default_drag_threshold_px(),
            autoscroll_edge_px: Self::default_autoscroll_edge_px(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub file: ConfigFile,
    /// `metaAsCtrl` resolved against a platform (`spec.md` §6), the one
    /// option `ConfigFile` cannot supply a literal default for on its own.
    pub effective_meta_as_ctrl: bool,
}

impl Default for Config {
    fn default() -> Self {
        let file = ConfigFile::default();
        let effective_meta_as_ctrl = file.meta_as_ctrl.unwrap_or(false);
        Self {
            file,
            effective_meta_as_ctrl,
        }
    }
}

impl Config {
    /// Parse a TOML document into a `Config`, resolving `metaAsCtrl` against
    /// `platform` when the document leaves it unset. No I/O: `toml` is the
    /// only dependency this needs, matching the teacher's parse step in
    /// `core_config::load_from` minus the `fs::read_to_string` around it.
    pub fn from_toml_str(toml_str: &str, platform: ConfigPlatform) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(toml_str)?;
        let effective_meta_as_ctrl = file.meta_as_ctrl.unwrap_or(platform.is_apple);
        tracing::debug!(
            target: "config.load",
            effective_meta_as_ctrl,
            max_row = file.max_row,
            max_col = file.max_col,
            "parsed config"
        );
        Ok(Self {
            file,
            effective_meta_as_ctrl,
        })
    }

    /// The all-default configuration resolved against `platform`, for hosts
    /// with no configuration bytes to parse.
    pub fn with_platform_defaults(platform: ConfigPlatform) -> Self {
        let file = ConfigFile::default();
        Self {
            effective_meta_as_ctrl: platform.is_apple,
            file,
        }
    }

    /// Re-resolve `effective_meta_as_ctrl` against a platform discovered
    /// after parsing (e.g. the host learns its platform only once a window
    /// exists). No-op on fields other than `meta_as_ctrl`.
    pub fn apply_platform(&mut self, platform: ConfigPlatform) {
        self.effective_meta_as_ctrl = self.file.meta_as_ctrl.unwrap_or(platform.is_apple);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_literals() {
        let cfg = Config::with_platform_defaults(ConfigPlatform::new(false));
        assert_eq!(cfg.file.max_row, (1 << 20) - 1);
        assert_eq!(cfg.file.max_col, (1 << 14) - 1);
        assert_eq!(cfg.file.page_size, 20);
        assert_eq!(cfg.file.overscan_rows, 2);
        assert_eq!(cfg.file.overscan_cols, 2);
        assert_eq!(cfg.file.tab_direction, TabDirection::Right);
        assert_eq!(cfg.file.enter_direction, EnterDirection::Down);
        assert_eq!(cfg.file.zoom_min, 0.5);
        assert_eq!(cfg.file.zoom_max, 2.0);
        assert_eq!(cfg.file.zoom_step, 0.1);
        assert_eq!(cfg.file.max_ranges, 2048);
        assert_eq!(cfg.file.long_press_ms, 500);
        assert_eq!(cfg.file.drag_threshold_px, 3.0);
        assert_eq!(cfg.file.autoscroll_edge_px, 40.0);
        assert!(!cfg.effective_meta_as_ctrl);
    }

    #[test]
    fn meta_as_ctrl_defaults_true_on_apple_when_unset() {
        let cfg = Config::from_toml_str("", ConfigPlatform::new(true)).unwrap();
        assert!(cfg.effective_meta_as_ctrl);
        let cfg = Config::from_toml_str("", ConfigPlatform::new(false)).unwrap();
        assert!(!cfg.effective_meta_as_ctrl);
    }

    #[test]
    fn explicit_meta_as_ctrl_overrides_platform() {
        let cfg = Config::from_toml_str("metaAsCtrl = false\n", ConfigPlatform::new(true)).unwrap();
        assert!(!cfg.effective_meta_as_ctrl);
    }

    #[test]
    fn parses_partial_overrides_with_rest_defaulted() {
        let cfg = Config::from_toml_str("pageSize = 50\ntabDirection = \"left\"\n", ConfigPlatform::new(false)).unwrap();
        assert_eq!(cfg.file.page_size, 50);
        assert_eq!(cfg.file.tab_direction, TabDirection::Left);
        assert_eq!(cfg.file.max_row, (1 << 20) - 1);
    }

    #[test]
    fn rejects_unknown_direction_value() {
        let err = Config::from_toml_str("tabDirection = \"sideways\"\n", ConfigPlatform::new(false));
        assert!(err.is_err());
    }

    #[test]
    fn apply_platform_reresolves_unset_meta_as_ctrl() {
        let mut cfg = Config::from_toml_str("", ConfigPlatform::new(false)).unwrap();
        assert!(!cfg.effective_meta_as_ctrl);
        cfg.apply_platform(ConfigPlatform::new(true));
        assert!(cfg.effective_meta_as_ctrl);
    }
}
