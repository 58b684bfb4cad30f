//! `sheet-core`: a single-dependency facade over the workspace's crates, the
//! way a top-level crate usually aggregates a workspace's public API for
//! downstream hosts that don't want to depend on nine crates individually.
//!
//! Each member crate is re-exported under its own module so a host can
//! write `sheet_core::render::VirtualRenderer` or pull the curated
//! top-level re-exports below for the types used on nearly every call site
//! (`Coord`, `Intent`, `Effect`, `SheetState`). `sheet_geometry` re-exports
//! `sheet_model`'s coordinate types itself (so `sheet-geometry` users don't
//! need a second dependency); only one of the two is re-exported here at
//! the top level to avoid a glob-import ambiguity for consumers of this
//! facade.

pub mod events {
    pub use sheet_events::*;
}

pub mod geometry {
    pub use sheet_geometry::*;
}

pub mod merge {
    pub use sheet_merge::*;
}

pub mod model {
    pub use sheet_model::*;
}

pub mod render {
    pub use sheet_render::*;
}

pub mod keymap {
    pub use sheet_keymap::*;
}

pub mod actions {
    pub use sheet_actions::*;
}

pub mod state {
    pub use sheet_state::*;
}

pub mod config {
    pub use sheet_config::*;
}

pub use sheet_actions::{SheetState, reduce_intent};
pub use sheet_config::Config;
pub use sheet_events::{Effect, Intent};
pub use sheet_model::{Coord, format_a1, parse_a1};
pub use sheet_state::CommandJournal;
