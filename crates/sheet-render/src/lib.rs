//! `sheet-render`: the virtual rendering model (`spec.md` §4.3) — camera
//! inputs, the produced `RenderFrame`, and `VirtualRenderer`, the pure
//! lazy-materialization algorithm that turns a `Camera` plus the model/
//! geometry/merge state into the cells a host actually needs to paint.
//!
//! Like the teacher's `core-render`, this crate never touches a terminal or
//! GPU surface directly — it hands back data the host's paint layer
//! consumes (`spec.md` §5: "the core never performs I/O").

pub mod camera;
pub mod frame;
pub mod renderer;

pub use camera::Camera;
pub use frame::{
    ColMetric, ContentBounds, FreezeLines, PixelRect, RenderFrame, RowMetric, ScrollOffset,
    ValueType, ViewportCell,
};
pub use renderer::VirtualRenderer;
