mod null_renderer;
mod scene;
mod style;

pub use null_renderer::NullRenderer;
pub use scene::{AxisFrame, LegendEntry, Scene, SeriesId, ViewBounds};
pub use style::{Color, LineStyle, SceneStyle};

use crate::error::BoxResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `Scene` so drawing
/// code remains isolated from curve math and control handling.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> BoxResult<()>;
}
