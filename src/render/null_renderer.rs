use crate::error::BoxResult;
use crate::render::{Renderer, Scene};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates scene content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_curve_point_count: usize,
    pub last_legend_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> BoxResult<()> {
        scene.validate()?;
        self.render_count += 1;
        self.last_curve_point_count = scene.curve_point_count();
        self.last_legend_count = scene.legend.len();
        Ok(())
    }
}
