use indexmap::IndexMap;
use tracing::{debug, trace, warn};

use crate::error::{BoxError, BoxResult};
use crate::render::{Renderer, Scene, SceneStyle};

use super::validation::{validate_engine_config, validate_params};
use super::{BoxEngineConfig, BoxParams, ControlId, build_scene};

/// Main orchestration facade consumed by host applications.
///
/// `BoxEngine` owns the current parameter set and the injected renderer;
/// scene construction itself stays a pure function of the configuration, so
/// control bindings reduce to `apply_control` followed by `render`.
pub struct BoxEngine<R: Renderer> {
    renderer: R,
    config: BoxEngineConfig,
    metadata: IndexMap<String, String>,
}

impl<R: Renderer> BoxEngine<R> {
    pub fn new(renderer: R, config: BoxEngineConfig) -> BoxResult<Self> {
        let config = validate_engine_config(config)?;
        Ok(Self {
            renderer,
            config,
            metadata: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> BoxEngineConfig {
        self.config
    }

    #[must_use]
    pub fn params(&self) -> BoxParams {
        self.config.params
    }

    /// Replaces the whole parameter set.
    pub fn set_params(&mut self, params: BoxParams) -> BoxResult<()> {
        let params = validate_params(params, self.config.extent)?;
        debug!(
            endowment_x = params.endowment_x,
            endowment_y = params.endowment_y,
            alpha = params.alpha,
            beta = params.beta,
            "set parameters"
        );
        self.config.params = params;
        Ok(())
    }

    pub fn set_style(&mut self, style: SceneStyle) -> BoxResult<()> {
        self.config.style = style.validate()?;
        Ok(())
    }

    /// Applies one control change from the binding collaborator.
    ///
    /// Values are checked against the control's `[min, max]` range; step
    /// snapping is left to the UI layer.
    pub fn apply_control(&mut self, control: ControlId, value: f64) -> BoxResult<()> {
        let range = control.range();
        if !range.contains(value) {
            warn!(?control, value, "rejecting out-of-range control value");
            return Err(BoxError::InvalidParameter(format!(
                "control {control:?} value {value} outside [{}, {}]",
                range.min, range.max
            )));
        }

        control.apply(&mut self.config.params, value);
        trace!(?control, value, "applied control value");
        Ok(())
    }

    #[must_use]
    pub fn control_value(&self, control: ControlId) -> f64 {
        control.current_value(self.config.params)
    }

    /// Attaches diagnostic metadata carried into every built scene.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Rebuilds the scene from current parameters without drawing it.
    pub fn build_scene(&self) -> BoxResult<Scene> {
        let mut scene = build_scene(&self.config)?;
        scene.metadata = self.metadata.clone();
        Ok(scene)
    }

    /// Rebuilds the scene and hands it to the renderer.
    pub fn render(&mut self) -> BoxResult<()> {
        let scene = self.build_scene()?;
        self.renderer.render(&scene)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
