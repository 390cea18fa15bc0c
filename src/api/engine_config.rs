use serde::{Deserialize, Serialize};

use crate::core::{BoxExtent, SamplingConfig};
use crate::error::{BoxError, BoxResult};
use crate::render::SceneStyle;

use super::BoxParams;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load diagram
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxEngineConfig {
    #[serde(default)]
    pub params: BoxParams,
    #[serde(default)]
    pub extent: BoxExtent,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub style: SceneStyle,
}

impl Default for BoxEngineConfig {
    fn default() -> Self {
        Self {
            params: BoxParams::default(),
            extent: BoxExtent::default(),
            sampling: SamplingConfig::default(),
            style: SceneStyle::default(),
        }
    }
}

impl BoxEngineConfig {
    /// Sets the initial parameter values.
    #[must_use]
    pub fn with_params(mut self, params: BoxParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the aggregate endowments of both goods.
    #[must_use]
    pub fn with_extent(mut self, extent: BoxExtent) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the curve sampling density.
    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    /// Sets the per-series presentation style.
    #[must_use]
    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> BoxResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| BoxError::InvalidParameter(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> BoxResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BoxError::InvalidParameter(format!("failed to parse config: {e}")))
    }
}
