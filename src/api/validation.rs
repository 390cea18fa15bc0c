use crate::core::{BoxExtent, CobbDouglas};
use crate::error::{BoxError, BoxResult};

use super::{BoxEngineConfig, BoxParams};

pub(super) fn validate_params(params: BoxParams, extent: BoxExtent) -> BoxResult<BoxParams> {
    for (name, value, total) in [
        ("endowment_x", params.endowment_x, extent.total_x),
        ("endowment_y", params.endowment_y, extent.total_y),
    ] {
        if !value.is_finite() || value <= 0.0 || value >= total {
            return Err(BoxError::InvalidParameter(format!(
                "`{name}` must lie strictly inside (0, {total}), got {value}"
            )));
        }
    }

    // Shares share the constructor guard with the curve math.
    CobbDouglas::new(params.alpha)?;
    CobbDouglas::new(params.beta)?;

    for (name, value) in [
        ("utility_a", params.utility_a),
        ("utility_b", params.utility_b),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(BoxError::InvalidParameter(format!(
                "`{name}` must be finite and > 0, got {value}"
            )));
        }
    }

    Ok(params)
}

pub(super) fn validate_engine_config(config: BoxEngineConfig) -> BoxResult<BoxEngineConfig> {
    BoxExtent::new(config.extent.total_x, config.extent.total_y)?;
    config.sampling.validate()?;
    config.style.validate()?;
    validate_params(config.params, config.extent)?;
    Ok(config)
}
