use serde::{Deserialize, Serialize};

use crate::error::{BoxError, BoxResult};

/// One coordinate pair in agent A's frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn validate(self) -> BoxResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(BoxError::InvalidParameter(
                "plot point coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Aggregate endowment of both goods shared by the two agents.
///
/// Every feasible allocation for agent A lies in `[0, total_x] x [0, total_y]`;
/// agent B's implied allocation is the complement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxExtent {
    pub total_x: f64,
    pub total_y: f64,
}

impl BoxExtent {
    pub fn new(total_x: f64, total_y: f64) -> BoxResult<Self> {
        if !total_x.is_finite() || !total_y.is_finite() || total_x <= 0.0 || total_y <= 0.0 {
            return Err(BoxError::InvalidExtent { total_x, total_y });
        }

        Ok(Self { total_x, total_y })
    }

    #[must_use]
    pub fn contains(self, point: PlotPoint) -> bool {
        (0.0..=self.total_x).contains(&point.x) && (0.0..=self.total_y).contains(&point.y)
    }

    /// Reflects a point through the box center.
    ///
    /// This maps an allocation expressed in agent B's own frame into agent A's
    /// frame (and back: the reflection is its own inverse).
    #[must_use]
    pub fn reflect_through_center(self, point: PlotPoint) -> PlotPoint {
        PlotPoint::new(self.total_x - point.x, self.total_y - point.y)
    }
}

impl Default for BoxExtent {
    fn default() -> Self {
        Self {
            total_x: 10.0,
            total_y: 10.0,
        }
    }
}
