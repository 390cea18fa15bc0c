use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoxExtent, IndifferenceCurve, PlotPoint};
use crate::error::{BoxError, BoxResult};
use crate::render::SceneStyle;

/// Series identity used to pair legend entries and style with geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesId {
    Endowment,
    CurveA,
    CurveB,
}

/// One legend row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub series: SeriesId,
    pub label: String,
}

/// Axis metadata for one agent's coordinate frame.
///
/// Agent A's frame reads bottom-left to top-right. Agent B's frame reverses
/// both ranges so its origin sits at the box's top-right corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl AxisFrame {
    pub fn validate(&self) -> BoxResult<()> {
        if self.x_label.is_empty() || self.y_label.is_empty() {
            return Err(BoxError::InvalidParameter(
                "axis labels must not be empty".to_owned(),
            ));
        }

        for (name, range) in [("x", self.x_range), ("y", self.y_range)] {
            if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
                return Err(BoxError::InvalidParameter(format!(
                    "axis {name}-range must be finite and non-degenerate"
                )));
            }
        }

        Ok(())
    }
}

/// Smallest axis-aligned ranges covering the box and every plotted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

/// Backend-agnostic scene for one diagram draw pass.
///
/// A scene is a plain value: built fresh from one parameter set, handed to a
/// renderer, then discarded. Nothing in it is mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub extent: BoxExtent,
    pub title: String,
    pub endowment: PlotPoint,
    pub curve_a: IndifferenceCurve,
    pub curve_b: IndifferenceCurve,
    /// Closed rectangle outline; the first corner is repeated at the end.
    pub boundary: SmallVec<[PlotPoint; 5]>,
    pub frame_a: AxisFrame,
    pub frame_b: AxisFrame,
    pub legend: Vec<LegendEntry>,
    pub style: SceneStyle,
    pub metadata: IndexMap<String, String>,
}

impl Scene {
    pub fn validate(&self) -> BoxResult<()> {
        BoxExtent::new(self.extent.total_x, self.extent.total_y)?;

        if self.title.is_empty() {
            return Err(BoxError::InvalidParameter(
                "scene title must not be empty".to_owned(),
            ));
        }

        self.endowment.validate()?;
        if !self.extent.contains(self.endowment) {
            return Err(BoxError::InvalidParameter(
                "endowment point must lie inside the box".to_owned(),
            ));
        }

        for curve in [&self.curve_a, &self.curve_b] {
            if curve.is_empty() {
                return Err(BoxError::InvalidParameter(
                    "indifference curves must not be empty".to_owned(),
                ));
            }
            for point in &curve.points {
                point.validate()?;
            }
        }

        if self.boundary.len() < 4 {
            return Err(BoxError::InvalidParameter(
                "box boundary must have at least four corners".to_owned(),
            ));
        }
        for point in &self.boundary {
            point.validate()?;
        }
        if self.boundary.first() != self.boundary.last() {
            return Err(BoxError::InvalidParameter(
                "box boundary polyline must be closed".to_owned(),
            ));
        }

        self.frame_a.validate()?;
        self.frame_b.validate()?;
        self.style.validate()?;

        Ok(())
    }

    /// Bounds covering the boundary, both curves, and the endowment marker.
    ///
    /// Curves may legitimately escape the box; callers that do not want the
    /// draw-through default can widen their viewport to these ranges instead.
    #[must_use]
    pub fn view_bounds(&self) -> ViewBounds {
        let points = self
            .boundary
            .iter()
            .chain(&self.curve_a.points)
            .chain(&self.curve_b.points)
            .chain(std::iter::once(&self.endowment));

        let mut x_min = OrderedFloat(f64::INFINITY);
        let mut x_max = OrderedFloat(f64::NEG_INFINITY);
        let mut y_min = OrderedFloat(f64::INFINITY);
        let mut y_max = OrderedFloat(f64::NEG_INFINITY);
        for point in points {
            x_min = x_min.min(OrderedFloat(point.x));
            x_max = x_max.max(OrderedFloat(point.x));
            y_min = y_min.min(OrderedFloat(point.y));
            y_max = y_max.max(OrderedFloat(point.y));
        }

        ViewBounds {
            x_range: (x_min.into_inner(), x_max.into_inner()),
            y_range: (y_min.into_inner(), y_max.into_inner()),
        }
    }

    /// Total number of curve points in the scene.
    #[must_use]
    pub fn curve_point_count(&self) -> usize {
        self.curve_a.len() + self.curve_b.len()
    }
}
