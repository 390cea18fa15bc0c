use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{
    BoxExtent, CobbDouglas, PlotPoint, indifference_curve_a, indifference_curve_b, sample_grid,
};
use crate::error::BoxResult;
use crate::render::{AxisFrame, LegendEntry, Scene, SeriesId};

use super::BoxEngineConfig;
use super::validation::validate_engine_config;

pub const SCENE_TITLE: &str = "Edgeworth Box";

/// Builds a complete scene from one validated configuration.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output. Every invocation is
/// independent; no state carries over between scenes.
pub fn build_scene(config: &BoxEngineConfig) -> BoxResult<Scene> {
    let config = validate_engine_config(*config)?;
    let params = config.params;
    let extent = config.extent;

    let grid = sample_grid(extent.total_x, config.sampling)?;
    let curve_a = indifference_curve_a(params.utility_a, CobbDouglas::new(params.alpha)?, &grid)?;
    let curve_b = indifference_curve_b(
        params.utility_b,
        CobbDouglas::new(params.beta)?,
        &grid,
        extent,
    )?;

    let (frame_a, frame_b) = axis_frames(extent);
    debug!(
        samples = grid.len(),
        utility_a = params.utility_a,
        utility_b = params.utility_b,
        "built edgeworth scene"
    );

    Ok(Scene {
        extent,
        title: SCENE_TITLE.to_owned(),
        endowment: PlotPoint::new(params.endowment_x, params.endowment_y),
        curve_a,
        curve_b,
        boundary: boundary_polyline(extent),
        frame_a,
        frame_b,
        legend: legend_entries(),
        style: config.style,
        metadata: IndexMap::new(),
    })
}

/// Closed rectangle outline of the feasible box, bottom-left corner first.
fn boundary_polyline(extent: BoxExtent) -> SmallVec<[PlotPoint; 5]> {
    SmallVec::from_buf([
        PlotPoint::new(0.0, 0.0),
        PlotPoint::new(extent.total_x, 0.0),
        PlotPoint::new(extent.total_x, extent.total_y),
        PlotPoint::new(0.0, extent.total_y),
        PlotPoint::new(0.0, 0.0),
    ])
}

fn axis_frames(extent: BoxExtent) -> (AxisFrame, AxisFrame) {
    let frame_a = AxisFrame {
        x_label: "Good X (A left, B right)".to_owned(),
        y_label: "Good Y (A bottom, B top)".to_owned(),
        x_range: (0.0, extent.total_x),
        y_range: (0.0, extent.total_y),
    };
    // B's origin is the top-right corner, so both ranges run backwards.
    let frame_b = AxisFrame {
        x_label: "Good X for B".to_owned(),
        y_label: "Good Y for B".to_owned(),
        x_range: (extent.total_x, 0.0),
        y_range: (extent.total_y, 0.0),
    };
    (frame_a, frame_b)
}

fn legend_entries() -> Vec<LegendEntry> {
    vec![
        LegendEntry {
            series: SeriesId::Endowment,
            label: "Initial Endowment".to_owned(),
        },
        LegendEntry {
            series: SeriesId::CurveA,
            label: "A's indifference curve".to_owned(),
        },
        LegendEntry {
            series: SeriesId::CurveB,
            label: "B's indifference curve".to_owned(),
        },
    ]
}
