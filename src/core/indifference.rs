use serde::{Deserialize, Serialize};

use crate::core::preference::{CobbDouglas, validate_utility_level};
use crate::core::types::{BoxExtent, PlotPoint};
use crate::error::{BoxError, BoxResult};

/// Which agent an indifference curve belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agent {
    A,
    B,
}

/// Open polyline of allocations giving one agent constant utility.
///
/// Points keep the order of the input sample sequence; for agent B the
/// coordinates are already reflected into agent A's frame, so the x-values
/// run high-to-low there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndifferenceCurve {
    pub agent: Agent,
    pub utility: f64,
    pub points: Vec<PlotPoint>,
}

impl IndifferenceCurve {
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Agent A's indifference curve at utility level `u` over the sampled
/// x-domain.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output. Out-of-box y-values are
/// returned as-is; a curve segment escaping the box is informative content,
/// not an error.
pub fn indifference_curve_a(
    u: f64,
    preference: CobbDouglas,
    samples: &[f64],
) -> BoxResult<IndifferenceCurve> {
    validate_utility_level(u)?;
    validate_samples(samples)?;

    let mut points = Vec::with_capacity(samples.len());
    for &x in samples {
        points.push(PlotPoint::new(x, preference.y_for_utility(u, x)?));
    }

    Ok(IndifferenceCurve {
        agent: Agent::A,
        utility: u,
        points,
    })
}

/// Agent B's indifference curve at utility level `u`, mirrored into agent A's
/// coordinate frame.
///
/// Samples are interpreted as B's own x-quantity. The native curve is
/// computed exactly as for agent A and every pair is then reflected through
/// the box center, since B's allocation is the complement of A's and B's
/// origin sits at the box's top-right corner.
pub fn indifference_curve_b(
    u: f64,
    preference: CobbDouglas,
    samples: &[f64],
    extent: BoxExtent,
) -> BoxResult<IndifferenceCurve> {
    validate_utility_level(u)?;
    validate_samples(samples)?;

    let mut points = Vec::with_capacity(samples.len());
    for &x in samples {
        let native = PlotPoint::new(x, preference.y_for_utility(u, x)?);
        points.push(extent.reflect_through_center(native));
    }

    Ok(IndifferenceCurve {
        agent: Agent::B,
        utility: u,
        points,
    })
}

fn validate_samples(samples: &[f64]) -> BoxResult<()> {
    if samples.is_empty() {
        return Err(BoxError::InvalidParameter(
            "sample sequence must not be empty".to_owned(),
        ));
    }

    for &x in samples {
        if !x.is_finite() || x <= 0.0 {
            return Err(BoxError::InvalidParameter(format!(
                "sample values must be finite and > 0, got {x}"
            )));
        }
    }

    for pair in samples.windows(2) {
        if pair[1] <= pair[0] {
            return Err(BoxError::InvalidParameter(
                "sample sequence must be strictly increasing".to_owned(),
            ));
        }
    }

    Ok(())
}
