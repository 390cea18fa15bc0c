use serde::{Deserialize, Serialize};

use super::BoxParams;

/// Identifier of one numeric control exposed to binding collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlId {
    EndowmentX,
    EndowmentY,
    Alpha,
    Beta,
    UtilityA,
    UtilityB,
}

/// Range contract for one numeric control.
///
/// `step` is a UI affordance; the engine only enforces `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ControlRange {
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value.is_finite() && (self.min..=self.max).contains(&value)
    }
}

impl ControlId {
    pub const ALL: [ControlId; 6] = [
        ControlId::EndowmentX,
        ControlId::EndowmentY,
        ControlId::Alpha,
        ControlId::Beta,
        ControlId::UtilityA,
        ControlId::UtilityB,
    ];

    #[must_use]
    pub fn range(self) -> ControlRange {
        match self {
            ControlId::EndowmentX | ControlId::EndowmentY => ControlRange {
                min: 1.0,
                max: 9.0,
                step: 0.5,
                default: 5.0,
            },
            ControlId::Alpha | ControlId::Beta => ControlRange {
                min: 0.1,
                max: 0.9,
                step: 0.1,
                default: 0.5,
            },
            ControlId::UtilityA | ControlId::UtilityB => ControlRange {
                min: 1.0,
                max: 25.0,
                step: 1.0,
                default: 10.0,
            },
        }
    }

    /// Short description shown next to the control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ControlId::EndowmentX => "xA endow",
            ControlId::EndowmentY => "yA endow",
            ControlId::Alpha => "Alpha A",
            ControlId::Beta => "Beta B",
            ControlId::UtilityA => "Utility A",
            ControlId::UtilityB => "Utility B",
        }
    }

    #[must_use]
    pub(super) fn current_value(self, params: BoxParams) -> f64 {
        match self {
            ControlId::EndowmentX => params.endowment_x,
            ControlId::EndowmentY => params.endowment_y,
            ControlId::Alpha => params.alpha,
            ControlId::Beta => params.beta,
            ControlId::UtilityA => params.utility_a,
            ControlId::UtilityB => params.utility_b,
        }
    }

    pub(super) fn apply(self, params: &mut BoxParams, value: f64) {
        match self {
            ControlId::EndowmentX => params.endowment_x = value,
            ControlId::EndowmentY => params.endowment_y = value,
            ControlId::Alpha => params.alpha = value,
            ControlId::Beta => params.beta = value,
            ControlId::UtilityA => params.utility_a = value,
            ControlId::UtilityB => params.utility_b = value,
        }
    }
}
