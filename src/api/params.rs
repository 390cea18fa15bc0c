use serde::{Deserialize, Serialize};

/// The six interactive parameters of the diagram.
///
/// Defaults match the control table exposed to binding collaborators, so a
/// freshly constructed value renders the canonical centered figure. All
/// fields are serde-defaulted individually to keep persisted setups loadable
/// when new parameters appear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxParams {
    /// Agent A's initial allocation of good X.
    #[serde(default = "default_endowment")]
    pub endowment_x: f64,
    /// Agent A's initial allocation of good Y.
    #[serde(default = "default_endowment")]
    pub endowment_y: f64,
    /// Agent A's Cobb-Douglas share on good X.
    #[serde(default = "default_share")]
    pub alpha: f64,
    /// Agent B's Cobb-Douglas share on good X.
    #[serde(default = "default_share")]
    pub beta: f64,
    /// Target utility level for agent A's indifference curve.
    #[serde(default = "default_utility_level")]
    pub utility_a: f64,
    /// Target utility level for agent B's indifference curve.
    #[serde(default = "default_utility_level")]
    pub utility_b: f64,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            endowment_x: default_endowment(),
            endowment_y: default_endowment(),
            alpha: default_share(),
            beta: default_share(),
            utility_a: default_utility_level(),
            utility_b: default_utility_level(),
        }
    }
}

impl BoxParams {
    /// Sets agent A's initial allocation.
    #[must_use]
    pub fn with_endowment(mut self, endowment_x: f64, endowment_y: f64) -> Self {
        self.endowment_x = endowment_x;
        self.endowment_y = endowment_y;
        self
    }

    /// Sets both preference shares.
    #[must_use]
    pub fn with_shares(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets both target utility levels.
    #[must_use]
    pub fn with_utility_levels(mut self, utility_a: f64, utility_b: f64) -> Self {
        self.utility_a = utility_a;
        self.utility_b = utility_b;
        self
    }
}

fn default_endowment() -> f64 {
    5.0
}

fn default_share() -> f64 {
    0.5
}

fn default_utility_level() -> f64 {
    10.0
}
