pub mod indifference;
pub mod preference;
pub mod sampling;
pub mod types;

pub use indifference::{Agent, IndifferenceCurve, indifference_curve_a, indifference_curve_b};
pub use preference::CobbDouglas;
pub use sampling::{SamplingConfig, sample_grid};
pub use types::{BoxExtent, PlotPoint};
