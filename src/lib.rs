//! edgeworth-rs: two-agent exchange-economy diagram engine.
//!
//! This crate keeps a strict architectural split: pure Cobb-Douglas curve
//! math in `core`, backend-agnostic scene values in `render`, and an engine
//! facade in `api` that binds numeric controls to scene construction.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BoxEngine, BoxEngineConfig, BoxParams};
pub use error::{BoxError, BoxResult};
