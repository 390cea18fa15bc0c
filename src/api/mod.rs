mod controls;
mod engine;
mod engine_config;
mod json_contract;
mod params;
mod scene_builder;
mod validation;

pub use controls::{ControlId, ControlRange};
pub use engine::BoxEngine;
pub use engine_config::BoxEngineConfig;
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
pub use params::BoxParams;
pub use scene_builder::{SCENE_TITLE, build_scene};
