use thiserror::Error;

pub type BoxResult<T> = Result<T, BoxError>;

#[derive(Debug, Error)]
pub enum BoxError {
    #[error("invalid box extent: total_x={total_x}, total_y={total_y}")]
    InvalidExtent { total_x: f64, total_y: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
