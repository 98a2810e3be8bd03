use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("malformed sample: expected at least 6 numeric fields, got {len}")]
    MalformedSample { len: usize },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
