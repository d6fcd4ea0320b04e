use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no data available: series must contain at least one bar")]
    EmptyData,

    #[error("chart is not initialized: call set_data before draw")]
    NotInitialized,

    #[error("degenerate range: {0}")]
    DegenerateRange(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("drawing backend failure: {0}")]
    Backend(String),
}
