use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Terminal load-time failure: the input dataset is malformed or
    /// incomplete. No partial chart is constructed.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
