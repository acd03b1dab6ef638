use thiserror::Error;

use common::error::Error as LayoutError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Failed to load bench config: {0}")]
    ConfigLoadError(String),

    #[error("Invalid bench config: {0}")]
    InvalidConfig(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
