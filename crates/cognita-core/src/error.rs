use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown scale type: {0}")]
    UnknownScaleType(String),

    #[error("unknown index: {0}")]
    UnknownIndex(String),

    #[error("unknown subtest: {0}")]
    UnknownSubtest(String),
}
