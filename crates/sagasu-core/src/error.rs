use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(String),

    #[error("selection index {index} out of range (result set has {len} entries)")]
    Selection { index: usize, len: usize },
}
