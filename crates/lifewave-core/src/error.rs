use thiserror::Error;

pub type Result<T> = std::result::Result<T, LifeError>;

#[derive(Debug, Error)]
pub enum LifeError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("preset format error: {0}")]
    PresetFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
