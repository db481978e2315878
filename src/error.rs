use thiserror::Error;

/// Why a raw value could not be used as a nutrient reading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadingError {
    #[error("No value recorded")]
    Missing,

    #[error("Expected a number, found {0}")]
    NotANumber(String),

    #[error("Value is not finite: {0}")]
    NotFinite(f64),
}

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to parse nutrition log: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Nutrition log contains no days")]
    Empty,
}

pub type Result<T> = std::result::Result<T, LogError>;
