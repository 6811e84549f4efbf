use thiserror::Error;

/// Faults that can surface from shop generation.
#[derive(Debug, Error)]
pub enum GenError {
    /// Resolved size or price policy is outside the allowed set. Maps to 400.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Malformed generation config or catalog data. Server fault, maps to 500.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
