use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a {expected} document, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl ModelError {
    pub fn kind_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::KindMismatch { expected, found }
    }
}
