use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("local storage is not available in this browser")]
    StorageUnavailable,
    #[error("local storage rejected {op} for key `{key}`")]
    Storage { op: &'static str, key: String },
    #[error("failed to encode or decode stored records: {0}")]
    Json(#[from] serde_json::Error),
}
