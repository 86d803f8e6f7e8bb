/// Engine-level error taxonomy. Validation, Conflict and NotFound are
/// expected outcomes carrying user-facing messages; Upload and Storage
/// are incidents whose detail is logged at the point of classification
/// and never leaked to callers.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CvError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("photo upload failed: {0}")]
    Upload(String),

    #[error("storage failure: {0}")]
    Storage(String),
}
