/// Same taxonomy as the CV engine: expected outcomes carry messages,
/// Upload and Storage are incidents logged where they are classified.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CandidateError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("file upload failed: {0}")]
    Upload(String),

    #[error("storage failure: {0}")]
    Storage(String),
}
