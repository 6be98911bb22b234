use thiserror::Error;

/// Errors that can occur while setting up or inspecting a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Temporary directory or document file could not be created, written or read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A document on disk is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
