use std::fmt;

// === StorageError ===

/// Errors raised by the persistence layer and the managers above it.
#[derive(Debug)]
pub enum StorageError {
    /// The backing store refused the operation or could not be reached.
    Unavailable(String),
    /// A persisted value could not be encoded or decoded.
    Serialization(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Serialization(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Unavailable(err.to_string())
    }
}

// === RenderError ===

/// Errors related to assembling or placing widget markup.
#[derive(Debug)]
pub enum RenderError {
    /// The configured container id does not exist on the page.
    MissingContainer(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::MissingContainer(id) => {
                write!(f, "Render container not found: {}", id)
            }
        }
    }
}

impl std::error::Error for RenderError {}
