use crate::field::FieldId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    #[error("You must specify at least one MP4 file")]
    NoFiles,

    #[error("You must specify at least one tag modification")]
    NoModifications,

    #[error("option requires integer argument -- {field}: '{value}'")]
    InvalidNumber { field: FieldId, value: String },

    #[error("Could not open '{}'... aborting", .0.display())]
    OpenFailed(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),
}

impl TagError {
    /// Process exit code for each failure class. Usage errors and the
    /// per-file fatal each get a distinct code so scripts can tell them
    /// apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            TagError::InvalidNumber { .. } => 2,
            TagError::NoFiles => 3,
            TagError::NoModifications => 4,
            TagError::OpenFailed(_) => 5,
            TagError::Io(_) | TagError::Store(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TagError>;
