use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Failed to read stdin: {0}")]
    StdinRead(#[from] io::Error),

    #[error("Failed to parse inventory JSON: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("Failed to read product catalog from {path}: {source}")]
    CatalogRead { path: PathBuf, source: io::Error },

    #[error("Failed to parse product catalog: {0}")]
    CatalogParse(String),

    #[error("Config directory not found")]
    NoConfigDir,

    #[error("Product catalog not found at {0}")]
    CatalogNotFound(PathBuf),

    #[error("Failed to write output JSON: {0}")]
    Output(serde_json::Error),
}

impl AdvisorError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AdvisorError::StdinRead(_) | AdvisorError::InputParse(_) => 2,
            AdvisorError::CatalogNotFound(_)
            | AdvisorError::CatalogRead { .. }
            | AdvisorError::CatalogParse(_)
            | AdvisorError::NoConfigDir => 3,
            AdvisorError::Output(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
