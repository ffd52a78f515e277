//! Cloud orchestration error types

use std::path::PathBuf;
use switchboard_core::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloudError {
    #[error("project is not packaged for deployment (missing {0})")]
    NotPackaged(PathBuf),

    #[error("credential resolution failed: {0}")]
    CredentialFailed(String),

    #[error("terraform {phase} failed: {status}")]
    Provisioning { phase: String, status: ExitStatus },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] switchboard_core::CoreError),
}

pub type Result<T> = std::result::Result<T, CloudError>;
