//! AWS provider error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AwsError {
    #[error("aws command failed: {0}")]
    CommandFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] switchboard_core::CoreError),

    #[error("Cloud error: {0}")]
    Cloud(#[from] switchboard_cloud::CloudError),
}

pub type Result<T> = std::result::Result<T, AwsError>;
