use std::path::PathBuf;
use switchboard_core::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("{0} directory not found")]
    ComponentMissing(String),

    #[error("manifest not found: {0}")]
    ManifestMissing(PathBuf),

    #[error("{tool} failed: {status}")]
    DependencyInstall {
        tool: &'static str,
        status: ExitStatus,
    },

    #[error("failed to create build directory {path}")]
    CreateBuildDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy source code")]
    CopySource(#[source] std::io::Error),

    #[error("failed to create zip file {path}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] switchboard_core::CoreError),
}

pub type Result<T> = std::result::Result<T, BuildError>;
