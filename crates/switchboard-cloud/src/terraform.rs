//! terraform CLI wrapper
//!
//! Runs terraform lifecycle phases inside the project's terraform
//! subdirectory with an augmented environment. Standard streams pass
//! through to the caller's terminal; only the phase outcome is reported
//! on the progress channel.

use crate::error::{CloudError, Result};
use std::path::{Path, PathBuf};
use switchboard_core::{CommandLauncher, CommandSpec, Progress};

/// Provisioning subdirectory inside the project root
pub const TERRAFORM_DIR: &str = "terraform";

/// terraform CLI wrapper bound to one working directory and environment
pub struct Terraform {
    working_dir: PathBuf,
    env: Vec<(String, String)>,
}

impl Terraform {
    /// Create a wrapper for the terraform directory under `project_root`.
    ///
    /// `env` entries (typically `TF_VAR_*` credentials) are injected into
    /// every phase run through this wrapper.
    pub fn new(project_root: &Path, env: Vec<(String, String)>) -> Self {
        Self {
            working_dir: project_root.join(TERRAFORM_DIR),
            env,
        }
    }

    pub async fn init(
        &self,
        launcher: &dyn CommandLauncher,
        progress: &Progress,
    ) -> Result<()> {
        self.phase(launcher, progress, "init", &[]).await
    }

    pub async fn validate(
        &self,
        launcher: &dyn CommandLauncher,
        progress: &Progress,
    ) -> Result<()> {
        self.phase(launcher, progress, "validate", &[]).await
    }

    pub async fn apply(
        &self,
        launcher: &dyn CommandLauncher,
        progress: &Progress,
    ) -> Result<()> {
        self.phase(launcher, progress, "apply", &["-auto-approve"])
            .await
    }

    pub async fn destroy(
        &self,
        launcher: &dyn CommandLauncher,
        progress: &Progress,
    ) -> Result<()> {
        self.phase(launcher, progress, "destroy", &["-auto-approve"])
            .await
    }

    /// Run one terraform phase and classify its exit status.
    async fn phase(
        &self,
        launcher: &dyn CommandLauncher,
        progress: &Progress,
        phase: &str,
        extra_args: &[&str],
    ) -> Result<()> {
        let spec = CommandSpec::new("terraform")
            .arg(phase)
            .args(extra_args.iter().copied())
            .current_dir(&self.working_dir)
            .envs(self.env.iter().cloned());

        tracing::debug!(dir = %self.working_dir.display(), "Running: {}", spec);

        let status = launcher.run(spec).await?;
        if !status.success() {
            progress
                .emit(format!("Error running terraform {phase}: {status}"))
                .await;
            return Err(CloudError::Provisioning {
                phase: phase.to_string(),
                status,
            });
        }

        Ok(())
    }
}
