//! aws CLI wrapper
//!
//! Wraps the aws CLI commands used to query IAM during deployment.

use crate::error::{AwsError, Result};
use switchboard_core::{CommandLauncher, CommandSpec};

/// IAM role assumed by the deployed workflow functions
pub const ROLE_NAME: &str = "switchboard-role";

/// aws CLI wrapper
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsCli;

impl AwsCli {
    /// Query the ARN of the switchboard deployment role.
    ///
    /// stdout is captured and trimmed; stderr passes through to the
    /// caller's terminal so CLI diagnostics stay visible.
    pub async fn get_role_arn(&self, launcher: &dyn CommandLauncher) -> Result<String> {
        let spec = CommandSpec::new("aws").args([
            "iam",
            "get-role",
            "--role-name",
            ROLE_NAME,
            "--query",
            "Role.Arn",
            "--output",
            "text",
        ]);

        tracing::debug!("Running: {}", spec);

        let output = launcher.output(spec).await?;
        if !output.status.success() {
            return Err(AwsError::CommandFailed(format!(
                "aws iam get-role: {}",
                output.status
            )));
        }

        Ok(output.stdout.trim().to_string())
    }
}
