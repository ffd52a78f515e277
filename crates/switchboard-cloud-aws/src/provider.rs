//! AWS provider implementation

use crate::iam::AwsCli;
use async_trait::async_trait;
use switchboard_cloud::{CloudError, CloudProvider};
use switchboard_core::{CommandLauncher, Progress};

/// Environment variable consumed by the terraform configuration
pub const ROLE_ARN_VAR: &str = "TF_VAR_switchboard_role_arn";

/// AWS provider
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsProvider {
    iam: AwsCli,
}

impl AwsProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CloudProvider for AwsProvider {
    fn name(&self) -> &str {
        "aws"
    }

    async fn resolve_credentials(
        &self,
        launcher: &dyn CommandLauncher,
        progress: &Progress,
    ) -> switchboard_cloud::Result<Vec<(String, String)>> {
        let arn = match self.iam.get_role_arn(launcher).await {
            Ok(arn) => arn,
            Err(e) => {
                progress
                    .emit(format!("Error querying for switchboard-role arn: {e}"))
                    .await;
                return Err(CloudError::CredentialFailed(e.to_string()));
            }
        };

        progress.emit(format!("Retrieved arn: '{arn}'")).await;

        Ok(vec![(ROLE_ARN_VAR.to_string(), arn)])
    }
}
