//! Cloud provider trait definition

use crate::error::Result;
use async_trait::async_trait;
use switchboard_core::{CommandLauncher, Progress};

/// Cloud provider abstraction trait
///
/// Providers resolve the runtime credentials the provisioning tool needs
/// and expose them as `TF_VAR_*` environment entries. The same launcher that
/// runs the provisioning phases is passed in, so tests can observe credential
/// queries and terraform invocations through a single recorder.
#[async_trait]
pub trait CloudProvider: Send + Sync {
    /// Returns the provider name (e.g., "aws")
    fn name(&self) -> &str;

    /// Resolve the credentials to inject into the provisioning environment.
    ///
    /// Returns `TF_VAR_*` key/value pairs. Providers without a credential
    /// resolution step return an empty set and perform no side effect.
    async fn resolve_credentials(
        &self,
        launcher: &dyn CommandLauncher,
        progress: &Progress,
    ) -> Result<Vec<(String, String)>>;
}

/// Provider for clouds whose deployment needs no credential-resolution step
pub struct NoCredentialProvider {
    name: &'static str,
}

impl NoCredentialProvider {
    pub fn azure() -> Self {
        Self { name: "azure" }
    }

    pub fn gcp() -> Self {
        Self { name: "gcp" }
    }
}

#[async_trait]
impl CloudProvider for NoCredentialProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn resolve_credentials(
        &self,
        _launcher: &dyn CommandLauncher,
        _progress: &Progress,
    ) -> Result<Vec<(String, String)>> {
        Ok(Vec::new())
    }
}
