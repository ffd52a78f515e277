//! Deploy and teardown sequencing
//!
//! Each operation runs its phases at most once, in a fixed order, and a
//! failing phase aborts the remainder. Partial side effects of completed
//! phases are left to terraform's own idempotence. The progress channel is
//! owned by the operation and closes exactly once when it returns.

use crate::error::{CloudError, Result};
use crate::provider::CloudProvider;
use crate::terraform::Terraform;
use std::path::Path;
use switchboard_core::{COMPONENTS, CommandLauncher, Progress};
use tracing::debug;

/// Confirm every component has a source directory and a packaged archive.
///
/// Fails before any external provisioning call is made.
pub async fn verify_packaged(project_root: &Path, progress: &Progress) -> Result<()> {
    for component in COMPONENTS {
        let component_dir = project_root.join(component);
        let archive = component_dir.join(format!("{component}_lambda.zip"));

        for required in [&component_dir, &archive] {
            if !required.exists() {
                progress
                    .emit("Project not properly packaged for deployment!")
                    .await;
                return Err(CloudError::NotPackaged(required.clone()));
            }
        }
        debug!(component, "Component is packaged");
    }

    Ok(())
}

/// Deploy the packaged workflow with terraform.
///
/// Sequence: verify packaging, resolve cloud credentials, then
/// `init` → `validate` → `apply -auto-approve`, all inside the project's
/// terraform subdirectory with the resolved credentials in the environment.
pub async fn deploy_workflow(
    launcher: &dyn CommandLauncher,
    provider: &dyn CloudProvider,
    project_root: &Path,
    progress: Progress,
) -> Result<()> {
    progress.emit("Initializing and applying Terraform...").await;

    verify_packaged(project_root, &progress).await?;

    let credentials = provider.resolve_credentials(launcher, &progress).await?;
    let terraform = Terraform::new(project_root, credentials);

    terraform.init(launcher, &progress).await?;
    terraform.validate(launcher, &progress).await?;
    terraform.apply(launcher, &progress).await?;

    progress.emit("Workflow deployed successfully.").await;
    Ok(())
}

/// Tear down the deployed workflow with terraform.
///
/// Sequence: resolve cloud credentials, then `destroy -auto-approve`.
pub async fn teardown_workflow(
    launcher: &dyn CommandLauncher,
    provider: &dyn CloudProvider,
    project_root: &Path,
    progress: Progress,
) -> Result<()> {
    progress.emit("Tearing down workflow components...").await;

    let credentials = provider.resolve_credentials(launcher, &progress).await?;
    let terraform = Terraform::new(project_root, credentials);

    terraform.destroy(launcher, &progress).await?;

    progress.emit("Workflow components purged from the cloud.").await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::NoCredentialProvider;
    use std::fs;
    use std::path::PathBuf;
    use switchboard_core::ProgressUpdate;
    use switchboard_core::test_support::RecordingLauncher;
    use tokio::sync::mpsc::Receiver;

    fn packaged_project() -> tempfile::TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        for component in COMPONENTS {
            let dir = temp_dir.path().join(component);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join(format!("{component}_lambda.zip")), "zip").unwrap();
        }
        fs::create_dir_all(temp_dir.path().join("terraform")).unwrap();
        temp_dir
    }

    async fn drain(mut rx: Receiver<ProgressUpdate>) -> Vec<String> {
        let mut messages = Vec::new();
        while let Some(update) = rx.recv().await {
            messages.push(update.message);
        }
        messages
    }

    #[tokio::test]
    async fn test_deploy_aborts_when_archive_missing() {
        let temp_dir = packaged_project();
        fs::remove_file(temp_dir.path().join("executor/executor_lambda.zip")).unwrap();

        let launcher = RecordingLauncher::new();
        let (progress, rx) = Progress::channel();

        let result = deploy_workflow(
            &launcher,
            &NoCredentialProvider::gcp(),
            temp_dir.path(),
            progress,
        )
        .await;

        assert!(matches!(result, Err(CloudError::NotPackaged(_))));
        // No provisioning command may run before the packaging check passes
        assert!(launcher.calls().is_empty());

        let messages = drain(rx).await;
        assert!(
            messages.contains(&"Project not properly packaged for deployment!".to_string())
        );
        assert!(!messages.iter().any(|m| m == "Workflow deployed successfully."));
    }

    #[tokio::test]
    async fn test_deploy_aborts_when_component_directory_missing() {
        let temp_dir = packaged_project();
        fs::remove_dir_all(temp_dir.path().join("workflow")).unwrap();

        let launcher = RecordingLauncher::new();
        let (progress, _rx) = Progress::channel();

        let result = deploy_workflow(
            &launcher,
            &NoCredentialProvider::gcp(),
            temp_dir.path(),
            progress,
        )
        .await;

        assert!(matches!(result, Err(CloudError::NotPackaged(_))));
        assert!(launcher.calls().is_empty());
    }

    #[tokio::test]
    async fn test_deploy_runs_init_validate_apply_in_order() {
        let temp_dir = packaged_project();
        let launcher = RecordingLauncher::new();
        let (progress, rx) = Progress::channel();
        let provider = NoCredentialProvider::azure();
        let handle = deploy_workflow(
            &launcher,
            &provider,
            temp_dir.path(),
            progress,
        );
        let (result, messages) = tokio::join!(handle, drain(rx));
        result.unwrap();

        let rendered: Vec<String> = launcher.calls().iter().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "terraform init",
                "terraform validate",
                "terraform apply -auto-approve",
            ]
        );
        assert_eq!(messages.last().unwrap(), "Workflow deployed successfully.");
    }

    #[tokio::test]
    async fn test_deploy_failed_validate_short_circuits_apply() {
        let temp_dir = packaged_project();
        let launcher = RecordingLauncher::new();
        launcher.fail_matching("terraform validate");
        let (progress, rx) = Progress::channel();

        let provider = NoCredentialProvider::azure();
        let handle = deploy_workflow(
            &launcher,
            &provider,
            temp_dir.path(),
            progress,
        );
        let (result, messages) = tokio::join!(handle, drain(rx));

        assert!(
            matches!(result, Err(CloudError::Provisioning { phase, .. }) if phase == "validate")
        );

        let rendered: Vec<String> = launcher.calls().iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["terraform init", "terraform validate"]);
        assert!(
            messages.contains(&"Error running terraform validate: exit status 1".to_string())
        );
        assert!(!messages.iter().any(|m| m == "Workflow deployed successfully."));
    }

    #[tokio::test]
    async fn test_teardown_runs_exactly_destroy() {
        let temp_dir = packaged_project();
        let launcher = RecordingLauncher::new();
        let (progress, rx) = Progress::channel();

        let provider = NoCredentialProvider::azure();
        let handle = teardown_workflow(
            &launcher,
            &provider,
            temp_dir.path(),
            progress,
        );
        let (result, messages) = tokio::join!(handle, drain(rx));
        result.unwrap();

        let rendered: Vec<String> = launcher.calls().iter().map(|c| c.to_string()).collect();
        assert_eq!(rendered, vec!["terraform destroy -auto-approve"]);

        assert_eq!(messages.first().unwrap(), "Tearing down workflow components...");
        assert_eq!(
            messages.last().unwrap(),
            "Workflow components purged from the cloud."
        );
    }

    #[tokio::test]
    async fn test_teardown_does_not_require_packaging() {
        // Teardown must work even after packaged archives were deleted
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("terraform")).unwrap();

        let launcher = RecordingLauncher::new();
        let (progress, _rx) = Progress::channel();

        teardown_workflow(
            &launcher,
            &NoCredentialProvider::gcp(),
            temp_dir.path(),
            progress,
        )
        .await
        .unwrap();

        assert_eq!(launcher.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_channel_closes_after_deploy_returns() {
        let temp_dir = packaged_project();
        let launcher = RecordingLauncher::new();
        let (progress, mut rx) = Progress::channel();

        deploy_workflow(
            &launcher,
            &NoCredentialProvider::azure(),
            temp_dir.path(),
            progress,
        )
        .await
        .unwrap();

        // The sender was consumed by the operation, so the stream terminates
        let mut count = 0;
        while rx.recv().await.is_some() {
            count += 1;
        }
        assert!(count >= 2);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_deploy_injects_provider_credentials() {
        struct FixedCredentials;

        #[async_trait::async_trait]
        impl CloudProvider for FixedCredentials {
            fn name(&self) -> &str {
                "fixed"
            }

            async fn resolve_credentials(
                &self,
                _launcher: &dyn CommandLauncher,
                _progress: &Progress,
            ) -> Result<Vec<(String, String)>> {
                Ok(vec![(
                    "TF_VAR_switchboard_role_arn".to_string(),
                    "arn:aws:iam::123456789012:role/switchboard-role".to_string(),
                )])
            }
        }

        let temp_dir = packaged_project();
        let launcher = RecordingLauncher::new();
        let (progress, rx) = Progress::channel();

        let handle = deploy_workflow(&launcher, &FixedCredentials, temp_dir.path(), progress);
        let (result, _messages) = tokio::join!(handle, drain(rx));
        result.unwrap();

        for call in launcher.calls() {
            assert!(call.has_env(
                "TF_VAR_switchboard_role_arn",
                "arn:aws:iam::123456789012:role/switchboard-role"
            ));
        }
    }

    #[tokio::test]
    async fn test_terraform_dir_is_used_as_working_directory() {
        let temp_dir = packaged_project();
        let launcher = RecordingLauncher::new();
        let (progress, rx) = Progress::channel();

        let provider = NoCredentialProvider::azure();
        let handle = deploy_workflow(
            &launcher,
            &provider,
            temp_dir.path(),
            progress,
        );
        let (result, _messages) = tokio::join!(handle, drain(rx));
        result.unwrap();

        let expected: PathBuf = temp_dir.path().join("terraform");
        for call in launcher.calls() {
            assert_eq!(call.cwd.as_deref(), Some(expected.as_path()));
        }
    }
}
