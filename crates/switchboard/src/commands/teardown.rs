//! teardown コマンド

use switchboard_core::{OsLauncher, Progress};

pub async fn handle() -> anyhow::Result<()> {
    let (config, project_root) = switchboard_core::load_config()?;
    let provider = super::provider_for(config.cloud);

    let (progress, mut rx) = Progress::channel();

    let producer = tokio::spawn(async move {
        switchboard_cloud::teardown_workflow(
            &OsLauncher,
            provider.as_ref(),
            &project_root,
            progress,
        )
        .await
    });

    // チャネルが閉じるまで読み切る
    while let Some(update) = rx.recv().await {
        super::print_update(&update);
    }

    producer.await??;
    Ok(())
}
