//! package コマンド
//!
//! パッケージング本体を別タスクで走らせ、このタスクは進捗チャネルを
//! 閉じるまで読み切ってから結果を回収する。

use switchboard_build::PackageOptions;
use switchboard_core::{OsLauncher, Progress};

pub async fn handle(clean: bool) -> anyhow::Result<()> {
    let (config, project_root) = switchboard_core::load_config()?;
    let options = PackageOptions {
        keep_build_dir: !clean,
    };

    let (progress, mut rx) = Progress::channel();

    let producer = tokio::spawn(async move {
        switchboard_build::package_functions(&OsLauncher, &config, &project_root, &options, progress)
            .await
    });

    // チャネルが閉じるまで読み切る
    while let Some(update) = rx.recv().await {
        super::print_update(&update);
    }

    producer.await??;
    Ok(())
}
