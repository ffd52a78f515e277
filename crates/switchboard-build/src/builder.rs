//! コンポーネントのパッケージング
//!
//! ソースのコピー → 依存関係インストール → zip 圧縮の一連の流れ。
//! ビルドディレクトリ（{component}/.dist）は既定では成功後も残す。

use crate::error::{BuildError, Result};
use crate::{archive, copy, installer};
use std::fs;
use std::path::{Path, PathBuf};
use switchboard_core::{COMPONENTS, CommandLauncher, Progress, ProjectConfig};
use tracing::debug;

/// パッケージング動作のオプション
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// 成功後もビルドディレクトリを残すか（デバッグ時に中身を確認できる）
    pub keep_build_dir: bool,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            keep_build_dir: true,
        }
    }
}

/// 1つのコンポーネントをデプロイ可能な zip にパッケージングする
///
/// 成果物は {projectRoot}/{component}/{component}_lambda.zip に置かれ、
/// 既存のアーカイブは上書きされる。作成したアーカイブのパスを返す。
pub async fn package_component(
    launcher: &dyn CommandLauncher,
    component_name: &str,
    config: &ProjectConfig,
    project_root: &Path,
    options: &PackageOptions,
    progress: &Progress,
) -> Result<PathBuf> {
    let component_path = project_root.join(component_name);
    progress.emit(format!("Packaging {component_name}...")).await;

    if !component_path.is_dir() {
        return Err(BuildError::ComponentMissing(component_name.to_string()));
    }

    let build_dir = component_path.join(".dist");
    fs::create_dir_all(&build_dir).map_err(|source| BuildError::CreateBuildDir {
        path: build_dir.clone(),
        source,
    })?;

    copy::copy_source(&component_path, &build_dir).map_err(BuildError::CopySource)?;

    installer::install_dependencies(
        launcher,
        &component_path,
        &build_dir,
        config.language,
        progress,
    )
    .await?;

    let archive_path = component_path.join(format!("{component_name}_lambda.zip"));
    archive::zip_directory(&build_dir, &archive_path)?;

    if !options.keep_build_dir {
        debug!(build_dir = %build_dir.display(), "Removing build directory");
        fs::remove_dir_all(&build_dir)?;
    }

    progress
        .emit(format!(
            "{component_name} packaged successfully: {}",
            archive_path.display()
        ))
        .await;

    Ok(archive_path)
}

/// 全コンポーネントをパッケージングするトップレベル処理
///
/// 進捗チャネルは処理の終了とともに（成功・失敗どちらでも）一度だけ
/// 閉じる。最初に失敗したコンポーネントで打ち切る。
pub async fn package_functions(
    launcher: &dyn CommandLauncher,
    config: &ProjectConfig,
    project_root: &Path,
    options: &PackageOptions,
    progress: Progress,
) -> Result<()> {
    progress
        .emit("Packaging serverless functions for deployment...")
        .await;

    for component in COMPONENTS {
        package_component(launcher, component, config, project_root, options, &progress).await?;
    }

    progress.emit("Packaging complete.").await;
    Ok(())
}
