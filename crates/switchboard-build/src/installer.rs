//! 依存関係インストール
//!
//! 言語ごとに決まった外部ツールを1つ（go は2つ）起動する。ツールの
//! 標準入出力は呼び出し元の端末に流れ、進捗チャネルには要約だけ送る。

use crate::error::{BuildError, Result};
use std::path::Path;
use switchboard_core::{CommandLauncher, CommandSpec, Language, Progress};

/// config.language に応じて依存関係をインストールする
pub async fn install_dependencies(
    launcher: &dyn CommandLauncher,
    component_dir: &Path,
    build_dir: &Path,
    language: Language,
    progress: &Progress,
) -> Result<()> {
    match language {
        Language::Py => install_pip(launcher, component_dir, build_dir, progress).await,
        Language::Ts => install_npm(launcher, component_dir, progress).await,
        Language::Go => install_go(launcher, component_dir, build_dir, progress).await,
    }
}

async fn install_pip(
    launcher: &dyn CommandLauncher,
    component_dir: &Path,
    build_dir: &Path,
    progress: &Progress,
) -> Result<()> {
    progress
        .emit("Installing Python dependencies from requirements.txt...")
        .await;

    let requirements = component_dir.join("requirements.txt");
    if !requirements.exists() {
        progress.emit("No requirements.txt found.").await;
        return Err(BuildError::ManifestMissing(requirements));
    }

    let spec = CommandSpec::new("pip")
        .arg("install")
        .arg("-r")
        .arg(requirements.display().to_string())
        .arg("-t")
        .arg(build_dir.display().to_string());

    let status = launcher.run(spec).await?;
    if !status.success() {
        progress
            .emit(format!("Error: pip install failed: {status}"))
            .await;
        return Err(BuildError::DependencyInstall {
            tool: "pip install",
            status,
        });
    }

    Ok(())
}

async fn install_npm(
    launcher: &dyn CommandLauncher,
    component_dir: &Path,
    progress: &Progress,
) -> Result<()> {
    progress
        .emit("Installing Node.js dependencies from package.json...")
        .await;

    // package.json が無いコンポーネントは依存なしとして扱う
    if !component_dir.join("package.json").exists() {
        progress
            .emit("No package.json found, skipping npm install.")
            .await;
        return Ok(());
    }

    let spec = CommandSpec::new("npm")
        .arg("install")
        .arg("--prefix")
        .arg(component_dir.display().to_string());

    let status = launcher.run(spec).await?;
    if !status.success() {
        progress
            .emit(format!("Error: npm install failed: {status}"))
            .await;
        return Err(BuildError::DependencyInstall {
            tool: "npm install",
            status,
        });
    }

    Ok(())
}

async fn install_go(
    launcher: &dyn CommandLauncher,
    component_dir: &Path,
    build_dir: &Path,
    progress: &Progress,
) -> Result<()> {
    progress.emit("Tidying and building Go dependencies...").await;

    // go.mod が無いコンポーネントはビルド対象なしとして扱う
    if !component_dir.join("go.mod").exists() {
        progress.emit("No go.mod found, skipping go build.").await;
        return Ok(());
    }

    let tidy = CommandSpec::new("go")
        .arg("mod")
        .arg("tidy")
        .current_dir(component_dir);
    let status = launcher.run(tidy).await?;
    if !status.success() {
        progress
            .emit(format!("Error: go mod tidy failed: {status}"))
            .await;
        return Err(BuildError::DependencyInstall {
            tool: "go mod tidy",
            status,
        });
    }

    let build = CommandSpec::new("go")
        .arg("build")
        .arg("-o")
        .arg(build_dir.display().to_string())
        .current_dir(component_dir);
    let status = launcher.run(build).await?;
    if !status.success() {
        progress
            .emit(format!("Error: go build failed: {status}"))
            .await;
        return Err(BuildError::DependencyInstall {
            tool: "go build",
            status,
        });
    }

    Ok(())
}
