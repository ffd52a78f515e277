//! プロジェクトルート探索と設定ロード
//!
//! カレントディレクトリから上に向かって switchboard.json を探す。
//! マーカーファイルの存在だけがプロジェクトルートの判定材料になる。

use crate::error::{CoreError, Result};
use crate::model::{CONFIG_FILE_NAME, ProjectConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// カレントディレクトリを起点にプロジェクトルートを検出
pub fn find_project_root() -> Result<PathBuf> {
    let start = std::env::current_dir()?;
    find_project_root_from(&start)
}

/// 指定ディレクトリを起点にプロジェクトルートを検出
///
/// 親へ遡りながら switchboard.json を探し、ファイルシステムの
/// ルートまで見つからなければ失敗する。
pub fn find_project_root_from(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        debug!(checking = %current.display(), "Looking for switchboard.json");
        if config_path.exists() {
            info!(project_root = %current.display(), "Found project root");
            return Ok(current);
        }

        if !current.pop() {
            return Err(CoreError::ProjectRootNotFound(start.to_path_buf()));
        }
    }
}

/// プロジェクトルートを探し、設定を読み込んで返す
pub fn load_config() -> Result<(ProjectConfig, PathBuf)> {
    let project_root = find_project_root()?;
    let config = load_config_at(&project_root)?;
    Ok((config, project_root))
}

/// 指定されたプロジェクトルート直下の switchboard.json を読み込む
///
/// 読めない・パースできない・enum 値が不正、のいずれも設定エラーとして
/// この時点で失敗させる。
pub fn load_config_at(project_root: &Path) -> Result<ProjectConfig> {
    let config_path = project_root.join(CONFIG_FILE_NAME);

    let data = std::fs::read_to_string(&config_path).map_err(|e| CoreError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    let config: ProjectConfig =
        serde_json::from_str(&data).map_err(|e| CoreError::ConfigParse {
            path: config_path,
            source: e,
        })?;

    if config.name.is_empty() {
        return Err(CoreError::InvalidConfig(
            "project name must not be empty".to_string(),
        ));
    }

    Ok(config)
}
