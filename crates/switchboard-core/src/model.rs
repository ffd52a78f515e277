//! プロジェクト設定モデル
//!
//! プロジェクトルートの目印となる switchboard.json の型定義。
//! 読み込み後は1回の操作の間は不変として扱う。

use serde::{Deserialize, Serialize};
use std::fmt;

/// プロジェクトルートを示すマーカー設定ファイル名
pub const CONFIG_FILE_NAME: &str = "switchboard.json";

/// パッケージング対象のコンポーネント（各々が独立した zip になる）
pub const COMPONENTS: &[&str] = &["workflow", "executor"];

/// switchboard.json の内容
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub language: Language,
    pub cloud: Cloud,
}

/// コンポーネントの実装言語
///
/// 閉じた列挙にすることで、言語ディスパッチの網羅性をコンパイル時に
/// 保証する。不正な値はデシリアライズの時点で弾かれる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Py,
    Ts,
    Go,
}

impl Language {
    /// 言語ごとの依存関係マニフェストのファイル名
    pub fn manifest_file(&self) -> &'static str {
        match self {
            Language::Py => "requirements.txt",
            Language::Ts => "package.json",
            Language::Go => "go.mod",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Py => "py",
            Language::Ts => "ts",
            Language::Go => "go",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// デプロイ先のクラウド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cloud {
    Aws,
    Azure,
    Gcp,
}

impl Cloud {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cloud::Aws => "aws",
            Cloud::Azure => "azure",
            Cloud::Gcp => "gcp",
        }
    }
}

impl fmt::Display for Cloud {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
