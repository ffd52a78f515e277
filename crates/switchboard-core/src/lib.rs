//! Switchboard のコア機能
//!
//! プロジェクト設定のモデルと探索、進捗チャネル、外部コマンド起動の
//! 抽象化を提供します。パッケージングやデプロイの実体は
//! switchboard-build / switchboard-cloud 側にあります。

pub mod discovery;
pub mod error;
pub mod launcher;
pub mod model;
pub mod progress;
pub mod test_support;

pub use discovery::{find_project_root, find_project_root_from, load_config, load_config_at};
pub use error::{CoreError, Result};
pub use launcher::{CommandLauncher, CommandOutput, CommandSpec, ExitStatus, OsLauncher};
pub use model::{CONFIG_FILE_NAME, COMPONENTS, Cloud, Language, ProjectConfig};
pub use progress::{Progress, ProgressUpdate};
