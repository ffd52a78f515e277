//! テスト用のコマンド実行ダブル
//!
//! 実プロセスを起動する代わりに、起動された [`CommandSpec`] を順番に記録
//! する。上位クレートのテストからも使うため cfg(test) にはしていない。

use crate::error::Result;
use crate::launcher::{CommandLauncher, CommandOutput, CommandSpec, ExitStatus};
use async_trait::async_trait;
use std::sync::Mutex;

/// 記録専用のフェイクランチャー
///
/// 既定では全コマンドが成功（exit status 0、空の stdout）として扱われる。
/// `fail_matching` で表示形（`CommandSpec` の Display）に部分一致する
/// コマンドを失敗させ、`stdout_for` でキャプチャ実行の出力を差し込める。
#[derive(Default)]
pub struct RecordingLauncher {
    calls: Mutex<Vec<CommandSpec>>,
    failures: Mutex<Vec<String>>,
    stdouts: Mutex<Vec<(String, String)>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 表示形に needle を含むコマンドを非ゼロ終了にする
    pub fn fail_matching(&self, needle: impl Into<String>) {
        self.failures.lock().unwrap().push(needle.into());
    }

    /// 表示形に needle を含むキャプチャ実行へ返す stdout を登録する
    pub fn stdout_for(&self, needle: impl Into<String>, stdout: impl Into<String>) {
        self.stdouts
            .lock()
            .unwrap()
            .push((needle.into(), stdout.into()));
    }

    /// これまでに起動されたコマンドを起動順で返す
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    fn status_for(&self, rendered: &str) -> ExitStatus {
        let failed = self
            .failures
            .lock()
            .unwrap()
            .iter()
            .any(|needle| rendered.contains(needle.as_str()));
        if failed {
            ExitStatus::from_code(1)
        } else {
            ExitStatus::from_code(0)
        }
    }
}

#[async_trait]
impl CommandLauncher for RecordingLauncher {
    async fn run(&self, spec: CommandSpec) -> Result<ExitStatus> {
        let rendered = spec.to_string();
        self.calls.lock().unwrap().push(spec);
        Ok(self.status_for(&rendered))
    }

    async fn output(&self, spec: CommandSpec) -> Result<CommandOutput> {
        let rendered = spec.to_string();
        self.calls.lock().unwrap().push(spec);

        let stdout = self
            .stdouts
            .lock()
            .unwrap()
            .iter()
            .find(|(needle, _)| rendered.contains(needle.as_str()))
            .map(|(_, out)| out.clone())
            .unwrap_or_default();

        Ok(CommandOutput {
            status: self.status_for(&rendered),
            stdout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let launcher = RecordingLauncher::new();
        launcher.run(CommandSpec::new("first")).await.unwrap();
        launcher.run(CommandSpec::new("second")).await.unwrap();

        let calls = launcher.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].program, "first");
        assert_eq!(calls[1].program, "second");
    }

    #[tokio::test]
    async fn test_fail_matching() {
        let launcher = RecordingLauncher::new();
        launcher.fail_matching("pip install");

        let ok = launcher.run(CommandSpec::new("npm").arg("install")).await.unwrap();
        assert!(ok.success());

        let failed = launcher
            .run(CommandSpec::new("pip").arg("install"))
            .await
            .unwrap();
        assert!(!failed.success());
    }

    #[tokio::test]
    async fn test_stdout_for() {
        let launcher = RecordingLauncher::new();
        launcher.stdout_for("aws iam get-role", "arn:aws:iam::1:role/x\n");

        let output = launcher
            .output(CommandSpec::new("aws").args(["iam", "get-role"]))
            .await
            .unwrap();
        assert_eq!(output.stdout, "arn:aws:iam::1:role/x\n");
    }
}
