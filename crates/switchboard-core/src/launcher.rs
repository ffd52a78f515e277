//! 外部コマンド起動の抽象化
//!
//! パッケージマネージャや terraform の起動をトレイト越しに行うことで、
//! テストでは実プロセスの代わりに記録用のダブルを差し込める。本番配線は
//! [`OsLauncher`]、テストは `test_support::RecordingLauncher` を使う。

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;

/// 起動する外部コマンドの仕様
///
/// プログラム名・引数・作業ディレクトリ・追加環境変数をひとまとめにした
/// 値。ランチャーに渡るまで副作用はない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn envs<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.env.extend(vars);
        self
    }

    /// 環境変数が設定されているか（値も含めて）を確認する
    pub fn has_env(&self, key: &str, value: &str) -> bool {
        self.env.iter().any(|(k, v)| k == key && v == value)
    }
}

impl fmt::Display for CommandSpec {
    // "terraform apply -auto-approve" の形式
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// 外部コマンドの終了ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus {
    code: Option<i32>,
}

impl ExitStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// stdout をキャプチャした実行の結果
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
}

/// 外部コマンドを起動する能力
///
/// `run` は標準入出力を呼び出し元に引き継いだまま実行し、`output` は
/// stdout だけをキャプチャする（stderr は引き継ぎ）。どちらも子プロセスの
/// 自然な終了まで待つ。キャンセルやタイムアウトはここでは扱わない。
#[async_trait]
pub trait CommandLauncher: Send + Sync {
    async fn run(&self, spec: CommandSpec) -> Result<ExitStatus>;

    async fn output(&self, spec: CommandSpec) -> Result<CommandOutput>;
}

/// OS のプロセスを起動する本番用ランチャー
#[derive(Debug, Clone, Copy, Default)]
pub struct OsLauncher;

impl OsLauncher {
    fn command(spec: &CommandSpec) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }
        for (key, value) in &spec.env {
            cmd.env(key, value);
        }
        cmd
    }
}

#[async_trait]
impl CommandLauncher for OsLauncher {
    async fn run(&self, spec: CommandSpec) -> Result<ExitStatus> {
        tracing::debug!(cwd = ?spec.cwd, "Running: {}", spec);
        let status = Self::command(&spec).status().await?;
        Ok(status.into())
    }

    async fn output(&self, spec: CommandSpec) -> Result<CommandOutput> {
        tracing::debug!(cwd = ?spec.cwd, "Running (captured): {}", spec);
        let output = Self::command(&spec)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .await?;

        Ok(CommandOutput {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        })
    }
}
