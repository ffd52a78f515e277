//! 進捗メッセージチャネル
//!
//! 長時間かかるコア処理から呼び出し元（CLI / TUI）へ状況を流すための
//! 一方向ストリーム。送信順がそのまま観測順になる。送信側はトップレベル
//! 処理が所有し、処理の終了（成功・失敗どちらでも）とともに drop されて
//! チャネルが一度だけ閉じる。受信側は閉じるまで読み切る契約。

use tokio::sync::mpsc;

/// チャネルの既定バッファ長
///
/// 受信側の起動が遅れても直近のメッセージで送信側が詰まらない程度の深さ。
const PROGRESS_BUFFER: usize = 16;

/// 1行分のステータスメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub message: String,
}

/// 進捗チャネルの送信側ラッパー
///
/// 受信側が先に居なくなっていても emit はエラーにしない。メッセージを
/// 読む相手が居ないだけで、処理自体は続行してよいため。
pub struct Progress {
    tx: mpsc::Sender<ProgressUpdate>,
}

impl Progress {
    /// 既定バッファで送信側と受信側のペアを作る
    pub fn channel() -> (Progress, mpsc::Receiver<ProgressUpdate>) {
        let (tx, rx) = mpsc::channel(PROGRESS_BUFFER);
        (Progress { tx }, rx)
    }

    /// ステータスメッセージを1行送る
    ///
    /// バッファが埋まっている間は受信側が読み出すまで待つ。
    pub async fn emit(&self, message: impl Into<String>) {
        let _ = self
            .tx
            .send(ProgressUpdate {
                message: message.into(),
            })
            .await;
    }
}
