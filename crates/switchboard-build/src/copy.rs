//! ソースツリーのコピーとスキップ規則
//!
//! ビルド成果物やキャッシュはアーカイブに入れない。スキップ対象の
//! ディレクトリは中身ごと丸ごと除外される。

use std::fs;
use std::io;
use std::path::Path;

/// コピー対象から常に除外するディレクトリ名
const SKIP_DIRS: &[&str] = &[
    ".dist",
    ".venv",
    "venv",
    "__pycache__",
    "node_modules",
    ".pytest_cache",
];

/// このエントリをコピー対象から除外するか
///
/// ディレクトリはスキップリストとの一致で、ファイルは過去の
/// パッケージ成果物（*_lambda.zip）かどうかで判定する。
pub fn should_skip(name: &str, is_dir: bool) -> bool {
    if is_dir && SKIP_DIRS.contains(&name) {
        return true;
    }

    name.ends_with("_lambda.zip")
}

/// src 配下を dest へ再帰コピーする
///
/// 相対パス構造とパーミッションを保ち、ディレクトリは子より先に作る。
/// dest が src の内側（.dist）にあってもスキップ規則が再帰を止める。
pub fn copy_source(src: &Path, dest: &Path) -> io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let name = entry.file_name();

        if should_skip(&name.to_string_lossy(), file_type.is_dir()) {
            continue;
        }

        let target = dest.join(&name);
        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
            fs::set_permissions(&target, entry.metadata()?.permissions())?;
            copy_source(&entry.path(), &target)?;
        } else {
            // fs::copy はパーミッションビットも写す
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
