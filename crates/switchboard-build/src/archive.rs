//! zip アーカイブ生成
//!
//! ビルドディレクトリ全体を1つの zip に圧縮する。エントリ名は
//! ビルドディレクトリからの相対パス（スラッシュ区切り）で、
//! ディレクトリは末尾スラッシュ付きのエントリになる。

use crate::error::{BuildError, Result};
use std::fs::{self, File};
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// source 配下を target の zip ファイルへ圧縮する
///
/// 既存の target は上書きされる。通常ファイルは deflate 圧縮、
/// ディレクトリは子エントリより先に書き込む。
pub fn zip_directory(source: &Path, target: &Path) -> Result<()> {
    let file = File::create(target)?;
    let mut writer = ZipWriter::new(file);

    add_dir(&mut writer, source, "").map_err(|source| BuildError::Archive {
        path: target.to_path_buf(),
        source,
    })?;

    writer.finish().map_err(|source| BuildError::Archive {
        path: target.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn add_dir(
    writer: &mut ZipWriter<File>,
    dir: &Path,
    prefix: &str,
) -> std::result::Result<(), zip::result::ZipError> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
    // エントリ順を安定させる
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let entry_name = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };

        let metadata = entry.metadata()?;
        let options = file_options(&metadata);

        if metadata.is_dir() {
            writer.add_directory(format!("{entry_name}/"), options)?;
            add_dir(writer, &entry.path(), &entry_name)?;
        } else {
            writer.start_file(entry_name, options)?;
            let mut file = File::open(entry.path())?;
            std::io::copy(&mut file, writer)?;
        }
    }

    Ok(())
}

#[cfg(unix)]
fn file_options(metadata: &fs::Metadata) -> SimpleFileOptions {
    use std::os::unix::fs::PermissionsExt;

    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn file_options(_metadata: &fs::Metadata) -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}
