use super::image_file_path::ImageFilePath;
use std::path::{Path, PathBuf};

/// ディレクトリ直下の1エントリの分類結果。
/// リサイズ対象の通常ファイルか、読み飛ばすエントリかのいずれかを保持する。
#[derive(Debug, PartialEq)]
pub enum InputSource {
    File(ImageFilePath),
    Skipped(PathBuf),
}

impl InputSource {
    /// エントリのパスを分類する。
    ///
    /// リンクを辿った先が通常ファイルでないもの（ディレクトリ、ディレクトリへのリンク、
    /// 壊れたリンク、特殊ファイル）はすべて `Skipped` になる。
    pub fn classify(path: &Path) -> Self {
        match ImageFilePath::new(path) {
            Ok(file) => InputSource::File(file),
            Err(_) => InputSource::Skipped(path.to_path_buf()),
        }
    }
}
