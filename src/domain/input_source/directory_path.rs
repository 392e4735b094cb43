use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// 構造体としてDirectoryPathを定義
#[derive(Debug)]
pub struct DirectoryPath {
    path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが存在し、かつディレクトリであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// 直下のエントリのパスを、ファイル名順に一度だけ読み取って返す。
    ///
    /// サブディレクトリの中へは降りない。シンボリックリンクは辿らず、
    /// リンク自身のパスがそのまま返される（判定は呼び出し側で行う）。
    pub fn entries(&self) -> Result<Vec<PathBuf>, PathError> {
        let mut paths = Vec::new();
        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            paths.push(entry?.into_path());
        }
        Ok(paths)
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
