use std::fmt;
// パス関連のエラー型を定義
#[derive(Debug)]
pub enum PathError {
    InvalidPath(String),
    /// ディレクトリ走査中に発生したエラー (walkdir 由来)
    Walk(walkdir::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidPath(s) => write!(f, "無効なパスです: {}", s),
            PathError::Walk(e) => write!(f, "ディレクトリの走査に失敗しました: {}", e),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::InvalidPath(_) => None,
            PathError::Walk(e) => Some(e),
        }
    }
}

impl From<walkdir::Error> for PathError {
    fn from(e: walkdir::Error) -> Self {
        PathError::Walk(e)
    }
}
