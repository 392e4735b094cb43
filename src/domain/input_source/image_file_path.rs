use super::path_error::PathError;
use image::ImageFormat;
use std::fmt;
use std::path::{Path, PathBuf};

/// リサイズ対象となる通常ファイルへのパスを表現し、その妥当性を保証する構造体。
///
/// シンボリックリンクは辿ったうえで判定するため、通常ファイルを指すリンクも受け付ける。
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFilePath(PathBuf);

impl ImageFilePath {
    // --- Public Methods ---

    /// 新しい `ImageFilePath` インスタンスを生成する。
    ///
    /// パスが存在し、（リンクを辿った先が）通常ファイルであることを検証する。
    /// 中身が画像かどうかはここでは判定しない。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はファイルではありません。",
                path.display()
            )));
        }
        Ok(Self(path.to_path_buf()))
    }

    /// 内部の `Path` への参照を返す。
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// 拡張子を含むファイル名を返す。
    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|s| s.to_str())
    }

    /// 拡張子から保存時のフォーマットを決定する。
    ///
    /// 拡張子がない、または未知の拡張子の場合は `None`。
    pub fn output_format(&self) -> Option<ImageFormat> {
        ImageFormat::from_path(&self.0).ok()
    }
}

// Displayトレイトの実装（表示用）
impl fmt::Display for ImageFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_new_accepts_regular_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.png");
        fs::write(&path, b"not really a png").unwrap();

        let ifp = ImageFilePath::new(&path).expect("ImageFilePath::new should succeed");
        assert_eq!(ifp.as_path(), path.as_path());
        assert_eq!(ifp.to_string(), path.display().to_string());
    }

    #[test]
    fn test_new_nonexistent() {
        let res = ImageFilePath::new("nonexistent_file_for_test.png");
        if let Err(PathError::InvalidPath(msg)) = res {
            assert!(msg.contains("は存在しません。"));
        } else {
            panic!("Expected InvalidPath error for nonexistent file");
        }
    }

    #[test]
    fn test_new_rejects_directory() {
        let dir = tempdir().unwrap();
        let res = ImageFilePath::new(dir.path());
        if let Err(PathError::InvalidPath(msg)) = res {
            assert!(msg.contains("はファイルではありません。"));
        } else {
            panic!("Expected InvalidPath error for directory");
        }
    }

    #[test]
    fn test_output_format_follows_extension() {
        let dir = tempdir().unwrap();
        let cases = [
            ("a.png", Some(ImageFormat::Png)),
            ("b.JPG", Some(ImageFormat::Jpeg)),
            ("c.jpeg", Some(ImageFormat::Jpeg)),
            ("d.bmp", Some(ImageFormat::Bmp)),
            ("e.txt", None),
            ("noext", None),
        ];
        for (name, expected) in cases {
            let path = dir.path().join(name);
            fs::write(&path, b"").unwrap();
            let ifp = ImageFilePath::new(&path).unwrap();
            assert_eq!(ifp.output_format(), expected, "{}", name);
        }
    }

    #[test]
    fn test_file_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("holiday.gif");
        fs::write(&path, b"").unwrap();
        let ifp = ImageFilePath::new(&path).unwrap();
        assert_eq!(ifp.file_name(), Some("holiday.gif"));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_follows_symlink_to_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.png");
        fs::write(&target, b"").unwrap();
        let link = dir.path().join("link.png");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let ifp = ImageFilePath::new(&link).expect("symlink to a file is accepted");
        assert_eq!(ifp.as_path(), link.as_path());
    }
}
