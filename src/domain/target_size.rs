use std::fmt;

// --- 構造体定義 ---

/// リサイズ後の画像サイズ（幅 × 高さ、ピクセル単位）。
///
/// `new` コンストラクタを通じてのみインスタンス化でき、幅・高さがともに 1 以上であることが保証されます。
/// アスペクト比は考慮せず、この寸法ちょうどに引き伸ばします。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    width: u32,
    height: u32,
}

// --- エラー定義 ---

/// `TargetSize` のインスタンス化時に発生する可能性のある検証エラー。
#[derive(Debug, PartialEq)]
pub enum SizeValidationError {
    /// 幅または高さに 0 が指定された場合のエラー。
    ZeroDimension { width: u32, height: u32 },
}

// --- 実装ブロック ---

impl TargetSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SizeValidationError> {
        if width == 0 || height == 0 {
            return Err(SizeValidationError::ZeroDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

// --- トレイト実装 ---

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Display for SizeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeValidationError::ZeroDimension { width, height } => write!(
                f,
                "幅と高さは 1 以上で指定してください (指定値: {}x{})。",
                width, height
            ),
        }
    }
}

impl std::error::Error for SizeValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive_dimensions() {
        let size = TargetSize::new(50, 25).unwrap();
        assert_eq!(size.dimensions(), (50, 25));
        assert_eq!(size.to_string(), "50x25");
    }

    #[test]
    fn new_rejects_zero_width_or_height() {
        assert_eq!(
            TargetSize::new(0, 10),
            Err(SizeValidationError::ZeroDimension {
                width: 0,
                height: 10
            })
        );
        assert!(TargetSize::new(10, 0).is_err());
        assert!(TargetSize::new(0, 0).is_err());
    }

    #[test]
    fn zero_dimension_message_shows_requested_size() {
        let err = TargetSize::new(0, 7).unwrap_err();
        assert!(err.to_string().contains("0x7"));
    }
}
