// use宣言：必要なクレートやモジュールをスコープに取り込む

use super::input_source::image_file_path::ImageFilePath;
use super::resample_filter::ResampleFilter;
use super::target_size::TargetSize;
use image::{ColorType, DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use thiserror::Error;

// --- 構造体定義 ---

/// デコード済みの1枚の画像と、その読み込み元の情報を保持する構造体。
///
/// `open` で読み込んだ時点のファイルパスを覚えており、`save` は同じパスへ上書き保存する。
/// 1ファイルの処理が終われば破棄される一時的なオブジェクトです。
#[derive(Debug)]
pub struct LoadedImage {
    source: ImageFilePath,
    /// 中身から推定したフォーマット（表示用）。
    format: Option<ImageFormat>,
    image: DynamicImage,
}

// --- エラー定義 ---

/// 画像の読み込み・保存で発生するエラー。
#[derive(Debug, Error)]
pub enum ImageProcessError {
    #[error("ファイル '{}' を読み込めません", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ファイル '{}' を画像としてデコードできません", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("ファイル '{}' の拡張子から保存フォーマットを決定できません", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("ファイル '{}' へのエンコードに失敗しました", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("ファイル '{}' への書き込みに失敗しました", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// --- 実装ブロック ---

impl LoadedImage {
    /// ファイルを開き、中身からフォーマットを推定してデコードします。
    ///
    /// 拡張子ではなくファイルの先頭バイトで判定するため、拡張子と中身が食い違っていても読み込めます。
    pub fn open(source: ImageFilePath) -> Result<Self, ImageProcessError> {
        let path = source.as_path().to_path_buf();
        let reader = ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| ImageProcessError::Read {
                path: path.clone(),
                source: e,
            })?;
        let format = reader.format();
        let image = reader
            .decode()
            .map_err(|e| ImageProcessError::Decode { path, source: e })?;

        Ok(Self {
            source,
            format,
            image,
        })
    }

    /// 指定サイズちょうどに引き伸ばした新しい画像を返します（アスペクト比は保持しません）。
    pub fn resize(&self, size: TargetSize, filter: ResampleFilter) -> Self {
        let (width, height) = size.dimensions();
        Self {
            source: self.source.clone(),
            format: self.format,
            image: self.image.resize_exact(width, height, filter.into()),
        }
    }

    /// 読み込み元と同じパスへ、拡張子が示すフォーマットで上書き保存します。
    ///
    /// まずメモリ上でエンコードし、成功した場合にだけファイルを書き換えます。
    /// エンコーダが拒否した場合、元のファイルには触れません。
    pub fn save(&self) -> Result<(), ImageProcessError> {
        let path = self.source.as_path();
        let format = self
            .source
            .output_format()
            .ok_or_else(|| ImageProcessError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let mut encoded = Vec::new();
        prepare_for_format(&self.image, format)
            .write_to(&mut Cursor::new(&mut encoded), format)
            .map_err(|e| ImageProcessError::Encode {
                path: path.to_path_buf(),
                source: e,
            })?;

        fs::write(path, encoded).map_err(|e| ImageProcessError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }

    // --- ゲッターメソッド ---

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }
    pub fn color(&self) -> ColorType {
        self.image.color()
    }
    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// 保存先フォーマットが扱えないピクセル形式を変換する。
///
/// JPEG はアルファや 16bit/浮動小数点を持てないため、8bit のグレースケールか RGB に落とす。
/// エラーにせず変換して保存するのは意図した挙動で、アルファ付き画像の JPEG 保存を
/// 拒否するライブラリ (Pillow など) とは異なる。
fn prepare_for_format(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    if format != ImageFormat::Jpeg {
        return Cow::Borrowed(image);
    }
    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        ColorType::La8 | ColorType::L16 | ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

// --- トレイト実装 ---

/// 読み込んだ画像の概要を1行で表す。
/// 例: `<Png image mode=Rgb8 size=100x100 at /tmp/images/a.png>`
impl fmt::Display for LoadedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        match self.format {
            Some(format) => write!(f, "<{:?} image", format)?,
            None => write!(f, "<image")?,
        }
        write!(
            f,
            " mode={:?} size={}x{} at {}>",
            self.color(),
            width,
            height,
            self.source
        )
    }
}

// --- テストモジュール ---
