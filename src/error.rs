use crate::domain::input_source::path_error::PathError;
use crate::domain::loaded_image::ImageProcessError;
use crate::domain::target_size::SizeValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラーが発生しました")]
    Io(#[from] std::io::Error),

    #[error("パス関連のエラー")]
    Path(#[from] PathError),

    #[error("サイズ指定のエラー")]
    InvalidSize(#[from] SizeValidationError),

    #[error("画像処理エラー")]
    Image(#[from] ImageProcessError),

    #[error("{failed} 件のファイルでリサイズに失敗しました")]
    BatchFailed { failed: usize },
}
