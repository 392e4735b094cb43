use clap::Parser;
use image_resizer::domain::resample_filter::ResampleFilter;
use image_resizer::domain::resize_config::{ErrorPolicy, ResizeConfig};
use image_resizer::domain::target_size::TargetSize;
use image_resizer::error::AppError;
use std::path::PathBuf;

/// 指定したディレクトリ直下の画像をすべて同じサイズへ引き伸ばし、元のファイルへ上書き保存するツール
#[derive(Parser, Debug)]
#[command(name = "resize", author, version, long_about = None)]
pub struct Args {
    /// リサイズする画像が入っているディレクトリのパス
    pub path: PathBuf,

    /// リサイズ後の幅 (ピクセル)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// リサイズ後の高さ (ピクセル)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// 再サンプリングフィルタ
    #[arg(short, long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// 画像の読み込み・保存に失敗しても中断せず、残りのファイルを処理する
    #[arg(long)]
    pub continue_on_error: bool,

    /// 詳細なログを標準エラー出力へ表示する
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 実行パラメータへ変換する。
    pub fn into_config(self) -> Result<ResizeConfig, AppError> {
        let size = TargetSize::new(self.width, self.height)?;
        let on_error = if self.continue_on_error {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Abort
        };
        Ok(ResizeConfig::new(self.path, size)
            .with_filter(self.filter)
            .with_error_policy(on_error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_three_positionals_with_defaults() {
        let args = Args::try_parse_from(["resize", "images/", "50", "25"]).unwrap();
        let config = args.into_config().unwrap();
        assert_eq!(config.directory(), std::path::Path::new("images/"));
        assert_eq!(config.size().dimensions(), (50, 25));
        assert_eq!(config.filter(), ResampleFilter::Lanczos3);
        assert_eq!(config.on_error(), ErrorPolicy::Abort);
    }

    #[test]
    fn parses_optional_flags() {
        let args = Args::try_parse_from([
            "resize",
            "images",
            "8",
            "8",
            "--filter",
            "nearest",
            "--continue-on-error",
            "-v",
        ])
        .unwrap();
        assert!(args.verbose);
        let config = args.into_config().unwrap();
        assert_eq!(config.filter(), ResampleFilter::Nearest);
        assert_eq!(config.on_error(), ErrorPolicy::Continue);
    }

    #[test]
    fn missing_height_is_rejected() {
        let err = Args::try_parse_from(["resize", "images", "50"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn zero_and_non_numeric_sizes_are_rejected() {
        let err = Args::try_parse_from(["resize", "images", "0", "10"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        let err = Args::try_parse_from(["resize", "images", "wide", "10"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
