//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! ディレクトリ内の画像を一括リサイズする処理フローを実装します。

use crate::domain::input_source::directory_path::DirectoryPath;
use crate::domain::input_source::image_file_path::ImageFilePath;
use crate::domain::input_source::input_source::InputSource;
use crate::domain::loaded_image::LoadedImage;
use crate::domain::resize_config::{ErrorPolicy, ResizeConfig};
use crate::error::AppError;
use std::io::Write;
use tracing::{debug, error, info};

/// 一括処理の結果。
#[derive(Debug, Default, PartialEq)]
pub struct RunSummary {
    /// リサイズして上書きしたファイル数
    pub resized: usize,
    /// 通常ファイルではなかったため読み飛ばしたエントリ数
    pub skipped: usize,
    /// 失敗したファイル数（`ErrorPolicy::Continue` のときのみ数えられる）
    pub failed: usize,
}

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// 開いた画像ごとに、その概要を1行 `out` へ書き出します。
///
/// # 引数
/// * `config`: コマンドラインから組み立てた実行パラメータ。
/// * `out`: 画像の概要を書き出す先（通常は標準出力）。
///
/// # 戻り値
/// * `Ok(RunSummary)`: すべてのファイルが正常に処理された場合。
/// * `Err(AppError)`: ディレクトリが不正な場合、`Abort` で最初の失敗が起きた場合、
///   または `Continue` で1件以上失敗した場合。
pub fn run<W: Write>(config: &ResizeConfig, out: &mut W) -> Result<RunSummary, AppError> {
    // 1. 入力ディレクトリの検証
    let input_dir = DirectoryPath::new(config.directory())?;
    info!(
        directory = %input_dir,
        size = %config.size(),
        filter = %config.filter(),
        "リサイズを開始します"
    );

    // 2. エントリ一覧は最初に一度だけ読み取る
    let entries = input_dir.entries()?;

    // 3. 各エントリを順に処理
    let mut summary = RunSummary::default();
    for path in entries {
        let file = match InputSource::classify(&path) {
            InputSource::File(file) => file,
            InputSource::Skipped(path) => {
                debug!(path = %path.display(), "通常ファイルではないためスキップします");
                summary.skipped += 1;
                continue;
            }
        };

        match process_file(file, config, out) {
            Ok(()) => summary.resized += 1,
            Err(AppError::Image(e)) if config.on_error() == ErrorPolicy::Continue => {
                error!(path = %path.display(), error = %error_chain(&e), "リサイズに失敗しました");
                summary.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    // 4. 最終結果の判定
    info!(
        resized = summary.resized,
        skipped = summary.skipped,
        failed = summary.failed,
        "リサイズが完了しました"
    );
    if summary.failed > 0 {
        return Err(AppError::BatchFailed {
            failed: summary.failed,
        });
    }
    Ok(summary)
}

// --- private なヘルパー関数 ---

/// 1ファイルを開き、概要を表示し、リサイズして同じパスへ上書きします。
fn process_file<W: Write>(
    file: ImageFilePath,
    config: &ResizeConfig,
    out: &mut W,
) -> Result<(), AppError> {
    let name = file.file_name().unwrap_or("?").to_string();
    let image = LoadedImage::open(file)?;
    writeln!(out, "{}", image)?;

    let resized = image.resize(config.size(), config.filter());
    resized.save()?;
    debug!(file = %name, from = ?image.dimensions(), to = ?resized.dimensions(), "上書き保存しました");
    Ok(())
}

/// エラーとその原因をつなげた1行のメッセージを作る。
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
