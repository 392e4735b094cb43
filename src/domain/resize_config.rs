use super::resample_filter::ResampleFilter;
use super::target_size::TargetSize;
use std::path::{Path, PathBuf};

/// 1ファイルの処理に失敗したときの振る舞い。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// 最初の失敗でバッチ全体を中断する。
    #[default]
    Abort,
    /// 失敗を記録して次のファイルへ進む。
    Continue,
}

/// 起動時に一度だけ組み立てられ、以後変更されない実行パラメータ。
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeConfig {
    directory: PathBuf,
    size: TargetSize,
    filter: ResampleFilter,
    on_error: ErrorPolicy,
}

impl ResizeConfig {
    /// 既定のフィルタ (`Lanczos3`) と既定の失敗時動作 (`Abort`) で作成する。
    pub fn new(directory: impl Into<PathBuf>, size: TargetSize) -> Self {
        Self {
            directory: directory.into(),
            size,
            filter: ResampleFilter::default(),
            on_error: ErrorPolicy::default(),
        }
    }

    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_error_policy(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    // --- ゲッターメソッド ---

    pub fn directory(&self) -> &Path {
        &self.directory
    }
    pub fn size(&self) -> TargetSize {
        self.size
    }
    pub fn filter(&self) -> ResampleFilter {
        self.filter
    }
    pub fn on_error(&self) -> ErrorPolicy {
        self.on_error
    }
}
