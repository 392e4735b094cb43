//! 診断ログの初期化。
//!
//! ログは標準エラー出力へ書き出す。標準出力は画像の概要表示専用。

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// `--verbose` の有無に応じた既定のログレベル。
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// tracing のサブスクライバを登録する。`RUST_LOG` が設定されていればそちらを優先する。
///
/// 二度目以降の呼び出しは何もしない。
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // 既に登録済みのときの失敗は無視する
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
