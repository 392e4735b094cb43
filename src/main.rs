mod cli;

use clap::Parser;
use image_resizer::{logging, workflow};
use std::process::ExitCode;

fn main() -> ExitCode {
    // コマンドライン引数を解析します（不足・不正があれば clap が終了コード 2 で終了する）
    let args = cli::Args::parse();
    logging::init(args.verbose);

    let result = args.into_config().and_then(|config| {
        let stdout = std::io::stdout();
        workflow::run(&config, &mut stdout.lock())
    });

    match result {
        // 件数の集計は workflow が info ログとして出す。標準出力は画像の概要だけ
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", workflow::error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
