//! ディレクトリ直下の画像を指定サイズへ一括リサイズし、元のファイルへ上書き保存するライブラリ。

pub mod domain;
pub mod error;
pub mod logging;
pub mod workflow;
