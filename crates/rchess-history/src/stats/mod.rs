//! 飽和カウンタと多次元テーブル
//!
//! - `StatsEntry`: 範囲制限付きエントリ
//! - `StatsTable`: 連続領域に置いた多次元テーブル
//! - `StatsError`: 形状エラー

mod entry;
mod error;
mod table;

pub use entry::{StatsEntry, StatsValue};
pub use error::{StatsError, StatsResult};
pub use table::StatsTable;
