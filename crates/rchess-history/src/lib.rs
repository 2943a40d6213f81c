//! rchess-history: チェスエンジン探索用の履歴統計
//!
//! - `stats`: 飽和カウンタ `StatsEntry` と多次元テーブル `StatsTable`
//! - `history`: 各履歴テーブル、添字関数、ナイト利き先の完全ハッシュ
//! - `types`: 添字に使う基本型（Color, Square, Piece, Move, Bitboard）

pub mod history;
pub mod stats;
pub mod types;

pub use history::{HistoryCell, HistoryTables, HistoryFillValues};
pub use stats::{StatsEntry, StatsError, StatsTable};
