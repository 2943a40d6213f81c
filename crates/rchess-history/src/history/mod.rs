//! 履歴統計（History Tables）
//!
//! 探索中に手の良し悪しを記録し、手の順序付けと静的評価の補正に使う。
//!
//! - `ButterflyHistory`: [Color][from_to] 静かな手
//! - `LowPlyHistory`: [ply][from_to] ルート付近
//! - `CapturePieceToHistory`: [piece][to][captured_pt] 捕獲手
//! - `ContinuationHistory`: [prev_pc][prev_to][pc][to] 連続する手
//! - `PawnHistory`: [pawn_key_idx][pc][to] 歩の陣形
//! - `KnightHistory`: [Color][from][knight_attack_index] ナイトの利き先集合
//! - `*CorrectionHistory`: 静的評価の補正
//! - `TTMoveHistory`: 置換表の手の成功度
//!
//! 全エントリは `StatsEntry` の更新則で [-D, D] に飽和する。

mod container;
mod correction;
mod fill_values;
mod index;
mod knight_magic;
mod tables;
mod tt_history;

pub use container::{HistoryCell, HistoryTables};
pub use correction::{
    ContinuationCorrectionHistory, CorrectionKind, KeyedCorrectionHistory,
    MinorPieceCorrectionHistory, NonPawnCorrectionHistory, PawnCorrectionHistory,
    PieceToCorrectionHistory,
};
pub use fill_values::{FillOptionSpec, FillSetResult, FillValuesError, HistoryFillValues};
pub use index::{
    CORRECTION_HISTORY_LIMIT, CORRECTION_HISTORY_SIZE, LOW_PLY_HISTORY_SIZE, PAWN_HISTORY_SIZE,
    PawnHistoryKind, StructuralKeys, minor_piece_index, non_pawn_index, pawn_structure_index,
};
pub use knight_magic::{
    KNIGHT_INDEX_NUM, KNIGHT_MAGIC, KnightIndexDomain, find_knight_collision,
    is_perfect_knight_magic, knight_attack_index,
};
pub use tables::{
    ButterflyHistory, CapturePieceToHistory, ContinuationHistory, ContinuationTable,
    FROM_TO_SIZE, HistoryValue, KnightHistory, LowPlyHistory, PIECE_TYPE_NB, PawnHistory,
    PieceToHistory, PieceToTable, PieceToView, PieceToViewMut, Stats, StatsType,
};
pub use tt_history::TTMoveHistory;
