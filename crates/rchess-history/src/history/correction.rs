//! CorrectionHistory: 静的評価値の補正履歴
//!
//! 静的評価と探索結果の差を記録し、後の静的評価を補正するのに使う。
//!
//! - Pawn/Minor: [key_index][color] -> correction
//! - NonPawn: [key_index][piece_color][side_to_move] -> correction
//! - PieceTo: [piece][to] -> correction
//! - Continuation: [prev_pc][prev_to][pc][to] -> correction
//!
//! 全て `CORRECTION_HISTORY_LIMIT` で飽和する。

use crate::types::Color;

use super::index::{CORRECTION_HISTORY_LIMIT, CORRECTION_HISTORY_SIZE};
use super::tables::{ContinuationTable, HistoryValue, PieceToTable, Stats};

/// 補正履歴の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectionKind {
    /// 手番と歩の配置
    Pawn,
    /// 手番とマイナーピース（ナイト・ビショップ）の配置
    Minor,
    /// 歩以外の駒の配置と手番
    NonPawn,
    /// [piece][to]
    PieceTo,
    /// 連続する2手の組み合わせ
    Continuation,
}

// =============================================================================
// KeyedCorrectionHistory
// =============================================================================

/// 構造キーの添字と手番で引く補正履歴: [key_index][color]
///
/// `key_index` は `pawn_structure_index(.., Correction)` か `minor_piece_index` で求める。
#[derive(Clone)]
pub struct KeyedCorrectionHistory {
    table: Stats<CORRECTION_HISTORY_LIMIT, 2>,
}

/// 歩の配置による補正
pub type PawnCorrectionHistory = KeyedCorrectionHistory;

/// マイナーピースの配置による補正
pub type MinorPieceCorrectionHistory = KeyedCorrectionHistory;

impl KeyedCorrectionHistory {
    pub fn new() -> Self {
        Self {
            table: Stats::new([CORRECTION_HISTORY_SIZE, Color::NUM]),
        }
    }

    #[inline]
    pub fn get(&self, key_index: usize, color: Color) -> HistoryValue {
        self.table.get([key_index, color.index()])
    }

    #[inline]
    pub fn update(&mut self, key_index: usize, color: Color, bonus: i32) {
        self.table.update([key_index, color.index()], bonus);
    }

    pub fn fill(&mut self, v: HistoryValue) {
        self.table.fill(v);
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.table.size_in_bytes()
    }
}

impl Default for KeyedCorrectionHistory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// NonPawnCorrectionHistory
// =============================================================================

/// NonPawnCorrectionHistory: [key_index][piece_color][side_to_move]
///
/// 白駒・黒駒それぞれの non-pawn key について引き、手番ごとに分ける。
#[derive(Clone)]
pub struct NonPawnCorrectionHistory {
    table: Stats<CORRECTION_HISTORY_LIMIT, 3>,
}

impl NonPawnCorrectionHistory {
    pub fn new() -> Self {
        Self {
            table: Stats::new([CORRECTION_HISTORY_SIZE, Color::NUM, Color::NUM]),
        }
    }

    #[inline]
    pub fn get(&self, key_index: usize, piece_color: Color, stm: Color) -> HistoryValue {
        self.table.get([key_index, piece_color.index(), stm.index()])
    }

    #[inline]
    pub fn update(&mut self, key_index: usize, piece_color: Color, stm: Color, bonus: i32) {
        self.table.update([key_index, piece_color.index(), stm.index()], bonus);
    }

    pub fn fill(&mut self, v: HistoryValue) {
        self.table.fill(v);
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.table.size_in_bytes()
    }
}

impl Default for NonPawnCorrectionHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// [piece][to] による補正
pub type PieceToCorrectionHistory = PieceToTable<CORRECTION_HISTORY_LIMIT>;

/// 連続する2手による補正（内側は PieceToCorrectionHistory と同じ形状）
pub type ContinuationCorrectionHistory = ContinuationTable<CORRECTION_HISTORY_LIMIT>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::index::{PawnHistoryKind, non_pawn_index, pawn_structure_index};
    use crate::types::{Piece, Square};

    #[test]
    fn test_pawn_correction_by_key() {
        let mut history = PawnCorrectionHistory::new();
        let idx = pawn_structure_index(0x9E37_79B9_7F4A_7C15, PawnHistoryKind::Correction);

        history.update(idx, Color::White, 300);
        assert_eq!(history.get(idx, Color::White), 300);
        assert_eq!(history.get(idx, Color::Black), 0);
    }

    #[test]
    fn test_correction_saturates_at_limit() {
        let mut history = MinorPieceCorrectionHistory::new();
        for _ in 0..20 {
            history.update(7, Color::Black, -5000);
        }
        assert_eq!(history.get(7, Color::Black), -(CORRECTION_HISTORY_LIMIT as i16));
    }

    #[test]
    fn test_non_pawn_correction() {
        let mut history = NonPawnCorrectionHistory::new();
        let idx = non_pawn_index(u64::MAX);
        assert_eq!(idx, CORRECTION_HISTORY_SIZE - 1);

        history.update(idx, Color::Black, Color::White, 64);
        assert_eq!(history.get(idx, Color::Black, Color::White), 64);
        assert_eq!(history.get(idx, Color::White, Color::White), 0);
        assert_eq!(history.get(idx, Color::Black, Color::Black), 0);
    }

    #[test]
    fn test_continuation_correction_shares_piece_to_shape() {
        let mut cont = ContinuationCorrectionHistory::new();
        let mut piece_to = PieceToCorrectionHistory::new();

        cont.sub_table_mut(Piece::W_QUEEN, Square::H8).update(Piece::B_KING, Square::G1, 2000);
        piece_to.update(Piece::B_KING, Square::G1, 2000);

        assert_eq!(cont.get(Piece::W_QUEEN, Square::H8, Piece::B_KING, Square::G1), 1024);
        assert_eq!(piece_to.get(Piece::B_KING, Square::G1), 1024);
    }
}
