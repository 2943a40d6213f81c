//! HistoryTables と HistoryCell
//!
//! 探索ワーカー1つが持つ全ての履歴/補正テーブルをまとめる。
//! ワーカー間で共有しない前提で、同期は一切行わない。

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::types::Color;

use super::fill_values::HistoryFillValues;
use super::correction::{
    ContinuationCorrectionHistory, MinorPieceCorrectionHistory, NonPawnCorrectionHistory,
    PawnCorrectionHistory, PieceToCorrectionHistory,
};
use super::index::{PawnHistoryKind, StructuralKeys};
use super::tables::{
    ButterflyHistory, CapturePieceToHistory, ContinuationHistory, HistoryValue, KnightHistory,
    LowPlyHistory, PawnHistory, StatsType,
};
use super::tt_history::TTMoveHistory;

// =============================================================================
// HistoryTables
// =============================================================================

/// 履歴/統計テーブルをまとめて保持するコンテナ
pub struct HistoryTables {
    pub main_history: ButterflyHistory,
    pub low_ply_history: LowPlyHistory,
    pub capture_history: CapturePieceToHistory,
    /// [in_check][StatsType]
    pub continuation_history: [[ContinuationHistory; StatsType::NUM]; 2],
    pub pawn_history: PawnHistory,
    pub knight_history: KnightHistory,
    pub pawn_correction_history: PawnCorrectionHistory,
    pub minor_piece_correction_history: MinorPieceCorrectionHistory,
    pub non_pawn_correction_history: NonPawnCorrectionHistory,
    pub piece_to_correction_history: PieceToCorrectionHistory,
    pub continuation_correction_history: ContinuationCorrectionHistory,
    pub tt_move_history: TTMoveHistory,
}

impl HistoryTables {
    /// 新しいHistoryTablesを作成（初期値込み）
    ///
    /// 全テーブルはそれぞれヒープ上に確保されるので、この構造体自体は小さい。
    pub fn new(fills: &HistoryFillValues) -> Self {
        let mut tables = Self {
            main_history: ButterflyHistory::new(),
            low_ply_history: LowPlyHistory::new(),
            capture_history: CapturePieceToHistory::new(),
            continuation_history: std::array::from_fn(|_| {
                std::array::from_fn(|_| ContinuationHistory::new())
            }),
            pawn_history: PawnHistory::new(),
            knight_history: KnightHistory::new(),
            pawn_correction_history: PawnCorrectionHistory::new(),
            minor_piece_correction_history: MinorPieceCorrectionHistory::new(),
            non_pawn_correction_history: NonPawnCorrectionHistory::new(),
            piece_to_correction_history: PieceToCorrectionHistory::new(),
            continuation_correction_history: ContinuationCorrectionHistory::new(),
            tt_move_history: TTMoveHistory::new(),
        };
        tables.fill_initial_values(fills);
        log::debug!("allocated history tables: {} KiB", tables.size_in_bytes() / 1024);
        tables
    }

    /// in_check / 捕獲の有無に対応する ContinuationHistory
    #[inline]
    pub fn continuation(&self, in_check: bool, stats_type: StatsType) -> &ContinuationHistory {
        &self.continuation_history[in_check as usize][stats_type.index()]
    }

    /// `continuation` の可変版
    #[inline]
    pub fn continuation_mut(
        &mut self,
        in_check: bool,
        stats_type: StatsType,
    ) -> &mut ContinuationHistory {
        &mut self.continuation_history[in_check as usize][stats_type.index()]
    }

    /// すべての履歴テーブルを初期値で埋め直す（新しい対局の開始時など）
    pub fn clear(&mut self, fills: &HistoryFillValues) {
        self.fill_initial_values(fills);
        log::debug!("history tables cleared");
    }

    fn fill_initial_values(&mut self, fills: &HistoryFillValues) {
        // 各テーブルの fill がさらに上限 D で clamp する
        let v = saturate_to_value;

        self.main_history.fill(v(fills.main_history));
        self.low_ply_history.fill(v(fills.low_ply_history));
        self.capture_history.fill(v(fills.capture_history));
        for row in &mut self.continuation_history {
            for ch in row {
                ch.fill(v(fills.continuation_history));
            }
        }
        self.pawn_history.fill(v(fills.pawn_history));
        self.knight_history.fill(v(fills.knight_history));
        self.pawn_correction_history.fill(v(fills.pawn_correction));
        self.minor_piece_correction_history.fill(v(fills.minor_correction));
        self.non_pawn_correction_history.fill(v(fills.non_pawn_correction));
        self.piece_to_correction_history.fill(v(fills.piece_to_correction));
        self.continuation_correction_history.fill(v(fills.continuation_correction));
        self.tt_move_history.clear();
    }

    /// 低 ply 履歴だけを初期値に戻す（探索の反復ごと）
    pub fn reset_low_ply(&mut self, fills: &HistoryFillValues) {
        self.low_ply_history.fill(saturate_to_value(fills.low_ply_history));
    }

    /// 全テーブルの合計バイト数
    pub fn size_in_bytes(&self) -> usize {
        let continuation: usize =
            self.continuation_history.iter().flatten().map(|ch| ch.size_in_bytes()).sum();
        self.main_history.size_in_bytes()
            + self.low_ply_history.size_in_bytes()
            + self.capture_history.size_in_bytes()
            + continuation
            + self.pawn_history.size_in_bytes()
            + self.knight_history.size_in_bytes()
            + self.pawn_correction_history.size_in_bytes()
            + self.minor_piece_correction_history.size_in_bytes()
            + self.non_pawn_correction_history.size_in_bytes()
            + self.piece_to_correction_history.size_in_bytes()
            + self.continuation_correction_history.size_in_bytes()
            + std::mem::size_of::<TTMoveHistory>()
    }

    /// 構造キーで引いた補正値の生の合計（各項の重み付けは評価側で行う）
    pub fn raw_correction_sum(&self, keys: &impl StructuralKeys, stm: Color) -> i32 {
        let pawn_idx = keys.pawn_structure_index(PawnHistoryKind::Correction);
        let pawn = self.pawn_correction_history.get(pawn_idx, stm) as i32;
        let minor = self.minor_piece_correction_history.get(keys.minor_piece_index(), stm) as i32;
        let non_pawn: i32 = Color::ALL
            .iter()
            .map(|&c| self.non_pawn_correction_history.get(keys.non_pawn_index(c), c, stm) as i32)
            .sum();
        pawn + minor + non_pawn
    }
}

/// i32 の初期値を値の型の範囲に飽和させる（上限 D での clamp は fill 側）
#[inline]
fn saturate_to_value(x: i32) -> HistoryValue {
    x.clamp(-(HistoryValue::MAX as i32), HistoryValue::MAX as i32) as HistoryValue
}

// =============================================================================
// HistoryCell（内部可変性ラッパー）
// =============================================================================

/// History用の内部可変ラッパー
///
/// 参照を外部に漏らさないために `with_read`/`with_write` を使用する。
///
/// - 参照はクロージャ内に閉じ込められ、外部に漏れない
/// - `PhantomData<Rc<()>>` により `!Send` を強制（単一スレッド保証）
/// - `with_read` の中で `with_write` を呼ぶなど、借用が重なると panic する
///
/// ## 使用パターン
///
/// ```
/// use rchess_history::history::{HistoryCell, HistoryFillValues, HistoryTables};
/// use rchess_history::types::{Color, Move};
///
/// let fills = HistoryFillValues::default();
/// let cell = HistoryCell::new(HistoryTables::new(&fills));
/// let mv = Move::from_uci("e2e4").unwrap();
/// cell.with_write(|h| h.main_history.update(Color::White, mv, 500));
/// let score = cell.with_read(|h| h.main_history.get(Color::White, mv));
/// assert!(score > fills.main_history as i16);
/// ```
pub struct HistoryCell {
    inner: RefCell<HistoryTables>,
    /// `!Send` を強制するためのマーカー（単一スレッド保証）
    _marker: PhantomData<Rc<()>>,
}

impl HistoryCell {
    /// 新しいHistoryCellを作成
    pub fn new(history: HistoryTables) -> Self {
        Self {
            inner: RefCell::new(history),
            _marker: PhantomData,
        }
    }

    /// 読み取りアクセス（クロージャ内に参照を閉じ込める）
    ///
    /// # Panics
    ///
    /// `with_write` の実行中に呼んだ場合。
    #[inline]
    pub fn with_read<R>(&self, f: impl FnOnce(&HistoryTables) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// 書き込みアクセス（クロージャ内に参照を閉じ込める）
    ///
    /// # Panics
    ///
    /// `with_read` / `with_write` の実行中に呼んだ場合。
    #[inline]
    pub fn with_write<R>(&self, f: impl FnOnce(&mut HistoryTables) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }

    /// 内部の HistoryTables への可変参照を取得（初期化用）
    #[inline]
    pub fn get_mut(&mut self) -> &mut HistoryTables {
        self.inner.get_mut()
    }

    /// すべての履歴テーブルを初期値に戻す
    pub fn clear(&mut self, fills: &HistoryFillValues) {
        self.inner.get_mut().clear(fills);
    }
}
