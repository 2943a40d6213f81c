//! 手の順序付け用の履歴テーブル
//!
//! - `ButterflyHistory`: [Color][from_to] -> score
//! - `LowPlyHistory`: [ply][from_to] -> score
//! - `CapturePieceToHistory`: [piece][to][captured_pt] -> score
//! - `PieceToTable<D>`: [piece][to] -> score
//! - `ContinuationTable<D>`: [prev_pc][prev_to][pc][to] -> score
//! - `PawnHistory`: [pawn_key_idx][piece][to] -> score
//! - `KnightHistory`: [Color][from][knight_attack_index] -> score
//!
//! 上限 `D` は型ごとに固定で、同じ形状のテーブルは `D` だけを変えて共有する
//! （PieceToTable / ContinuationTable は補正履歴でも使う）。

use crate::stats::{StatsEntry, StatsTable};
use crate::types::{Bitboard, Color, Move, Piece, PieceType, Square};

use super::index::{LOW_PLY_HISTORY_SIZE, PAWN_HISTORY_SIZE};
use super::knight_magic::{KNIGHT_INDEX_NUM, knight_attack_index};

/// 全テーブル共通の値の型
pub type HistoryValue = i16;

/// i16 で値を持つ統計テーブル
pub type Stats<const D: i32, const N: usize> = StatsTable<HistoryValue, D, N>;

/// from_toインデックスのサイズ
pub const FROM_TO_SIZE: usize = Square::NUM * Square::NUM;

/// 駒種の添字空間（0 = 駒なし、1..=6、未使用を含めて 8）
pub const PIECE_TYPE_NB: usize = 8;

/// 捕獲の有無でcontinuation historyを分ける
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StatsType {
    NoCaptures = 0,
    Captures = 1,
}

impl StatsType {
    /// 種類の数
    pub const NUM: usize = 2;

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// =============================================================================
// ButterflyHistory
// =============================================================================

/// ButterflyHistory: [Color][from_to] -> score
///
/// 静かな手（quiet moves）の成功/失敗を記録。
/// 手の移動元と移動先でインデックス。
#[derive(Clone)]
pub struct ButterflyHistory {
    table: Stats<7183, 2>,
}

impl ButterflyHistory {
    /// 新しいButterflyHistoryを作成
    pub fn new() -> Self {
        Self {
            table: Stats::new([Color::NUM, FROM_TO_SIZE]),
        }
    }

    /// 値を取得
    #[inline]
    pub fn get(&self, color: Color, mv: Move) -> HistoryValue {
        self.table.get([color.index(), mv.from_to()])
    }

    /// 値を更新
    #[inline]
    pub fn update(&mut self, color: Color, mv: Move, bonus: i32) {
        self.table.update([color.index(), mv.from_to()], bonus);
    }

    /// 全エントリを指定値で埋める
    pub fn fill(&mut self, v: HistoryValue) {
        self.table.fill(v);
    }

    /// クリア
    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.table.size_in_bytes()
    }
}

impl Default for ButterflyHistory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// LowPlyHistory
// =============================================================================

/// LowPlyHistory: [ply][from_to] -> score
///
/// ルート付近での手の順序を改善するための履歴。
/// `LOW_PLY_HISTORY_SIZE` 以上の ply は読むと 0、更新は無視する。
#[derive(Clone)]
pub struct LowPlyHistory {
    table: Stats<7183, 2>,
}

impl LowPlyHistory {
    /// 新しいLowPlyHistoryを作成
    pub fn new() -> Self {
        Self {
            table: Stats::new([LOW_PLY_HISTORY_SIZE, FROM_TO_SIZE]),
        }
    }

    /// 値を取得
    #[inline]
    pub fn get(&self, ply: usize, mv: Move) -> HistoryValue {
        if ply < LOW_PLY_HISTORY_SIZE {
            self.table.get([ply, mv.from_to()])
        } else {
            0
        }
    }

    /// 値を更新
    #[inline]
    pub fn update(&mut self, ply: usize, mv: Move, bonus: i32) {
        if ply < LOW_PLY_HISTORY_SIZE {
            self.table.update([ply, mv.from_to()], bonus);
        }
    }

    pub fn fill(&mut self, v: HistoryValue) {
        self.table.fill(v);
    }

    /// クリア
    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.table.size_in_bytes()
    }
}

impl Default for LowPlyHistory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// CapturePieceToHistory
// =============================================================================

/// CapturePieceToHistory: [piece][to][captured_piece_type] -> score
///
/// 捕獲する手の履歴。
#[derive(Clone)]
pub struct CapturePieceToHistory {
    table: Stats<10692, 3>,
}

impl CapturePieceToHistory {
    /// 新しいCapturePieceToHistoryを作成
    pub fn new() -> Self {
        Self {
            table: Stats::new([Piece::NUM, Square::NUM, PIECE_TYPE_NB]),
        }
    }

    /// 捕獲された駒そのものを渡す版。
    ///
    /// 駒種部分（下位3bit）をインデックスに使うため、呼び出し側で `piece_type()` を
    /// 取らなくてよい。捕獲がない場合（captured = NONE）は index=0 を使う。
    #[inline]
    pub fn get_with_captured_piece(&self, pc: Piece, to: Square, captured: Piece) -> HistoryValue {
        self.table.get([pc.index(), to.index(), captured.type_index()])
    }

    /// 値を取得
    #[inline]
    pub fn get(&self, pc: Piece, to: Square, captured_pt: PieceType) -> HistoryValue {
        self.table.get([pc.index(), to.index(), captured_pt.index()])
    }

    /// 値を更新
    #[inline]
    pub fn update(&mut self, pc: Piece, to: Square, captured_pt: PieceType, bonus: i32) {
        self.table.update([pc.index(), to.index(), captured_pt.index()], bonus);
    }

    pub fn fill(&mut self, v: HistoryValue) {
        self.table.fill(v);
    }

    /// クリア
    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.table.size_in_bytes()
    }
}

impl Default for CapturePieceToHistory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// PieceToTable
// =============================================================================

/// [piece][to] -> score
///
/// 駒と移動先でインデックスする履歴。上限 `D` は用途ごとに変える。
#[derive(Clone)]
pub struct PieceToTable<const D: i32> {
    table: Stats<D, 2>,
}

/// PieceToHistory: 手の順序付け用
pub type PieceToHistory = PieceToTable<30000>;

impl<const D: i32> PieceToTable<D> {
    /// 新しいテーブルを作成
    pub fn new() -> Self {
        Self {
            table: Stats::new([Piece::NUM, Square::NUM]),
        }
    }

    /// 値を取得
    #[inline]
    pub fn get(&self, pc: Piece, to: Square) -> HistoryValue {
        self.table.get([pc.index(), to.index()])
    }

    /// 値を更新
    #[inline]
    pub fn update(&mut self, pc: Piece, to: Square, bonus: i32) {
        self.table.update([pc.index(), to.index()], bonus);
    }

    pub fn fill(&mut self, v: HistoryValue) {
        self.table.fill(v);
    }

    /// クリア
    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.table.size_in_bytes()
    }
}

impl<const D: i32> Default for PieceToTable<D> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// ContinuationTable
// =============================================================================

/// 1手前の (piece, to) で選ばれる [piece][to] の部分テーブル（読み取り）
#[derive(Clone, Copy)]
pub struct PieceToView<'a, const D: i32> {
    cells: &'a [StatsEntry<HistoryValue, D>],
}

impl<const D: i32> PieceToView<'_, D> {
    /// 値を取得
    #[inline]
    pub fn get(&self, pc: Piece, to: Square) -> HistoryValue {
        self.cells[pc.index() * Square::NUM + to.index()].get()
    }
}

/// 1手前の (piece, to) で選ばれる [piece][to] の部分テーブル（更新）
pub struct PieceToViewMut<'a, const D: i32> {
    cells: &'a mut [StatsEntry<HistoryValue, D>],
}

impl<const D: i32> PieceToViewMut<'_, D> {
    /// 値を取得
    #[inline]
    pub fn get(&self, pc: Piece, to: Square) -> HistoryValue {
        self.cells[pc.index() * Square::NUM + to.index()].get()
    }

    /// 値を更新
    #[inline]
    pub fn update(&mut self, pc: Piece, to: Square, bonus: i32) {
        self.cells[pc.index() * Square::NUM + to.index()].update(bonus);
    }
}

/// [prev_piece][prev_to] の下に [piece][to] を入れ子にしたテーブル
///
/// 連続する2手の組み合わせ履歴。1手前の駒と移動先から、現在の駒と移動先へのスコア。
/// 4次元の1本の領域として持ち、先頭2座標のブロックを部分テーブルとして貸し出す。
#[derive(Clone)]
pub struct ContinuationTable<const D: i32> {
    table: Stats<D, 4>,
}

/// ContinuationHistory: 手の順序付け用（内側は PieceToHistory と同じ上限）
pub type ContinuationHistory = ContinuationTable<30000>;

impl<const D: i32> ContinuationTable<D> {
    /// 新しいテーブルを作成
    pub fn new() -> Self {
        Self {
            table: Stats::new([Piece::NUM, Square::NUM, Piece::NUM, Square::NUM]),
        }
    }

    /// 1手前の (piece, to) に対応する部分テーブル
    #[inline]
    pub fn sub_table(&self, prev_pc: Piece, prev_to: Square) -> PieceToView<'_, D> {
        PieceToView {
            cells: self.table.block(&[prev_pc.index(), prev_to.index()]),
        }
    }

    /// 部分テーブルへの可変参照
    #[inline]
    pub fn sub_table_mut(&mut self, prev_pc: Piece, prev_to: Square) -> PieceToViewMut<'_, D> {
        PieceToViewMut {
            cells: self.table.block_mut(&[prev_pc.index(), prev_to.index()]),
        }
    }

    /// 値を取得
    #[inline]
    pub fn get(&self, prev_pc: Piece, prev_to: Square, pc: Piece, to: Square) -> HistoryValue {
        self.table.get([prev_pc.index(), prev_to.index(), pc.index(), to.index()])
    }

    /// 値を更新
    #[inline]
    pub fn update(&mut self, prev_pc: Piece, prev_to: Square, pc: Piece, to: Square, bonus: i32) {
        self.table.update([prev_pc.index(), prev_to.index(), pc.index(), to.index()], bonus);
    }

    pub fn fill(&mut self, v: HistoryValue) {
        self.table.fill(v);
    }

    /// クリア
    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.table.size_in_bytes()
    }
}

impl<const D: i32> Default for ContinuationTable<D> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// PawnHistory
// =============================================================================

/// PawnHistory: [pawn_key_index][piece][to] -> score
///
/// 歩の陣形に対する履歴。`pawn_key_index` は
/// `pawn_structure_index(key, PawnHistoryKind::Normal)` で求める。
#[derive(Clone)]
pub struct PawnHistory {
    table: Stats<8192, 3>,
}

impl PawnHistory {
    /// 新しいPawnHistoryを作成
    pub fn new() -> Self {
        Self {
            table: Stats::new([PAWN_HISTORY_SIZE, Piece::NUM, Square::NUM]),
        }
    }

    /// 値を取得
    #[inline]
    pub fn get(&self, pawn_key_index: usize, pc: Piece, to: Square) -> HistoryValue {
        self.table.get([pawn_key_index, pc.index(), to.index()])
    }

    /// 値を更新
    #[inline]
    pub fn update(&mut self, pawn_key_index: usize, pc: Piece, to: Square, bonus: i32) {
        self.table.update([pawn_key_index, pc.index(), to.index()], bonus);
    }

    pub fn fill(&mut self, v: HistoryValue) {
        self.table.fill(v);
    }

    /// クリア
    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.table.size_in_bytes()
    }
}

impl Default for PawnHistory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// KnightHistory
// =============================================================================

/// KnightHistory: [Color][from][knight_attack_index] -> score
///
/// ナイトの位置と、そこから届くマスのうち注目する集合（例: 敵駒のいるマス）の組で引く。
/// 集合は `knight_attack_index` で 256 通りの添字に畳む。
#[derive(Clone)]
pub struct KnightHistory {
    table: Stats<5000, 3>,
}

impl KnightHistory {
    /// 新しいKnightHistoryを作成
    pub fn new() -> Self {
        Self {
            table: Stats::new([Color::NUM, Square::NUM, KNIGHT_INDEX_NUM]),
        }
    }

    /// 値を取得
    ///
    /// `targets` は `knight_attacks(from)` の部分集合であること。
    #[inline]
    pub fn get(&self, color: Color, from: Square, targets: Bitboard) -> HistoryValue {
        self.table.get([color.index(), from.index(), knight_attack_index(targets, from)])
    }

    /// 値を更新
    #[inline]
    pub fn update(&mut self, color: Color, from: Square, targets: Bitboard, bonus: i32) {
        self.table.update([color.index(), from.index(), knight_attack_index(targets, from)], bonus);
    }

    pub fn fill(&mut self, v: HistoryValue) {
        self.table.fill(v);
    }

    /// クリア
    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub(crate) fn size_in_bytes(&self) -> usize {
        self.table.size_in_bytes()
    }
}

impl Default for KnightHistory {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// テスト
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::knight_attacks;

    #[test]
    fn test_butterfly_history() {
        let mut history = ButterflyHistory::new();
        let mv = Move::from_uci("e2e4").unwrap();

        assert_eq!(history.get(Color::White, mv), 0);

        history.update(Color::White, mv, 100);
        assert_eq!(history.get(Color::White, mv), 100);
        assert_eq!(history.get(Color::Black, mv), 0); // 別の色は影響なし
        assert_eq!(history.get(Color::White, Move::from_uci("e4e2").unwrap()), 0);
    }

    #[test]
    fn test_butterfly_history_saturates() {
        let mut history = ButterflyHistory::new();
        let mv = Move::from_uci("g1f3").unwrap();
        for _ in 0..50 {
            history.update(Color::Black, mv, 20_000);
        }
        assert_eq!(history.get(Color::Black, mv), 7183);
    }

    #[test]
    fn test_low_ply_history() {
        let mut history = LowPlyHistory::new();
        let mv = Move::from_uci("d2d4").unwrap();

        history.update(0, mv, 100);
        assert!(history.get(0, mv) > 0);
        assert_eq!(history.get(1, mv), 0);

        // 範囲外のplyは0を返し、更新も無視する
        history.update(LOW_PLY_HISTORY_SIZE, mv, 100);
        assert_eq!(history.get(LOW_PLY_HISTORY_SIZE, mv), 0);
    }

    #[test]
    fn test_capture_piece_to_history_with_captured_piece() {
        let mut history = CapturePieceToHistory::new();
        let pc = Piece::W_BISHOP;
        let to = Square::E5;
        let captured = Piece::B_KNIGHT;

        assert_eq!(history.get_with_captured_piece(pc, to, captured), 0);

        history.update(pc, to, captured.piece_type(), 100);
        assert_eq!(history.get_with_captured_piece(pc, to, captured), 100);
        assert_eq!(
            history.get_with_captured_piece(pc, to, captured),
            history.get(pc, to, PieceType::Knight)
        );

        // NONEの場合はindex=0を使う
        assert_eq!(history.get_with_captured_piece(pc, to, Piece::NONE), 0);
    }

    #[test]
    fn test_piece_to_history_bound() {
        let mut history = PieceToHistory::new();
        history.update(Piece::B_QUEEN, Square::D4, 100_000);
        assert_eq!(history.get(Piece::B_QUEEN, Square::D4), 30000);
        history.update(Piece::B_QUEEN, Square::D4, -100_000);
        assert_eq!(history.get(Piece::B_QUEEN, Square::D4), -30000);
    }

    #[test]
    fn test_continuation_history_sub_table() {
        let mut history = ContinuationHistory::new();
        let (prev_pc, prev_to) = (Piece::W_KNIGHT, Square::C3);
        let (pc, to) = (Piece::B_PAWN, Square::E5);

        history.sub_table_mut(prev_pc, prev_to).update(pc, to, 500);
        assert_eq!(history.get(prev_pc, prev_to, pc, to), 500);
        assert_eq!(history.sub_table(prev_pc, prev_to).get(pc, to), 500);

        // 別の1手前には影響しない
        assert_eq!(history.sub_table(prev_pc, Square::D4).get(pc, to), 0);
        assert_eq!(history.get(Piece::B_KNIGHT, prev_to, pc, to), 0);

        history.update(prev_pc, prev_to, pc, to, 500);
        assert_eq!(history.sub_table(prev_pc, prev_to).get(pc, to), 992);
    }

    #[test]
    fn test_pawn_history() {
        let mut history = PawnHistory::new();
        history.update(PAWN_HISTORY_SIZE - 1, Piece::W_ROOK, Square::A8, -300);
        assert_eq!(history.get(PAWN_HISTORY_SIZE - 1, Piece::W_ROOK, Square::A8), -300);
        assert_eq!(history.get(0, Piece::W_ROOK, Square::A8), 0);
        history.fill(-1287);
        assert_eq!(history.get(0, Piece::W_ROOK, Square::A8), -1287);
    }

    #[test]
    fn test_knight_history_distinguishes_target_sets() {
        let mut history = KnightHistory::new();
        let from = Square::D4;
        let all = knight_attacks(from);
        let one = Bitboard::from_square(all.iter().next().unwrap());

        history.update(Color::White, from, one, 1000);
        assert_eq!(history.get(Color::White, from, one), 1000);
        assert_eq!(history.get(Color::White, from, all & Bitboard::new(!one.raw())), 0);
        assert_eq!(history.get(Color::Black, from, one), 0);
    }
}
