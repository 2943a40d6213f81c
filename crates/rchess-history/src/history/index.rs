//! 局面特徴量からテーブル添字への変換
//!
//! 構造キーはすでに十分に分散したハッシュ値として扱い、テーブルサイズでマスクするだけ。
//! 入力の妥当性は検査しない（別の出所のキーを渡すのは呼び出し側の契約違反）。

use crate::types::Color;

/// PawnHistoryのサイズ（2のべき乗）
pub const PAWN_HISTORY_SIZE: usize = 512;

/// CorrectionHistoryのサイズ（2のべき乗）
pub const CORRECTION_HISTORY_SIZE: usize = 32768;

/// CorrectionHistoryの値の制限
pub const CORRECTION_HISTORY_LIMIT: i32 = 1024;

/// LowPlyHistoryのサイズ（ルート付近のply数）
pub const LOW_PLY_HISTORY_SIZE: usize = 5;

const _: () = assert!(PAWN_HISTORY_SIZE.is_power_of_two(), "PAWN_HISTORY_SIZE has to be a power of 2");
const _: () = assert!(
    CORRECTION_HISTORY_SIZE.is_power_of_two(),
    "CORRECTION_HISTORY_SIZE has to be a power of 2"
);

/// pawn key をどのテーブル用にマスクするか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PawnHistoryKind {
    /// 手の順序付け用（PAWN_HISTORY_SIZE）
    Normal,
    /// 評価値補正用（CORRECTION_HISTORY_SIZE）
    Correction,
}

impl PawnHistoryKind {
    /// 対応するテーブルサイズ
    #[inline]
    pub const fn table_size(self) -> usize {
        match self {
            PawnHistoryKind::Normal => PAWN_HISTORY_SIZE,
            PawnHistoryKind::Correction => CORRECTION_HISTORY_SIZE,
        }
    }
}

/// pawn key の添字
#[inline]
pub const fn pawn_structure_index(pawn_key: u64, kind: PawnHistoryKind) -> usize {
    (pawn_key & (kind.table_size() as u64 - 1)) as usize
}

/// minor piece key の添字
#[inline]
pub const fn minor_piece_index(minor_piece_key: u64) -> usize {
    (minor_piece_key & (CORRECTION_HISTORY_SIZE as u64 - 1)) as usize
}

/// non-pawn key の添字
#[inline]
pub const fn non_pawn_index(non_pawn_key: u64) -> usize {
    (non_pawn_key & (CORRECTION_HISTORY_SIZE as u64 - 1)) as usize
}

/// 履歴テーブルが局面から読む構造キー
///
/// 局面表現側で実装する。提供メソッドは正しいキーを選んでマスクする。
pub trait StructuralKeys {
    /// 歩の配置のハッシュ
    fn pawn_key(&self) -> u64;

    /// ナイト・ビショップ（と両キング）の配置のハッシュ
    fn minor_piece_key(&self) -> u64;

    /// 指定手番の歩以外の駒の配置のハッシュ
    fn non_pawn_key(&self, color: Color) -> u64;

    #[inline]
    fn pawn_structure_index(&self, kind: PawnHistoryKind) -> usize {
        pawn_structure_index(self.pawn_key(), kind)
    }

    #[inline]
    fn minor_piece_index(&self) -> usize {
        minor_piece_index(self.minor_piece_key())
    }

    #[inline]
    fn non_pawn_index(&self, color: Color) -> usize {
        non_pawn_index(self.non_pawn_key(color))
    }
}
