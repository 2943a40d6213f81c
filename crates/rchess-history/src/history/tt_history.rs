//! TTMoveHistory - 置換表の指し手成功度
//!
//! ワーカーレベルの単一値（i16, cap 8192）

use crate::stats::StatsEntry;

use super::tables::HistoryValue;

/// TTMoveHistory: ワーカーレベルの単一値
///
/// 置換表の指し手が最善手だった頻度を記録する。
/// ply ではなく、ワーカー全体で単一の値を管理。
#[derive(Clone, Copy, Debug, Default)]
pub struct TTMoveHistory {
    entry: StatsEntry<HistoryValue, 8192>,
}

impl TTMoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 値を取得
    #[inline]
    pub fn get(&self) -> HistoryValue {
        self.entry.get()
    }

    /// ボーナス値で更新
    #[inline]
    pub fn update(&mut self, bonus: i32) {
        self.entry.update(bonus);
    }

    /// クリア
    pub fn clear(&mut self) {
        self.entry.set(0);
    }
}
