//! 統計テーブル構築時のエラー

/// StatsTable の形状エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// 次元のサイズが 0
    #[error("stats table dimension {dim} has size 0")]
    EmptyDimension { dim: usize },

    /// セル数が usize に収まらない
    #[error("stats table shape {shape:?} overflows the addressable cell count")]
    CapacityOverflow { shape: Vec<usize> },
}

/// StatsTable 操作の Result 型
pub type StatsResult<T> = Result<T, StatsError>;
