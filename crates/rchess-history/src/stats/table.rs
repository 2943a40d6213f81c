//! StatsTable: 多次元の統計テーブル
//!
//! `StatsEntry` を行優先（最後の次元が最も速く変化する）で1本の連続領域に並べる。
//! 次元数 `N` は型パラメータ、各次元のサイズは構築時に与える。

use std::ops::{Index, IndexMut};

use super::entry::{StatsEntry, StatsValue};
use super::error::{StatsError, StatsResult};

/// 多次元の統計テーブル
///
/// 座標は `[usize; N]`。範囲外の座標は呼び出し側の契約違反で、
/// 各座標の範囲は debug ビルドでのみ検査する。release ビルドでは、先頭側の次元の
/// 範囲外は別のセルを指してしまう（スライス境界で止まるのは領域全体をはみ出した場合だけ）。
#[derive(Clone)]
pub struct StatsTable<T: StatsValue, const D: i32, const N: usize> {
    shape: [usize; N],
    strides: [usize; N],
    cells: Box<[StatsEntry<T, D>]>,
}

impl<T: StatsValue, const D: i32, const N: usize> StatsTable<T, D, N> {
    /// 形状を検査してテーブルを確保する（全セル 0）
    pub fn try_new(shape: [usize; N]) -> StatsResult<Self> {
        let mut strides = [0usize; N];
        let mut len = 1usize;
        for dim in (0..N).rev() {
            let size = shape[dim];
            if size == 0 {
                return Err(StatsError::EmptyDimension { dim });
            }
            strides[dim] = len;
            len = len.checked_mul(size).ok_or_else(|| StatsError::CapacityOverflow {
                shape: shape.to_vec(),
            })?;
        }

        Ok(Self {
            shape,
            strides,
            cells: vec![StatsEntry::new(); len].into_boxed_slice(),
        })
    }

    /// テーブルを確保する（全セル 0）
    ///
    /// # Panics
    ///
    /// 形状が不正な場合（サイズ 0 の次元、セル数のオーバーフロー）。
    /// 形状はテーブル種別ごとの定数なので、ここでの失敗は設定ミスとして即座に止める。
    pub fn new(shape: [usize; N]) -> Self {
        match Self::try_new(shape) {
            Ok(table) => table,
            Err(e) => panic!("invalid stats table shape: {e}"),
        }
    }

    /// 各次元のサイズ
    #[inline]
    pub fn shape(&self) -> [usize; N] {
        self.shape
    }

    /// セル数
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// 常に false（サイズ 0 の次元は構築時に拒否される）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 確保しているバイト数
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        std::mem::size_of_val(&*self.cells)
    }

    #[inline]
    fn offset(&self, coords: &[usize]) -> usize {
        debug_assert!(coords.len() <= N);
        let mut offset = 0;
        for (dim, &c) in coords.iter().enumerate() {
            debug_assert!(
                c < self.shape[dim],
                "stats index out of range: dim={} index={} size={}",
                dim,
                c,
                self.shape[dim]
            );
            offset += c * self.strides[dim];
        }
        offset
    }

    /// セルへの参照
    #[inline]
    pub fn entry(&self, coords: [usize; N]) -> &StatsEntry<T, D> {
        &self.cells[self.offset(&coords)]
    }

    /// セルへの可変参照
    #[inline]
    pub fn entry_mut(&mut self, coords: [usize; N]) -> &mut StatsEntry<T, D> {
        let offset = self.offset(&coords);
        &mut self.cells[offset]
    }

    /// 値を取得
    #[inline]
    pub fn get(&self, coords: [usize; N]) -> T {
        self.entry(coords).get()
    }

    /// 値を更新
    #[inline]
    pub fn update(&mut self, coords: [usize; N], bonus: i32) {
        self.entry_mut(coords).update(bonus);
    }

    /// 座標の先頭部分で指定される連続ブロック
    ///
    /// `prefix` が k 次元なら、残り N-k 次元分のセルを行優先で返す。
    /// 入れ子のテーブル（[piece][to] の下に [piece][to]）の内側を切り出すのに使う。
    #[inline]
    pub fn block(&self, prefix: &[usize]) -> &[StatsEntry<T, D>] {
        let (start, len) = self.block_range(prefix);
        &self.cells[start..start + len]
    }

    /// `block` の可変版
    #[inline]
    pub fn block_mut(&mut self, prefix: &[usize]) -> &mut [StatsEntry<T, D>] {
        let (start, len) = self.block_range(prefix);
        &mut self.cells[start..start + len]
    }

    #[inline]
    fn block_range(&self, prefix: &[usize]) -> (usize, usize) {
        let start = self.offset(prefix);
        let len = match prefix.len() {
            0 => self.cells.len(),
            k => self.strides[k - 1],
        };
        (start, len)
    }

    /// 全セルを指定値で埋める（[-D, D] の外の値は clamp する）
    pub fn fill(&mut self, v: T) {
        let mut entry = StatsEntry::new();
        entry.set(v);
        self.cells.fill(entry);
    }

    /// 全セルを 0 に戻す
    pub fn clear(&mut self) {
        self.fill(T::default());
    }

    /// 全セルを行優先で列挙
    pub fn iter(&self) -> impl Iterator<Item = &StatsEntry<T, D>> {
        self.cells.iter()
    }
}

impl<T: StatsValue, const D: i32, const N: usize> Index<[usize; N]> for StatsTable<T, D, N> {
    type Output = StatsEntry<T, D>;

    #[inline]
    fn index(&self, coords: [usize; N]) -> &StatsEntry<T, D> {
        self.entry(coords)
    }
}

impl<T: StatsValue, const D: i32, const N: usize> IndexMut<[usize; N]> for StatsTable<T, D, N> {
    #[inline]
    fn index_mut(&mut self, coords: [usize; N]) -> &mut StatsEntry<T, D> {
        self.entry_mut(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape_and_len() {
        let table = StatsTable::<i16, 100, 3>::new([2, 3, 4]);
        assert_eq!(table.shape(), [2, 3, 4]);
        assert_eq!(table.len(), 24);
        assert_eq!(table.size_in_bytes(), 48);
        assert!(table.iter().all(|e| e.get() == 0));
    }

    #[test]
    fn test_table_rejects_empty_dimension() {
        let err = StatsTable::<i16, 100, 3>::try_new([2, 0, 4]).err();
        assert_eq!(err, Some(StatsError::EmptyDimension { dim: 1 }));
    }

    #[test]
    fn test_table_rejects_overflow() {
        let err = StatsTable::<i16, 100, 2>::try_new([usize::MAX, 2]).err();
        assert!(matches!(err, Some(StatsError::CapacityOverflow { .. })));
    }

    #[test]
    #[should_panic(expected = "invalid stats table shape")]
    fn test_table_new_panics_on_bad_shape() {
        let _ = StatsTable::<i16, 100, 1>::new([0]);
    }

    #[test]
    fn test_table_round_trip_markers() {
        let mut table = StatsTable::<i16, 1000, 3>::new([3, 5, 7]);
        let marker = |a: usize, b: usize, c: usize| (a * 100 + b * 10 + c) as i16;

        for a in 0..3 {
            for b in 0..5 {
                for c in 0..7 {
                    table[[a, b, c]].set(marker(a, b, c));
                }
            }
        }
        for a in 0..3 {
            for b in 0..5 {
                for c in 0..7 {
                    assert_eq!(table.get([a, b, c]), marker(a, b, c));
                }
            }
        }
    }

    #[test]
    fn test_table_row_major_layout() {
        let mut table = StatsTable::<i16, 1000, 2>::new([2, 3]);
        table.update([1, 0], 5);
        let flat: Vec<i16> = table.iter().map(|e| e.get()).collect();
        assert_eq!(flat, [0, 0, 0, 5, 0, 0]);
    }

    #[test]
    fn test_table_block() {
        let mut table = StatsTable::<i16, 1000, 3>::new([2, 3, 4]);
        assert_eq!(table.block(&[]).len(), 24);
        assert_eq!(table.block(&[1]).len(), 12);
        assert_eq!(table.block(&[1, 2]).len(), 4);

        table.block_mut(&[1, 2])[3].update(42);
        assert_eq!(table.get([1, 2, 3]), 42);
        assert_eq!(table.block(&[1])[2 * 4 + 3].get(), 42);
    }

    #[test]
    fn test_table_fill_and_clear() {
        let mut table = StatsTable::<i16, 1000, 2>::new([4, 4]);
        table.fill(-7);
        assert!(table.iter().all(|e| e.get() == -7));
        table.clear();
        assert!(table.iter().all(|e| e.get() == 0));
    }

    #[test]
    fn test_table_fill_out_of_bound_is_clamped() {
        let mut table = StatsTable::<i16, 1000, 2>::new([2, 3]);
        table.fill(i16::MAX);
        assert!(table.iter().all(|e| e.get() == 1000));
        table.fill(-5000);
        assert!(table.iter().all(|e| e.get() == -1000));

        table.update([1, 2], -100);
        assert_eq!(table.get([1, 2]), -1000);
    }

    #[test]
    fn test_table_rank_zero_is_single_cell() {
        let mut table = StatsTable::<i16, 8192, 0>::new([]);
        assert_eq!(table.len(), 1);
        table.update([], 100);
        assert_eq!(table.get([]), 100);
    }
}
