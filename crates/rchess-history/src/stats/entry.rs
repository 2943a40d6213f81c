//! StatsEntry: 範囲制限付き統計エントリ
//!
//! 全ての履歴・補正テーブルが共有する飽和カウンタ。
//! 値の型 `T` と飽和上限 `D` を型パラメータに持ち、更新式は上限によらず共通。

use std::fmt;

/// StatsEntry に格納できる符号付き整数型
///
/// 更新式は i64 で計算するため、`D <= T::MAX` であればオーバーフローしない。
pub trait StatsValue: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// 型の最大値
    const MAX: i64;

    fn to_i64(self) -> i64;

    /// `|v| <= D <= MAX` が呼び出し側で保証されている値のみ渡される
    fn from_i64(v: i64) -> Self;
}

macro_rules! impl_stats_value {
    ($($t:ty),*) => {
        $(
            impl StatsValue for $t {
                const MAX: i64 = <$t>::MAX as i64;

                #[inline]
                fn to_i64(self) -> i64 {
                    self as i64
                }

                #[inline]
                fn from_i64(v: i64) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_stats_value!(i8, i16, i32);

/// 履歴統計の1エントリ
///
/// 値の範囲を [-D, D] に制限しながら更新できる。
/// `D` が正でない、または `T` に収まらない場合はコンパイル時に拒否される。
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct StatsEntry<T: StatsValue, const D: i32> {
    value: T,
}

impl<T: StatsValue, const D: i32> StatsEntry<T, D> {
    const BOUND_CHECK: () = assert!(
        D > 0 && (D as i64) <= T::MAX,
        "StatsEntry: D must be positive and representable by the value type"
    );

    /// 飽和上限
    pub const LIMIT: i32 = D;

    /// 値 0 のエントリを作成
    #[inline]
    pub fn new() -> Self {
        let () = Self::BOUND_CHECK;
        Self { value: T::default() }
    }

    /// 値を取得
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }

    /// 値を i32 で取得
    #[inline]
    pub fn value(&self) -> i32 {
        self.value.to_i64() as i32
    }

    /// 値を設定（初期化・クリア専用。通常の更新は `update` を使う）
    ///
    /// [-D, D] の外の値は範囲内に clamp する。
    #[inline]
    pub fn set(&mut self, v: T) {
        let () = Self::BOUND_CHECK;
        let d = D as i64;
        self.value = T::from_i64(v.to_i64().clamp(-d, d));
    }

    /// ボーナス値を加算（範囲制限付き）
    ///
    /// 更新式: entry += clamp(bonus, -D, D) - entry * |clamp(bonus, -D, D)| / D
    ///
    /// この式の性質:
    /// - bonus == D のとき、entry が D に収束
    /// - bonus が小さいとき、ほぼそのまま加算
    /// - bonus == 0 のとき、値は変化しない
    /// - 値が D を超えないよう自動調整（事後条件は debug_assert で検査し、丸め直さない）
    #[inline]
    pub fn update(&mut self, bonus: i32) {
        let () = Self::BOUND_CHECK;
        let d = D as i64;
        let clamped = (bonus as i64).clamp(-d, d);
        let entry = self.value.to_i64();
        let next = entry + clamped - entry * clamped.abs() / d;
        debug_assert!(next.abs() <= d, "StatsEntry out of range: {} (D={})", next, D);
        self.value = T::from_i64(next);
    }
}

impl<T: StatsValue, const D: i32> Default for StatsEntry<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StatsValue, const D: i32> fmt::Debug for StatsEntry<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StatsEntry<{}>({:?})", D, self.value)
    }
}
