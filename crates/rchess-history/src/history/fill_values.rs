//! 各テーブルをクリアするときの初期値
//!
//! 名前付き option での更新と、TOML からの上書き読み込みに対応する。
//! 範囲は各テーブルの上限 D。範囲外は clamp する。

use serde::Deserialize;

/// 1つの初期値 option の定義。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOptionSpec {
    /// option 名
    pub name: &'static str,
    /// デフォルト値
    pub default: i32,
    /// 最小値（inclusive）
    pub min: i32,
    /// 最大値（inclusive）
    pub max: i32,
}

/// 1項目を適用した結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillSetResult {
    /// 反映後の値（必要なら clamp 後）
    pub applied: i32,
    /// 入力値が範囲外で clamp されたか
    pub clamped: bool,
}

/// 初期値設定のエラー
#[derive(thiserror::Error, Debug)]
pub enum FillValuesError {
    /// 存在しない option 名
    #[error("unknown history fill option: {0}")]
    UnknownOption(String),

    /// TOML の構文エラー、型不一致、未知のキー
    #[error(transparent)]
    Parse(#[from] toml::de::Error),
}

/// テーブルごとの初期値。
///
/// TOML ではフィールド名をそのままキーに使い、書かなかった項目はデフォルト値になる。
/// フィールドを直接書き換えた場合も、テーブルに入るときに上限 D で clamp される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryFillValues {
    pub main_history: i32,
    pub low_ply_history: i32,
    pub capture_history: i32,
    pub continuation_history: i32,
    pub pawn_history: i32,
    pub knight_history: i32,
    pub pawn_correction: i32,
    pub minor_correction: i32,
    pub non_pawn_correction: i32,
    pub piece_to_correction: i32,
    pub continuation_correction: i32,
}

const FILL_OPTION_SPECS: &[FillOptionSpec] = &[
    spec("MainHistoryFill", 68, 7183),
    spec("LowPlyHistoryFill", 97, 7183),
    spec("CaptureHistoryFill", -689, 10692),
    spec("ContinuationHistoryFill", -529, 30000),
    spec("PawnHistoryFill", -1238, 8192),
    spec("KnightHistoryFill", 0, 5000),
    spec("PawnCorrectionFill", 5, 1024),
    spec("MinorCorrectionFill", 0, 1024),
    spec("NonPawnCorrectionFill", 0, 1024),
    spec("PieceToCorrectionFill", 0, 1024),
    spec("ContinuationCorrectionFill", 8, 1024),
];

const fn spec(name: &'static str, default: i32, limit: i32) -> FillOptionSpec {
    FillOptionSpec {
        name,
        default,
        min: -limit,
        max: limit,
    }
}

impl Default for HistoryFillValues {
    fn default() -> Self {
        Self {
            main_history: 68,
            low_ply_history: 97,
            capture_history: -689,
            continuation_history: -529,
            pawn_history: -1238,
            knight_history: 0,
            pawn_correction: 5,
            minor_correction: 0,
            non_pawn_correction: 0,
            piece_to_correction: 0,
            continuation_correction: 8,
        }
    }
}

impl HistoryFillValues {
    /// 公開する option 定義を返す。
    pub fn option_specs() -> &'static [FillOptionSpec] {
        FILL_OPTION_SPECS
    }

    fn slot(&mut self, name: &str) -> Option<&mut i32> {
        let slot = match name {
            "MainHistoryFill" => &mut self.main_history,
            "LowPlyHistoryFill" => &mut self.low_ply_history,
            "CaptureHistoryFill" => &mut self.capture_history,
            "ContinuationHistoryFill" => &mut self.continuation_history,
            "PawnHistoryFill" => &mut self.pawn_history,
            "KnightHistoryFill" => &mut self.knight_history,
            "PawnCorrectionFill" => &mut self.pawn_correction,
            "MinorCorrectionFill" => &mut self.minor_correction,
            "NonPawnCorrectionFill" => &mut self.non_pawn_correction,
            "PieceToCorrectionFill" => &mut self.piece_to_correction,
            "ContinuationCorrectionFill" => &mut self.continuation_correction,
            _ => return None,
        };
        Some(slot)
    }

    /// option 名と値を受け取り、対応する項目を範囲内に clamp して更新する。
    pub fn set_by_name(&mut self, name: &str, value: i32) -> Result<FillSetResult, FillValuesError> {
        let spec = FILL_OPTION_SPECS
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| FillValuesError::UnknownOption(name.to_string()))?;
        let slot = self.slot(name).ok_or_else(|| FillValuesError::UnknownOption(name.to_string()))?;

        let applied = value.clamp(spec.min, spec.max);
        *slot = applied;
        if applied != value {
            log::warn!(
                "{name}={value} is out of range [{}, {}], clamped to {applied}",
                spec.min,
                spec.max
            );
        }
        Ok(FillSetResult {
            applied,
            clamped: applied != value,
        })
    }

    /// TOML文字列から読み込む。範囲外の値は clamp する。
    ///
    /// ```toml
    /// main_history = 0
    /// pawn_correction = 0
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, FillValuesError> {
        let mut values: HistoryFillValues = toml::from_str(s)?;
        for spec in FILL_OPTION_SPECS {
            if let Some(value) = values.slot(spec.name).map(|v| *v) {
                values.set_by_name(spec.name, value)?;
            }
        }
        Ok(values)
    }
}
