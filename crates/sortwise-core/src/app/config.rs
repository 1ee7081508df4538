//! DemoConfig - デモループの設定
//!
//! 全フィールドにデフォルトがあるので `{}` も有効な設定ファイルです。
//! CLI フラグはこの上に上書きされます。

use std::path::Path;

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{DEFAULT_THRESHOLD, SortPolicy};
use crate::domain::SortwiseError;
use crate::impls::RandomDateSource;

/// 1 回のデモで実行できるイテレーション数の上限
pub const MAX_ITERATIONS: usize = 10_000;

/// 生成するシーケンス長の上限
pub const MAX_SEQUENCE_LEN: usize = 100_000;

/// 2024-09-15T00:00:00Z
const DEFAULT_LOWEST_SECS: i64 = 1_726_358_400;
/// 2025-01-15T00:00:00Z
const DEFAULT_HIGHEST_SECS: i64 = 1_736_899_200;

fn from_epoch_secs(secs: i64) -> DateTime<Utc> {
    DateTime::UNIX_EPOCH + TimeDelta::seconds(secs)
}

/// DemoConfig はデモループのパラメータ
///
/// # デフォルト
/// - iterations: 10
/// - length: 5 〜 15
/// - 日付: 2024-09-15 〜 2025-01-15
/// - threshold: 10
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// 生成してソートするシーケンスの数
    pub iterations: usize,

    /// シーケンス長の下限（含む）
    pub length_min: usize,

    /// シーケンス長の上限（含む）
    pub length_max: usize,

    /// 生成する日時の下限（含む）
    pub lowest: DateTime<Utc>,

    /// 生成する日時の上限（含む）
    pub highest: DateTime<Utc>,

    /// Policy の閾値: これより長いシーケンスは MergeSort
    pub threshold: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            length_min: 5,
            length_max: 15,
            lowest: from_epoch_secs(DEFAULT_LOWEST_SECS),
            highest: from_epoch_secs(DEFAULT_HIGHEST_SECS),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl DemoConfig {
    /// JSON から読み込み、検証まで行う
    pub fn from_json(json: &str) -> Result<Self, SortwiseError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SortwiseError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// 範囲の逆転と上限超過をチェック
    ///
    /// CLI フラグで上書きした後にも呼ぶこと（`run_demo` は最初に呼ぶ）。
    pub fn validate(&self) -> Result<(), SortwiseError> {
        if self.iterations > MAX_ITERATIONS {
            return Err(SortwiseError::TooManyIterations {
                iterations: self.iterations,
                max: MAX_ITERATIONS,
            });
        }
        if self.length_min > self.length_max {
            return Err(SortwiseError::InvalidLengthRange {
                min: self.length_min,
                max: self.length_max,
            });
        }
        if self.length_max > MAX_SEQUENCE_LEN {
            return Err(SortwiseError::SequenceTooLong {
                len: self.length_max,
                max: MAX_SEQUENCE_LEN,
            });
        }
        if self.lowest > self.highest {
            return Err(SortwiseError::InvalidDateRange {
                lowest: self.lowest,
                highest: self.highest,
            });
        }
        Ok(())
    }

    pub fn policy(&self) -> SortPolicy {
        SortPolicy::new(self.threshold)
    }

    /// この設定の範囲でランダムな日付列を作る SequenceSource
    pub fn date_source<R: Rng>(&self, rng: R) -> Result<RandomDateSource<R>, SortwiseError> {
        self.validate()?;
        RandomDateSource::new(rng, self.length_min, self.length_max, self.lowest, self.highest)
    }
}
