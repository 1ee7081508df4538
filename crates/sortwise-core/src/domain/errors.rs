//! Errors - デモ設定まわりのエラー
//!
//! ソートそのものは入力に対して全域なのでエラーを返しません。
//! ここにあるのは設定の読み込み・検証で起きるものだけです。

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortwiseError {
    #[error("too many iterations: {iterations} > max={max}")]
    TooManyIterations { iterations: usize, max: usize },

    #[error("sequence too long: length_max={len} > max={max}")]
    SequenceTooLong { len: usize, max: usize },

    #[error("invalid sequence length range: min={min} > max={max}")]
    InvalidLengthRange { min: usize, max: usize },

    #[error("invalid date range: lowest={lowest} > highest={highest}")]
    InvalidDateRange {
        lowest: DateTime<Utc>,
        highest: DateTime<Utc>,
    },

    #[error("config decode: {0}")]
    Config(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
