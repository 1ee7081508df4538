//! SortAlgorithm - 選択可能なソート戦略の閉じた集合
//!
//! 戦略の種類は固定なので trait object ではなく enum で表現します。
//! 実際の振り分けは `impls::sort_with` が行います。

use std::fmt;

use serde::{Deserialize, Serialize};

/// SortAlgorithm は Context に割り当てられる戦略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// O(n²)、小さい入力向け
    Bubble,
    /// O(n log n)、大きい入力向け
    Merge,
}

impl SortAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble_sort",
            SortAlgorithm::Merge => "merge_sort",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
