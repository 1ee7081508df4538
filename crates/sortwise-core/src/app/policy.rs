//! SortPolicy - 入力サイズから戦略を選ぶ
//!
//! Context のシーケンス長を見て、閾値を超えれば MergeSort、
//! それ以下なら BubbleSort を割り当てます。

use tracing::debug;

use crate::domain::SortAlgorithm;

use super::SortContext;

/// これより長いシーケンスは MergeSort
pub const DEFAULT_THRESHOLD: usize = 10;

/// SortPolicy は [`SortContext`] に戦略を割り当てる
///
/// # 設計原則
/// - 閾値は構築時に固定（データから導出しない）
/// - 決定的（乱数なし、割り当て以外の副作用なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortPolicy {
    threshold: usize,
}

impl SortPolicy {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// 純粋な判定: `len > threshold` なら Merge、それ以外は Bubble
    pub fn select(&self, len: usize) -> SortAlgorithm {
        if len > self.threshold {
            SortAlgorithm::Merge
        } else {
            SortAlgorithm::Bubble
        }
    }

    /// Re-evaluate the context's sequence length and assign a strategy.
    ///
    /// 戻った後、Context の戦略スロットは必ず Some になる。
    pub fn configure<T>(&self, context: &mut SortContext<T>) -> SortAlgorithm {
        let len = context.sequence().len();
        let algorithm = self.select(len);
        debug!(len, threshold = self.threshold, %algorithm, "policy configured");
        context.set_algorithm(algorithm);
        algorithm
    }
}

impl Default for SortPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
