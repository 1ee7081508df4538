//! SortStrategy port - シーケンスをその場で昇順に並べ替える
//!
//! # 実装
//! - **BubbleSort**: 隣接要素の比較・交換（安定、O(n²)）
//! - **MergeSort**: 分割統治（安定、O(n log n)）

use crate::domain::Comparable;

/// SortStrategy はシーケンスを `value_of` の昇順にソートする
///
/// # 設計原則
/// - ステートレス（自由に作り直し・共有してよい）
/// - 入力は呼び出しの間だけ借用し、戻った後に参照を保持しない
pub trait SortStrategy {
    fn perform_sort<T: Comparable + Clone>(&self, input: &mut [T]);
}
