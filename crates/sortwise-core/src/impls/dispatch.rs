//! sort_with - SortAlgorithm から実装への振り分け
//!
//! domain は実装を知らないので、enum → unit struct の対応はここに置きます。

use crate::domain::{Comparable, SortAlgorithm};
use crate::ports::SortStrategy;

use super::{BubbleSort, MergeSort};

/// Sort `input` in place with the selected strategy.
pub fn sort_with<T: Comparable + Clone>(algorithm: SortAlgorithm, input: &mut [T]) {
    match algorithm {
        SortAlgorithm::Bubble => BubbleSort.perform_sort(input),
        SortAlgorithm::Merge => MergeSort.perform_sort(input),
    }
}
