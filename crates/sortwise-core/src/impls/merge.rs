//! MergeSort - 再帰的な分割統治ソート
//!
//! 閉区間 `[low, high]` を `mid = (low + high) / 2` で分け、左右を再帰的に
//! ソートしてから一時バッファ上でマージし、元の範囲に書き戻します。
//! バッファは最上位で一度だけ確保して使い回します（補助領域は O(n)）。

use crate::domain::Comparable;
use crate::ports::SortStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl MergeSort {
    pub fn new() -> Self {
        Self
    }
}

impl SortStrategy for MergeSort {
    fn perform_sort<T: Comparable + Clone>(&self, input: &mut [T]) {
        if input.len() < 2 {
            return;
        }
        let mut buffer = Vec::with_capacity(input.len());
        merge_sort(input, 0, input.len() - 1, &mut buffer);
    }
}

fn merge_sort<T: Comparable + Clone>(input: &mut [T], low: usize, high: usize, buffer: &mut Vec<T>) {
    if low >= high {
        return;
    }
    let mid = low + (high - low) / 2;
    merge_sort(input, low, mid, buffer);
    merge_sort(input, mid + 1, high, buffer);
    merge(input, low, mid, high, buffer);
}

/// `[low, mid]` と `[mid + 1, high]` はそれぞれソート済み
fn merge<T: Comparable + Clone>(
    input: &mut [T],
    low: usize,
    mid: usize,
    high: usize,
    buffer: &mut Vec<T>,
) {
    buffer.clear();

    let mut left = low;
    let mut right = mid + 1;

    while left <= mid && right <= high {
        // 同値なら左を先に取る（安定性）
        if input[left].value_of() <= input[right].value_of() {
            buffer.push(input[left].clone());
            left += 1;
        } else {
            buffer.push(input[right].clone());
            right += 1;
        }
    }
    buffer.extend_from_slice(&input[left..=mid]);
    buffer.extend_from_slice(&input[right..=high]);

    input[low..=high].clone_from_slice(buffer);
}
