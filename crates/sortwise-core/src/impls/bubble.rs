//! BubbleSort - 隣接要素を比較して交換するソート
//!
//! 交換は `>` のときだけ行うので、等しい値の相対順序は保たれます（安定）。

use crate::domain::Comparable;
use crate::ports::SortStrategy;

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl BubbleSort {
    pub fn new() -> Self {
        Self
    }
}

impl SortStrategy for BubbleSort {
    fn perform_sort<T: Comparable + Clone>(&self, input: &mut [T]) {
        let n = input.len();
        if n < 2 {
            return;
        }

        // 各パスの後、input[i] には未確定範囲の最大値が入る
        for i in (1..n).rev() {
            for j in 0..i {
                if input[j].value_of() > input[j + 1].value_of() {
                    input.swap(j, j + 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty(vec![], vec![])]
    #[case::single(vec![7], vec![7])]
    #[case::pair_swapped(vec![2, 1], vec![1, 2])]
    #[case::reversed(vec![5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5])]
    #[case::duplicates(vec![3, 1, 3, 0, 1], vec![0, 1, 1, 3, 3])]
    #[case::negatives(vec![0, -5, 12, -5], vec![-5, -5, 0, 12])]
    fn sorts_ascending(#[case] input: Vec<i64>, #[case] expected: Vec<i64>) {
        let mut input = input;
        BubbleSort::new().perform_sort(&mut input);
        assert_eq!(input, expected);
    }

    #[test]
    fn equal_values_keep_their_order() {
        // (key, tag): key だけで比較する
        #[derive(Debug, Clone, PartialEq)]
        struct Tagged(i64, char);
        impl Comparable for Tagged {
            fn value_of(&self) -> i64 {
                self.0
            }
        }

        let mut input = vec![Tagged(2, 'a'), Tagged(1, 'b'), Tagged(2, 'c'), Tagged(1, 'd')];
        BubbleSort.perform_sort(&mut input);
        assert_eq!(
            input,
            vec![Tagged(1, 'b'), Tagged(1, 'd'), Tagged(2, 'a'), Tagged(2, 'c')]
        );
    }
}
