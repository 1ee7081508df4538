//! SequenceSource port - デモループに毎回新しいシーケンスを供給する

/// SequenceSource は呼ばれるたびに新しいシーケンスを返す
///
/// 返したシーケンスの所有権は呼び出し側（Context）に移ります。
pub trait SequenceSource<T> {
    fn next_sequence(&mut self) -> Vec<T>;
}

/// あらかじめ用意したシーケンスを順に返す（テスト・スクリプト用）
impl<T> SequenceSource<T> for std::vec::IntoIter<Vec<T>> {
    fn next_sequence(&mut self) -> Vec<T> {
        self.next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_source_yields_in_order_then_empty() {
        let mut source = vec![vec![3_i64, 1], vec![2]].into_iter();
        assert_eq!(source.next_sequence(), vec![3, 1]);
        assert_eq!(source.next_sequence(), vec![2]);
        assert!(source.next_sequence().is_empty());
    }
}
