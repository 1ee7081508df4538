//! SortContext - 現在のシーケンスと選択中の戦略を保持する
//!
//! Context は自分で戦略を選びません。割り当てられた戦略（SortPolicy か
//! 呼び出し側が直接設定したもの）をそのまま使います。

use tracing::debug;

use crate::domain::{Comparable, SortAlgorithm};
use crate::impls::sort_with;

/// SortContext はシーケンスを排他的に所有する
///
/// # 状態遷移（戦略スロット）
/// - Unset → Assigned(Bubble) | Assigned(Merge)
/// - 明示的な `set_algorithm` だけで遷移し、上書きされるまで保持される
///
/// 内部で同期は行いません。並行に使う場合は呼び出し側で直列化してください。
#[derive(Debug, Clone)]
pub struct SortContext<T> {
    sequence: Vec<T>,
    algorithm: Option<SortAlgorithm>,
}

impl<T> SortContext<T> {
    /// 空のシーケンス、戦略なし
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            algorithm: None,
        }
    }

    pub fn sequence(&self) -> &[T] {
        &self.sequence
    }

    /// シーケンスを丸ごと置き換える（中身の検証はしない）
    pub fn set_sequence(&mut self, sequence: Vec<T>) {
        self.sequence = sequence;
    }

    /// シーケンスを取り出し、Context には空のシーケンスを残す
    pub fn take_sequence(&mut self) -> Vec<T> {
        std::mem::take(&mut self.sequence)
    }

    pub fn into_sequence(self) -> Vec<T> {
        self.sequence
    }

    pub fn algorithm(&self) -> Option<SortAlgorithm> {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.algorithm = Some(algorithm);
    }
}

impl<T: Comparable + Clone> SortContext<T> {
    /// Runs the assigned algorithm over the held sequence.
    ///
    /// 戦略が未設定なら何もしない（エラーではない）。実行した戦略を返す。
    pub fn sort(&mut self) -> Option<SortAlgorithm> {
        let algorithm = self.algorithm?;
        debug!(%algorithm, len = self.sequence.len(), "sorting sequence");
        sort_with(algorithm, &mut self.sequence);
        Some(algorithm)
    }
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self::new()
    }
}
