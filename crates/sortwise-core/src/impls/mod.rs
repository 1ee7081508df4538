//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **BubbleSort** / **MergeSort**: SortStrategy
//! - **sort_with**: SortAlgorithm に応じた振り分け
//! - **RandomDateSource**: デモ用の SequenceSource

pub mod bubble;
pub mod merge;
pub mod dispatch;
pub mod random_dates;

// 主要な型を再エクスポート
pub use self::bubble::BubbleSort;
pub use self::merge::MergeSort;
pub use self::dispatch::sort_with;
pub use self::random_dates::RandomDateSource;
