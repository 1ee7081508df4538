//! sortwise-core
//!
//! Strategy パターンによるソートの学習用ライブラリ。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Comparable, SortAlgorithm, RunId, errors）
//! - **ports**: 抽象化レイヤー（SortStrategy, Clock, IdGenerator, SequenceSource）
//! - **impls**: 実装（BubbleSort, MergeSort, RandomDateSource）
//! - **app**: アプリケーションロジック（SortContext, SortPolicy, demo）

pub mod domain;
pub mod ports;
pub mod impls;
pub mod app;
