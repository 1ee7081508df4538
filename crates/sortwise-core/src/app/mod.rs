//! App - アプリケーションロジック
//!
//! # 構成
//! - **context**: シーケンスと現在の戦略を保持する SortContext
//! - **policy**: 入力サイズから戦略を選ぶ SortPolicy
//! - **config**: デモの設定（DemoConfig）
//! - **demo**: Context と Policy をつなぐデモループ

pub mod context;
pub mod policy;
pub mod config;
pub mod demo;

pub use self::context::SortContext;
pub use self::policy::{DEFAULT_THRESHOLD, SortPolicy};
pub use self::config::{DemoConfig, MAX_ITERATIONS, MAX_SEQUENCE_LEN};
pub use self::demo::{RunReport, run_demo};
