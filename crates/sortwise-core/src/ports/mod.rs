//! Ports - 抽象化レイヤー
//!
//! 差し替え可能な部分を trait として切り出します。
//! テストでは FixedClock や決定的な SequenceSource に差し替えられます。

pub mod sort_strategy;
pub mod clock;
pub mod id_generator;
pub mod sequence_source;

// 主要な trait を再エクスポート
pub use self::sort_strategy::SortStrategy;
pub use self::clock::{Clock, SystemClock, FixedClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::sequence_source::SequenceSource;
