//! Demo loop - Context と Policy をつなぐクライアント
//!
//! 1 イテレーションの流れ:
//! 1) SequenceSource から新しいシーケンスを取る
//! 2) Context にセットし、Policy で戦略を選ぶ
//! 3) Context.sort() でソートし、結果を読み戻す

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{DemoConfig, SortContext};
use crate::domain::{Comparable, RunId, SortAlgorithm, SortwiseError};
use crate::ports::{IdGenerator, SequenceSource};

/// One iteration of the demo loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport<T> {
    pub run_id: RunId,
    pub algorithm: SortAlgorithm,
    pub unsorted: Vec<T>,
    pub sorted: Vec<T>,
}

/// Run `config.iterations` sorts over sequences drawn from `source`.
///
/// Context と Policy はループの外で一度だけ作り、シーケンスは毎回丸ごと差し替えます。
pub fn run_demo<T, S, G>(
    config: &DemoConfig,
    source: &mut S,
    ids: &G,
) -> Result<Vec<RunReport<T>>, SortwiseError>
where
    T: Comparable + Clone,
    S: SequenceSource<T>,
    G: IdGenerator,
{
    config.validate()?;

    let mut context = SortContext::new();
    let policy = config.policy();
    // iterations <= MAX_ITERATIONS（検証済み）
    let mut reports = Vec::with_capacity(config.iterations);

    for _ in 0..config.iterations {
        let run_id = ids.generate_run_id();
        let unsorted = source.next_sequence();

        context.set_sequence(unsorted.clone());
        let algorithm = policy.configure(&mut context);
        context.sort();
        let sorted = context.take_sequence();

        info!(%run_id, %algorithm, len = sorted.len(), "sorted sequence");
        reports.push(RunReport {
            run_id,
            algorithm,
            unsorted,
            sorted,
        });
    }

    Ok(reports)
}
