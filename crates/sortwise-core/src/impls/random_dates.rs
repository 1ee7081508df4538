//! RandomDateSource - ランダムな日時のシーケンスを生成する
//!
//! 長さは `[length_min, length_max]`、各日時は `[lowest, highest]` から
//! ミリ秒単位で一様に選びます（両端を含む）。

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

use crate::domain::SortwiseError;
use crate::ports::SequenceSource;

pub struct RandomDateSource<R> {
    rng: R,
    length_min: usize,
    length_max: usize,
    lowest: DateTime<Utc>,
    highest: DateTime<Utc>,
}

impl<R: Rng> RandomDateSource<R> {
    /// 範囲が逆転していればエラー
    pub fn new(
        rng: R,
        length_min: usize,
        length_max: usize,
        lowest: DateTime<Utc>,
        highest: DateTime<Utc>,
    ) -> Result<Self, SortwiseError> {
        if length_min > length_max {
            return Err(SortwiseError::InvalidLengthRange {
                min: length_min,
                max: length_max,
            });
        }
        if lowest > highest {
            return Err(SortwiseError::InvalidDateRange { lowest, highest });
        }
        Ok(Self {
            rng,
            length_min,
            length_max,
            lowest,
            highest,
        })
    }

    fn random_date(&mut self) -> DateTime<Utc> {
        let span_ms = (self.highest - self.lowest).num_milliseconds();
        let offset = self.rng.gen_range(0..=span_ms);
        self.lowest + TimeDelta::milliseconds(offset)
    }
}

impl<R: Rng> SequenceSource<DateTime<Utc>> for RandomDateSource<R> {
    fn next_sequence(&mut self) -> Vec<DateTime<Utc>> {
        let len = self.rng.gen_range(self.length_min..=self.length_max);
        (0..len).map(|_| self.random_date()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn bounds() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2024, 9, 15, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn sequences_respect_length_and_date_bounds() {
        let (lowest, highest) = bounds();
        let mut source =
            RandomDateSource::new(StdRng::seed_from_u64(7), 5, 15, lowest, highest).unwrap();

        for _ in 0..50 {
            let dates = source.next_sequence();
            assert!((5..=15).contains(&dates.len()));
            assert!(dates.iter().all(|d| *d >= lowest && *d <= highest));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let (lowest, highest) = bounds();
        let mut a = RandomDateSource::new(StdRng::seed_from_u64(42), 3, 8, lowest, highest).unwrap();
        let mut b = RandomDateSource::new(StdRng::seed_from_u64(42), 3, 8, lowest, highest).unwrap();
        assert_eq!(a.next_sequence(), b.next_sequence());
    }

    #[test]
    fn degenerate_ranges_are_allowed() {
        let (lowest, _) = bounds();
        let mut source =
            RandomDateSource::new(StdRng::seed_from_u64(1), 4, 4, lowest, lowest).unwrap();
        assert_eq!(source.next_sequence(), vec![lowest; 4]);
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let (lowest, highest) = bounds();
        let rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            RandomDateSource::new(rng.clone(), 9, 3, lowest, highest),
            Err(SortwiseError::InvalidLengthRange { min: 9, max: 3 })
        ));
        assert!(matches!(
            RandomDateSource::new(rng, 1, 3, highest, lowest),
            Err(SortwiseError::InvalidDateRange { .. })
        ));
    }
}
