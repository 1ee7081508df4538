use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use rstest::rstest;
use sortwise_core::app::{SortContext, SortPolicy};
use sortwise_core::domain::SortAlgorithm;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn three_dates_take_the_bubble_path() {
    let mut context = SortContext::new();
    let policy = SortPolicy::default();

    context.set_sequence(vec![date(2025, 1, 10), date(2024, 9, 20), date(2024, 12, 1)]);
    policy.configure(&mut context);

    assert_eq!(context.algorithm(), Some(SortAlgorithm::Bubble));

    context.sort();

    assert_eq!(
        context.sequence(),
        &[date(2024, 9, 20), date(2024, 12, 1), date(2025, 1, 10)]
    );
}

#[test]
fn twelve_reverse_timestamps_take_the_merge_path() {
    let start = Utc.with_ymd_and_hms(2024, 9, 15, 8, 30, 0).unwrap();
    let ascending: Vec<DateTime<Utc>> = (0..12).map(|i| start + TimeDelta::hours(i * 37)).collect();

    let mut context = SortContext::new();
    let policy = SortPolicy::default();

    context.set_sequence(ascending.iter().rev().copied().collect());
    policy.configure(&mut context);

    assert_eq!(context.algorithm(), Some(SortAlgorithm::Merge));

    context.sort();
    let sorted = context.into_sequence();

    assert_eq!(sorted, ascending);
    for value in &ascending {
        assert_eq!(sorted.iter().filter(|v| *v == value).count(), 1);
    }
}

#[rstest]
#[case::empty(0)]
#[case::singleton(1)]
fn tiny_sequences_are_left_alone(#[case] len: usize) {
    let input: Vec<i64> = (0..len as i64).map(|i| 42 - i).collect();

    for algorithm in [SortAlgorithm::Bubble, SortAlgorithm::Merge] {
        let mut context = SortContext::new();
        context.set_sequence(input.clone());
        context.set_algorithm(algorithm);

        assert_eq!(context.sort(), Some(algorithm));
        assert_eq!(context.sequence(), input.as_slice());
    }
}

#[test]
fn context_is_reused_across_iterations() {
    let mut context = SortContext::new();
    let policy = SortPolicy::default();

    for len in [3_i64, 15, 10, 11] {
        context.set_sequence((0..len).rev().collect());
        let chosen = policy.configure(&mut context);
        context.sort();

        assert_eq!(chosen, policy.select(len as usize));
        assert_eq!(context.sequence(), (0..len).collect::<Vec<_>>().as_slice());
    }
}
