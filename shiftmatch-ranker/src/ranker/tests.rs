//! Tests for the `Ranker`.

use super::*;
use rstest::{fixture, rstest};
use shiftmatch_core::Weekday;
use shiftmatch_core::test_support::{AvailabilityBuilder, UniformScorer, pattern_of};
use shiftmatch_scorer::PriorityScorer;

#[fixture]
fn monday_nine() -> ShiftPattern {
    pattern_of(&[(Weekday::Monday, 9)]).expect("valid pattern")
}

#[fixture]
fn high_monday() -> AvailabilityIndex {
    AvailabilityBuilder::new()
        .high(Weekday::Monday, 9)
        .build()
        .expect("valid availability")
}

#[rstest]
fn equal_scores_fall_back_to_ascending_id(
    monday_nine: ShiftPattern,
    high_monday: AvailabilityIndex,
) {
    let workers = vec![
        ("b", high_monday.clone()),
        ("a", high_monday.clone()),
        ("c", high_monday),
    ];
    let ranker = Ranker::new(PriorityScorer::default());

    let ranked = ranker.rank_workers_for_pattern(&workers, &monday_nine);

    let ids: Vec<&str> = ranked.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert!(ranked.iter().all(|entry| entry.result.score == 1.0));
}

fn monday_hours(hours: std::ops::Range<u8>) -> AvailabilityIndex {
    hours
        .fold(AvailabilityBuilder::new(), |builder, hour| {
            builder.high(Weekday::Monday, hour)
        })
        .build()
        .expect("valid availability")
}

#[test]
fn tied_workers_order_by_id_ahead_of_weaker_worker() {
    let hours: Vec<(Weekday, u8)> = (0..10).map(|hour| (Weekday::Monday, hour)).collect();
    let pattern = pattern_of(&hours).expect("valid pattern");
    let workers = vec![
        ("b", monday_hours(0..8)),
        ("a", monday_hours(2..10)),
        ("c", monday_hours(0..5)),
    ];

    let ranked = Ranker::new(PriorityScorer::default()).rank_workers_for_pattern(&workers, &pattern);

    let order: Vec<(&str, usize)> = ranked
        .iter()
        .map(|entry| (entry.id, entry.result.matched_slots))
        .collect();
    assert_eq!(order, vec![("a", 8), ("b", 8), ("c", 5)]);
    let scores: Vec<f32> = ranked.iter().map(|entry| entry.result.score).collect();
    assert!((scores[0] - 0.8).abs() <= 1e-6);
    assert_eq!(scores[0].to_bits(), scores[1].to_bits());
    assert!((scores[2] - 0.5).abs() <= 1e-6);
}

#[test]
fn same_priority_mix_ties_regardless_of_slot_order() {
    let hours: Vec<(Weekday, u8)> = (0..4).map(|hour| (Weekday::Monday, hour)).collect();
    let pattern = pattern_of(&hours).expect("valid pattern");
    let early_high = AvailabilityBuilder::new()
        .high(Weekday::Monday, 0)
        .normal(Weekday::Monday, 1)
        .normal(Weekday::Monday, 2)
        .normal(Weekday::Monday, 3)
        .build()
        .expect("valid availability");
    let late_high = AvailabilityBuilder::new()
        .normal(Weekday::Monday, 0)
        .normal(Weekday::Monday, 1)
        .normal(Weekday::Monday, 2)
        .high(Weekday::Monday, 3)
        .build()
        .expect("valid availability");
    let workers = vec![("b", early_high), ("a", late_high)];

    let ranked = Ranker::new(PriorityScorer::default()).rank_workers_for_pattern(&workers, &pattern);

    let ids: Vec<&str> = ranked.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec!["a", "b"]);
    let bits: Vec<u32> = ranked.iter().map(|entry| entry.result.score.to_bits()).collect();
    assert_eq!(bits.first(), bits.last());
}

#[rstest]
fn higher_scores_rank_first(monday_nine: ShiftPattern, high_monday: AvailabilityIndex) {
    let normal = AvailabilityBuilder::new()
        .normal(Weekday::Monday, 9)
        .build()
        .expect("valid availability");
    let workers = vec![
        (1_u32, AvailabilityIndex::new()),
        (2, normal),
        (3, high_monday),
    ];

    let ranked = Ranker::new(PriorityScorer::default()).rank_workers_for_pattern(&workers, &monday_nine);

    let ids: Vec<u32> = ranked.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[rstest]
fn empty_availability_is_kept_with_zero_score(monday_nine: ShiftPattern) {
    let workers = vec![("idle", AvailabilityIndex::new())];

    let ranked = Ranker::new(PriorityScorer::default()).rank_workers_for_pattern(&workers, &monday_nine);

    assert_eq!(ranked.len(), 1);
    let entry = ranked.first().expect("one entry");
    assert_eq!(entry.result.score, 0.0);
    assert_eq!(entry.result.matched_slots, 0);
}

#[test]
fn matched_slots_break_score_ties() {
    // Under uniform weights both patterns score 0.5 for this worker,
    // but the larger pattern matches more slots.
    let worker = AvailabilityBuilder::new()
        .high(Weekday::Monday, 9)
        .high(Weekday::Monday, 10)
        .build()
        .expect("valid availability");
    let small = pattern_of(&[(Weekday::Monday, 9), (Weekday::Friday, 9)]).expect("valid pattern");
    let large = pattern_of(&[
        (Weekday::Monday, 9),
        (Weekday::Monday, 10),
        (Weekday::Friday, 9),
        (Weekday::Friday, 10),
    ])
    .expect("valid pattern");
    let patterns = vec![("a-small", small), ("b-large", large)];

    let ranked = Ranker::new(UniformScorer).rank_patterns_for_worker(&worker, &patterns);

    let ids: Vec<&str> = ranked.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec!["b-large", "a-small"]);
    let counts: Vec<usize> = ranked.iter().map(|entry| entry.result.matched_slots).collect();
    assert_eq!(counts, vec![2, 1]);
}

#[rstest]
fn patterns_are_ranked_for_a_single_worker(high_monday: AvailabilityIndex) {
    let patterns = vec![
        (
            "split",
            pattern_of(&[(Weekday::Monday, 9), (Weekday::Tuesday, 10)]).expect("valid pattern"),
        ),
        ("miss", pattern_of(&[(Weekday::Sunday, 3)]).expect("valid pattern")),
        ("exact", pattern_of(&[(Weekday::Monday, 9)]).expect("valid pattern")),
    ];

    let ranked = Ranker::new(PriorityScorer::default()).rank_patterns_for_worker(&high_monday, &patterns);

    let ids: Vec<&str> = ranked.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, vec!["exact", "split", "miss"]);
}

#[rstest]
#[case(None, 3)]
#[case(Some(2), 2)]
#[case(Some(0), 0)]
#[case(Some(10), 3)]
fn limit_truncates_after_sorting(
    monday_nine: ShiftPattern,
    high_monday: AvailabilityIndex,
    #[case] limit: Option<usize>,
    #[case] expected_len: usize,
) {
    let workers = vec![
        (3, AvailabilityIndex::new()),
        (2, high_monday.clone()),
        (1, high_monday),
    ];
    let ranker = Ranker::with_config(PriorityScorer::default(), RankerConfig { limit });

    let ranked = ranker.rank_workers_for_pattern(&workers, &monday_nine);

    assert_eq!(ranked.len(), expected_len);
    if let Some(first) = ranked.first() {
        assert_eq!(first.id, 1);
    }
}

#[rstest]
fn empty_batches_produce_empty_rankings(monday_nine: ShiftPattern) {
    let ranker = Ranker::new(PriorityScorer::default());
    let workers: Vec<(u8, AvailabilityIndex)> = Vec::new();
    assert!(ranker.rank_workers_for_pattern(&workers, &monday_nine).is_empty());
}

#[test]
fn with_limit_sets_the_bound() {
    assert_eq!(RankerConfig::with_limit(5).limit, Some(5));
    assert_eq!(RankerConfig::default().limit, None);
}

#[cfg(feature = "serde")]
#[rstest]
fn ranked_entries_serialise_with_id_and_result(
    monday_nine: ShiftPattern,
    high_monday: AvailabilityIndex,
) {
    let workers = vec![("w-1".to_owned(), high_monday)];
    let ranked = Ranker::new(PriorityScorer::default()).rank_workers_for_pattern(&workers, &monday_nine);

    let encoded = serde_json::to_value(&ranked).expect("encode ranking");
    assert_eq!(
        encoded,
        serde_json::json!([{
            "id": "w-1",
            "result": {"score": 1.0, "matched_slots": 1, "required_slots": 1}
        }])
    );
}
