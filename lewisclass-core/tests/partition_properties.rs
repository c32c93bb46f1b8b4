/// Property-based tests for Lewis Class partitioning using proptest
///
/// Scores are drawn from a narrow range so that most generated fields are
/// full of ties, which is where the breakpoint adjustment earns its keep.
use lewisclass_core::{PartitionOptions, Record, ScoringFields, run_partition};
use proptest::prelude::*;

// Strategy to generate one entry: two small scores and a short name
fn record_strategy() -> impl Strategy<Value = Record> {
    (0i64..6, 0i64..3, "[a-e]{1,3}")
        .prop_map(|(primary, secondary, name)| Record::from_scores(&[primary, secondary]).with_text(name))
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(record_strategy(), 0..40)
}

fn options_strategy() -> impl Strategy<Value = PartitionOptions> {
    (1usize..8, prop_oneof![Just(ScoringFields::Count(1)), Just(ScoringFields::Count(2)), Just(ScoringFields::All)])
        .prop_map(|(num_classes, scoring_fields)| PartitionOptions { num_classes, scoring_fields })
}

fn sorted_desc(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));
    sorted
}

proptest! {
    #[test]
    fn test_classes_concatenate_to_sorted_input(records in records_strategy(), options in options_strategy()) {
        let expected = sorted_desc(&records);
        let result = run_partition(records, &options).unwrap();

        prop_assert_eq!(result.classes.len(), options.num_classes);
        let flattened: Vec<Record> = result.classes.into_iter().flatten().collect();
        prop_assert_eq!(flattened, expected);
    }

    #[test]
    fn test_shuffling_does_not_change_grouping(
        (records, shuffled) in records_strategy().prop_flat_map(|r| (Just(r.clone()), Just(r).prop_shuffle())),
        options in options_strategy(),
    ) {
        let original = run_partition(records, &options).unwrap();
        let reshuffled = run_partition(shuffled, &options).unwrap();
        prop_assert_eq!(original, reshuffled);
    }

    #[test]
    fn test_breakpoints_are_monotonic(records in records_strategy(), options in options_strategy()) {
        let n = records.len();
        let result = run_partition(records, &options).unwrap();

        prop_assert_eq!(result.breakpoints.len(), options.num_classes);
        prop_assert_eq!(result.breakpoints[0], 0);
        for w in result.breakpoints.windows(2) {
            prop_assert!(w[0] <= w[1], "breakpoints decrease: {:?}", result.breakpoints);
        }
        prop_assert!(result.breakpoints.iter().all(|&bp| bp <= n));
    }

    #[test]
    fn test_no_tie_straddles_a_class_line(records in records_strategy(), options in options_strategy()) {
        let scoring_fields = options.scoring_fields;
        let result = run_partition(records, &options).unwrap();
        let sorted: Vec<Record> = result.classes.iter().flatten().cloned().collect();

        for &bp in &result.breakpoints {
            if bp == 0 || bp >= sorted.len() {
                continue;
            }
            prop_assert_ne!(
                sorted[bp - 1].score_key(scoring_fields),
                sorted[bp].score_key(scoring_fields),
                "tie split at {} (breakpoints {:?})", bp, result.breakpoints
            );
        }
    }

    #[test]
    fn test_untied_fields_split_by_size(n in 0usize..40, num_classes in 1usize..8) {
        // Distinct scores: no adjustment happens, so every class starts at
        // i * base, shifted down by one when i > k - remainder, and the last
        // class runs to the end.
        let records: Vec<Record> = (0..n as i64).map(|s| Record::from_scores(&[s])).collect();
        let result = run_partition(records, &PartitionOptions {
            num_classes,
            scoring_fields: ScoringFields::Count(1),
        }).unwrap();

        prop_assert_eq!(&result.breakpoints, &result.nominal_breakpoints);

        let base = n / num_classes;
        let remainder = n % num_classes;
        let mut bounds: Vec<usize> = (0..num_classes)
            .map(|i| i * base + usize::from(i > num_classes - remainder))
            .collect();
        bounds.push(n);
        let expected: Vec<usize> = bounds.windows(2).map(|w| w[1] - w[0]).collect();

        let sizes: Vec<usize> = result.classes.iter().map(Vec::len).collect();
        prop_assert_eq!(sizes, expected);
    }
}
