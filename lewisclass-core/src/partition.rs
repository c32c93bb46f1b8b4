/// Lewis Class partitioning.
///
/// Sort, split into equal classes, then nudge every class line off any tie.
/// Pure function: no IO, no state. The input `Vec` is consumed.
use log::debug;

use crate::breakpoints::{adjust_breakpoints, nominal_breakpoints};
use crate::error::PartitionError;
use crate::types::{PartitionOptions, PartitionResult, Record, ScoringFields};

/// Split `records` into `num_classes` Lewis classes.
///
/// Shorthand for `run_partition` when only the classes are wanted.
pub fn partition(
    records: Vec<Record>,
    num_classes: usize,
    scoring_fields: ScoringFields,
) -> Result<Vec<Vec<Record>>, PartitionError> {
    let options = PartitionOptions {
        num_classes,
        scoring_fields,
    };
    run_partition(records, &options).map(PartitionResult::into_classes)
}

/// Rank `records` best-first and divide them into Lewis classes.
///
/// Returns exactly `options.num_classes` classes. Concatenated in order they
/// are the records sorted by descending score key (ties ordered by the rest
/// of the record, also descending). With fewer records than classes the
/// upper classes come back empty.
pub fn run_partition(
    mut records: Vec<Record>,
    options: &PartitionOptions,
) -> Result<PartitionResult, PartitionError> {
    validate(&records, options)?;

    records.sort_unstable_by(|a, b| b.cmp(a));

    let num_records = records.len();
    let nominal = nominal_breakpoints(num_records, options.num_classes);
    let breakpoints = adjust_breakpoints(&records, &nominal, options.scoring_fields);

    debug!(
        "partitioning {num_records} records into {} classes: nominal breaks {nominal:?}, adjusted {breakpoints:?}",
        options.num_classes
    );

    let classes = slice_classes(records, &breakpoints);

    Ok(PartitionResult {
        classes,
        nominal_breakpoints: nominal,
        breakpoints,
    })
}

fn validate(records: &[Record], options: &PartitionOptions) -> Result<(), PartitionError> {
    if options.num_classes == 0 {
        return Err(PartitionError::NoClasses);
    }

    let required = match options.scoring_fields {
        ScoringFields::All => return Ok(()),
        ScoringFields::Count(0) => return Err(PartitionError::ZeroScoringFields),
        ScoringFields::Count(n) => n,
    };

    for (record_idx, record) in records.iter().enumerate() {
        if record.len() < required {
            return Err(PartitionError::MissingScoreField {
                record: record_idx,
                required,
                found: record.len(),
            });
        }
        if let Some(field) = record.fields[..required]
            .iter()
            .position(|f| f.as_score().is_none())
        {
            return Err(PartitionError::NonNumericScore {
                record: record_idx,
                field,
            });
        }
    }
    Ok(())
}

/// Cut `sorted` at each breakpoint. A sentinel at `sorted.len()` closes the last class.
fn slice_classes(sorted: Vec<Record>, breakpoints: &[usize]) -> Vec<Vec<Record>> {
    let mut bounds = Vec::with_capacity(breakpoints.len() + 1);
    bounds.extend_from_slice(breakpoints);
    bounds.push(sorted.len());

    let mut remaining = sorted.into_iter();
    bounds
        .windows(2)
        .map(|w| remaining.by_ref().take(w[1] - w[0]).collect())
        .collect()
}
