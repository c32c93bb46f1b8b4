/// Breakpoint arithmetic for Lewis Class partitioning.
///
/// A breakpoint is the index (into the score-sorted record list) where a class
/// starts. Nominal breakpoints balance class sizes; adjusted breakpoints move
/// each line so that no group of tied scores straddles it.
use std::cmp::Ordering;

use log::trace;

use crate::types::{Record, ScoringFields};

/// Size-balanced class starts for `num_records` split into `num_classes`.
///
/// Class `i` starts at `i * base`, where `base = num_records / num_classes`.
/// With a remainder `r`, classes `i > num_classes - r` start one record later.
/// Class `num_classes - r` therefore gets one extra record, and the last class
/// takes everything left over (`base + r - 1` records when `r >= 2`).
pub fn nominal_breakpoints(num_records: usize, num_classes: usize) -> Vec<usize> {
    if num_classes == 0 {
        return Vec::new();
    }
    let base = num_records / num_classes;
    let remainder = num_records % num_classes;

    (0..num_classes)
        .map(|i| {
            let start = i * base;
            if i > num_classes - remainder {
                start + 1
            } else {
                start
            }
        })
        .collect()
}

/// Count the records tied with the one at `bp`: `(above, below)`.
///
/// `above` counts the run immediately before `bp`; `below` counts the run
/// starting at `bp` itself. Both scans stop at the ends of `sorted`.
/// Returns `(0, 0)` when `bp` is past the last record.
pub fn tie_span(sorted: &[Record], bp: usize, scoring_fields: ScoringFields) -> (usize, usize) {
    let Some(at_line) = sorted.get(bp) else {
        return (0, 0);
    };
    let key = at_line.score_key(scoring_fields);

    let above = sorted[..bp]
        .iter()
        .rev()
        .take_while(|r| r.score_key(scoring_fields) == key)
        .count();
    let below = sorted[bp..]
        .iter()
        .take_while(|r| r.score_key(scoring_fields) == key)
        .count();

    (above, below)
}

/// Move a single breakpoint so the tie around it lands in one class.
///
/// The tie goes to whichever side already holds more of it; an even split
/// goes to the class above.
pub fn resolve_tie(bp: usize, above: usize, below: usize) -> usize {
    match above.cmp(&below) {
        Ordering::Equal if above == 0 => bp,
        Ordering::Equal | Ordering::Less => bp - above,
        Ordering::Greater => bp + below,
    }
}

/// Tie-adjust every nominal breakpoint except the first.
///
/// Each line is adjusted from its own nominal position, independently of the
/// others. The results are then clamped so they never decrease and never pass
/// the end of `sorted`.
pub fn adjust_breakpoints(
    sorted: &[Record],
    nominal: &[usize],
    scoring_fields: ScoringFields,
) -> Vec<usize> {
    let mut adjusted = nominal.to_vec();

    for (class_number, &bp) in nominal.iter().enumerate().skip(1) {
        let (above, below) = tie_span(sorted, bp, scoring_fields);
        let moved = resolve_tie(bp, above, below);
        if moved != bp {
            trace!(
                "class {class_number}: tie of {above} above / {below} below line at {bp}, moved to {moved}"
            );
        }
        adjusted[class_number] = moved;
    }

    clamp_monotonic(&mut adjusted, sorted.len());
    adjusted
}

/// Force `breakpoints` to be non-decreasing and within `0..=len`.
fn clamp_monotonic(breakpoints: &mut [usize], len: usize) {
    let mut floor = 0;
    for bp in breakpoints.iter_mut() {
        *bp = (*bp).clamp(floor, len);
        floor = *bp;
    }
}
