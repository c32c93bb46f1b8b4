/// lewisclass-core: Lewis Class partitioning.
///
/// Scored entries → descending rank → equal-sized classes whose boundaries
/// never split a tie. No IO, no filesystem — just the ranking rules.
///
/// A record is a list of fields: the leading score fields (most significant
/// first) followed by any payload such as a name. Only the score fields take
/// part in tie detection.
///
/// # Quick start
///
/// ```rust
/// use lewisclass_core::{run_partition, PartitionOptions, Record, ScoringFields};
///
/// let entries = vec![
///     Record::from_scores(&[42, 4]).with_text("Tim Miller"),
///     Record::from_scores(&[47, 21]).with_text("Tim Brooks"),
///     Record::from_scores(&[35, 6]).with_text("Aaron Joyner"),
/// ];
///
/// let result = run_partition(entries, &PartitionOptions {
///     num_classes: 3,
///     scoring_fields: ScoringFields::Count(2),
/// }).unwrap();
///
/// for (i, class) in result.classes.iter().enumerate() {
///     println!("Class {}", i + 1);
///     for entry in class {
///         println!("  {entry}");
///     }
/// }
/// ```

pub mod breakpoints;
pub mod constants;
pub mod error;
pub mod partition;
pub mod types;

// Re-export primary public API at crate root.
pub use breakpoints::{adjust_breakpoints, nominal_breakpoints, resolve_tie, tie_span};
pub use error::PartitionError;
pub use partition::{partition, run_partition};
pub use types::{Field, PartitionOptions, PartitionResult, Record, ScoringFields};
