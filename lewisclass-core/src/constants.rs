/// Number of classes when the caller does not choose one (A, B and C class).
pub const DEFAULT_NUM_CLASSES: usize = 3;

/// Leading fields treated as the score key by default.
///
/// One field means "raw score only": two shooters with the same total tie,
/// whatever else is on the line.
pub const DEFAULT_SCORING_FIELDS: usize = 1;
