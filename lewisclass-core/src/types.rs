use std::fmt;

use crate::constants::{DEFAULT_NUM_CLASSES, DEFAULT_SCORING_FIELDS};

/// A single field of a record: either a numeric score or free text.
///
/// Fields are totally ordered. Every `Score` orders before every `Text`,
/// scores compare numerically and text compares lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Field {
    Score(i64),
    Text(String),
}

impl Field {
    pub fn as_score(&self) -> Option<i64> {
        match self {
            Field::Score(s) => Some(*s),
            Field::Text(_) => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Score(s) => write!(f, "{s}"),
            Field::Text(t) => f.write_str(t),
        }
    }
}

impl From<i64> for Field {
    fn from(score: i64) -> Self {
        Field::Score(score)
    }
}

impl From<&str> for Field {
    fn from(text: &str) -> Self {
        Field::Text(text.to_string())
    }
}

impl From<String> for Field {
    fn from(text: String) -> Self {
        Field::Text(text)
    }
}

/// One competition entry: score fields first, most significant leftmost,
/// followed by any payload (typically the competitor's name).
///
/// Records order lexicographically by field, so sorting a list of records
/// orders them by score key first and payload second.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(fields: Vec<Field>) -> Self {
        Record { fields }
    }

    /// Build a record made only of scores.
    pub fn from_scores(scores: &[i64]) -> Self {
        Record {
            fields: scores.iter().copied().map(Field::Score).collect(),
        }
    }

    /// Append a text field (builder style).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.fields.push(Field::Text(text.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The prefix of fields that takes part in ranking and tie detection.
    ///
    /// Records shorter than the key yield all their fields; `partition`
    /// rejects such records before any key is taken.
    pub fn score_key(&self, scoring_fields: ScoringFields) -> &[Field] {
        match scoring_fields {
            ScoringFields::All => &self.fields,
            ScoringFields::Count(n) => &self.fields[..n.min(self.fields.len())],
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}

impl From<Vec<Field>> for Record {
    fn from(fields: Vec<Field>) -> Self {
        Record { fields }
    }
}

/// How many leading fields form the score key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoringFields {
    /// The first `n` fields are scores; the rest is payload.
    Count(usize),
    /// Every field counts. Only exact duplicates tie.
    All,
}

impl Default for ScoringFields {
    fn default() -> Self {
        ScoringFields::Count(DEFAULT_SCORING_FIELDS)
    }
}

impl From<usize> for ScoringFields {
    fn from(n: usize) -> Self {
        ScoringFields::Count(n)
    }
}

/// Options for `run_partition()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionOptions {
    /// Number of classes to split the field into (e.g. 3 for A/B/C).
    pub num_classes: usize,
    /// Leading fields compared when ranking and detecting ties.
    pub scoring_fields: ScoringFields,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        PartitionOptions {
            num_classes: DEFAULT_NUM_CLASSES,
            scoring_fields: ScoringFields::default(),
        }
    }
}

/// Result from `run_partition()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartitionResult {
    /// Classes from best to worst. Always `num_classes` entries, some possibly empty.
    pub classes: Vec<Vec<Record>>,
    /// Size-balanced class starts, before tie adjustment.
    pub nominal_breakpoints: Vec<usize>,
    /// Class starts after tie adjustment; `breakpoints[0] == 0`.
    pub breakpoints: Vec<usize>,
}

impl PartitionResult {
    /// Number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.classes.iter().map(Vec::len).sum()
    }

    /// Class index of the record at `rank` (0-based position in sorted order).
    pub fn class_of(&self, rank: usize) -> Option<usize> {
        if rank >= self.total_records() {
            return None;
        }
        // Last class whose start is at or before `rank`; empty classes share
        // a start with their successor, so take the rightmost match.
        self.breakpoints.iter().rposition(|&bp| bp <= rank)
    }

    pub fn into_classes(self) -> Vec<Vec<Record>> {
        self.classes
    }
}
