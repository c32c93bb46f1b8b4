/// Score sheet parsing.
///
/// One entry per line, fields separated by whitespace, score fields first:
///
/// ```text
/// # score  run  name
/// 42 4 Tim Miller
/// 47 21 Tim Brooks
/// ```
///
/// Blank lines and lines starting with `#` are skipped. Entries do not need
/// to be sorted.
use lewisclass_core::{Field, Record, ScoringFields};
use std::io::BufRead;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("line {line}: expected at least {required} score field(s), found {found} (is --scoring-fields too large?)")]
    TooFewFields {
        line: usize,
        required: usize,
        found: usize,
    },

    #[error("line {line}: score \"{token}\" is not a whole number: {source}")]
    InvalidScore {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("failed to read scores: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one non-comment line. `line_number` is 1-based and only used for errors.
fn parse_line(line: &str, line_number: usize, scoring_fields: ScoringFields) -> Result<Record, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let fields = match scoring_fields {
        ScoringFields::All => tokens
            .iter()
            .map(|tok| match tok.parse::<i64>() {
                Ok(score) => Field::Score(score),
                Err(_) => Field::from(*tok),
            })
            .collect(),
        ScoringFields::Count(required) => {
            if tokens.len() < required {
                return Err(InputError::TooFewFields {
                    line: line_number,
                    required,
                    found: tokens.len(),
                });
            }
            let mut fields = Vec::with_capacity(tokens.len());
            for tok in &tokens[..required] {
                let score = tok.parse::<i64>().map_err(|source| InputError::InvalidScore {
                    line: line_number,
                    token: tok.to_string(),
                    source,
                })?;
                fields.push(Field::Score(score));
            }
            fields.extend(tokens[required..].iter().map(|tok| Field::from(*tok)));
            fields
        }
    };

    Ok(Record::new(fields))
}

fn is_skipped(line: &str) -> bool {
    line.is_empty() || line.starts_with('#')
}

/// Read every entry from `reader`.
pub fn read_records(reader: impl BufRead, scoring_fields: ScoringFields) -> Result<Vec<Record>, InputError> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if is_skipped(line) {
            continue;
        }
        records.push(parse_line(line, idx + 1, scoring_fields)?);
    }
    Ok(records)
}
