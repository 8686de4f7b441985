//! Helpers shared by the positional (prefixed) wire formats.

use log::warn;

use crate::persona::types::axis::Axis;
use crate::persona::types::error::{ProfileError, Result};
use crate::persona::types::models::{AxisScores, DualScores, MAX_SCORE};

/// Separates top-level fields in every prefixed format.
pub const FIELD_DELIMITER: &str = "|";

/// Returns field `index`, or `""` when the payload is shorter.
pub fn field<'a>(fields: &[&'a str], index: usize) -> &'a str {
    fields.get(index).copied().unwrap_or("")
}

/// Parses four delimited axis values in `EI,SN,TF,JP` order.
pub fn parse_group(segment: &str, delimiter: &str) -> Result<AxisScores> {
    let values: Vec<&str> = segment.split(delimiter).collect();
    if values.len() != Axis::ALL.len() {
        return Err(ProfileError::IncompleteProfile(format!(
            "expected {} axis values, found {} in '{}'",
            Axis::ALL.len(),
            values.len(),
            segment
        )));
    }

    let mut scores = [0u8; 4];
    for ((slot, axis), raw) in scores.iter_mut().zip(Axis::ALL).zip(values) {
        let value: u32 = raw.trim().parse().map_err(|_| {
            ProfileError::InvalidFormat(format!("axis {} is not a number: '{}'", axis, raw))
        })?;
        if value > u32::from(MAX_SCORE) {
            return Err(ProfileError::ScoreOutOfRange {
                axis,
                value: f64::from(value),
            });
        }
        *slot = value as u8;
    }
    AxisScores::from_array(scores)
}

/// Parses an optional group: an empty segment means absent.
pub fn parse_optional_group(segment: &str, delimiter: &str) -> Result<Option<AxisScores>> {
    if segment.is_empty() {
        return Ok(None);
    }
    parse_group(segment, delimiter).map(Some)
}

/// Pairs work and private groups. A lone group cannot be compared and is dropped.
pub fn pair_dual(work: Option<AxisScores>, private: Option<AxisScores>) -> Option<DualScores> {
    match (work, private) {
        (Some(work), Some(private)) => Some(DualScores { work, private }),
        (None, None) => None,
        (work, _) => {
            warn!(
                "Dropping lone {} score group; dual profiles need both",
                if work.is_some() { "work" } else { "private" }
            );
            None
        }
    }
}
