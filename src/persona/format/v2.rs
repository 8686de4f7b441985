//! Parser for the previous (v2) wire format.
//!
//! ```text
//! v2|EI,SN,TF,JP|wEI,wSN,wTF,wJP|pEI,pSN,pTF,pJP|<self|other>|<plain name>
//! ```
//!
//! Read-only: nothing writes v2 anymore.

use log::{trace, warn};

use crate::persona::types::error::{ProfileError, Result};
use crate::persona::types::models::{AxisScores, ScoreProfile, TargetType};

use super::common::{self, FIELD_DELIMITER};

/// Separates axis values inside a group.
pub const GROUP_DELIMITER: &str = ",";

/// Parses v2 payload text.
pub fn parse(text: &str) -> Result<ScoreProfile> {
    let fields: Vec<&str> = text.split(FIELD_DELIMITER).collect();
    trace!("v2 payload has {} fields", fields.len());

    let base = common::field(&fields, 1);
    if base.is_empty() {
        return Err(ProfileError::IncompleteProfile(
            "v2 payload has no base score group".to_string(),
        ));
    }
    let scores = common::parse_group(base, GROUP_DELIMITER)?;
    let work = optional_group(common::field(&fields, 2), "work")?;
    let private = optional_group(common::field(&fields, 3), "private")?;

    let target_type = TargetType::from_wire(common::field(&fields, 4));
    let name = common::field(&fields, 5);
    let target_name = (!name.is_empty()).then(|| name.to_string());

    Ok(ScoreProfile::new(
        scores,
        common::pair_dual(work, private),
        target_type,
        target_name,
    ))
}

/// A work or private group without exactly four values counts as absent.
fn optional_group(segment: &str, label: &str) -> Result<Option<AxisScores>> {
    if segment.is_empty() {
        return Ok(None);
    }
    let count = segment.split(GROUP_DELIMITER).count();
    if count != 4 {
        warn!("Ignoring v2 {} group with {} values", label, count);
        return Ok(None);
    }
    common::parse_group(segment, GROUP_DELIMITER).map(Some)
}
