//! Parser and writer for the current (v3) wire format.
//!
//! ```text
//! v3|EI.SN.TF.JP|wEI.wSN.wTF.wJP|pEI.pSN.pTF.pJP|<s|o>|<escaped name>
//! ```
//!
//! The work and private groups are empty when absent, and so is the name.

use log::trace;

use crate::persona::codec::transport;
use crate::persona::types::error::{ProfileError, Result};
use crate::persona::types::models::{AxisScores, ScoreProfile, TargetType, WireVersion};

use super::common::{self, FIELD_DELIMITER};

/// Separates axis values inside a group.
pub const GROUP_DELIMITER: &str = ".";

/// Single-character tag for [`TargetType::Myself`].
pub const SELF_TAG: &str = "s";
/// Single-character tag for [`TargetType::Other`].
pub const OTHER_TAG: &str = "o";

/// Renders `profile` as v3 payload text (before base64).
pub fn write(profile: &ScoreProfile) -> String {
    let group = |scores: Option<&AxisScores>| {
        scores
            .map(|s| {
                s.to_array()
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(GROUP_DELIMITER)
            })
            .unwrap_or_default()
    };
    let tag = match profile.target_type() {
        TargetType::Myself => SELF_TAG,
        TargetType::Other => OTHER_TAG,
    };
    let name = profile
        .target_name()
        .map(transport::escape_component)
        .unwrap_or_default();

    let fields = [
        group(Some(profile.scores())),
        group(profile.work_scores()),
        group(profile.private_scores()),
        tag.to_string(),
        name,
    ];
    format!(
        "{}{}",
        WireVersion::V3.prefix().unwrap_or_default(),
        fields.join(FIELD_DELIMITER)
    )
}

/// Parses v3 payload text.
pub fn parse(text: &str) -> Result<ScoreProfile> {
    let fields: Vec<&str> = text.split(FIELD_DELIMITER).collect();
    trace!("v3 payload has {} fields", fields.len());

    let base = common::field(&fields, 1);
    if base.is_empty() {
        return Err(ProfileError::IncompleteProfile(
            "v3 payload has no base score group".to_string(),
        ));
    }
    let scores = common::parse_group(base, GROUP_DELIMITER)?;
    let work = common::parse_optional_group(common::field(&fields, 2), GROUP_DELIMITER)?;
    let private = common::parse_optional_group(common::field(&fields, 3), GROUP_DELIMITER)?;

    let target_type = if common::field(&fields, 4) == OTHER_TAG {
        TargetType::Other
    } else {
        TargetType::Myself
    };

    let name = common::field(&fields, 5);
    let target_name = if name.is_empty() {
        None
    } else {
        Some(transport::unescape_component(name)?)
    };

    Ok(ScoreProfile::new(
        scores,
        common::pair_dual(work, private),
        target_type,
        target_name,
    ))
}
