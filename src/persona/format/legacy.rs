//! The oldest wire format: a JSON document with labeled fields.
//!
//! The same document shape is what [`store`](crate::persona::store) persists,
//! so [`ScoreProfile`] serializes to and deserializes from it.
//!
//! ```json
//! {"scores":{"EI":56,"SN":53,"TF":56,"JP":42},"code":"ESTP",
//!  "hasDualProfile":true,"workScores":{...},"workCode":"ESTP",
//!  "privateScores":{...},"privateCode":"ESTJ",
//!  "targetType":"self","targetName":null}
//! ```
//!
//! Codes and `hasDualProfile` are written for readers that expect them but
//! are never read back.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::persona::types::error::{ProfileError, Result};
use crate::persona::types::models::{AxisScores, ScoreProfile, TargetType};

use super::common;

/// The labeled JSON form of a profile.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDocument {
    pub scores: Option<AxisScores>,
    #[serde(skip_deserializing)]
    pub code: Option<String>,
    #[serde(skip_deserializing)]
    pub has_dual_profile: bool,
    pub work_scores: Option<AxisScores>,
    #[serde(skip_deserializing)]
    pub work_code: Option<String>,
    pub private_scores: Option<AxisScores>,
    #[serde(skip_deserializing)]
    pub private_code: Option<String>,
    pub target_type: Option<String>,
    pub target_name: Option<String>,
}

impl ProfileDocument {
    /// Converts the document into a validated profile.
    ///
    /// Documents that lost their `scores` but still carry both work and
    /// private groups are repaired with the per-axis average of the two.
    /// This is a best-effort recovery of old data, not an exact one.
    pub fn into_profile(self) -> Result<ScoreProfile> {
        let scores = match (self.scores, &self.work_scores, &self.private_scores) {
            (Some(scores), _, _) => scores,
            (None, Some(work), Some(private)) => {
                let repaired = AxisScores::average(work, private);
                warn!(
                    "Legacy payload has no base scores; averaged work/private into {}",
                    repaired.code()
                );
                repaired
            }
            (None, _, _) => {
                return Err(ProfileError::IncompleteProfile(
                    "legacy payload has no scores".to_string(),
                ));
            }
        };

        let target_type = self
            .target_type
            .as_deref()
            .map(TargetType::from_wire)
            .unwrap_or_default();

        Ok(ScoreProfile::new(
            scores,
            common::pair_dual(self.work_scores, self.private_scores),
            target_type,
            self.target_name,
        ))
    }
}

impl From<&ScoreProfile> for ProfileDocument {
    fn from(profile: &ScoreProfile) -> Self {
        Self {
            scores: Some(*profile.scores()),
            code: Some(profile.code()),
            has_dual_profile: profile.has_dual_profile(),
            work_scores: profile.work_scores().copied(),
            work_code: profile.work_code(),
            private_scores: profile.private_scores().copied(),
            private_code: profile.private_code(),
            target_type: Some(profile.target_type().as_str().to_string()),
            target_name: profile.target_name().map(str::to_string),
        }
    }
}

impl Serialize for ScoreProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ProfileDocument::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ScoreProfile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        ProfileDocument::deserialize(deserializer)?
            .into_profile()
            .map_err(serde::de::Error::custom)
    }
}

/// Parses legacy JSON payload text.
pub fn parse(text: &str) -> Result<ScoreProfile> {
    let document: ProfileDocument = serde_json::from_str(text)?;
    document.into_profile()
}
