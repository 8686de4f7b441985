//! Core data structures transported by the results codec.
//!
//! This module defines:
//! - Per-axis score groups and the dual (work/private) pair
//! - The completed [`ScoreProfile`] with its derived codes
//! - Wire-format version identifiers

use std::fmt;

use serde::{Deserialize, Serialize};

use super::axis::{Axis, code_of};
use super::error::{ProfileError, Result};

/// Upper bound of every axis score.
pub const MAX_SCORE: u8 = 100;

/// One score per axis, each in `0..=100`.
///
/// Serializes as `{"EI":..,"SN":..,"TF":..,"JP":..}`. Deserialization accepts
/// any JSON number with no fractional part and rejects out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAxisScores")]
pub struct AxisScores {
    #[serde(rename = "EI")]
    ei: u8,
    #[serde(rename = "SN")]
    sn: u8,
    #[serde(rename = "TF")]
    tf: u8,
    #[serde(rename = "JP")]
    jp: u8,
}

impl AxisScores {
    /// Builds a score group, validating every value.
    pub fn new(ei: u8, sn: u8, tf: u8, jp: u8) -> Result<Self> {
        Self::from_array([ei, sn, tf, jp])
    }

    /// Builds a score group from values in `EI,SN,TF,JP` order.
    pub fn from_array(values: [u8; 4]) -> Result<Self> {
        for (axis, value) in Axis::ALL.into_iter().zip(values) {
            if value > MAX_SCORE {
                return Err(ProfileError::ScoreOutOfRange {
                    axis,
                    value: f64::from(value),
                });
            }
        }
        let [ei, sn, tf, jp] = values;
        Ok(Self { ei, sn, tf, jp })
    }

    pub fn get(&self, axis: Axis) -> u8 {
        match axis {
            Axis::EI => self.ei,
            Axis::SN => self.sn,
            Axis::TF => self.tf,
            Axis::JP => self.jp,
        }
    }

    /// Values in `EI,SN,TF,JP` order.
    pub fn to_array(&self) -> [u8; 4] {
        [self.ei, self.sn, self.tf, self.jp]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, u8)> + '_ {
        Axis::ALL.into_iter().map(|axis| (axis, self.get(axis)))
    }

    /// The four-letter code for this group.
    pub fn code(&self) -> String {
        code_of(self)
    }

    /// Per-axis mean of two groups, rounding halves up.
    pub fn average(a: &AxisScores, b: &AxisScores) -> AxisScores {
        let mean = |x: u8, y: u8| ((u16::from(x) + u16::from(y) + 1) / 2) as u8;
        AxisScores {
            ei: mean(a.ei, b.ei),
            sn: mean(a.sn, b.sn),
            tf: mean(a.tf, b.tf),
            jp: mean(a.jp, b.jp),
        }
    }
}

/// Axis scores exactly as they appear in a JSON document.
#[derive(Deserialize)]
struct RawAxisScores {
    #[serde(rename = "EI")]
    ei: f64,
    #[serde(rename = "SN")]
    sn: f64,
    #[serde(rename = "TF")]
    tf: f64,
    #[serde(rename = "JP")]
    jp: f64,
}

impl TryFrom<RawAxisScores> for AxisScores {
    type Error = ProfileError;

    fn try_from(raw: RawAxisScores) -> Result<Self> {
        let mut values = [0u8; 4];
        for ((slot, axis), value) in values
            .iter_mut()
            .zip(Axis::ALL)
            .zip([raw.ei, raw.sn, raw.tf, raw.jp])
        {
            if !value.is_finite() || value.fract() != 0.0 || !(0.0..=100.0).contains(&value) {
                return Err(ProfileError::ScoreOutOfRange { axis, value });
            }
            *slot = value as u8;
        }
        Self::from_array(values)
    }
}

/// The work/private comparison pair. Both groups are always present together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualScores {
    pub work: AxisScores,
    pub private: AxisScores,
}

/// Whose personality the quiz described.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetType {
    #[default]
    Myself,
    Other,
}

impl TargetType {
    /// Maps a literal wire value. Anything other than `"other"` means self.
    pub fn from_wire(value: &str) -> Self {
        if value == "other" {
            TargetType::Other
        } else {
            TargetType::Myself
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Myself => "self",
            TargetType::Other => "other",
        }
    }
}

/// A completed quiz result.
///
/// Codes are never stored: [`code`](Self::code), [`work_code`](Self::work_code)
/// and [`private_code`](Self::private_code) are derived from the scores on
/// every call, so a profile can never carry a code that disagrees with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreProfile {
    scores: AxisScores,
    dual: Option<DualScores>,
    target_type: TargetType,
    target_name: Option<String>,
}

impl ScoreProfile {
    /// Builds a profile. A target name is only kept for [`TargetType::Other`].
    pub fn new(
        scores: AxisScores,
        dual: Option<DualScores>,
        target_type: TargetType,
        target_name: Option<String>,
    ) -> Self {
        let target_name = match target_type {
            TargetType::Other => target_name.filter(|name| !name.is_empty()),
            TargetType::Myself => None,
        };
        Self {
            scores,
            dual,
            target_type,
            target_name,
        }
    }

    /// A self-assessment without a work/private comparison.
    pub fn single(scores: AxisScores) -> Self {
        Self::new(scores, None, TargetType::Myself, None)
    }

    pub fn with_dual(mut self, work: AxisScores, private: AxisScores) -> Self {
        self.dual = Some(DualScores { work, private });
        self
    }

    pub fn about_other(mut self, name: Option<String>) -> Self {
        self.target_type = TargetType::Other;
        self.target_name = name.filter(|name| !name.is_empty());
        self
    }

    pub fn scores(&self) -> &AxisScores {
        &self.scores
    }

    pub fn dual(&self) -> Option<&DualScores> {
        self.dual.as_ref()
    }

    pub fn work_scores(&self) -> Option<&AxisScores> {
        self.dual.as_ref().map(|d| &d.work)
    }

    pub fn private_scores(&self) -> Option<&AxisScores> {
        self.dual.as_ref().map(|d| &d.private)
    }

    pub fn has_dual_profile(&self) -> bool {
        self.dual.is_some()
    }

    pub fn target_type(&self) -> TargetType {
        self.target_type
    }

    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }

    pub fn code(&self) -> String {
        self.scores.code()
    }

    pub fn work_code(&self) -> Option<String> {
        self.work_scores().map(AxisScores::code)
    }

    pub fn private_code(&self) -> Option<String> {
        self.private_scores().map(AxisScores::code)
    }
}

/// Wire-format versions the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireVersion {
    /// Dot-delimited groups, single-character type tag, escaped name.
    V3,
    /// Comma-delimited groups, literal type and plain name.
    V2,
    /// A JSON document with labeled fields.
    Legacy,
}

impl WireVersion {
    /// The literal prefix that identifies this version, if it has one.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            WireVersion::V3 => Some("v3|"),
            WireVersion::V2 => Some("v2|"),
            WireVersion::Legacy => None,
        }
    }

    /// Detects the version of a decoded payload text.
    ///
    /// Text without a known prefix is assumed to be a legacy JSON document.
    pub fn detect(text: &str) -> Self {
        [WireVersion::V3, WireVersion::V2]
            .into_iter()
            .find(|version| version.prefix().is_some_and(|p| text.starts_with(p)))
            .unwrap_or(WireVersion::Legacy)
    }

    pub fn is_prefixed(text: &str) -> bool {
        Self::detect(text) != WireVersion::Legacy
    }
}

impl fmt::Display for WireVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WireVersion::V3 => write!(f, "v3"),
            WireVersion::V2 => write!(f, "v2"),
            WireVersion::Legacy => write!(f, "legacy"),
        }
    }
}
