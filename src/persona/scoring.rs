//! Score aggregation from Likert answers, and derivations on finished scores.

use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};

use crate::persona::types::axis::{Axis, Level, MIDPOINT, level_of, side_of};
use crate::persona::types::error::{ProfileError, Result};
use crate::persona::types::models::{AxisScores, MAX_SCORE};

/// Lowest and highest Likert answer.
pub const ANSWER_RANGE: std::ops::RangeInclusive<u8> = 1..=7;

/// A quiz question as far as scoring is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub axis: Axis,
    /// Reverse-keyed questions score `8 - answer`.
    pub reverse: bool,
}

/// Question id to Likert answer.
pub type Answers = HashMap<u32, u8>;

/// Aggregates answers into one 0-100 score per axis.
///
/// Each answered question contributes its (possibly reversed) answer; the sum
/// is normalized from its attainable range `n..=7n` onto `0..=100` and rounded
/// half-up. An axis with no answered questions scores 50.
pub fn calculate_scores(questions: &[Question], answers: &Answers) -> Result<AxisScores> {
    let mut sums: HashMap<Axis, (u32, u32)> = HashMap::new();

    for question in questions {
        let Some(&answer) = answers.get(&question.id) else {
            continue;
        };
        if !ANSWER_RANGE.contains(&answer) {
            return Err(ProfileError::InvalidAnswer {
                question: question.id,
                value: answer,
            });
        }
        let value = if question.reverse { 8 - answer } else { answer };
        let entry = sums.entry(question.axis).or_default();
        entry.0 += u32::from(value);
        entry.1 += 1;
    }

    let mut values = [MIDPOINT; 4];
    for (slot, axis) in values.iter_mut().zip(Axis::ALL) {
        let Some(&(sum, count)) = sums.get(&axis) else {
            trace!("No answers for {}, defaulting to {}", axis, MIDPOINT);
            continue;
        };
        let min = count;
        let max = count * u32::from(*ANSWER_RANGE.end());
        let normalized = (f64::from(sum - min) / f64::from(max - min) * 100.0 + 0.5).floor();
        *slot = normalized.clamp(0.0, f64::from(MAX_SCORE)) as u8;
    }

    let scores = AxisScores::from_array(values)?;
    debug!("Calculated scores {:?} ({})", scores.to_array(), scores.code());
    Ok(scores)
}

/// One axis ranked by how decisively it leans to a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisStrength {
    pub axis: Axis,
    pub score: u8,
    pub side: char,
    pub level: Level,
    pub distance: u8,
}

/// The three axes farthest from the midpoint, strongest first.
///
/// Ties keep `EI,SN,TF,JP` order.
pub fn top_axes(scores: &AxisScores) -> Vec<AxisStrength> {
    let mut ranked: Vec<AxisStrength> = scores
        .iter()
        .map(|(axis, score)| AxisStrength {
            axis,
            score,
            side: side_of(axis, score),
            level: level_of(score),
            distance: score.abs_diff(MIDPOINT),
        })
        .collect();
    ranked.sort_by(|a, b| b.distance.cmp(&a.distance));
    ranked.truncate(3);
    ranked
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Work scores higher than private.
    Positive,
    Negative,
    Neutral,
}

/// How one axis differs between the work and private groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisDiff {
    pub axis: Axis,
    /// `work - private`.
    pub diff: i16,
    pub abs_diff: u8,
    pub direction: Direction,
}

/// Per-axis work/private differences, largest first. Ties keep axis order.
pub fn calculate_diff(work: &AxisScores, private: &AxisScores) -> Vec<AxisDiff> {
    let mut diffs: Vec<AxisDiff> = Axis::ALL
        .into_iter()
        .map(|axis| {
            let (w, p) = (work.get(axis), private.get(axis));
            let diff = i16::from(w) - i16::from(p);
            AxisDiff {
                axis,
                diff,
                abs_diff: w.abs_diff(p),
                direction: match diff.signum() {
                    1 => Direction::Positive,
                    -1 => Direction::Negative,
                    _ => Direction::Neutral,
                },
            }
        })
        .collect();
    diffs.sort_by(|a, b| b.abs_diff.cmp(&a.abs_diff));
    diffs
}

/// Coarse size of a work/private difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLevel {
    Similar,
    Notable,
    Large,
}

impl DiffLevel {
    pub fn of(abs_diff: u8) -> Self {
        match abs_diff {
            18.. => DiffLevel::Large,
            10.. => DiffLevel::Notable,
            _ => DiffLevel::Similar,
        }
    }
}

impl fmt::Display for DiffLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiffLevel::Similar => write!(f, "similar"),
            DiffLevel::Notable => write!(f, "notably different"),
            DiffLevel::Large => write!(f, "very different"),
        }
    }
}
