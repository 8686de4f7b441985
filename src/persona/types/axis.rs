//! The four bipolar trait axes and the letter/level derivations built on them.

use std::fmt;

/// Scores at or above this value resolve to the high-side letter.
pub const MIDPOINT: u8 = 50;

/// One of the four independent trait dimensions, each scored 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    EI,
    SN,
    TF,
    JP,
}

impl Axis {
    /// All axes in wire and code order.
    pub const ALL: [Axis; 4] = [Axis::EI, Axis::SN, Axis::TF, Axis::JP];

    /// The two-letter axis identifier used as a JSON key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::EI => "EI",
            Axis::SN => "SN",
            Axis::TF => "TF",
            Axis::JP => "JP",
        }
    }

    /// `(low, high)` side letters.
    pub fn letters(&self) -> (char, char) {
        match self {
            Axis::EI => ('I', 'E'),
            Axis::SN => ('N', 'S'),
            Axis::TF => ('F', 'T'),
            Axis::JP => ('P', 'J'),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the side letter for `score` on `axis`.
///
/// The threshold is inclusive on the high side: exactly 50 yields the high letter.
pub fn side_of(axis: Axis, score: u8) -> char {
    let (low, high) = axis.letters();
    if score >= MIDPOINT { high } else { low }
}

/// Concatenates [`side_of`] over all axes in `EI,SN,TF,JP` order.
pub fn code_of(scores: &super::models::AxisScores) -> String {
    Axis::ALL
        .iter()
        .map(|&axis| side_of(axis, scores.get(axis)))
        .collect()
}

/// How far a score sits from the midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Distance of 20 or more.
    High,
    /// Distance of 8 or more.
    Mid,
    Low,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "high",
            Level::Mid => "mid",
            Level::Low => "low",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorizes the distance of `score` from the midpoint.
pub fn level_of(score: u8) -> Level {
    let distance = score.abs_diff(MIDPOINT);
    if distance >= 20 {
        Level::High
    } else if distance >= 8 {
        Level::Mid
    } else {
        Level::Low
    }
}
