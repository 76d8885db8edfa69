//! Interval qualities, from quadruple diminished to quadruple augmented.
//!
//! Qualities are indexed by a half-integer ordinal: perfect is 0, major is
//! ½, minor is −½. Perfect-axis qualities move in whole steps (diminished is
//! −1), Major/Minor-axis qualities keep the half (diminished is −1½). So the
//! ladder holds 19 rungs, and both axes share it without colliding.
//!
//! Every quality is a `&'static` reference into one table, so two lookups of
//! the same quality are always the same object.
//!
//! # Example
//!
//! ```
//! use tonal_algebra::quality::{quality_from_name, quality_from_pair};
//!
//! let major = quality_from_name("M", None).unwrap();
//! assert_eq!(major.to_string(), "major");
//! let minor = major.diminish(1).unwrap();
//! assert_eq!(minor.abbr(), "min");
//! // E above C.
//! assert!(std::ptr::eq(quality_from_pair(2, 4).unwrap(), major));
//! ```

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    tables::{accidental_offset, diatone, QualityAxis},
    TonalError, TonalResult,
};

/// Half-integer quality ordinal, stored as a count of halves.
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Clone,
    Copy,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct QualityOrdinal(i32);
impl QualityOrdinal {
    pub const fn from_halves(halves: i32) -> Self {
        Self(halves)
    }
    pub fn halves(&self) -> i32 {
        self.0
    }
    pub fn value(&self) -> f64 {
        self.0 as f64 / 2.0
    }
    /// Chromatic modifier relative to the natural degree.
    pub fn floor(&self) -> i32 {
        self.0.div_euclid(2)
    }
    pub fn axis(&self) -> QualityAxis {
        match self.0 % 2 {
            0 => QualityAxis::Perfect,
            _ => QualityAxis::MajorMinor,
        }
    }
}
impl TryFrom<f64> for QualityOrdinal {
    type Error = TonalError;
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let halves = value * 2.0;
        if halves.fract() != 0.0 || !halves.is_finite() {
            return Err(TonalError::UnsupportedQuality(value.to_string()));
        }
        Ok(Self(halves as i32))
    }
}
impl Display for QualityOrdinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Quality {
    id: &'static str,
    label: &'static str,
    abbr: &'static str,
    ordinal: QualityOrdinal,
}
impl Quality {
    const fn new(
        halves: i32,
        id: &'static str,
        label: &'static str,
        abbr: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            abbr,
            ordinal: QualityOrdinal::from_halves(halves),
        }
    }

    /// Unique name, e.g. `diminished-perfect`.
    pub fn id(&self) -> &'static str {
        self.id
    }
    /// Display name, shared by both axes, e.g. `diminished`.
    pub fn label(&self) -> &'static str {
        self.label
    }
    pub fn abbr(&self) -> &'static str {
        self.abbr
    }
    pub fn ordinal(&self) -> QualityOrdinal {
        self.ordinal
    }
    pub fn axis(&self) -> QualityAxis {
        self.ordinal.axis()
    }

    /// Halfsteps from the natural (major or perfect) chromatic value.
    ///
    /// # Example
    /// ```
    /// # use tonal_algebra::quality::quality_from_name;
    /// assert_eq!(quality_from_name("major", None).unwrap().chromatic_modifier(), 0);
    /// assert_eq!(quality_from_name("minor", None).unwrap().chromatic_modifier(), -1);
    /// assert_eq!(quality_from_name("dim", Some(2)).unwrap().chromatic_modifier(), -2);
    /// ```
    pub fn chromatic_modifier(&self) -> i32 {
        self.ordinal.floor()
    }

    pub fn augment(&self, halfsteps: i32) -> TonalResult<&'static Quality> {
        quality_from_ordinal(QualityOrdinal::from_halves(
            self.ordinal.halves() + 2 * halfsteps,
        ))
    }

    pub fn diminish(&self, halfsteps: i32) -> TonalResult<&'static Quality> {
        self.augment(-halfsteps)
    }
}
impl Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

const LADDER_OFFSET: i32 = 9;

pub static QUALITIES: [Quality; 19] = [
    Quality::new(
        -9,
        "quadruple-diminished-major-minor",
        "quadruple diminished",
        "quad dim",
    ),
    Quality::new(
        -8,
        "quadruple-diminished-perfect",
        "quadruple diminished",
        "quad dim",
    ),
    Quality::new(
        -7,
        "triple-diminished-major-minor",
        "triple diminished",
        "trpl dim",
    ),
    Quality::new(
        -6,
        "triple-diminished-perfect",
        "triple diminished",
        "trpl dim",
    ),
    Quality::new(
        -5,
        "double-diminished-major-minor",
        "double diminished",
        "dbl dim",
    ),
    Quality::new(
        -4,
        "double-diminished-perfect",
        "double diminished",
        "dbl dim",
    ),
    Quality::new(-3, "diminished-major-minor", "diminished", "dim"),
    Quality::new(-2, "diminished-perfect", "diminished", "dim"),
    Quality::new(-1, "minor", "minor", "min"),
    Quality::new(0, "perfect", "perfect", "per"),
    Quality::new(1, "major", "major", "maj"),
    Quality::new(2, "augmented-perfect", "augmented", "aug"),
    Quality::new(3, "augmented-major-minor", "augmented", "aug"),
    Quality::new(
        4,
        "double-augmented-perfect",
        "double augmented",
        "dbl aug",
    ),
    Quality::new(
        5,
        "double-augmented-major-minor",
        "double augmented",
        "dbl aug",
    ),
    Quality::new(
        6,
        "triple-augmented-perfect",
        "triple augmented",
        "trpl aug",
    ),
    Quality::new(
        7,
        "triple-augmented-major-minor",
        "triple augmented",
        "trpl aug",
    ),
    Quality::new(
        8,
        "quadruple-augmented-perfect",
        "quadruple augmented",
        "quad aug",
    ),
    Quality::new(
        9,
        "quadruple-augmented-major-minor",
        "quadruple augmented",
        "quad aug",
    ),
];

pub fn quality_from_ordinal(
    ordinal: QualityOrdinal,
) -> TonalResult<&'static Quality> {
    usize::try_from(ordinal.halves() + LADDER_OFFSET)
        .ok()
        .and_then(|idx| QUALITIES.get(idx))
        .ok_or(TonalError::UnsupportedQuality(format!(
            "ordinal {}",
            ordinal
        )))
}

/// Quality of the interval from the origin to `(degree, chromatic)`.
///
/// The Major/Minor base takes the sign of the modifier, so any lowering of
/// a Major/Minor degree lands on the diminished rung.
///
/// # Example
/// ```
/// # use tonal_algebra::quality::quality_from_pair;
/// assert_eq!(quality_from_pair(0, 0).unwrap().id(), "perfect");
/// assert_eq!(quality_from_pair(0, 11).unwrap().id(), "diminished-perfect");
/// assert_eq!(quality_from_pair(2, 3).unwrap().id(), "diminished-major-minor");
/// assert_eq!(quality_from_pair(3, 6).unwrap().id(), "augmented-perfect");
/// ```
pub fn quality_from_pair(
    degree: i32,
    chromatic: i32,
) -> TonalResult<&'static Quality> {
    let modifier = accidental_offset(degree, chromatic)?;
    let mut base = diatone(degree)?.axis.base_halves();
    if modifier < 0 {
        base = -base;
    }
    quality_from_ordinal(QualityOrdinal::from_halves(base + 2 * modifier))
}

/// Resolve a quality by its id, full name or abbreviation.
///
/// Diminished and augmented depend on the axis of the interval, so they need
/// the diatonic degree.
///
/// # Example
/// ```
/// # use tonal_algebra::quality::quality_from_name;
/// # use tonal_algebra::TonalError;
/// assert_eq!(quality_from_name("maj", None).unwrap().id(), "major");
/// assert_eq!(quality_from_name("P", None).unwrap().id(), "perfect");
/// assert_eq!(
///     quality_from_name("aug", Some(2)).unwrap().id(),
///     "augmented-major-minor"
/// );
/// assert_eq!(
///     quality_from_name("double diminished", Some(4)).unwrap().id(),
///     "double-diminished-perfect"
/// );
/// assert!(matches!(
///     quality_from_name("dim", None),
///     Err(TonalError::AmbiguousQuality(_))
/// ));
/// ```
pub fn quality_from_name(
    name: &str,
    degree: Option<i32>,
) -> TonalResult<&'static Quality> {
    let name = name.trim();
    let lowered = name.to_lowercase();
    if let Some(quality) = QUALITIES.iter().find(|q| q.id == lowered) {
        return Ok(quality);
    }
    let halves = match name {
        "M" => 1,
        "m" => -1,
        _ => match lowered.as_str() {
            "maj" => 1,
            "min" => -1,
            "p" | "per" => 0,
            _ => axis_relative_halves(name, &lowered, degree)?,
        },
    };
    quality_from_ordinal(QualityOrdinal::from_halves(halves))
}

fn axis_relative_halves(
    name: &str,
    lowered: &str,
    degree: Option<i32>,
) -> TonalResult<i32> {
    let mut direction = 0;
    let mut multiplier = 1;
    for word in lowered.split(|ch: char| ch.is_whitespace() || ch == '_' || ch == '-')
    {
        match word {
            "" => (),
            "a" | "aug" | "augmented" => direction = 1,
            "d" | "dim" | "diminished" => direction = -1,
            "dbl" | "double" => multiplier = 2,
            "trpl" | "triple" => multiplier = 3,
            "quad" | "quadruple" => multiplier = 4,
            _ => {
                log::debug!("unknown word `{word}` in quality `{name}`");
                return Err(TonalError::UnsupportedQuality(name.to_string()));
            }
        }
    }
    if direction == 0 {
        return Err(TonalError::UnsupportedQuality(name.to_string()));
    }
    let degree =
        degree.ok_or(TonalError::AmbiguousQuality(name.to_string()))?;
    Ok(match diatone(degree)?.axis {
        QualityAxis::Perfect => direction * 2 * multiplier,
        QualityAxis::MajorMinor => direction * (1 + 2 * multiplier),
    })
}
