use std::fmt::Display;

use crate::{
    quality::{quality_from_name, quality_from_pair, Quality},
    tables::{diatone, D_LEN},
    TonalError, TonalResult,
};

use super::{TonalTuple, TonalValue};

/// Tonal value, read as an interval above the origin.
///
/// # Example
/// ```
/// use tonal_algebra::TonalValue;
///
/// let fourth = TonalValue::new(3, 6).interval().unwrap();
/// assert_eq!(fourth.number(), 4);
/// assert_eq!(fourth.abbr(), "aug4");
/// assert_eq!(fourth.to_string(), "augmented 4");
/// assert_eq!(fourth.semitones(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    value: TonalValue,
    quality: &'static Quality,
}
impl Interval {
    pub fn new(value: TonalValue) -> TonalResult<Self> {
        let quality = quality_from_pair(value.d(), value.c())?;
        Ok(Self { value, quality })
    }
    pub fn value(&self) -> TonalValue {
        self.value
    }
    pub fn quality(&self) -> &'static Quality {
        self.quality
    }
    /// Interval number: 1 for unison, 5 for fifth.
    pub fn number(&self) -> i32 {
        self.value.d() + 1
    }
    /// Compound octaves, 0 for an interval without octave.
    pub fn octave(&self) -> i32 {
        self.value.o().unwrap_or(0)
    }
    pub fn semitones(&self) -> i32 {
        self.value.signed_halfsteps()
    }

    /// Short name, like `per1`, `maj3` or `aug4+1`.
    pub fn abbr(&self) -> String {
        let octave = match self.octave() {
            0 => String::new(),
            o if o > 0 => format!("+{o}"),
            o => o.to_string(),
        };
        format!("{}{}{}", self.quality.abbr(), self.number(), octave)
    }
    /// Quality label and number, like `augmented 4`.
    pub fn label(&self) -> String {
        format!("{} {}", self.quality.label(), self.number())
    }
}
impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse an interval name: quality, number (1 to 7) and optional signed
/// octave.
///
/// # Example
/// ```
/// # use tonal_algebra::primitives::parse_interval;
/// assert_eq!(parse_interval("M3").unwrap(), (2, 4));
/// assert_eq!(parse_interval("P5").unwrap(), (4, 7));
/// assert_eq!(parse_interval("aug4+1").unwrap(), (3, 6, 1));
/// assert_eq!(parse_interval("dbl dim7").unwrap(), (6, 8));
/// assert!(parse_interval("P3").is_err());
/// ```
pub fn parse_interval(text: &str) -> TonalResult<TonalValue> {
    let error = || TonalError::Parse(text.to_string());
    let trimmed = text.trim();
    let number_start = trimmed
        .find(|ch: char| ch.is_ascii_digit())
        .ok_or_else(error)?;
    let (quality_name, rest) = trimmed.split_at(number_start);
    let number_end = rest
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(rest.len());
    let (number, octave) = rest.split_at(number_end);

    let number: i32 = number.parse().map_err(|_| error())?;
    if !(1..=D_LEN).contains(&number) {
        log::debug!("interval number {number} out of range in `{text}`");
        return Err(error());
    }
    let octave = match octave.trim() {
        "" => None,
        octave => Some(octave.parse::<i32>().map_err(|_| error())?),
    };

    let degree = number - 1;
    let diatone = diatone(degree)?;
    let quality = quality_from_name(quality_name, Some(degree))?;
    if quality.axis() != diatone.axis {
        return Err(TonalError::UnsupportedQuality(format!(
            "{} {}",
            quality.label(),
            number
        )));
    }
    Ok(TonalValue::from_tuple(TonalTuple {
        d: degree,
        c: diatone.chromatic + quality.chromatic_modifier(),
        o: octave,
    }))
}

#[cfg(test)]
mod tests {
    use super::parse_interval;
    use crate::{TonalError, TonalValue};

    #[test]
    fn abbreviations() {
        let abbr = |v: TonalValue| v.interval().unwrap().abbr();
        assert_eq!(abbr(TonalValue::new(0, 0)), "per1");
        assert_eq!(abbr(TonalValue::new(1, 2)), "maj2");
        assert_eq!(abbr(TonalValue::new(4, 6)), "dim5");
        assert_eq!(abbr(TonalValue::qualified(3, 6, 1)), "aug4+1");
        assert_eq!(abbr(TonalValue::qualified(2, 4, -1)), "maj3-1");
        assert_eq!(abbr(TonalValue::qualified(0, 0, 0)), "per1");
        assert_eq!(abbr(TonalValue::new(3, 7)), "dbl aug4");
    }

    #[test]
    fn labels() {
        let unison = TonalValue::new(0, 0).interval().unwrap();
        assert_eq!(unison.label(), "perfect 1");
        assert_eq!(unison.octave(), 0);
        let tenth = TonalValue::qualified(2, 4, 1).interval().unwrap();
        assert_eq!(tenth.to_string(), "major 3");
        assert_eq!(tenth.octave(), 1);
        assert_eq!(tenth.semitones(), 16);
        assert_eq!(tenth.quality().id(), "major");
    }

    #[test]
    fn unnameable() {
        assert!(matches!(
            TonalValue::new(0, 6).interval(),
            Err(TonalError::UnsupportedQuality(_))
        ));
    }

    #[test]
    fn parse() {
        assert_eq!(parse_interval("m3").unwrap(), (2, 3));
        assert_eq!(parse_interval("per1").unwrap(), (0, 0));
        assert_eq!(parse_interval("d5").unwrap(), (4, 6));
        assert_eq!(parse_interval("dim1").unwrap(), (0, 11));
        assert_eq!(parse_interval("M2-1").unwrap(), (1, 2, -1));
        assert_eq!(parse_interval("triple aug 4").unwrap(), (3, 8));
        assert!(matches!(
            parse_interval("M5"),
            Err(TonalError::UnsupportedQuality(_))
        ));
        assert!(matches!(
            parse_interval("aug"),
            Err(TonalError::Parse(_))
        ));
        assert!(matches!(parse_interval("P8"), Err(TonalError::Parse(_))));
        assert!(matches!(
            parse_interval("x3"),
            Err(TonalError::UnsupportedQuality(_))
        ));
    }
}
