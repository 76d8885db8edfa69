//! Static reference data: the diatonic major scale and the accidentals.
//!
//! Everything here is plain data, consulted by the quality ladder, the
//! arithmetic and the spellings. Nothing is ever computed into these tables.

use serde::{Deserialize, Serialize};

use crate::{TonalError, TonalResult};

/// Number of tones in a diatonic scale.
pub const D_LEN: i32 = 7;
/// Number of tones in a chromatic scale.
pub const C_LEN: i32 = 12;
/// Largest accidental offset (quadruple sharp or flat).
pub const MAX_ACCIDENTAL_OFFSET: i32 = 4;

/// Every diatone is either Perfect or Major/Minor.
///
/// A Perfect interval lowered by a halfstep becomes diminished, a Major one
/// becomes minor.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum QualityAxis {
    Perfect,
    MajorMinor,
}
impl QualityAxis {
    /// Base quality ordinal of the axis, counted in half-ordinals
    /// (Perfect is 0, Major is ½).
    pub fn base_halves(&self) -> i32 {
        match self {
            Self::Perfect => 0,
            Self::MajorMinor => 1,
        }
    }
}

/// A degree of the major scale, with its natural chromatic value and the
/// names used for spelling it.
#[derive(Debug, PartialEq, Eq)]
pub struct Diatone {
    pub degree: i32,
    pub chromatic: i32,
    pub axis: QualityAxis,
    /// "unison", "second", ...
    pub interval_name: &'static str,
    /// Letter name in C major, lowercase.
    pub letter: char,
    /// Moveable-do syllables: lowered, natural, raised.
    pub solfege: [&'static str; 3],
    pub function: &'static str,
    /// Smaller is more consonant.
    pub dissonance: u8,
}
impl Diatone {
    /// Chromatic solfège syllable of the degree, altered by `modifier`.
    ///
    /// Only single alterations have syllables.
    pub fn solfege(&self, modifier: i32) -> Option<&'static str> {
        match modifier {
            -1..=1 => Some(self.solfege[(modifier + 1) as usize]),
            _ => None,
        }
    }
}

// ra, ma, to and fe, de are not from the common moveable-do set:
// they rhyme with their enharmonic neighbours.
pub static DIATONES: [Diatone; 7] = [
    Diatone {
        degree: 0,
        chromatic: 0,
        axis: QualityAxis::Perfect,
        interval_name: "unison",
        letter: 'c',
        solfege: ["de", "do", "di"],
        function: "tonic",
        dissonance: 0,
    },
    Diatone {
        degree: 1,
        chromatic: 2,
        axis: QualityAxis::MajorMinor,
        interval_name: "second",
        letter: 'd',
        solfege: ["ra", "re", "ri"],
        function: "supertonic",
        dissonance: 2,
    },
    Diatone {
        degree: 2,
        chromatic: 4,
        axis: QualityAxis::MajorMinor,
        interval_name: "third",
        letter: 'e',
        solfege: ["me", "mi", "ma"],
        function: "mediant",
        dissonance: 1,
    },
    Diatone {
        degree: 3,
        chromatic: 5,
        axis: QualityAxis::Perfect,
        interval_name: "fourth",
        letter: 'f',
        solfege: ["fe", "fa", "fi"],
        function: "subdominant",
        dissonance: 2,
    },
    Diatone {
        degree: 4,
        chromatic: 7,
        axis: QualityAxis::Perfect,
        interval_name: "fifth",
        letter: 'g',
        solfege: ["se", "so", "si"],
        function: "dominant",
        dissonance: 0,
    },
    Diatone {
        degree: 5,
        chromatic: 9,
        axis: QualityAxis::MajorMinor,
        interval_name: "sixth",
        letter: 'a',
        solfege: ["le", "la", "li"],
        function: "submediant",
        dissonance: 1,
    },
    Diatone {
        degree: 6,
        chromatic: 11,
        axis: QualityAxis::MajorMinor,
        interval_name: "seventh",
        letter: 'b',
        solfege: ["te", "ti", "to"],
        function: "leading tone",
        dissonance: 3,
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct Accidental {
    /// Halfsteps from natural, positive is sharp.
    pub offset: i32,
    pub verbose: &'static str,
    pub unicode: &'static str,
    pub ascii: &'static str,
    /// Dutch (default) LilyPond suffix.
    pub lilypond: &'static str,
}

pub static ACCIDENTALS: [Accidental; 9] = [
    Accidental {
        offset: -4,
        verbose: "quadruple flat",
        unicode: "𝄫𝄫",
        ascii: "bbbb",
        lilypond: "eseseses",
    },
    Accidental {
        offset: -3,
        verbose: "triple flat",
        unicode: "𝄫♭",
        ascii: "bbb",
        lilypond: "eseses",
    },
    Accidental {
        offset: -2,
        verbose: "double flat",
        unicode: "𝄫",
        ascii: "bb",
        lilypond: "eses",
    },
    Accidental {
        offset: -1,
        verbose: "flat",
        unicode: "♭",
        ascii: "b",
        lilypond: "es",
    },
    Accidental {
        offset: 0,
        verbose: "natural",
        unicode: "♮",
        ascii: "",
        lilypond: "",
    },
    Accidental {
        offset: 1,
        verbose: "sharp",
        unicode: "♯",
        ascii: "#",
        lilypond: "is",
    },
    Accidental {
        offset: 2,
        verbose: "double sharp",
        unicode: "𝄪",
        ascii: "##",
        lilypond: "isis",
    },
    Accidental {
        offset: 3,
        verbose: "triple sharp",
        unicode: "𝄪♯",
        ascii: "###",
        lilypond: "isisis",
    },
    Accidental {
        offset: 4,
        verbose: "quadruple sharp",
        unicode: "𝄪𝄪",
        ascii: "####",
        lilypond: "isisisis",
    },
];

/// Get the major-scale row of the degree.
///
/// # Example
/// ```
/// # use tonal_algebra::tables::{diatone, QualityAxis};
/// let fifth = diatone(4).unwrap();
/// assert_eq!(fifth.chromatic, 7);
/// assert_eq!(fifth.axis, QualityAxis::Perfect);
/// assert!(diatone(7).is_err());
/// ```
pub fn diatone(degree: i32) -> TonalResult<&'static Diatone> {
    usize::try_from(degree)
        .ok()
        .and_then(|idx| DIATONES.get(idx))
        .ok_or(TonalError::Lookup {
            table: "diatone",
            index: degree,
        })
}

pub fn accidental(offset: i32) -> TonalResult<&'static Accidental> {
    if offset.abs() > MAX_ACCIDENTAL_OFFSET {
        return Err(TonalError::Lookup {
            table: "accidental",
            index: offset,
        });
    }
    Ok(&ACCIDENTALS[(offset + MAX_ACCIDENTAL_OFFSET) as usize])
}

/// Halfsteps between the chromatic value and the natural value of the
/// degree, corrected for the octave break.
///
/// Both the interval quality and the pitch accidental are derived from this
/// value, so B♯ (6, 0) is one halfstep above B rather than eleven below.
///
/// # Example
/// ```
/// # use tonal_algebra::tables::accidental_offset;
/// assert_eq!(accidental_offset(0, 1).unwrap(), 1); // C♯
/// assert_eq!(accidental_offset(0, 11).unwrap(), -1); // C♭
/// assert_eq!(accidental_offset(6, 0).unwrap(), 1); // B♯
/// ```
pub fn accidental_offset(degree: i32, chromatic: i32) -> TonalResult<i32> {
    Ok(offset_from_natural(diatone(degree)?.chromatic, chromatic))
}

pub(crate) fn offset_from_natural(natural: i32, chromatic: i32) -> i32 {
    let modifier = chromatic - natural;
    if modifier.abs() <= MAX_ACCIDENTAL_OFFSET {
        return modifier;
    }
    let natural = match chromatic < natural {
        true => natural - C_LEN,
        false => natural + C_LEN,
    };
    chromatic - natural
}
