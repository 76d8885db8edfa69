use std::cmp::Ordering;

use itertools::Itertools;

use crate::{
    lilypond_render::SpellingSettings,
    tables::{
        accidental, offset_from_natural, Accidental, C_LEN, DIATONES,
        MAX_ACCIDENTAL_OFFSET,
    },
    TonalError, TonalResult,
};

use super::{TonalTuple, TonalValue};

/// Largest diatonic step, which LilyPond relative mode takes without
/// octave marks.
const RELATIVE_STEP: i32 = 3;

/// Tonal value, read as a distance from middle C and spelled as a note
/// name.
///
/// # Example
/// ```
/// use tonal_algebra::TonalValue;
///
/// let b_flat = TonalValue::qualified(6, 10, -1).pitch();
/// assert_eq!(b_flat.letter(), 'B');
/// assert_eq!(b_flat.modifier(), -1);
/// assert_eq!(b_flat.unicode().unwrap(), "B♭-1");
/// assert_eq!(b_flat.ascii_c4().unwrap(), "Bb3");
/// assert_eq!(b_flat.lilypond_absolute().unwrap(), "bes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    value: TonalValue,
}
impl Pitch {
    pub fn new(value: TonalValue) -> Self {
        Self { value }
    }
    pub fn value(&self) -> TonalValue {
        self.value
    }

    pub fn letter(&self) -> char {
        self.value.diatone().letter.to_ascii_uppercase()
    }
    /// Halfsteps from the natural, with B♯ and C♭ resolved over the octave
    /// break.
    pub fn modifier(&self) -> i32 {
        offset_from_natural(self.value.diatone().chromatic, self.value.c())
    }
    pub fn accidental(&self) -> TonalResult<&'static Accidental> {
        accidental(self.modifier())
    }
    /// Moveable-do syllable. Only single alterations have one.
    pub fn solfege(&self) -> Option<&'static str> {
        self.value.diatone().solfege(self.modifier())
    }
    /// Harmonic function of the degree in the major scale.
    pub fn function(&self) -> &'static str {
        self.value.diatone().function
    }
    pub fn octave_with(&self, settings: &SpellingSettings) -> Option<i32> {
        self.value.o().map(|o| o + settings.middle_c_octave)
    }

    fn spell(
        &self,
        glyph: impl Fn(&Accidental) -> &'static str,
        settings: &SpellingSettings,
    ) -> TonalResult<String> {
        let accidental = self.accidental()?;
        let mut spelling = self.letter().to_string();
        if accidental.offset != 0 {
            spelling.push_str(glyph(accidental));
        }
        if let Some(octave) = self.octave_with(settings) {
            spelling.push_str(&octave.to_string());
        }
        Ok(spelling)
    }

    /// Note name with ♯ and ♭ glyphs. Middle C is C0.
    pub fn unicode(&self) -> TonalResult<String> {
        self.unicode_with(&SpellingSettings::default())
    }
    /// Note name with ♯ and ♭ glyphs. Middle C is C4.
    pub fn unicode_c4(&self) -> TonalResult<String> {
        self.unicode_with(&SpellingSettings::c4())
    }
    pub fn unicode_with(
        &self,
        settings: &SpellingSettings,
    ) -> TonalResult<String> {
        self.spell(|accidental| accidental.unicode, settings)
    }

    /// Note name with `#` and `b`. Middle C is C0.
    pub fn ascii(&self) -> TonalResult<String> {
        self.ascii_with(&SpellingSettings::default())
    }
    /// Note name with `#` and `b`. Middle C is C4.
    pub fn ascii_c4(&self) -> TonalResult<String> {
        self.ascii_with(&SpellingSettings::c4())
    }
    pub fn ascii_with(&self, settings: &SpellingSettings) -> TonalResult<String> {
        self.spell(|accidental| accidental.ascii, settings)
    }

    /// Spelled out words, e.g. `C sharp 1`.
    pub fn verbose(&self) -> TonalResult<String> {
        let accidental = self.accidental()?;
        let words = [
            Some(self.letter().to_string()),
            (accidental.offset != 0).then(|| accidental.verbose.to_string()),
            self.value.o().map(|o| o.to_string()),
        ];
        Ok(words.into_iter().flatten().join(" "))
    }

    /// LilyPond (Dutch) note name, without octave.
    pub fn lilypond(&self) -> TonalResult<String> {
        let letter = self.value.diatone().letter;
        let token = self.accidental()?.lilypond;
        // ees and aes are contracted to es and as
        let token = match letter {
            'e' | 'a' if token.starts_with('e') => &token[1..],
            _ => token,
        };
        Ok(format!("{letter}{token}"))
    }

    /// LilyPond note name with absolute octave marks: octave 0 is `c'`.
    ///
    /// # Example
    /// ```
    /// # use tonal_algebra::TonalValue;
    /// let spell = |d, c, o| TonalValue::qualified(d, c, o).pitch().lilypond_absolute().unwrap();
    /// assert_eq!(spell(0, 0, 0), "c'");
    /// assert_eq!(spell(0, 0, 1), "c''");
    /// assert_eq!(spell(3, 6, 0), "fis'");
    /// assert_eq!(spell(1, 1, -4), "des,,,");
    /// assert_eq!(TonalValue::new(3, 6).pitch().lilypond_absolute().unwrap(), "fis");
    /// ```
    pub fn lilypond_absolute(&self) -> TonalResult<String> {
        let name = self.lilypond()?;
        Ok(match self.value.o() {
            None => name,
            Some(o) => name + &octave_marks(o + 1),
        })
    }

    /// LilyPond note name with octave marks relative to the previous pitch,
    /// as in `\relative` mode.
    ///
    /// Without a previous pitch (or without its octave), the absolute
    /// spelling is returned.
    ///
    /// # Example
    /// ```
    /// # use tonal_algebra::TonalValue;
    /// let c = TonalValue::qualified(0, 0, 0).pitch();
    /// let spell = |d, c_, o| {
    ///     TonalValue::qualified(d, c_, o).pitch().lilypond_relative(c).unwrap()
    /// };
    /// assert_eq!(spell(3, 5, 0), "f");
    /// assert_eq!(spell(4, 7, 0), "g'");
    /// assert_eq!(spell(3, 5, -1), "f,");
    /// assert_eq!(spell(4, 7, -1), "g");
    /// assert_eq!(c.lilypond_relative(None).unwrap(), "c'");
    /// ```
    pub fn lilypond_relative(
        &self,
        previous: impl Into<Option<Pitch>>,
    ) -> TonalResult<String> {
        let octave = match self.value.o() {
            None => return self.lilypond(),
            Some(o) => o,
        };
        let previous = match previous.into() {
            Some(pitch) if pitch.value.is_qualified() => pitch.value,
            _ => return self.lilypond_absolute(),
        };
        let reference = match (self.value.d() - previous.d()).abs() {
            step if step <= RELATIVE_STEP => previous,
            _ => previous.nearest_instance(self.value),
        };
        let reference_octave = reference.o().unwrap_or(octave);
        Ok(self.lilypond()? + &octave_marks(octave - reference_octave))
    }
}
impl From<TonalValue> for Pitch {
    fn from(value: TonalValue) -> Self {
        Self::new(value)
    }
}

fn octave_marks(count: i32) -> String {
    match count.cmp(&0) {
        Ordering::Greater => "'".repeat(count as usize),
        Ordering::Less => ",".repeat(count.unsigned_abs() as usize),
        Ordering::Equal => String::new(),
    }
}

/// Parse a note name: a letter, any number of accidentals (`#`, `b`, `x`,
/// `♯`, `♭`, `𝄪`, `𝄫`, `♮`) and an optional octave number.
///
/// # Example
/// ```
/// # use tonal_algebra::primitives::parse_pitch;
/// # use tonal_algebra::lilypond_render::SpellingSettings;
/// assert_eq!(parse_pitch("Db4", &SpellingSettings::c4()).unwrap(), (1, 1, 0));
/// assert_eq!(parse_pitch("fx", &Default::default()).unwrap(), (3, 7));
/// assert!(parse_pitch("H", &Default::default()).is_err());
/// ```
pub fn parse_pitch(
    text: &str,
    settings: &SpellingSettings,
) -> TonalResult<TonalValue> {
    let error = || TonalError::Parse(text.to_string());
    let trimmed = text.trim();
    let mut chars = trimmed.char_indices();
    let letter = chars
        .next()
        .map(|(_, ch)| ch.to_ascii_lowercase())
        .ok_or_else(error)?;
    let diatone = DIATONES
        .iter()
        .find(|diatone| diatone.letter == letter)
        .ok_or_else(error)?;

    let mut modifier: i32 = 0;
    let mut octave_start = trimmed.len();
    for (idx, ch) in chars {
        modifier += match ch {
            '#' | '♯' => 1,
            'b' | '♭' => -1,
            'x' | '𝄪' => 2,
            '𝄫' => -2,
            '♮' => 0,
            _ => {
                octave_start = idx;
                break;
            }
        };
    }
    if modifier.abs() > MAX_ACCIDENTAL_OFFSET {
        log::debug!("too many accidentals in `{text}`");
        return Err(error());
    }
    let octave = match &trimmed[octave_start..] {
        "" => None,
        number => Some(
            number.parse::<i32>().map_err(|_| error())?
                - settings.middle_c_octave,
        ),
    };
    Ok(TonalValue::from_tuple(TonalTuple {
        d: diatone.degree,
        c: (diatone.chromatic + modifier).rem_euclid(C_LEN),
        o: octave,
    }))
}

#[cfg(test)]
mod tests {
    use super::parse_pitch;
    use crate::{
        lilypond_render::SpellingSettings, TonalError, TonalValue,
    };

    #[test]
    fn spelling() {
        let c_sharp = TonalValue::new(0, 1).pitch();
        assert_eq!(c_sharp.unicode().unwrap(), "C♯");
        assert_eq!(c_sharp.ascii().unwrap(), "C#");
        assert_eq!(c_sharp.verbose().unwrap(), "C sharp");
        assert_eq!(c_sharp.solfege(), Some("di"));
        assert_eq!(c_sharp.function(), "tonic");

        let d_flat = TonalValue::qualified(1, 1, 0).pitch();
        assert_eq!(d_flat.unicode().unwrap(), "D♭0");
        assert_eq!(d_flat.unicode_c4().unwrap(), "D♭4");
        assert_eq!(d_flat.ascii_c4().unwrap(), "Db4");
        assert_eq!(
            d_flat.unicode_with(&SpellingSettings::new(3)).unwrap(),
            "D♭3"
        );
        assert_eq!(d_flat.solfege(), Some("ra"));

        assert_eq!(TonalValue::new(0, 0).pitch().verbose().unwrap(), "C");
        assert_eq!(
            TonalValue::qualified(0, 1, 1).pitch().verbose().unwrap(),
            "C sharp 1"
        );
    }

    #[test]
    fn octave_break() {
        let b_sharp = TonalValue::qualified(6, 0, 0).pitch();
        assert_eq!(b_sharp.modifier(), 1);
        assert_eq!(b_sharp.unicode().unwrap(), "B♯0");
        let c_flat = TonalValue::new(0, 11).pitch();
        assert_eq!(c_flat.modifier(), -1);
        assert_eq!(c_flat.ascii().unwrap(), "Cb");
        let c_double_flat = TonalValue::new(0, 10).pitch();
        assert_eq!(c_double_flat.unicode().unwrap(), "C𝄫");
        assert_eq!(c_double_flat.solfege(), None);
    }

    #[test]
    fn unsupported_accidental() {
        let pitch = TonalValue::new(0, 6).pitch();
        assert_eq!(pitch.modifier(), -6);
        assert_eq!(
            pitch.unicode(),
            Err(TonalError::Lookup {
                table: "accidental",
                index: -6
            })
        );
    }

    #[test]
    fn lilypond_names() {
        let name = |d, c| TonalValue::new(d, c).pitch().lilypond().unwrap();
        assert_eq!(name(0, 1), "cis");
        assert_eq!(name(6, 10), "bes");
        assert_eq!(name(2, 3), "es");
        assert_eq!(name(2, 2), "eses");
        assert_eq!(name(5, 8), "as");
        assert_eq!(name(5, 10), "ais");
        assert_eq!(name(3, 7), "fisis");
    }

    #[test]
    fn parse() {
        let c4 = SpellingSettings::c4();
        let default = SpellingSettings::default();
        assert_eq!(parse_pitch("C", &default).unwrap(), (0, 0));
        assert_eq!(parse_pitch(" c# ", &default).unwrap(), (0, 1));
        assert_eq!(parse_pitch("B♭-1", &default).unwrap(), (6, 10, -1));
        assert_eq!(parse_pitch("bb", &default).unwrap(), (6, 10));
        assert_eq!(parse_pitch("Cb", &default).unwrap(), (0, 11));
        assert_eq!(parse_pitch("B#3", &c4).unwrap(), (6, 0, -1));
        assert_eq!(parse_pitch("E𝄫", &default).unwrap(), (2, 2));
        assert_eq!("G♮1".parse::<TonalValue>().unwrap(), (4, 7, 1));
        assert!(parse_pitch("", &default).is_err());
        assert!(parse_pitch("C#####", &default).is_err());
        assert!(parse_pitch("Cq", &default).is_err());
    }

    #[test]
    fn mixed_accidentals() {
        let default = SpellingSettings::default();
        assert_eq!(parse_pitch("C####", &default).unwrap(), (0, 4));
        assert_eq!(parse_pitch("Fx♭", &default).unwrap(), (3, 6));
        assert_eq!(parse_pitch("E♭♮b2", &default).unwrap(), (2, 2, 2));
        assert!(parse_pitch("Dbbbbb", &default).is_err());
        assert!(parse_pitch("C𝄫𝄫𝄫", &default).is_err());
    }
}
