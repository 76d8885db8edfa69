use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    primitives::{Interval, Pitch},
    TonalResult,
};

/// Octave numbering of unicode and ASCII spellings.
///
/// Tonal values count octaves from middle C as 0. Spellings add
/// `middle_c_octave`, so scientific pitch notation uses 4.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellingSettings {
    pub middle_c_octave: i32,
}
impl SpellingSettings {
    pub fn new(middle_c_octave: i32) -> Self {
        Self { middle_c_octave }
    }
    /// Middle C is C4.
    pub fn c4() -> Self {
        Self::new(4)
    }
}
impl Default for SpellingSettings {
    fn default() -> Self {
        Self::new(0)
    }
}

pub trait RendersToLilypond {
    fn render_lilypond(&self) -> TonalResult<String>;
}

impl RendersToLilypond for Pitch {
    fn render_lilypond(&self) -> TonalResult<String> {
        self.lilypond_absolute()
    }
}

/// The pitch reached from middle C.
impl RendersToLilypond for Interval {
    fn render_lilypond(&self) -> TonalResult<String> {
        self.value().pitch().lilypond_absolute()
    }
}

/// Render pitches as a `\relative` music expression.
///
/// # Example
/// ```
/// # use tonal_algebra::{lilypond_render::render_relative, TonalValue};
/// let melody: Vec<_> = [(0, 0, 0), (4, 7, 0), (3, 5, 0), (0, 0, 1)]
///     .into_iter()
///     .map(|t| TonalValue::from(t).pitch())
///     .collect();
/// assert_eq!(render_relative(&melody).unwrap(), r"\relative { c' g' f c' }");
/// ```
pub fn render_relative(pitches: &[Pitch]) -> TonalResult<String> {
    let mut previous: Option<Pitch> = None;
    let mut rendered = Vec::with_capacity(pitches.len());
    for pitch in pitches {
        rendered.push(pitch.lilypond_relative(previous)?);
        if pitch.value().is_qualified() {
            previous = Some(*pitch);
        }
    }
    Ok(format!(r"\relative {{ {} }}", rendered.iter().join(" ")))
}
