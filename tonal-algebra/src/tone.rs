use crate::primitives::{Pitch, TonalValue};

/// What a tonal system has to provide to be used by code, which knows
/// nothing about diatonic degrees.
///
/// # Example
/// ```
/// use tonal_algebra::{tone::Tone, TonalValue};
///
/// fn span<T: Tone>(tones: &[T]) -> i32 {
///     let heights = tones.iter().map(|t| t.to_signed_halfsteps());
///     heights.clone().max().unwrap_or(0) - heights.min().unwrap_or(0)
/// }
///
/// let chord = [(0, 0, 0), (2, 4, 0), (4, 7, 0), (0, 0, 1)].map(TonalValue::from);
/// assert_eq!(span(&chord), 12);
/// ```
pub trait Tone {
    type Spelling;

    /// Elements in a value without octave.
    fn abstract_arity() -> usize;
    /// Elements in a value with octave.
    fn qualified_arity() -> usize;

    fn to_signed_halfsteps(&self) -> i32;
    fn spelling(&self) -> Self::Spelling;
    fn to_array(&self) -> Vec<i32>;

    fn is_qualified(&self) -> bool {
        self.to_array().len() == Self::qualified_arity()
    }
}

impl Tone for TonalValue {
    type Spelling = Pitch;

    fn abstract_arity() -> usize {
        2
    }
    fn qualified_arity() -> usize {
        3
    }
    fn to_signed_halfsteps(&self) -> i32 {
        self.signed_halfsteps()
    }
    fn spelling(&self) -> Pitch {
        self.pitch()
    }
    fn to_array(&self) -> Vec<i32> {
        TonalValue::to_array(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Tone;
    use crate::TonalValue;

    fn describe<T: Tone>(tone: &T) -> (usize, i32, bool) {
        (tone.to_array().len(), tone.to_signed_halfsteps(), tone.is_qualified())
    }

    #[test]
    fn tonal_value_is_a_tone() {
        assert_eq!(<TonalValue as Tone>::abstract_arity(), 2);
        assert_eq!(<TonalValue as Tone>::qualified_arity(), 3);
        assert_eq!(describe(&TonalValue::new(6, 11)), (2, -1, false));
        assert_eq!(describe(&TonalValue::qualified(4, 7, 1)), (3, 19, true));
        let spelling = Tone::spelling(&TonalValue::new(2, 3));
        assert_eq!(spelling.unicode().unwrap(), "E♭");
    }
}
