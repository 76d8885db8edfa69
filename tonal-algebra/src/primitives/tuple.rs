use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{TonalError, TonalResult};

/// Raw `(diatonic, chromatic, octave?)` triple.
///
/// Nothing here is normalized: arithmetic produces intermediate tuples that
/// leave the `0..7` / `0..12` ranges, and [`crate::arithmetic::modulo`]
/// folds them back.
#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize,
)]
pub struct TonalTuple {
    pub d: i32,
    pub c: i32,
    pub o: Option<i32>,
}
impl TonalTuple {
    /// Abstract tuple: a pitch class or a simple interval.
    pub const fn new(d: i32, c: i32) -> Self {
        Self { d, c, o: None }
    }
    /// Octave-qualified tuple: a concrete pitch or a compound interval.
    pub const fn qualified(d: i32, c: i32, o: i32) -> Self {
        Self { d, c, o: Some(o) }
    }
    pub fn arity(&self) -> usize {
        match self.o {
            None => 2,
            Some(_) => 3,
        }
    }
    pub fn is_qualified(&self) -> bool {
        self.o.is_some()
    }
    pub fn with_octave(&self, o: i32) -> Self {
        Self::qualified(self.d, self.c, o)
    }
    pub fn without_octave(&self) -> Self {
        Self::new(self.d, self.c)
    }
    pub fn to_vec(&self) -> Vec<i32> {
        match self.o {
            None => vec![self.d, self.c],
            Some(o) => vec![self.d, self.c, o],
        }
    }
}
impl From<(i32, i32)> for TonalTuple {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}
impl From<(i32, i32, i32)> for TonalTuple {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::qualified(value.0, value.1, value.2)
    }
}
impl TryFrom<&[i32]> for TonalTuple {
    type Error = TonalError;
    fn try_from(value: &[i32]) -> TonalResult<Self> {
        match *value {
            [d, c] => Ok(Self::new(d, c)),
            [d, c, o] => Ok(Self::qualified(d, c, o)),
            _ => Err(TonalError::InvalidLength(value.len())),
        }
    }
}
impl TryFrom<Vec<i32>> for TonalTuple {
    type Error = TonalError;
    fn try_from(value: Vec<i32>) -> TonalResult<Self> {
        Self::try_from(value.as_slice())
    }
}
impl PartialEq<(i32, i32)> for TonalTuple {
    fn eq(&self, other: &(i32, i32)) -> bool {
        *self == Self::from(*other)
    }
}
impl PartialEq<(i32, i32, i32)> for TonalTuple {
    fn eq(&self, other: &(i32, i32, i32)) -> bool {
        *self == Self::from(*other)
    }
}
impl Display for TonalTuple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.to_vec().iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::TonalTuple;
    use crate::TonalError;

    #[test]
    fn construction() {
        let a = TonalTuple::from((2, 4));
        assert_eq!(a, TonalTuple::new(2, 4));
        assert_eq!(a.arity(), 2);
        assert!(!a.is_qualified());
        let b = TonalTuple::try_from(vec![2, 4, -1]).unwrap();
        assert_eq!(b, (2, 4, -1));
        assert_eq!(b.without_octave(), a);
        assert_eq!(a.with_octave(-1), b);
        assert_eq!(
            TonalTuple::try_from(&[1, 2, 3, 4][..]),
            Err(TonalError::InvalidLength(4))
        );
    }

    #[test]
    fn display() {
        assert_eq!(TonalTuple::new(0, 11).to_string(), "(0, 11)");
        assert_eq!(TonalTuple::qualified(6, 10, -1).to_string(), "(6, 10, -1)");
    }
}
