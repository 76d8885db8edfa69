use std::{
    cmp::Ordering,
    fmt::Display,
    hash::Hash,
    ops::{Add, Neg, Sub},
    str::FromStr,
};

use crate::{
    arithmetic,
    tables::{Diatone, DIATONES},
    TonalError, TonalResult,
};

use super::{
    interval::Interval,
    pitch::{parse_pitch, Pitch},
    registry::Registry,
    TonalTuple,
};

/// Interned, normalized tonal tuple.
///
/// The same value serves as a pitch (distance from middle C) and as an
/// interval. Construction normalizes the tuple and looks it up in the
/// [`Registry`], so equal values share one instance and the handle is
/// `Copy`.
///
/// # Example
/// ```
/// use tonal_algebra::TonalValue;
///
/// let e = TonalValue::new(2, 4);
/// let g = TonalValue::from((11, 19)); // normalized to (4, 7)
/// assert_eq!(g, (4, 7));
/// assert_eq!((e + (2, 3)).unwrap(), g);
/// assert!(e < g);
/// assert_eq!(g.distance(e), (2, 3));
/// assert_eq!(g.pitch().unicode().unwrap(), "G");
/// assert_eq!(TonalValue::qualified(3, 6, 1).interval().unwrap().abbr(), "aug4+1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TonalValue(&'static TonalTuple);
impl TonalValue {
    pub fn new(d: i32, c: i32) -> Self {
        Self::from_tuple(TonalTuple::new(d, c))
    }
    pub fn qualified(d: i32, c: i32, o: i32) -> Self {
        Self::from_tuple(TonalTuple::qualified(d, c, o))
    }
    pub fn from_tuple(tuple: TonalTuple) -> Self {
        Self(Registry::global().intern(arithmetic::modulo(tuple)))
    }

    pub fn tuple(&self) -> TonalTuple {
        *self.0
    }
    pub fn d(&self) -> i32 {
        self.0.d
    }
    pub fn c(&self) -> i32 {
        self.0.c
    }
    pub fn o(&self) -> Option<i32> {
        self.0.o
    }
    pub fn arity(&self) -> usize {
        self.0.arity()
    }
    pub fn is_qualified(&self) -> bool {
        self.0.is_qualified()
    }
    /// Whether both handles point to the same interned tuple.
    pub fn is_same(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }

    pub fn diatone(&self) -> &'static Diatone {
        &DIATONES[self.0.d as usize]
    }

    pub fn invert(&self, pivot: impl Into<TonalTuple>) -> Self {
        Self::from_tuple(arithmetic::invert(*self.0, pivot))
    }
    pub fn inversion(&self) -> Self {
        Self::from_tuple(arithmetic::inversion(*self.0))
    }
    /// Smallest interval between the two values.
    pub fn distance(&self, other: impl Into<TonalTuple>) -> Self {
        Self::from_tuple(arithmetic::abs_diff(*self.0, other))
    }
    /// `other`, placed in the octave closest to `self`.
    pub fn nearest_instance(&self, other: impl Into<TonalTuple>) -> Self {
        Self::from_tuple(arithmetic::nearest_instance(*self.0, other))
    }
    pub fn signed_halfsteps(&self) -> i32 {
        arithmetic::to_signed_halfsteps(*self.0)
    }
    pub fn abs_halfsteps(&self) -> i32 {
        arithmetic::abs_halfsteps(*self.0)
    }

    pub fn pitch(&self) -> Pitch {
        Pitch::new(*self)
    }
    /// Fails if the chromatic value is too far from the degree to be named.
    pub fn interval(&self) -> TonalResult<Interval> {
        Interval::new(*self)
    }

    /// Flat encoding: `[d, c]` or `[d, c, o]`.
    pub fn to_array(&self) -> Vec<i32> {
        self.0.to_vec()
    }
}

impl From<TonalTuple> for TonalValue {
    fn from(value: TonalTuple) -> Self {
        Self::from_tuple(value)
    }
}
impl From<(i32, i32)> for TonalValue {
    fn from(value: (i32, i32)) -> Self {
        Self::from_tuple(value.into())
    }
}
impl From<(i32, i32, i32)> for TonalValue {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::from_tuple(value.into())
    }
}
impl From<TonalValue> for TonalTuple {
    fn from(value: TonalValue) -> Self {
        *value.0
    }
}
impl TryFrom<&[i32]> for TonalValue {
    type Error = TonalError;
    fn try_from(value: &[i32]) -> TonalResult<Self> {
        TonalTuple::try_from(value).map(Self::from_tuple)
    }
}
impl TryFrom<Vec<i32>> for TonalValue {
    type Error = TonalError;
    fn try_from(value: Vec<i32>) -> TonalResult<Self> {
        Self::try_from(value.as_slice())
    }
}
impl FromStr for TonalValue {
    type Err = TonalError;
    /// Parse a pitch name, like `C`, `f#`, `Db4` or `B♭-1`.
    ///
    /// Octave numbers count from middle C as 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pitch(s, &Default::default())
    }
}

impl<T: Into<TonalTuple>> Add<T> for TonalValue {
    type Output = TonalResult<TonalValue>;
    fn add(self, rhs: T) -> Self::Output {
        arithmetic::sum(*self.0, rhs).map(Self::from_tuple)
    }
}
impl<T: Into<TonalTuple>> Sub<T> for TonalValue {
    type Output = TonalResult<TonalValue>;
    fn sub(self, rhs: T) -> Self::Output {
        arithmetic::diff(*self.0, rhs).map(Self::from_tuple)
    }
}
impl Neg for TonalValue {
    type Output = TonalValue;
    fn neg(self) -> Self::Output {
        Self::from_tuple(arithmetic::negate(*self.0))
    }
}

impl PartialEq for TonalValue {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other) || self.0 == other.0
    }
}
impl Eq for TonalValue {}
impl Hash for TonalValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
/// Raw tuples are compared in their normalized form.
impl PartialEq<TonalTuple> for TonalValue {
    fn eq(&self, other: &TonalTuple) -> bool {
        *self.0 == arithmetic::modulo(*other)
    }
}
impl PartialEq<(i32, i32)> for TonalValue {
    fn eq(&self, other: &(i32, i32)) -> bool {
        *self == TonalTuple::from(*other)
    }
}
impl PartialEq<(i32, i32, i32)> for TonalValue {
    fn eq(&self, other: &(i32, i32, i32)) -> bool {
        *self == TonalTuple::from(*other)
    }
}
/// Integers are signed halfsteps.
impl PartialEq<i32> for TonalValue {
    fn eq(&self, other: &i32) -> bool {
        self.signed_halfsteps() == *other
    }
}

/// Higher is greater. Enharmonic equivalents are ordered by degree, so
/// D♭ is above C♯.
///
/// Equal heights of values with and without octave are incomparable.
impl PartialOrd for TonalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_tuples(*self.0, *other.0)
    }
}

fn compare_tuples(x: TonalTuple, y: TonalTuple) -> Option<Ordering> {
    let ordering = (arithmetic::to_signed_halfsteps(x), x.d)
        .cmp(&(arithmetic::to_signed_halfsteps(y), y.d));
    match ordering {
        Ordering::Equal if x.arity() != y.arity() => None,
        ordering => Some(ordering),
    }
}
impl PartialOrd<TonalTuple> for TonalValue {
    fn partial_cmp(&self, other: &TonalTuple) -> Option<Ordering> {
        compare_tuples(*self.0, arithmetic::modulo(*other))
    }
}
impl PartialOrd<(i32, i32)> for TonalValue {
    fn partial_cmp(&self, other: &(i32, i32)) -> Option<Ordering> {
        self.partial_cmp(&TonalTuple::from(*other))
    }
}
impl PartialOrd<(i32, i32, i32)> for TonalValue {
    fn partial_cmp(&self, other: &(i32, i32, i32)) -> Option<Ordering> {
        self.partial_cmp(&TonalTuple::from(*other))
    }
}
impl PartialOrd<i32> for TonalValue {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        Some(self.signed_halfsteps().cmp(other))
    }
}

impl Display for TonalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.pitch().unicode() {
            Ok(spelling) => write!(f, "{} # {}", self.0, spelling),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::TonalValue;
    use crate::{primitives::TonalTuple, TonalError};

    #[test]
    fn interning() {
        let a = TonalValue::new(2, 4);
        let b = TonalValue::from((9, 16));
        let c = TonalValue::try_from(vec![2, 4]).unwrap();
        assert!(a.is_same(&b));
        assert!(a.is_same(&c));
        let qualified = TonalValue::qualified(2, 4, 0);
        assert!(!a.is_same(&qualified));
        assert_ne!(a, qualified);
        assert_eq!(
            TonalValue::try_from(&[1][..]),
            Err(TonalError::InvalidLength(1))
        );
    }

    #[test]
    fn operators() {
        let c = TonalValue::qualified(0, 0, 0);
        let b = (c - (0, 1)).unwrap();
        assert_eq!(b, (0, 11, 0));
        assert_eq!(b, -1);
        assert_eq!((b + (0, 1)).unwrap(), c);
        assert_eq!(-TonalValue::new(2, 4), (5, 8));
        assert!(matches!(
            TonalValue::new(0, 0) + (0, 0, 1),
            Err(TonalError::Arity { .. })
        ));
        assert_eq!(TonalValue::new(2, 4).inversion(), (5, 8));
        assert_eq!(TonalValue::new(4, 7).invert((2, 4)), (0, 1));
        assert_eq!(c.nearest_instance((6, 11, 3)), (6, 11, -1));
    }

    #[test]
    fn ordering() {
        let c_sharp = TonalValue::qualified(0, 1, 0);
        let d_flat = TonalValue::qualified(1, 1, 0);
        assert!(d_flat > c_sharp);
        assert_eq!(c_sharp, 1);
        assert_eq!(d_flat, 1);
        assert!(c_sharp > 0);
        assert!(c_sharp < 2);
        let abstract_c = TonalValue::new(0, 0);
        let middle_c = TonalValue::qualified(0, 0, 0);
        assert_eq!(abstract_c.partial_cmp(&middle_c), None);
        assert!(TonalValue::qualified(6, 11, -1) < middle_c);
    }

    #[test]
    fn ordering_against_raw_tuples() {
        let e = TonalValue::qualified(2, 4, 1);
        assert!(!(e > (3, 5, 1)));
        assert!(e < (3, 5, 1));
        assert!(e > (2, 3, 1));
        // raw tuples are normalized before comparing
        assert!(e <= (9, 16, 0));
        assert!(!(e < (9, 16, 0)));
        assert!(TonalValue::new(1, 1) > (0, 1));
        assert!(TonalValue::new(0, 1) >= TonalTuple::new(7, 13));
        assert_eq!(TonalValue::new(0, 0).partial_cmp(&(0, 0, 0)), None);
    }

    #[test]
    fn hashing() {
        let set: HashSet<TonalValue> = [(0, 0), (7, 12), (2, 4)]
            .into_iter()
            .map(TonalValue::from)
            .collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&TonalValue::new(0, 0)));
    }

    #[test]
    fn raw_tuple_equality() {
        let g = TonalValue::new(4, 7);
        assert_eq!(g, TonalTuple::new(11, 19));
        assert_eq!(g.to_array(), vec![4, 7]);
        assert_eq!(TonalValue::qualified(4, 7, 1).to_array(), vec![4, 7, 1]);
    }

    #[test]
    fn display() {
        assert_eq!(TonalValue::qualified(1, 1, 0).to_string(), "(1, 1, 0) # D♭0");
        assert_eq!(TonalValue::new(0, 1).to_string(), "(0, 1) # C♯");
        // too far from the natural to be spelled
        assert_eq!(TonalValue::new(0, 6).to_string(), "(0, 6)");
    }
}
