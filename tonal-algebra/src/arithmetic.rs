//! Add, subtract, invert and compare tonal tuples.
//!
//! Functions operate on [`TonalTuple`]: `d` is the diatonic degree, `c` the
//! chromatic value and the optional `o` an octave. Both moduli wrap
//! independently: only the diatonic overflow is carried into the octave.
//!
//! Everything that measures or compares normalizes its arguments first, so
//! only [`sum`] and [`diff`] can fail (on an arity mismatch).
//!
//! # Examples
//!
//! ```
//! use tonal_algebra::arithmetic::{diff, invert, modulo, sum};
//! use tonal_algebra::primitives::TonalTuple;
//!
//! assert_eq!(sum((0, 0), (2, 3)).unwrap(), (2, 3));
//! assert_eq!(sum((3, 6), (4, 6)).unwrap(), (0, 0));
//! assert_eq!(sum((6, 11, 1), (2, 4)).unwrap(), (1, 3, 2));
//! assert!(sum((0, 0), (2, 3, 0)).is_err());
//!
//! assert_eq!(diff((0, 0, 0), (1, 1)).unwrap(), (6, 11, -1));
//! assert_eq!(modulo(TonalTuple::new(-1, -1)), (6, 11));
//!
//! // The inversion of a major third is a minor sixth.
//! assert_eq!(invert((2, 4), (0, 0)), (5, 8));
//! ```

use crate::{
    primitives::TonalTuple,
    tables::{C_LEN, DIATONES, D_LEN},
    TonalError, TonalResult,
};

/// Beyond this many halfsteps from the natural value, a qualified tuple is
/// read as belonging to the neighbouring octave when counting halfsteps.
pub const ENHARMONIC_SPELLING_THRESHOLD: i32 = 3;
/// Beyond this many halfsteps from the natural value, [`unmodulo`] moves the
/// chromatic value by an octave.
pub const WRAPAROUND_THRESHOLD: i32 = 6;

/// Natural chromatic value of a degree, which has to be normalized.
fn natural(d: i32) -> i32 {
    DIATONES[d.rem_euclid(D_LEN) as usize].chromatic
}

/// `x + y`, the shorter operand padded with zeros.
///
/// Fails if `x` is shorter than `y`: an octave can not be added to an
/// abstract value.
pub fn sum(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> TonalResult<TonalTuple> {
    let (x, y) = (x.into(), y.into());
    if x.arity() < y.arity() {
        return Err(TonalError::Arity {
            expected: x.arity(),
            found: y.arity(),
        });
    }
    Ok(padded_sum(x, y))
}

/// `x.arity() >= y.arity()` is on the caller.
fn padded_sum(x: TonalTuple, y: TonalTuple) -> TonalTuple {
    let o = x.o.map(|o| o + y.o.unwrap_or(0));
    modulo(TonalTuple {
        d: x.d + y.d,
        c: x.c + y.c,
        o,
    })
}

/// `x - y`.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::diff;
/// assert_eq!(diff((0, 1), (1, 1)).unwrap(), (6, 0));
/// assert_eq!(diff((0, 1, 0), (6, 10, -1)).unwrap(), (1, 3, 0));
/// assert_eq!(diff((0, 0, 0), (0, 10, 0)).unwrap(), (0, 2, 0));
/// ```
pub fn diff(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> TonalResult<TonalTuple> {
    sum(x, negate(y))
}

/// Interval moving downward.
pub fn negate(x: impl Into<TonalTuple>) -> TonalTuple {
    let x = x.into();
    TonalTuple {
        d: -x.d,
        c: -x.c,
        o: x.o.map(|o| -o),
    }
}

/// Fold `d` into `0..7` and `c` into `0..12`, carrying the diatonic
/// overflow into the octave (if any).
pub fn modulo(x: impl Into<TonalTuple>) -> TonalTuple {
    let x = x.into();
    if (0..D_LEN).contains(&x.d) && (0..C_LEN).contains(&x.c) {
        return x;
    }
    let octaves = x.d.div_euclid(D_LEN);
    TonalTuple {
        d: x.d.rem_euclid(D_LEN),
        c: x.c.rem_euclid(C_LEN),
        o: x.o.map(|o| o + octaves),
    }
}

/// Give both tuples an octave if any of them has one.
pub fn qualify_as_needed(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> (TonalTuple, TonalTuple) {
    let (x, y) = (x.into(), y.into());
    match (x.o, y.o) {
        (Some(_), None) => (x, y.with_octave(0)),
        (None, Some(_)) => (x.with_octave(0), y),
        _ => (x, y),
    }
}

/// The value which is as far below `pivot` as `x` is above it.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::invert;
/// // Tritone stays a tritone, under another name.
/// assert_eq!(invert((3, 6), (0, 0)), (4, 6));
/// // G is a minor third above E, C♯ is a minor third below.
/// assert_eq!(invert((4, 7), (2, 4)), (0, 1));
/// assert_eq!(invert((0, 1, 0), (0, 0)), (0, 11, 0));
/// ```
pub fn invert(
    x: impl Into<TonalTuple>,
    pivot: impl Into<TonalTuple>,
) -> TonalTuple {
    let (x, pivot) = qualify_as_needed(x, pivot);
    let interval = padded_sum(x, negate(pivot));
    padded_sum(pivot, negate(interval))
}

/// Inversion over the origin: the usual interval inversion.
pub fn inversion(x: impl Into<TonalTuple>) -> TonalTuple {
    invert(x, TonalTuple::new(0, 0))
}

/// Same tuple, with the chromatic value moved by an octave when it lies
/// more than a tritone away from the natural value of the degree.
///
/// Results may leave `0..12`, which keeps comparisons free of wraparound.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::unmodulo;
/// assert_eq!(unmodulo((0, 10, 0)), (0, -2, 0));
/// assert_eq!(unmodulo((6, 0, 0)), (6, 12, 0));
/// assert_eq!(unmodulo((2, 0)), (2, 0));
/// ```
pub fn unmodulo(x: impl Into<TonalTuple>) -> TonalTuple {
    let mut x = modulo(x);
    let offset = x.c - natural(x.d);
    if offset > WRAPAROUND_THRESHOLD {
        x.c -= C_LEN;
    } else if offset < -WRAPAROUND_THRESHOLD {
        x.c += C_LEN;
    }
    x
}

/// Directed distance in halfsteps from the origin (middle C).
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::to_signed_halfsteps;
/// assert_eq!(to_signed_halfsteps((4, 7)), 7);
/// assert_eq!(to_signed_halfsteps((4, 7, 2)), 31);
/// assert_eq!(to_signed_halfsteps((6, 11, -1)), -1);
/// assert_eq!(to_signed_halfsteps((0, -1, -1)), -13);
/// assert_eq!(to_signed_halfsteps((6, 0, 0)), 12); // B♯
/// assert_eq!(to_signed_halfsteps((0, 11, 0)), -1); // C♭
/// assert_eq!(to_signed_halfsteps((0, 11)), -1);
/// ```
pub fn to_signed_halfsteps(x: impl Into<TonalTuple>) -> i32 {
    let x = modulo(x);
    let octave = match x.o {
        None => return unmodulo(x).c,
        Some(o) => o,
    };
    let offset = x.c - natural(x.d);
    // One correction at most: an offset of +4 reads as -8, so C quadruple
    // sharp sits below the C of its own octave.
    let c = if offset > ENHARMONIC_SPELLING_THRESHOLD {
        x.c - C_LEN
    } else if offset < -ENHARMONIC_SPELLING_THRESHOLD {
        x.c + C_LEN
    } else {
        x.c
    };
    c + octave * C_LEN
}

/// Undirected distance in halfsteps from the origin.
pub fn abs_halfsteps(x: impl Into<TonalTuple>) -> i32 {
    to_signed_halfsteps(x).abs()
}

/// The higher pitch.
///
/// On equal halfsteps the larger degree is higher: a diminished fifth sits
/// above an augmented fourth.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::higher_of;
/// assert_eq!(higher_of((0, 0, 0), (0, 11, -1)), (0, 0, 0));
/// assert_eq!(higher_of((1, 1), (1, 3)), (1, 3));
/// assert_eq!(higher_of((3, 6), (4, 6)), (4, 6));
/// ```
pub fn higher_of(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> TonalTuple {
    let (x, y) = (modulo(x), modulo(y));
    let (a, b) = (to_signed_halfsteps(x), to_signed_halfsteps(y));
    if a == b {
        return match x.d > y.d {
            true => x,
            false => y,
        };
    }
    match a > b {
        true => x,
        false => y,
    }
}

/// The lower pitch.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::lower_of;
/// assert_eq!(lower_of((0, 0, 0), (0, 11, -1)), (0, 11, -1));
/// assert_eq!(lower_of((0, 1, 0), (0, 10, 0)), (0, 10, 0));
/// assert_eq!(lower_of((3, 6), (4, 6)), (3, 6));
/// ```
pub fn lower_of(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> TonalTuple {
    let (x, y) = (modulo(x), modulo(y));
    let (a, b) = (to_signed_halfsteps(x), to_signed_halfsteps(y));
    if a == b {
        return match x.d < y.d {
            true => x,
            false => y,
        };
    }
    match a < b {
        true => x,
        false => y,
    }
}

/// The larger interval, regardless of direction.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::{larger_of, smaller_of};
/// assert_eq!(larger_of((1, 1), (2, 3)), (2, 3));
/// assert_eq!(smaller_of((1, 1), (2, 3)), (1, 1));
/// ```
pub fn larger_of(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> TonalTuple {
    let (x, y) = (modulo(x), modulo(y));
    let (a, b) = (abs_halfsteps(x), abs_halfsteps(y));
    if a == b {
        return match x.d.abs() > y.d.abs() {
            true => x,
            false => y,
        };
    }
    match a > b {
        true => x,
        false => y,
    }
}

pub fn smaller_of(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> TonalTuple {
    let (x, y) = (modulo(x), modulo(y));
    match x == larger_of(x, y) {
        true => y,
        false => x,
    }
}

/// The smaller of an interval and its inversion.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::abs_interval;
/// assert_eq!(abs_interval((4, 7)), (3, 5));
/// assert_eq!(abs_interval((6, 11, -1)), (1, 1, 0));
/// assert_eq!(abs_interval((1, 1, 0)), (1, 1, 0));
/// assert_eq!(abs_interval((6, 0, -1)), (1, 0, 0));
/// assert_eq!(abs_interval((0, 11, 0)), (0, 1, 0));
/// ```
pub fn abs_interval(x: impl Into<TonalTuple>) -> TonalTuple {
    let x = modulo(x);
    let y = inversion(x);
    if let (Some(x_octave), Some(y_octave)) = (x.o, y.o) {
        if x_octave < 0 {
            return y;
        }
        if y_octave < 0 {
            return x;
        }
        if x_octave != 0 || y_octave != 0 {
            return lower_of(x, y);
        }
    }
    if x.d == y.d {
        if unmodulo(x).c < 0 {
            return y;
        }
        if unmodulo(y).c < 0 {
            return x;
        }
    }
    lower_of(x, y)
}

/// Smallest interval between two tuples.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::abs_diff;
/// assert_eq!(abs_diff((0, 0), (5, 9)), (2, 3));
/// assert_eq!(abs_diff((0, 0, 0), (6, 11, -1)), (1, 1, 0));
/// assert_eq!(abs_diff((6, 0, 0), (0, 0, 1)), (1, 0, 0));
/// assert_eq!(abs_diff((0, 0, 0), (0, 11, -1)), (0, 1, 1));
/// assert_eq!(abs_diff((0, 0), (0, 11)), (0, 1));
/// assert_eq!(abs_diff((1, 3), (3, 3)), (2, 0));
/// ```
pub fn abs_diff(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> TonalTuple {
    let (x, y) = qualify_as_needed(x, y);
    let a = abs_interval(padded_sum(x, negate(y)));
    let b = abs_interval(padded_sum(y, negate(x)));
    lower_of(a, b)
}

/// Smallest number of halfsteps between two tuples.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::abs_int_diff;
/// assert_eq!(abs_int_diff((0, 1, 0), (0, 11, 0)), 2);
/// assert_eq!(abs_int_diff((0, 1, 0), (6, 11, -1)), 2);
/// assert_eq!(abs_int_diff((0, 0), (4, 7)), 5);
/// ```
pub fn abs_int_diff(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> i32 {
    let (x, y) = qualify_as_needed(x, y);
    match x.is_qualified() {
        true => (to_signed_halfsteps(x) - to_signed_halfsteps(y)).abs(),
        false => abs_halfsteps(abs_diff(x, y)),
    }
}

/// `y`, moved to the octave which puts it closest to `x`.
///
/// If `x` has no octave, `y` is returned without one.
///
/// # Example
/// ```
/// # use tonal_algebra::arithmetic::nearest_instance;
/// assert_eq!(nearest_instance((0, 0, 0), (1, 2, -1)), (1, 2, 0));
/// assert_eq!(nearest_instance((0, 1, 1), (6, 10, -3)), (6, 10, 0));
/// assert_eq!(nearest_instance((0, 0, 0), (6, 11, 3)), (6, 11, -1));
/// assert_eq!(nearest_instance((0, 0), (6, 11, -1)), (6, 11));
/// ```
pub fn nearest_instance(
    x: impl Into<TonalTuple>,
    y: impl Into<TonalTuple>,
) -> TonalTuple {
    let (x, y) = (modulo(x), modulo(y).without_octave());
    let octave = match x.o {
        None => return y,
        Some(o) => o,
    };
    let candidates = [octave, octave - 1, octave + 1].map(|o| y.with_octave(o));
    let mut nearest = candidates[0];
    let mut distance = abs_int_diff(x, nearest);
    // on equal distance the later candidate wins
    for candidate in candidates.into_iter().skip(1) {
        let candidate_distance = abs_int_diff(x, candidate);
        if candidate_distance <= distance {
            nearest = candidate;
            distance = candidate_distance;
        }
    }
    nearest
}
