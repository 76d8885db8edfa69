//! Algebra of pitches and intervals, which keeps track of both diatonic and
//! chromatic position.
//!
//! Every value is a `(d, c, o?)` tuple: `d` is the degree of the major scale
//! (0 to 6), `c` the chromatic value (0 to 11) and `o` an optional octave.
//! `(2, 3)` is E♭ (or a minor third), `(6, 0, -1)` is the B♯ below middle C.
//! Values without octave are pitch classes (or simple intervals).
//!
//! ```
//! use tonal_algebra::TonalValue;
//!
//! let c = TonalValue::qualified(0, 0, 0);
//! let e_flat = (c + (2, 3)).unwrap();
//! assert_eq!(e_flat.pitch().unicode_c4().unwrap(), "E♭4");
//! assert_eq!(e_flat.signed_halfsteps(), 3);
//!
//! let b_sharp: TonalValue = "B#-1".parse().unwrap();
//! assert_eq!(b_sharp, 0); // enharmonic to middle C
//! assert!(b_sharp > c); // same height, larger degree
//!
//! let g = TonalValue::qualified(4, 7, 0);
//! assert_eq!(c.distance(g).interval().unwrap().label(), "perfect 5");
//! ```

mod error;

pub mod arithmetic;
pub mod lilypond_render;
pub mod primitives;
pub mod quality;
pub mod tables;
pub mod tone;

pub use error::{TonalError, TonalResult};
pub use lilypond_render::{RendersToLilypond, SpellingSettings};
pub use primitives::{Interval, Pitch, TonalTuple, TonalValue};
pub use quality::Quality;
pub use tone::Tone;
