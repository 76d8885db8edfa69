//! Values, from which everything else is spelled.
//!
//! A [`TonalTuple`] is the raw `(d, c, o?)` triple the arithmetic works on.
//! A [`TonalValue`] is its interned, normalized handle, which can be viewed
//! as a [`Pitch`] or as an [`Interval`].

pub mod interval;
pub mod pitch;
pub mod registry;
pub mod tuple;
pub mod value;

pub use interval::{parse_interval, Interval};
pub use pitch::{parse_pitch, Pitch};
pub use registry::Registry;
pub use tuple::TonalTuple;
pub use value::TonalValue;
