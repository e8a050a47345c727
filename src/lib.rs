//! Floating-point interval arithmetic and set operations.
//!
//! Define intervals with [`Interval::new`] and [`Interval::degenerate`]:
//!
//! ```
//! use interval::{Ends, Interval};
//!
//! let unit = Interval::new(0.0, 1.0, Ends::Closed)?;
//! let nonneg = Interval::new(0.0, f64::INFINITY, Ends::LeftClosed)?;
//! let three = Interval::degenerate(-3.0)?;
//! assert_eq!(nonneg.to_string(), "[0.0, +Inf)");
//! assert!(nonneg.contains(0.0));
//! assert_eq!(unit + three, Interval::new(-3.0, -2.0, Ends::Closed)?);
//! # Ok::<(), interval::Error>(())
//! ```
//!
//! The arithmetic operations are based on Hickey, Ju, and van Emden,
//! "Interval Arithmetic: from Principles to Implementation", in
//! particular their definition of the "functional division" operation.
//! Addition, subtraction, and multiplication of non-empty intervals
//! yield non-empty interval results. Division is undefined when the
//! denominator is `[0, 0]` and results in a union of disjoint unbounded
//! intervals when the denominator straddles zero but the numerator does
//! not (see [`Error::DisjointUnion`]). Otherwise, when both arguments
//! are non-empty intervals, division yields a single non-empty interval
//! result, which may be unbounded. Set operations on intervals are
//! defined when the operands overlap or touch. Operations on empty
//! intervals are semantically undefined and yield an empty interval
//! result.
//!
//! Endpoint computations use default hardware rounding, so a result
//! interval may not strictly enclose the exact mathematical result.

#![warn(clippy::pedantic)]
#![expect(clippy::must_use_candidate)]
#![expect(clippy::return_self_not_must_use)]
#![expect(clippy::float_cmp)]
#![expect(clippy::comparison_chain)]

mod arith;
mod ends;
mod error;
mod interval;

pub use crate::ends::Ends;
pub use crate::error::Error;
pub use crate::interval::Interval;
