use thiserror::Error;

use crate::interval::Interval;

/// The ways interval construction and division can fail.
///
/// Every variant is recoverable by the caller; none is process-fatal.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum Error {
    /// A bound argument was not-a-number.
    #[error("interval bound is NaN")]
    NaN,
    /// The requested bounds and endpoint mode describe the empty set.
    #[error("interval is empty")]
    Empty,
    /// A closed endpoint of infinite value was requested.
    #[error("interval has a closed endpoint at infinity")]
    ClosedAtInfinity,
    /// Division by the degenerate interval `[0, 0]`.
    #[error("division by [0, 0]")]
    DivByZero,
    /// The exact quotient is a union of two disjoint unbounded
    /// intervals, which a single interval cannot represent.
    ///
    /// This signals loss of precision rather than invalid input: the
    /// carried `enclosure` is a valid superset of the exact result, and
    /// callers that need a tight answer must detect this case, for
    /// example by splitting the denominator at zero.
    #[error("quotient is a union of disjoint unbounded intervals; {enclosure} encloses it")]
    DisjointUnion {
        /// A safe superset of the exact quotient.
        enclosure: Interval,
    },
}
