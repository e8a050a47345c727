use std::fmt::{self, Display, Formatter};

use num_traits::{One, Zero};

use crate::ends::Ends;
use crate::error::Error;

/// A subset of the extended real numbers.
///
/// An `Interval` is an immutable pair of (possibly infinite) bounds
/// together with an [`Ends`] describing which of them it contains.
/// Operations never mutate their inputs; each returns a fresh value, so
/// intervals may be freely shared across threads.
///
/// A valid interval built by [`Interval::new`] never has a NaN bound
/// and is never closed at an infinite bound.
#[derive(Clone, Copy, Debug)]
pub struct Interval {
    pub(crate) a: f64,
    pub(crate) b: f64,
    pub(crate) ends: Ends,
}

impl Interval {
    /// Returns an interval with endpoints `a` and `b`.
    ///
    /// Fails with [`Error::NaN`] if either bound is NaN, with
    /// [`Error::Empty`] if the interval would be empty, and with
    /// [`Error::ClosedAtInfinity`] if a bound is infinite and closed on
    /// that side. Bounds are stored exactly as given.
    pub fn new(a: f64, b: f64, ends: Ends) -> Result<Self, Error> {
        if a.is_nan() || b.is_nan() {
            return Err(Error::NaN);
        }
        let iv = Self { a, b, ends };
        if iv.is_empty() {
            return Err(Error::Empty);
        }
        if iv.a == f64::NEG_INFINITY && iv.left_is_closed() {
            return Err(Error::ClosedAtInfinity);
        }
        if iv.b == f64::INFINITY && iv.right_is_closed() {
            return Err(Error::ClosedAtInfinity);
        }
        Ok(iv)
    }

    /// Shorthand for `new(x, x, Ends::Closed)`.
    pub fn degenerate(x: f64) -> Result<Self, Error> {
        Self::new(x, x, Ends::Closed)
    }

    /// The canonical empty interval `(0, 0)`.
    #[inline]
    pub fn empty() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            ends: Ends::Open,
        }
    }

    /// The degenerate interval `[0, 0]`.
    #[inline]
    pub fn zero() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            ends: Ends::Closed,
        }
    }

    /// The whole real line `(-Inf, +Inf)`.
    #[inline]
    pub fn all_reals() -> Self {
        Self {
            a: f64::NEG_INFINITY,
            b: f64::INFINITY,
            ends: Ends::Open,
        }
    }

    /// Returns the left endpoint.
    #[inline]
    pub fn left(&self) -> f64 {
        self.a
    }

    /// Returns the right endpoint.
    #[inline]
    pub fn right(&self) -> f64 {
        self.b
    }

    /// Returns the endpoint mode.
    #[inline]
    pub fn ends(&self) -> Ends {
        self.ends
    }

    /// Reports whether the interval contains no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a > self.b || self.a == self.b && self.ends != Ends::Closed
    }

    /// Reports whether the interval contains at least one positive and
    /// one negative real number.
    #[inline]
    pub fn is_mixed(&self) -> bool {
        self.a < 0.0 && 0.0 < self.b
    }

    /// Reports whether the interval contains exactly one real value.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.a == self.b && self.ends == Ends::Closed
    }

    /// Reports whether the interval is `[0, 0]`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_unit() && self.a == 0.0
    }

    /// Reports whether the interval contains its left endpoint.
    #[inline]
    pub fn left_is_closed(&self) -> bool {
        self.ends.left_is_closed()
    }

    /// Reports whether the interval contains its right endpoint.
    #[inline]
    pub fn right_is_closed(&self) -> bool {
        self.ends.right_is_closed()
    }

    /// Reports whether the interval contains `x`. NaN is never
    /// contained.
    pub fn contains(&self, x: f64) -> bool {
        (self.a < x || self.a == x && self.left_is_closed())
            && (x < self.b || x == self.b && self.right_is_closed())
    }

    /// Returns the intersection of `self` and `other`.
    pub fn intersection(self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        if self == other {
            return self;
        }
        if !self.contains(other.a)
            && !self.contains(other.b)
            && !other.contains(self.a)
            && !other.contains(self.b)
        {
            return Self::empty();
        }
        // Each side keeps the bit of whichever input supplies the
        // binding bound; on a tie the endpoint is closed only if both
        // inputs include it.
        let mut ends = Ends::Open;
        ends = ends
            ^ if self.a < other.a {
                other.ends & Ends::LeftClosed
            } else if self.a == other.a {
                self.ends & other.ends & Ends::LeftClosed
            } else {
                self.ends & Ends::LeftClosed
            };
        ends = ends
            ^ if self.b < other.b {
                self.ends & Ends::RightClosed
            } else if self.b == other.b {
                self.ends & other.ends & Ends::RightClosed
            } else {
                other.ends & Ends::RightClosed
            };
        Self {
            a: self.a.max(other.a),
            b: self.b.min(other.b),
            ends,
        }
    }

    /// Returns the union of `self` and `other` if they overlap or
    /// touch, or else the empty interval.
    ///
    /// A disjoint union is not representable as a single interval; it
    /// degrades to empty rather than signaling an error.
    pub fn union(self, other: Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        if self == other {
            return self;
        }
        if !self.contains(other.a)
            && !self.contains(other.b)
            && !other.contains(self.a)
            && !other.contains(self.b)
        {
            return Self::empty();
        }
        // Mirror image of intersection: the outer bound binds, and a
        // tied endpoint is closed if either input includes it.
        let mut ends = Ends::Open;
        ends = ends
            ^ if self.a < other.a {
                self.ends & Ends::LeftClosed
            } else if self.a == other.a {
                (self.ends | other.ends) & Ends::LeftClosed
            } else {
                other.ends & Ends::LeftClosed
            };
        ends = ends
            ^ if self.b < other.b {
                other.ends & Ends::RightClosed
            } else if self.b == other.b {
                (self.ends | other.ends) & Ends::RightClosed
            } else {
                self.ends & Ends::RightClosed
            };
        Self {
            a: self.a.min(other.a),
            b: self.b.max(other.b),
            ends,
        }
    }
}

impl PartialEq for Interval {
    /// Two intervals are equal if they are both empty or if they
    /// contain exactly the same values.
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            return other.is_empty();
        }
        self.a == other.a && self.b == other.b && self.ends == other.ends
    }
}

impl Zero for Interval {
    #[inline]
    fn zero() -> Self {
        Self::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Interval::is_zero(self)
    }
}

impl One for Interval {
    #[inline]
    fn one() -> Self {
        Self {
            a: 1.0,
            b: 1.0,
            ends: Ends::Closed,
        }
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.is_unit() && self.a == 1.0
    }
}

impl Display for Interval {
    /// Square brackets denote closed endpoints and parentheses denote
    /// open endpoints, e.g. `[0.0, +Inf)` for the non-negative reals.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(if self.left_is_closed() { "[" } else { "(" })?;
        fmt_endpoint(self.a, f)?;
        f.write_str(", ")?;
        fmt_endpoint(self.b, f)?;
        f.write_str(if self.right_is_closed() { "]" } else { ")" })
    }
}

fn fmt_endpoint(x: f64, f: &mut Formatter<'_>) -> fmt::Result {
    if x == f64::INFINITY {
        f.write_str("+Inf")
    } else if x == f64::NEG_INFINITY {
        f.write_str("-Inf")
    } else {
        f.write_str(ryu::Buffer::new().format(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;
    const NEG_INF: f64 = f64::NEG_INFINITY;

    fn iv(a: f64, b: f64, ends: Ends) -> Interval {
        Interval { a, b, ends }
    }

    #[test]
    fn predicates() {
        // (interval, empty, mixed, unit, zero, left closed, right closed)
        let tests = [
            (iv(0.0, 0.0, Ends::Open), true, false, false, false, false, false),
            (iv(0.0, 0.0, Ends::LeftClosed), true, false, false, false, true, false),
            (iv(0.0, 0.0, Ends::RightClosed), true, false, false, false, false, true),
            (iv(0.0, 0.0, Ends::Closed), false, false, true, true, true, true),
            (iv(1.0, 1.0, Ends::Open), true, false, false, false, false, false),
            (iv(1.0, 2.0, Ends::Open), false, false, false, false, false, false),
            (iv(-1.0, 1.0, Ends::Open), false, true, false, false, false, false),
            (iv(1.0, 1.0, Ends::Closed), false, false, true, false, true, true),
            (iv(1.0, 2.0, Ends::Closed), false, false, false, false, true, true),
            (iv(-1.0, 1.0, Ends::Closed), false, true, false, false, true, true),
            (iv(1.0, -1.0, Ends::Closed), true, false, false, false, true, true),
        ];
        for (x, empty, mixed, unit, zero, left, right) in tests {
            assert_eq!(x.is_empty(), empty, "{x}.is_empty()");
            assert_eq!(x.is_mixed(), mixed, "{x}.is_mixed()");
            assert_eq!(x.is_unit(), unit, "{x}.is_unit()");
            assert_eq!(x.is_zero(), zero, "{x}.is_zero()");
            assert_eq!(x.left_is_closed(), left, "{x}.left_is_closed()");
            assert_eq!(x.right_is_closed(), right, "{x}.right_is_closed()");
        }
    }

    #[test]
    fn construction_is_validated() {
        assert_eq!(Interval::new(f64::NAN, 0.0, Ends::Closed), Err(Error::NaN));
        assert_eq!(Interval::new(0.0, f64::NAN, Ends::Closed), Err(Error::NaN));
        assert_eq!(Interval::new(1.0, -1.0, Ends::Closed), Err(Error::Empty));
        assert_eq!(Interval::new(1.0, 1.0, Ends::Open), Err(Error::Empty));
        assert_eq!(
            Interval::new(0.0, INF, Ends::Closed),
            Err(Error::ClosedAtInfinity)
        );
        assert_eq!(
            Interval::new(NEG_INF, 0.0, Ends::Closed),
            Err(Error::ClosedAtInfinity)
        );
        assert_eq!(
            Interval::new(0.0, 1.0, Ends::Closed),
            Ok(iv(0.0, 1.0, Ends::Closed))
        );
        assert_eq!(
            Interval::new(0.0, INF, Ends::LeftClosed),
            Ok(iv(0.0, INF, Ends::LeftClosed))
        );
        assert_eq!(Interval::degenerate(-3.0), Ok(iv(-3.0, -3.0, Ends::Closed)));
        assert_eq!(Interval::degenerate(INF), Err(Error::ClosedAtInfinity));
        assert_eq!(Interval::degenerate(f64::NAN), Err(Error::NaN));
    }

    #[test]
    fn contains() {
        let x = iv(0.0, 1.0, Ends::LeftClosed);
        assert!(x.contains(0.0));
        assert!(x.contains(0.5));
        assert!(!x.contains(1.0));
        assert!(!x.contains(-0.5));
        assert!(!x.contains(f64::NAN));

        let reals = Interval::all_reals();
        assert!(reals.contains(0.0));
        assert!(!reals.contains(INF));
        assert!(!reals.contains(f64::NAN));

        assert!(!Interval::empty().contains(0.0));
        assert!(Interval::zero().contains(0.0));
    }

    #[test]
    fn equality_treats_all_empties_alike() {
        assert_eq!(Interval::empty(), iv(2.0, 2.0, Ends::LeftClosed));
        assert_eq!(iv(3.0, -3.0, Ends::Closed), Interval::empty());
        assert_ne!(Interval::empty(), Interval::zero());
        assert_ne!(iv(0.0, 1.0, Ends::Closed), iv(0.0, 1.0, Ends::Open));
        assert_eq!(iv(0.0, 1.0, Ends::Closed), iv(0.0, 1.0, Ends::Closed));
    }

    #[test]
    fn intersection_picks_binding_endpoints() {
        let tests = [
            (
                iv(1.0, 3.0, Ends::Closed),
                iv(2.0, 4.0, Ends::Closed),
                iv(2.0, 3.0, Ends::Closed),
            ),
            (
                iv(1.0, 3.0, Ends::Open),
                iv(2.0, 4.0, Ends::Closed),
                iv(2.0, 3.0, Ends::LeftClosed),
            ),
            // Ties take the AND of the endpoint bits.
            (
                iv(1.0, 2.0, Ends::LeftClosed),
                iv(1.0, 2.0, Ends::RightClosed),
                iv(1.0, 2.0, Ends::Open),
            ),
            // Nested intervals.
            (
                iv(0.0, 10.0, Ends::Open),
                iv(2.0, 3.0, Ends::Closed),
                iv(2.0, 3.0, Ends::Closed),
            ),
            // Touching at a point both include.
            (
                iv(1.0, 2.0, Ends::RightClosed),
                iv(2.0, 3.0, Ends::Closed),
                iv(2.0, 2.0, Ends::Closed),
            ),
            // Touching at a point only one includes: empty.
            (
                iv(-1.0, 2.0, Ends::Open),
                iv(2.0, 4.0, Ends::Closed),
                Interval::empty(),
            ),
            (
                iv(1.0, 2.0, Ends::Closed),
                iv(3.0, 4.0, Ends::Closed),
                Interval::empty(),
            ),
            (Interval::empty(), iv(1.0, 2.0, Ends::Closed), Interval::empty()),
            (iv(1.0, 2.0, Ends::Closed), Interval::empty(), Interval::empty()),
        ];
        for (x, y, want) in tests {
            assert_eq!(x.intersection(y), want, "{x}.intersection({y})");
            assert_eq!(y.intersection(x), want, "{y}.intersection({x})");
        }
        let x = iv(1.0, 2.0, Ends::Open);
        assert_eq!(x.intersection(x), x);
    }

    #[test]
    fn union_merges_touching_intervals() {
        let tests = [
            (
                iv(1.0, 3.0, Ends::Closed),
                iv(2.0, 4.0, Ends::Closed),
                iv(1.0, 4.0, Ends::Closed),
            ),
            // A closed touching point merges the intervals.
            (
                iv(-1.0, 2.0, Ends::RightClosed),
                iv(2.0, 4.0, Ends::RightClosed),
                iv(-1.0, 4.0, Ends::RightClosed),
            ),
            // An open-against-closed touch still merges.
            (
                iv(-1.0, 2.0, Ends::Open),
                iv(2.0, 4.0, Ends::Closed),
                iv(-1.0, 4.0, Ends::RightClosed),
            ),
            // Ties take the OR of the endpoint bits.
            (
                iv(1.0, 2.0, Ends::LeftClosed),
                iv(1.0, 2.0, Ends::RightClosed),
                iv(1.0, 2.0, Ends::Closed),
            ),
            (
                iv(0.0, 10.0, Ends::Open),
                iv(2.0, 3.0, Ends::Closed),
                iv(0.0, 10.0, Ends::Open),
            ),
            // An open gap at the touching point is not representable.
            (
                iv(-1.0, 2.0, Ends::Open),
                iv(2.0, 4.0, Ends::Open),
                Interval::empty(),
            ),
            (
                iv(1.0, 2.0, Ends::Closed),
                iv(3.0, 4.0, Ends::Closed),
                Interval::empty(),
            ),
            (Interval::empty(), iv(1.0, 2.0, Ends::Closed), Interval::empty()),
        ];
        for (x, y, want) in tests {
            assert_eq!(x.union(y), want, "{x}.union({y})");
            assert_eq!(y.union(x), want, "{y}.union({x})");
        }
    }

    #[test]
    fn display() {
        assert_eq!(Interval::zero().to_string(), "[0.0, 0.0]");
        assert_eq!(Interval::empty().to_string(), "(0.0, 0.0)");
        assert_eq!(Interval::all_reals().to_string(), "(-Inf, +Inf)");
        assert_eq!(iv(0.0, INF, Ends::LeftClosed).to_string(), "[0.0, +Inf)");
        assert_eq!(iv(-1.0, 2.5, Ends::RightClosed).to_string(), "(-1.0, 2.5]");
    }

    #[test]
    fn zero_and_one() {
        assert_eq!(<Interval as Zero>::zero(), iv(0.0, 0.0, Ends::Closed));
        assert!(<Interval as Zero>::zero().is_zero());
        assert_eq!(Interval::one(), iv(1.0, 1.0, Ends::Closed));
        assert!(Interval::one().is_one());
        assert!(!Interval::one().is_zero());
    }
}
