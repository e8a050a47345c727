use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::ends::Ends;
use crate::error::Error;
use crate::interval::Interval;

/// Sign class of a non-empty interval other than `[0, 0]`.
///
/// The zero-touching classes are assigned on bound value alone: an
/// interval whose left bound is exactly 0 is `PositiveZero` whether or
/// not that endpoint is closed, and symmetrically for `NegativeZero`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sign {
    /// `a > 0`
    Positive,
    /// `a == 0`, `b > 0`
    PositiveZero,
    /// `b < 0`
    Negative,
    /// `a < 0`, `b == 0`
    NegativeZero,
    /// `a < 0 < b`
    Mixed,
}

fn sign(x: Interval) -> Sign {
    debug_assert!(!x.is_empty() && !x.is_zero());
    if x.left() < 0.0 {
        if x.right() < 0.0 {
            Sign::Negative
        } else if x.right() == 0.0 {
            Sign::NegativeZero
        } else {
            Sign::Mixed
        }
    } else if x.left() == 0.0 {
        Sign::PositiveZero
    } else {
        Sign::Positive
    }
}

impl Neg for Interval {
    type Output = Self;

    /// Returns the additive inverse. `-(-x) == x` for every `x`.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            a: -self.b,
            b: -self.a,
            ends: self.ends.flip(),
        }
    }
}

impl Add for Interval {
    type Output = Self;

    /// Returns the sum. The result is closed on a side only where both
    /// operands are closed.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        if self.is_empty() || rhs.is_empty() {
            return Self::empty();
        }
        Self {
            a: self.a + rhs.a,
            b: self.b + rhs.b,
            ends: self.ends & rhs.ends,
        }
    }
}

impl Sub for Interval {
    type Output = Self;

    /// Returns the difference `self + (-rhs)`.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Mul for Interval {
    type Output = Self;

    /// Returns the product.
    ///
    /// Negative factors reduce to the positive cases through
    /// `-x * y == -(x * y)`; the remaining dispatch over the sign
    /// classes is exhaustive.
    fn mul(self, rhs: Self) -> Self::Output {
        if self.is_empty() || rhs.is_empty() {
            return Self::empty();
        }
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        match (sign(self), sign(rhs)) {
            (Sign::Negative | Sign::NegativeZero, _) => -(-self * rhs),
            (_, Sign::Negative | Sign::NegativeZero) => -(self * -rhs),
            (Sign::Mixed, Sign::Mixed) => mul_mixed(self, rhs),
            (Sign::Positive | Sign::PositiveZero, Sign::Mixed) => mul_pos_mixed(self, rhs),
            (Sign::Mixed, Sign::Positive | Sign::PositiveZero) => mul_pos_mixed(rhs, self),
            (Sign::Positive | Sign::PositiveZero, Sign::Positive | Sign::PositiveZero) => {
                mul_pos(self, rhs)
            }
        }
    }
}

/// Both factors are positive, possibly touching zero at the left bound.
fn mul_pos(x: Interval, y: Interval) -> Interval {
    // A zero left bound annihilates every value of the other factor,
    // so its own bit alone decides whether 0 is attained.
    let left = if x.a == 0.0 && y.a == 0.0 {
        (x.ends | y.ends) & Ends::LeftClosed
    } else if x.a == 0.0 {
        x.ends & Ends::LeftClosed
    } else if y.a == 0.0 {
        y.ends & Ends::LeftClosed
    } else {
        x.ends & y.ends & Ends::LeftClosed
    };
    let right = x.ends & y.ends & Ends::RightClosed;
    Interval {
        a: x.a * y.a,
        b: x.b * y.b,
        ends: left ^ right,
    }
}

/// `x` is positive and `y` straddles zero: both extremes come from
/// scaling `y` by `x`'s right bound.
fn mul_pos_mixed(x: Interval, y: Interval) -> Interval {
    let ends = if x.right_is_closed() { y.ends } else { Ends::Open };
    Interval {
        a: x.b * y.a,
        b: x.b * y.b,
        ends,
    }
}

/// Both factors straddle zero. The exact product is the union of `x`
/// scaled by each of `y`'s bounds; both scaled copies straddle zero, so
/// their union is a single interval.
fn mul_mixed(x: Interval, y: Interval) -> Interval {
    let by_right = Interval {
        a: x.a * y.b,
        b: x.b * y.b,
        ends: x.ends & closed_if(y.right_is_closed()),
    };
    // Scaling by the negative bound mirrors the interval, so the
    // endpoint bits trade places.
    let by_left = Interval {
        a: x.b * y.a,
        b: x.a * y.a,
        ends: x.ends.flip() & closed_if(y.left_is_closed()),
    };
    by_right.union(by_left)
}

fn closed_if(closed: bool) -> Ends {
    if closed {
        Ends::Closed
    } else {
        Ends::Open
    }
}

impl Interval {
    /// Returns the quotient `self / rhs`.
    ///
    /// Fails with [`Error::DivByZero`] when `rhs` is `[0, 0]`; the
    /// empty interval stands in for the undefined result. Fails with
    /// [`Error::DisjointUnion`] when the exact quotient is a union of
    /// two disjoint unbounded intervals; the error carries `(-Inf,
    /// +Inf)` as a safe enclosure. A quotient whose operands both reach
    /// zero fills the whole line without error.
    pub fn checked_div(self, rhs: Self) -> Result<Self, Error> {
        if self.is_empty() || rhs.is_empty() {
            return Ok(Self::empty());
        }
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        match (sign(self), sign(rhs)) {
            (Sign::Negative | Sign::NegativeZero, _) => neg_quotient((-self).checked_div(rhs)),
            (_, Sign::Negative | Sign::NegativeZero) => neg_quotient(self.checked_div(-rhs)),
            // Both operands reach zero: the quotient fills the line.
            (Sign::Mixed, Sign::Mixed)
            | (Sign::PositiveZero, Sign::Mixed)
            | (Sign::Mixed, Sign::PositiveZero) => Ok(Self::all_reals()),
            // The exact quotient is (-Inf, a/ya] u [a/yb, +Inf).
            (Sign::Positive, Sign::Mixed) => Err(Error::DisjointUnion {
                enclosure: Self::all_reals(),
            }),
            (Sign::Positive | Sign::PositiveZero, Sign::PositiveZero) => {
                let ends = self.ends & rhs.ends.flip() & Ends::LeftClosed;
                Ok(Self {
                    a: unsign_zero(self.a / rhs.b),
                    b: f64::INFINITY,
                    ends,
                })
            }
            (Sign::Positive | Sign::PositiveZero, Sign::Positive) => Ok(Self {
                a: unsign_zero(self.a / rhs.b),
                b: self.b / rhs.a,
                ends: self.ends & rhs.ends.flip(),
            }),
            (Sign::Mixed, Sign::Positive) => {
                // The smallest denominator binds both sides.
                let ends = if rhs.left_is_closed() { self.ends } else { Ends::Open };
                Ok(Self {
                    a: self.a / rhs.a,
                    b: self.b / rhs.a,
                    ends,
                })
            }
        }
    }
}

fn neg_quotient(q: Result<Interval, Error>) -> Result<Interval, Error> {
    match q {
        Ok(iv) => Ok(-iv),
        Err(Error::DisjointUnion { enclosure }) => Err(Error::DisjointUnion {
            enclosure: -enclosure,
        }),
        Err(e) => Err(e),
    }
}

/// Dividing a zero numerator bound can yield -0.0; results use the
/// positive zero.
fn unsign_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

impl Div for Interval {
    type Output = Self;

    /// Like [`Interval::checked_div`], with the error collapsed into a
    /// usable value: the enclosure on [`Error::DisjointUnion`], empty
    /// on [`Error::DivByZero`].
    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(q) | Err(Error::DisjointUnion { enclosure: q }) => q,
            Err(_) => Self::empty(),
        }
    }
}
