use std::ops::{BitAnd, BitOr, BitXor};

/// Describes whether an interval contains its endpoints.
///
/// The discriminants form a two-bit set: bit 0 is the left endpoint,
/// bit 1 the right. `LeftClosed` and `RightClosed` therefore double as
/// per-side masks when modes are combined with `&`, `|`, and `^`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Ends {
    Open = 0,
    LeftClosed = 1,
    RightClosed = 2,
    Closed = 3,
}

impl Ends {
    /// Returns the two-bit representation of the mode.
    #[inline]
    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Returns the mode encoded by the low two bits of `bits`.
    #[inline]
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::Open,
            1 => Self::LeftClosed,
            2 => Self::RightClosed,
            _ => Self::Closed,
        }
    }

    /// Swaps the left-closed and right-closed bits.
    ///
    /// An interval's bounds trade places under negation, so its
    /// endpoint bits must trade places too.
    #[inline]
    pub fn flip(self) -> Self {
        let b = self.bits();
        Self::from_bits((b & 0b01) << 1 | (b & 0b10) >> 1)
    }

    /// Reports whether the left endpoint is included.
    #[inline]
    pub fn left_is_closed(self) -> bool {
        self.bits() & Self::LeftClosed.bits() != 0
    }

    /// Reports whether the right endpoint is included.
    #[inline]
    pub fn right_is_closed(self) -> bool {
        self.bits() & Self::RightClosed.bits() != 0
    }
}

impl BitAnd for Ends {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits() & rhs.bits())
    }
}

impl BitOr for Ends {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits() | rhs.bits())
    }
}

impl BitXor for Ends {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits() ^ rhs.bits())
    }
}
