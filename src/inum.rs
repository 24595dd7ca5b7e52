//! # Integers
//!
//! Wire integers are either non-negative up to 2⁶⁴−1 or negative down to
//! −2⁶³. [`Inum`] keeps the two ranges in separate variants and normalizes
//! on construction, so a non-negative quantity always lives in `U64` and the
//! representation of any integer is unique.

use std::{cmp::Ordering, fmt};

/// [`Inum`]s are non-negative [`u64`]s or strictly negative [`i64`]s.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Debug)]
pub enum Inum {
    /// Non-negative integer.
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::prelude::*;
    ///
    /// let small = Inum::from(1u8);
    /// assert!(!small.is_negative());
    /// ```
    U64(u64),
    /// Strictly negative integer. Constructors never place a non-negative
    /// value here.
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::prelude::*;
    ///
    /// let neg = Inum::from(-1);
    /// assert!(neg.is_negative());
    /// ```
    I64(i64),
}

use Inum::*;

impl Inum {
    /// True when the value is below zero.
    pub fn is_negative(&self) -> bool { matches!(self, I64(_)) }
}

impl fmt::Display for Inum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            U64(u) => write!(f, "{}", u),
            I64(i) => write!(f, "{}", i),
        }
    }
}

impl Ord for Inum {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (U64(a), U64(b)) => a.cmp(b),
            (I64(a), I64(b)) => a.cmp(b),
            (U64(_), I64(_)) => Ordering::Greater,
            (I64(_), U64(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Inum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

// From implementations

// u64 -> Inum
from_fn!(Inum, u64, U64);

// i64 -> Inum, normalizing non-negative values into `U64`
from_fn!(Inum, i64, |i: i64| {
    if i >= 0 {
        U64(i as u64)
    } else {
        I64(i)
    }
});

// usize -> Inum
from_fn!(Inum, usize, |u| Inum::from(u as u64));

// isize -> Inum
from_fn!(Inum, isize, |i| Inum::from(i as i64));

from_prims!(Inum);

// TryFrom implementations

macro_rules! try_from_inum_unsigned {
    ($t:ty) => {
        impl TryFrom<Inum> for $t {
            type Error = Inum;

            fn try_from(n: Inum) -> Result<$t, Inum> {
                match n {
                    U64(u) => <$t>::try_from(u).map_err(|_| n),
                    I64(_) => Err(n),
                }
            }
        }
    };
}

macro_rules! try_from_inum_signed {
    ($t:ty) => {
        impl TryFrom<Inum> for $t {
            type Error = Inum;

            fn try_from(n: Inum) -> Result<$t, Inum> {
                match n {
                    U64(u) => i64::try_from(u)
                        .ok()
                        .and_then(|i| <$t>::try_from(i).ok())
                        .ok_or(n),
                    I64(i) => <$t>::try_from(i).map_err(|_| n),
                }
            }
        }
    };
}

try_from_inum_unsigned!(u8);
try_from_inum_unsigned!(u16);
try_from_inum_unsigned!(u32);
try_from_inum_unsigned!(u64);
try_from_inum_unsigned!(usize);

try_from_inum_signed!(i8);
try_from_inum_signed!(i16);
try_from_inum_signed!(i32);
try_from_inum_signed!(i64);
try_from_inum_signed!(isize);
