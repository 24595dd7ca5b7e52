//! # Poculum
//!
//! A self-describing binary serialization format in the MessagePack family:
//! a closed set of dynamically-typed values, encoded compactly with one tag
//! byte per value and the narrowest size class that holds each magnitude or
//! length, bit-for-bit compatible across language implementations.
//!
//! [`Poculum`] is the value tree; [`encoding::encode_full`] and
//! [`encoding::decode_full`] are the codec.
//!
//! # Example
//!
//! ```
//! use poculum::prelude::*;
//!
//! let val = Poculum::from(vec![Poculum::from(1u64), Poculum::from("two")]);
//!
//! let enc = encode_full(&val).unwrap();
//! assert_eq!(decode_full(&enc).unwrap(), val);
//! ```

/// Helper macros and hex transcoding.
#[macro_use]
pub mod util;

/// Poculum binary encoder and decoder.
pub mod encoding;
/// Encode, decode, and conversion errors.
pub mod errors;
/// The 64-bit float wrapper.
pub mod float;
/// Integer variants.
pub mod inum;
/// Prelude.
pub mod prelude;
/// Types representable as `Poculum`.
pub mod rep;
/// A map wrapper around a vector of pairs, in insertion order.
pub mod vecmap;

pub use bytes::Bytes;
pub use hashbrown::HashMap;

use crate::{float::Float64, inum::Inum, rep::PoculumRep, vecmap::VecMap};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug)]
/// Poculum values.
pub enum Poculum {
    /// Null type. Equivalent to `None`.
    Null,
    /// Boolean type. Travels on the wire as the integers one and zero, and
    /// decodes back as an integer.
    Bool(bool),
    /// Integer type: 0…2⁶⁴−1 or −2⁶³…−1.
    Num(Inum),
    /// 64-bit float type.
    Float(Float64),
    /// UTF-8 string type.
    Str(String),
    /// Bytestring type.
    Byt(Bytes),
    /// List type.
    List(Vec<Poculum>),
    /// Map type: string keys, entries kept in insertion order.
    Map(VecMap<String, Poculum>),
}

use Poculum::*;

impl Poculum {
    /// Indicates whether a value is `Null`.
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::Poculum;
    ///
    /// assert!(Poculum::Null.is_null());
    /// ```
    pub fn is_null(&self) -> bool {
        match self {
            Null => true,
            _ => false,
        }
    }

    /// Tries to convert the value to a `bool`.
    /// This will return `None` if the value is not a `Poculum` bool.
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::Poculum;
    ///
    /// assert!(Poculum::Bool(true).to_bool().unwrap());
    /// ```
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Tries to convert the value to an [`Inum`].
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::prelude::*;
    ///
    /// let ks = 1u64.into_poculum();
    /// assert!(ks.to_inum().is_some());
    /// ```
    pub fn to_inum(&self) -> Option<&Inum> {
        match self {
            Num(i) => Some(i),
            _ => None,
        }
    }

    /// Tries to convert the value to an `f64`.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Float(f) => Some(f.to_f64()),
            _ => None,
        }
    }

    /// Tries to view the value as a string slice.
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::Poculum;
    ///
    /// let ks = Poculum::from("word");
    /// assert_eq!(ks.to_str().unwrap(), "word");
    /// ```
    pub fn to_str(&self) -> Option<&str> {
        match self {
            Str(s) => Some(s),
            _ => None,
        }
    }

    /// Tries to view the value as [`Bytes`].
    pub fn to_bytes(&self) -> Option<&Bytes> {
        match self {
            Byt(b) => Some(b),
            _ => None,
        }
    }

    /// Converts the value to a vector of `Poculum`.
    /// This will return `None` if the value is not a `Poculum` list.
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::Poculum;
    ///
    /// let ks = Poculum::from(vec![1u64, 2, 3]);
    /// assert_eq!(ks.to_vec().unwrap().len(), 3);
    /// ```
    pub fn to_vec(&self) -> Option<&Vec<Poculum>> {
        match self {
            List(a) => Some(a),
            _ => None,
        }
    }

    /// Converts the value to a [`VecMap`].
    /// This will return `None` if the value is not a `Poculum` map.
    pub fn to_vecmap(&self) -> Option<&VecMap<String, Poculum>> {
        match self {
            Map(m) => Some(m),
            _ => None,
        }
    }

    /// Consumes the value, converting it into a vector of `Poculum`.
    pub fn into_vec(self) -> Option<Vec<Poculum>> { self.try_into().ok() }

    /// Consumes the value, converting it into a [`VecMap`].
    pub fn into_vecmap(self) -> Option<VecMap<String, Poculum>> { self.try_into().ok() }

    /// Consumes the value, converting it into a [`HashMap`]. Entry order is
    /// lost.
    pub fn into_map(self) -> Option<HashMap<String, Poculum>> {
        Some(self.into_vecmap()?.into_hashmap())
    }

    /// Consumes the value, converting it to a value of type `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::prelude::*;
    ///
    /// let num: u8 = 1u8.into_poculum().into_rep().unwrap();
    /// assert_eq!(num, 1);
    /// ```
    pub fn into_rep<T: PoculumRep>(self) -> Option<T> { T::from_poculum(self).ok() }

    /// Converts a bytestring literal to `Poculum`.
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::Poculum;
    ///
    /// let ks = Poculum::from_static(b"this is an example");
    /// assert!(ks.to_bytes().is_some());
    /// ```
    pub fn from_static(bytes: &'static [u8]) -> Poculum { Byt(Bytes::from_static(bytes)) }
}

macro_rules! try_from_ctor {
    ($from:ty, $to:ty, $ctor:tt) => {
        impl TryFrom<$from> for $to {
            type Error = $from;

            fn try_from(from: $from) -> Result<$to, $from> {
                match from {
                    $ctor(a) => Ok(a),
                    f => Err(f),
                }
            }
        }
    };
}

from_fn!(Poculum, bool, Bool);
try_from_ctor!(Poculum, bool, Bool);

from_fn!(Poculum, Inum, Num);
try_from_ctor!(Poculum, Inum, Num);

from_fn!(Poculum, Float64, Float);
try_from_ctor!(Poculum, Float64, Float);

from_fn!(Poculum, String, Str);
try_from_ctor!(Poculum, String, Str);

from_fn!(Poculum, Bytes, Byt);
try_from_ctor!(Poculum, Bytes, Byt);

try_from_ctor!(Poculum, Vec<Poculum>, List);
try_from_ctor!(Poculum, VecMap<String, Poculum>, Map);

from_fn!(Poculum, &str, |s: &str| Str(s.to_string()));

compose_from!(Poculum, Inum, i64);
compose_from!(Poculum, Inum, u64);
compose_from!(Poculum, Inum, isize);
compose_from!(Poculum, Inum, usize);
compose_from!(Poculum, Float64, f64);

from_prims!(Poculum);

impl<T: Into<Poculum>> From<Vec<T>> for Poculum {
    fn from(v: Vec<T>) -> Poculum { List(v.into_iter().map(T::into).collect()) }
}

impl<T: Into<Poculum>> From<VecMap<String, T>> for Poculum {
    fn from(m: VecMap<String, T>) -> Poculum {
        Map(m.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}
