//! # Values representable as Poculum.
//!
//! [`PoculumRep`] maps native Rust values to and from the codec's value
//! tree. This is where a dynamically-typed caller would lean on the host
//! language; in Rust the conversions are spelled out per type.

use crate::{
    errors::ConversionError, float::Float64, inum::Inum, vecmap::VecMap, Bytes, HashMap, Poculum,
};

/// A value representable as [`Poculum`].
pub trait PoculumRep: Clone + Sized {
    /// Converts the value into [`Poculum`].
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::prelude::*;
    ///
    /// let val = 1u8.to_poculum();
    /// assert!(val.to_inum().is_some());
    /// ```
    fn to_poculum(&self) -> Poculum;

    /// Consumes the value, converting it into [`Poculum`].
    fn into_poculum(self) -> Poculum;

    /// Consumes a [`Poculum`], converting it into `Self`.
    ///
    /// # Example
    ///
    /// ```
    /// use poculum::prelude::*;
    ///
    /// let val = "foo".to_string().into_poculum();
    /// assert_eq!(String::from_poculum(val).unwrap(), "foo");
    /// ```
    fn from_poculum(val: Poculum) -> Result<Self, ConversionError>;

    /// Converts from a borrowed [`Poculum`].
    fn from_poculum_ref(val: &Poculum) -> Result<Self, ConversionError> {
        Self::from_poculum(val.clone())
    }
}

// TryFrom<Poculum> implementations

/// `TryFrom<Poculum>` for the integer widths, routed through [`Inum`].
macro_rules! try_from_poculum_int {
    ($t:ty) => {
        impl TryFrom<Poculum> for $t {
            type Error = ();

            fn try_from(val: Poculum) -> Result<$t, ()> {
                let n = Inum::try_from(val).map_err(|_| ())?;
                <$t>::try_from(n).map_err(|_| ())
            }
        }
    };
}

// sizes
try_from_poculum_int!(usize);
try_from_poculum_int!(isize);

// 8-bit integers
try_from_poculum_int!(u8);
try_from_poculum_int!(i8);

// 16-bit integers
try_from_poculum_int!(u16);
try_from_poculum_int!(i16);

// 32-bit integers
try_from_poculum_int!(u32);
try_from_poculum_int!(i32);

// 64-bit integers
try_from_poculum_int!(u64);
try_from_poculum_int!(i64);

impl TryFrom<Poculum> for f64 {
    type Error = ();

    fn try_from(val: Poculum) -> Result<f64, ()> {
        Float64::try_from(val).map(Float64::to_f64).map_err(|_| ())
    }
}

// `PoculumRep` implementations

/// [`PoculumRep`] given `Into<Poculum>` and `TryFrom<Poculum>`.
macro_rules! rep_from_try {
    ($t:ty) => {
        impl PoculumRep for $t {
            fn to_poculum(&self) -> Poculum { self.clone().into() }

            fn into_poculum(self) -> Poculum { self.into() }

            fn from_poculum(val: Poculum) -> Result<Self, ConversionError> {
                match val.try_into() {
                    Ok(v) => Ok(v),
                    Err(_) => Err(ConversionError::new(&format!(
                        "could not convert `Poculum` to `{}`",
                        stringify!($t)
                    ))),
                }
            }
        }
    };
}

// Poculum
rep_from_try!(Poculum);

// Inum
rep_from_try!(Inum);

// Float64
rep_from_try!(Float64);

// Bytes
rep_from_try!(Bytes);

// String
rep_from_try!(String);

// sizes
rep_from_try!(usize);
rep_from_try!(isize);

// 8-bit integers
rep_from_try!(u8);
rep_from_try!(i8);

// 16-bit integers
rep_from_try!(u16);
rep_from_try!(i16);

// 32-bit integers
rep_from_try!(u32);
rep_from_try!(i32);

// 64-bit integers
rep_from_try!(u64);
rep_from_try!(i64);

// floats
rep_from_try!(f64);

impl PoculumRep for bool {
    fn to_poculum(&self) -> Poculum { Poculum::Bool(*self) }

    fn into_poculum(self) -> Poculum { Poculum::Bool(self) }

    /// Accepts the integers 0 and 1 as well as `Bool`: booleans come off the
    /// wire as integers, and this is the conventional way back.
    fn from_poculum(val: Poculum) -> Result<Self, ConversionError> {
        match val {
            Poculum::Bool(b) => Ok(b),
            Poculum::Num(Inum::U64(0)) => Ok(false),
            Poculum::Num(Inum::U64(1)) => Ok(true),
            _ => Err(ConversionError::new("could not convert `Poculum` to `bool`")),
        }
    }
}

impl PoculumRep for () {
    fn to_poculum(&self) -> Poculum { Poculum::Null }

    fn into_poculum(self) -> Poculum { Poculum::Null }

    fn from_poculum(val: Poculum) -> Result<Self, ConversionError> {
        match val {
            Poculum::Null => Ok(()),
            _ => Err(ConversionError::new("could not convert `Poculum` to `()`")),
        }
    }
}

impl<T: PoculumRep> PoculumRep for Vec<T> {
    fn to_poculum(&self) -> Poculum { Poculum::List(self.iter().map(T::to_poculum).collect()) }

    fn into_poculum(self) -> Poculum {
        Poculum::List(self.into_iter().map(T::into_poculum).collect())
    }

    fn from_poculum(val: Poculum) -> Result<Self, ConversionError> {
        match val {
            Poculum::List(items) => items.into_iter().map(T::from_poculum).collect(),
            _ => Err(ConversionError::new(
                "could not convert `Poculum` to a vector",
            )),
        }
    }
}

impl<T: PoculumRep> PoculumRep for VecMap<String, T> {
    fn to_poculum(&self) -> Poculum {
        Poculum::Map(self.iter().map(|(k, v)| (k.clone(), v.to_poculum())).collect())
    }

    fn into_poculum(self) -> Poculum {
        Poculum::Map(self.into_iter().map(|(k, v)| (k, v.into_poculum())).collect())
    }

    fn from_poculum(val: Poculum) -> Result<Self, ConversionError> {
        match val {
            Poculum::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((k, T::from_poculum(v)?)))
                .collect(),
            _ => Err(ConversionError::new("could not convert `Poculum` to a map")),
        }
    }
}

impl<T: PoculumRep> PoculumRep for HashMap<String, T> {
    fn to_poculum(&self) -> Poculum { VecMap::from(self.clone()).into_poculum() }

    fn into_poculum(self) -> Poculum { VecMap::from(self).into_poculum() }

    fn from_poculum(val: Poculum) -> Result<Self, ConversionError> {
        Ok(VecMap::<String, T>::from_poculum(val)?.into_hashmap())
    }
}

impl<T: PoculumRep> PoculumRep for Option<T> {
    /// `None` is Null; `Some` wraps its value in a one-element list so that
    /// `Some(())` and `None` stay distinguishable.
    fn to_poculum(&self) -> Poculum {
        match self {
            None => Poculum::Null,
            Some(t) => Poculum::List(vec![t.to_poculum()]),
        }
    }

    fn into_poculum(self) -> Poculum {
        match self {
            None => Poculum::Null,
            Some(t) => Poculum::List(vec![t.into_poculum()]),
        }
    }

    fn from_poculum(val: Poculum) -> Result<Self, ConversionError> {
        match val {
            Poculum::Null => Ok(None),
            Poculum::List(mut items) => match (items.pop(), items.is_empty()) {
                (Some(item), true) => T::from_poculum(item).map(Some),
                _ => Err(ConversionError::new(
                    "could not convert `Poculum` to an optional value",
                )),
            },
            _ => Err(ConversionError::new(
                "could not convert `Poculum` to an optional value",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_round_trip() {
        let val = 42u8.into_poculum();
        assert_eq!(u8::from_poculum(val.clone()), Ok(42));
        assert_eq!(u64::from_poculum(val), Ok(42));

        let val = (-7i32).into_poculum();
        assert_eq!(i32::from_poculum(val.clone()), Ok(-7));
        assert!(u32::from_poculum(val).is_err());
    }

    #[test]
    fn bool_accepts_wire_integers() {
        assert_eq!(bool::from_poculum(Poculum::from(1u64)), Ok(true));
        assert_eq!(bool::from_poculum(Poculum::from(0u64)), Ok(false));
        assert!(bool::from_poculum(Poculum::from(2u64)).is_err());
        assert_eq!(bool::from_poculum(Poculum::Bool(true)), Ok(true));
    }

    #[test]
    fn containers_round_trip() {
        let v = vec![1u64, 2, 3];
        assert_eq!(Vec::<u64>::from_poculum(v.clone().into_poculum()), Ok(v));

        let mut m = VecMap::new();
        m.push("b".to_string(), 2u64);
        m.push("a".to_string(), 1u64);
        let back = VecMap::<String, u64>::from_poculum(m.clone().into_poculum()).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn options_round_trip() {
        let some: Option<u8> = Some(3);
        assert_eq!(Option::<u8>::from_poculum(some.into_poculum()), Ok(Some(3)));
        assert_eq!(Option::<u8>::from_poculum(None::<u8>.into_poculum()), Ok(None));
    }
}
