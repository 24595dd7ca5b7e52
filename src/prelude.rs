pub use crate::{
    encoding::{decode, decode_full, encode, encode_full, SerializerBytes},
    errors::{ConversionError, DecodeError, EncodeError},
    float::Float64,
    inum::Inum,
    rep::*,
    vecmap::VecMap,
    Bytes, HashMap, Poculum,
};
