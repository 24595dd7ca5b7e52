//! # Poculum binary encoder and decoder
//!
//! One call encodes or decodes exactly one root value from a contiguous
//! buffer. The encoder always picks the narrowest size class that holds a
//! magnitude or length, so encoding is a function of the value; the decoder
//! accepts any size class that is legal for a tag, canonical or not.
//!
//! # Example
//!
//! ```
//! use poculum::prelude::*;
//!
//! let mut entries = VecMap::new();
//! entries.push("kind".to_string(), Poculum::from("demo"));
//! entries.push("count".to_string(), Poculum::from(3u64));
//! let val = Poculum::Map(entries);
//!
//! let enc = encode_full(&val).unwrap();
//! let dec = decode_full(&enc).unwrap();
//! assert_eq!(dec, val);
//! ```

use crate::{
    errors::{DecodeError, EncodeError},
    float::Float64,
    inum::Inum,
    vecmap::VecMap,
    Poculum::{self, *},
};
use bytes::Bytes;

pub mod ser;
pub use ser::*;
mod constants;
pub(crate) use constants::*;

/// Encode a value into its binary representation, appending to `out`.
///
/// # Example
///
/// ```
/// use poculum::prelude::*;
///
/// let out = &mut Vec::new();
/// encode(&Poculum::Null, out).unwrap();
/// assert_eq!(*out, [0x00]);
/// ```
pub fn encode<S: SerializerBytes>(val: &Poculum, out: &mut S) -> Result<(), EncodeError> {
    ser_poculum(out, val, 0)
}

/// Encode a value into a fresh byte vector.
///
/// # Example
///
/// ```
/// use poculum::prelude::*;
///
/// let enc = encode_full(&Poculum::from(256u64)).unwrap();
/// assert_eq!(enc, [0x02, 0x01, 0x00]);
/// ```
pub fn encode_full(val: &Poculum) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    ser_poculum(&mut out, val, 0)?;
    Ok(out)
}

/// Decode one value from the front of `data`, returning it together with the
/// number of bytes consumed. Trailing bytes are left as the caller's problem;
/// use [`decode_full`] to reject them.
///
/// # Example
///
/// ```
/// use poculum::prelude::*;
///
/// let mut data = encode_full(&Poculum::Null).unwrap();
/// data.push(0xff);
///
/// let (val, used) = decode(&data).unwrap();
/// assert_eq!(val, Poculum::Null);
/// assert_eq!(used, 1);
/// ```
pub fn decode(data: &[u8]) -> Result<(Poculum, usize), DecodeError> {
    let mut cur = Cursor::new(data);
    let val = read_value(&mut cur, 0)?;
    Ok((val, cur.pos()))
}

/// Decode exactly one value spanning all of `data`.
///
/// This is the strict entry point: input with bytes left over after the root
/// value fails with [`DecodeError::TrailingBytes`].
///
/// # Example
///
/// ```
/// use poculum::prelude::*;
///
/// let enc = encode_full(&Poculum::from("Hi")).unwrap();
/// assert_eq!(decode_full(&enc).unwrap(), Poculum::from("Hi"));
///
/// let mut padded = enc.clone();
/// padded.push(0x00);
/// assert!(matches!(
///     decode_full(&padded),
///     Err(DecodeError::TrailingBytes { .. })
/// ));
/// ```
pub fn decode_full(data: &[u8]) -> Result<Poculum, DecodeError> {
    let (val, used) = decode(data)?;
    if used == data.len() {
        Ok(val)
    } else {
        Err(DecodeError::TrailingBytes {
            at: used,
            trailing: data.len() - used,
        })
    }
}

/// Read cursor over the input buffer. Advances monotonically, never
/// backtracks; the position is carried into errors for diagnostics.
struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(buf: &'a [u8]) -> Cursor<'a> { Cursor { buf, pos: 0 } }

    fn pos(&self) -> usize { self.pos }

    fn remaining(&self) -> usize { self.buf.len() - self.pos }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        if self.remaining() < 1 {
            return Err(DecodeError::Truncated {
                at: self.pos,
                needed: 1,
            });
        }
        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(b)
    }

    fn read_exact(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < len {
            return Err(DecodeError::Truncated {
                at: self.pos,
                needed: len - self.remaining(),
            });
        }
        let s = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(s)
    }

    /// Read an unsigned big-endian integer of `width` bytes, 1 ≤ width ≤ 8.
    fn read_uint(&mut self, width: usize) -> Result<u64, DecodeError> {
        debug_assert!((1..=8).contains(&width));
        let raw = self.read_exact(width)?;
        let mut u = 0u64;
        for &b in raw {
            u = u << 8 | u64::from(b);
        }
        Ok(u)
    }

    /// Read a signed big-endian two's-complement integer of `width` bytes.
    fn read_int(&mut self, width: usize) -> Result<i64, DecodeError> {
        let u = self.read_uint(width)?;
        let shift = 64 - width as u32 * 8;
        Ok(((u << shift) as i64) >> shift)
    }
}

/// A parsed tag byte.
#[derive(Copy, Clone, Debug)]
enum PTag {
    /// Null.
    TNull,
    /// Unsigned integer; payload width in bytes.
    TUint(usize),
    /// Negative-capable integer; payload width in bytes.
    TInt(usize),
    /// 64-bit float.
    TFloat,
    /// String with the given length framing.
    TStr(LenField),
    /// List with the given count framing.
    TList(LenField),
    /// Map with the given count framing.
    TMap(LenField),
    /// Byte string with the given length framing.
    TBytes(LenField),
}

/// How a length-carrying tag frames its length.
#[derive(Copy, Clone, Debug)]
enum LenField {
    /// Length packed into the tag's low nibble.
    Fix(usize),
    /// Big-endian length field of this many bytes following the tag.
    Wide(usize),
}

use LenField::*;
use PTag::*;

/// Classify one tag byte. `at` is its offset, for the error.
fn parse_tag(byte: u8, at: usize) -> Result<PTag, DecodeError> {
    match byte {
        TAG_NULL => Ok(TNull),
        TAG_UINT8 => Ok(TUint(1)),
        TAG_UINT16 => Ok(TUint(2)),
        TAG_UINT32 => Ok(TUint(4)),
        TAG_UINT64 => Ok(TUint(8)),
        TAG_INT8 => Ok(TInt(1)),
        TAG_INT16 => Ok(TInt(2)),
        TAG_INT32 => Ok(TInt(4)),
        TAG_INT64 => Ok(TInt(8)),
        TAG_FLOAT64 => Ok(TFloat),
        TAG_FIXSTR..=TAG_FIXSTR_MAX => Ok(TStr(Fix((byte & MASK_FIX_LEN) as usize))),
        TAG_STR16 => Ok(TStr(Wide(2))),
        TAG_STR32 => Ok(TStr(Wide(4))),
        TAG_FIXLIST..=TAG_FIXLIST_MAX => Ok(TList(Fix((byte & MASK_FIX_LEN) as usize))),
        TAG_LIST16 => Ok(TList(Wide(2))),
        TAG_FIXMAP..=TAG_FIXMAP_MAX => Ok(TMap(Fix((byte & MASK_FIX_LEN) as usize))),
        TAG_MAP16 => Ok(TMap(Wide(2))),
        TAG_BYTES8 => Ok(TBytes(Wide(1))),
        TAG_BYTES16 => Ok(TBytes(Wide(2))),
        _ => Err(DecodeError::UnknownTag { tag: byte, at }),
    }
}

/// Resolve a length framing to a concrete count or byte length.
fn read_len(cur: &mut Cursor, lf: LenField) -> Result<usize, DecodeError> {
    match lf {
        Fix(n) => Ok(n),
        Wide(w) => Ok(cur.read_uint(w)? as usize),
    }
}

/// Read a UTF-8 string payload of `len` bytes.
fn read_str(cur: &mut Cursor, len: usize) -> Result<String, DecodeError> {
    let at = cur.pos();
    let raw = cur.read_exact(len)?;
    match std::str::from_utf8(raw) {
        Ok(s) => Ok(s.to_string()),
        Err(_) => Err(DecodeError::InvalidUtf8 { at }),
    }
}

/// Read a map key, which must carry one of the string tags.
fn read_key(cur: &mut Cursor) -> Result<String, DecodeError> {
    let at = cur.pos();
    let byte = cur.read_u8()?;
    match parse_tag(byte, at)? {
        TStr(lf) => {
            let len = read_len(cur, lf)?;
            read_str(cur, len)
        }
        _ => Err(DecodeError::InvalidKey { tag: byte, at }),
    }
}

/// Decode one value at the cursor. Composite tags recurse once per child on
/// the same cursor; `depth` tracks nesting against [`MAX_DEPTH`].
fn read_value(cur: &mut Cursor, depth: usize) -> Result<Poculum, DecodeError> {
    if depth > MAX_DEPTH {
        return Err(DecodeError::DepthLimit { limit: MAX_DEPTH });
    }
    let at = cur.pos();
    match parse_tag(cur.read_u8()?, at)? {
        TNull => Ok(Null),
        TUint(w) => Ok(Num(Inum::from(cur.read_uint(w)?))),
        TInt(w) => Ok(Num(Inum::from(cur.read_int(w)?))),
        TFloat => Ok(Float(Float64::from_bits(cur.read_uint(8)?))),
        TStr(lf) => {
            let len = read_len(cur, lf)?;
            Ok(Str(read_str(cur, len)?))
        }
        TBytes(lf) => {
            let len = read_len(cur, lf)?;
            Ok(Byt(Bytes::copy_from_slice(cur.read_exact(len)?)))
        }
        TList(lf) => {
            let len = read_len(cur, lf)?;
            let mut out = Vec::with_capacity(len);
            for _ in 0..len {
                out.push(read_value(cur, depth + 1)?);
            }
            Ok(List(out))
        }
        TMap(lf) => {
            let len = read_len(cur, lf)?;
            let mut entries = Vec::with_capacity(len);
            for _ in 0..len {
                let key = read_key(cur)?;
                let val = read_value(cur, depth + 1)?;
                entries.push((key, val));
            }
            Ok(Map(VecMap::from_entries(entries)))
        }
    }
}
