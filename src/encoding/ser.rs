use super::*;
use bytes::BytesMut;

/// Byte-oriented output sink.
///
/// The encoder writes through this trait so callers can target a plain
/// `Vec<u8>` or a [`BytesMut`] without an intermediate copy.
pub trait SerializerBytes {
    /// Append one byte.
    fn put_byte(&mut self, u: u8);

    /// Append a slice.
    fn put_slice(&mut self, s: &[u8]) {
        for &b in s {
            self.put_byte(b)
        }
    }
}

impl SerializerBytes for Vec<u8> {
    fn put_byte(&mut self, u: u8) { self.push(u) }

    fn put_slice(&mut self, s: &[u8]) { self.extend_from_slice(s) }
}

impl SerializerBytes for BytesMut {
    fn put_byte(&mut self, u: u8) { self.extend_from_slice(&[u]) }

    fn put_slice(&mut self, s: &[u8]) { self.extend_from_slice(s) }
}

/// Write a non-negative integer with the narrowest tag whose range holds it.
fn put_uint<S: SerializerBytes>(out: &mut S, u: u64) {
    if u <= LEN8_MAX as u64 {
        out.put_byte(TAG_UINT8);
        out.put_byte(u as u8);
    } else if u <= LEN16_MAX as u64 {
        out.put_byte(TAG_UINT16);
        out.put_slice(&(u as u16).to_be_bytes());
    } else if u <= LEN32_MAX as u64 {
        out.put_byte(TAG_UINT32);
        out.put_slice(&(u as u32).to_be_bytes());
    } else {
        out.put_byte(TAG_UINT64);
        out.put_slice(&u.to_be_bytes());
    }
}

/// Write a negative integer with the narrowest signed tag that holds it.
fn put_int<S: SerializerBytes>(out: &mut S, i: i64) {
    debug_assert!(i < 0);
    if i >= i64::from(i8::MIN) {
        out.put_byte(TAG_INT8);
        out.put_slice(&(i as i8).to_be_bytes());
    } else if i >= i64::from(i16::MIN) {
        out.put_byte(TAG_INT16);
        out.put_slice(&(i as i16).to_be_bytes());
    } else if i >= i64::from(i32::MIN) {
        out.put_byte(TAG_INT32);
        out.put_slice(&(i as i32).to_be_bytes());
    } else {
        out.put_byte(TAG_INT64);
        out.put_slice(&i.to_be_bytes());
    }
}

/// Write the tag and length field for one of the Fix/16/32 families.
///
/// Families without a 32-bit class pass `None` and top out at the 16-bit
/// maximum.
fn put_len<S: SerializerBytes>(
    out: &mut S,
    fix_base: u8,
    tag16: u8,
    tag32: Option<u8>,
    len: usize,
    what: &'static str,
) -> Result<(), EncodeError> {
    if len <= FIX_MAX {
        out.put_byte(fix_base | len as u8);
    } else if len <= LEN16_MAX {
        out.put_byte(tag16);
        out.put_slice(&(len as u16).to_be_bytes());
    } else if let (Some(tag32), true) = (tag32, len <= LEN32_MAX) {
        out.put_byte(tag32);
        out.put_slice(&(len as u32).to_be_bytes());
    } else {
        return Err(EncodeError::OutOfRange {
            what,
            len,
            max: if tag32.is_some() {
                LEN32_MAX as u64
            } else {
                LEN16_MAX as u64
            },
        });
    }
    Ok(())
}

/// Write the tag and length field for a byte string.
fn put_bytes_len<S: SerializerBytes>(out: &mut S, len: usize) -> Result<(), EncodeError> {
    if len <= LEN8_MAX {
        out.put_byte(TAG_BYTES8);
        out.put_byte(len as u8);
    } else if len <= LEN16_MAX {
        out.put_byte(TAG_BYTES16);
        out.put_slice(&(len as u16).to_be_bytes());
    } else {
        return Err(EncodeError::OutOfRange {
            what: "byte string",
            len,
            max: LEN16_MAX as u64,
        });
    }
    Ok(())
}

/// Serialize one value, dispatching on its variant.
///
/// Composite variants recurse per child; `depth` tracks nesting against
/// [`MAX_DEPTH`].
pub(crate) fn ser_poculum<S: SerializerBytes>(
    out: &mut S,
    val: &Poculum,
    depth: usize,
) -> Result<(), EncodeError> {
    if depth > MAX_DEPTH {
        return Err(EncodeError::DepthLimit { limit: MAX_DEPTH });
    }
    match val {
        Null => out.put_byte(TAG_NULL),
        Bool(b) => {
            // Shares the one-byte unsigned tag; comes back as an integer.
            out.put_byte(TAG_UINT8);
            out.put_byte(*b as u8);
        }
        Num(Inum::U64(u)) => put_uint(out, *u),
        Num(Inum::I64(i)) => put_int(out, *i),
        Float(f) => {
            out.put_byte(TAG_FLOAT64);
            out.put_slice(&f.to_bits().to_be_bytes());
        }
        Str(s) => {
            put_len(out, TAG_FIXSTR, TAG_STR16, Some(TAG_STR32), s.len(), "string")?;
            out.put_slice(s.as_bytes());
        }
        Byt(b) => {
            put_bytes_len(out, b.len())?;
            out.put_slice(b);
        }
        List(items) => {
            put_len(out, TAG_FIXLIST, TAG_LIST16, None, items.len(), "list")?;
            for item in items {
                ser_poculum(out, item, depth + 1)?;
            }
        }
        Map(entries) => {
            put_len(out, TAG_FIXMAP, TAG_MAP16, None, entries.len(), "map")?;
            for (k, v) in entries.iter() {
                put_len(out, TAG_FIXSTR, TAG_STR16, Some(TAG_STR32), k.len(), "string")?;
                out.put_slice(k.as_bytes());
                ser_poculum(out, v, depth + 1)?;
            }
        }
    }
    Ok(())
}
