/// Null, 0x00. No payload.
pub(crate) const TAG_NULL: u8 = 0x00;
/// Unsigned integer, one payload byte. Booleans share this tag and travel
/// as payloads 0x01 and 0x00.
pub(crate) const TAG_UINT8: u8 = 0x01;
/// Unsigned integer, two payload bytes big-endian.
pub(crate) const TAG_UINT16: u8 = 0x02;
/// Unsigned integer, four payload bytes big-endian.
pub(crate) const TAG_UINT32: u8 = 0x03;
/// Unsigned integer, eight payload bytes big-endian.
pub(crate) const TAG_UINT64: u8 = 0x04;

/// Negative integer, one payload byte two's-complement.
pub(crate) const TAG_INT8: u8 = 0x11;
/// Negative integer, two payload bytes.
pub(crate) const TAG_INT16: u8 = 0x12;
/// Negative integer, four payload bytes.
pub(crate) const TAG_INT32: u8 = 0x13;
/// Negative integer, eight payload bytes.
pub(crate) const TAG_INT64: u8 = 0x14;

/// 64-bit IEEE-754 float, eight payload bytes big-endian.
pub(crate) const TAG_FLOAT64: u8 = 0x22;

/// Fixed-length string base, 0x30–0x3f; the low nibble is the byte length.
pub(crate) const TAG_FIXSTR: u8 = 0x30;
/// Top of the fixstring range.
pub(crate) const TAG_FIXSTR_MAX: u8 = TAG_FIXSTR | MASK_FIX_LEN;
/// String with a 16-bit length field.
pub(crate) const TAG_STR16: u8 = 0x41;
/// String with a 32-bit length field.
pub(crate) const TAG_STR32: u8 = 0x42;

/// Fixed-count list base, 0x50–0x5f.
pub(crate) const TAG_FIXLIST: u8 = 0x50;
/// Top of the fixlist range.
pub(crate) const TAG_FIXLIST_MAX: u8 = TAG_FIXLIST | MASK_FIX_LEN;
/// List with a 16-bit count field.
pub(crate) const TAG_LIST16: u8 = 0x61;

/// Fixed-count map base, 0x70–0x7f.
pub(crate) const TAG_FIXMAP: u8 = 0x70;
/// Top of the fixmap range.
pub(crate) const TAG_FIXMAP_MAX: u8 = TAG_FIXMAP | MASK_FIX_LEN;
/// Map with a 16-bit count field.
pub(crate) const TAG_MAP16: u8 = 0x81;

/// Byte string with an 8-bit length field.
pub(crate) const TAG_BYTES8: u8 = 0x91;
/// Byte string with a 16-bit length field.
pub(crate) const TAG_BYTES16: u8 = 0x92;

/// Low-nibble length mask for the Fix* families, 0x0f.
pub(crate) const MASK_FIX_LEN: u8 = 0x0F;

/// Largest length a Fix* tag packs into its low nibble.
pub(crate) const FIX_MAX: usize = MASK_FIX_LEN as usize;
/// Largest length an 8-bit field carries.
pub(crate) const LEN8_MAX: usize = u8::MAX as usize;
/// Largest length a 16-bit field carries.
pub(crate) const LEN16_MAX: usize = u16::MAX as usize;
/// Largest length a 32-bit field carries.
pub(crate) const LEN32_MAX: usize = u32::MAX as usize;

/// Recursion guard for both the encoder and the decoder. Not part of the
/// wire contract; it bounds stack use on hostile or runaway inputs.
pub(crate) const MAX_DEPTH: usize = 1024;
