//! The 32-symbol geohash alphabet and string validation.
//!
//! The alphabet omits `a`, `i`, `l` and `o`. It is not the RFC 4648 base32 set.

/// Geohash base32 symbols, indexed by 5-bit value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Each geohash character carries this many interleaved bits.
pub const BITS_PER_CHAR: usize = 5;

const INVALID: u8 = 0xFF;

/// Byte → 5-bit value. `INVALID` for bytes outside the alphabet.
static DECODE_LUT: [u8; 256] = build_decode_lut();

const fn build_decode_lut() -> [u8; 256] {
    let mut lut = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

/// Symbol for a 5-bit value. Only the low five bits are used.
#[inline]
pub fn symbol(value: u8) -> char {
    ALPHABET[(value & 0x1F) as usize] as char
}

/// Position of `c` in the alphabet, or `None` if it is not a geohash symbol.
#[inline]
pub fn index_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_LUT[c as usize] {
        INVALID => None,
        v => Some(v),
    }
}

/// True iff `s` is non-empty and every character is a geohash symbol.
pub fn is_valid(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| index_of(c).is_some())
}
