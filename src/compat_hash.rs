//! 32-bit string hash compatible with the JVM's `String.hashCode()`.
//!
//! `h = h * 31 + c` over the characters in order, with every step wrapping
//! in two's-complement `i32`. The empty string hashes to 0.

/// Hashes one term per Unicode scalar value.
///
/// Identical to the JVM result for any string inside the Basic Multilingual
/// Plane. For astral characters use [`hash_code_utf16`].
pub fn hash_code(s: &str) -> i32 {
    s.chars()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32))
}

/// Hashes one term per UTF-16 code unit, exactly as the JVM does.
pub fn hash_code_utf16(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(hash_code(""), 0);
        assert_eq!(hash_code_utf16(""), 0);
    }

    #[test]
    fn test_ascii_reference_values() {
        assert_eq!(hash_code("a"), 97);
        assert_eq!(hash_code("hello"), 99162322);
        assert_eq!(hash_code("Hello, World!"), 1498789909);
        assert_eq!(hash_code("9q8yywe56g"), 1708722520);
        assert_eq!(hash_code("0000000000"), 1419845120);
    }

    #[test]
    fn test_wraparound() {
        assert_eq!(hash_code("polygenelubricants"), i32::MIN);
        assert_eq!(hash_code("dqcjf17sy6"), -1557552968);
        assert_eq!(hash_code("7zzzzzzzzz"), -1299476189);
        assert_eq!(hash_code("zzzzzzzzzzzzzzzzzzzzzz"), -2096236608);
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(hash_code("héllo"), 103094734);
        assert_eq!(hash_code("日本語"), 25921943);
        assert_eq!(hash_code_utf16("日本語"), 25921943);
    }

    #[test]
    fn test_astral_scalar_vs_utf16() {
        assert_eq!(hash_code("😀"), 128512);
        assert_eq!(hash_code_utf16("😀"), 1772899);
    }

    #[test]
    fn test_deterministic() {
        let s = String::from("dqcjf17sy6cppp8vfn");
        assert_eq!(hash_code(&s), hash_code(&s.clone()));
    }
}
