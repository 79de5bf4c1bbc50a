//! Bit-interleaving geohash encoder and decoder.
//!
//! Bit `k` of a code (counted from the first character, most significant bit
//! first) refines longitude when `k` is even and latitude when `k` is odd.
//! Each bit halves the current range of its axis: `1` keeps the upper half,
//! `0` keeps the lower half. A value equal to the midpoint falls in the lower half.

use super::alphabet::{self, BITS_PER_CHAR};
use super::types::{check_precision, Bounds, GeoHashError};

/// Half-open interval being bisected along one axis.
#[derive(Debug, Clone, Copy)]
struct Range {
    low: f64,
    high: f64,
}

impl Range {
    #[inline]
    fn mid(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Keeps the upper half when `bit` is set, the lower half otherwise.
    #[inline]
    fn narrow(&mut self, bit: bool) {
        let mid = self.mid();
        if bit {
            self.low = mid;
        } else {
            self.high = mid;
        }
    }
}

/// Encodes a coordinate into a geohash of `precision` characters.
///
/// Coordinates outside their natural ranges are not rejected; they simply
/// bias the bisection toward the nearest edge.
pub fn encode(latitude: f64, longitude: f64, precision: usize) -> Result<String, GeoHashError> {
    check_precision(precision)?;
    Ok(encode_unchecked(latitude, longitude, precision))
}

pub(crate) fn encode_unchecked(latitude: f64, longitude: f64, precision: usize) -> String {
    let mut lng = Range { low: -180.0, high: 180.0 };
    let mut lat = Range { low: -90.0, high: 90.0 };
    let mut code = String::with_capacity(precision);

    for i in 0..precision {
        let mut value = 0u8;
        for j in 0..BITS_PER_CHAR {
            let (range, v) = if (i * BITS_PER_CHAR + j) % 2 == 0 {
                (&mut lng, longitude)
            } else {
                (&mut lat, latitude)
            };
            let bit = v > range.mid();
            range.narrow(bit);
            value = (value << 1) | bit as u8;
        }
        code.push(alphabet::symbol(value));
    }
    code
}

/// Computes the cell rectangle a code denotes.
///
/// Does not require the code to have passed validation; the first
/// character outside the alphabet fails with `CharacterNotInAlphabet`.
/// An empty code yields the whole world.
pub fn decode_bounds(code: &str) -> Result<Bounds, GeoHashError> {
    let mut lng = Range { low: -180.0, high: 180.0 };
    let mut lat = Range { low: -90.0, high: 90.0 };
    let mut k = 0usize;

    for (position, character) in code.chars().enumerate() {
        let value = alphabet::index_of(character)
            .ok_or(GeoHashError::CharacterNotInAlphabet { character, position })?;
        for shift in (0..BITS_PER_CHAR).rev() {
            let bit = (value >> shift) & 1 == 1;
            if k % 2 == 0 {
                lng.narrow(bit);
            } else {
                lat.narrow(bit);
            }
            k += 1;
        }
    }

    Ok(Bounds {
        min_lat: lat.low,
        max_lat: lat.high,
        min_lng: lng.low,
        max_lng: lng.high,
    })
}

/// Decodes a geohash to the midpoint of its cell, as `(lat, lng)`.
///
/// Lossy: the result is the cell center, not the coordinate that produced
/// the code.
pub fn decode(code: &str) -> Result<(f64, f64), GeoHashError> {
    decode_bounds(code).map(|b| b.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_corners() {
        let cases = [
            (0.0, 0.0, "7zzzzzzzzz"),
            (0.0, -180.0, "2pbpbpbpbp"),
            (0.0, 180.0, "rzzzzzzzzz"),
            (-90.0, 0.0, "5bpbpbpbpb"),
            (-90.0, -180.0, "0000000000"),
            (-90.0, 180.0, "pbpbpbpbpb"),
            (90.0, 0.0, "gzzzzzzzzz"),
            (90.0, -180.0, "bpbpbpbpbp"),
            (90.0, 180.0, "zzzzzzzzzz"),
        ];
        for (lat, lng, expected) in cases {
            assert_eq!(encode(lat, lng, 10).unwrap(), expected, "({}, {})", lat, lng);
        }
    }

    #[test]
    fn test_named_locations() {
        assert_eq!(encode(37.7853074, -122.4054274, 10).unwrap(), "9q8yywe56g");
        assert_eq!(encode(38.98719, -77.250783, 10).unwrap(), "dqcjf17sy6");
    }

    #[test]
    fn test_midpoint_goes_low() {
        // First bit compares longitude 0.0 against the midpoint 0.0.
        assert_eq!(encode(0.0, 0.0, 1).unwrap(), "7");
        assert_eq!(encode(0.0, 0.000001, 1).unwrap(), "k");
    }

    #[test]
    fn test_precision_bounds() {
        assert_eq!(encode(0.0, 0.0, 0), Err(GeoHashError::InvalidPrecision("too low")));
        assert_eq!(encode(0.0, 0.0, 23), Err(GeoHashError::InvalidPrecision("too high")));
        assert_eq!(encode(0.0, 0.0, 1).unwrap().len(), 1);
        assert_eq!(encode(90.0, 180.0, 22).unwrap(), "zzzzzzzzzzzzzzzzzzzzzw");
    }

    #[test]
    fn test_longer_precision_refines_prefix() {
        let (lat, lng) = (29.3760648, 47.9818853);
        let full = encode(lat, lng, 22).unwrap();
        for p in 1..=22 {
            assert_eq!(encode(lat, lng, p).unwrap(), &full[..p]);
        }
    }

    #[test]
    fn test_out_of_range_input_is_not_rejected() {
        assert_eq!(encode(200.0, 500.0, 4).unwrap(), "zzzz");
        assert_eq!(encode(-200.0, -500.0, 4).unwrap(), "0000");
    }

    #[test]
    fn test_decode_known_cell() {
        let (lat, lng) = decode("ezs42").unwrap();
        assert_abs_diff_eq!(lat, 42.60498046875);
        assert_abs_diff_eq!(lng, -5.60302734375);
    }

    #[test]
    fn test_decode_roundtrip_two_decimals() {
        let points = [
            (37.7853074, -122.4054274),
            (-54.933333, -67.616667),
            (90.0, -180.0),
            (0.0, 180.0),
        ];
        for (lat, lng) in points {
            let (r_lat, r_lng) = decode(&encode(lat, lng, 10).unwrap()).unwrap();
            assert_abs_diff_eq!(r_lat, lat, epsilon = 0.005);
            assert_abs_diff_eq!(r_lng, lng, epsilon = 0.005);
        }
    }

    #[test]
    fn test_error_shrinks_with_precision() {
        let (lat, lng) = (78.216667, 15.55);
        let mut last = f64::MAX;
        for p in 1..=22 {
            let bounds = decode_bounds(&encode(lat, lng, p).unwrap()).unwrap();
            assert!(bounds.contains(lat, lng), "precision {}", p);
            let err = bounds.lat_error().max(bounds.lng_error());
            assert!(err < last);
            last = err;
        }
    }

    #[test]
    fn test_decode_reports_bad_character() {
        assert_eq!(
            decode("9q8a"),
            Err(GeoHashError::CharacterNotInAlphabet { character: 'a', position: 3 })
        );
        assert_eq!(
            decode("éz"),
            Err(GeoHashError::CharacterNotInAlphabet { character: 'é', position: 0 })
        );
    }

    #[test]
    fn test_decode_empty_is_world() {
        assert_eq!(decode_bounds("").unwrap(), Bounds::WORLD);
        assert_eq!(decode("").unwrap(), (0.0, 0.0));
    }
}
