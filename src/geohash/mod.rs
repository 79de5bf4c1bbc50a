//! Geohash subsystem.
//!
//! Encodes coordinates into base32 geohash strings whose shared prefixes
//! denote nearby cells, decodes them back to cell midpoints, and validates
//! strings over the geohash alphabet.

pub mod alphabet;
pub mod codec;
pub mod types;

pub use alphabet::{is_valid, ALPHABET, BITS_PER_CHAR};
pub use codec::{decode, decode_bounds, encode};
pub use types::{
    Bounds, GeoHash, GeoHashError, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_PRECISION,
    MAX_PRECISION, MIN_PRECISION,
};
