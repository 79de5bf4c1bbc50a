//! Geocell: geohash encoding/decoding and a legacy-compatible string hash.
//!
//! ```
//! use geocell::geohash::{decode, GeoHash};
//!
//! let hash = GeoHash::new(37.7853074, -122.4054274, 10).unwrap();
//! assert_eq!(hash.code(), "9q8yywe56g");
//!
//! let (lat, lng) = decode(hash.code()).unwrap();
//! assert!((lat - 37.7853074).abs() < 0.001);
//! assert!((lng + 122.4054274).abs() < 0.001);
//! ```

pub mod compat_hash;
pub mod config;
pub mod geohash;
pub mod logging;

pub use compat_hash::{hash_code, hash_code_utf16};
pub use geohash::{decode, encode, is_valid, GeoHash, GeoHashError};
