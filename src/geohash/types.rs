//! Core types for the geohash subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::alphabet;
use super::codec;
use crate::compat_hash;

/// Longest supported code. 22 × 5 = 110 interleaved bits.
pub const MAX_PRECISION: usize = 22;
pub const MIN_PRECISION: usize = 1;
pub const DEFAULT_PRECISION: usize = 10;

/// Coordinate used by `GeoHash::default()`.
pub const DEFAULT_LATITUDE: f64 = 37.765173;
pub const DEFAULT_LONGITUDE: f64 = -122.439584;

/// Geohash errors. All of them indicate caller misuse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoHashError {
    /// Precision outside `MIN_PRECISION..=MAX_PRECISION`. Payload is `"too low"` or `"too high"`.
    #[error("Invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Empty or non-alphabet string given to the string constructor.
    #[error("Not a valid geohash: '{0}'")]
    InvalidGeohashFormat(String),

    /// The decoder met a character it cannot look up.
    #[error("Character {character:?} at position {position} is not in the geohash alphabet")]
    CharacterNotInAlphabet { character: char, position: usize },
}

/// Checks a precision against the supported range.
pub(crate) fn check_precision(precision: usize) -> Result<(), GeoHashError> {
    if precision < MIN_PRECISION {
        return Err(GeoHashError::InvalidPrecision("too low"));
    }
    if precision > MAX_PRECISION {
        return Err(GeoHashError::InvalidPrecision("too high"));
    }
    Ok(())
}

/// The rectangle of a geohash cell, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl Bounds {
    /// The whole globe: the starting rectangle of every bisection.
    pub const WORLD: Bounds = Bounds {
        min_lat: -90.0,
        max_lat: 90.0,
        min_lng: -180.0,
        max_lng: 180.0,
    };

    /// Cell midpoint as `(lat, lng)`.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }

    /// Half the cell height.
    pub fn lat_error(&self) -> f64 {
        (self.max_lat - self.min_lat) / 2.0
    }

    /// Half the cell width.
    pub fn lng_error(&self) -> f64 {
        (self.max_lng - self.min_lng) / 2.0
    }

    /// Inclusive on every edge.
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        (self.min_lat..=self.max_lat).contains(&lat) && (self.min_lng..=self.max_lng).contains(&lng)
    }
}

/// An immutable geohash code.
///
/// Built either from a coordinate (the code is computed) or from a string
/// (the code is validated and kept verbatim). Identity is the code alone:
/// the coordinate a code came from is not retained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeoHash {
    code: String,
}

impl GeoHash {
    /// Encodes `(latitude, longitude)` at `precision` characters.
    pub fn new(latitude: f64, longitude: f64, precision: usize) -> Result<Self, GeoHashError> {
        let code = codec::encode(latitude, longitude, precision)?;
        Ok(Self { code })
    }

    /// Wraps an existing code after validating it.
    pub fn from_code(code: impl Into<String>) -> Result<Self, GeoHashError> {
        let code = code.into();
        if !alphabet::is_valid(&code) || code.len() > MAX_PRECISION {
            return Err(GeoHashError::InvalidGeohashFormat(code));
        }
        Ok(Self { code })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of characters, i.e. the precision.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Always false; a `GeoHash` holds at least one character.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn into_string(self) -> String {
        self.code
    }

    /// Legacy-compatible 32-bit hash of the code.
    pub fn hash_code(&self) -> i32 {
        compat_hash::hash_code(&self.code)
    }

    /// Cell midpoint as `(lat, lng)`.
    pub fn decode(&self) -> (f64, f64) {
        self.bounds().center()
    }

    pub fn bounds(&self) -> Bounds {
        // Validated at construction, so every character resolves.
        codec::decode_bounds(&self.code).unwrap_or(Bounds::WORLD)
    }

    /// True if `other` lies inside this cell (this code is a prefix of it).
    pub fn contains(&self, other: &GeoHash) -> bool {
        other.code.starts_with(&self.code)
    }
}

impl Default for GeoHash {
    fn default() -> Self {
        Self {
            code: codec::encode_unchecked(DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_PRECISION),
        }
    }
}

impl fmt::Display for GeoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for GeoHash {
    type Err = GeoHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl TryFrom<String> for GeoHash {
    type Error = GeoHashError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl TryFrom<&str> for GeoHash {
    type Error = GeoHashError;

    fn try_from(code: &str) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<GeoHash> for String {
    fn from(hash: GeoHash) -> Self {
        hash.code
    }
}

impl AsRef<str> for GeoHash {
    fn as_ref(&self) -> &str {
        &self.code
    }
}
