use clap::{Parser, Subcommand};
use geocell::compat_hash;
use geocell::config::{Config, OutputFormat};
use geocell::geohash::{self, Bounds, GeoHash};
use geocell::logging::{self, LogLevel};
use serde::Serialize;
use std::path::PathBuf;

/// Geocell: geohash encoder/decoder and legacy-compatible string hash.
///
/// Examples:
///   geocell encode --lat 37.7853074 --lon -122.4054274
///   geocell encode --lat 38.98719 --lon -77.250783 --precision 6
///   geocell decode 9q8yywe56g
///   geocell validate 9q8yywe56g
///   geocell hash "hello" --format plain
#[derive(Parser)]
#[command(name = "geocell", version, about, long_about = None)]
struct Cli {
    /// Config file. Defaults to ~/.geocell/config.json.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (overrides config and RUST_LOG).
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    /// Output format (overrides config).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a coordinate into a geohash.
    Encode {
        /// Latitude (-90 to 90).
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude (-180 to 180).
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        /// Code length, 1 to 22. Defaults to the configured precision.
        #[arg(long, short = 'p')]
        precision: Option<usize>,
    },
    /// Decode a geohash to its cell midpoint and bounds.
    Decode { code: String },
    /// Check a string against the geohash alphabet. Exits 2 when invalid.
    Validate { code: String },
    /// 32-bit signed string hash, JVM `String.hashCode()` compatible.
    Hash {
        input: String,

        /// Hash UTF-16 code units instead of Unicode scalar values.
        #[arg(long)]
        utf16: bool,
    },
}

#[derive(Serialize)]
struct EncodeOutput {
    lat: f64,
    lon: f64,
    precision: usize,
    geohash: GeoHash,
}

#[derive(Serialize)]
struct DecodeOutput {
    geohash: String,
    lat: f64,
    lon: f64,
    lat_error: f64,
    lon_error: f64,
    bounds: Bounds,
}

#[derive(Serialize)]
struct ValidateOutput {
    input: String,
    valid: bool,
}

#[derive(Serialize)]
struct HashOutput {
    input: String,
    hash: i32,
    units: &'static str,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .unwrap_or_else(|e| fail(e));

    logging::setup_tracing(cli.log_level.or(config.log_level));
    tracing::debug!(?config, "effective config");

    let format = cli.format.unwrap_or(config.output);

    match cli.command {
        Command::Encode { lat, lon, precision } => {
            let precision = precision.unwrap_or(config.default_precision);
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                tracing::warn!(lat, lon, "coordinate outside natural range; bisection saturates at the nearest edge");
            }
            let hash = GeoHash::new(lat, lon, precision).unwrap_or_else(|e| fail(e));
            match format {
                OutputFormat::Plain => println!("{}", hash),
                OutputFormat::Json => print_json(&EncodeOutput {
                    lat,
                    lon,
                    precision,
                    geohash: hash,
                }),
            }
        }
        Command::Decode { code } => {
            let bounds = geohash::decode_bounds(&code).unwrap_or_else(|e| fail(e));
            let (lat, lon) = bounds.center();
            match format {
                OutputFormat::Plain => println!("{} {}", lat, lon),
                OutputFormat::Json => print_json(&DecodeOutput {
                    geohash: code,
                    lat,
                    lon,
                    lat_error: bounds.lat_error(),
                    lon_error: bounds.lng_error(),
                    bounds,
                }),
            }
        }
        Command::Validate { code } => {
            let valid = GeoHash::from_code(code.as_str()).is_ok();
            match format {
                OutputFormat::Plain => println!("{}", valid),
                OutputFormat::Json => print_json(&ValidateOutput { input: code, valid }),
            }
            if !valid {
                std::process::exit(2);
            }
        }
        Command::Hash { input, utf16 } => {
            let (hash, units) = if utf16 {
                (compat_hash::hash_code_utf16(&input), "utf16")
            } else {
                (compat_hash::hash_code(&input), "scalar")
            };
            match format {
                OutputFormat::Plain => println!("{}", hash),
                OutputFormat::Json => print_json(&HashOutput { input, hash, units }),
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => fail(e),
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", e);
    std::process::exit(1);
}
