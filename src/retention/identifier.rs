//! Artifact identifier codec
//!
//! An artifact's name is the only persisted record of its creation time and
//! retention policy. The naming convention embeds both directly:
//!
//! ```text
//! <base_name>_<YYYYMMDD-HHMM>_exp_<amount><unit>
//! ```
//!
//! where `<unit>` is one of `h` (hours), `d` (days), `m` (months) or `y`
//! (years). Examples:
//!
//! ```text
//! tank/data@nightly_20230101-0000_exp_30d
//! shop_20230101-0430_exp_6m.sql
//! ```
//!
//! This module parses raw names into [`ArtifactIdentifier`] values, encodes
//! new names, and derives the base-name comparison keys used when matching
//! local artifacts against remote ones.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Timestamp token format embedded in artifact names, minute granularity.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M";

/// Unit of an expiry specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryUnit {
    /// Hours (`h`)
    Hour,
    /// Days (`d`)
    Day,
    /// Calendar months (`m`)
    Month,
    /// Calendar years (`y`)
    Year,
}

impl ExpiryUnit {
    /// Map a unit letter to its unit. Case-insensitive.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'h' => Some(Self::Hour),
            'd' => Some(Self::Day),
            'm' => Some(Self::Month),
            'y' => Some(Self::Year),
            _ => None,
        }
    }

    /// The single-letter code used in artifact names
    pub fn letter(&self) -> char {
        match self {
            Self::Hour => 'h',
            Self::Day => 'd',
            Self::Month => 'm',
            Self::Year => 'y',
        }
    }
}

impl fmt::Display for ExpiryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Hour => "hours",
            Self::Day => "days",
            Self::Month => "months",
            Self::Year => "years",
        };
        write!(f, "{}", word)
    }
}

/// Parsed representation of an artifact name
///
/// Constructed by [`parse`] at inventory-read time; immutable; discarded
/// after a single evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactIdentifier {
    /// The portion of the name before the timestamp/expiry suffix
    pub base_name: String,
    /// Creation time, UTC, minute granularity
    pub created_at: DateTime<Utc>,
    /// Expiry threshold in `expiry_unit` units
    pub expiry_amount: f64,
    /// Unit of the expiry threshold
    pub expiry_unit: ExpiryUnit,
}

/// A raw name that does not match the naming convention
///
/// This is a normal outcome, not a fatal error: the sweeper excludes such
/// entries from evaluation and the differ falls back to plain string keys.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// No `YYYYMMDD-HHMM` token found in the name
    #[error("no creation timestamp token in name")]
    MissingTimestamp,

    /// A timestamp token was found but does not denote a real date/time
    #[error("timestamp token does not parse: {0}")]
    InvalidTimestamp(String),

    /// No `exp_<digits><unit>` token found in the name
    #[error("no expiry token in name")]
    MissingExpiry,

    /// The expiry token carries a unit letter outside {h, d, m, y}
    #[error("unsupported expiry unit: {0}")]
    UnsupportedUnit(char),
}

/// Parse a raw artifact name into an [`ArtifactIdentifier`]
///
/// Both the creation-timestamp token and the expiry token must be present
/// and parse successfully; otherwise the name is unparseable and must be
/// treated distinctly from "not yet expired".
pub fn parse(raw_name: &str) -> Result<ArtifactIdentifier, ParseFailure> {
    let (amount, unit) = find_expiry_token(raw_name)?;
    let (ts_start, ts_token) =
        find_timestamp_token(raw_name).ok_or(ParseFailure::MissingTimestamp)?;

    let created_at = parse_timestamp_token(ts_token)
        .ok_or_else(|| ParseFailure::InvalidTimestamp(ts_token.to_string()))?;

    // Base name is everything before the timestamp token, minus the
    // separating underscore.
    let base_name = raw_name[..ts_start].trim_end_matches('_').to_string();

    Ok(ArtifactIdentifier {
        base_name,
        created_at,
        expiry_amount: amount,
        expiry_unit: unit,
    })
}

/// Encode an artifact name from its parts
///
/// Produces `"<base_name>_<YYYYMMDD-HHMM>_exp_<amount><unit>"` with the
/// creation time rendered in UTC at minute granularity. The amount is an
/// integer because the naming convention's expiry token is digit-only.
pub fn encode(base_name: &str, created_at: DateTime<Utc>, amount: u32, unit: ExpiryUnit) -> String {
    format!(
        "{}_{}_exp_{}{}",
        base_name,
        created_at.format(TIMESTAMP_FORMAT),
        amount,
        unit.letter()
    )
}

/// Comparison key for a local artifact name
///
/// Filesystem-hierarchy datasets contain path separators that cannot appear
/// in a flat remote folder; `/` maps to `-`.
pub fn local_base_name(name: &str) -> String {
    name.replace('/', "-")
}

/// Comparison key for a remote artifact name
///
/// Remote entries are plain files: take the final path component and strip
/// the last extension (`tank-data@bk_..._exp_1d.gzip` matches the local
/// `tank/data@bk_..._exp_1d`). A leading-dot name keeps its dot.
pub fn remote_base_name(name: &str) -> String {
    let file = name.rsplit('/').next().unwrap_or(name);
    match file.rfind('.') {
        Some(idx) if idx > 0 => file[..idx].to_string(),
        _ => file.to_string(),
    }
}

/// Parse a `YYYYMMDD-HHMM` token into a UTC timestamp
fn parse_timestamp_token(token: &str) -> Option<DateTime<Utc>> {
    let year: i32 = token[0..4].parse().ok()?;
    let month: u32 = token[4..6].parse().ok()?;
    let day: u32 = token[6..8].parse().ok()?;
    let hour: u32 = token[9..11].parse().ok()?;
    let minute: u32 = token[11..13].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(NaiveDateTime::new(date, time).and_utc())
}

/// Scan for the first `\d{8}-\d{4}` window in the name
///
/// Returns the byte offset and the matched token.
fn find_timestamp_token(name: &str) -> Option<(usize, &str)> {
    let bytes = name.as_bytes();
    if bytes.len() < 13 {
        return None;
    }

    for start in 0..=bytes.len() - 13 {
        let window = &bytes[start..start + 13];
        let is_match = window[..8].iter().all(u8::is_ascii_digit)
            && window[8] == b'-'
            && window[9..].iter().all(u8::is_ascii_digit);
        if is_match {
            return Some((start, &name[start..start + 13]));
        }
    }

    None
}

/// Scan for the first `exp_<digits><unit>` token in the name
///
/// The `exp_` prefix is literal; the unit letter is case-insensitive. At
/// least one digit is required.
fn find_expiry_token(name: &str) -> Result<(f64, ExpiryUnit), ParseFailure> {
    let mut search_from = 0;

    while let Some(rel) = name[search_from..].find("exp_") {
        let digits_start = search_from + rel + 4;
        let digits_len = name[digits_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        if digits_len > 0 {
            if let Some(letter) = name[digits_start + digits_len..].chars().next() {
                match ExpiryUnit::from_letter(letter) {
                    Some(unit) => {
                        // Digit-only token: always a valid f64.
                        let amount: f64 = name[digits_start..digits_start + digits_len]
                            .parse()
                            .unwrap_or(0.0);
                        return Ok((amount, unit));
                    }
                    None => return Err(ParseFailure::UnsupportedUnit(letter)),
                }
            }
        }

        search_from += rel + 4;
    }

    Err(ParseFailure::MissingExpiry)
}
