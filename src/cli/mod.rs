//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod dump;
pub mod export;
pub mod snapshot;

pub use dump::{handle_dump_command, DumpArgs};
pub use export::{handle_export_command, ExportArgs};
pub use snapshot::{handle_snapshot_command, SnapshotCommands};

use crate::retention::ExpiryUnit;

/// A time-to-live argument: amount plus unit
#[derive(Debug, Clone, Copy)]
pub struct Ttl {
    /// Threshold amount
    pub amount: u32,
    /// Threshold unit
    pub unit: ExpiryUnit,
}

/// Parse a TTL argument of the form `<digits><h|d|m|y>`, e.g. `30d`
pub fn parse_ttl(value: &str) -> Result<Ttl, String> {
    let digits_len = value.bytes().take_while(u8::is_ascii_digit).count();
    let mut rest = value[digits_len..].chars();
    let unit_letter = rest.next();

    if digits_len == 0 || unit_letter.is_none() || rest.next().is_some() {
        return Err(format!(
            "invalid time-to-live '{}': expected <digits><h|d|m|y>, e.g. 30d",
            value
        ));
    }
    let unit_letter = unit_letter.unwrap();

    let amount: u32 = value[..digits_len]
        .parse()
        .map_err(|_| format!("invalid time-to-live amount '{}'", &value[..digits_len]))?;
    let unit = ExpiryUnit::from_letter(unit_letter).ok_or_else(|| {
        format!(
            "unsupported time-to-live unit '{}': expected one of h, d, m, y",
            unit_letter
        )
    })?;

    Ok(Ttl { amount, unit })
}
