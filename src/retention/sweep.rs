//! Retention sweeping
//!
//! A sweep walks an inventory, evaluates every entry that parses against the
//! naming convention, and yields one [`RetentionDecision`] per parseable
//! entry. Unparseable entries are silently excluded: they are neither
//! expired nor retained by this pass, and a caller that needs to know about
//! them must inspect the raw inventory directly.
//!
//! Sweeping is a pure computation; no deletion happens here. The driver
//! acts on the decisions marked expired.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::age;
use super::identifier::{parse, ArtifactIdentifier};

/// Verdict for a single inventory entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetentionDecision {
    /// The raw inventory entry the decision applies to
    pub name: String,
    /// Parsed identifier the verdict was computed from
    pub identifier: ArtifactIdentifier,
    /// Whether the artifact is past its expiry threshold
    pub expired: bool,
}

/// Sweep an inventory at the given instant
///
/// Lazy and restartable: each call walks the given inventory once and
/// carries no state between calls.
pub fn sweep<'a>(
    inventory: &'a [String],
    now: DateTime<Utc>,
) -> impl Iterator<Item = RetentionDecision> + 'a {
    inventory.iter().filter_map(move |raw| {
        let identifier = parse(raw).ok()?;
        let expired = age::is_expired(&identifier, now);
        Some(RetentionDecision {
            name: raw.clone(),
            identifier,
            expired,
        })
    })
}
