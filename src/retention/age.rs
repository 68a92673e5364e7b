//! Artifact age evaluation
//!
//! Computes how old an artifact is in the unit of its own expiry
//! specification and decides whether it is past its threshold.
//!
//! "Now" is always an explicit parameter so evaluation is deterministic and
//! testable without mocking the clock. Hours and days divide elapsed seconds
//! directly; months and years use calendar-aware differencing: whole
//! calendar steps from the creation instant, plus the fraction of the
//! current partial step. `2023-01-31 + 1 month` anchors at the end of
//! February, so a snapshot from Jan 31 is exactly "1 month old" on Feb 28.

use chrono::{DateTime, Datelike, Months, Utc};

use super::identifier::{ArtifactIdentifier, ExpiryUnit};

const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Elapsed age of an artifact against its expiry threshold
///
/// `elapsed` and `threshold` are expressed in `unit` units. A negative
/// `elapsed` means the creation timestamp lies in the future.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeReport {
    /// Wall-clock time since creation, in `unit` units
    pub elapsed: f64,
    /// Expiry threshold from the artifact's name, in `unit` units
    pub threshold: f64,
    /// Unit both values are expressed in
    pub unit: ExpiryUnit,
}

impl AgeReport {
    /// Strict comparison: an artifact exactly at its expiry boundary is
    /// NOT yet expired.
    pub fn is_expired(&self) -> bool {
        self.elapsed > self.threshold
    }
}

/// Evaluate an identifier's age at the given instant
pub fn evaluate(identifier: &ArtifactIdentifier, now: DateTime<Utc>) -> AgeReport {
    let elapsed = match identifier.expiry_unit {
        ExpiryUnit::Hour => seconds_between(identifier.created_at, now) / SECONDS_PER_HOUR,
        ExpiryUnit::Day => seconds_between(identifier.created_at, now) / SECONDS_PER_DAY,
        ExpiryUnit::Month => calendar_steps_between(identifier.created_at, now, 1),
        ExpiryUnit::Year => calendar_steps_between(identifier.created_at, now, 12),
    };

    AgeReport {
        elapsed,
        threshold: identifier.expiry_amount,
        unit: identifier.expiry_unit,
    }
}

/// Whether the identifier is expired at the given instant
pub fn is_expired(identifier: &ArtifactIdentifier, now: DateTime<Utc>) -> bool {
    evaluate(identifier, now).is_expired()
}

fn seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_seconds() as f64
}

/// Calendar-aware difference in steps of `months_per_step` months
///
/// Counts whole steps from `start` that fit before `end`, then adds the
/// fraction of the step in progress, measured between the surrounding
/// anchor instants. Signed: a `start` after `end` yields a negative value.
fn calendar_steps_between(start: DateTime<Utc>, end: DateTime<Utc>, months_per_step: u32) -> f64 {
    if end < start {
        return -calendar_steps_between(end, start, months_per_step);
    }

    // Field-based estimate, then correct downward when the anchor overshoots
    // (clamped month ends make the estimate at most one step high).
    let field_months =
        (end.year() - start.year()) as i64 * 12 + end.month() as i64 - start.month() as i64;
    let mut whole = (field_months / months_per_step as i64).max(0);
    if whole > 0 && add_months(start, whole * months_per_step as i64) > end {
        whole -= 1;
    }

    let anchor = add_months(start, whole * months_per_step as i64);
    let next = add_months(start, (whole + 1) * months_per_step as i64);

    let step_seconds = (next - anchor).num_seconds() as f64;
    let into_step = (end - anchor).num_seconds() as f64;
    let fraction = if step_seconds > 0.0 {
        into_step / step_seconds
    } else {
        0.0
    };

    whole as f64 + fraction
}

fn add_months(instant: DateTime<Utc>, months: i64) -> DateTime<Utc> {
    instant
        .checked_add_months(Months::new(months as u32))
        .unwrap_or(instant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn identifier(created_at: DateTime<Utc>, amount: f64, unit: ExpiryUnit) -> ArtifactIdentifier {
        ArtifactIdentifier {
            base_name: "test".to_string(),
            created_at,
            expiry_amount: amount,
            expiry_unit: unit,
        }
    }

    #[test]
    fn test_elapsed_hours() {
        let created = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 5, 30, 0).unwrap();

        let report = evaluate(&identifier(created, 6.0, ExpiryUnit::Hour), now);
        assert_eq!(report.elapsed, 5.5);
        assert!(!report.is_expired());
    }

    #[test]
    fn test_boundary_is_not_expired() {
        // Exactly 24 hours old with a 1-day threshold: elapsed == threshold
        let created = Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 6, 2, 12, 0, 0).unwrap();

        let report = evaluate(&identifier(created, 1.0, ExpiryUnit::Day), now);
        assert_eq!(report.elapsed, 1.0);
        assert!(!report.is_expired());

        // One minute past the boundary IS expired
        let just_past = Utc.with_ymd_and_hms(2023, 6, 2, 12, 1, 0).unwrap();
        assert!(is_expired(&identifier(created, 1.0, ExpiryUnit::Day), just_past));
    }

    #[test]
    fn test_25_hours_against_day_thresholds() {
        let created = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 6, 2, 1, 0, 0).unwrap();

        let one_day = evaluate(&identifier(created, 1.0, ExpiryUnit::Day), now);
        assert!((one_day.elapsed - 25.0 / 24.0).abs() < 1e-9);
        assert!(one_day.is_expired());

        let two_days = evaluate(&identifier(created, 2.0, ExpiryUnit::Day), now);
        assert!(!two_days.is_expired());
    }

    #[test]
    fn test_sixty_days_against_30d_threshold() {
        // remote entry backup_20200101-0000_exp_30d evaluated at 2020-03-01
        let created = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();

        let report = evaluate(&identifier(created, 30.0, ExpiryUnit::Day), now);
        assert_eq!(report.elapsed, 60.0); // 2020 is a leap year: 31 + 29
        assert!(report.is_expired());
    }

    #[test]
    fn test_calendar_months_simple() {
        let created = Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 3, 15, 0, 0, 0).unwrap();

        let report = evaluate(&identifier(created, 2.0, ExpiryUnit::Month), now);
        assert_eq!(report.elapsed, 2.0);
        assert!(!report.is_expired());
    }

    #[test]
    fn test_calendar_months_clamped_month_end() {
        // Jan 31 + 1 month clamps to Feb 28: exactly one month old there,
        // not expired with a 1-month threshold.
        let created = Utc.with_ymd_and_hms(2023, 1, 31, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 2, 28, 0, 0, 0).unwrap();

        let report = evaluate(&identifier(created, 1.0, ExpiryUnit::Month), now);
        assert_eq!(report.elapsed, 1.0);
        assert!(!report.is_expired());

        let next_day = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
        assert!(is_expired(&identifier(created, 1.0, ExpiryUnit::Month), next_day));
    }

    #[test]
    fn test_calendar_month_fraction() {
        // Halfway through June (30 days): Jun 1 -> Jun 16 is 0.5 months
        let created = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 6, 16, 0, 0, 0).unwrap();

        let report = evaluate(&identifier(created, 1.0, ExpiryUnit::Month), now);
        assert_eq!(report.elapsed, 0.5);
    }

    #[test]
    fn test_calendar_years_leap_aware() {
        let created = Utc.with_ymd_and_hms(2020, 2, 29, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2021, 2, 28, 0, 0, 0).unwrap();

        // Feb 29 + 12 months clamps to Feb 28: exactly one year old
        let report = evaluate(&identifier(created, 1.0, ExpiryUnit::Year), now);
        assert_eq!(report.elapsed, 1.0);
        assert!(!report.is_expired());
    }

    #[test]
    fn test_years_elapsed_multi() {
        let created = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 9, 1, 0, 0, 0).unwrap();

        let report = evaluate(&identifier(created, 5.0, ExpiryUnit::Year), now);
        assert!(report.elapsed > 3.4 && report.elapsed < 3.6);
        assert!(!report.is_expired());
    }

    #[test]
    fn test_future_created_at_is_never_expired() {
        let created = Utc.with_ymd_and_hms(2023, 6, 2, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();

        for unit in [ExpiryUnit::Hour, ExpiryUnit::Day, ExpiryUnit::Month, ExpiryUnit::Year] {
            let report = evaluate(&identifier(created, 0.0, unit), now);
            assert!(report.elapsed < 0.0, "unit {:?}", unit);
            assert!(!report.is_expired());
        }
    }

    #[test]
    fn test_zero_threshold_expires_immediately_after_creation() {
        let created = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2023, 6, 1, 0, 1, 0).unwrap();

        assert!(is_expired(&identifier(created, 0.0, ExpiryUnit::Hour), now));
        // At the exact creation instant: elapsed == 0 == threshold, not expired
        assert!(!is_expired(&identifier(created, 0.0, ExpiryUnit::Hour), created));
    }
}
