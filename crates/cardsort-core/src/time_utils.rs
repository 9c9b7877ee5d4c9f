use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::{Result, SortError};

/// Naive date-time patterns accepted when no offset is present.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse an ISO 8601 timestamp into a UTC instant.
///
/// Accepts RFC 3339 strings (with `Z` or a numeric offset, optional
/// fractional seconds). Timestamps without an offset, and bare dates, are
/// taken to be UTC.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(SortError::TimestampParse(s.to_string()));
    }

    // Lowercase 'z' is valid ISO 8601 but rejected by chrono's RFC 3339 parser.
    let normalised = match trimmed.strip_suffix(['Z', 'z']) {
        Some(stripped) => format!("{}+00:00", stripped),
        None => trimmed.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalised) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    if let Some(naive) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    Err(SortError::TimestampParse(s.to_string()))
}
