use chrono::Duration;

/// Format a session duration as a compact human-readable string.
///
/// Seconds are only shown for durations under an hour.
///
/// # Examples
///
/// ```
/// use cardsort_core::formatting::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(Duration::seconds(45)),   "45s");
/// assert_eq!(format_duration(Duration::seconds(725)),  "12m 5s");
/// assert_eq!(format_duration(Duration::seconds(3600)), "1h");
/// assert_eq!(format_duration(Duration::seconds(3720)), "1h 2m");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.num_seconds();
    let sign = if total_secs < 0 { "-" } else { "" };
    let total_secs = total_secs.unsigned_abs();

    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let body = if hours > 0 {
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    } else if mins > 0 {
        if secs == 0 {
            format!("{}m", mins)
        } else {
            format!("{}m {}s", mins, secs)
        }
    } else {
        format!("{}s", secs)
    };

    format!("{}{}", sign, body)
}

/// Pluralise `noun` for `count`, e.g. `1 card`, `3 cards`.
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(Duration::zero()), "0s");
    }

    #[test]
    fn test_format_duration_seconds_only() {
        assert_eq!(format_duration(Duration::seconds(59)), "59s");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(Duration::seconds(60)), "1m");
        assert_eq!(format_duration(Duration::seconds(61)), "1m 1s");
        assert_eq!(format_duration(Duration::seconds(725)), "12m 5s");
    }

    #[test]
    fn test_format_duration_hours_drop_seconds() {
        assert_eq!(format_duration(Duration::seconds(3600)), "1h");
        assert_eq!(format_duration(Duration::seconds(3659)), "1h");
        assert_eq!(format_duration(Duration::seconds(5400)), "1h 30m");
    }

    #[test]
    fn test_format_duration_truncates_millis() {
        assert_eq!(format_duration(Duration::milliseconds(1999)), "1s");
    }

    #[test]
    fn test_format_duration_negative() {
        assert_eq!(format_duration(Duration::seconds(-90)), "-1m 30s");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0, "card"), "0 cards");
        assert_eq!(count_label(1, "card"), "1 card");
        assert_eq!(count_label(4, "group"), "4 groups");
    }
}
