use chrono::NaiveDate;

use crate::model::attendance::AttendanceEntry;

/// Number of consecutive most-recent days the member was marked present.
///
/// Entries are walked newest first. A present entry at the expected offset
/// extends the streak; an absent entry one day past it, or any larger gap,
/// ends it. Anything else (duplicate days, future dates, an absent mark on
/// the expected day) is skipped.
///
/// Today may not have been recorded yet. When no entry is dated `today` the
/// walk is anchored at yesterday, so a streak built on prior days survives
/// until an explicit absence or a gap.
pub fn compute_streak(entries: &[AttendanceEntry], today: NaiveDate) -> u32 {
    if entries.is_empty() {
        return 0;
    }

    let mut sorted: Vec<&AttendanceEntry> = entries.iter().collect();
    // Stable, so entries for the same day keep their supplied order.
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let anchor = if entries.iter().any(|e| e.date == today) {
        today
    } else {
        today.pred_opt().unwrap_or(today)
    };

    let mut streak: i64 = 0;
    for entry in sorted {
        let days_diff = (anchor - entry.date).num_days();

        if days_diff == streak && entry.is_present {
            streak += 1;
        } else if days_diff == streak + 1 && !entry.is_present {
            break;
        } else if days_diff > streak + 1 {
            break;
        }
    }

    streak as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn ago(days: i64, is_present: bool) -> AttendanceEntry {
        AttendanceEntry::new(today() - Duration::days(days), is_present)
    }

    #[test]
    fn test_empty_history_has_no_streak() {
        assert_eq!(compute_streak(&[], today()), 0);
    }

    #[test]
    fn test_consecutive_days_through_today() {
        let entries: Vec<_> = (0..7).map(|d| ago(d, true)).collect();
        assert_eq!(compute_streak(&entries, today()), 7);
    }

    #[test]
    fn test_explicit_absence_ends_streak() {
        let entries = vec![ago(0, true), ago(1, true), ago(2, false), ago(3, true)];
        assert_eq!(compute_streak(&entries, today()), 2);
    }

    #[test]
    fn test_unrecorded_today_keeps_prior_streak() {
        let entries = vec![ago(1, true), ago(2, true)];
        assert_eq!(compute_streak(&entries, today()), 2);
    }

    #[test]
    fn test_old_single_entry_is_not_a_streak() {
        assert_eq!(compute_streak(&[ago(5, true)], today()), 0);
    }

    #[test]
    fn test_gap_ends_streak() {
        let entries = vec![ago(0, true), ago(1, true), ago(3, true), ago(4, true)];
        assert_eq!(compute_streak(&entries, today()), 2);
    }

    #[test]
    fn test_absent_today_means_no_streak() {
        let entries = vec![ago(0, false), ago(1, true), ago(2, true)];
        assert_eq!(compute_streak(&entries, today()), 0);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let entries = vec![ago(2, true), ago(0, true), ago(3, false), ago(1, true)];
        assert_eq!(compute_streak(&entries, today()), 3);
    }

    #[test]
    fn test_duplicate_days_are_skipped() {
        let entries = vec![ago(0, true), ago(0, true), ago(1, true), ago(1, false)];
        assert_eq!(compute_streak(&entries, today()), 2);
    }

    #[test]
    fn test_absent_duplicate_before_present_is_skipped() {
        let entries = vec![ago(0, false), ago(0, true), ago(1, true)];
        assert_eq!(compute_streak(&entries, today()), 2);
    }

    #[test]
    fn test_future_entries_are_ignored() {
        let entries = vec![ago(-2, true), ago(0, true), ago(1, true)];
        assert_eq!(compute_streak(&entries, today()), 2);
    }
}
