//! Export filename generation

use chrono::NaiveDateTime;

/// Generate the markdown export filename for a task,
/// e.g. `roo_task_aug-28-2026_3-05-09-pm.md`.
///
/// Month is the lowercase 3-letter abbreviation, day and 12-hour hour are
/// unpadded (hour 0 renders as 12), minutes and seconds are zero-padded.
pub fn task_file_name(date: NaiveDateTime) -> String {
    format!(
        "roo_task_{}.md",
        date.format("%b-%-d-%Y_%-I-%M-%S-%P")
            .to_string()
            .to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_afternoon_file_name() {
        assert_eq!(
            task_file_name(at(2026, 8, 28, 15, 5, 9)),
            "roo_task_aug-28-2026_3-05-09-pm.md"
        );
    }

    #[test]
    fn test_morning_file_name() {
        assert_eq!(
            task_file_name(at(2024, 1, 3, 9, 30, 0)),
            "roo_task_jan-3-2024_9-30-00-am.md"
        );
    }

    #[test]
    fn test_midnight_renders_as_twelve() {
        assert_eq!(
            task_file_name(at(2024, 12, 31, 0, 0, 59)),
            "roo_task_dec-31-2024_12-00-59-am.md"
        );
    }

    #[test]
    fn test_noon_renders_as_twelve_pm() {
        assert_eq!(
            task_file_name(at(2024, 6, 15, 12, 1, 2)),
            "roo_task_jun-15-2024_12-01-02-pm.md"
        );
    }
}
