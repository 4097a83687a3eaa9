/**
 * Week Window
 *
 * Planning views show the working week (Monday to Friday) containing a
 * reference date. Sunday belongs to the week that started six days
 * earlier.
 */
use chrono::{Datelike, Days, NaiveDate};

/// Monday..=Friday of one ISO week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    pub monday: NaiveDate,
    pub friday: NaiveDate,
}

impl WeekWindow {
    /// Window of the ISO week containing `date`
    ///
    /// `None` when the Monday or Friday falls outside the representable
    /// calendar.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let offset = u64::from(date.weekday().num_days_from_monday());
        let monday = date.checked_sub_days(Days::new(offset))?;
        let friday = monday.checked_add_days(Days::new(4))?;
        Some(Self { monday, friday })
    }

    /// Whether `date` falls inside the window, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.friday
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_midweek_reference() {
        let window = WeekWindow::containing(day(2025, 6, 4)).unwrap();
        assert_eq!(window.monday, day(2025, 6, 2));
        assert_eq!(window.friday, day(2025, 6, 6));
    }

    #[test]
    fn test_monday_is_its_own_start() {
        let window = WeekWindow::containing(day(2025, 6, 2)).unwrap();
        assert_eq!(window.monday, day(2025, 6, 2));
    }

    #[test]
    fn test_sunday_belongs_to_previous_week() {
        let window = WeekWindow::containing(day(2025, 6, 8)).unwrap();
        assert_eq!(window.monday, day(2025, 6, 2));
        assert_eq!(window.friday, day(2025, 6, 6));
    }

    #[test]
    fn test_saturday_maps_to_same_week() {
        let window = WeekWindow::containing(day(2025, 6, 7)).unwrap();
        assert_eq!(window.monday, day(2025, 6, 2));
        assert!(!window.contains(day(2025, 6, 7)));
    }

    #[test]
    fn test_window_spanning_month_boundary() {
        let window = WeekWindow::containing(day(2025, 7, 1)).unwrap();
        assert_eq!(window.monday, day(2025, 6, 30));
        assert_eq!(window.friday, day(2025, 7, 4));
    }

    #[test]
    fn test_calendar_edges_have_no_window() {
        // NaiveDate::MIN is a Thursday whose Monday does not exist
        assert_eq!(WeekWindow::containing(NaiveDate::MIN), None);
        // The last week only has a window when its Friday is representable
        let last_fits = NaiveDate::MAX.weekday().num_days_from_monday() >= 4;
        assert_eq!(WeekWindow::containing(NaiveDate::MAX).is_some(), last_fits);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let window = WeekWindow::containing(day(2025, 6, 4)).unwrap();
        assert!(window.contains(day(2025, 6, 2)));
        assert!(window.contains(day(2025, 6, 6)));
        assert!(!window.contains(day(2025, 6, 1)));
        assert!(!window.contains(day(2025, 6, 9)));
    }
}
