use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scheduled appointment. Records are created once from fixture data and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Opaque unique identity, also the seed for `color`
    pub id: String,
    pub title: String,
    /// Timezone-naive start instant
    pub start_time: NaiveDateTime,
    /// Timezone-naive end instant (not checked against `start_time`)
    pub end_time: NaiveDateTime,
    pub number_of_people: u32,
    pub assigned_staff: u32,
    /// Hex display color, e.g. "#007AFF"
    pub color: String,
    pub client_names: Vec<String>,
    pub staff_names: Vec<String>,
}

impl Appointment {
    /// Calendar date of the start instant, ignoring time of day
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Whether this appointment starts on the given calendar date
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start_date() == date
    }
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Filler day from the previous month, completing the first week row
    PaddingBefore,
    /// Actual day within the displayed month
    MonthDay,
    /// Filler day from the next month, completing the last week row
    PaddingAfter,
}

/// Represents a single cell in a month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// Day of month (1-31) of `date`
    pub day: u32,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    pub is_selected: bool,
}

impl CalendarDay {
    /// True when the day belongs to the displayed month
    pub fn is_current_month(&self) -> bool {
        self.day_type == CalendarDayType::MonthDay
    }

    /// Filler days render but cannot be clicked
    pub fn is_selectable(&self) -> bool {
        self.is_current_month()
    }
}

/// Represents a month grid made of complete weeks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarMonth {
    /// Month number (1-12)
    pub month: u32,
    pub year: i32,
    /// Weekday that opens every row of `days`
    pub first_day_of_week: Weekday,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Grid rows, always 7 days each
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    /// Days that belong to the displayed month, in order
    pub fn month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|day| day.is_current_month())
    }
}

/// How the annual calendar lays out its months
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CalendarLayoutMode {
    /// Desktop grid showing a page of months at a time
    #[default]
    Paged,
    /// Mobile carousel showing all twelve months
    Scrolling,
}

/// Light or dark dashboard theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThemePreference::Light => write!(f, "light"),
            ThemePreference::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appointment_at(id: &str, y: i32, m: u32, d: u32, h: u32) -> Appointment {
        let start = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap();
        Appointment {
            id: id.to_string(),
            title: format!("Appointment {}", id),
            start_time: start,
            end_time: start + chrono::Duration::hours(1),
            number_of_people: 1,
            assigned_staff: 1,
            color: "#007AFF".to_string(),
            client_names: vec![],
            staff_names: vec![],
        }
    }

    #[test]
    fn test_start_date_ignores_time_of_day() {
        let late = appointment_at("late", 2025, 12, 12, 23);
        assert_eq!(late.start_date(), NaiveDate::from_ymd_opt(2025, 12, 12).unwrap());
        assert!(late.starts_on(NaiveDate::from_ymd_opt(2025, 12, 12).unwrap()));
        assert!(!late.starts_on(NaiveDate::from_ymd_opt(2025, 12, 13).unwrap()));
    }

    #[test]
    fn test_calendar_day_selectable_only_in_month() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut day = CalendarDay {
            date,
            day: 1,
            day_type: CalendarDayType::MonthDay,
            is_today: false,
            is_selected: false,
        };
        assert!(day.is_selectable());

        day.day_type = CalendarDayType::PaddingBefore;
        assert!(!day.is_selectable());
        day.day_type = CalendarDayType::PaddingAfter;
        assert!(!day.is_current_month());
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Dark.to_string(), "dark");
    }

    #[test]
    fn test_appointment_serializes_naive_times() {
        let appointment = appointment_at("1", 2025, 12, 12, 18);
        let json = serde_json::to_string(&appointment).unwrap();
        assert!(json.contains("2025-12-12T18:00:00"));
        let back: Appointment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, appointment);
    }
}
