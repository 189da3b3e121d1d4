//! Fixed pt-BR labels and date formatting used across the dashboard.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

const MONTH_NAMES: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

// Indexed by `num_days_from_sunday`
const WEEKDAY_SHORT: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];
const WEEKDAY_LONG: [&str; 7] = [
    "domingo", "segunda-feira", "terça-feira", "quarta-feira",
    "quinta-feira", "sexta-feira", "sábado",
];

/// Lowercase month name for a month number (1-12)
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[month as usize - 1],
        _ => "mês inválido",
    }
}

/// Month name as shown above a month grid, e.g. "Dezembro"
pub fn month_title(month: u32) -> String {
    capitalize(month_name(month))
}

pub fn weekday_long(weekday: Weekday) -> &'static str {
    WEEKDAY_LONG[weekday.num_days_from_sunday() as usize]
}

/// Column headers for a grid whose rows start on `first_day_of_week`
pub fn weekday_header_labels(first_day_of_week: Weekday) -> [&'static str; 7] {
    let offset = first_day_of_week.num_days_from_sunday() as usize;
    std::array::from_fn(|column| WEEKDAY_SHORT[(offset + column) % 7])
}

/// Panel heading, e.g. "Sexta-feira, 12 de dezembro de 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    capitalize(&format!(
        "{}, {:02} de {} de {}",
        weekday_long(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    ))
}

/// "HH:mm"
pub fn format_time(instant: NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}

/// Details modal start label, e.g. "18:00 de 12 de dezembro de 2025"
pub fn format_time_with_date(instant: NaiveDateTime) -> String {
    capitalize(&format!(
        "{} de {:02} de {} de {}",
        format_time(instant),
        instant.day(),
        month_name(instant.month()),
        instant.year()
    ))
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), "janeiro");
        assert_eq!(month_name(3), "março");
        assert_eq!(month_title(12), "Dezembro");
        assert_eq!(month_name(13), "mês inválido");
    }

    #[test]
    fn test_weekday_headers_rotate() {
        assert_eq!(
            weekday_header_labels(Weekday::Sun),
            ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"]
        );
        assert_eq!(
            weekday_header_labels(Weekday::Mon),
            ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"]
        );
    }

    #[test]
    fn test_format_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 12).unwrap();
        assert_eq!(format_long_date(date), "Sexta-feira, 12 de dezembro de 2025");

        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(format_long_date(date), "Sábado, 01 de março de 2025");
    }

    #[test]
    fn test_time_formats() {
        let instant = NaiveDate::from_ymd_opt(2025, 12, 12)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_time(instant), "09:05");
        assert_eq!(format_time_with_date(instant), "09:05 de 12 de dezembro de 2025");
    }

    #[test]
    fn test_capitalize_handles_accents_and_empty() {
        assert_eq!(capitalize("éter"), "Éter");
        assert_eq!(capitalize(""), "");
    }
}
