//! Calendar domain logic for the appointment dashboard.
//!
//! This module owns all date math behind the annual view: the twelve month
//! anchors of a year, the full-week grid of each month and the paging of
//! months for the desktop layout. The UI only renders what is computed here.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::{debug, info};
use std::ops::RangeInclusive;
use shared::{CalendarDay, CalendarDayType, CalendarMonth};

/// First date of every month of `year`, January through December.
pub fn enumerate_months(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .collect()
}

/// Build the grid of complete weeks covering the month of `anchor`.
///
/// The range is widened backwards to the latest `first_day_of_week` on or
/// before the 1st, and forwards to the end of the week holding the last
/// day. A month already aligned on either edge gets no filler there.
pub fn build_month_grid(
    anchor: NaiveDate,
    first_day_of_week: Weekday,
    today: NaiveDate,
    selected_date: Option<NaiveDate>,
) -> CalendarMonth {
    let month_start = anchor.with_day(1).unwrap_or(anchor);
    let month_len = days_in_month(month_start.month(), month_start.year());
    let month_end = month_start.with_day(month_len).unwrap_or(month_start);

    let leading = days_between(first_day_of_week, month_start.weekday());
    let trailing = days_between(month_end.weekday(), first_day_of_week.pred());

    debug!(
        "🗓️ CALENDAR DEBUG: Grid for {}/{}: {} leading, {} trailing, {} cells",
        month_start.month(),
        month_start.year(),
        leading,
        trailing,
        leading + month_len + trailing
    );

    // Filler dates past chrono's range are skipped; only the first and last
    // representable years can hit this.
    let days = (-(leading as i64)..(month_len + trailing) as i64)
        .filter_map(|offset| month_start.checked_add_signed(Duration::days(offset)))
        .map(|date| {
            let day_type = if date < month_start {
                CalendarDayType::PaddingBefore
            } else if date > month_end {
                CalendarDayType::PaddingAfter
            } else {
                CalendarDayType::MonthDay
            };

            CalendarDay {
                date,
                day: date.day(),
                day_type,
                is_today: date == today,
                is_selected: selected_date.map_or(false, |selected| selected == date),
            }
        })
        .collect();

    CalendarMonth {
        month: month_start.month(),
        year: month_start.year(),
        first_day_of_week,
        days,
    }
}

/// Years whose month grids always hold complete weeks. The first and last
/// years chrono can represent are excluded because their filler days may
/// fall outside its range.
pub fn supported_years() -> RangeInclusive<i32> {
    (NaiveDate::MIN.year() + 1)..=(NaiveDate::MAX.year() - 1)
}

/// Slice `months` into consecutive pages of `page_size`; the last page may
/// be shorter. A page size of zero disables paging.
pub fn paginate_months<T: Clone>(months: &[T], page_size: usize) -> Vec<Vec<T>> {
    if months.is_empty() {
        return Vec::new();
    }
    if page_size == 0 {
        return vec![months.to_vec()];
    }
    months.chunks(page_size).map(|page| page.to_vec()).collect()
}

/// Number of pages `paginate_months` produces for `month_count` items.
pub fn total_pages(month_count: usize, page_size: usize) -> usize {
    if month_count == 0 {
        0
    } else if page_size == 0 {
        1
    } else {
        month_count.div_ceil(page_size)
    }
}

/// Get the number of days in a given month and year
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

// Forward distance in days from `from` to the next `to` (0 when equal).
fn days_between(from: Weekday, to: Weekday) -> u32 {
    (to.num_days_from_sunday() + 7 - from.num_days_from_sunday()) % 7
}

/// Calendar service bound to a week convention
#[derive(Debug, Clone)]
pub struct CalendarService {
    first_day_of_week: Weekday,
}

impl CalendarService {
    /// Create a new CalendarService whose grids start on `first_day_of_week`
    pub fn new(first_day_of_week: Weekday) -> Self {
        Self { first_day_of_week }
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn enumerate_months(&self, year: i32) -> Vec<NaiveDate> {
        enumerate_months(year)
    }

    /// Grid for one month using the configured week convention
    pub fn month_grid(
        &self,
        anchor: NaiveDate,
        today: NaiveDate,
        selected_date: Option<NaiveDate>,
    ) -> CalendarMonth {
        build_month_grid(anchor, self.first_day_of_week, today, selected_date)
    }

    /// All twelve grids of `year`
    pub fn build_year(
        &self,
        year: i32,
        today: NaiveDate,
        selected_date: Option<NaiveDate>,
    ) -> Vec<CalendarMonth> {
        let months: Vec<CalendarMonth> = self
            .enumerate_months(year)
            .into_iter()
            .map(|anchor| self.month_grid(anchor, today, selected_date))
            .collect();
        debug!("🗓️ CALENDAR DEBUG: Built {} month grids for {}", months.len(), year);
        months
    }

    /// Grids of one page of `year` in the paged layout
    pub fn build_page(
        &self,
        year: i32,
        page: usize,
        page_size: usize,
        today: NaiveDate,
        selected_date: Option<NaiveDate>,
    ) -> Vec<CalendarMonth> {
        let pages = paginate_months(&self.enumerate_months(year), page_size);
        let Some(anchors) = pages.get(page) else {
            info!("🗓️ CALENDAR: Page {} out of range for {} ({} pages)", page, year, pages.len());
            return Vec::new();
        };
        anchors
            .iter()
            .map(|anchor| self.month_grid(*anchor, today, selected_date))
            .collect()
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new(Weekday::Sun)
    }
}
