//! # Calendar State Module
//!
//! This module contains all state related to the annual calendar view.
//!
//! ## Responsibilities:
//! - Displayed year and page navigation
//! - Selected date and its change notifications
//! - Layout mode (paged grid vs. scrolling carousel)
//! - The deferred scroll-to-current-month request
//!
//! ## Purpose:
//! Month grids are never stored here. They are recomputed from this state by
//! the calendar service on every frame, so this struct only holds the inputs.

use backend::domain::calendar;
use chrono::NaiveDate;
use shared::{CalendarDay, CalendarLayoutMode};

/// Callback invoked with the newly selected date
pub type DateObserver = Box<dyn FnMut(NaiveDate)>;

/// Scroll request waiting for the layout to settle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingScroll {
    /// Month (1-12) to bring into view
    pub month: u32,
    /// egui time (seconds) at which the request was made
    pub requested_at: f64,
}

/// Calendar-specific state for year/page navigation and date selection
pub struct CalendarState {
    /// Year currently displayed
    pub displayed_year: i32,

    /// Zero-based page in the paged layout
    pub current_page: usize,

    /// Months per page in the paged layout
    pub months_per_page: usize,

    /// Currently selected day on the calendar
    pub selected_date: Option<NaiveDate>,

    /// How months are laid out
    pub layout_mode: CalendarLayoutMode,

    pending_scroll: Option<PendingScroll>,

    /// Year the scroll request was last armed for
    scroll_armed_for: Option<i32>,

    observers: Vec<DateObserver>,
}

impl CalendarState {
    /// Create new calendar state showing `year`
    pub fn new(year: i32, months_per_page: usize, layout_mode: CalendarLayoutMode) -> Self {
        Self {
            displayed_year: year,
            current_page: 0,
            months_per_page,
            selected_date: None,
            layout_mode,
            pending_scroll: None,
            scroll_armed_for: None,
            observers: Vec::new(),
        }
    }

    /// Register a callback for selected-date changes
    pub fn subscribe(&mut self, observer: DateObserver) {
        self.observers.push(observer);
    }

    /// Set the selected date and notify every observer once
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
        log::info!("📅 Selected date: {}", date);
        for observer in self.observers.iter_mut() {
            observer(date);
        }
    }

    /// Handle a click on a grid cell. Filler days are disabled and leave the
    /// selection untouched. Returns whether the selection changed.
    pub fn click_day(&mut self, day: &CalendarDay) -> bool {
        if !day.is_selectable() {
            log::debug!("📅 Ignored click on filler day {}", day.date);
            return false;
        }
        self.select_date(day.date);
        true
    }

    /// Clear the selection (appointments panel closed)
    pub fn clear_selection(&mut self) {
        if self.selected_date.take().is_some() {
            log::info!("📅 Cleared date selection");
        }
    }

    pub fn total_pages(&self) -> usize {
        calendar::total_pages(12, self.months_per_page)
    }

    /// Navigate to the previous year
    pub fn navigate_to_previous_year(&mut self) {
        self.set_year(self.displayed_year - 1);
    }

    /// Navigate to the next year
    pub fn navigate_to_next_year(&mut self) {
        self.set_year(self.displayed_year + 1);
    }

    fn set_year(&mut self, year: i32) {
        if !calendar::supported_years().contains(&year) {
            log::warn!("📅 Year {} is outside the calendar range", year);
            return;
        }
        self.displayed_year = year;
        self.current_page = 0;
        log::info!("📅 Navigated to year {}", year);
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page + 1 < self.total_pages()
    }

    pub fn navigate_to_previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1);
    }

    pub fn navigate_to_next_page(&mut self) {
        if self.has_next_page() {
            self.current_page += 1;
        }
    }

    /// Switch layout. Leaving the scrolling layout tears its view down, so a
    /// scroll still waiting to fire is dropped.
    pub fn set_layout_mode(&mut self, mode: CalendarLayoutMode) {
        if self.layout_mode == mode {
            return;
        }
        if self.layout_mode == CalendarLayoutMode::Scrolling {
            self.cancel_pending_scroll();
        }
        log::info!("📅 Layout mode changed to {:?}", mode);
        self.layout_mode = mode;
    }

    /// Arm the scroll-to-month request once per displayed year while the
    /// scrolling layout is shown.
    pub fn sync_scroll_request(&mut self, current_month: u32, now: f64) {
        if self.layout_mode != CalendarLayoutMode::Scrolling {
            self.cancel_pending_scroll();
            return;
        }
        if self.scroll_armed_for != Some(self.displayed_year) {
            self.scroll_armed_for = Some(self.displayed_year);
            self.pending_scroll = Some(PendingScroll {
                month: current_month,
                requested_at: now,
            });
        }
    }

    pub fn pending_scroll(&self) -> Option<PendingScroll> {
        self.pending_scroll
    }

    /// Take the pending scroll if its settle delay has passed
    pub fn take_due_scroll(&mut self, now: f64, delay_secs: f64) -> Option<u32> {
        match self.pending_scroll {
            Some(pending) if now - pending.requested_at >= delay_secs => {
                self.pending_scroll = None;
                Some(pending.month)
            }
            _ => None,
        }
    }

    pub fn cancel_pending_scroll(&mut self) {
        self.pending_scroll = None;
        self.scroll_armed_for = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_select_date_notifies_observers_once() {
        let mut state = CalendarState::new(2025, 8, CalendarLayoutMode::Paged);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        state.subscribe(Box::new(move |d| sink.borrow_mut().push(d)));

        state.select_date(date(2025, 12, 12));
        assert_eq!(state.selected_date, Some(date(2025, 12, 12)));
        assert_eq!(*seen.borrow(), vec![date(2025, 12, 12)]);
    }

    #[test]
    fn test_filler_click_keeps_selection() {
        let grid = calendar::build_month_grid(date(2025, 12, 1), Weekday::Sun, date(2025, 12, 1), None);
        let mut state = CalendarState::new(2025, 8, CalendarLayoutMode::Paged);
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        state.subscribe(Box::new(move |_| *counter.borrow_mut() += 1));

        state.select_date(date(2025, 12, 5));
        let filler = grid.days.iter().find(|d| !d.is_current_month()).unwrap();
        assert!(!state.click_day(filler));
        assert_eq!(state.selected_date, Some(date(2025, 12, 5)));
        assert_eq!(*calls.borrow(), 1);

        let month_day = grid.days.iter().find(|d| d.date == date(2025, 12, 20)).unwrap();
        assert!(state.click_day(month_day));
        assert_eq!(state.selected_date, Some(date(2025, 12, 20)));
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_year_change_resets_page() {
        let mut state = CalendarState::new(2025, 8, CalendarLayoutMode::Paged);
        state.navigate_to_next_page();
        assert_eq!(state.current_page, 1);

        state.navigate_to_next_year();
        assert_eq!(state.displayed_year, 2026);
        assert_eq!(state.current_page, 0);

        state.navigate_to_next_page();
        state.navigate_to_previous_year();
        assert_eq!(state.displayed_year, 2025);
        assert_eq!(state.current_page, 0);
    }

    #[test]
    fn test_year_navigation_stops_at_calendar_range() {
        let last = *calendar::supported_years().end();
        let mut state = CalendarState::new(last, 8, CalendarLayoutMode::Paged);
        state.navigate_to_next_page();
        state.navigate_to_next_year();
        assert_eq!(state.displayed_year, last);
        assert_eq!(state.current_page, 1);

        let first = *calendar::supported_years().start();
        let mut state = CalendarState::new(first, 8, CalendarLayoutMode::Paged);
        state.navigate_to_previous_year();
        assert_eq!(state.displayed_year, first);
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut state = CalendarState::new(2025, 8, CalendarLayoutMode::Paged);
        assert_eq!(state.total_pages(), 2);
        assert!(!state.has_previous_page());

        state.navigate_to_previous_page();
        assert_eq!(state.current_page, 0);

        state.navigate_to_next_page();
        state.navigate_to_next_page();
        assert_eq!(state.current_page, 1);
        assert!(!state.has_next_page());
        assert!(state.has_previous_page());
    }

    #[test]
    fn test_scroll_fires_once_after_delay() {
        let mut state = CalendarState::new(2025, 8, CalendarLayoutMode::Scrolling);
        state.sync_scroll_request(10, 1.0);
        assert_eq!(state.take_due_scroll(1.05, 0.1), None);
        assert_eq!(state.take_due_scroll(1.1, 0.1), Some(10));
        assert_eq!(state.take_due_scroll(2.0, 0.1), None);

        // Still the same year: not re-armed
        state.sync_scroll_request(10, 3.0);
        assert_eq!(state.pending_scroll(), None);

        // A new year arms it again
        state.navigate_to_next_year();
        state.sync_scroll_request(10, 4.0);
        assert_eq!(state.pending_scroll().map(|p| p.requested_at), Some(4.0));
    }

    #[test]
    fn test_teardown_cancels_pending_scroll() {
        let mut state = CalendarState::new(2025, 8, CalendarLayoutMode::Scrolling);
        state.sync_scroll_request(3, 0.0);
        assert!(state.pending_scroll().is_some());

        state.set_layout_mode(CalendarLayoutMode::Paged);
        assert_eq!(state.take_due_scroll(10.0, 0.1), None);

        // Paged layout never arms a scroll
        state.sync_scroll_request(3, 11.0);
        assert_eq!(state.pending_scroll(), None);

        // Coming back re-arms
        state.set_layout_mode(CalendarLayoutMode::Scrolling);
        state.sync_scroll_request(3, 12.0);
        assert_eq!(state.take_due_scroll(12.2, 0.1), Some(3));
    }

    #[test]
    fn test_clear_selection() {
        let mut state = CalendarState::new(2025, 8, CalendarLayoutMode::Paged);
        state.select_date(date(2025, 1, 2));
        state.clear_selection();
        assert_eq!(state.selected_date, None);
    }
}
