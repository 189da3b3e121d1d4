//! # App State Module
//!
//! This module defines the central application struct and the event
//! handlers the rendering code calls into.
//!
//! ## Key Functions:
//! - `new()` - Initialize the app from a backend
//! - `handle_day_click()` / `handle_close_panel()` - date selection
//! - `handle_appointment_click()` / `handle_add_appointment()` - modals
//! - `handle_viewport_width()` - mobile/desktop switching
//!
//! ## State Management:
//! The app holds the backend (appointment collection plus services) and the
//! three state structs. Every derived view is computed from these on demand.

use std::cell::Cell;
use std::rc::Rc;

use backend::Backend;
use chrono::{Datelike, NaiveDate};
use log::info;
use shared::CalendarDay;

use crate::ui::state::{CalendarState, ModalState, UIState};

/// Main application struct for the appointment dashboard
pub struct AppointmentDashboardApp {
    pub backend: Backend,

    /// Date used for the "today" highlight and the initial scroll target
    pub today: NaiveDate,

    pub calendar: CalendarState,
    pub modal: ModalState,
    pub ui: UIState,

    /// Set by the date observer; the panel scrolls back to the top when it sees it
    pub panel_scroll_reset: Rc<Cell<bool>>,
}

impl AppointmentDashboardApp {
    pub fn new(backend: Backend, today: NaiveDate) -> Self {
        info!("🚀 Initializing AppointmentDashboardApp");

        let config = &backend.config;
        let year = config.year.unwrap_or(today.year());
        let ui = UIState::new(config.theme);
        let mut calendar = CalendarState::new(year, config.months_per_page, ui.layout_mode());

        let panel_scroll_reset = Rc::new(Cell::new(false));
        let reset_flag = panel_scroll_reset.clone();
        calendar.subscribe(Box::new(move |_| reset_flag.set(true)));

        Self {
            backend,
            today,
            calendar,
            modal: ModalState::new(),
            ui,
            panel_scroll_reset,
        }
    }

    pub fn handle_day_click(&mut self, day: &CalendarDay) {
        self.calendar.click_day(day);
    }

    pub fn handle_close_panel(&mut self) {
        self.calendar.clear_selection();
    }

    pub fn handle_appointment_click(&mut self, appointment_id: &str) {
        match self.backend.find_appointment(appointment_id) {
            Some(appointment) => self.modal.open_appointment(appointment.clone()),
            None => {
                log::warn!("🪟 Clicked unknown appointment {}", appointment_id);
                self.ui.error_message = Some(format!("Agendamento {} não encontrado", appointment_id));
            }
        }
    }

    pub fn handle_add_appointment(&mut self) {
        if let Some(date) = self.calendar.selected_date {
            let draft = self.backend.appointment_service.draft_for(date);
            self.modal.open_draft(draft);
        }
    }

    /// Track the viewport width and switch layout at the breakpoint
    pub fn handle_viewport_width(&mut self, width: f32) {
        if self.ui.update_viewport_width(width, self.backend.config.mobile_breakpoint) {
            self.calendar.set_layout_mode(self.ui.layout_mode());
        }
    }

    /// Close the topmost overlay (ESC key)
    pub fn handle_escape(&mut self) {
        if self.modal.is_any_open() {
            self.modal.hide_all_modals();
        } else if self.ui.sidebar_open {
            self.ui.close_sidebar();
        }
    }
}
