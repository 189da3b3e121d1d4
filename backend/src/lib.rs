//! # Backend for the appointment dashboard
//!
//! This crate gives the egui frontend direct, synchronous access to the
//! domain services. There is no storage or IO layer: the appointment
//! collection is built from fixtures at startup and owned by `Backend`.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use shared::Appointment;

pub mod config;
pub mod domain;

pub use config::{ConfigError, DashboardConfig};

/// Main backend struct that owns the data and all services
pub struct Backend {
    pub config: DashboardConfig,
    pub calendar_service: domain::CalendarService,
    pub appointment_service: domain::AppointmentService,
    appointments: Vec<Appointment>,
}

impl Backend {
    /// Create a backend from the environment-selected config and fixtures
    pub fn new() -> Result<Self> {
        let config = DashboardConfig::from_env().context("loading dashboard configuration")?;
        let today = chrono::Local::now().date_naive();
        Ok(Self::with_config(config, today))
    }

    pub fn with_config(config: DashboardConfig, today: NaiveDate) -> Self {
        let appointments = domain::sample_data::create_sample_appointments(today);
        info!("🚀 BACKEND: Loaded {} sample appointments", appointments.len());
        Self::with_appointments(config, appointments)
    }

    pub fn with_appointments(config: DashboardConfig, appointments: Vec<Appointment>) -> Self {
        let calendar_service = domain::CalendarService::new(config.first_day_of_week);
        Self {
            config,
            calendar_service,
            appointment_service: domain::AppointmentService::new(),
            appointments,
        }
    }

    /// Read-only view of the appointment collection
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn agenda_for(&self, date: Option<NaiveDate>) -> domain::AgendaView {
        self.appointment_service.agenda_for(&self.appointments, date)
    }

    pub fn find_appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointment_service.find_by_id(&self.appointments, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_backend_uses_configured_week_start() {
        let config = DashboardConfig {
            first_day_of_week: Weekday::Mon,
            ..DashboardConfig::default()
        };
        let backend = Backend::with_config(config, NaiveDate::from_ymd_opt(2026, 3, 10).unwrap());
        assert_eq!(backend.calendar_service.first_day_of_week(), Weekday::Mon);
        assert_eq!(backend.appointments().len(), 4);
    }

    #[test]
    fn test_agenda_and_lookup() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        let backend = Backend::with_config(DashboardConfig::default(), today);

        assert_eq!(backend.agenda_for(Some(today)).appointments().len(), 1);
        assert!(backend.find_appointment("2").is_some());
        assert!(backend.find_appointment("99").is_none());
    }
}
