//! Domain services for the appointment dashboard.
//!
//! - `calendar` - month enumeration, month grids and paging
//! - `appointment_service` - per-day filtering and view derivation
//! - `colors` - deterministic appointment colors
//! - `locale` - fixed pt-BR labels
//! - `sample_data` - startup fixtures

pub mod appointment_service;
pub mod calendar;
pub mod colors;
pub mod locale;
pub mod sample_data;

pub use appointment_service::{AgendaView, AppointmentCard, AppointmentDetails, AppointmentDraft, AppointmentService};
pub use calendar::CalendarService;
pub use colors::color_for_identity;
