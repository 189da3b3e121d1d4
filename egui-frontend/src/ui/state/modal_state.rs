//! # Modal State Module
//!
//! Visibility and contents of the appointment details modal and the
//! add-appointment preview.

use backend::domain::AppointmentDraft;
use shared::Appointment;

/// Modal visibility and modal-specific state
#[derive(Debug, Default)]
pub struct ModalState {
    /// Appointment shown in the details modal
    pub selected_appointment: Option<Appointment>,

    /// Add-appointment preview
    pub draft: Option<AppointmentDraft>,

    /// Prevents backdrop click detection on same frame modal opens
    pub modal_just_opened: bool,
}

impl ModalState {
    /// Create new modal state with all modals hidden
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_appointment(&mut self, appointment: Appointment) {
        log::info!("🪟 Opening details for appointment {}", appointment.id);
        self.selected_appointment = Some(appointment);
        self.modal_just_opened = true;
    }

    pub fn close_appointment(&mut self) {
        self.selected_appointment = None;
    }

    pub fn open_draft(&mut self, draft: AppointmentDraft) {
        self.draft = Some(draft);
        self.modal_just_opened = true;
    }

    pub fn close_draft(&mut self) {
        self.draft = None;
    }

    pub fn is_any_open(&self) -> bool {
        self.selected_appointment.is_some() || self.draft.is_some()
    }

    /// Hide all modals
    pub fn hide_all_modals(&mut self) {
        self.selected_appointment = None;
        self.draft = None;
    }
}
