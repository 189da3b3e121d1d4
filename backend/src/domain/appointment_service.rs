//! Appointment selection and derivation.
//!
//! Everything here reads the caller's appointment collection and derives a
//! view from it: the time-ordered list for a selected date, the panel state
//! and the details shown in the modal. The collection is never mutated.

use chrono::NaiveDate;
use log::{debug, info};
use shared::Appointment;

use crate::domain::colors::color_for_identity;
use crate::domain::locale;

pub const NO_DATE_SELECTED_MESSAGE: &str = "Selecione uma data para ver os agendamentos";
pub const NO_APPOINTMENTS_MESSAGE: &str = "Nenhum agendamento para este dia";
pub const NO_CLIENTS_MESSAGE: &str = "Nenhum cliente cadastrado";
pub const NO_STAFF_MESSAGE: &str = "Nenhum funcionário designado";

/// Appointments starting on `date`, ascending by start instant.
///
/// Equal start instants keep their input order. A missing date or a date
/// without appointments yields an empty list.
pub fn appointments_on_date(appointments: &[Appointment], date: Option<NaiveDate>) -> Vec<Appointment> {
    let Some(date) = date else {
        return Vec::new();
    };

    let mut matching: Vec<Appointment> = appointments
        .iter()
        .filter(|appointment| appointment.starts_on(date))
        .cloned()
        .collect();
    // sort_by_key is stable
    matching.sort_by_key(|appointment| appointment.start_time);
    matching
}

/// What the appointments panel shows for the current selection
#[derive(Debug, Clone, PartialEq)]
pub enum AgendaView {
    NoDateSelected,
    Empty {
        date: NaiveDate,
        heading: String,
    },
    Appointments {
        date: NaiveDate,
        heading: String,
        appointments: Vec<Appointment>,
    },
}

impl AgendaView {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            AgendaView::NoDateSelected => None,
            AgendaView::Empty { date, .. } | AgendaView::Appointments { date, .. } => Some(*date),
        }
    }

    pub fn heading(&self) -> Option<&str> {
        match self {
            AgendaView::NoDateSelected => None,
            AgendaView::Empty { heading, .. } | AgendaView::Appointments { heading, .. } => Some(heading.as_str()),
        }
    }

    /// Placeholder text when there is no list to show
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            AgendaView::NoDateSelected => Some(NO_DATE_SELECTED_MESSAGE),
            AgendaView::Empty { .. } => Some(NO_APPOINTMENTS_MESSAGE),
            AgendaView::Appointments { .. } => None,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        match self {
            AgendaView::Appointments { appointments, .. } => appointments.as_slice(),
            _ => &[],
        }
    }
}

/// Labels for one appointment card in the panel
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentCard {
    pub id: String,
    pub title: String,
    pub color: String,
    /// "HH:mm – HH:mm"
    pub time_range: String,
    pub number_of_people: u32,
    pub assigned_staff: u32,
}

impl AppointmentCard {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            id: appointment.id.clone(),
            title: appointment.title.clone(),
            color: appointment.color.clone(),
            time_range: format!(
                "{} – {}",
                locale::format_time(appointment.start_time),
                locale::format_time(appointment.end_time)
            ),
            number_of_people: appointment.number_of_people,
            assigned_staff: appointment.assigned_staff,
        }
    }
}

/// Everything the details modal displays for a single appointment
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDetails {
    pub id: String,
    pub title: String,
    pub color: String,
    /// e.g. "18:00 de 12 de dezembro de 2025"
    pub start_label: String,
    /// "HH:mm"
    pub end_label: String,
    pub clients_heading: String,
    pub client_names: Vec<String>,
    pub staff_heading: String,
    pub staff_names: Vec<String>,
}

impl AppointmentDetails {
    /// "<start> até <end>"
    pub fn schedule_label(&self) -> String {
        format!("{} até {}", self.start_label, self.end_label)
    }

    pub fn clients_placeholder(&self) -> Option<&'static str> {
        self.client_names.is_empty().then_some(NO_CLIENTS_MESSAGE)
    }

    pub fn staff_placeholder(&self) -> Option<&'static str> {
        self.staff_names.is_empty().then_some(NO_STAFF_MESSAGE)
    }
}

/// Preview of an appointment being added for a date. It has no identity
/// yet, so its color is not stable.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDraft {
    pub date: NaiveDate,
    pub heading: String,
    pub color: String,
}

impl AppointmentDraft {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            heading: locale::format_long_date(date),
            color: color_for_identity(None),
        }
    }
}

/// Appointment service that derives every appointment-related view
#[derive(Debug, Clone, Default)]
pub struct AppointmentService;

impl AppointmentService {
    pub fn new() -> Self {
        Self
    }

    pub fn appointments_on_date(&self, appointments: &[Appointment], date: Option<NaiveDate>) -> Vec<Appointment> {
        appointments_on_date(appointments, date)
    }

    /// Panel state for the selected date
    pub fn agenda_for(&self, appointments: &[Appointment], date: Option<NaiveDate>) -> AgendaView {
        let Some(date) = date else {
            return AgendaView::NoDateSelected;
        };

        let heading = locale::format_long_date(date);
        let day_appointments = self.appointments_on_date(appointments, Some(date));
        debug!("📋 AGENDA: {} appointments on {}", day_appointments.len(), date);

        if day_appointments.is_empty() {
            AgendaView::Empty { date, heading }
        } else {
            AgendaView::Appointments {
                date,
                heading,
                appointments: day_appointments,
            }
        }
    }

    pub fn find_by_id<'a>(&self, appointments: &'a [Appointment], id: &str) -> Option<&'a Appointment> {
        appointments.iter().find(|appointment| appointment.id == id)
    }

    pub fn card_for(&self, appointment: &Appointment) -> AppointmentCard {
        AppointmentCard::from_appointment(appointment)
    }

    /// Modal contents for one appointment
    pub fn details_for(&self, appointment: &Appointment) -> AppointmentDetails {
        if appointment.end_time <= appointment.start_time {
            // Accepted as-is; only worth a note in the logs
            debug!("📋 DETAILS: Appointment {} ends before it starts", appointment.id);
        }

        AppointmentDetails {
            id: appointment.id.clone(),
            title: appointment.title.clone(),
            color: appointment.color.clone(),
            start_label: locale::format_time_with_date(appointment.start_time),
            end_label: locale::format_time(appointment.end_time),
            clients_heading: format!("Clientes ({})", appointment.client_names.len()),
            client_names: appointment.client_names.clone(),
            staff_heading: format!("Funcionários Designados ({})", appointment.staff_names.len()),
            staff_names: appointment.staff_names.clone(),
        }
    }

    pub fn draft_for(&self, date: NaiveDate) -> AppointmentDraft {
        info!("📋 DRAFT: Adding appointment for {}", date);
        AppointmentDraft::for_date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::colors::APPOINTMENT_PALETTE;
    use chrono::NaiveDateTime;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn create_test_appointment(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> Appointment {
        Appointment {
            id: id.to_string(),
            title: format!("Test {}", id),
            start_time: start,
            end_time: end,
            number_of_people: 2,
            assigned_staff: 1,
            color: color_for_identity(Some(id)),
            client_names: vec!["Ana".to_string(), "Bruno".to_string()],
            staff_names: vec!["Carla".to_string()],
        }
    }

    fn sample() -> Vec<Appointment> {
        vec![
            create_test_appointment("evening", at(2025, 12, 12, 18, 0), at(2025, 12, 12, 19, 0)),
            create_test_appointment("other-day", at(2025, 12, 13, 8, 0), at(2025, 12, 13, 9, 0)),
            create_test_appointment("afternoon", at(2025, 12, 12, 14, 30), at(2025, 12, 12, 16, 0)),
            create_test_appointment("morning", at(2025, 12, 12, 10, 0), at(2025, 12, 12, 11, 0)),
        ]
    }

    #[test]
    fn test_filters_by_calendar_date_and_sorts() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 12).unwrap();
        let result = appointments_on_date(&sample(), Some(date));

        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["morning", "afternoon", "evening"]);
        assert!(result.iter().all(|a| a.start_date() == date));
        assert!(result.windows(2).all(|pair| pair[0].start_time <= pair[1].start_time));
    }

    #[test]
    fn test_equal_start_times_keep_input_order() {
        let start = at(2025, 12, 12, 9, 0);
        let appointments = vec![
            create_test_appointment("b", start, at(2025, 12, 12, 10, 0)),
            create_test_appointment("a", start, at(2025, 12, 12, 9, 30)),
            create_test_appointment("early", at(2025, 12, 12, 8, 0), start),
            create_test_appointment("c", start, at(2025, 12, 12, 11, 0)),
        ];
        let result = appointments_on_date(&appointments, Some(start.date()));
        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "b", "a", "c"]);
    }

    #[test]
    fn test_empty_for_missing_or_unmatched_date() {
        let appointments = sample();
        assert!(appointments_on_date(&appointments, None).is_empty());
        let quiet_day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert!(appointments_on_date(&appointments, Some(quiet_day)).is_empty());
        assert!(appointments_on_date(&[], Some(quiet_day)).is_empty());
    }

    #[test]
    fn test_input_collection_untouched() {
        let appointments = sample();
        let before = appointments.clone();
        let _ = appointments_on_date(&appointments, Some(NaiveDate::from_ymd_opt(2025, 12, 12).unwrap()));
        assert_eq!(appointments, before);
    }

    #[test]
    fn test_inverted_appointment_is_still_listed() {
        let inverted = create_test_appointment("inverted", at(2025, 12, 12, 12, 0), at(2025, 12, 12, 11, 0));
        let result = appointments_on_date(&[inverted], Some(NaiveDate::from_ymd_opt(2025, 12, 12).unwrap()));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_service_filters_like_free_function() {
        let service = AppointmentService::new();
        let appointments = sample();
        let date = Some(NaiveDate::from_ymd_opt(2025, 12, 12).unwrap());
        assert_eq!(
            service.appointments_on_date(&appointments, date),
            appointments_on_date(&appointments, date)
        );
    }

    #[test]
    fn test_agenda_views() {
        let service = AppointmentService::new();
        let appointments = sample();

        let view = service.agenda_for(&appointments, None);
        assert_eq!(view, AgendaView::NoDateSelected);
        assert_eq!(view.placeholder(), Some(NO_DATE_SELECTED_MESSAGE));
        assert!(view.appointments().is_empty());

        let quiet_day = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
        let view = service.agenda_for(&appointments, Some(quiet_day));
        assert!(matches!(view, AgendaView::Empty { .. }));
        assert_eq!(view.placeholder(), Some(NO_APPOINTMENTS_MESSAGE));
        assert_eq!(view.heading(), Some("Quinta-feira, 25 de dezembro de 2025"));

        let busy_day = NaiveDate::from_ymd_opt(2025, 12, 12).unwrap();
        let view = service.agenda_for(&appointments, Some(busy_day));
        assert_eq!(view.appointments().len(), 3);
        assert_eq!(view.placeholder(), None);
        assert_eq!(view.date(), Some(busy_day));
    }

    #[test]
    fn test_details_labels() {
        let service = AppointmentService::new();
        let appointment = create_test_appointment("1", at(2025, 12, 12, 18, 0), at(2025, 12, 12, 19, 0));
        let details = service.details_for(&appointment);

        assert_eq!(details.schedule_label(), "18:00 de 12 de dezembro de 2025 até 19:00");
        assert_eq!(details.clients_heading, "Clientes (2)");
        assert_eq!(details.staff_heading, "Funcionários Designados (1)");
        assert_eq!(details.clients_placeholder(), None);
        assert_eq!(details.color, "#00C7BE");
    }

    #[test]
    fn test_details_empty_lists() {
        let service = AppointmentService::new();
        let mut appointment = create_test_appointment("x", at(2025, 12, 12, 8, 0), at(2025, 12, 12, 9, 0));
        appointment.client_names.clear();
        appointment.staff_names.clear();

        let details = service.details_for(&appointment);
        assert_eq!(details.clients_heading, "Clientes (0)");
        assert_eq!(details.clients_placeholder(), Some(NO_CLIENTS_MESSAGE));
        assert_eq!(details.staff_placeholder(), Some(NO_STAFF_MESSAGE));
    }

    #[test]
    fn test_card_time_range() {
        let appointment = create_test_appointment("c", at(2025, 12, 12, 14, 30), at(2025, 12, 12, 16, 0));
        let card = AppointmentService::new().card_for(&appointment);
        assert_eq!(card.time_range, "14:30 – 16:00");
        assert_eq!(card.number_of_people, 2);
    }

    #[test]
    fn test_find_by_id() {
        let service = AppointmentService::new();
        let appointments = sample();
        assert_eq!(service.find_by_id(&appointments, "morning").map(|a| a.title.as_str()), Some("Test morning"));
        assert!(service.find_by_id(&appointments, "missing").is_none());
    }

    #[test]
    fn test_draft_uses_palette_color() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 12).unwrap();
        let draft = AppointmentService::new().draft_for(date);
        assert_eq!(draft.date, date);
        assert!(APPOINTMENT_PALETTE.contains(&draft.color.as_str()));
    }
}
