//! In-memory sample appointments loaded at startup.

use chrono::{NaiveDate, NaiveDateTime};
use shared::Appointment;

use crate::domain::colors::color_for_identity;

/// Date of the showcase appointments
pub fn showcase_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 12, 12)
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    date.and_hms_opt(hour, minute, 0)
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: &str,
    title: &str,
    date: NaiveDate,
    start: (u32, u32),
    end: (u32, u32),
    number_of_people: u32,
    clients: &[&str],
    staff: &[&str],
) -> Option<Appointment> {
    Some(Appointment {
        id: id.to_string(),
        title: title.to_string(),
        start_time: at(date, start.0, start.1)?,
        end_time: at(date, end.0, end.1)?,
        number_of_people,
        assigned_staff: staff.len() as u32,
        color: color_for_identity(Some(id)),
        client_names: names(clients),
        staff_names: names(staff),
    })
}

/// Build the fixture set: one appointment on `today` and three on the
/// showcase date.
pub fn create_sample_appointments(today: NaiveDate) -> Vec<Appointment> {
    let mut appointments = Vec::new();

    appointments.extend(appointment(
        "today-1",
        "Reunião de Teste",
        today,
        (15, 0),
        (16, 30),
        5,
        &["João Silva", "Maria Santos", "Pedro Oliveira", "Ana Costa", "Carlos Ferreira"],
        &["Roberto Alves", "Juliana Lima"],
    ));

    let Some(showcase) = showcase_date() else {
        return appointments;
    };

    appointments.extend(appointment(
        "1",
        "Aniversário Cauã",
        showcase,
        (18, 0),
        (19, 0),
        15,
        &[
            "Cauã Silva",
            "Lucas Mendes",
            "Fernanda Rocha",
            "Rafael Souza",
            "Beatriz Almeida",
            "Gabriel Martins",
            "Isabela Pereira",
            "Thiago Rodrigues",
            "Larissa Gomes",
            "Felipe Castro",
            "Mariana Dias",
            "Bruno Nunes",
            "Camila Ribeiro",
            "Diego Carvalho",
            "Amanda Freitas",
        ],
        &["Paula Santos", "Marcos Oliveira"],
    ));
    appointments.extend(appointment(
        "2",
        "Reunião de Equipe",
        showcase,
        (14, 30),
        (16, 0),
        8,
        &[
            "Patricia Lima",
            "Ricardo Barbosa",
            "Vanessa Araújo",
            "André Monteiro",
            "Renata Campos",
            "Gustavo Lopes",
            "Tatiana Moreira",
            "Leonardo Azevedo",
        ],
        &["Sandra Costa"],
    ));
    appointments.extend(appointment(
        "3",
        "Consulta Médica",
        showcase,
        (10, 0),
        (11, 0),
        1,
        &["Eduardo Mendonça"],
        &["Dr. Carlos Henrique"],
    ));

    appointments
}
