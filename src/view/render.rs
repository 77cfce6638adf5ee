use std::fmt;

use crate::models::appointment::{calendar_date, clock_time};
use crate::models::{Appointment, AppointmentId, AppointmentStatus, EditField, EditForm};
use crate::view::ViewState;

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No appointments found.";
pub const TITLE: &str = "My Appointments";

/// What the component shows for a given state
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Loading,
    /// Any error hides the list, even one raised after the list loaded.
    Error(String),
    List {
        success: Option<String>,
        rows: Vec<Row>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Viewing(Summary),
    Editing {
        id: AppointmentId,
        form: EditForm,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub id: AppointmentId,
    pub full_name: String,
    pub department: String,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub doctor: String,
}

impl Summary {
    fn of(appt: &Appointment) -> Self {
        Summary {
            id: appt.id,
            full_name: appt.full_name.clone(),
            department: appt.department.clone(),
            date: appt
                .appointment_date
                .as_ref()
                .map(calendar_date::format)
                .unwrap_or_default(),
            time: appt
                .appointment_time
                .as_ref()
                .map(clock_time::format)
                .unwrap_or_default(),
            status: appt.status,
            doctor: appt.doctor_name().unwrap_or("N/A").to_string(),
        }
    }
}

impl Row {
    pub fn id(&self) -> AppointmentId {
        match self {
            Row::Viewing(summary) => summary.id,
            Row::Editing { id, .. } => *id,
        }
    }
}

pub fn render(state: &ViewState) -> Rendered {
    if state.loading {
        return Rendered::Loading;
    }
    if let Some(error) = state.error.as_ref().filter(|e| !e.is_empty()) {
        return Rendered::Error(error.clone());
    }

    let rows = state
        .appointments
        .iter()
        .map(|appt| match state.editing {
            Some(id) if id == appt.id => Row::Editing {
                id,
                form: state.edit_form.clone(),
            },
            _ => Row::Viewing(Summary::of(appt)),
        })
        .collect();

    Rendered::List {
        success: state.success.clone().filter(|s| !s.is_empty()),
        rows,
    }
}

impl Rendered {
    pub fn row_count(&self) -> usize {
        match self {
            Rendered::List { rows, .. } => rows.len(),
            _ => 0,
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Loading => writeln!(f, "{}", LOADING_TEXT),
            Rendered::Error(message) => writeln!(f, "error: {}", message),
            Rendered::List { success, rows } => {
                writeln!(f, "== {} ==", TITLE)?;
                if let Some(message) = success {
                    writeln!(f, "* {}", message)?;
                }
                if rows.is_empty() {
                    return writeln!(f, "{}", EMPTY_TEXT);
                }
                for row in rows {
                    write!(f, "{}", row)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Row::Viewing(s) => {
                writeln!(f, "[{}] {} - {}", s.id, s.full_name, s.department)?;
                writeln!(f, "    Date: {}, Time: {}, Status: {}", s.date, s.time, s.status)?;
                writeln!(f, "    Doctor: {}", s.doctor)
            }
            Row::Editing { id, form } => {
                writeln!(f, "[{}] editing", id)?;
                for field in EditField::ALL {
                    let value = form.get(field);
                    if value.is_empty() {
                        writeln!(f, "    {:<16} <{}>", field.name(), field.placeholder())?;
                    } else {
                        writeln!(f, "    {:<16} {}", field.name(), value)?;
                    }
                }
                writeln!(f, "    (save | cancel)")
            }
        }
    }
}
