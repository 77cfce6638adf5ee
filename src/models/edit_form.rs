use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

use crate::models::appointment::{
    Appointment, AppointmentStatus, DoctorRef, calendar_date, clock_time,
};

/// The editable inputs of a row, named as they travel in the update payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    FullName,
    Phone,
    Department,
    AppointmentDate,
    AppointmentTime,
    Status,
    Doctor,
}

impl EditField {
    pub const ALL: [EditField; 7] = [
        EditField::FullName,
        EditField::Phone,
        EditField::Department,
        EditField::AppointmentDate,
        EditField::AppointmentTime,
        EditField::Status,
        EditField::Doctor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EditField::FullName => "fullName",
            EditField::Phone => "phone",
            EditField::Department => "department",
            EditField::AppointmentDate => "appointmentDate",
            EditField::AppointmentTime => "appointmentTime",
            EditField::Status => "status",
            EditField::Doctor => "doctor",
        }
    }

    /// Input hint shown next to an empty field
    pub fn placeholder(&self) -> &'static str {
        match self {
            EditField::FullName => "Full Name",
            EditField::Phone => "Phone",
            EditField::Department => "Department",
            EditField::AppointmentDate => "YYYY-MM-DD",
            EditField::AppointmentTime => "HH:mm",
            EditField::Status => "Scheduled | Completed | Cancelled",
            EditField::Doctor => "doctor id",
        }
    }
}

impl fmt::Display for EditField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EditField {
    type Err = FieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        EditField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| FieldError::UnknownField(value.to_string()))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("unknown field '{0}'")]
    UnknownField(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: EditField, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorSelection {
    pub id: i64,
}

/// Transient copy of one appointment's editable fields. Date and time hold
/// whatever the user typed; they are only interpreted when merged back.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditForm {
    pub full_name: String,
    pub phone: String,
    pub department: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: AppointmentStatus,
    pub doctor: Option<DoctorSelection>,
}

impl EditForm {
    pub fn from_appointment(appt: &Appointment) -> Self {
        EditForm {
            full_name: appt.full_name.clone(),
            phone: appt.phone.clone(),
            department: appt.department.clone(),
            appointment_date: appt
                .appointment_date
                .as_ref()
                .map(calendar_date::format)
                .unwrap_or_default(),
            appointment_time: appt
                .appointment_time
                .as_ref()
                .map(clock_time::format)
                .unwrap_or_default(),
            status: appt.status,
            doctor: appt
                .doctor
                .as_ref()
                .map(|doctor| DoctorSelection { id: doctor.id }),
        }
    }

    pub fn get(&self, field: EditField) -> String {
        match field {
            EditField::FullName => self.full_name.clone(),
            EditField::Phone => self.phone.clone(),
            EditField::Department => self.department.clone(),
            EditField::AppointmentDate => self.appointment_date.clone(),
            EditField::AppointmentTime => self.appointment_time.clone(),
            EditField::Status => self.status.to_string(),
            EditField::Doctor => self
                .doctor
                .as_ref()
                .map(|doctor| doctor.id.to_string())
                .unwrap_or_default(),
        }
    }

    /// Replaces exactly one field. On error the form is left untouched.
    pub fn set(&mut self, field: EditField, value: &str) -> Result<(), FieldError> {
        match field {
            EditField::FullName => self.full_name = value.to_string(),
            EditField::Phone => self.phone = value.to_string(),
            EditField::Department => self.department = value.to_string(),
            EditField::AppointmentDate => self.appointment_date = value.to_string(),
            EditField::AppointmentTime => self.appointment_time = value.to_string(),
            EditField::Status => {
                self.status = value
                    .parse()
                    .map_err(|reason| FieldError::InvalidValue { field, reason })?;
            }
            EditField::Doctor => {
                let value = value.trim();
                self.doctor = if value.is_empty() {
                    None
                } else {
                    let id = value.parse::<i64>().map_err(|e| FieldError::InvalidValue {
                        field,
                        reason: e.to_string(),
                    })?;
                    Some(DoctorSelection { id })
                };
            }
        }
        Ok(())
    }

    /// Shallow merge of the submitted fields into the cached row. A changed
    /// doctor id keeps the previous display name until the next full load.
    pub fn merge_into(&self, appt: &mut Appointment) {
        appt.full_name = self.full_name.clone();
        appt.phone = self.phone.clone();
        appt.department = self.department.clone();
        appt.status = self.status;

        match calendar_date::parse(&self.appointment_date) {
            Some(date) => appt.appointment_date = Some(date),
            None => warn!(
                "keeping cached date for appointment {}, '{}' does not parse",
                appt.id, self.appointment_date
            ),
        }

        match clock_time::parse(&self.appointment_time) {
            Some(time) => appt.appointment_time = Some(time),
            None => warn!(
                "keeping cached time for appointment {}, '{}' does not parse",
                appt.id, self.appointment_time
            ),
        }

        appt.doctor = match (&self.doctor, appt.doctor.take()) {
            (None, _) => None,
            (Some(selection), Some(previous)) => Some(DoctorRef {
                id: selection.id,
                full_name: previous.full_name,
            }),
            (Some(selection), None) => Some(DoctorRef {
                id: selection.id,
                full_name: None,
            }),
        };
    }
}
