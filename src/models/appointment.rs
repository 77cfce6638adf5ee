use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

pub type AppointmentId = i64;

/// Lifecycle of a booking as the backend reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| {
                format!(
                    "invalid status '{}', expected one of Scheduled, Completed, Cancelled",
                    value
                )
            })
    }
}

// same matching rules as typed input
impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRef {
    pub id: i64,
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: AppointmentId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,
    /// `None` when the backend sent nothing usable
    #[serde(default, with = "calendar_date")]
    pub appointment_date: Option<NaiveDate>,
    #[serde(default, with = "clock_time")]
    pub appointment_time: Option<NaiveTime>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub doctor: Option<DoctorRef>,
}

impl Appointment {
    pub fn doctor_name(&self) -> Option<&str> {
        self.doctor
            .as_ref()
            .and_then(|doctor| doctor.full_name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Null and non-string values carry no text to parse.
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Some(text),
        _ => None,
    })
}

/// `YYYY-MM-DD`; anything else leaves the row without a date.
pub mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserializer, Serializer};
    use tracing::warn;

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn parse(value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), FORMAT).ok()
    }

    pub fn format(date: &NaiveDate) -> String {
        date.format(FORMAT).to_string()
    }

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&format(date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = super::lenient_text(deserializer)?;
        let date = raw.as_deref().and_then(parse);
        if let (Some(raw), None) = (&raw, date) {
            warn!("ignoring unreadable appointment date '{}'", raw);
        }
        Ok(date)
    }
}

/// `HH:MM` on the wire; the backend may also send seconds.
pub mod clock_time {
    use chrono::NaiveTime;
    use serde::{Deserializer, Serializer};
    use tracing::warn;

    const SHORT: &str = "%H:%M";
    const LONG: &str = "%H:%M:%S%.f";

    pub fn parse(value: &str) -> Option<NaiveTime> {
        let value = value.trim();
        NaiveTime::parse_from_str(value, SHORT)
            .or_else(|_| NaiveTime::parse_from_str(value, LONG))
            .ok()
    }

    pub fn format(time: &NaiveTime) -> String {
        time.format(SHORT).to_string()
    }

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_str(&format(time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw = super::lenient_text(deserializer)?;
        let time = raw.as_deref().and_then(parse);
        if let (Some(raw), None) = (&raw, time) {
            warn!("ignoring unreadable appointment time '{}'", raw);
        }
        Ok(time)
    }
}
