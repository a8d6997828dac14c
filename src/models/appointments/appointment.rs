use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A booking as returned by the API. Timestamps arrive with an offset and are
/// shown in local time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub starts_at: DateTime<Local>,
    pub ends_at: DateTime<Local>,
}

/// Input for the creation mutation. Only built by the schedule validator, so
/// ends_at is always after starts_at.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub customer_id: String,
    pub starts_at: DateTime<Local>,
    pub ends_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedAppointment {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentData {
    pub create_appointment: CreatedAppointment,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAppointmentsData {
    pub customer_appointments: Vec<Appointment>,
}
