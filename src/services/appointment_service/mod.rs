// src/services/appointment_service/mod.rs

use serde_json::json;

use crate::client::{GraphqlClient, GraphqlError};
use crate::models::appointments::{CreateAppointmentData, CustomerAppointmentsData};
use crate::models::{Appointment, NewAppointment};

pub const CREATE_APPOINTMENT: &str = "\
mutation CreateAppointment($data: CreateAppointmentInput!) {
  createAppointment(data: $data) {
    id
  }
}";

pub const CUSTOMER_APPOINTMENTS: &str = "\
query CustomerAppointments($customerId: String!) {
  customerAppointments(customerId: $customerId) {
    id
    startsAt
    endsAt
  }
}";

/// Appointments in the order the API returned them; callers do not resort.
pub async fn customer_appointments(
    client: &GraphqlClient,
    customer_id: &str,
) -> Result<Vec<Appointment>, GraphqlError> {
    let variables = json!({ "customerId": customer_id });
    let data = client.fetch(CUSTOMER_APPOINTMENTS, variables).await?;
    let data: CustomerAppointmentsData = serde_json::from_value(data)?;
    Ok(data.customer_appointments)
}

pub async fn create_appointment(
    client: &GraphqlClient,
    appointment: &NewAppointment,
) -> Result<String, GraphqlError> {
    let variables = json!({ "data": appointment });
    let data = client.mutate(CREATE_APPOINTMENT, variables).await?;
    let data: CreateAppointmentData = serde_json::from_value(data)?;

    // the customer's listing is cached; drop it so the new appointment shows
    // up without a manual reload
    let listing_variables = json!({ "customerId": appointment.customer_id });
    client
        .invalidate(CUSTOMER_APPOINTMENTS, &listing_variables)
        .await;

    Ok(data.create_appointment.id)
}
