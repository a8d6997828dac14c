// src/services/mod.rs

pub mod appointment_service;
pub mod customer_service;

use async_trait::async_trait;

use crate::client::{GraphqlClient, GraphqlError};
use crate::models::{Appointment, Customer, NewAppointment};

/// The four remote operations the screens depend on. Screens take this trait
/// so the flows can run against a fake in tests.
#[async_trait]
pub trait SchedulingApi: Send + Sync {
    async fn create_customer(&self, name: &str) -> Result<Customer, GraphqlError>;
    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>, GraphqlError>;
    async fn create_appointment(&self, appointment: &NewAppointment)
        -> Result<String, GraphqlError>;
    async fn customer_appointments(
        &self,
        customer_id: &str,
    ) -> Result<Vec<Appointment>, GraphqlError>;
}

#[async_trait]
impl SchedulingApi for GraphqlClient {
    async fn create_customer(&self, name: &str) -> Result<Customer, GraphqlError> {
        customer_service::create_customer(self, name).await
    }

    async fn get_customer(&self, customer_id: &str) -> Result<Option<Customer>, GraphqlError> {
        customer_service::get_customer(self, customer_id).await
    }

    async fn create_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> Result<String, GraphqlError> {
        appointment_service::create_appointment(self, appointment).await
    }

    async fn customer_appointments(
        &self,
        customer_id: &str,
    ) -> Result<Vec<Appointment>, GraphqlError> {
        appointment_service::customer_appointments(self, customer_id).await
    }
}
