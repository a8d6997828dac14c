// src/models/mod.rs

pub mod appointments;
pub mod customers;

pub use appointments::{Appointment, CreatedAppointment, NewAppointment};
pub use customers::Customer;
