// src/models/appointments/mod.rs

pub mod appointment;

pub use appointment::{
    Appointment, CreateAppointmentData, CreatedAppointment, CustomerAppointmentsData,
    NewAppointment,
};
