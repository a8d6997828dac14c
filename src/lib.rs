//! Terminal client for the appointment-scheduling GraphQL API.

pub mod app;
pub mod client;
pub mod models;
pub mod screens;
pub mod services;
pub mod utils;
