// src/screens/mod.rs

pub mod my_schedules;
pub mod schedule;
pub mod welcome;
