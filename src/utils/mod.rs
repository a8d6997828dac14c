// src/utils/mod.rs

pub mod date_utils;
pub mod validation;
