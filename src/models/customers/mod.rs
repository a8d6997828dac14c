// src/models/customers/mod.rs

pub mod customer;

pub use customer::{CreateCustomerData, Customer, CustomerData};
