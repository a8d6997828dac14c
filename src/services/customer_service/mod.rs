// src/services/customer_service/mod.rs

use serde_json::json;

use crate::client::{GraphqlClient, GraphqlError};
use crate::models::customers::{CreateCustomerData, CustomerData};
use crate::models::Customer;

pub const CREATE_CUSTOMER: &str = "\
mutation CreateCustomer($data: CreateCustomerInput!) {
  createCustomer(data: $data) {
    id
    name
  }
}";

pub const GET_CUSTOMER: &str = "\
query Customer($customerId: String!) {
  customer(id: $customerId) {
    id
    name
  }
}";

pub async fn create_customer(
    client: &GraphqlClient,
    name: &str,
) -> Result<Customer, GraphqlError> {
    let variables = json!({ "data": { "name": name } });
    let data = client.mutate(CREATE_CUSTOMER, variables).await?;
    let data: CreateCustomerData = serde_json::from_value(data)?;
    Ok(data.create_customer)
}

/// None means the identifier does not resolve to an existing customer.
pub async fn get_customer(
    client: &GraphqlClient,
    customer_id: &str,
) -> Result<Option<Customer>, GraphqlError> {
    let variables = json!({ "customerId": customer_id });
    let data = client.fetch(GET_CUSTOMER, variables).await?;
    let data: CustomerData = serde_json::from_value(data)?;
    Ok(data.customer)
}
