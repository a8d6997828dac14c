use serde::{Deserialize, Serialize};

/// The person scheduling appointments. The id is minted by the server and is
/// the only thing carried between screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerData {
    pub create_customer: Customer,
}

#[derive(Debug, Deserialize)]
pub struct CustomerData {
    pub customer: Option<Customer>,
}
