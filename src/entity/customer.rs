use serde::{Deserialize, Serialize};

use super::Category;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub iban: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_category: Option<Category>,
}
