#![allow(dead_code)]

pub mod mocks;

pub use mocks::MockFile;

use rand::distr::{Alphanumeric, SampleString};

pub const CUSTOMERS_JSON: &str = r#"[
  {
    "id": 1,
    "name": "Acme & Co",
    "address": "1 Main St",
    "email": "info@acme.test",
    "phone": "555-0100",
    "iban": "FR7630006000011234567890189",
    "customerCategory": { "code": "GOLD", "description": "Gold <premium>" }
  },
  {
    "id": 2,
    "name": "Globex",
    "address": "2 Side St",
    "email": "hello@globex.test",
    "phone": "555-0101",
    "iban": "DE89370400440532013000"
  },
  {
    "id": 3,
    "name": "O'Reilly \"Books\"",
    "address": "3 Quote Ave",
    "email": "orders@oreilly.test",
    "phone": "555-0102",
    "iban": "GB29NWBK60161331926819",
    "customerCategory": null
  }
]"#;

pub const EMPLOYEES_JSON: &str = r#"[
  {
    "id": 10,
    "code": "E010",
    "firstName": "Ada",
    "lastName": "Lovelace",
    "address": "12 Analytical Rd",
    "email": "ada@example.test",
    "phone": "555-0110",
    "department": { "code": "RD", "description": "Research & Development" }
  },
  {
    "id": 11,
    "code": "E011",
    "firstName": "Alan",
    "lastName": "Turing",
    "address": "7 Bletchley Ln",
    "email": "alan@example.test",
    "phone": "555-0111"
  }
]"#;

/// Random alphanumeric name, used to keep temporary files apart.
pub fn random_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 16)
}
