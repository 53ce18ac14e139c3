use std::cell::Cell;

use fake::faker::{
    address::raw::{BuildingNumber, CityName, StreetName},
    boolean::raw::Boolean,
    company::raw::CompanyName,
    internet::raw::FreeEmail,
    name::raw::{FirstName, LastName},
    phone_number::raw::PhoneNumber,
};
use fake::{Fake, locales::EN};
use log::debug;

use crate::{
    core::{
        item::{ItemReader, ItemReaderResult},
        record::Record,
    },
    entity::{Category, Customer, Employee, EntityKind, Supplier},
};

const CUSTOMER_CATEGORIES: &[(&str, &str)] = &[
    ("GOLD", "Gold customers"),
    ("SILVER", "Silver customers"),
    ("RETAIL", "Retail customers"),
];

const DEPARTMENTS: &[(&str, &str)] = &[
    ("HR", "Human Resources"),
    ("RD", "Research & Development"),
    ("OPS", "Operations"),
    ("FIN", "Finance"),
];

fn address() -> String {
    let number: String = BuildingNumber(EN).fake();
    let street: String = StreetName(EN).fake();
    let city: String = CityName(EN).fake();
    format!("{} {}, {}", number, street, city)
}

fn iban() -> String {
    let check: u8 = (10u8..98).fake();
    let bank: u32 = (10_000u32..99_999).fake();
    let account: u64 = (1_000_000_000u64..9_999_999_999).fake();
    format!("FR{}{}{}", check, bank, account)
}

/// Picks an entry of `choices` about two times in three, `None` otherwise.
fn maybe_category(choices: &[(&str, &str)]) -> Option<Category> {
    let present: bool = Boolean(EN, 66).fake();
    if !present {
        return None;
    }
    let index: usize = (0..choices.len()).fake();
    choices
        .get(index)
        .map(|(code, description)| Category::new(code, description))
}

/// Reader producing a fixed number of fake records of one entity kind.
pub struct EntityReader {
    kind: EntityKind,
    count: Cell<usize>,
    next_id: Cell<i64>,
}

impl EntityReader {
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    fn next_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn customer(&self) -> Customer {
        Customer {
            id: self.next_id(),
            name: CompanyName(EN).fake(),
            address: address(),
            email: FreeEmail(EN).fake(),
            phone: PhoneNumber(EN).fake(),
            iban: iban(),
            customer_category: maybe_category(CUSTOMER_CATEGORIES),
        }
    }

    fn employee(&self) -> Employee {
        let id = self.next_id();
        Employee {
            id,
            code: format!("E{:04}", id),
            first_name: FirstName(EN).fake(),
            last_name: LastName(EN).fake(),
            address: address(),
            email: FreeEmail(EN).fake(),
            phone: PhoneNumber(EN).fake(),
            department: maybe_category(DEPARTMENTS),
        }
    }

    fn supplier(&self) -> Supplier {
        Supplier {
            id: self.next_id(),
            name: CompanyName(EN).fake(),
            address: address(),
            email: FreeEmail(EN).fake(),
            phone: PhoneNumber(EN).fake(),
        }
    }
}

impl ItemReader<Record> for EntityReader {
    fn read(&self) -> ItemReaderResult<Record> {
        if self.count.get() == 0 {
            return Ok(None);
        }

        self.count.set(self.count.get() - 1);

        let record = match self.kind {
            EntityKind::Customer => Record::from_serializable(&self.customer())?,
            EntityKind::Employee => Record::from_serializable(&self.employee())?,
            EntityKind::Supplier => Record::from_serializable(&self.supplier())?,
        };
        debug!("Fake {}: {:?}", self.kind, record);
        Ok(Some(record))
    }
}

pub struct EntityReaderBuilder {
    kind: EntityKind,
    number_of_items: usize,
    first_id: i64,
}

impl Default for EntityReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityReaderBuilder {
    pub fn new() -> EntityReaderBuilder {
        EntityReaderBuilder {
            kind: EntityKind::Customer,
            number_of_items: 0,
            first_id: 1,
        }
    }

    pub fn kind(mut self, kind: EntityKind) -> EntityReaderBuilder {
        self.kind = kind;
        self
    }

    pub fn number_of_items(mut self, number_of_items: usize) -> EntityReaderBuilder {
        self.number_of_items = number_of_items;
        self
    }

    /// Id given to the first generated record; later ones count up from it.
    pub fn first_id(mut self, first_id: i64) -> EntityReaderBuilder {
        self.first_id = first_id;
        self
    }

    pub fn build(self) -> EntityReader {
        EntityReader {
            kind: self.kind,
            count: self.number_of_items.into(),
            next_id: self.first_id.into(),
        }
    }
}
