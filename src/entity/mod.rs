//! The business entities listed by the application.
//!
//! Each [`EntityKind`] knows how its records are laid out on screen (its
//! [`TableSchema`]) and in an XML export (its [`FieldMapping`]). The typed
//! models in the submodules convert to [`Record`]s with [`to_records`].
//!
//! # Examples
//!
//! ```
//! use entity_listing::entity::{to_records, Category, Customer, EntityKind};
//! use entity_listing::item::{table::project, xml::to_xml};
//!
//! let customers = vec![Customer {
//!     id: 1,
//!     name: "Acme".to_string(),
//!     address: "1 Main St".to_string(),
//!     email: "info@acme.test".to_string(),
//!     phone: "555-0100".to_string(),
//!     iban: "FR76".to_string(),
//!     customer_category: Some(Category::new("GOLD", "Gold")),
//! }];
//! let records = to_records(&customers).unwrap();
//!
//! let kind = EntityKind::Customer;
//! let grid = project(&kind.columns().unwrap(), Some(records.as_slice()));
//! assert_eq!(grid.text(0, "categoryCode"), Some("GOLD"));
//!
//! let xml = to_xml(Some(records.as_slice()), kind.tag(), &kind.field_mapping().unwrap()).unwrap();
//! assert!(xml.contains("<customerCategory>"));
//! ```

pub mod customer;
pub mod employee;
pub mod supplier;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use customer::Customer;
pub use employee::Employee;
pub use supplier::Supplier;

use crate::{
    core::record::Record,
    error::ListingError,
    item::{
        table::{Column, DisplayHint, TableSchema},
        xml::{FieldMapping, plural},
    },
};

/// Code and description pair, used for customer categories and departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub code: String,
    pub description: String,
}

impl Category {
    pub fn new(code: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            description: description.to_string(),
        }
    }
}

type ColumnDef = (&'static str, &'static str, &'static str, Option<DisplayHint>);

const CUSTOMER_COLUMNS: &[ColumnDef] = &[
    ("name", "Name", "name", Some(DisplayHint::Emphasis)),
    ("address", "Address", "address", None),
    ("email", "Email", "email", None),
    ("phone", "Phone", "phone", None),
    ("iban", "Iban", "iban", None),
    ("categoryCode", "Code", "customerCategory.code", Some(DisplayHint::Emphasis)),
    ("categoryDescription", "Description", "customerCategory.description", None),
];

const EMPLOYEE_COLUMNS: &[ColumnDef] = &[
    ("code", "Code", "code", Some(DisplayHint::Monospace)),
    ("firstName", "First Name", "firstName", Some(DisplayHint::Emphasis)),
    ("lastName", "Last Name", "lastName", Some(DisplayHint::Emphasis)),
    ("address", "Address", "address", None),
    ("email", "Email", "email", None),
    ("phone", "Phone", "phone", None),
    ("departmentCode", "Department Code", "department.code", Some(DisplayHint::Emphasis)),
    ("departmentDescription", "Department Description", "department.description", None),
];

const SUPPLIER_COLUMNS: &[ColumnDef] = &[
    ("name", "Name", "name", Some(DisplayHint::Emphasis)),
    ("address", "Address", "address", None),
    ("email", "Email", "email", None),
    ("phone", "Phone", "phone", None),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Customer,
    Employee,
    Supplier,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::Customer, EntityKind::Employee, EntityKind::Supplier];

    /// Element name of a single record in an XML export.
    pub fn tag(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Employee => "employee",
            EntityKind::Supplier => "supplier",
        }
    }

    pub fn plural(&self) -> String {
        plural(self.tag())
    }

    /// Page heading, e.g. `Customers`.
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Customer => "Customers",
            EntityKind::Employee => "Employees",
            EntityKind::Supplier => "Suppliers",
        }
    }

    /// Text shown in place of the table when the list is empty.
    pub fn empty_message(&self) -> String {
        format!("No {} found", self.plural())
    }

    pub fn export_file_name(&self) -> String {
        format!("{}.xml", self.plural())
    }

    pub fn columns(&self) -> Result<TableSchema, ListingError> {
        let defs = match self {
            EntityKind::Customer => CUSTOMER_COLUMNS,
            EntityKind::Employee => EMPLOYEE_COLUMNS,
            EntityKind::Supplier => SUPPLIER_COLUMNS,
        };

        let columns = defs
            .iter()
            .map(|(id, label, field, hint)| {
                let column = Column::new(id, label, field)?;
                Ok(match hint {
                    Some(hint) => column.with_hint(*hint),
                    None => column,
                })
            })
            .collect::<Result<Vec<_>, ListingError>>()?;

        TableSchema::new(columns)
    }

    pub fn field_mapping(&self) -> Result<FieldMapping, ListingError> {
        let contact = FieldMapping::builder()
            .leaf("id", "id")
            .leaf("name", "name")
            .leaf("address", "address")
            .leaf("email", "email")
            .leaf("phone", "phone");

        match self {
            EntityKind::Customer => contact
                .leaf("iban", "iban")
                .nested("customerCategory", "customerCategory", |category| {
                    category.leaf("code", "code").leaf("description", "description")
                })
                .build(),
            EntityKind::Employee => FieldMapping::builder()
                .leaf("id", "id")
                .leaf("code", "code")
                .leaf("firstName", "firstName")
                .leaf("lastName", "lastName")
                .leaf("address", "address")
                .leaf("email", "email")
                .leaf("phone", "phone")
                .nested("department", "department", |department| {
                    department.leaf("code", "code").leaf("description", "description")
                })
                .build(),
            EntityKind::Supplier => contact.build(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for EntityKind {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s || kind.plural() == s)
            .ok_or_else(|| ListingError::Configuration(format!("Unknown entity kind: {}", s)))
    }
}

/// Converts typed models into records, preserving order.
pub fn to_records<T: Serialize>(entities: &[T]) -> Result<Vec<Record>, ListingError> {
    entities.iter().map(Record::from_serializable).collect()
}

#[cfg(test)]
mod tests {
    use super::{Category, EntityKind, Supplier, to_records};
    use crate::{
        error::ListingError,
        item::{
            table::{DisplayHint, project},
            xml::{MappingEntry, to_xml},
        },
    };

    fn column_ids(kind: EntityKind) -> Vec<String> {
        kind.columns()
            .unwrap()
            .columns()
            .iter()
            .map(|column| column.id.clone())
            .collect()
    }

    fn mapping_tags(kind: EntityKind) -> Vec<String> {
        kind.field_mapping()
            .unwrap()
            .entries()
            .iter()
            .map(|entry| entry.tag().to_string())
            .collect()
    }

    #[test]
    fn customer_layout() {
        assert_eq!(
            column_ids(EntityKind::Customer),
            ["name", "address", "email", "phone", "iban", "categoryCode", "categoryDescription"]
        );
        assert_eq!(
            mapping_tags(EntityKind::Customer),
            ["id", "name", "address", "email", "phone", "iban", "customerCategory"]
        );
    }

    #[test]
    fn employee_layout() {
        let schema = EntityKind::Employee.columns().unwrap();

        assert_eq!(schema.len(), 8);
        assert_eq!(schema.column("code").unwrap().hint, Some(DisplayHint::Monospace));
        assert_eq!(schema.column("departmentCode").unwrap().field.to_string(), "department.code");

        let mapping = EntityKind::Employee.field_mapping().unwrap();
        match mapping.entries().last() {
            Some(MappingEntry::Nested { children, .. }) => {
                let tags: Vec<&str> = children.iter().map(|c| c.tag()).collect();
                assert_eq!(tags, ["code", "description"]);
            }
            other => panic!("Expected nested department, got {:?}", other),
        }
    }

    #[test]
    fn supplier_layout() {
        assert_eq!(column_ids(EntityKind::Supplier), ["name", "address", "email", "phone"]);
        assert_eq!(
            mapping_tags(EntityKind::Supplier),
            ["id", "name", "address", "email", "phone"]
        );
    }

    #[test]
    fn names_follow_the_tag() {
        assert_eq!(EntityKind::Employee.plural(), "employees");
        assert_eq!(EntityKind::Supplier.export_file_name(), "suppliers.xml");
        assert_eq!(EntityKind::Customer.title(), "Customers");
        assert_eq!(EntityKind::Customer.empty_message(), "No customers found");
        assert_eq!(EntityKind::Employee.to_string(), "employee");
    }

    #[test]
    fn parses_singular_and_plural() {
        assert_eq!("customer".parse::<EntityKind>().unwrap(), EntityKind::Customer);
        assert_eq!("suppliers".parse::<EntityKind>().unwrap(), EntityKind::Supplier);
        assert!(matches!(
            "invoice".parse::<EntityKind>(),
            Err(ListingError::Configuration(_))
        ));
    }

    #[test]
    fn typed_suppliers_project_and_export() {
        let suppliers = vec![Supplier {
            id: 4,
            name: "Initech".to_string(),
            address: "4 Office Park".to_string(),
            email: "sales@initech.test".to_string(),
            phone: "555-0104".to_string(),
        }];
        let records = to_records(&suppliers).unwrap();
        let kind = EntityKind::Supplier;

        let grid = project(&kind.columns().unwrap(), Some(records.as_slice()));
        assert_eq!(grid.text(0, "email"), Some("sales@initech.test"));

        let xml = to_xml(Some(records.as_slice()), kind.tag(), &kind.field_mapping().unwrap()).unwrap();
        assert!(xml.contains("<supplier>\n    <id>4</id>\n    <name>Initech</name>"));
        assert!(xml.ends_with("</suppliers>"));
    }

    #[test]
    fn category_serializes_flat() {
        let json = serde_json::to_value(Category::new("HR", "Human Resources")).unwrap();
        assert_eq!(json["code"], "HR");
        assert_eq!(json["description"], "Human Resources");
    }
}
