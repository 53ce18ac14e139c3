use std::env::temp_dir;

use entity_listing::{
    core::{item::ItemReader, step::StepBuilder},
    entity::EntityKind,
    export::{DirectorySaver, XmlExporter},
    item::{json::JsonRecordReaderBuilder, logger::LoggerWriter},
};

use log::info;

const EMPLOYEES: &str = r#"[
  {"id": 10, "code": "E010", "firstName": "Ada", "lastName": "Lovelace",
   "address": "12 Analytical Rd", "email": "ada@example.test", "phone": "555-0110",
   "department": {"code": "RD", "description": "Research & Development"}},
  {"id": 11, "code": "E011", "firstName": "Alan", "lastName": "Turing",
   "address": "7 Bletchley Ln", "email": "alan@example.test", "phone": "555-0111"}
]"#;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let kind = EntityKind::Employee;

    // Trace the listing first, then export it.
    let reader = JsonRecordReaderBuilder::new().from_reader(EMPLOYEES.as_bytes());
    let logger = LoggerWriter::new(kind.tag());
    StepBuilder::new()
        .reader(&reader)
        .writer(&logger)
        .build()?
        .execute();

    let reader = JsonRecordReaderBuilder::new().from_reader(EMPLOYEES.as_bytes());
    let mut employees = Vec::new();
    while let Some(employee) = reader.read()? {
        employees.push(employee);
    }

    let exporter = XmlExporter::for_kind(kind)?;
    let saver = DirectorySaver::new(temp_dir().join("entity-listing"));
    let path = exporter.export(&employees, &saver)?;

    info!("{} written to {}", exporter.file_name(), path.display());
    println!("{}", std::fs::read_to_string(path)?);

    Ok(())
}
