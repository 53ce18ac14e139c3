use std::io::Cursor;

use entity_listing::{
    core::{
        record::Record,
        step::{StepBuilder, StepResult},
    },
    entity::EntityKind,
    item::{json::JsonRecordReaderBuilder, table::TableItemWriter},
};

use log::info;

const CUSTOMERS: &str = r#"[
  {"id": 1, "name": "Acme", "address": "1 Main St", "email": "info@acme.test",
   "phone": "555-0100", "iban": "FR7630006000011234567890189",
   "customerCategory": {"code": "GOLD", "description": "Gold customers"}},
  {"id": 2, "name": "Globex", "address": "2 Side St", "email": "hello@globex.test",
   "phone": "555-0101", "iban": "DE89370400440532013000"},
  {"id": 3, "name": "Initech", "address": "3 Office Park", "email": "sales@initech.test",
   "phone": "555-0102", "iban": "GB29NWBK60161331926819", "customerCategory": null}
]"#;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let kind = EntityKind::Customer;
    let reader = JsonRecordReaderBuilder::new().from_reader(Cursor::new(CUSTOMERS));
    let writer = TableItemWriter::new(kind.columns()?);

    let step = StepBuilder::<Record>::new()
        .reader(&reader)
        .writer(&writer)
        .chunk(100)
        .build()?;

    let result: StepResult = step.execute();
    info!("Projected {} customers in {:?}", result.write_count, result.duration);

    let grid = writer.into_grid();
    println!("{}", kind.title());
    if grid.is_empty() {
        println!("{}", kind.empty_message());
    } else {
        println!("{}", grid);
    }

    Ok(())
}
