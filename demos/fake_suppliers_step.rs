use std::env::temp_dir;

use entity_listing::{
    core::step::{StepBuilder, StepResult},
    entity::EntityKind,
    item::{fake::EntityReaderBuilder, logger::LoggerWriter, xml::XmlItemWriterBuilder},
};

use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    info!("Starting fake supplier generation");

    let kind = EntityKind::Supplier;
    let path = temp_dir().join(kind.export_file_name());

    let reader = EntityReaderBuilder::new()
        .kind(kind)
        .number_of_items(25)
        .build();
    let writer = XmlItemWriterBuilder::new()
        .item_tag(kind.tag())
        .mapping(kind.field_mapping()?)
        .from_path(&path)?;

    let result: StepResult = StepBuilder::new()
        .reader(&reader)
        .writer(&writer)
        .chunk(10)
        .build()?
        .execute();
    info!("Time elapsed is: {:?}", result.duration);

    let sample = EntityReaderBuilder::new()
        .kind(kind)
        .number_of_items(3)
        .first_id(1000)
        .build();
    let logger = LoggerWriter::new("sample");
    StepBuilder::new()
        .reader(&sample)
        .writer(&logger)
        .build()?
        .execute();

    info!("Finishing fake supplier generation: {}", path.display());
    Ok(())
}
