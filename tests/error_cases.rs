mod common;

use std::io::{self, ErrorKind};

use common::{CUSTOMERS_JSON, MockFile};
use entity_listing::{
    core::{
        record::Record,
        step::{StepBuilder, StepStatus},
    },
    entity::EntityKind,
    error::ListingError,
    item::{
        json::JsonRecordReaderBuilder,
        table::TableItemWriter,
        xml::{FieldMapping, XmlItemWriterBuilder, to_xml},
    },
};

fn failing_file() -> MockFile {
    let mut file = MockFile::default();
    file.expect_write().returning(|_buf| {
        let err = io::Error::from(ErrorKind::PermissionDenied);
        Result::Err(err)
    });
    file.expect_flush().returning(|| Ok(()));
    file
}

#[test]
fn xml_export_to_failing_sink_fails_the_step() -> Result<(), ListingError> {
    let kind = EntityKind::Customer;
    let reader = JsonRecordReaderBuilder::new().from_reader(CUSTOMERS_JSON.as_bytes());
    let writer = XmlItemWriterBuilder::new()
        .item_tag(kind.tag())
        .mapping(kind.field_mapping()?)
        .from_writer(failing_file())?;

    let step = StepBuilder::new()
        .reader(&reader)
        .writer(&writer)
        .chunk(1)
        .build()?;
    let result = step.execute();

    assert_eq!(result.status, StepStatus::Error);
    assert_eq!(step.get_read_count(), 1);
    assert_eq!(step.get_write_count(), 0);
    assert_eq!(step.get_read_error_count(), 0);
    assert_eq!(step.get_write_error_count(), 1);

    Ok(())
}

#[test]
fn bad_elements_are_skipped_within_the_limit() -> Result<(), ListingError> {
    let body = r#"[{"id": 1, "name": "A"}, "oops", 7, {"id": 4, "name": "D"}]"#;
    let reader = JsonRecordReaderBuilder::new().from_reader(body.as_bytes());
    let writer = TableItemWriter::new(EntityKind::Supplier.columns()?);

    let step = StepBuilder::new()
        .reader(&reader)
        .writer(&writer)
        .chunk(10)
        .skip_limit(2)
        .build()?;
    let result = step.execute();

    assert_eq!(result.status, StepStatus::Success);
    assert_eq!(result.read_count, 2);
    assert_eq!(result.read_error_count, 2);
    assert_eq!(writer.grid().text(1, "name"), Some("D"));

    Ok(())
}

#[test]
fn bad_elements_beyond_the_limit_fail_the_step() -> Result<(), ListingError> {
    let body = r#"[1, 2, {"id": 3}]"#;
    let reader = JsonRecordReaderBuilder::new().from_reader(body.as_bytes());
    let writer = TableItemWriter::new(EntityKind::Supplier.columns()?);

    let result = StepBuilder::new()
        .reader(&reader)
        .writer(&writer)
        .skip_limit(1)
        .build()?
        .execute();

    assert_eq!(result.status, StepStatus::Error);
    assert_eq!(result.read_error_count, 2);
    assert!(writer.grid().is_empty());

    Ok(())
}

#[test]
fn malformed_listing_fails_the_step() -> Result<(), ListingError> {
    let reader = JsonRecordReaderBuilder::new().from_reader("[{\"id\": ".as_bytes());
    let writer = TableItemWriter::new(EntityKind::Customer.columns()?);

    let result = StepBuilder::new()
        .reader(&reader)
        .writer(&writer)
        .build()?
        .execute();

    assert_eq!(result.status, StepStatus::Error);
    assert_eq!(result.read_count, 0);

    Ok(())
}

#[test]
fn step_without_writer_is_rejected() {
    let reader = JsonRecordReaderBuilder::new().from_reader("[]".as_bytes());

    let result = StepBuilder::<Record>::new().reader(&reader).build();

    assert!(matches!(result, Err(ListingError::Configuration(_))));
}

#[test]
fn invalid_tags_are_rejected() {
    let mapping = FieldMapping::builder().leaf("id", "id").build().unwrap();

    assert!(matches!(
        to_xml(None, "bad tag", &mapping),
        Err(ListingError::Configuration(_))
    ));
    assert!(FieldMapping::builder().leaf("1st", "id").build().is_err());
    assert!(FieldMapping::from_json_str(r#"[{"xmlTag": "ok", "path": ""}]"#).is_err());
    assert!(
        XmlItemWriterBuilder::new()
            .root_tag("<root>")
            .from_writer(Vec::new())
            .is_err()
    );
}
