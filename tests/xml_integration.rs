pub mod common;

use std::{
    env::temp_dir,
    fs::{self, read_to_string},
};

use common::{CUSTOMERS_JSON, EMPLOYEES_JSON, random_name};
use entity_listing::{
    core::{
        item::ItemReader,
        record::Record,
        step::{StepBuilder, StepStatus},
    },
    entity::EntityKind,
    error::ListingError,
    item::{
        json::JsonRecordReaderBuilder,
        xml::{FieldMapping, XmlItemWriterBuilder, escape, to_xml, unescape},
    },
};
use quick_xml::{Reader, events::Event};

fn read_all(body: &str) -> Vec<Record> {
    let reader = JsonRecordReaderBuilder::new().from_reader(body.as_bytes());
    let mut records = Vec::new();
    while let Some(record) = reader.read().unwrap() {
        records.push(record);
    }
    records
}

/// Checks that `xml` parses as a document from start to end.
fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => (),
            Err(e) => panic!("Malformed XML at {}: {:?}", reader.buffer_position(), e),
        }
    }
    assert_eq!(depth, 0);
}

/// Unescaped text of every `<tag>` element, in document order.
fn texts_of(xml: &str, tag: &str) -> Vec<String> {
    let open = format!("<{}>", tag);
    let close = format!("</{}>", tag);
    xml.split(open.as_str())
        .skip(1)
        .filter_map(|rest| rest.split(close.as_str()).next())
        .map(unescape)
        .collect()
}

#[test]
fn customers_are_exported_from_json_file_to_xml_file() -> Result<(), ListingError> {
    let name = random_name();
    let input_path = temp_dir().join(format!("{}.json", name));
    let output_path = temp_dir().join(format!("{}.xml", name));
    fs::write(&input_path, CUSTOMERS_JSON).unwrap();

    let kind = EntityKind::Customer;
    let reader = JsonRecordReaderBuilder::new().from_path(&input_path)?;
    let writer = XmlItemWriterBuilder::new()
        .item_tag(kind.tag())
        .mapping(kind.field_mapping()?)
        .from_path(&output_path)?;

    let step = StepBuilder::new()
        .reader(&reader)
        .writer(&writer)
        .chunk(2)
        .build()?;
    let result = step.execute();

    assert_eq!(result.status, StepStatus::Success);
    assert_eq!(step.get_write_count(), 3);

    let xml = read_to_string(&output_path).unwrap();
    let expected = to_xml(
        Some(read_all(CUSTOMERS_JSON).as_slice()),
        kind.tag(),
        &kind.field_mapping()?,
    )?;
    assert_eq!(xml, expected);

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<customers>\n"));
    assert!(xml.ends_with("</customers>"));
    assert_well_formed(&xml);
    assert_eq!(xml.matches("<customer>").count(), 3);
    assert_eq!(xml.matches("<customerCategory>").count(), 1);
    assert!(xml.contains("<name>Acme &amp; Co</name>"));
    assert!(xml.contains("<description>Gold &lt;premium&gt;</description>"));
    assert!(xml.contains("<name>O&#039;Reilly &quot;Books&quot;</name>"));

    fs::remove_file(input_path).unwrap();
    fs::remove_file(output_path).unwrap();
    Ok(())
}

#[test]
fn exported_text_parses_back_to_the_source_values() -> Result<(), ListingError> {
    let kind = EntityKind::Customer;
    let xml = to_xml(
        Some(read_all(CUSTOMERS_JSON).as_slice()),
        kind.tag(),
        &kind.field_mapping()?,
    )?;

    assert_eq!(
        texts_of(&xml, "name"),
        ["Acme & Co", "Globex", "O'Reilly \"Books\""]
    );
    assert_eq!(texts_of(&xml, "id"), ["1", "2", "3"]);
    assert_eq!(texts_of(&xml, "description"), ["Gold <premium>"]);

    Ok(())
}

#[test]
fn employee_export_nests_departments() -> Result<(), ListingError> {
    let kind = EntityKind::Employee;
    let xml = to_xml(
        Some(read_all(EMPLOYEES_JSON).as_slice()),
        kind.tag(),
        &kind.field_mapping()?,
    )?;

    let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<employees>
  <employee>
    <id>10</id>
    <code>E010</code>
    <firstName>Ada</firstName>
    <lastName>Lovelace</lastName>
    <address>12 Analytical Rd</address>
    <email>ada@example.test</email>
    <phone>555-0110</phone>
    <department>
      <code>RD</code>
      <description>Research &amp; Development</description>
    </department>
  </employee>
  <employee>
    <id>11</id>
    <code>E011</code>
    <firstName>Alan</firstName>
    <lastName>Turing</lastName>
    <address>7 Bletchley Ln</address>
    <email>alan@example.test</email>
    <phone>555-0111</phone>
  </employee>
</employees>";
    assert_eq!(xml, expected);

    Ok(())
}

#[test]
fn empty_and_null_listings_give_the_same_document() -> Result<(), ListingError> {
    let mapping = EntityKind::Supplier.field_mapping()?;

    let empty = to_xml(Some(&[][..]), "supplier", &mapping)?;
    let null = to_xml(Some(read_all("null").as_slice()), "supplier", &mapping)?;
    let none = to_xml(None, "supplier", &mapping)?;

    assert_eq!(empty, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<suppliers>\n</suppliers>");
    assert_eq!(empty, null);
    assert_eq!(empty, none);

    Ok(())
}

#[test]
fn mapping_loaded_from_json_layout() -> Result<(), ListingError> {
    let layout = r#"[
        {"xmlTag": "ref", "path": "id"},
        {"xmlTag": "surname", "path": "lastName"},
        {"containerTag": "unit", "path": "department", "childMappings": [
            {"xmlTag": "name", "path": "description"}
        ]}
    ]"#;
    let mapping = FieldMapping::from_json_str(layout)?;

    let xml = to_xml(Some(read_all(EMPLOYEES_JSON).as_slice()), "person", &mapping)?;

    assert!(xml.contains("<persons>"));
    assert_well_formed(&xml);
    assert_eq!(texts_of(&xml, "surname"), ["Lovelace", "Turing"]);
    assert_eq!(texts_of(&xml, "name"), ["Research & Development"]);
    assert_eq!(xml.matches("<unit>").count(), 1);

    Ok(())
}

#[test]
fn escaping_round_trips_through_the_document() {
    for text in ["plain", "a & b", "<tag attr=\"v\">", "it's", "&amp; already", ""] {
        let record = Record::new().with("id", 1).with("name", text);
        let mapping = FieldMapping::builder().leaf("name", "name").build().unwrap();

        let xml = to_xml(Some(&[record][..]), "row", &mapping).unwrap();

        assert_well_formed(&xml);
        assert!(xml.contains(&format!("<name>{}</name>", escape(text))));
        assert_eq!(unescape(&escape(text)), text);
    }
}
