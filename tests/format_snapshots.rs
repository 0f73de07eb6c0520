//! Snapshot tests for the output formats

use mdtags::markdown::formats::{OutputFormat, TagStream};
use mdtags::markdown::{ParserKind, ScanOptions, TagScanner};

fn render(source: &str, format: OutputFormat) -> String {
    let scanner = TagScanner::new();
    let stream = TagStream::scan(&scanner, source);
    format.serialize(&stream).expect("format to serialize")
}

#[test]
fn test_showcase_tag_format() {
    let output = render(include_str!("fixtures/showcase.md"), OutputFormat::Tag);
    insta::assert_snapshot!(output, @r#"
    <document>
      <normal>Some text </normal>
      <text-style style="bold">before</text-style>
      <normal> the captions</normal>
      <header weight="1">Caption 1</header>
      <normal>Some lines of </normal>
      <text-style style="italics">styled and </text-style>
      <text-style style="italics bold">double styled</text-style>
      <text-style style="italics"> text</text-style>
      <normal> which should be formatted correctly.&#10;Also new lines should work properly.</normal>
      <header weight="3">Caption 3</header>
      <normal>The caption above is a bit smaller. Below add more lines to start a new *paragraph*.</normal>
      <paragraph weight="1"/>
      <normal>New paragraph here with </normal>
      <alternative-text-style style="strikethrough">strike through text in </alternative-text-style>
      <text-style style="bold strikethrough">bold</text-style>
      <normal>.</normal>
    </document>
    "#);
}

#[test]
fn test_lists_treeviz_format() {
    let output = render("1. first\n   - inner\n   - [link](x)\n2. second\n", OutputFormat::Treeviz);
    insta::assert_snapshot!(output, @r"
    ├─ № first
    ├─   • inner
    ├─   • [link](x)
    └─ № second
    ");
}

#[test]
fn test_data_formats_agree() {
    let source = "## Head\n*a* b";
    let json: serde_json::Value = serde_json::from_str(&render(source, OutputFormat::Json)).unwrap();
    let yaml: serde_json::Value = serde_yaml::from_str(&render(source, OutputFormat::Yaml)).unwrap();
    assert_eq!(json, yaml);
    assert_eq!(json[0]["text"], "Head");
    assert_eq!(json[1]["kind"], "text-style");
    assert_eq!(json[2]["text"], " b");
}

#[test]
fn test_large_document_with_char_offsets() {
    let source = "## Ünïcödé\n- ïtem *ë* [lïnk](ürl)\nPlâin ~~strück~~ \\*\n\n".repeat(2_000);
    let bytes = ParserKind::Scanner.build(ScanOptions::default());
    let chars = ParserKind::CharOffsets.build(ScanOptions::default());
    let byte_stream = TagStream::scan(bytes.as_ref(), &source);
    let char_stream = TagStream::scan(chars.as_ref(), &source);
    assert_eq!(char_stream.tags().len(), byte_stream.tags().len());

    for format in [OutputFormat::Tag, OutputFormat::Treeviz] {
        assert_eq!(
            format.serialize(&char_stream).expect("format to serialize"),
            format.serialize(&byte_stream).expect("format to serialize"),
        );
    }

    let json: serde_json::Value =
        serde_json::from_str(&OutputFormat::Json.serialize(&char_stream).expect("json"))
            .expect("valid json");
    let records = json.as_array().expect("array of records");
    assert_eq!(records.len(), char_stream.tags().len());
    assert_eq!(records[0]["text"], "Ünïcödé");
    let last = records.last().expect("records");
    assert_eq!(last["end_position"], source.chars().count());
}
