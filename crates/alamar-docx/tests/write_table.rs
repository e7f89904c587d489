//! Round-trip tests: write a table document, reopen the archive, check parts.

use std::io::{Cursor, Read};

use pretty_assertions::assert_eq;

use alamar_docx::{DocxError, DocxWriter};

fn results_table() -> (Vec<String>, Vec<Vec<String>>) {
    let header = vec!["Sample".to_string(), "Cell Viability %".to_string()];
    let rows = vec![
        vec!["untreated".to_string(), "100".to_string()],
        vec!["drug A".to_string(), "88.1".to_string()],
        vec!["5% DMSO & heat".to_string(), "3.2".to_string()],
    ];
    (header, rows)
}

fn read_part(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
    let mut part = archive.by_name(name).unwrap();
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn written_archive_has_required_parts() {
    let (header, rows) = results_table();
    let mut buf = Cursor::new(Vec::new());
    DocxWriter::write_table(&mut buf, &header, &rows).unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(buf.into_inner())).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();

    assert_eq!(
        names,
        vec![
            "[Content_Types].xml".to_string(),
            "_rels/.rels".to_string(),
            "word/document.xml".to_string(),
        ]
    );

    let content_types = read_part(&mut archive, "[Content_Types].xml");
    assert!(content_types.contains("wordprocessingml.document.main+xml"));
}

#[test]
fn document_contains_one_row_per_result_plus_header() {
    let (header, rows) = results_table();
    let mut buf = Cursor::new(Vec::new());
    DocxWriter::write_table(&mut buf, &header, &rows).unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(buf.into_inner())).unwrap();
    let document = read_part(&mut archive, "word/document.xml");

    assert_eq!(document.matches("<w:tr>").count(), 4);
    assert!(document.contains(">untreated</w:t>"));
    assert!(document.contains(">100</w:t>"));
    // XML-special characters in sample names survive escaping
    assert!(document.contains(">5% DMSO &amp; heat</w:t>"));
}

#[test]
fn ragged_rows_are_rejected() {
    let header = vec!["Sample".to_string(), "Cell Viability %".to_string()];
    let rows = vec![vec!["lonely cell".to_string()]];

    let mut buf = Cursor::new(Vec::new());
    let err = DocxWriter::write_table(&mut buf, &header, &rows).unwrap_err();
    assert!(matches!(
        err,
        DocxError::RaggedTable {
            row: 1,
            got: 1,
            expected: 2
        }
    ));
}

#[test]
fn missing_extension_is_appended() {
    let (header, rows) = results_table();
    let dir = tempfile::tempdir().unwrap();

    let written = DocxWriter::write_table_file(dir.path().join("results"), &header, &rows).unwrap();
    assert_eq!(written, dir.path().join("results.docx"));
    assert!(written.exists());

    // An explicit .docx extension is left alone
    let written =
        DocxWriter::write_table_file(dir.path().join("report.docx"), &header, &rows).unwrap();
    assert_eq!(written, dir.path().join("report.docx"));
}
