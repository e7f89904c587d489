//! DOCX writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use crate::error::{DocxError, DocxResult};

/// Escape text for inclusion in XML content
fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}

/// DOCX file writer producing a document with one bordered table
pub struct DocxWriter;

impl DocxWriter {
    /// Write a table document to a file path.
    ///
    /// Appends the `.docx` extension when the path lacks it and returns
    /// the path actually written.
    pub fn write_table_file<P: AsRef<Path>>(
        path: P,
        header: &[String],
        rows: &[Vec<String>],
    ) -> DocxResult<PathBuf> {
        let path = path.as_ref();
        let path = if path.extension().is_some_and(|e| e == "docx") {
            path.to_path_buf()
        } else {
            let mut name = path.as_os_str().to_os_string();
            name.push(".docx");
            PathBuf::from(name)
        };

        let file = File::create(&path)?;
        Self::write_table(file, header, rows)?;
        Ok(path)
    }

    /// Write a table document to a writer
    pub fn write_table<W: Write + Seek>(
        writer: W,
        header: &[String],
        rows: &[Vec<String>],
    ) -> DocxResult<()> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != header.len() {
                return Err(DocxError::RaggedTable {
                    row: i + 1,
                    got: row.len(),
                    expected: header.len(),
                });
            }
        }

        let mut zip = zip::ZipWriter::new(writer);
        let options = zip::write::SimpleFileOptions::default();

        // Write [Content_Types].xml
        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(
            br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#,
        )?;

        // Write _rels/.rels
        zip.start_file("_rels/.rels", options)?;
        zip.write_all(
            br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#,
        )?;

        // Write word/document.xml
        zip.start_file("word/document.xml", options)?;
        zip.write_all(Self::document_xml(header, rows).as_bytes())?;

        zip.finish()?;
        Ok(())
    }

    fn document_xml(header: &[String], rows: &[Vec<String>]) -> String {
        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:body>
        <w:tbl>
            <w:tblPr>
                <w:tblBorders>
                    <w:top w:val="single" w:sz="4"/>
                    <w:left w:val="single" w:sz="4"/>
                    <w:bottom w:val="single" w:sz="4"/>
                    <w:right w:val="single" w:sz="4"/>
                    <w:insideH w:val="single" w:sz="4"/>
                    <w:insideV w:val="single" w:sz="4"/>
                </w:tblBorders>
            </w:tblPr>"#,
        );

        Self::push_row(&mut content, header, true);
        for row in rows {
            Self::push_row(&mut content, row, false);
        }

        content.push_str(
            r#"
        </w:tbl>
        <w:p/>
    </w:body>
</w:document>"#,
        );

        content
    }

    fn push_row(content: &mut String, cells: &[String], bold: bool) {
        content.push_str("\n            <w:tr>");
        for cell in cells {
            let props = if bold {
                "<w:rPr><w:b/></w:rPr>"
            } else {
                ""
            };
            content.push_str(&format!(
                r#"
                <w:tc><w:p><w:r>{}<w:t xml:space="preserve">{}</w:t></w:r></w:p></w:tc>"#,
                props,
                escape_xml(cell)
            ));
        }
        content.push_str("\n            </w:tr>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("plain"), "plain");
        assert_eq!(escape_xml("a<b>&\"c\"'d'"), "a&lt;b&gt;&amp;&quot;c&quot;&apos;d&apos;");
    }

    #[test]
    fn test_document_xml_contains_all_cells() {
        let header = vec!["Sample".to_string(), "Cell Viability %".to_string()];
        let rows = vec![
            vec!["untreated".to_string(), "100".to_string()],
            vec!["drug A".to_string(), "88.1".to_string()],
        ];

        let xml = DocxWriter::document_xml(&header, &rows);
        assert!(xml.contains("<w:tbl>"));
        assert!(xml.contains(">Sample</w:t>"));
        assert!(xml.contains(">drug A</w:t>"));
        assert!(xml.contains(">88.1</w:t>"));
        // Header cells are bold, data cells are not
        assert_eq!(xml.matches("<w:b/>").count(), 2);
    }
}
