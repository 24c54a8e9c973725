use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::warn;

/// Concatenates paragraph texts with newlines. Empty on failure.
pub(super) fn extract_docx(content: &[u8]) -> String {
    match read_paragraphs(content) {
        Ok(paragraphs) => paragraphs.join("\n"),
        Err(e) => {
            warn!("DOCX text extraction failed: {e}");
            String::new()
        }
    }
}

fn read_paragraphs(content: &[u8]) -> anyhow::Result<Vec<String>> {
    let mut archive = zip::ZipArchive::new(Cursor::new(content))?;
    let mut file = archive.by_name("word/document.xml")?;

    let mut xml = String::new();
    file.read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:tab" => current.push('\t'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                // Self-closing paragraphs are blank lines.
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Event::Text(e) => {
                if in_paragraph {
                    current.push_str(&e.unescape()?);
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"w:p" {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;

    use super::*;

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
            writer.start_file("word/document.xml", options).unwrap();
            writer.write_all(document_xml.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_paragraphs_are_joined_with_newlines() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>
<w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
<w:p><w:r><w:t>Rust </w:t></w:r><w:r><w:t>&amp; Go</w:t></w:r></w:p>
</w:body>
</w:document>"#;
        let text = extract_docx(&build_docx(xml));
        assert_eq!(text, "Jane Doe\nRust & Go");
    }

    #[test]
    fn test_missing_document_part_is_empty() {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("other.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"<x/>").unwrap();
            writer.finish().unwrap();
        }
        assert_eq!(extract_docx(&cursor.into_inner()), "");
    }

    #[test]
    fn test_not_a_zip_is_empty() {
        assert_eq!(extract_docx(b"plain bytes"), "");
    }
}
