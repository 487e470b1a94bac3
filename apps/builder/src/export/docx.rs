//! Office Open XML (`.docx`) writer.
//!
//! A DOCX file is a ZIP archive of XML parts. The body lives in
//! `word/document.xml`; paragraph styles (`Title`, `Heading1`, `ListBullet`)
//! are declared in `word/styles.xml` and the bullet glyph in
//! `word/numbering.xml`. Archive entries carry a fixed timestamp so the same
//! blocks always produce the same bytes.

use std::borrow::Cow;
use std::io::{Cursor, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::errors::BuilderError;
use crate::export::blocks::Block;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PKG_REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CT_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

const BULLET_NUM_ID: &str = "1";

type XmlWriter = Writer<Vec<u8>>;
type XmlResult = Result<(), quick_xml::Error>;

/// Packages `blocks` as a `.docx` archive. `title` goes into the core
/// properties.
pub fn write_docx(title: &str, blocks: &[Block]) -> Result<Vec<u8>, BuilderError> {
    let parts: [(&str, Vec<u8>); 7] = [
        ("[Content_Types].xml", content_types_xml()?),
        ("_rels/.rels", package_rels_xml()?),
        ("docProps/core.xml", core_props_xml(title)?),
        ("word/document.xml", document_xml(blocks)?),
        ("word/styles.xml", styles_xml()?),
        ("word/numbering.xml", numbering_xml()?),
        ("word/_rels/document.xml.rels", document_rels_xml()?),
    ];

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in parts {
        zip.start_file(name, options)?;
        zip.write_all(&bytes)?;
    }
    Ok(zip.finish()?.into_inner())
}

// ────────────────────────────────────────────────────────────────────────────
// Body
// ────────────────────────────────────────────────────────────────────────────

fn document_xml(blocks: &[Block]) -> Result<Vec<u8>, quick_xml::Error> {
    let mut w = new_writer()?;
    let mut root = BytesStart::new("w:document");
    root.push_attribute(("xmlns:w", W_NS));
    root.push_attribute(("xmlns:r", R_NS));
    w.write_event(Event::Start(root))?;
    w.write_event(Event::Start(BytesStart::new("w:body")))?;

    for block in blocks {
        write_block(&mut w, block)?;
    }

    // Letter page, 1" margins
    w.write_event(Event::Start(BytesStart::new("w:sectPr")))?;
    empty(&mut w, "w:pgSz", &[("w:w", "12240"), ("w:h", "15840")])?;
    empty(
        &mut w,
        "w:pgMar",
        &[
            ("w:top", "1440"),
            ("w:right", "1440"),
            ("w:bottom", "1440"),
            ("w:left", "1440"),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ],
    )?;
    end(&mut w, "w:sectPr")?;

    end(&mut w, "w:body")?;
    end(&mut w, "w:document")?;
    Ok(w.into_inner())
}

fn write_block(w: &mut XmlWriter, block: &Block) -> XmlResult {
    w.write_event(Event::Start(BytesStart::new("w:p")))?;
    match block {
        Block::Title(text) => {
            paragraph_style(w, "Title")?;
            run(w, text, false)?;
        }
        Block::Heading(text) => {
            paragraph_style(w, "Heading1")?;
            run(w, text, false)?;
        }
        Block::Plain(text) => run(w, text, false)?,
        Block::Entry { title, detail } => {
            run(w, title, true)?;
            if let Some(detail) = detail {
                w.write_event(Event::Start(BytesStart::new("w:r")))?;
                empty(w, "w:br", &[])?;
                end(w, "w:r")?;
                run(w, detail, false)?;
            }
        }
        Block::ListItem(text) => {
            w.write_event(Event::Start(BytesStart::new("w:pPr")))?;
            empty(w, "w:pStyle", &[("w:val", "ListBullet")])?;
            w.write_event(Event::Start(BytesStart::new("w:numPr")))?;
            empty(w, "w:ilvl", &[("w:val", "0")])?;
            empty(w, "w:numId", &[("w:val", BULLET_NUM_ID)])?;
            end(w, "w:numPr")?;
            end(w, "w:pPr")?;
            run(w, text, false)?;
        }
        Block::Spacer => run(w, " ", false)?,
    }
    end(w, "w:p")
}

fn paragraph_style(w: &mut XmlWriter, style: &str) -> XmlResult {
    w.write_event(Event::Start(BytesStart::new("w:pPr")))?;
    empty(w, "w:pStyle", &[("w:val", style)])?;
    end(w, "w:pPr")
}

fn run(w: &mut XmlWriter, text: &str, bold: bool) -> XmlResult {
    w.write_event(Event::Start(BytesStart::new("w:r")))?;
    if bold {
        w.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        empty(w, "w:b", &[])?;
        end(w, "w:rPr")?;
    }
    let mut t = BytesStart::new("w:t");
    t.push_attribute(("xml:space", "preserve"));
    w.write_event(Event::Start(t))?;
    w.write_event(Event::Text(BytesText::new(&xml_safe(text))))?;
    end(w, "w:t")?;
    end(w, "w:r")
}

// ────────────────────────────────────────────────────────────────────────────
// Package parts
// ────────────────────────────────────────────────────────────────────────────

fn content_types_xml() -> Result<Vec<u8>, quick_xml::Error> {
    let mut w = new_writer()?;
    let mut root = BytesStart::new("Types");
    root.push_attribute(("xmlns", CT_NS));
    w.write_event(Event::Start(root))?;
    empty(
        &mut w,
        "Default",
        &[
            ("Extension", "rels"),
            (
                "ContentType",
                "application/vnd.openxmlformats-package.relationships+xml",
            ),
        ],
    )?;
    empty(
        &mut w,
        "Default",
        &[("Extension", "xml"), ("ContentType", "application/xml")],
    )?;
    let overrides = [
        (
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            "/word/numbering.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
    ];
    for (part, content_type) in overrides {
        empty(
            &mut w,
            "Override",
            &[("PartName", part), ("ContentType", content_type)],
        )?;
    }
    end(&mut w, "Types")?;
    Ok(w.into_inner())
}

fn package_rels_xml() -> Result<Vec<u8>, quick_xml::Error> {
    relationships_xml(&[
        (
            "rId1",
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument",
            "word/document.xml",
        ),
        (
            "rId2",
            "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
            "docProps/core.xml",
        ),
    ])
}

fn document_rels_xml() -> Result<Vec<u8>, quick_xml::Error> {
    relationships_xml(&[
        (
            "rId1",
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles",
            "styles.xml",
        ),
        (
            "rId2",
            "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering",
            "numbering.xml",
        ),
    ])
}

fn relationships_xml(rels: &[(&str, &str, &str)]) -> Result<Vec<u8>, quick_xml::Error> {
    let mut w = new_writer()?;
    let mut root = BytesStart::new("Relationships");
    root.push_attribute(("xmlns", PKG_REL_NS));
    w.write_event(Event::Start(root))?;
    for &(id, kind, target) in rels {
        empty(
            &mut w,
            "Relationship",
            &[("Id", id), ("Type", kind), ("Target", target)],
        )?;
    }
    end(&mut w, "Relationships")?;
    Ok(w.into_inner())
}

fn core_props_xml(title: &str) -> Result<Vec<u8>, quick_xml::Error> {
    let mut w = new_writer()?;
    let mut root = BytesStart::new("cp:coreProperties");
    root.push_attribute((
        "xmlns:cp",
        "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
    ));
    root.push_attribute(("xmlns:dc", "http://purl.org/dc/elements/1.1/"));
    w.write_event(Event::Start(root))?;
    text_element(&mut w, "dc:title", title)?;
    text_element(&mut w, "dc:creator", title)?;
    end(&mut w, "cp:coreProperties")?;
    Ok(w.into_inner())
}

fn styles_xml() -> Result<Vec<u8>, quick_xml::Error> {
    let mut w = new_writer()?;
    let mut root = BytesStart::new("w:styles");
    root.push_attribute(("xmlns:w", W_NS));
    w.write_event(Event::Start(root))?;

    // (id, display name, size in half-points, bold, space after in twips)
    let styles = [
        ("Normal", "Normal", "22", false, "80"),
        ("Title", "Title", "56", true, "120"),
        ("Heading1", "heading 1", "32", true, "80"),
        ("ListBullet", "List Bullet", "22", false, "40"),
    ];
    for (id, name, size, bold, after) in styles {
        let mut style = BytesStart::new("w:style");
        style.push_attribute(("w:type", "paragraph"));
        style.push_attribute(("w:styleId", id));
        if id == "Normal" {
            style.push_attribute(("w:default", "1"));
        }
        w.write_event(Event::Start(style))?;
        empty(&mut w, "w:name", &[("w:val", name)])?;
        if id != "Normal" {
            empty(&mut w, "w:basedOn", &[("w:val", "Normal")])?;
            empty(&mut w, "w:qFormat", &[])?;
        }
        w.write_event(Event::Start(BytesStart::new("w:pPr")))?;
        empty(&mut w, "w:spacing", &[("w:after", after)])?;
        if id == "Heading1" {
            empty(&mut w, "w:outlineLvl", &[("w:val", "0")])?;
        }
        if id == "ListBullet" {
            empty(&mut w, "w:ind", &[("w:left", "720"), ("w:hanging", "360")])?;
        }
        end(&mut w, "w:pPr")?;
        w.write_event(Event::Start(BytesStart::new("w:rPr")))?;
        if bold {
            empty(&mut w, "w:b", &[])?;
        }
        empty(&mut w, "w:sz", &[("w:val", size)])?;
        end(&mut w, "w:rPr")?;
        end(&mut w, "w:style")?;
    }

    end(&mut w, "w:styles")?;
    Ok(w.into_inner())
}

fn numbering_xml() -> Result<Vec<u8>, quick_xml::Error> {
    let mut w = new_writer()?;
    let mut root = BytesStart::new("w:numbering");
    root.push_attribute(("xmlns:w", W_NS));
    w.write_event(Event::Start(root))?;

    let mut abstract_num = BytesStart::new("w:abstractNum");
    abstract_num.push_attribute(("w:abstractNumId", "0"));
    w.write_event(Event::Start(abstract_num))?;
    let mut lvl = BytesStart::new("w:lvl");
    lvl.push_attribute(("w:ilvl", "0"));
    w.write_event(Event::Start(lvl))?;
    empty(&mut w, "w:start", &[("w:val", "1")])?;
    empty(&mut w, "w:numFmt", &[("w:val", "bullet")])?;
    empty(&mut w, "w:lvlText", &[("w:val", "\u{2022}")])?;
    empty(&mut w, "w:lvlJc", &[("w:val", "left")])?;
    w.write_event(Event::Start(BytesStart::new("w:pPr")))?;
    empty(&mut w, "w:ind", &[("w:left", "720"), ("w:hanging", "360")])?;
    end(&mut w, "w:pPr")?;
    end(&mut w, "w:lvl")?;
    end(&mut w, "w:abstractNum")?;

    let mut num = BytesStart::new("w:num");
    num.push_attribute(("w:numId", BULLET_NUM_ID));
    w.write_event(Event::Start(num))?;
    empty(&mut w, "w:abstractNumId", &[("w:val", "0")])?;
    end(&mut w, "w:num")?;

    end(&mut w, "w:numbering")?;
    Ok(w.into_inner())
}

// ────────────────────────────────────────────────────────────────────────────
// XML helpers
// ────────────────────────────────────────────────────────────────────────────

/// Drops characters XML 1.0 cannot carry even when escaped (C0 controls other
/// than tab, newline and carriage return, plus U+FFFE and U+FFFF).
fn xml_safe(text: &str) -> Cow<'_, str> {
    let allowed =
        |c: char| matches!(c, '\t' | '\n' | '\r') || (c >= ' ' && c != '\u{FFFE}' && c != '\u{FFFF}');
    if text.chars().all(allowed) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|c| allowed(*c)).collect())
    }
}

fn new_writer() -> Result<XmlWriter, quick_xml::Error> {
    let mut w = Writer::new(Vec::new());
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    Ok(w)
}

fn empty(w: &mut XmlWriter, name: &str, attrs: &[(&str, &str)]) -> XmlResult {
    let mut el = BytesStart::new(name);
    for attr in attrs {
        el.push_attribute(*attr);
    }
    w.write_event(Event::Empty(el))
}

fn end(w: &mut XmlWriter, name: &str) -> XmlResult {
    w.write_event(Event::End(BytesEnd::new(name)))
}

fn text_element(w: &mut XmlWriter, name: &str, text: &str) -> XmlResult {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::new(&xml_safe(text))))?;
    end(w, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_archive_contains_required_parts() {
        let bytes = write_docx("Jane", &[Block::Title("Jane".into())]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "word/document.xml",
            "word/styles.xml",
            "word/numbering.xml",
            "word/_rels/document.xml.rels",
        ] {
            assert!(names.contains(&part), "missing {part}");
        }
    }

    #[test]
    fn test_blocks_map_to_styled_paragraphs() {
        let blocks = vec![
            Block::Title("Jane Doe".into()),
            Block::Heading("Skills".into()),
            Block::Entry {
                title: "Engineer at Acme (Jan 2022 - Present)".into(),
                detail: Some("Built APIs".into()),
            },
            Block::ListItem("Rust - Advanced".into()),
        ];
        let xml = read_part(&write_docx("Jane Doe", &blocks).unwrap(), "word/document.xml");

        assert!(xml.contains(
            r#"<w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t xml:space="preserve">Jane Doe</w:t></w:r></w:p>"#
        ));
        assert!(xml.contains(r#"<w:pStyle w:val="Heading1"/>"#));
        assert!(xml.contains(
            r#"<w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">Engineer at Acme (Jan 2022 - Present)</w:t></w:r><w:r><w:br/></w:r>"#
        ));
        assert!(xml.contains(r#"<w:numId w:val="1"/>"#));
        assert!(xml.contains("Rust - Advanced"));
    }

    #[test]
    fn test_text_is_escaped() {
        let xml = read_part(
            &write_docx("x", &[Block::Plain("R&D <lab>".into())]).unwrap(),
            "word/document.xml",
        );
        assert!(xml.contains("R&amp;D &lt;lab&gt;"));
    }

    #[test]
    fn test_entry_without_detail_has_no_break() {
        let xml = read_part(
            &write_docx(
                "x",
                &[Block::Entry {
                    title: "BSc at MIT ( - )".into(),
                    detail: None,
                }],
            )
            .unwrap(),
            "word/document.xml",
        );
        assert!(!xml.contains("<w:br/>"));
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let bytes = write_docx(
            "Jane\u{1}Doe",
            &[
                Block::Title("Jane\u{1}Doe".into()),
                Block::Plain("page\u{c}break\ttab".into()),
            ],
        )
        .unwrap();
        let body = read_part(&bytes, "word/document.xml");
        assert!(!body.contains('\u{1}'));
        assert!(!body.contains('\u{c}'));
        assert!(body.contains("JaneDoe"));
        assert!(body.contains("pagebreak\ttab"));
        assert!(!read_part(&bytes, "docProps/core.xml").contains('\u{1}'));
    }

    #[test]
    fn test_xml_safe_borrows_clean_text() {
        assert!(matches!(xml_safe("Jane Doe"), Cow::Borrowed(_)));
        assert_eq!(xml_safe("a\u{0}b\u{FFFF}c"), "abc");
    }

    #[test]
    fn test_core_properties_carry_title() {
        let xml = read_part(&write_docx("Jane Doe", &[]).unwrap(), "docProps/core.xml");
        assert!(xml.contains("<dc:title>Jane Doe</dc:title>"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let blocks = vec![Block::Title("Jane".into()), Block::Spacer];
        assert_eq!(
            write_docx("Jane", &blocks).unwrap(),
            write_docx("Jane", &blocks).unwrap()
        );
    }
}
