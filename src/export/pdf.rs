//! Paginated PDF rendering of a report
//!
//! A4 pages, Helvetica 12pt, 10mm left/top/right margins, a 15mm bottom margin
//! and one 10mm row per report line. Standard Type1 fonts only cover
//! WinAnsi, so a report containing any other character is refused rather
//! than written with missing glyphs.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use std::fmt;
use tracing::warn;

use crate::core::errors::{GlossError, Result};

const MM: f32 = 72.0 / 25.4;
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 10.0 * MM;
const BOTTOM_MARGIN: f32 = 15.0 * MM;
const LINE_HEIGHT: f32 = 10.0 * MM;
const FONT_SIZE: f32 = 12.0;

/// Rows that fit between the top margin and the page-break margin
pub fn rows_per_page() -> usize {
    ((PAGE_HEIGHT - MARGIN - BOTTOM_MARGIN) / LINE_HEIGHT).floor() as usize
}

/// Render `content` one line per row; returns the PDF bytes
pub fn render_pdf(content: &str) -> Result<Vec<u8>> {
    let lines = content
        .lines()
        .map(encode_win_ansi)
        .collect::<std::result::Result<Vec<_>, char>>()
        .map_err(|c| {
            warn!("PDF export refused: U+{:04X} has no WinAnsi glyph", u32::from(c));
            pdf_error(format!(
                "character '{}' (U+{:04X}) cannot be drawn with the built-in PDF font; export to .txt instead",
                c,
                u32::from(c)
            ))
        })?;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    let pages: Vec<&[Vec<u8>]> = if lines.is_empty() {
        vec![&lines[..]]
    } else {
        lines.chunks(rows_per_page()).collect()
    };

    for page_lines in pages {
        let page_id = add_page(&mut doc, pages_id, page_lines)?;
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(pdf_error)?;
    Ok(bytes)
}

fn add_page(doc: &mut Document, pages_id: ObjectId, lines: &[Vec<u8>]) -> Result<ObjectId> {
    let first_baseline = PAGE_HEIGHT - MARGIN - 0.5 * LINE_HEIGHT - 0.3 * FONT_SIZE;

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FONT_SIZE.into()]),
        Operation::new("TL", vec![LINE_HEIGHT.into()]),
        Operation::new("Td", vec![MARGIN.into(), first_baseline.into()]),
    ];
    for line in lines {
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(line.clone())],
        ));
        operations.push(Operation::new("T*", vec![]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().map_err(pdf_error)?,
    ));

    Ok(doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    }))
}

/// WinAnsi bytes for `line`, control characters dropped; `Err` holds the
/// first character the encoding has no slot for
fn encode_win_ansi(line: &str) -> std::result::Result<Vec<u8>, char> {
    line.chars()
        .filter(|c| !c.is_control())
        .map(|c| win_ansi_byte(c).ok_or(c))
        .collect()
}

fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => return u8::try_from(u32::from(c)).ok(),
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}

fn pdf_error(err: impl fmt::Display) -> GlossError {
    GlossError::ExportIoFailure {
        path: "<pdf>".to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_page() {
        assert_eq!(rows_per_page(), 27);
    }

    #[test]
    fn test_single_page() {
        let bytes = render_pdf("line one\nline two").unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_paginates_long_reports() {
        let content: Vec<String> = (0..60).map(|i| format!("word{} : mot{}", i, i)).collect();
        let bytes = render_pdf(&content.join("\n")).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn test_empty_content_still_has_a_page() {
        let doc = Document::load_mem(&render_pdf("").unwrap()).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("café"), Ok(b"caf\xe9".to_vec()));
        assert_eq!(encode_win_ansi("a\tb"), Ok(b"ab".to_vec()));
        assert_eq!(encode_win_ansi("猫 : cat"), Err('猫'));
    }

    #[test]
    fn test_typographic_punctuation_uses_win_ansi_slots() {
        assert_eq!(
            encode_win_ansi("\u{201c}ok\u{201d} \u{2018}x\u{2019} a\u{2014}b\u{2013}c\u{2026} 5\u{20ac}"),
            Ok(b"\x93ok\x94 \x91x\x92 a\x97b\x96c\x85 5\x80".to_vec())
        );
    }

    #[test]
    fn test_non_latin_content_is_refused() {
        let err = render_pdf("Original (English): water\nTranslated (Tamil): தண்ணீர்").unwrap_err();
        match err {
            GlossError::ExportIoFailure { message, .. } => {
                assert!(message.contains("U+0BA4"), "{}", message);
                assert!(message.contains(".txt"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
