mod common;

use std::io::Write;

use common::{tsv_row, TSV_HEADER};
use glyphshot_core::ocr::tsv::parse_tsv;
use glyphshot_core::word::LineId;

fn document(rows: &[String]) -> String {
    let mut doc = String::from(TSV_HEADER);
    for row in rows {
        doc.push('\n');
        doc.push_str(row);
    }
    doc.push('\n');
    doc
}

#[test]
fn test_parses_word_rows() {
    let doc = document(&[
        "1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t".to_string(),
        "4\t1\t1\t1\t1\t0\t12\t8\t300\t22\t-1\t".to_string(),
        tsv_row(1, 1, 1, 12, 8, 60, 22, "Hello"),
        tsv_row(1, 1, 2, 80, 8, 70, 22, "World"),
    ]);

    let words = parse_tsv(&doc);
    assert_eq!(words.len(), 2);

    let hello = &words[0];
    assert_eq!(hello.text, "Hello");
    assert_eq!((hello.x, hello.y, hello.w, hello.h), (12, 8, 60, 22));
    assert!((hello.confidence - 91.5).abs() < 1e-4);
    assert_eq!(
        hello.line_id,
        LineId {
            page: 1,
            block: 1,
            paragraph: 1,
            line: 1
        }
    );
    assert!(!hello.selected);
}

#[test]
fn test_skips_malformed_rows() {
    let doc = document(&[
        "5\t1\t1\t1\t1\t1\t12\t8\t60".to_string(),
        "5\t1\t1\t1\t1\t1\tabc\t8\t60\t22\t90\tBroken".to_string(),
        "5\t1\t1\t1\t1\t1\t12\t8\t0\t22\t90\tZero".to_string(),
        "5\t1\t1\t1\t1\t1\t12\t8\t60\t22\tnan?\tConf".to_string(),
        tsv_row(2, 3, 1, 1, 2, 3, 4, "Kept"),
    ]);

    let words = parse_tsv(&doc);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].text, "Kept");
    assert_eq!(words[0].line_id.block, 2);
    assert_eq!(words[0].line_id.line, 3);
}

#[test]
fn test_text_is_trimmed() {
    let doc = document(&[tsv_row(1, 1, 1, 0, 0, 10, 10, "  padded  ")]);
    assert_eq!(parse_tsv(&doc)[0].text, "padded");
}

#[test]
fn test_header_only() {
    assert!(parse_tsv(TSV_HEADER).is_empty());
    assert!(parse_tsv("").is_empty());
}

#[test]
fn test_reads_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "{}", document(&[tsv_row(1, 1, 1, 5, 5, 10, 10, "file")])).unwrap();
    f.flush().unwrap();

    let contents = std::fs::read_to_string(f.path()).unwrap();
    assert_eq!(parse_tsv(&contents)[0].text, "file");
}
