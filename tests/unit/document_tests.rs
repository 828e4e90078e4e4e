// 行缓冲区单元测试

use aoi::core::{Document, Position};
use proptest::prelude::*;

fn texts(doc: &Document) -> Vec<String> {
    doc.lines().iter().map(|line| line.to_string_lossy()).collect()
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,24}", 1..12)
}

#[test]
fn test_load_missing_trailing_newline() {
    let doc = Document::load(b"int a;\nint b;");
    assert_eq!(texts(&doc), vec!["int a;", "int b;"]);
}

#[test]
fn test_load_empty_source() {
    let doc = Document::load(b"");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.serialize(), b"\n");
}

#[test]
fn test_cursor_stays_valid_while_deleting() {
    // 光标在长度为 5 的行尾，连续退格四次
    let mut doc = Document::from_lines(["hello"]);
    let mut cursor = Position::new(0, 5);

    for _ in 0..4 {
        cursor = doc.delete_char_before(cursor).unwrap();
        assert!(cursor.col <= doc.line_len(0));
        assert!(cursor.is_valid_in(&doc));
    }

    assert_eq!(texts(&doc), vec!["h"]);
    assert_eq!(cursor, Position::new(0, 1));
}

#[test]
fn test_edit_sequence() {
    let mut doc = Document::new();
    let mut at = Position::default();

    for &b in b"int main() {}" {
        at = doc.insert_char(at, b).unwrap();
    }
    at = Position::new(0, 12);
    at = doc.split_line(at).unwrap();
    for &b in b"  return 0;" {
        at = doc.insert_char(at, b).unwrap();
    }
    doc.split_line(at).unwrap();

    assert_eq!(texts(&doc), vec!["int main() {", "  return 0;", "}"]);
    assert_eq!(doc.serialize(), b"int main() {\n  return 0;\n}\n");
}

proptest! {
    #[test]
    fn prop_serialize_load_round_trip(lines in lines_strategy()) {
        let doc = Document::from_lines(lines.iter().map(String::as_str));
        let loaded = Document::load(&doc.serialize());
        prop_assert_eq!(loaded.lines(), doc.lines());
    }

    #[test]
    fn prop_round_trip_with_arbitrary_bytes(
        lines in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..24), 1..8),
        row_seed: usize,
        col_seed: usize,
        byte: u8,
    ) {
        // 任意字节（包括 `\n`）经过构建或插入后仍能原样加载回来
        let mut doc = Document::from_lines(lines);
        let row = row_seed % doc.line_count();
        let col = col_seed % (doc.line_len(row) + 1);
        doc.insert_char(Position::new(row, col), byte).unwrap();

        let loaded = Document::load(&doc.serialize());
        prop_assert_eq!(loaded.lines(), doc.lines());
    }

    #[test]
    fn prop_split_then_backspace_restores(lines in lines_strategy(), row_seed: usize, col_seed: usize) {
        let original = Document::from_lines(lines.iter().map(String::as_str));
        let row = row_seed % original.line_count();
        let col = col_seed % (original.line_len(row) + 1);

        let mut doc = original.clone();
        let after_split = doc.split_line(Position::new(row, col)).unwrap();
        prop_assert_eq!(after_split, Position::new(row + 1, 0));
        prop_assert_eq!(doc.line_count(), original.line_count() + 1);

        let after_merge = doc.delete_char_before(after_split).unwrap();
        prop_assert_eq!(after_merge, Position::new(row, col));
        prop_assert_eq!(doc.lines(), original.lines());
    }

    #[test]
    fn prop_insert_then_backspace_restores(lines in lines_strategy(), row_seed: usize, col_seed: usize, byte in 0x20u8..0x7f) {
        let original = Document::from_lines(lines.iter().map(String::as_str));
        let row = row_seed % original.line_count();
        let col = col_seed % (original.line_len(row) + 1);

        let mut doc = original.clone();
        let at = doc.insert_char(Position::new(row, col), byte).unwrap();
        doc.delete_char_before(at).unwrap();

        prop_assert_eq!(doc.lines(), original.lines());
        prop_assert!(doc.is_dirty());
    }
}
