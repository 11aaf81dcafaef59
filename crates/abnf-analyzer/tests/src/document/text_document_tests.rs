use super::*;

fn test_doc(text: &str) -> Document {
    Document::new(Url::parse("file:///test.abnf").unwrap(), text.to_string(), 1)
}

fn word(
    doc: &Document,
    line: u32,
    character: u32,
) -> Option<String> {
    doc.word_at(IdePosition::new(line, character)).map(|(word, _)| word)
}

#[test]
fn line_offsets_empty() {
    let doc = test_doc("");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.line_text(0), Some(""));
}

#[test]
fn line_text_strips_terminators() {
    let doc = test_doc("a = b\r\nc = d\n");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_text(0), Some("a = b"));
    assert_eq!(doc.line_text(1), Some("c = d"));
    assert_eq!(doc.line_text(2), Some(""));
    assert_eq!(doc.line_text(3), None);
}

#[test]
fn offset_roundtrip() {
    let doc = test_doc("rule = a\nnext = b\n");
    let pos = IdePosition::new(1, 0);
    let off = doc.offset_of(pos).unwrap();
    assert_eq!(off, 9);
    assert_eq!(doc.position_of(off), pos);
}

#[test]
fn word_at_covers_rule_name_characters() {
    let doc = test_doc("c-nl = comment / CRLF");
    assert_eq!(word(&doc, 0, 0), Some("c-nl".to_string()));
    assert_eq!(word(&doc, 0, 2), Some("c-nl".to_string()));
    assert_eq!(word(&doc, 0, 18), Some("CRLF".to_string()));
}

#[test]
fn word_at_accepts_cursor_just_after_word() {
    let doc = test_doc("rule1 = x");
    assert_eq!(word(&doc, 0, 5), Some("rule1".to_string()));
    assert_eq!(word(&doc, 0, 9), Some("x".to_string()));
}

#[test]
fn word_at_rejects_operators_and_blank_space() {
    let doc = test_doc("rule1 = x\n\n");
    assert_eq!(word(&doc, 0, 6), None);
    assert_eq!(word(&doc, 0, 7), None);
    assert_eq!(word(&doc, 1, 0), None);
    assert_eq!(word(&doc, 7, 0), None);
}

#[test]
fn word_at_excludes_angle_brackets() {
    let doc = test_doc("a = <rule1>");
    let (word, range) = doc.word_at(IdePosition::new(0, 6)).unwrap();
    assert_eq!(word, "rule1");
    assert_eq!(range, IdeRange::new(IdePosition::new(0, 5), IdePosition::new(0, 10)));
}

#[test]
fn word_at_uses_utf16_columns() {
    let doc = test_doc("; 𝄞 note\nname = x");
    let (word, range) = doc.word_at(IdePosition::new(0, 5)).unwrap();
    assert_eq!(word, "note");
    assert_eq!(range, IdeRange::new(IdePosition::new(0, 5), IdePosition::new(0, 9)));
}

#[test]
fn full_range_spans_the_text() {
    let doc = test_doc("a = b\nc = d");
    assert_eq!(doc.full_range(), IdeRange::new(IdePosition::new(0, 0), IdePosition::new(1, 5)));
}

#[test]
fn set_content_updates_lines() {
    let mut doc = test_doc("one\ntwo");
    assert_eq!(doc.line_count(), 2);
    doc.set_content("a\nb\nc\n".to_string(), 2);
    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.version, 2);
}

#[test]
fn incremental_change() {
    let mut doc = test_doc("rule = old");
    doc.apply_changes(
        vec![TextDocumentContentChangeEvent {
            range: Some(tower_lsp::lsp_types::Range::new(
                tower_lsp::lsp_types::Position::new(0, 7),
                tower_lsp::lsp_types::Position::new(0, 10),
            )),
            range_length: None,
            text: "new\nnext = x".to_string(),
        }],
        2,
    );
    assert_eq!(doc.text, "rule = new\nnext = x");
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.version, 2);
}

#[test]
fn full_change_replaces_text() {
    let mut doc = test_doc("a = b");
    doc.apply_changes(
        vec![TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "x = y\n".to_string(),
        }],
        5,
    );
    assert_eq!(doc.text, "x = y\n");
    assert_eq!(doc.version, 5);
}
