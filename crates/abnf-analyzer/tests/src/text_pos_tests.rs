use super::*;

#[test]
fn line_count_includes_trailing_empty_line() {
    assert_eq!(LineIndex::new("").line_count(), 1);
    assert_eq!(LineIndex::new("a\nb").line_count(), 2);
    assert_eq!(LineIndex::new("a\nb\n").line_count(), 3);
}

#[test]
fn position_and_offset_agree_on_ascii() {
    let text = "ab\ncd";
    let index = LineIndex::new(text);
    assert_eq!(index.position_of(text, 3), IdePosition::new(1, 0));
    assert_eq!(index.position_of(text, 5), IdePosition::new(1, 2));
    assert_eq!(index.offset_of(text, IdePosition::new(1, 1)), Some(4));
}

#[test]
fn characters_are_utf16_code_units() {
    // é is one UTF-16 unit (2 bytes), 𝄞 is a surrogate pair (4 bytes).
    let text = "é𝄞x";
    let index = LineIndex::new(text);
    assert_eq!(index.position_of(text, 6), IdePosition::new(0, 3));
    assert_eq!(index.offset_of(text, IdePosition::new(0, 3)), Some(6));
    assert_eq!(utf16_len(text), 4);
}

#[test]
fn offset_inside_a_character_floors_to_its_start() {
    let text = "é";
    let index = LineIndex::new(text);
    assert_eq!(index.position_of(text, 1), IdePosition::new(0, 0));
}

#[test]
fn character_past_line_end_clamps_before_newline() {
    let text = "ab\ncd";
    let index = LineIndex::new(text);
    assert_eq!(index.offset_of(text, IdePosition::new(0, 10)), Some(2));
    assert_eq!(index.offset_of(text, IdePosition::new(5, 0)), None);
}

#[test]
fn offset_past_end_clamps_to_end() {
    let text = "ab\n";
    let index = LineIndex::new(text);
    assert_eq!(index.position_of(text, 99), IdePosition::new(1, 0));
}

#[test]
fn slice_reads_back_a_range() {
    let text = "rule = <x>\nnext = y";
    let index = LineIndex::new(text);
    let range = index.range_of(text, 7, 10);
    assert_eq!(range, IdeRange::new(IdePosition::new(0, 7), IdePosition::new(0, 10)));
    assert_eq!(index.slice(text, range), Some("<x>"));
}
