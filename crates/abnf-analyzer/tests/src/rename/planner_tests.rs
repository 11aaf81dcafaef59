use tower_lsp::lsp_types::Url;

use crate::ide::{IdeLocation, IdePosition};
use crate::symbols::scan_references;

use super::*;

fn uri() -> Url {
    Url::parse("file:///grammar.abnf").unwrap()
}

fn range(
    line: u32,
    start: u32,
    end: u32,
) -> IdeRange {
    IdeRange::new(IdePosition::new(line, start), IdePosition::new(line, end))
}

fn reference(
    range: IdeRange,
    bracketed: bool,
) -> RuleReference {
    RuleReference {
        location: IdeLocation::new(uri(), range),
        bracketed,
    }
}

fn edit(
    range: IdeRange,
    new_text: &str,
) -> RenameEdit {
    RenameEdit {
        range,
        new_text: new_text.to_string(),
    }
}

const EXAMPLE: &str = "rule1 = \"a\"\nrule2 = rule1 <rule1>\n";

#[test]
fn rename_collapses_bracketed_double_match() {
    let references = scan_references(&uri(), EXAMPLE, "rule1");
    assert_eq!(references.len(), 4);

    let edits = plan_edits(EXAMPLE, &references, "ruleX");
    assert_eq!(
        edits,
        vec![edit(range(0, 0, 5), "ruleX"), edit(range(1, 8, 13), "ruleX"), edit(range(1, 14, 21), "<ruleX>")]
    );
    assert_eq!(apply_edits(EXAMPLE, &edits), "ruleX = \"a\"\nrule2 = ruleX <ruleX>\n");
}

#[test]
fn edits_apply_in_any_order() {
    let references = scan_references(&uri(), EXAMPLE, "rule1");
    let edits = plan_edits(EXAMPLE, &references, "ruleX");

    let mut reversed = edits.clone();
    reversed.reverse();
    let mut rotated = edits.clone();
    rotated.rotate_left(1);

    let expected = apply_edits(EXAMPLE, &edits);
    assert_eq!(apply_edits(EXAMPLE, &reversed), expected);
    assert_eq!(apply_edits(EXAMPLE, &rotated), expected);
}

#[test]
fn touching_ranges_conflict() {
    let text = "abcabc";
    let references = vec![reference(range(0, 3, 6), false), reference(range(0, 0, 3), false)];
    let edits = plan_edits(text, &references, "x");
    assert_eq!(edits, vec![edit(range(0, 0, 3), "x")]);
}

#[test]
fn bracket_form_is_read_from_text_not_tag() {
    let text = "abc <abc>";
    let references = vec![reference(range(0, 0, 3), true), reference(range(0, 4, 9), false)];
    let edits = plan_edits(text, &references, "xyz");
    assert_eq!(edits, vec![edit(range(0, 0, 3), "xyz"), edit(range(0, 4, 9), "<xyz>")]);
}

#[test]
fn input_order_does_not_matter() {
    let text = "a = b\nb = a\n";
    let references = vec![reference(range(1, 4, 5), false), reference(range(0, 0, 1), false)];
    let edits = plan_edits(text, &references, "c");
    assert_eq!(edits, vec![edit(range(0, 0, 1), "c"), edit(range(1, 4, 5), "c")]);
    assert_eq!(apply_edits(text, &edits), "c = b\nb = c\n");
}

#[test]
fn no_references_means_no_edits() {
    assert!(plan_edits("a = b", &[], "c").is_empty());
}

#[test]
fn multi_line_and_utf16_positions() {
    let text = "; é\nname = \"é\" name\n";
    let references = scan_references(&uri(), text, "name");
    let edits = plan_edits(text, &references, "title");
    assert_eq!(edits.len(), 2);
    assert_eq!(apply_edits(text, &edits), "; é\ntitle = \"é\" title\n");
}

#[test]
fn lsp_edit_conversion() {
    let lsp = edit(range(1, 2, 3), "x").to_lsp();
    assert_eq!(lsp.new_text, "x");
    assert_eq!(lsp.range.start.line, 1);
    assert_eq!(lsp.range.end.character, 3);
}
