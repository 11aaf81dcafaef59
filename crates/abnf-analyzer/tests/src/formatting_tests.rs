use expect_test::expect;

use super::*;

#[test]
fn rule_lines_get_canonical_spacing() {
    let formatted = format_text("rulelist   =1*( rule / (*c-wsp c-nl) )\n   elements=alternation *WSP\nrule =/   other\n")
        .unwrap();
    expect![[r#"
        rulelist = 1*( rule / (*c-wsp c-nl) )
        elements = alternation *WSP
        rule =/ other
    "#]]
    .assert_eq(&formatted);
}

#[test]
fn empty_definition_keeps_only_the_operator() {
    assert_eq!(format_text("empty   =   \n").as_deref(), Some("empty =\n"));
}

#[test]
fn other_lines_are_untouched() {
    let text = "  ; comment   =  kept\n\n   \n    continuation / line\n1bad=x\n";
    assert_eq!(format_text(text), None);
}

#[test]
fn canonical_text_yields_no_change() {
    assert_eq!(format_text("a = b\nc =/ d\n"), None);
    assert_eq!(format_text(""), None);
}

#[test]
fn crlf_line_endings_survive() {
    assert_eq!(format_text("a=b\r\nc = d\r\n").as_deref(), Some("a = b\r\nc = d\r\n"));
}
