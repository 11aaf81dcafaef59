use crate::i18n::Locale;
use crate::ide::{IdePosition, IdeRange};
use crate::rename::apply_edits;

use super::*;

fn engine() -> ResolutionEngine {
    ResolutionEngine::new(Locale::En.messages(), CacheConfig::default())
}

fn document(
    text: &str,
    version: i32,
) -> Document {
    Document::new(Url::parse("file:///grammar.abnf").unwrap(), text.to_string(), version)
}

const GRAMMAR: &str = "\
; arithmetic
expr = term *(\"+\" term)
term = factor *(\"*\" factor)
factor = DIGIT / \"(\" expr \")\"
";

#[test]
fn definition_lookup() {
    let mut engine = engine();
    let doc = document(GRAMMAR, 1);

    let location = engine.definition_of(&doc, "term").unwrap();
    assert_eq!(location.range, IdeRange::new(IdePosition::new(2, 0), IdePosition::new(2, 4)));
    assert!(engine.definition_of(&doc, "missing").is_none());
    assert!(engine.definition_of(&doc, "DIGIT").is_none());
}

#[test]
fn queries_reuse_the_cached_scan() {
    let mut engine = engine();
    let doc = document(GRAMMAR, 1);

    engine.definition_of(&doc, "expr");
    engine.definition_of(&doc, "term");
    engine.symbols_of(&doc);
    let stats = engine.cache_stats();
    assert_eq!(stats.rules_cache.size, 1);
    assert_eq!(stats.entries[0].version, 1);
}

#[test]
fn new_version_is_rescanned() {
    let mut engine = engine();
    assert!(engine.definition_of(&document("a = b\n", 1), "a").is_some());

    let edited = document("c = b\n", 2);
    assert!(engine.definition_of(&edited, "a").is_none());
    assert!(engine.definition_of(&edited, "c").is_some());
    assert_eq!(engine.cache_stats().entries[0].version, 2);
}

#[test]
fn references_include_every_occurrence() {
    let mut engine = engine();
    let doc = document(GRAMMAR, 1);

    let references = engine.references_of(&doc, "factor");
    let lines: Vec<u32> = references.iter().map(|reference| reference.location.range.start.line).collect();
    assert_eq!(lines, vec![2, 2, 3]);
    assert!(engine.references_of(&doc, "nothing").is_empty());

    assert_eq!(engine.references_of(&doc, "factor"), references);
    assert_eq!(engine.cache_stats().references_cache.size, 1);
}

#[test]
fn symbols_are_listed_in_document_order() {
    let mut engine = engine();
    let symbols = engine.symbols_of(&document(GRAMMAR, 1));

    let names: Vec<&str> = symbols.iter().map(|symbol| symbol.name.as_str()).collect();
    assert_eq!(names, vec!["expr", "term", "factor"]);
    assert!(symbols.iter().all(|symbol| symbol.kind == RuleKind::Rule));
    assert_eq!(RuleKind::Rule.as_str(), "rule");
}

#[test]
fn core_rule_hover_skips_the_scan() {
    let mut engine = engine();
    let doc = document(GRAMMAR, 1);

    let info = engine.hover_info(&doc, "SP").unwrap();
    assert_eq!(info.body, "Space character");
    assert_eq!(info.definition.as_deref(), Some("%x20"));
    assert_eq!(info.source.as_deref(), Some("RFC 5234"));
    assert_eq!(engine.cache_stats().rules_cache.size, 0);

    let info = engine.hover_info(&doc, "term").unwrap();
    assert_eq!(info.title, "ABNF Rule");
    assert!(info.definition.is_none());
    assert_eq!(engine.cache_stats().rules_cache.size, 1);

    assert!(engine.hover_info(&doc, "unknown").is_none());
}

#[test]
fn rename_validation() {
    let mut engine = engine();
    let doc = document(GRAMMAR, 1);

    assert_eq!(
        engine.validate_rename(&doc, "term", "1bad"),
        Err(RenameError::InvalidName {
            name: "1bad".to_string()
        })
    );
    assert_eq!(
        engine.validate_rename(&doc, "missing", "other"),
        Err(RenameError::UndefinedRule {
            name: "missing".to_string()
        })
    );
    assert_eq!(engine.validate_rename(&doc, "term", "summand"), Ok(()));
}

#[test]
fn invalid_name_is_reported_first_without_touching_the_cache() {
    let mut engine = engine();
    let doc = document(GRAMMAR, 1);

    let error = engine.plan_rename(&doc, "missing", "bad name").unwrap_err();
    assert!(matches!(error, RenameError::InvalidName { .. }));
    assert_eq!(engine.cache_stats().rules_cache.size, 0);
}

#[test]
fn undefined_rule_produces_no_edits() {
    let mut engine = engine();
    let doc = document(GRAMMAR, 1);

    let error = engine.plan_rename(&doc, "missing", "other").unwrap_err();
    assert_eq!(error.name(), "missing");
    assert_eq!(error.to_string(), "Rule \"missing\" is not defined");
    let stats = engine.cache_stats();
    assert_eq!(stats.rules_cache.size, 0);
    assert_eq!(stats.references_cache.size, 0);
}

#[test]
fn refused_rename_does_not_evict_from_a_full_cache() {
    let mut engine = ResolutionEngine::new(
        Locale::En.messages(),
        CacheConfig {
            capacity: 1,
            ..CacheConfig::default()
        },
    );
    let kept = document(GRAMMAR, 1);
    engine.symbols_of(&kept);

    let other = Document::new(Url::parse("file:///other.abnf").unwrap(), "x = y\n".to_string(), 1);
    assert!(engine.plan_rename(&other, "y", "z").is_err());

    let stats = engine.cache_stats();
    assert_eq!(stats.rules_cache.size, 1);
    assert_eq!(stats.entries[0].uri, kept.uri.to_string());
}

#[test]
fn accepted_rename_stores_the_scan() {
    let mut engine = engine();
    let doc = document(GRAMMAR, 1);

    assert!(engine.validate_rename(&doc, "term", "item").is_ok());
    assert_eq!(engine.cache_stats().rules_cache.size, 0);

    engine.plan_rename(&doc, "term", "item").unwrap();
    assert_eq!(engine.cache_stats().rules_cache.size, 1);
}

#[test]
fn plan_rename_rewrites_all_sites() {
    let mut engine = engine();
    let doc = document("rule1 = \"a\"\nrule2 = rule1 <rule1>\n", 4);

    let edits = engine.plan_rename(&doc, "rule1", "ruleX").unwrap();
    assert_eq!(edits.len(), 3);
    assert_eq!(apply_edits(&doc.text, &edits), "ruleX = \"a\"\nrule2 = ruleX <ruleX>\n");
}

#[test]
fn localized_rename_errors() {
    let mut engine = ResolutionEngine::new(Locale::ZhCn.messages(), CacheConfig::default());
    let doc = document(GRAMMAR, 1);

    let error = engine.validate_rename(&doc, "missing", "other").unwrap_err();
    assert_eq!(error.message(engine.messages()), "规则 \"missing\" 未定义");
}

#[test]
fn clearing_drops_cached_scans() {
    let mut engine = engine();
    let doc = document(GRAMMAR, 1);
    let other = Document::new(Url::parse("file:///other.abnf").unwrap(), "x = y\n".to_string(), 1);

    engine.references_of(&doc, "term");
    engine.symbols_of(&doc);
    engine.symbols_of(&other);

    engine.clear_document(&doc.uri);
    let stats = engine.cache_stats();
    assert_eq!(stats.rules_cache.size, 1);
    assert_eq!(stats.references_cache.size, 0);

    engine.clear_all();
    assert_eq!(engine.cache_stats().rules_cache.size, 0);
}
