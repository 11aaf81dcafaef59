//! Line-oriented extraction of rule definitions and textual references.
//!
//! Nothing here parses ABNF. Definitions are recognised by a line prefix
//! (`name =` or `name =/`) and references by plain text search, so scanning
//! never fails: lines that do not match are skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use tower_lsp::lsp_types::Url;
use tracing::debug;

use crate::ide::{IdeLocation, IdePosition, IdeRange};
use crate::text_pos::{LineIndex, utf16_len};

use super::types::{ReferenceSet, RuleReference, SymbolTable};

static RULE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").expect("rule name pattern is valid"));

static DEFINITION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9-]*)\s*=/?").expect("definition pattern is valid"));

/// `true` iff `name` matches `^[A-Za-z][A-Za-z0-9-]*$`.
pub fn is_valid_rule_name(name: &str) -> bool {
    RULE_NAME_RE.is_match(name)
}

/// Characters that may appear inside a rule name.
pub fn is_rule_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

/// Collect every `name =` / `name =/` definition in `text`.
pub fn scan_definitions(
    uri: &Url,
    text: &str,
) -> SymbolTable {
    let mut rules = SymbolTable::new();

    for (line_idx, line) in text.split('\n').enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        let Some(name) = DEFINITION_RE.captures(trimmed).and_then(|caps| caps.get(1)) else {
            continue;
        };
        let name = name.as_str();

        let indent = &line[..line.len() - line.trim_start().len()];
        let start = IdePosition::new(line_idx as u32, utf16_len(indent));
        let end = IdePosition::new(start.line, start.character + utf16_len(name));
        rules.insert(name.to_string(), IdeLocation::new(uri.clone(), IdeRange::new(start, end)));
    }

    debug!("[scanner] {} rule definitions in {}", rules.len(), uri.path());
    rules
}

/// Collect every occurrence of `name`: whole-word matches first, then `<name>`
/// matches. A bracketed occurrence is reported by both passes; callers that
/// edit text must resolve the overlap.
pub fn scan_references(
    uri: &Url,
    text: &str,
    name: &str,
) -> ReferenceSet {
    if name.is_empty() {
        return Vec::new();
    }

    let index = LineIndex::new(text);
    let escaped = regex::escape(name);
    let mut references = Vec::new();

    // `(?-u:\b)` is an ASCII word boundary: `[A-Za-z0-9_]` against anything else.
    let passes = [(format!(r"(?-u:\b){escaped}(?-u:\b)"), false), (format!("<{escaped}>"), true)];
    for (pattern, bracketed) in passes {
        let Ok(re) = Regex::new(&pattern) else {
            debug!("[scanner] skipping unusable pattern for '{name}'");
            continue;
        };
        for found in re.find_iter(text) {
            references.push(RuleReference {
                location: IdeLocation::new(uri.clone(), index.range_of(text, found.start(), found.end())),
                bracketed,
            });
        }
    }

    debug!("[scanner] {} references to '{name}' in {}", references.len(), uri.path());
    references
}

#[cfg(test)]
#[path = "../../tests/src/symbols/scanner_tests.rs"]
mod tests;
