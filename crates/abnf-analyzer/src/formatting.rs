//! Canonical spacing for rule definition lines.
//!
//! A line whose trimmed text reads `name = definition` or `name =/ definition`
//! is rewritten to single-spaced form with the indentation removed. Blank
//! lines, comment lines and anything else are kept byte-for-byte.

use once_cell::sync::Lazy;
use regex::Regex;

static RULE_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z][A-Za-z0-9-]*)\s*(=/|=)\s*(.*)$").expect("rule line pattern is valid"));

/// Format `text`, returning `None` when nothing changes.
pub fn format_text(text: &str) -> Option<String> {
    let formatted: Vec<String> = text.split('\n').map(format_line).collect();
    let formatted = formatted.join("\n");
    (formatted != text).then_some(formatted)
}

fn format_line(line: &str) -> String {
    let (body, line_end) = match line.strip_suffix('\r') {
        Some(body) => (body, "\r"),
        None => (line, ""),
    };

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.starts_with(';') {
        return line.to_string();
    }

    let Some(caps) = RULE_LINE_RE.captures(trimmed) else {
        return line.to_string();
    };

    let definition = caps[3].trim();
    let mut out = format!("{} {}", &caps[1], &caps[2]);
    if !definition.is_empty() {
        out.push(' ');
        out.push_str(definition);
    }
    out.push_str(line_end);
    out
}

#[cfg(test)]
#[path = "../tests/src/formatting_tests.rs"]
mod tests;
