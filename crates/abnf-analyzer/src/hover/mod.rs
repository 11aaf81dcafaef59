mod core_rules;
mod markdown;

pub use core_rules::{CORE_RULE_NAMES, core_rule_hover, is_core_rule, user_rule_hover};
pub use markdown::{render_markdown, to_lsp_hover};

/// Hover content for one rule name, independent of how the host renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverInfo {
    pub name: String,
    pub title: String,
    /// Core-rule description, or the usage hint for a user-defined rule.
    pub body: String,
    /// Formal definition. Only core rules carry one.
    pub definition: Option<String>,
    pub source: Option<String>,
}
