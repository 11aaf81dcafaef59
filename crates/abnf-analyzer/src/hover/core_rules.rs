use crate::i18n::Messages;

use super::HoverInfo;

/// RFC 5234 appendix B.1 core rules, in the order the RFC lists them.
pub const CORE_RULE_NAMES: [&str; 16] = [
    "ALPHA", "BIT", "CHAR", "CR", "CRLF", "CTL", "DIGIT", "DQUOTE", "HEXDIG", "HTAB", "LF", "LWSP", "OCTET", "SP",
    "VCHAR", "WSP",
];

/// Case-sensitive: `sp` is not a core rule.
pub fn is_core_rule(name: &str) -> bool {
    CORE_RULE_NAMES.contains(&name)
}

pub fn core_rule_hover(
    name: &str,
    messages: &Messages,
) -> Option<HoverInfo> {
    if !is_core_rule(name) {
        return None;
    }
    let rule = messages.core_rule(name)?;
    Some(HoverInfo {
        name: name.to_string(),
        title: messages.hover.core_rule_title.to_string(),
        body: rule.description.to_string(),
        definition: Some(rule.definition.to_string()),
        source: Some(messages.hover.source.to_string()),
    })
}

pub fn user_rule_hover(
    name: &str,
    messages: &Messages,
) -> HoverInfo {
    HoverInfo {
        name: name.to_string(),
        title: messages.hover.user_rule_title.to_string(),
        body: messages.hover.user_rule_hint.to_string(),
        definition: None,
        source: None,
    }
}
