//! Static message catalogs.
//!
//! A catalog is selected once (from the CLI or the client's settings) and
//! handed to whatever needs user-facing text. Nothing here is mutable.

mod en;
mod zh_cn;

use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Description and formal definition of one RFC 5234 core rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreRuleText {
    pub name: &'static str,
    pub description: &'static str,
    pub definition: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverMessages {
    pub core_rule_title: &'static str,
    pub user_rule_title: &'static str,
    pub user_rule_hint: &'static str,
    pub definition_label: &'static str,
    pub source_label: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameMessages {
    pub invalid_rule_name: &'static str,
    /// `{0}` is the rule name.
    pub rule_not_defined: &'static str,
    /// `{0}` is the underlying reason.
    pub rename_failed: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralMessages {
    pub abnf_rule: &'static str,
}

/// Every user-facing string for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub core_rules: &'static [CoreRuleText],
    pub hover: HoverMessages,
    pub rename: RenameMessages,
    pub general: GeneralMessages,
}

impl Messages {
    pub fn core_rule(
        &self,
        name: &str,
    ) -> Option<&'static CoreRuleText> {
        self.core_rules.iter().find(|rule| rule.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    En,
    #[default]
    ZhCn,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::ZhCn];

    /// Parse a BCP 47-ish tag. Matching ignores case and accepts `_` for `-`;
    /// a bare `zh` selects Simplified Chinese.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" | "en-gb" => Some(Self::En),
            "zh" | "zh-cn" | "zh-hans" => Some(Self::ZhCn),
            _ => None,
        }
    }

    /// Like [`Locale::from_tag`], falling back to the default locale.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_default()
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
        }
    }

    pub fn messages(self) -> &'static Messages {
        match self {
            Self::En => &en::MESSAGES,
            Self::ZhCn => &zh_cn::MESSAGES,
        }
    }
}

impl Display for Locale {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Substitute `{0}`, `{1}`, … in `template`. Placeholders without a matching
/// argument are left untouched.
pub fn format_message(
    template: &str,
    args: &[&str],
) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let arg = caps[1].parse::<usize>().ok().and_then(|index| args.get(index));
            arg.map_or_else(|| caps[0].to_string(), |arg| arg.to_string())
        })
        .into_owned()
}

#[cfg(test)]
#[path = "../../tests/src/i18n_tests.rs"]
mod tests;
