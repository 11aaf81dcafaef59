use std::collections::HashMap;

use crate::ide::IdeLocation;

/// Rule name → location of the name token at its definition site.
///
/// Rebuilt wholesale on every scan. A name defined twice keeps the later site.
pub type SymbolTable = HashMap<String, IdeLocation>;

/// Every textual occurrence of one rule name, in scan order.
pub type ReferenceSet = Vec<RuleReference>;

/// One occurrence of a rule name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleReference {
    pub location: IdeLocation,
    /// `true` when the occurrence was matched as `<name>`; the range then
    /// includes the angle brackets.
    pub bracketed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Rule,
}

impl RuleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rule => "rule",
        }
    }
}

/// Flat document-symbol entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSymbol {
    pub name: String,
    pub location: IdeLocation,
    pub kind: RuleKind,
}
