mod scanner;
mod types;

pub use scanner::{is_rule_name_char, is_valid_rule_name, scan_definitions, scan_references};
pub use types::{ReferenceSet, RuleKind, RuleReference, RuleSymbol, SymbolTable};
