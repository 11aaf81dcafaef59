use super::{CoreRuleText, GeneralMessages, HoverMessages, Messages, RenameMessages};

pub(super) static MESSAGES: Messages = Messages {
    core_rules: &[
        CoreRuleText {
            name: "ALPHA",
            description: "Alphabetic characters (A-Z, a-z)",
            definition: "%x41-5A / %x61-7A",
        },
        CoreRuleText {
            name: "BIT",
            description: "Binary digit (0 or 1)",
            definition: "\"0\" / \"1\"",
        },
        CoreRuleText {
            name: "CHAR",
            description: "7-bit ASCII character (excluding NUL)",
            definition: "%x01-7F",
        },
        CoreRuleText {
            name: "CR",
            description: "Carriage return",
            definition: "%x0D",
        },
        CoreRuleText {
            name: "CRLF",
            description: "Internet standard newline",
            definition: "CR LF",
        },
        CoreRuleText {
            name: "CTL",
            description: "Control characters",
            definition: "%x00-1F / %x7F",
        },
        CoreRuleText {
            name: "DIGIT",
            description: "Decimal digits (0-9)",
            definition: "%x30-39",
        },
        CoreRuleText {
            name: "DQUOTE",
            description: "Double quote character",
            definition: "%x22",
        },
        CoreRuleText {
            name: "HEXDIG",
            description: "Hexadecimal digits (0-9, A-F)",
            definition: "DIGIT / \"A\" / \"B\" / \"C\" / \"D\" / \"E\" / \"F\"",
        },
        CoreRuleText {
            name: "HTAB",
            description: "Horizontal tab",
            definition: "%x09",
        },
        CoreRuleText {
            name: "LF",
            description: "Line feed",
            definition: "%x0A",
        },
        CoreRuleText {
            name: "LWSP",
            description: "Linear white space (use with caution)",
            definition: "*(WSP / CRLF WSP)",
        },
        CoreRuleText {
            name: "OCTET",
            description: "8 bits of data",
            definition: "%x00-FF",
        },
        CoreRuleText {
            name: "SP",
            description: "Space character",
            definition: "%x20",
        },
        CoreRuleText {
            name: "VCHAR",
            description: "Visible (printing) characters",
            definition: "%x21-7E",
        },
        CoreRuleText {
            name: "WSP",
            description: "White space (space or tab)",
            definition: "SP / HTAB",
        },
    ],
    hover: HoverMessages {
        core_rule_title: "ABNF Core Rule",
        user_rule_title: "ABNF Rule",
        user_rule_hint: "Click to view definition, or use F2 to rename.",
        definition_label: "Definition",
        source_label: "Source",
        source: "RFC 5234",
    },
    rename: RenameMessages {
        invalid_rule_name: "Invalid rule name. Rule names must start with a letter and can only contain letters, \
                            digits, and hyphens.",
        rule_not_defined: "Rule \"{0}\" is not defined",
        rename_failed: "Rename failed: {0}",
    },
    general: GeneralMessages {
        abnf_rule: "ABNF Rule",
    },
};
