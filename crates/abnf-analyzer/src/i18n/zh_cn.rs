use super::{CoreRuleText, GeneralMessages, HoverMessages, Messages, RenameMessages};

pub(super) static MESSAGES: Messages = Messages {
    core_rules: &[
        CoreRuleText {
            name: "ALPHA",
            description: "字母字符 (A-Z, a-z)",
            definition: "%x41-5A / %x61-7A",
        },
        CoreRuleText {
            name: "BIT",
            description: "二进制位 (0 或 1)",
            definition: "\"0\" / \"1\"",
        },
        CoreRuleText {
            name: "CHAR",
            description: "7位ASCII字符 (排除NUL)",
            definition: "%x01-7F",
        },
        CoreRuleText {
            name: "CR",
            description: "回车符",
            definition: "%x0D",
        },
        CoreRuleText {
            name: "CRLF",
            description: "Internet 标准换行符",
            definition: "CR LF",
        },
        CoreRuleText {
            name: "CTL",
            description: "控制字符",
            definition: "%x00-1F / %x7F",
        },
        CoreRuleText {
            name: "DIGIT",
            description: "数字字符 (0-9)",
            definition: "%x30-39",
        },
        CoreRuleText {
            name: "DQUOTE",
            description: "双引号字符",
            definition: "%x22",
        },
        CoreRuleText {
            name: "HEXDIG",
            description: "十六进制数字字符 (0-9, A-F)",
            definition: "DIGIT / \"A\" / \"B\" / \"C\" / \"D\" / \"E\" / \"F\"",
        },
        CoreRuleText {
            name: "HTAB",
            description: "水平制表符",
            definition: "%x09",
        },
        CoreRuleText {
            name: "LF",
            description: "换行符",
            definition: "%x0A",
        },
        CoreRuleText {
            name: "LWSP",
            description: "线性空白字符 (谨慎使用)",
            definition: "*(WSP / CRLF WSP)",
        },
        CoreRuleText {
            name: "OCTET",
            description: "8位数据",
            definition: "%x00-FF",
        },
        CoreRuleText {
            name: "SP",
            description: "空格字符",
            definition: "%x20",
        },
        CoreRuleText {
            name: "VCHAR",
            description: "可见(可打印)字符",
            definition: "%x21-7E",
        },
        CoreRuleText {
            name: "WSP",
            description: "空白字符 (空格或制表符)",
            definition: "SP / HTAB",
        },
    ],
    hover: HoverMessages {
        core_rule_title: "ABNF核心规则",
        user_rule_title: "ABNF规则",
        user_rule_hint: "点击查看定义，或使用 F2 重命名。",
        definition_label: "定义",
        source_label: "来源",
        source: "RFC 5234",
    },
    rename: RenameMessages {
        invalid_rule_name: "无效的规则名称。规则名称必须以字母开头，只能包含字母、数字和连字符。",
        rule_not_defined: "规则 \"{0}\" 未定义",
        rename_failed: "重命名失败: {0}",
    },
    general: GeneralMessages {
        abnf_rule: "ABNF 规则",
    },
};
