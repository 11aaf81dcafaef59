use serde_json::Value;

use crate::cache::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};
use crate::config::{
    SETTINGS_SECTION_KEY,
    cache::{MAX_CACHE_CAPACITY, MAX_CACHE_TTL_SECS, MIN_CACHE_CAPACITY, MIN_CACHE_TTL_SECS},
};
use crate::i18n::Locale;

/// One entry in the generated configuration schema.
#[derive(Debug, Clone)]
pub struct SchemaField {
    pub key: String,
    pub description: String,
    pub schema_type: SchemaType,
    pub default: Value,
}

/// Subset of JSON Schema types we support.
#[derive(Debug, Clone)]
pub enum SchemaType {
    Bool,
    Integer {
        minimum: Option<i64>,
        maximum: Option<i64>,
    },
    StringEnum {
        values: Vec<&'static str>,
    },
}

impl SchemaField {
    pub fn full_key(&self) -> String {
        format!("{SETTINGS_SECTION_KEY}.{}", self.key)
    }

    pub fn to_schema_value(&self) -> Value {
        let mut obj = serde_json::Map::new();
        obj.insert("markdownDescription".into(), Value::String(self.description.clone()));
        obj.insert("default".into(), self.default.clone());

        match &self.schema_type {
            SchemaType::Bool => {
                obj.insert("type".into(), Value::String("boolean".into()));
            },
            SchemaType::Integer {
                minimum,
                maximum,
            } => {
                obj.insert("type".into(), Value::String("number".into()));
                if let Some(min) = minimum {
                    obj.insert("minimum".into(), Value::Number((*min).into()));
                }
                if let Some(max) = maximum {
                    obj.insert("maximum".into(), Value::Number((*max).into()));
                }
            },
            SchemaType::StringEnum {
                values,
            } => {
                obj.insert("type".into(), Value::String("string".into()));
                obj.insert("enum".into(), Value::Array(values.iter().map(|v| Value::String(v.to_string())).collect()));
            },
        }

        Value::Object(obj)
    }

    pub fn to_markdown(&self) -> String {
        format!("- `{}` (default `{}`) - {}", self.full_key(), self.default, self.description)
    }
}

/// Return the full list of schema fields for every setting.
pub fn schema_fields() -> Vec<SchemaField> {
    vec![
        SchemaField {
            key: "locale".into(),
            description: "Language of hover text and rename errors. Unknown values fall back to `zh-CN`.".into(),
            schema_type: SchemaType::StringEnum {
                values: Locale::ALL.iter().map(|locale| locale.tag()).collect(),
            },
            default: Value::String(Locale::default().tag().into()),
        },
        SchemaField {
            key: "cache.capacity".into(),
            description: "Documents kept in each scan cache before the least recently used one is evicted.".into(),
            schema_type: SchemaType::Integer {
                minimum: Some(MIN_CACHE_CAPACITY as i64),
                maximum: Some(MAX_CACHE_CAPACITY as i64),
            },
            default: Value::Number((DEFAULT_CACHE_CAPACITY as u64).into()),
        },
        SchemaField {
            key: "cache.ttlSecs".into(),
            description: "Seconds a cached scan stays valid after it was written.".into(),
            schema_type: SchemaType::Integer {
                minimum: Some(MIN_CACHE_TTL_SECS as i64),
                maximum: Some(MAX_CACHE_TTL_SECS as i64),
            },
            default: Value::Number(DEFAULT_CACHE_TTL.as_secs().into()),
        },
        SchemaField {
            key: "formatting.enable".into(),
            description: "Enable document formatting of rule definition lines.".into(),
            schema_type: SchemaType::Bool,
            default: Value::Bool(true),
        },
        SchemaField {
            key: "logging.level".into(),
            description: "Verbosity of log messages sent to the client.".into(),
            schema_type: SchemaType::StringEnum {
                values: vec!["error", "warn", "info", "debug", "trace"],
            },
            default: Value::String("info".into()),
        },
    ]
}

/// Generate the `"properties"` object for an editor extension's configuration section.
pub fn generate_package_json_properties() -> Value {
    let mut properties = serde_json::Map::new();
    for field in schema_fields() {
        properties.insert(field.full_key(), field.to_schema_value());
    }
    Value::Object(properties)
}

/// Generate markdown documentation for all settings.
pub fn generate_configuration_markdown() -> String {
    let mut out = String::from("# abnf-analyzer settings\n");

    let mut current_section = String::new();
    for field in schema_fields() {
        let section = field.key.split('.').next().unwrap_or("").to_string();
        if section != current_section {
            let title = match section.as_str() {
                "locale" => "Locale",
                "cache" => "Cache",
                "formatting" => "Formatting",
                "logging" => "Logging",
                other => other,
            };
            out.push_str(&format!("\n## {title}\n\n"));
            current_section = section;
        }
        out.push_str(&field.to_markdown());
        out.push('\n');
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src/config/schema_tests.rs"]
mod tests;
