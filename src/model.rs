//! Data model for extracted component documentation.
//!
//! These records mirror the JSON shape emitted by the external type-aware
//! docgen command, one `ComponentDoc` per documented entity in a source file.

use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Documentation extracted from one component.
#[derive(Debug, Default, Deserialize)]
pub struct ComponentDoc {
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Direct description. May be empty; a `description` tag can stand in.
    #[serde(default)]
    pub description: String,
    /// JSDoc-style tags. Recognized keys: `description`, `deprecated`,
    /// `example`. Other keys are carried but unused.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Props keyed by name, in the JSON object's insertion order.
    #[serde(default)]
    pub props: IndexMap<String, PropDoc>,
    #[serde(default)]
    pub methods: Vec<MethodDoc>,
}

/// One configurable attribute of a component.
#[derive(Debug, Default, Deserialize)]
pub struct PropDoc {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
    #[serde(rename = "defaultValue", default)]
    pub default_value: Option<DefaultValue>,
}

/// A documented public method.
#[derive(Debug, Default, Deserialize)]
pub struct MethodDoc {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub params: Vec<ParamDoc>,
}

/// One method parameter.
#[derive(Debug, Default, Deserialize)]
pub struct ParamDoc {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_info: TypeInfo,
}

/// Type name as reported by the extractor. May contain `|` union separators.
#[derive(Debug, Default, Deserialize)]
pub struct TypeInfo {
    pub name: String,
}

/// Default value of a prop. The extractor reports arbitrary JSON here
/// (string literal, number, null); rendering stringifies it.
#[derive(Debug, Deserialize)]
pub struct DefaultValue {
    pub value: serde_json::Value,
}

#[cfg(test)]
impl TypeInfo {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}
