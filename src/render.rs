//! Markdown renderer — the JSON-to-Markdown contract.
//!
//! Takes the `ComponentDoc` sequence extracted from one source file and
//! produces the README body. Only the first record is rendered; a file may
//! yield zero or several documented entities but only the primary one gets a
//! README. An empty result signals "nothing worth documenting" and the caller
//! must skip writing.

use crate::model::{ComponentDoc, MethodDoc};

/// Render the primary component of a file as Markdown.
///
/// Returns the empty string when the sequence is empty or the first record
/// carries no description, no props, and no methods.
pub fn render(docs: &[ComponentDoc]) -> String {
    let Some(doc) = docs.first() else {
        return String::new();
    };

    // Direct description wins; the `description` tag is the fallback.
    let description = if doc.description.is_empty() {
        doc.tags.get("description").map(String::as_str).unwrap_or("")
    } else {
        doc.description.as_str()
    };

    if description.is_empty() && doc.methods.is_empty() && doc.props.is_empty() {
        return String::new();
    }

    let mut md = format!("# {}\n\n", doc.display_name);

    if let Some(deprecated) = doc.tags.get("deprecated") {
        md.push_str(&format!("> **警告:** {}\n\n", deprecated));
    }

    if !description.is_empty() {
        md.push_str(description);
        md.push_str("\n\n");
    }

    if let Some(example) = doc.tags.get("example") {
        md.push_str("## 示例\n\n");
        md.push_str(&format!("```jsx\n{}\n```\n\n", example));
    }

    // The Props section and its table header appear even with zero props.
    md.push_str("## Props\n\n");
    md.push_str("| 属性 | 说明 | 类型 | 默认值 |\n");
    md.push_str("| ---- | ----------- | ---- | ------- |\n");
    for prop in doc.props.values() {
        let default = match &prop.default_value {
            Some(dv) => stringify_default(&dv.value),
            None => String::new(),
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            prop.name,
            prop.description,
            escape_pipes(&prop.type_info.name),
            default,
        ));
    }

    if !doc.methods.is_empty() {
        md.push_str("\n## APIs\n\n");
        for method in &doc.methods {
            md.push_str(&render_method(method));
        }
    }

    md
}

fn render_method(method: &MethodDoc) -> String {
    let mut md = format!("### {}\n\n", method.name);
    md.push_str(&method.description);
    md.push_str("\n\n");
    if !method.params.is_empty() {
        md.push_str("| 属性 | 说明 | 类型 |\n");
        md.push_str("| ---- | ----------- | ---- |\n");
        for param in &method.params {
            let name = param.name.strip_suffix('?').unwrap_or(&param.name);
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                name,
                param.description.as_deref().unwrap_or(""),
                param.type_info.name,
            ));
        }
    }
    md
}

/// Escape union separators so type names don't break the table.
fn escape_pipes(type_name: &str) -> String {
    type_name.replace('|', "\\|")
}

/// Stringify a default value for a single table cell. String values render
/// bare (no quotes); embedded newlines collapse to spaces.
fn stringify_default(value: &serde_json::Value) -> String {
    let text = match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "null".to_string(),
        other => other.to_string(),
    };
    text.replace('\n', " ")
}
