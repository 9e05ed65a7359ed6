use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded response body of a successful submission.
///
/// Only JSON objects decode into an `ApiResult`. No schema is enforced; the
/// known fields are read on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResult {
    fields: Map<String, Value>,
}

impl ApiResult {
    /// Returns `None` unless `value` is a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Elements of an array field as display strings.
    ///
    /// String elements are used verbatim, `null` becomes an empty string and
    /// any other element is rendered as JSON text. Returns `None` when the
    /// field is absent or is not an array.
    pub fn list_field(&self, field: &str) -> Option<Vec<String>> {
        let items = self.fields.get(field)?.as_array()?;
        Some(items.iter().map(display_element).collect())
    }

    /// The `roll_number` field, when present as a non-empty string.
    pub fn roll_number(&self) -> Option<&str> {
        self.fields
            .get("roll_number")
            .and_then(Value::as_str)
            .filter(|roll| !roll.is_empty())
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_default()
    }
}

fn display_element(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
