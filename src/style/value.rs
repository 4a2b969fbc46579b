use std::collections::BTreeMap;

use serde_json::Value;

use crate::{
    foundation::error::{ScaleError, ScaleResult},
    style::viewport::{ViewportLength, parse_decimal},
};

/// Attribute name to value mapping. Keys iterate in sorted order.
pub type StyleMap = BTreeMap<String, StyleValue>;

/// A style attribute value, classified once on the way in.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum StyleValue {
    /// A JSON number.
    Number(f64),
    /// A string holding a plain decimal number, e.g. `"12"`.
    NumericText {
        /// Original text, emitted when the value passes through.
        raw: String,
        /// Parsed magnitude.
        value: f64,
    },
    /// A viewport length string such as `"50vw"`.
    Viewport {
        /// Original text, emitted when the value passes through.
        raw: String,
        /// Parsed length.
        length: ViewportLength,
    },
    /// Any other string (colors, enum keywords, font families...).
    Text(String),
    /// An ordered list of values, e.g. `transform` entries.
    Array(Vec<StyleValue>),
    /// A nested object: either a plain nested style or an `{ ignored, value }` wrapper.
    Nested(StyleMap),
    /// Values scaling never touches (booleans, null).
    Passthrough(Value),
}

impl StyleValue {
    /// Classify an arbitrary JSON value.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => Self::Number(v),
                None => Self::Passthrough(Value::Number(n)),
            },
            Value::String(s) => Self::classify_text(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::classify).collect()),
            Value::Object(map) => Self::Nested(
                map.into_iter()
                    .map(|(k, v)| (k, Self::classify(v)))
                    .collect(),
            ),
            other @ (Value::Bool(_) | Value::Null) => Self::Passthrough(other),
        }
    }

    fn classify_text(raw: String) -> Self {
        if let Some(value) = parse_decimal(&raw) {
            return Self::NumericText { raw, value };
        }
        match ViewportLength::parse(&raw) {
            Some(length) => Self::Viewport { raw, length },
            None => Self::Text(raw),
        }
    }

    /// Numeric magnitude of numbers and numeric strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) | Self::NumericText { value: v, .. } => Some(*v),
            _ => None,
        }
    }

    /// Truthiness of an `ignored` flag: `false`, `null`, `0` and `""` are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(v) => *v != 0.0 && !v.is_nan(),
            Self::NumericText { raw, .. } | Self::Viewport { raw, .. } | Self::Text(raw) => {
                !raw.is_empty()
            }
            Self::Array(_) | Self::Nested(_) => true,
            Self::Passthrough(v) => match v {
                Value::Null => false,
                Value::Bool(b) => *b,
                _ => true,
            },
        }
    }

    /// Render back to JSON. Integral numbers are emitted as JSON integers.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Number(v) => number_to_json(*v),
            Self::NumericText { raw, .. } | Self::Viewport { raw, .. } | Self::Text(raw) => {
                Value::String(raw.clone())
            }
            Self::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Nested(map) => style_map_to_json(map),
            Self::Passthrough(v) => v.clone(),
        }
    }
}

impl From<Value> for StyleValue {
    fn from(value: Value) -> Self {
        Self::classify(value)
    }
}

impl From<StyleValue> for Value {
    fn from(value: StyleValue) -> Self {
        value.to_json()
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        Self::classify_text(value.to_string())
    }
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn number_to_json(v: f64) -> Value {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
        return Value::from(v as i64);
    }
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Classify a JSON document into a [`StyleMap`]. The top level must be an object.
pub fn style_map_from_json(doc: Value) -> ScaleResult<StyleMap> {
    match StyleValue::classify(doc) {
        StyleValue::Nested(map) => Ok(map),
        other => Err(ScaleError::style(format!(
            "expected a style object at the top level, got {}",
            kind_name(&other)
        ))),
    }
}

/// Render a [`StyleMap`] as a JSON object.
pub fn style_map_to_json(map: &StyleMap) -> Value {
    Value::Object(
        map.iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect(),
    )
}

fn kind_name(v: &StyleValue) -> &'static str {
    match v {
        StyleValue::Number(_) => "a number",
        StyleValue::NumericText { .. }
        | StyleValue::Viewport { .. }
        | StyleValue::Text(_) => "a string",
        StyleValue::Array(_) => "an array",
        StyleValue::Nested(_) => "an object",
        StyleValue::Passthrough(Value::Bool(_)) => "a boolean",
        StyleValue::Passthrough(Value::Null) => "null",
        StyleValue::Passthrough(_) => "an unsupported value",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/value.rs"]
mod tests;
