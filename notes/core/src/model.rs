//! Analysis Result
//!
//! The one record the backend produces for a submitted note.
//!
//! The client performs no schema validation on the response body. An
//! `AnalysisResult` wraps the raw JSON value and reads fields leniently:
//! a field with an unexpected JSON type is treated as absent, exactly like
//! a missing field. Rendering code applies the documented fallbacks
//! (epoch for `createdAt`, empty labels, zero score).

use serde_json::Value;

/// Result of analyzing a note, as returned by the backend
///
/// Never mutated after receipt. The controller replaces it wholesale on the
/// next successful submission.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    raw: Value,
}

impl AnalysisResult {
    /// Wrap a parsed response body
    pub fn from_value(raw: Value) -> Self {
        Self { raw }
    }

    /// Parse a response body
    ///
    /// # Errors
    ///
    /// Returns the JSON error if the body is not valid JSON. Any valid JSON
    /// value is accepted, including one with none of the expected fields.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body).map(Self::from_value)
    }

    /// The response body exactly as parsed
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Whether the body is a falsy scalar (`null`, `false`, `0`, `""`)
    ///
    /// Such a body carries no report and is not drawn as a result card.
    pub fn is_blank(&self) -> bool {
        match &self.raw {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(_) | Value::Object(_) => false,
        }
    }

    /// The note as echoed by the server (empty when absent)
    pub fn text(&self) -> &str {
        self.str_field("text").unwrap_or("")
    }

    /// Creation time in Unix seconds, if present and numeric
    pub fn created_at(&self) -> Option<i64> {
        let value = self.raw.get("createdAt")?;
        value
            .as_i64()
            .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
    }

    /// Labels in received order
    ///
    /// Empty when absent or not an array. Non-string entries are skipped.
    pub fn labels(&self) -> Vec<&str> {
        self.raw
            .get("labels")
            .and_then(Value::as_array)
            .map(|labels| labels.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Score as reported by the backend, if present and numeric
    pub fn score(&self) -> Option<f64> {
        self.raw.get("score").and_then(Value::as_f64)
    }

    /// Server-assigned report id
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }


    /// Short free-text summary, if the analyzer produced one
    pub fn summary(&self) -> Option<&str> {
        self.str_field("summary").filter(|s| !s.is_empty())
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.raw.get(key).and_then(Value::as_str)
    }
}
