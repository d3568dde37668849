//! Stock record model.
//!
//! Records are kept as the JSON objects the backend sends so that fields the
//! dashboard does not know about still reach the chart untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the industry sector of a listed security.
pub const INDUSTRY_FIELD: &str = "industry";
/// Field holding the ticker symbol of a listed security.
pub const SYMBOL_FIELD: &str = "symbol";

/// One listed security as returned by `/admin/api/stocks`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockRecord(Map<String, Value>);

impl StockRecord {
    /// Wrap an already-decoded JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Convenience constructor for a record with only industry and symbol.
    pub fn with_industry_symbol(industry: &str, symbol: &str) -> Self {
        let mut fields = Map::new();
        fields.insert(INDUSTRY_FIELD.to_string(), Value::from(industry));
        fields.insert(SYMBOL_FIELD.to_string(), Value::from(symbol));
        Self(fields)
    }

    /// String value of `key`, or `""` when the field is missing or not a string.
    pub fn field(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }

    pub fn industry(&self) -> &str {
        self.field(INDUSTRY_FIELD)
    }

    pub fn symbol(&self) -> &str {
        self.field(SYMBOL_FIELD)
    }

    /// Text for a table cell: strings verbatim, other JSON values in their
    /// JSON form, missing or null fields empty.
    pub fn display_field(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// All fields of the record, including ones the dashboard ignores.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for StockRecord {
    type Error = Value;

    /// Accepts JSON objects only; anything else is handed back unchanged.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors_read_string_fields() {
        let record = StockRecord::try_from(json!({
            "industry": "Tech",
            "symbol": "AAA",
            "price": 12.5,
        }))
        .unwrap();
        assert_eq!(record.industry(), "Tech");
        assert_eq!(record.symbol(), "AAA");
        assert_eq!(record.fields().get("price"), Some(&json!(12.5)));
    }

    #[test]
    fn missing_or_non_string_fields_read_as_empty() {
        let record = StockRecord::try_from(json!({ "industry": 42 })).unwrap();
        assert_eq!(record.industry(), "");
        assert_eq!(record.symbol(), "");
    }

    #[test]
    fn display_field_renders_any_json_value() {
        let record = StockRecord::try_from(json!({
            "symbol": "AAA",
            "volume": 1200,
            "listed": true,
            "note": null,
        }))
        .unwrap();
        assert_eq!(record.display_field("symbol"), "AAA");
        assert_eq!(record.display_field("volume"), "1200");
        assert_eq!(record.display_field("listed"), "true");
        assert_eq!(record.display_field("note"), "");
        assert_eq!(record.display_field("missing"), "");
    }

    #[test]
    fn non_object_is_rejected() {
        assert_eq!(StockRecord::try_from(json!("AAA")), Err(json!("AAA")));
    }

    #[test]
    fn serializes_as_plain_object() {
        let record = StockRecord::with_industry_symbol("Health", "CCC");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({ "industry": "Health", "symbol": "CCC" }));
    }
}
