//! Template properties

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Properties substituted into a template, keyed by placeholder name
pub type PropertyMap = BTreeMap<String, PropertyValue>;

/// A scalar property value
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A string
    String(String),

    /// A JSON number
    Number(Number),

    /// A boolean
    Bool(bool),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => f.write_str(s),
            PropertyValue::Number(n) => write!(f, "{n}"),
            PropertyValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Number(value.into())
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        PropertyValue::Number(value.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_property_values_display() {
        assert_eq!(PropertyValue::from("Ada").to_string(), "Ada");
        assert_eq!(PropertyValue::from(42_i64).to_string(), "42");
        assert_eq!(PropertyValue::from(true).to_string(), "true");
    }

    #[test]
    fn test_property_map_from_json() -> TestResult {
        let props: PropertyMap = serde_json::from_value(json!({
            "name": "Ada",
            "count": 3,
            "ratio": 1.5,
            "admin": false,
        }))?;

        assert_eq!(props["name"], PropertyValue::from("Ada"));
        assert_eq!(props["count"].to_string(), "3");
        assert_eq!(props["ratio"].to_string(), "1.5");
        assert_eq!(props["admin"].to_string(), "false");

        Ok(())
    }

    #[test]
    fn test_property_map_rejects_non_scalars() {
        let nested = serde_json::from_value::<PropertyMap>(json!({ "user": { "name": "Ada" } }));
        let null = serde_json::from_value::<PropertyMap>(json!({ "name": null }));

        assert!(nested.is_err());
        assert!(null.is_err());
    }
}
