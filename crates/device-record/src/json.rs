use crate::{RecordError, Result};
use serde_json::{Map, Value};

/// Typed view over a JSON object: reads coerce to one JSON type, writes append keys
/// in call order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObject {
    inner: Map<String, Value>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { inner: map.clone() }),
            other => Err(RecordError::NotAnObject(json_type(other))),
        }
    }

    /// Missing and `null` both read as `None`.
    pub fn get_string(&self, key: &'static str) -> Result<Option<String>> {
        match self.inner.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(mismatch(key, "string", other)),
        }
    }

    /// Like [`JsonObject::get_string`], but the key itself must be present.
    pub fn require_string(&self, key: &'static str) -> Result<Option<String>> {
        if !self.inner.contains_key(key) {
            return Err(RecordError::MissingKey(key));
        }
        self.get_string(key)
    }

    pub fn get_boolean(&self, key: &'static str) -> Result<Option<bool>> {
        match self.inner.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(mismatch(key, "boolean", other)),
        }
    }

    pub fn put(&mut self, key: &str, value: impl Into<Value>) {
        self.inner.insert(key.to_string(), value.into());
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.inner)
    }
}

fn mismatch(key: &'static str, expected: &'static str, found: &Value) -> RecordError {
    RecordError::TypeMismatch {
        key,
        expected,
        found: json_type(found),
    }
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_read_as_none() -> Result<()> {
        let obj = JsonObject::from_value(&json!({ "a": null }))?;
        assert_eq!(obj.get_string("a")?, None);
        assert_eq!(obj.get_string("b")?, None);
        assert_eq!(obj.get_boolean("a")?, None);
        assert_eq!(obj.get_boolean("b")?, None);
        Ok(())
    }

    #[test]
    fn test_type_mismatch() -> Result<()> {
        let obj = JsonObject::from_value(&json!({ "s": true, "b": "yes" }))?;
        assert!(matches!(
            obj.get_string("s"),
            Err(RecordError::TypeMismatch {
                key: "s",
                expected: "string",
                found: "boolean"
            })
        ));
        assert!(matches!(
            obj.get_boolean("b"),
            Err(RecordError::TypeMismatch {
                key: "b",
                expected: "boolean",
                found: "string"
            })
        ));
        Ok(())
    }

    #[test]
    fn test_require_string() -> Result<()> {
        let obj = JsonObject::from_value(&json!({ "here": null, "set": "x" }))?;
        assert_eq!(obj.require_string("here")?, None);
        assert_eq!(obj.require_string("set")?.as_deref(), Some("x"));
        assert!(matches!(
            obj.require_string("gone"),
            Err(RecordError::MissingKey("gone"))
        ));
        Ok(())
    }

    #[test]
    fn test_not_an_object() {
        assert!(matches!(
            JsonObject::from_value(&json!([1, 2])),
            Err(RecordError::NotAnObject("array"))
        ));
    }

    #[test]
    fn test_put_preserves_insertion_order() {
        let mut obj = JsonObject::new();
        obj.put("zeta", "1");
        obj.put("alpha", true);
        assert_eq!(obj.len(), 2);
        assert_eq!(
            obj.into_value().to_string(),
            r#"{"zeta":"1","alpha":true}"#
        );
    }
}
