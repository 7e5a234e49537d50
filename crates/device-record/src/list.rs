use crate::json::json_type;
use crate::{DecodePolicy, DeviceRecord, RecordError, Result};
use serde_json::Value;

/// The devices registered on an account, in the order the service listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceList {
    records: Vec<DeviceRecord>,
}

impl DeviceList {
    pub fn new(records: Vec<DeviceRecord>) -> Self {
        Self { records }
    }

    /// Fails on the first element that does not decode.
    pub fn decode(value: &Value) -> Result<Self> {
        Self::decode_with(value, DecodePolicy::Lenient)
    }

    /// Like [`DeviceList::decode`], with `policy` applied to every element.
    pub fn decode_with(value: &Value, policy: DecodePolicy) -> Result<Self> {
        let items = as_array(value)?;
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let rec = DeviceRecord::decode_with(item, policy).map_err(|e| RecordError::InvalidElement {
                index,
                source: Box::new(e),
            })?;
            records.push(rec);
        }
        Ok(Self { records })
    }

    /// Skips elements that do not decode.
    pub fn decode_lossy(value: &Value) -> Result<Self> {
        let items = as_array(value)?;
        let mut records = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match DeviceRecord::decode(item) {
                Ok(rec) => records.push(rec),
                Err(e) => tracing::warn!(index, error = %e, "skipping malformed device record"),
            }
        }
        Ok(Self { records })
    }

    pub fn encode(&self) -> Value {
        Value::Array(self.records.iter().map(DeviceRecord::encode).collect())
    }

    /// The first record flagged as the caller's own device.
    pub fn current_device(&self) -> Option<&DeviceRecord> {
        self.records
            .iter()
            .find(|r| r.is_current_device() == Some(true))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&DeviceRecord> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DeviceRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<DeviceRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a DeviceList {
    type Item = &'a DeviceRecord;
    type IntoIter = std::slice::Iter<'a, DeviceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn as_array(value: &Value) -> Result<&Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(RecordError::NotAnArray(json_type(other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!([
            { "id": "d-1", "name": "Desktop", "type": "desktop", "isCurrentDevice": false },
            { "id": "d-2", "name": "Phone", "type": "mobile", "isCurrentDevice": true,
              "pushCallback": "https://push.example/cb" },
            { "id": "d-3", "name": "Tablet" }
        ])
    }

    #[test]
    fn test_decode_list_and_lookup() -> Result<()> {
        let list = DeviceList::decode(&sample())?;
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        let names: Vec<_> = list.iter().filter_map(DeviceRecord::name).collect();
        assert_eq!(names, vec!["Desktop", "Phone", "Tablet"]);

        let current = list.current_device().map(DeviceRecord::id);
        assert_eq!(current, Some(Some("d-2")));
        assert_eq!(list.find_by_id("d-3").and_then(|r| r.name()), Some("Tablet"));
        assert!(list.find_by_id("missing").is_none());
        Ok(())
    }

    #[test]
    fn test_no_current_device() -> Result<()> {
        let list = DeviceList::decode(&json!([{ "id": "d-1" }, { "isCurrentDevice": false }]))?;
        assert!(list.current_device().is_none());
        Ok(())
    }

    #[test]
    fn test_decode_reports_bad_index() -> anyhow::Result<()> {
        let value = json!([{ "id": "d-1" }, { "id": 2 }]);
        match DeviceList::decode(&value) {
            Err(RecordError::InvalidElement { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, RecordError::TypeMismatch { key: "id", .. }));
            }
            other => anyhow::bail!("unexpected result: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_strict_policy_applies_to_every_element() -> anyhow::Result<()> {
        let value = json!([
            { "name": "Desktop", "id": "d-1", "type": null,
              "pushCallback": null, "pushPublicKey": null, "pushAuthKey": null },
            { "id": "d-2", "isCurrentDevice": true }
        ]);
        assert_eq!(DeviceList::decode(&value)?.len(), 2);
        match DeviceList::decode_with(&value, DecodePolicy::Strict) {
            Err(RecordError::InvalidElement { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, RecordError::MissingKey("name")));
            }
            other => anyhow::bail!("unexpected result: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_decode_lossy_skips_bad_elements() -> Result<()> {
        let value = json!([{ "id": "d-1" }, { "id": 2 }, "junk", { "id": "d-4" }]);
        let list = DeviceList::decode_lossy(&value)?;
        let ids: Vec<_> = list.iter().filter_map(DeviceRecord::id).collect();
        assert_eq!(ids, vec!["d-1", "d-4"]);
        Ok(())
    }

    #[test]
    fn test_not_an_array() {
        assert!(matches!(
            DeviceList::decode(&json!({ "devices": [] })),
            Err(RecordError::NotAnArray("object"))
        ));
        assert!(matches!(
            DeviceList::decode_lossy(&json!(null)),
            Err(RecordError::NotAnArray("null"))
        ));
    }

    #[test]
    fn test_encode_list() -> Result<()> {
        let list = DeviceList::decode(&sample())?;
        assert_eq!(
            list.encode(),
            json!([
                { "name": "Desktop", "id": "d-1", "type": "desktop" },
                { "name": "Phone", "id": "d-2", "type": "mobile",
                  "pushCallback": "https://push.example/cb" },
                { "name": "Tablet", "id": "d-3" }
            ])
        );
        assert_eq!(list.into_records().len(), 3);
        Ok(())
    }
}
