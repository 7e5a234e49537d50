use crate::{DeviceRecord, Field, JsonObject, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// How decode treats a string key that is missing altogether.
///
/// `isCurrentDevice` may always be missing; the policy only governs the six string keys.
/// An explicit `null` reads as absent under either policy.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DecodePolicy {
    /// Every key is optional and nullable.
    #[default]
    Lenient,
    /// String keys must be present, though they may be `null`.
    Strict,
}

impl DeviceRecord {
    /// Decode with [`DecodePolicy::Lenient`].
    pub fn decode(value: &Value) -> Result<Self> {
        Self::decode_with(value, DecodePolicy::Lenient)
    }

    pub fn decode_with(value: &Value, policy: DecodePolicy) -> Result<Self> {
        let obj = JsonObject::from_value(value)?;
        let rec = DeviceRecord::new(
            read_string(&obj, Field::Name, policy)?,
            read_string(&obj, Field::Id, policy)?,
            read_string(&obj, Field::Type, policy)?,
            obj.get_boolean(Field::IsCurrentDevice.key())?,
            read_string(&obj, Field::PushCallback, policy)?,
            read_string(&obj, Field::PushPublicKey, policy)?,
            read_string(&obj, Field::PushAuthKey, policy)?,
        );
        tracing::debug!(
            id = ?rec.id(),
            current = ?rec.is_current_device(),
            ?policy,
            "decoded device record"
        );
        Ok(rec)
    }
}

fn read_string(obj: &JsonObject, field: Field, policy: DecodePolicy) -> Result<Option<String>> {
    match policy {
        DecodePolicy::Lenient => obj.get_string(field.key()),
        DecodePolicy::Strict => obj.require_string(field.key()),
    }
}

impl<'de> Deserialize<'de> for DeviceRecord {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        DeviceRecord::decode(&value).map_err(serde::de::Error::custom)
    }
}
