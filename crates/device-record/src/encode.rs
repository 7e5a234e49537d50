use crate::{DeviceRecord, Field, JsonObject, ENCODE_ORDER};
use serde::{Serialize, Serializer};
use serde_json::Value;

impl DeviceRecord {
    /// Encode as a JSON object holding only the present fields.
    ///
    /// `isCurrentDevice` is never written: the consuming side infers it.
    pub fn encode(&self) -> Value {
        let mut body = JsonObject::new();
        for field in ENCODE_ORDER {
            if let Some(v) = self.string_field(field) {
                body.put(field.key(), v);
            }
        }
        body.into_value()
    }

    fn string_field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name(),
            Field::Id => self.id(),
            Field::Type => self.device_type(),
            Field::PushCallback => self.push_callback(),
            Field::PushPublicKey => self.push_public_key(),
            Field::PushAuthKey => self.push_auth_key(),
            Field::IsCurrentDevice => None,
        }
    }
}

impl Serialize for DeviceRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.encode().serialize(serializer)
    }
}
