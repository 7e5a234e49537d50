use crate::DeviceRecord;

/// Accumulates device fields one at a time.
///
/// Setters overwrite; [`DeviceRecordBuilder::build`] snapshots the current state and
/// leaves the builder usable.
#[derive(Debug, Clone, Default)]
pub struct DeviceRecordBuilder {
    id: Option<String>,
    name: Option<String>,
    device_type: Option<String>,
    is_current_device: Option<bool>,
    push_callback: Option<String>,
    push_public_key: Option<String>,
    push_auth_key: Option<String>,
}

impl DeviceRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn set_type(&mut self, device_type: impl Into<String>) -> &mut Self {
        self.device_type = Some(device_type.into());
        self
    }

    /// Flags the record as the caller's own device. There is no way back.
    pub fn mark_as_current_device(&mut self) -> &mut Self {
        self.is_current_device = Some(true);
        self
    }

    pub fn set_push_callback(&mut self, push_callback: impl Into<String>) -> &mut Self {
        self.push_callback = Some(push_callback.into());
        self
    }

    pub fn set_push_public_key(&mut self, push_public_key: impl Into<String>) -> &mut Self {
        self.push_public_key = Some(push_public_key.into());
        self
    }

    pub fn set_push_auth_key(&mut self, push_auth_key: impl Into<String>) -> &mut Self {
        self.push_auth_key = Some(push_auth_key.into());
        self
    }

    pub fn build(&self) -> DeviceRecord {
        DeviceRecord::new(
            self.name.clone(),
            self.id.clone(),
            self.device_type.clone(),
            self.is_current_device,
            self.push_callback.clone(),
            self.push_public_key.clone(),
            self.push_auth_key.clone(),
        )
    }
}
