/// One registered client device and its push-notification credentials.
///
/// Every field may be absent. Fields are fixed once the record exists; use
/// [`crate::DeviceRecordBuilder`] to assemble one piecemeal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceRecord {
    pub(crate) id: Option<String>,
    pub(crate) name: Option<String>,
    pub(crate) device_type: Option<String>,
    pub(crate) is_current_device: Option<bool>,
    pub(crate) push_callback: Option<String>,
    pub(crate) push_public_key: Option<String>,
    pub(crate) push_auth_key: Option<String>,
}

impl DeviceRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Option<String>,
        id: Option<String>,
        device_type: Option<String>,
        is_current_device: Option<bool>,
        push_callback: Option<String>,
        push_public_key: Option<String>,
        push_auth_key: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            device_type,
            is_current_device,
            push_callback,
            push_public_key,
            push_auth_key,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn device_type(&self) -> Option<&str> {
        self.device_type.as_deref()
    }
    pub fn is_current_device(&self) -> Option<bool> {
        self.is_current_device
    }
    pub fn push_callback(&self) -> Option<&str> {
        self.push_callback.as_deref()
    }
    pub fn push_public_key(&self) -> Option<&str> {
        self.push_public_key.as_deref()
    }
    pub fn push_auth_key(&self) -> Option<&str> {
        self.push_auth_key.as_deref()
    }
}
