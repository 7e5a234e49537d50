//! device-record: device entries of an account/device-management service
//!
//! A [`DeviceRecord`] is the value the service hands back for each registered client
//! device, together with its push-notification credentials. This crate owns the JSON
//! mapping for that value: which keys are read, which are written, and how absent
//! fields are represented. Records are assembled piecemeal with a
//! [`DeviceRecordBuilder`].

mod error;
pub use error::{RecordError, Result};

mod keys;
pub use keys::{Field, DECODE_ORDER, ENCODE_ORDER};

mod json;
pub use json::JsonObject;

mod types;
pub use types::DeviceRecord;

mod decode;
pub use decode::DecodePolicy;

mod encode;

mod builder;
pub use builder::DeviceRecordBuilder;

mod list;
pub use list::DeviceList;

mod loader;
pub use loader::{
    load_device_list_file, load_device_list_file_with, load_record_file, load_record_file_with,
};
