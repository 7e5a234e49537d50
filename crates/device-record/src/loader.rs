use crate::{DecodePolicy, DeviceList, DeviceRecord};
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::Path;

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("reading json: {}", path.display()))?;
    let val: Value =
        serde_json::from_str(&raw).with_context(|| format!("parsing json: {}", path.display()))?;
    Ok(val)
}

pub fn load_record_file(path: impl AsRef<Path>) -> anyhow::Result<DeviceRecord> {
    load_record_file_with(path, DecodePolicy::Lenient)
}

pub fn load_record_file_with(
    path: impl AsRef<Path>,
    policy: DecodePolicy,
) -> anyhow::Result<DeviceRecord> {
    let path = path.as_ref();
    let val = read_json(path)?;
    let rec = DeviceRecord::decode_with(&val, policy)
        .with_context(|| format!("decoding device record: {}", path.display()))?;
    Ok(rec)
}

pub fn load_device_list_file(path: impl AsRef<Path>) -> anyhow::Result<DeviceList> {
    load_device_list_file_with(path, DecodePolicy::Lenient)
}

pub fn load_device_list_file_with(
    path: impl AsRef<Path>,
    policy: DecodePolicy,
) -> anyhow::Result<DeviceList> {
    let path = path.as_ref();
    let val = read_json(path)?;
    let list = DeviceList::decode_with(&val, policy)
        .with_context(|| format!("decoding device list: {}", path.display()))?;
    tracing::debug!(path = %path.display(), devices = list.len(), "loaded device list");
    Ok(list)
}
