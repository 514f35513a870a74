use log::debug;
use serde_json::Value;
use crate::error::{fetch_err, PlaylistError};
use crate::model::ChannelRecord;

fn to_channel_record(index: usize, value: Value) -> ChannelRecord {
    if !value.is_object() {
        debug!("Channel entry {index} is not an object, using defaults");
        return ChannelRecord::default();
    }
    serde_json::from_value::<ChannelRecord>(value).unwrap_or_else(|err| {
        debug!("Channel entry {index} could not be read, using defaults: {err}");
        ChannelRecord::default()
    })
}

/// Parses the channel list document. The document has to be a json array,
/// broken entries are kept with default values so no channel gets lost.
pub fn parse_channels(content: &str) -> Result<Vec<ChannelRecord>, PlaylistError> {
    let document: Value = serde_json::from_str(content)
        .map_err(|err| fetch_err!("Failed to decode channel list: {err}"))?;
    match document {
        Value::Array(entries) => Ok(entries.into_iter()
            .enumerate()
            .map(|(index, value)| to_channel_record(index, value))
            .collect()),
        other => Err(fetch_err!("Channel list should be a json array, got {}", json_type_name(&other))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
