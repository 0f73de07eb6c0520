//! YAML output, same records as the JSON format

use super::{FormatError, TagStream};

pub fn serialize(stream: &TagStream<'_>) -> Result<String, FormatError> {
    serde_yaml::to_string(&stream.views()).map_err(|e| FormatError::SerializationError(e.to_string()))
}
