//! JSON output: the tag records with their extracted text

use super::{FormatError, TagStream};

/// Pretty-printed array of tag records, newline terminated.
pub fn serialize(stream: &TagStream<'_>) -> Result<String, FormatError> {
    let mut output = serde_json::to_string_pretty(&stream.views())
        .map_err(|e| FormatError::SerializationError(e.to_string()))?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::scanning::TagScanner;
    use serde_json::Value;

    #[test]
    fn test_json_records() {
        let scanner = TagScanner::new();
        let stream = TagStream::scan(&scanner, "# Hi\nsee [docs](http://x)");
        let output = serialize(&stream).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        let records = value.as_array().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0]["kind"], "header");
        assert_eq!(records[0]["weight"], 1);
        assert_eq!(records[0]["text"], "Hi");
        assert_eq!(records[0]["start_text"], 2);
        assert_eq!(records[1]["text"], "see ");
        assert_eq!(records[2]["kind"], "link");
        assert_eq!(records[2]["extra_text"], "http://x");
        assert_eq!(records[2]["extra"]["start"], 16);
        assert!(records[1].get("extra").is_none());
    }
}
