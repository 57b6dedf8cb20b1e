use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Document, MapError, Result};

/// Read a JSON document from disk
pub fn read_document(path: &Path, document: Document) -> Result<Value> {
    let file = File::open(path).map_err(|source| MapError::Io {
        document,
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| MapError::Parse {
        document,
        path: path.to_path_buf(),
        source,
    })
}

/// Require `value` to be a JSON object. `key` names the offending entry in errors.
pub fn expect_object<'a>(
    value: &'a Value,
    document: Document,
    key: &str,
) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| MapError::malformed(document, key, format!("expected an object, found {}", kind(value))))
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_document(Path::new("/nonexistent/mods.json"), Document::Modifiers).unwrap_err();
        assert!(matches!(err, MapError::Io { document: Document::Modifiers, .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"a\": ").unwrap();

        let err = read_document(file.path(), Document::BaseItems).unwrap_err();
        assert!(matches!(err, MapError::Parse { document: Document::BaseItems, .. }));
        assert!(err.to_string().contains("base item table"));
    }

    #[test]
    fn test_expect_object_reports_kind() {
        let err = expect_object(&serde_json::json!([1]), Document::ModGroups, "<root>").unwrap_err();
        assert!(err.to_string().contains("found an array"));
    }
}
