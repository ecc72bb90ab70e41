#![allow(dead_code)]

use std::path::Path;

/// Read a fixture's fixed-width records.
pub fn ascii(name: &str) -> Vec<u8> {
    std::fs::read(path(name).with_extension("ascii")).unwrap()
}

/// Read a fixture's JSON document as text.
pub fn json_str(name: &str) -> String {
    std::fs::read_to_string(path(name).with_extension("json")).unwrap()
}

pub fn json(name: &str) -> serde_json::Value {
    serde_json::from_str(&json_str(name)).unwrap()
}

/// Render bytes for readable assertion failures.
pub fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn path(name: &str) -> std::path::PathBuf {
    Path::new("fixtures").join(name)
}
