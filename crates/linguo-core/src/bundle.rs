use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::PatchError;

/// Localized UI strings for one language, as a JSON object tree
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    root: Value,
}

impl Bundle {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Load a bundle from a UTF-8 JSON file
    pub fn load(path: &Path) -> Result<Self, PatchError> {
        tracing::debug!("Loading bundle: {}", path.display());
        let text = fs::read_to_string(path).map_err(|source| PatchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| PatchError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self::new)
    }

    /// Pretty-print with `indent` spaces per level. Non-ASCII is written as-is.
    pub fn to_json_bytes(&self, indent: usize) -> Result<Vec<u8>, PatchError> {
        let indent = " ".repeat(indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut serializer)?;
        Ok(buf)
    }

    pub fn to_json(&self, indent: usize) -> Result<String, PatchError> {
        let bytes = self.to_json_bytes(indent)?;
        Ok(String::from_utf8(bytes).expect("serde_json writes UTF-8"))
    }

    /// Overwrite `path` with the serialized bundle
    pub fn save(&self, path: &Path, indent: usize) -> Result<(), PatchError> {
        let bytes = self.to_json_bytes(indent)?;
        fs::write(path, bytes).map_err(|source| PatchError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve a nested section. Every step of `path` must be an existing object.
    pub fn section_mut(&mut self, path: &[&str]) -> Result<&mut Map<String, Value>, PatchError> {
        let Some(mut current) = self.root.as_object_mut() else {
            return Err(PatchError::NotAnObject {
                path: "(root)".to_string(),
            });
        };

        for (depth, step) in path.iter().enumerate() {
            current = match current.get_mut(*step) {
                Some(Value::Object(map)) => map,
                Some(_) => {
                    return Err(PatchError::NotAnObject {
                        path: path[..=depth].join("."),
                    });
                }
                None => {
                    return Err(PatchError::MissingSection {
                        path: path[..=depth].join("."),
                    });
                }
            };
        }

        Ok(current)
    }

    /// Insert `key` under `section` only if it is not already there.
    /// Returns true when the bundle changed.
    pub fn insert_if_absent(
        &mut self,
        section: &[&str],
        key: &str,
        value: impl Into<Value>,
    ) -> Result<bool, PatchError> {
        let map = self.section_mut(section)?;
        if map.contains_key(key) {
            return Ok(false);
        }
        map.insert(key.to_string(), value.into());
        Ok(true)
    }

    pub fn lookup(&self, section: &[&str], key: &str) -> Option<&Value> {
        let mut current = self.root.as_object()?;
        for step in section {
            current = current.get(*step)?.as_object()?;
        }
        current.get(key)
    }
}
