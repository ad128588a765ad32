//! Document factory for JSON, YAML and TOML payloads with a top-level `includes` list.
//!
//! Only what include resolution needs is extracted: emptiness and the include references.
//! The raw bytes are kept untouched for whatever merges the loaded documents afterwards.

use std::path::Path;

use serde_json::Value;

use crate::domain::{AppError, Document, Locator};
use crate::ports::DocumentFactory;

/// Key holding the list of include references.
pub const INCLUDES_KEY: &str = "includes";

/// Serialization format of a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Format implied by the locator's file extension, if it has a known one.
    pub fn from_locator(locator: &Locator) -> Option<Self> {
        let path = locator.decoded_path();
        let extension = Path::new(&path).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" | "tml" => Some(Format::Toml),
            _ => None,
        }
    }

    fn parse(self, text: &str) -> Result<Value, String> {
        match self {
            Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            Format::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// A fetched payload together with the include references it declares.
#[derive(Debug, Clone)]
pub struct StructuredDocument {
    origin: Option<Locator>,
    format: Option<Format>,
    bytes: Vec<u8>,
    includes: Vec<String>,
}

impl StructuredDocument {
    pub fn origin(&self) -> Option<&Locator> {
        self.origin.as_ref()
    }

    /// `None` for empty payloads, which are never parsed.
    pub fn format(&self) -> Option<Format> {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl Document for StructuredDocument {
    fn is_empty(&self) -> bool {
        self.format.is_none()
    }

    fn includes(&self) -> &[String] {
        &self.includes
    }
}

/// Detects the format from the locator extension, else tries JSON, TOML and YAML in turn.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredDocumentFactory;

impl DocumentFactory for StructuredDocumentFactory {
    type Document = StructuredDocument;

    fn parse(&self, bytes: Vec<u8>, origin: Option<&Locator>) -> Result<StructuredDocument, AppError> {
        let invalid = |details: String| AppError::Document { locator: origin.cloned(), details };

        let text = std::str::from_utf8(&bytes).map_err(|e| invalid(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(empty_document(origin, bytes));
        }

        let (format, value) = match origin.and_then(Format::from_locator) {
            Some(format) => (format, format.parse(text).map_err(invalid)?),
            None => sniff(text).map_err(invalid)?,
        };

        if is_empty_value(&value) {
            return Ok(empty_document(origin, bytes));
        }

        let includes = extract_includes(&value).map_err(invalid)?;
        Ok(StructuredDocument { origin: origin.cloned(), format: Some(format), bytes, includes })
    }
}

fn empty_document(origin: Option<&Locator>, bytes: Vec<u8>) -> StructuredDocument {
    StructuredDocument { origin: origin.cloned(), format: None, bytes, includes: Vec::new() }
}

fn sniff(text: &str) -> Result<(Format, Value), String> {
    let mut failures = Vec::new();
    for format in [Format::Json, Format::Toml, Format::Yaml] {
        match format.parse(text) {
            Ok(value) => return Ok((format, value)),
            Err(err) => failures.push(format!("{:?}: {}", format, err)),
        }
    }
    Err(format!("could not detect format ({})", failures.join("; ")))
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn extract_includes(value: &Value) -> Result<Vec<String>, String> {
    let Some(raw) = value.get(INCLUDES_KEY) else {
        return Ok(Vec::new());
    };

    match raw {
        Value::Null => Ok(Vec::new()),
        Value::Array(entries) => entries
            .iter()
            .map(|entry| match entry {
                Value::String(s) => Ok(s.clone()),
                other => Err(format!("'{}' entries must be strings, found {}", INCLUDES_KEY, other)),
            })
            .collect(),
        other => Err(format!("'{}' must be a list of strings, found {}", INCLUDES_KEY, other)),
    }
}
