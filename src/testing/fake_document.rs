use crate::domain::{AppError, Document, Locator};
use crate::ports::DocumentFactory;

/// Line-based test document.
///
/// `include <ref>` lines declare includes, a `!empty` line forces emptiness and a payload of
/// exactly `!invalid` is rejected by the factory. Whitespace-only payloads are empty.
#[derive(Debug, Clone)]
pub struct FakeDocument {
    pub origin: Option<Locator>,
    includes: Vec<String>,
    empty: bool,
}

impl FakeDocument {
    /// Last path segment of the origin, or `<inline>` for documents without one.
    pub fn name(&self) -> String {
        self.origin
            .as_ref()
            .and_then(|origin| origin.as_url().path_segments().and_then(|mut s| s.next_back()))
            .map(str::to_string)
            .unwrap_or_else(|| "<inline>".to_string())
    }
}

impl Document for FakeDocument {
    fn is_empty(&self) -> bool {
        self.empty
    }

    fn includes(&self) -> &[String] {
        &self.includes
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeDocumentFactory;

impl DocumentFactory for FakeDocumentFactory {
    type Document = FakeDocument;

    fn parse(&self, bytes: Vec<u8>, origin: Option<&Locator>) -> Result<FakeDocument, AppError> {
        let text = String::from_utf8(bytes)
            .map_err(|e| AppError::Document { locator: origin.cloned(), details: e.to_string() })?;

        if text.trim() == "!invalid" {
            return Err(AppError::Document { locator: origin.cloned(), details: "rejected".into() });
        }

        let includes =
            text.lines().filter_map(|line| line.strip_prefix("include ")).map(str::to_string).collect();
        let empty = text.trim().is_empty() || text.lines().any(|line| line == "!empty");

        Ok(FakeDocument { origin: origin.cloned(), includes, empty })
    }
}
