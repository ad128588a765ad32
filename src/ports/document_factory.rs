//! Document factory port definition.

use crate::domain::{AppError, Document, Locator};

/// Port turning raw bytes into a [`Document`].
///
/// `origin` is `None` for payloads handed in directly rather than fetched from a locator.
pub trait DocumentFactory {
    type Document: Document;

    fn parse(&self, bytes: Vec<u8>, origin: Option<&Locator>) -> Result<Self::Document, AppError>;
}
