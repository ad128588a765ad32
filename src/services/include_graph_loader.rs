//! Depth-first include resolution.
//!
//! Every document is preceded in the output by everything it includes, transitively, and
//! sibling includes keep their declaration order. A locator that reappears in the chain of
//! documents leading to it is a cycle and aborts the whole load. The same document reached
//! through two different branches is loaded twice; nothing is deduplicated.

use crate::domain::{AppError, Document, Locator};
use crate::ports::{DocumentFactory, SourceFetcher, WorkingDirectory};
use crate::services::{LocatorResolver, ProcessWorkingDirectory};

/// Recursive include resolver over pluggable fetching and parsing.
#[derive(Debug, Clone)]
pub struct IncludeGraphLoader<F, D, W = ProcessWorkingDirectory>
where
    W: WorkingDirectory,
{
    resolver: LocatorResolver<W>,
    fetcher: F,
    factory: D,
}

impl<F, D, W> IncludeGraphLoader<F, D, W>
where
    F: SourceFetcher,
    D: DocumentFactory,
    W: WorkingDirectory,
{
    pub fn new(resolver: LocatorResolver<W>, fetcher: F, factory: D) -> Self {
        Self { resolver, fetcher, factory }
    }

    /// Resolve `raw_paths` against the working directory and load them as roots.
    pub fn load_paths<S: AsRef<str>>(&self, raw_paths: &[S]) -> Result<Vec<D::Document>, AppError> {
        let locators = self.resolver.resolve_all(None, raw_paths)?;
        self.load_locators(&[], &locators)
    }

    /// Parse in-memory payloads and load them as roots without an origin locator.
    pub fn load_bytes(&self, blobs: Vec<Vec<u8>>) -> Result<Vec<D::Document>, AppError> {
        let documents = self.wrap_all(blobs)?;
        self.load_documents(&[], documents)
    }

    /// Parse payloads that did not come from a locator.
    pub fn wrap_all(&self, blobs: Vec<Vec<u8>>) -> Result<Vec<D::Document>, AppError> {
        blobs.into_iter().map(|bytes| self.factory.parse(bytes, None)).collect()
    }

    /// Fetch and load each locator in order, below the given chain of ancestors.
    pub fn load_locators(
        &self,
        ancestors: &[Locator],
        locators: &[Locator],
    ) -> Result<Vec<D::Document>, AppError> {
        let mut chain = ancestors.to_vec();
        self.load_each(&mut chain, locators)
    }

    /// Load documents that are already parsed, below the given chain of ancestors.
    pub fn load_documents(
        &self,
        ancestors: &[Locator],
        documents: Vec<D::Document>,
    ) -> Result<Vec<D::Document>, AppError> {
        let mut chain = ancestors.to_vec();
        let mut loaded = Vec::new();

        for document in documents {
            loaded.extend(self.load_node(&mut chain, None, document)?);
        }

        Ok(loaded)
    }

    fn load_each(
        &self,
        chain: &mut Vec<Locator>,
        locators: &[Locator],
    ) -> Result<Vec<D::Document>, AppError> {
        let mut loaded = Vec::new();

        for locator in locators {
            let bytes = self.fetcher.fetch(locator)?;
            let document = self.factory.parse(bytes, Some(locator))?;
            loaded.extend(self.load_node(chain, Some(locator), document)?);
        }

        Ok(loaded)
    }

    fn load_node(
        &self,
        chain: &mut Vec<Locator>,
        locator: Option<&Locator>,
        document: D::Document,
    ) -> Result<Vec<D::Document>, AppError> {
        if document.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(locator) = locator {
            if chain.contains(locator) {
                return Err(AppError::RecursiveInclude { locator: locator.clone() });
            }
        }

        let children = self.resolver.resolve_all(locator, document.includes())?;

        tracing::debug!(
            locator = locator.map(tracing::field::display),
            depth = chain.len(),
            includes = children.len(),
            "loading document"
        );

        if let Some(locator) = locator {
            chain.push(locator.clone());
        }
        let included = self.load_each(chain, &children);
        if locator.is_some() {
            chain.pop();
        }

        let mut loaded = included?;
        loaded.push(document);
        Ok(loaded)
    }
}
