//! Turns raw include strings into absolute locators.

use std::borrow::Cow;
use std::io;

use url::Url;

use crate::domain::{AppError, Locator, PathNormalizer};
use crate::ports::WorkingDirectory;
use crate::services::ProcessWorkingDirectory;

/// Resolves path or URL strings relative to a base locator.
///
/// Without a base, the working directory supplied by `W` is used as `file://<cwd>/`.
#[derive(Debug, Clone)]
pub struct LocatorResolver<W: WorkingDirectory = ProcessWorkingDirectory> {
    normalizer: PathNormalizer,
    working_dir: W,
}

impl LocatorResolver<ProcessWorkingDirectory> {
    /// Resolver for the running process: host path rules and process working directory.
    pub fn current() -> Self {
        Self::new(PathNormalizer::current(), ProcessWorkingDirectory)
    }
}

impl<W: WorkingDirectory> LocatorResolver<W> {
    pub fn new(normalizer: PathNormalizer, working_dir: W) -> Self {
        Self { normalizer, working_dir }
    }

    /// `file://<cwd>/`, the base used when none is given.
    ///
    /// The directory is percent-encoded, so `#`, `?` and `%` in its name stay part of the path.
    pub fn working_dir_locator(&self) -> Result<Locator, AppError> {
        let cwd = self.working_dir.current_dir()?;
        let native = cwd.to_str().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("working directory is not valid UTF-8: {}", cwd.display()),
            )
        })?;
        let parse_error = |source| AppError::Parse { path: native.to_string(), source };

        // `set_path` escapes `#`, `?` and spaces but keeps `%` as is.
        let canonical = self.normalizer.to_canonical(native).replace('%', "%25");
        let (host, path) = match canonical.strip_prefix('/') {
            Some(path) => ("", path),
            None => canonical.split_once('/').unwrap_or((canonical.as_str(), "")),
        };

        let mut url = Url::parse("file:///").map_err(parse_error)?;
        if !host.is_empty() {
            url.set_host(Some(host)).map_err(parse_error)?;
        }
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            url.set_path("/");
        } else {
            url.set_path(&format!("/{}/", path));
        }

        Ok(Locator::from(url))
    }

    /// Resolve `raw` against `base`, or against the working directory when `base` is `None`.
    ///
    /// Absolute URLs are returned as parsed. Relative references inherit the base's query string.
    pub fn resolve(&self, base: Option<&Locator>, raw: &str) -> Result<Locator, AppError> {
        if raw.is_empty() {
            return Err(AppError::BlankPath);
        }

        let base = match base {
            Some(base) => Cow::Borrowed(base),
            None => Cow::Owned(self.working_dir_locator()?),
        };

        let canonical = self.normalizer.to_canonical(raw);
        let parse_error = |source| AppError::Parse { path: raw.to_string(), source };

        let resolved = match Url::parse(&canonical) {
            Ok(url) => Locator::from(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                base.join_relative(&canonical).map_err(parse_error)?
            }
            Err(source) => return Err(parse_error(source)),
        };

        tracing::trace!(raw, base = %base, resolved = %resolved, "resolved locator");
        Ok(resolved)
    }

    /// Resolve every entry of `raws` in order, stopping at the first failure.
    pub fn resolve_all<S: AsRef<str>>(
        &self,
        base: Option<&Locator>,
        raws: &[S],
    ) -> Result<Vec<Locator>, AppError> {
        raws.iter().map(|raw| self.resolve(base, raw.as_ref())).collect()
    }
}
