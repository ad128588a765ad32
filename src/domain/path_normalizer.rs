//! Translation between native filesystem paths and the path component of `file` locators.
//!
//! On Windows a locator path looks like `/C:/dir/file.toml` while the native form is
//! `C:\dir\file.toml`. Paths without a drive letter are treated as UNC shares and gain a
//! leading `\\` natively. Everywhere else both directions are the identity.

use crate::domain::Platform;

/// Converts paths between canonical (locator) and native form for one [`Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathNormalizer {
    platform: Platform,
}

impl PathNormalizer {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Normalizer for the running process.
    pub fn current() -> Self {
        Self::new(Platform::current())
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Native path to the form used inside a locator.
    pub fn to_canonical(&self, native: &str) -> String {
        if !self.platform.is_windows() {
            return native.to_string();
        }

        let forward = native.replace('\\', "/");
        let trimmed = forward.trim_start_matches('/');

        if starts_with_drive_letter(trimmed) { format!("/{}", trimmed) } else { trimmed.to_string() }
    }

    /// Locator path to the form the host filesystem API expects.
    pub fn to_native(&self, canonical: &str) -> String {
        if !self.platform.is_windows() {
            return canonical.to_string();
        }

        let trimmed = canonical.trim_start_matches('/');
        let path = if starts_with_drive_letter(trimmed) {
            trimmed.to_string()
        } else {
            format!("//{}", trimmed)
        };

        path.replace('/', "\\")
    }
}

/// `<letter>:` followed by anything.
fn starts_with_drive_letter(path: &str) -> bool {
    let mut chars = path.chars();
    matches!((chars.next(), chars.next()), (Some(letter), Some(':')) if letter.is_ascii_alphabetic())
}
