//! Operating-system family that governs path translation.

/// Path convention of the host the locators are translated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    /// Drive letters, backslash separators and UNC shares.
    Windows,
    /// Forward-slash paths; locator paths are used verbatim.
    #[default]
    Unix,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        if cfg!(windows) { Platform::Windows } else { Platform::Unix }
    }

    pub fn is_windows(self) -> bool {
        self == Platform::Windows
    }
}
