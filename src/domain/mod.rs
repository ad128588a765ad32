pub mod configuration;
pub mod document;
pub mod error;
pub mod locator;
pub mod path_normalizer;
pub mod platform;

pub use configuration::{HttpConfig, LoaderConfig, LocalConfig, ObjectStorageConfig};
pub use document::Document;
pub use error::AppError;
pub use locator::{Locator, Scheme};
pub use path_normalizer::PathNormalizer;
pub use platform::Platform;
