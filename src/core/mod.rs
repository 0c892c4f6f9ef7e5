//! Page content and framework-independent logic

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
#[cfg(feature = "ssr")]
pub mod error;
mod reveal;

pub use content::{FEATURES, FeatureEntry};
pub use reveal::RevealLatch;
