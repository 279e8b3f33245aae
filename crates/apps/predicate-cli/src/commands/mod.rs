//! CLI command implementations.

pub mod completions;
pub mod config;
pub mod extract;
pub mod normalize;
pub mod url;

// Re-export command handlers
pub use completions::completions;
pub use config::config;
pub use extract::extract;
pub use normalize::normalize;
pub use url::url;
