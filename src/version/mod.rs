//! Version parsing and tag selection
//!
//! Turns heterogeneous tag strings into comparable [`Version`] values.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Grammar   │────▶│   Parser    │◀────│  Selector   │
//! │  (detect)   │     │  (Version)  │     │ (tag lists) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`grammar`]: Standard vs pipeline grammar detection and normalization
//! - [`parser`]: Version and image reference parsing
//! - [`selector`]: Newest/lowest tag selection
//! - [`types`]: The [`Version`] value and its ordering
//! - [`error`]: Error types for parsing

pub mod error;
pub mod grammar;
pub mod parser;
pub mod selector;
pub mod types;

pub use error::VersionError;
pub use parser::{image_name_and_version, parse, parse_semver, version_from_image_reference};
pub use selector::{find_lowest, find_newest};
pub use types::Version;
