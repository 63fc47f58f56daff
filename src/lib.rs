//! Automatic upgrade decisions for versioned image tags
//!
//! - [`version`]: Parses standard and pipeline version strings into comparable
//!   values and selects candidates from tag lists
//! - [`policy`]: Decides whether a candidate version may replace the current one
//! - [`config`]: Policy configuration

pub mod config;
pub mod policy;
pub mod version;
