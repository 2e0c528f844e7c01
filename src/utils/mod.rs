//! Utility modules for common functionality.
//!
//! - constants: Constants for the application
//! - http: HTTP client creation and retry policy settings
//! - logging: Logging utilities
//! - parsing: Parsing utilities
//! - tests: Test utilities

pub mod constants;
pub mod http;
pub mod logging;
pub mod parsing;

pub use constants::*;
pub use http::*;
pub use parsing::*;
