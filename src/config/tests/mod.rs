//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence and default tests
//! - `field_resolution`: Credential, post URL and derived setting resolution

mod helpers;
