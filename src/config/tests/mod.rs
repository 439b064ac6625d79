//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Course id, session cookie and sort resolution tests
//! - `validation`: Configuration consistency validation tests

mod helpers;
mod validation;
