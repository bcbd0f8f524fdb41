//! Unit tests for configuration loading and precedence.
//!
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: User, URL, exclusion, and path helpers
//! - `loading`: Environment and CLI loading through `load_from_iter`

mod field_resolution;
mod helpers;
