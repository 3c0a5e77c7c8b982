//! # Integration Tests
//!
//! Cross-subsystem custody flows, exercised both at the domain level and
//! through the async service boundary.

pub mod custody_flows;
pub mod service_boundary;
