//! # Custody-Chain Test Suite
//!
//! Unified test crate for cross-subsystem flows.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-subsystem custody flows
//!     ├── custody_flows.rs   # register -> add product -> transfer -> audit
//!     └── service_boundary.rs # async service behavior under the write lock
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p cc-tests
//!
//! # By category
//! cargo test -p cc-tests integration::
//! ```

pub mod integration;
