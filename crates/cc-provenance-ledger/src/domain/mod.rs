//! # Provenance Ledger Domain

pub mod ledger;
pub mod record;
