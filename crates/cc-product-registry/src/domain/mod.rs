//! # Product Registry Domain

pub mod entities;
pub mod registry;
