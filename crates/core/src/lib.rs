//! `stockroom-core` — domain building blocks shared by the inventory crates.
//!
//! This crate contains **pure domain** primitives (no IO).

pub mod error;
pub mod name;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use name::ItemName;
pub use value_object::ValueObject;
