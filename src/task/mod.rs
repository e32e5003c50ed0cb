//! Task records: creation, listing, lookup, partial update, and deletion.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Use-case services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
