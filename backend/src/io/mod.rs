//! # IO Module
//!
//! The adapter layer between HTTP clients and the domain logic. Requests are
//! deserialized into transfer objects from the `shared` crate, validated,
//! mapped onto domain models and handed to the services in [`crate::domain`].
//! Results travel back the same way.

pub mod rest;

pub use rest::*;
