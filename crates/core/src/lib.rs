//! Functional core for the pantry inventory service.
//!
//! Pure domain types, normalization, request validation and the storage
//! contract. Nothing in this crate performs I/O.

pub mod inventory;
pub mod storage;
