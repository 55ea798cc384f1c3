//! Minimal banking back-office: customers, their accounts and the rules for moving money in
//! and out of them.

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod config;
pub mod csv;
pub mod customer;
pub mod errors;
pub mod http;
pub mod store;
pub mod telemetry;

/// Customer identifier, assigned by the customer store. Never reused.
pub type CustomerID = u64;
