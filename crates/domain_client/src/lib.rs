//! Client and contract domain
//!
//! This crate holds the aggregate model for insurance clients and their
//! contracts, the cost calculation domain service, the repository port
//! traits the application depends on, and one use case per business
//! operation.
//!
//! The aggregate enforces its own invariants: value objects are validated
//! in `core_kernel`, entity constructors validate entity-level rules, and
//! mutating operations return the timestamps they refresh so callers can
//! observe the side effect explicitly.

pub mod client;
pub mod contract;
pub mod error;
pub mod ports;
pub mod service;
pub mod usecases;

pub use client::{Client, ClientKind, ClientType};
pub use contract::{Contract, ContractDuration};
pub use error::ClientError;
pub use ports::{ClientRepository, ContractRepository};
pub use service::ContractCostCalculator;
