//! Core Kernel - Foundational types for the client and contract system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic and currency safety
//! - Self-validating contact value objects (Email, PhoneNumber)
//! - Strongly-typed identifiers and the Swiss company identifier
//! - Port infrastructure (errors, pagination) shared by all repositories

pub mod contact;
pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;

pub use contact::{Email, PhoneNumber};
pub use error::CoreError;
pub use identifiers::{ClientId, CompanyIdentifier, ContractId};
pub use money::{Currency, Money, MoneyError};
pub use ports::{DomainPort, Page, PageRequest, PortError};
