//! Request handlers

pub mod client;
pub mod contract;
pub mod health;
