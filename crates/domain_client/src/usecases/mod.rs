//! Application use cases
//!
//! One struct per business operation. Each holds its repository ports as
//! `Arc<dyn ..>` and exposes an `execute` entry point returning
//! `ClientError` on failure. Duplicate checks are check-then-act; the
//! storage adapters back them with unique constraints, and a conflict
//! reported by `save` is mapped onto the same duplicate variants.

mod calculate_total_cost;
mod create_client;
mod create_contract;
mod delete_client;
mod get_active_contracts;
mod get_client;
mod update_client;
mod update_contract_cost;

pub use calculate_total_cost::CalculateTotalCostUseCase;
pub use create_client::{CreateClientCommand, CreateClientUseCase};
pub use create_contract::{CreateContractCommand, CreateContractUseCase};
pub use delete_client::DeleteClientUseCase;
pub use get_active_contracts::GetActiveContractsUseCase;
pub use get_client::GetClientUseCase;
pub use update_client::{UpdateClientCommand, UpdateClientUseCase};
pub use update_contract_cost::UpdateContractCostUseCase;
