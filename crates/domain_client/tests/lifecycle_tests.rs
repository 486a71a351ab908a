//! End-to-end client and contract lifecycle through the use-case layer
//!
//! Runs against the in-memory repositories, exercising the same paths
//! the HTTP handlers use.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{Currency, PageRequest};
use domain_client::ports::mock::MockRepository;
use domain_client::usecases::{
    CalculateTotalCostUseCase, CreateClientCommand, CreateClientUseCase, CreateContractCommand,
    CreateContractUseCase, DeleteClientUseCase, GetActiveContractsUseCase, GetClientUseCase,
    UpdateClientCommand, UpdateClientUseCase, UpdateContractCostUseCase,
};
use domain_client::{Client, ClientError};
use rust_decimal_macros::dec;

struct Fixture {
    repo: Arc<MockRepository>,
}

impl Fixture {
    fn new() -> Self {
        Self {
            repo: Arc::new(MockRepository::new()),
        }
    }

    async fn create_person(&self, email: &str) -> Client {
        CreateClientUseCase::new(self.repo.clone())
            .execute(CreateClientCommand::Person {
                name: "Jean Dupont".to_string(),
                email: email.to_string(),
                phone: "+41 79 123 45 67".to_string(),
                birth_date: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
            })
            .await
            .unwrap()
    }

    fn contract_command(amount: rust_decimal::Decimal) -> CreateContractCommand {
        CreateContractCommand {
            cost_amount: amount,
            cost_currency: None,
            start_date: None,
            end_date: None,
        }
    }
}

#[tokio::test]
async fn test_full_client_contract_lifecycle() {
    let fixture = Fixture::new();
    let repo = fixture.repo.clone();

    // Register a client; the phone number is normalized on the way in.
    let client = fixture.create_person("jean@example.com").await;
    assert_eq!(client.phone.value(), "+41791234567");

    // Two contracts.
    let create_contract = CreateContractUseCase::new(repo.clone(), repo.clone());
    let first = create_contract
        .execute(client.id, Fixture::contract_command(dec!(100)))
        .await
        .unwrap();
    let second = create_contract
        .execute(client.id, Fixture::contract_command(dec!(200.50)))
        .await
        .unwrap();

    // Both show up active, in creation order.
    let active = GetActiveContractsUseCase::new(repo.clone(), repo.clone())
        .execute(client.id, PageRequest::default(), None)
        .await
        .unwrap();
    assert_eq!(active.items.len(), 2);
    assert_eq!(active.items[0].id, first.id);

    // Total active cost.
    let total = CalculateTotalCostUseCase::new(repo.clone(), repo.clone())
        .execute(client.id)
        .await
        .unwrap();
    assert_eq!(total.amount(), dec!(300.50));
    assert_eq!(total.currency(), Currency::CHF);

    // Repricing one contract moves the total.
    UpdateContractCostUseCase::new(repo.clone())
        .execute(second.id, dec!(300), None)
        .await
        .unwrap();
    let total = CalculateTotalCostUseCase::new(repo.clone(), repo.clone())
        .execute(client.id)
        .await
        .unwrap();
    assert_eq!(total.amount(), dec!(400.00));

    // Contact update is visible on the next read.
    UpdateClientUseCase::new(repo.clone())
        .execute(
            client.id,
            UpdateClientCommand {
                name: "Jean Dupont".to_string(),
                email: "jean.dupont@example.com".to_string(),
                phone: "+41791234567".to_string(),
            },
        )
        .await
        .unwrap();
    let reloaded = GetClientUseCase::new(repo.clone())
        .by_id_with_contracts(client.id)
        .await
        .unwrap();
    assert_eq!(reloaded.email.value(), "jean.dupont@example.com");
    assert_eq!(reloaded.contracts.len(), 2);

    // Deletion terminates the remaining active contracts and removes the
    // client.
    DeleteClientUseCase::new(repo.clone(), repo.clone())
        .execute(client.id)
        .await
        .unwrap();
    let result = GetClientUseCase::new(repo.clone()).by_id(client.id).await;
    assert!(matches!(result, Err(ClientError::ClientNotFound(_))));
}

#[tokio::test]
async fn test_duplicate_email_across_usecases() {
    let fixture = Fixture::new();
    let repo = fixture.repo.clone();

    fixture.create_person("jean@example.com").await;
    let other = fixture.create_person("luca@example.com").await;

    // Updating onto a taken email fails like creating with one.
    let result = UpdateClientUseCase::new(repo.clone())
        .execute(
            other.id,
            UpdateClientCommand {
                name: "Luca".to_string(),
                email: "jean@example.com".to_string(),
                phone: "+41791234567".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(ClientError::DuplicateEmail(_))));
}

#[tokio::test]
async fn test_paged_listing() {
    let fixture = Fixture::new();

    for i in 0..7 {
        fixture.create_person(&format!("client{i}@example.com")).await;
    }

    let page = GetClientUseCase::new(fixture.repo.clone())
        .page(PageRequest::new(2, 3))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_elements, 7);
    assert_eq!(page.total_pages(), 3);
}
