//! Router tests against the in-memory repositories

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};

use domain_client::ports::mock::MockRepository;
use interface_api::{create_router, AppState};

fn test_server() -> TestServer {
    let repo = Arc::new(MockRepository::new());
    let state = AppState::new(repo.clone(), repo);
    TestServer::new(create_router(state)).expect("failed to build test server")
}

async fn create_person(server: &TestServer, email: &str) -> Value {
    let response = server
        .post("/api/v1/clients/persons")
        .json(&json!({
            "name": "Jean Dupont",
            "email": email,
            "phone": "+41 79 123 45 67",
            "birthDate": "1990-05-20"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn test_health() {
    let server = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn test_create_person_normalizes_contact_details() {
    let server = test_server();
    let body = create_person(&server, "Jean@Example.COM").await;

    assert_eq!(body["clientType"], "PERSON");
    assert_eq!(body["email"], "jean@example.com");
    assert_eq!(body["phone"], "+41791234567");
    assert_eq!(body["birthDate"], "1990-05-20");
}

#[tokio::test]
async fn test_create_person_with_invalid_email_returns_violations() {
    let server = test_server();
    let response = server
        .post("/api/v1/clients/persons")
        .json(&json!({
            "name": "Jean",
            "email": "not-an-email",
            "phone": "+41791234567",
            "birthDate": "1990-05-20"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["type"], "about:blank");
    assert_eq!(body["status"], 400);
    assert_eq!(body["violations"][0]["field"], "email");
}

#[tokio::test]
async fn test_duplicate_email_returns_conflict() {
    let server = test_server();
    create_person(&server, "jean@example.com").await;

    let response = server
        .post("/api/v1/clients/persons")
        .json(&json!({
            "name": "Other",
            "email": "jean@example.com",
            "phone": "+41791234567",
            "birthDate": "1985-01-01"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["title"], "Conflict");
}

#[tokio::test]
async fn test_create_company_and_duplicate_identifier() {
    let server = test_server();
    let company = json!({
        "name": "Acme SA",
        "email": "contact@acme.ch",
        "phone": "+41791234567",
        "companyIdentifier": "che-123.456.789"
    });

    let response = server.post("/api/v1/clients/companies").json(&company).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["clientType"], "COMPANY");
    assert_eq!(body["companyIdentifier"], "CHE-123.456.789");

    let mut duplicate = company.clone();
    duplicate["email"] = json!("other@acme.ch");
    let response = server.post("/api/v1/clients/companies").json(&duplicate).await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_get_unknown_client_returns_404() {
    let server = test_server();
    let response = server
        .get("/api/v1/clients/00000000-0000-0000-0000-000000000000")
        .await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Not Found");
    assert_eq!(
        body["instance"],
        "/api/v1/clients/00000000-0000-0000-0000-000000000000"
    );
}

#[tokio::test]
async fn test_list_clients_pagination_envelope() {
    let server = test_server();
    for i in 0..3 {
        create_person(&server, &format!("client{i}@example.com")).await;
    }

    let response = server.get("/api/v1/clients?page=0&size=2").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert_eq!(body["totalElements"], 3);
    assert_eq!(body["totalPages"], 2);
}

#[tokio::test]
async fn test_list_clients_can_include_contracts() {
    let server = test_server();
    let client = create_person(&server, "jean@example.com").await;
    let client_id = client["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/v1/contracts?clientId={client_id}"))
        .json(&json!({ "costAmount": "150.50" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    // The plain listing leaves contracts out.
    let response = server.get("/api/v1/clients").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert!(body["items"][0].get("contracts").is_none());

    let response = server.get("/api/v1/clients?includeContracts=true").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    let contracts = body["items"][0]["contracts"].as_array().unwrap();
    assert_eq!(contracts.len(), 1);
    assert_eq!(contracts[0]["costAmount"], "150.50");
}

#[tokio::test]
async fn test_contract_lifecycle_over_http() {
    let server = test_server();
    let client = create_person(&server, "jean@example.com").await;
    let client_id = client["id"].as_str().unwrap().to_string();

    // Create a contract.
    let response = server
        .post(&format!("/api/v1/contracts?clientId={client_id}"))
        .json(&json!({ "costAmount": "150.50" }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let contract = response.json::<Value>();
    assert_eq!(contract["costCurrency"], "CHF");
    assert_eq!(contract["active"], true);
    let contract_id = contract["id"].as_str().unwrap().to_string();

    // It shows up in the active listing.
    let response = server
        .get(&format!("/api/v1/contracts/active?clientId={client_id}"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["totalElements"], 1);

    // Total active cost.
    let response = server
        .get(&format!(
            "/api/v1/contracts/active/total-cost?clientId={client_id}"
        ))
        .await;
    response.assert_status_ok();
    let total = response.json::<Value>();
    assert_eq!(total["amount"], "150.50");
    assert_eq!(total["currency"], "CHF");

    // Reprice the contract.
    let response = server
        .put(&format!("/api/v1/contracts/{contract_id}/cost"))
        .json(&json!({ "costAmount": "200.00" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["costAmount"], "200.00");

    // Delete the client; active contracts are terminated with it.
    let response = server.delete(&format!("/api/v1/clients/{client_id}")).await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/v1/clients/{client_id}")).await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_client_contact_details() {
    let server = test_server();
    let client = create_person(&server, "jean@example.com").await;
    let client_id = client["id"].as_str().unwrap();

    let response = server
        .put(&format!("/api/v1/clients/{client_id}"))
        .json(&json!({
            "name": "Jean Dupont",
            "email": "jean.dupont@example.com",
            "phone": "+41791234567"
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["email"], "jean.dupont@example.com");
}

#[tokio::test]
async fn test_unknown_currency_is_rejected() {
    let server = test_server();
    let client = create_person(&server, "jean@example.com").await;
    let client_id = client["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/v1/contracts?clientId={client_id}"))
        .json(&json!({ "costAmount": "100", "costCurrency": "XXX" }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
}
