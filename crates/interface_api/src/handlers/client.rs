//! Client handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use core_kernel::ClientId;
use domain_client::usecases::{
    CreateClientCommand, CreateClientUseCase, DeleteClientUseCase, GetClientUseCase,
    UpdateClientCommand, UpdateClientUseCase,
};

use crate::dto::client::{
    ClientResponse, CreateCompanyRequest, CreatePersonRequest, ListClientsParams,
    UpdateClientRequest,
};
use crate::dto::PageResponse;
use crate::error::ApiError;
use crate::AppState;

pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), ApiError> {
    request.validate().map_err(ApiError::from_validation)?;
    let client = CreateClientUseCase::new(state.clients.clone())
        .execute(CreateClientCommand::Person {
            name: request.name,
            email: request.email,
            phone: request.phone,
            birth_date: request.birth_date,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ClientResponse::from_client(&client, false)),
    ))
}

pub async fn create_company(
    State(state): State<AppState>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), ApiError> {
    request.validate().map_err(ApiError::from_validation)?;
    let client = CreateClientUseCase::new(state.clients.clone())
        .execute(CreateClientCommand::Company {
            name: request.name,
            email: request.email,
            phone: request.phone,
            company_identifier: request.company_identifier,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ClientResponse::from_client(&client, false)),
    ))
}

pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = GetClientUseCase::new(state.clients.clone())
        .by_id(ClientId::from(id))
        .await?;
    Ok(Json(ClientResponse::from_client(&client, false)))
}

pub async fn get_client_with_contracts(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientResponse>, ApiError> {
    let client = GetClientUseCase::new(state.clients.clone())
        .by_id_with_contracts(ClientId::from(id))
        .await?;
    Ok(Json(ClientResponse::from_client(&client, true)))
}

pub async fn list_clients(
    State(state): State<AppState>,
    Query(params): Query<ListClientsParams>,
) -> Result<Json<PageResponse<ClientResponse>>, ApiError> {
    let usecase = GetClientUseCase::new(state.clients.clone());
    let with_contracts = params.with_contracts();
    let page = if with_contracts {
        usecase.page_with_contracts(params.to_request()).await?
    } else {
        usecase.page(params.to_request()).await?
    };
    Ok(Json(PageResponse::from_page(page, |c| {
        ClientResponse::from_client(&c, with_contracts)
    })))
}

pub async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<ClientResponse>, ApiError> {
    request.validate().map_err(ApiError::from_validation)?;
    let client = UpdateClientUseCase::new(state.clients.clone())
        .execute(
            ClientId::from(id),
            UpdateClientCommand {
                name: request.name,
                email: request.email,
                phone: request.phone,
            },
        )
        .await?;
    Ok(Json(ClientResponse::from_client(&client, false)))
}

pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    DeleteClientUseCase::new(state.clients.clone(), state.contracts.clone())
        .execute(ClientId::from(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
