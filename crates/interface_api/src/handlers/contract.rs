//! Contract handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use core_kernel::{ClientId, ContractId, PageRequest};
use domain_client::usecases::{
    CalculateTotalCostUseCase, CreateContractCommand, CreateContractUseCase,
    GetActiveContractsUseCase, UpdateContractCostUseCase,
};

use crate::dto::contract::{
    parse_currency, ActiveContractParams, ClientIdParam, ContractResponse, CreateContractRequest,
    TotalCostResponse, UpdateContractCostRequest,
};
use crate::dto::{PageParams, PageResponse};
use crate::error::ApiError;
use crate::AppState;

pub async fn create_contract(
    State(state): State<AppState>,
    Query(params): Query<ClientIdParam>,
    Json(request): Json<CreateContractRequest>,
) -> Result<(StatusCode, Json<ContractResponse>), ApiError> {
    let currency = parse_currency(request.cost_currency.as_deref())?;
    let contract = CreateContractUseCase::new(state.clients.clone(), state.contracts.clone())
        .execute(
            ClientId::from(params.client_id),
            CreateContractCommand {
                cost_amount: request.cost_amount,
                cost_currency: currency,
                start_date: request.start_date,
                end_date: request.end_date,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ContractResponse::from(&contract))))
}

pub async fn list_active_contracts(
    State(state): State<AppState>,
    Query(params): Query<ActiveContractParams>,
) -> Result<Json<PageResponse<ContractResponse>>, ApiError> {
    let page_request: PageRequest = PageParams {
        page: params.page,
        size: params.size,
    }
    .to_request();
    let page = GetActiveContractsUseCase::new(state.clients.clone(), state.contracts.clone())
        .execute(
            ClientId::from(params.client_id),
            page_request,
            params.updated_since,
        )
        .await?;
    Ok(Json(PageResponse::from_page(page, |c| {
        ContractResponse::from(&c)
    })))
}

pub async fn update_contract_cost(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateContractCostRequest>,
) -> Result<Json<ContractResponse>, ApiError> {
    let currency = parse_currency(request.cost_currency.as_deref())?;
    let contract = UpdateContractCostUseCase::new(state.contracts.clone())
        .execute(ContractId::from(id), request.cost_amount, currency)
        .await?;
    Ok(Json(ContractResponse::from(&contract)))
}

pub async fn total_active_cost(
    State(state): State<AppState>,
    Query(params): Query<ClientIdParam>,
) -> Result<Json<TotalCostResponse>, ApiError> {
    let total = CalculateTotalCostUseCase::new(state.clients.clone(), state.contracts.clone())
        .execute(ClientId::from(params.client_id))
        .await?;
    Ok(Json(TotalCostResponse::from(total)))
}
