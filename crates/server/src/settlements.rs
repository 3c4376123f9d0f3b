//! People, balances and settlement endpoints.
//!
//! All three are recomputed from the stored expenses on every request.

use api_types::{
    people::PeopleResponse,
    settlement::{BalanceView, BalancesResponse, SettlementsResponse, TransferView},
};
use axum::{Json, extract::State};
use engine::{PersonBalance, SettlementTransfer};

use crate::{ServerError, server::ServerState};

fn map_transfer(transfer: SettlementTransfer) -> TransferView {
    TransferView {
        from: transfer.from,
        to: transfer.to,
        amount: transfer.amount.to_major(),
    }
}

fn map_balance(entry: &PersonBalance) -> BalanceView {
    BalanceView {
        person: entry.person.clone(),
        total_paid: entry.total_paid.to_major(),
        balance: entry.balance.to_major(),
    }
}

pub async fn people(State(state): State<ServerState>) -> Result<Json<PeopleResponse>, ServerError> {
    let people = state.engine.people().await?;
    Ok(Json(PeopleResponse {
        success: true,
        people,
    }))
}

pub async fn balances(
    State(state): State<ServerState>,
) -> Result<Json<BalancesResponse>, ServerError> {
    let balances = state.engine.balances().await?;
    Ok(Json(BalancesResponse {
        success: true,
        total_spent: balances.total_spent().to_major(),
        fair_share: balances.fair_share().to_major(),
        balances: balances.iter().map(map_balance).collect(),
    }))
}

pub async fn settlements(
    State(state): State<ServerState>,
) -> Result<Json<SettlementsResponse>, ServerError> {
    let settlements = state
        .engine
        .settlements()
        .await?
        .into_iter()
        .map(map_transfer)
        .collect();

    Ok(Json(SettlementsResponse {
        success: true,
        settlements,
    }))
}
