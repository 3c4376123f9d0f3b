//! Expense endpoints.

use api_types::expense::{ExpenseDeleted, ExpenseList, ExpenseNew, ExpenseSaved, ExpenseView};
use axum::{
    Json,
    extract::{FromRequest, Path, Query, Request, State},
    http::header,
};
use axum_extra::extract::WithRejection;
use engine::{EngineError, Expense, ExpenseCmd, MoneyCents};

use crate::{ServerError, server::ServerState};

/// Expense fields taken from a JSON body, or from the query string when the
/// request carries no JSON.
pub struct ExpenseInput(ExpenseNew);

impl<S> FromRequest<S> for ExpenseInput
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<ExpenseNew>::from_request(req, state).await?;
            return Ok(Self(payload));
        }

        let Query(payload) = Query::<ExpenseNew>::try_from_uri(req.uri())?;
        Ok(Self(payload))
    }
}

fn map_expense(expense: Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        amount: expense.amount.to_major(),
        description: expense.description,
        paid_by: expense.paid_by,
    }
}

fn expense_cmd(payload: ExpenseNew) -> Result<ExpenseCmd, ServerError> {
    let amount = payload
        .amount
        .ok_or_else(|| EngineError::MissingField("Missing fields".to_string()))?;
    Ok(ExpenseCmd {
        amount: MoneyCents::try_from_major(amount)?,
        description: payload.description.unwrap_or_default(),
        paid_by: payload.paid_by.unwrap_or_default(),
    })
}

pub async fn create(
    State(state): State<ServerState>,
    ExpenseInput(payload): ExpenseInput,
) -> Result<Json<ExpenseSaved>, ServerError> {
    let expense = state.engine.add_expense(expense_cmd(payload)?).await?;

    Ok(Json(ExpenseSaved {
        success: true,
        data: map_expense(expense),
        message: "Expense added successfully".to_string(),
    }))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<ExpenseList>, ServerError> {
    let data = state
        .engine
        .list_expenses()
        .await?
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(ExpenseList {
        success: true,
        data,
    }))
}

pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ServerError>,
    ExpenseInput(payload): ExpenseInput,
) -> Result<Json<ExpenseSaved>, ServerError> {
    let expense = state
        .engine
        .update_expense(id, expense_cmd(payload)?)
        .await?;

    Ok(Json(ExpenseSaved {
        success: true,
        data: map_expense(expense),
        message: "Expense updated successfully".to_string(),
    }))
}

pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, ServerError>,
) -> Result<Json<ExpenseDeleted>, ServerError> {
    state.engine.delete_expense(id).await?;

    Ok(Json(ExpenseDeleted {
        success: true,
        message: "Expense deleted successfully".to_string(),
    }))
}
