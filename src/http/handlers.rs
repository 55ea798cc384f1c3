use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::error;

use super::{errors::json_error, AppState};
use crate::{
    account::AccountType,
    csv::summarize_accounts,
    customer::CustomerDraft,
    errors::LedgerErr,
    CustomerID,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    customer_id: Option<CustomerID>,
    account_type: Option<String>,
}

impl CreateAccountRequest {
    fn validate(self) -> Result<(CustomerID, AccountType), String> {
        let mut errors = Vec::new();

        if self.customer_id.is_none() {
            errors.push("Customer ID cannot be null".to_owned());
        }
        let account_type = match self.account_type.as_deref().map(str::parse::<AccountType>) {
            None => {
                errors.push("Account type cannot be null".to_owned());
                None
            }
            Some(Err(e)) => {
                errors.push(e.to_string());
                None
            }
            Some(Ok(t)) => Some(t),
        };

        match (self.customer_id, account_type) {
            (Some(id), Some(t)) => Ok((id, t)),
            _ => Err(errors.join(" ")),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashParams {
    account_number: Option<String>,
    amount: Option<String>,
}

impl CashParams {
    fn into_parts(self) -> Result<(String, Option<Decimal>), Response> {
        let account_number = self.account_number.ok_or_else(|| {
            json_error(
                StatusCode::BAD_REQUEST,
                "missing_parameter",
                "Required parameter 'accountNumber' is not present.",
            )
        })?;
        // unparseable amount is the same as no amount
        let amount = self.amount.and_then(|a| a.trim().parse().ok());
        Ok((account_number, amount))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseParams {
    account_number: Option<String>,
}

fn bad_body(rejection: JsonRejection) -> Response {
    json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
}

pub async fn status() -> &'static str {
    "Server is up and running!"
}

pub async fn create_customer(
    State(state): State<AppState>,
    body: Result<Json<CustomerDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_body(rejection),
    };

    match state.customers.create(draft) {
        Ok(customer) => (StatusCode::CREATED, Json(customer)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_customer(State(state): State<AppState>, Path(id): Path<CustomerID>) -> Response {
    match state.customers.get(id) {
        Some(customer) => Json(customer).into_response(),
        None => json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("Customer with id {id} not found."),
        ),
    }
}

pub async fn get_customers(State(state): State<AppState>) -> Response {
    let customers = state.customers.list();
    if customers.is_empty() {
        return json_error(StatusCode::NOT_FOUND, "not_found", "No customers found");
    }
    Json(customers).into_response()
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerID>,
    body: Result<Json<CustomerDraft>, JsonRejection>,
) -> Response {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_body(rejection),
    };

    match state.customers.update(id, draft) {
        Ok(customer) => Json(customer).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerID>,
) -> Response {
    match state.customers.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_account(
    State(state): State<AppState>,
    body: Result<Json<CreateAccountRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_body(rejection),
    };
    let (customer_id, account_type) = match request.validate() {
        Ok(parts) => parts,
        Err(message) => return json_error(StatusCode::BAD_REQUEST, "validation_error", message),
    };

    match state.ledger.open(customer_id, account_type) {
        Ok(account) => (StatusCode::CREATED, Json(account)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn deposit_cash(
    State(state): State<AppState>,
    Query(params): Query<CashParams>,
) -> Response {
    let (account_number, amount) = match params.into_parts() {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    match state.ledger.deposit(&account_number, amount) {
        Ok(account) => Json(account).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn withdraw_cash(
    State(state): State<AppState>,
    Query(params): Query<CashParams>,
) -> Response {
    let (account_number, amount) = match params.into_parts() {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    match state.ledger.withdraw(&account_number, amount) {
        Ok(account) => Json(account).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn close_account(
    State(state): State<AppState>,
    Query(params): Query<CloseParams>,
) -> Response {
    match state.ledger.close(params.account_number.as_deref()) {
        Ok(account) => Json(account).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_account(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Response {
    match state.ledger.inquire(&account_number) {
        Some(account) => Json(account).into_response(),
        None => LedgerErr::NotFound(account_number).into_response(),
    }
}

pub async fn export_accounts(State(state): State<AppState>) -> Response {
    let accounts = tokio_stream::iter(state.ledger.accounts());
    let mut body = Vec::with_capacity(8192);

    if let Err(e) = summarize_accounts(accounts, &mut body).await {
        error!(error = %e, "account export failed");
        return json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "export_failed",
            "could not export accounts",
        );
    }

    ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], body).into_response()
}
