use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::errors::{CustomerErr, LedgerErr};

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

impl IntoResponse for LedgerErr {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            LedgerErr::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            LedgerErr::CustomerNotFound(_) => (StatusCode::NOT_FOUND, "customer_not_found"),
            LedgerErr::InvalidAmount(_) => (StatusCode::BAD_REQUEST, "invalid_amount"),
            LedgerErr::InvalidInput => (StatusCode::BAD_REQUEST, "invalid_input"),
            LedgerErr::AccountClosed(_) => (StatusCode::BAD_REQUEST, "account_closed"),
            LedgerErr::AlreadyClosed(_) => (StatusCode::BAD_REQUEST, "already_closed"),
            LedgerErr::BalanceOverflow(_) => (StatusCode::BAD_REQUEST, "balance_overflow"),
            LedgerErr::InsufficientFundsOrClosed => {
                (StatusCode::BAD_REQUEST, "insufficient_funds_or_closed")
            }
        };
        json_error(status, code, self.to_string())
    }
}

impl IntoResponse for CustomerErr {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            CustomerErr::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            CustomerErr::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        };
        json_error(status, code, self.to_string())
    }
}
