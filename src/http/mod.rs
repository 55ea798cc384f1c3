//! HTTP API under `/api/bank`

use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    account::Ledger,
    customer::CustomerService,
    store::{AccountStore, CustomerStore, InMemoryAccountStore, InMemoryCustomerStore},
};

mod errors;
mod handlers;

/// Ledger wired to type erased stores
pub type BankLedger = Ledger<Arc<dyn AccountStore>, Arc<dyn CustomerStore>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<BankLedger>,
    customers: Arc<CustomerService<Arc<dyn CustomerStore>>>,
}

impl AppState {
    /// Ledger and customer service sharing the same customer store
    pub fn new(accounts: Arc<dyn AccountStore>, customers: Arc<dyn CustomerStore>) -> Self {
        Self {
            ledger: Arc::new(Ledger::new(accounts, customers.clone())),
            customers: Arc::new(CustomerService::new(customers)),
        }
    }

    /// State backed by empty in-memory stores
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryAccountStore::default()),
            Arc::new(InMemoryCustomerStore::default()),
        )
    }
}

/// Build the full router: API routes, CORS for `cors_origin` and request tracing
pub fn router(state: AppState, cors_origin: &str) -> anyhow::Result<Router> {
    let origin: HeaderValue = cors_origin
        .parse()
        .with_context(|| format!("invalid CORS origin '{cors_origin}'"))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/status", get(handlers::status))
        // customers
        .route("/createCustomer", post(handlers::create_customer))
        .route("/getCustomer/:id", get(handlers::get_customer))
        .route("/getCustomers", get(handlers::get_customers))
        .route("/updateCustomer/:id", put(handlers::update_customer))
        .route("/deleteCustomer/:id", delete(handlers::delete_customer))
        // accounts
        .route("/createAccount", post(handlers::create_account))
        .route("/depositCash", post(handlers::deposit_cash))
        .route("/withdrawCash", post(handlers::withdraw_cash))
        .route("/closeAccount", post(handlers::close_account))
        .route("/getAccount/:account_number", get(handlers::get_account))
        .route("/exportAccounts", get(handlers::export_accounts));

    Ok(Router::new()
        .nest("/api/bank", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
