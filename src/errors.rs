//! Possible errors

use crate::{amount::NonPositiveAmountErr, CustomerID};
use thiserror::Error;

/// Group errors for account balance
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    #[error("not enough funds available for this operation")]
    NotEnoughAvailableFunds,
    #[error("balance would exceed the largest representable amount")]
    Overflow,
    #[error("balance cannot be negative")]
    Negative,
}

/// Group all errors that can occur within ledger rules
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerErr {
    #[error("Account with number '{0}' not found")]
    NotFound(String),
    #[error("Customer with ID {0} not found")]
    CustomerNotFound(CustomerID),
    #[error(transparent)]
    InvalidAmount(#[from] NonPositiveAmountErr),
    #[error("Account number cannot be null or empty")]
    InvalidInput,
    #[error("Account with number '{0}' is closed")]
    AccountClosed(String),
    #[error("Account with number '{0}' is already closed")]
    AlreadyClosed(String),
    #[error("Deposit would overflow the balance of account with number '{0}'")]
    BalanceOverflow(String),
    /// Withdraw does not tell apart a closed account from a too small balance
    #[error("Insufficient balance or account is closed.")]
    InsufficientFundsOrClosed,
}

/// Errors of customer management
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomerErr {
    /// No customer stored under this id
    #[error("Customer with ID '{0}' not found")]
    NotFound(CustomerID),
    /// Every violated field rule, space separated
    #[error("{0}")]
    Validation(String),
}
