//! Account types and the rules that move money in and out of them
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub(crate) mod balance;
pub(crate) mod bank_account;
pub(crate) mod ledger;

pub use bank_account::Account;
pub use ledger::Ledger;

/// Prefix of every generated account number
pub const ACCOUNT_NUMBER_PREFIX: &str = "AC";

/// Lifecycle of an account. The only transition is `Active -> Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AccountStatus {
    /// money can be moved
    Active,
    /// balance is frozen for good
    Closed,
}

impl AccountStatus {
    /// Marker used on the wire and in exports
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Closed => "Closed",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown account status '{0}'")]
/// status string is neither `Active` nor `Closed`
pub struct UnknownStatusErr(String);

// Stored markers are matched ignoring case.
impl FromStr for AccountStatus {
    type Err = UnknownStatusErr;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("active") {
            Ok(AccountStatus::Active)
        } else if s.eq_ignore_ascii_case("closed") {
            Ok(AccountStatus::Closed)
        } else {
            Err(UnknownStatusErr(s.to_owned()))
        }
    }
}

impl TryFrom<String> for AccountStatus {
    type Error = UnknownStatusErr;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountStatus> for String {
    fn from(status: AccountStatus) -> Self {
        status.as_str().to_owned()
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of account, fixed when the account is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum AccountType {
    Saving,
    Current,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Account type must be either 'Saving' or 'Current'")]
/// account type outside of the allowed set
pub struct InvalidAccountTypeErr;

impl FromStr for AccountType {
    type Err = InvalidAccountTypeErr;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Saving" => Ok(AccountType::Saving),
            "Current" => Ok(AccountType::Current),
            _ => Err(InvalidAccountTypeErr),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Saving => f.write_str("Saving"),
            AccountType::Current => f.write_str("Current"),
        }
    }
}

/// New random account number: [`ACCOUNT_NUMBER_PREFIX`] and 8 upper-case hex digits
pub fn generate_account_number() -> String {
    let token = uuid::Uuid::new_v4().simple().to_string();
    format!("{ACCOUNT_NUMBER_PREFIX}{}", token[..8].to_uppercase())
}
