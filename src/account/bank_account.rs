use super::{balance::Balance, AccountStatus, AccountType};
use crate::{amount::Amount, errors::LedgerErr, CustomerID};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Bank account owned by a single customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    account_number: String,
    balance: Balance,
    status: AccountStatus,
    account_type: AccountType,
    customer_id: CustomerID,
}

impl Account {
    /// Create new empty [`AccountStatus::Active`] account
    pub fn new(account_number: String, customer_id: CustomerID, account_type: AccountType) -> Self {
        Self {
            account_number,
            balance: Default::default(),
            status: AccountStatus::Active,
            account_type,
            customer_id,
        }
    }

    #[cfg(test)]
    /// Active account `AC12345678` of customer 1 with balance `balance`
    pub fn new_test_account(balance: Decimal) -> Self {
        let mut a = Account::new("AC12345678".to_owned(), 1, AccountType::Saving);
        a.balance = balance.try_into().unwrap();
        a
    }

    #[cfg(test)]
    /// Force `status` without going through the ledger rules
    pub fn set_status(&mut self, status: AccountStatus) {
        self.status = status;
    }

    /// try to increase balance
    ///
    /// Closed account keeps its balance untouched.
    pub(crate) fn record_deposit(&mut self, amount: &Amount) -> Result<(), LedgerErr> {
        if self.status == AccountStatus::Closed {
            return Err(LedgerErr::AccountClosed(self.account_number.clone()));
        }

        self.balance
            .deposit(amount)
            .map_err(|_| LedgerErr::BalanceOverflow(self.account_number.clone()))
    }

    /// try to decrease balance
    ///
    /// Fails the same way for closed account and for not enough money.
    pub(crate) fn record_withdraw(&mut self, amount: &Amount) -> Result<(), LedgerErr> {
        if self.status != AccountStatus::Active {
            return Err(LedgerErr::InsufficientFundsOrClosed);
        }

        self.balance
            .try_withdraw(amount)
            .map_err(|_| LedgerErr::InsufficientFundsOrClosed)
    }

    pub(crate) fn record_close(&mut self) -> Result<(), LedgerErr> {
        if self.status == AccountStatus::Closed {
            return Err(LedgerErr::AlreadyClosed(self.account_number.clone()));
        }

        self.status = AccountStatus::Closed;
        Ok(())
    }
}

impl Account {
    /// unique account number
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// current amount of money on account
    pub fn balance(&self) -> Decimal {
        self.balance.available()
    }

    #[allow(missing_docs)]
    pub fn status(&self) -> AccountStatus {
        self.status
    }

    #[allow(missing_docs)]
    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    /// owner of this account
    pub fn customer_id(&self) -> CustomerID {
        self.customer_id
    }

    /// is account closed
    pub fn is_closed(&self) -> bool {
        self.status == AccountStatus::Closed
    }
}
