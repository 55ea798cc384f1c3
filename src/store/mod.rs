//! Persistence facades the ledger rules and customer service are written against
use std::sync::Arc;

use crate::{
    account::Account,
    customer::{Customer, CustomerDetails},
    CustomerID,
};

mod memory;

pub use memory::{InMemoryAccountStore, InMemoryCustomerStore};

/// Accounts keyed by account number
///
/// Every call is a separate read or write; nothing is cached or locked between calls.
pub trait AccountStore: Send + Sync {
    /// current state of account, if any
    fn find_by_account_number(&self, account_number: &str) -> Option<Account>;
    /// insert or replace account with the same number, return what was stored
    fn save(&self, account: Account) -> Account;
    /// every account ordered by account number
    fn find_all(&self) -> Vec<Account>;
}

/// Customers keyed by store assigned id
pub trait CustomerStore: Send + Sync {
    #[allow(missing_docs)]
    fn find_by_id(&self, id: CustomerID) -> Option<Customer>;
    /// every customer ordered by id
    fn find_all(&self) -> Vec<Customer>;
    /// store new customer under next free id
    fn insert(&self, details: CustomerDetails) -> Customer;
    /// replace existing customer with the same id
    fn save(&self, customer: Customer) -> Customer;
    /// `false` when there was nothing to delete
    fn delete_by_id(&self, id: CustomerID) -> bool;
}

impl<T: AccountStore + ?Sized> AccountStore for Arc<T> {
    fn find_by_account_number(&self, account_number: &str) -> Option<Account> {
        (**self).find_by_account_number(account_number)
    }

    fn save(&self, account: Account) -> Account {
        (**self).save(account)
    }

    fn find_all(&self) -> Vec<Account> {
        (**self).find_all()
    }
}

impl<T: CustomerStore + ?Sized> CustomerStore for Arc<T> {
    fn find_by_id(&self, id: CustomerID) -> Option<Customer> {
        (**self).find_by_id(id)
    }

    fn find_all(&self) -> Vec<Customer> {
        (**self).find_all()
    }

    fn insert(&self, details: CustomerDetails) -> Customer {
        (**self).insert(details)
    }

    fn save(&self, customer: Customer) -> Customer {
        (**self).save(customer)
    }

    fn delete_by_id(&self, id: CustomerID) -> bool {
        (**self).delete_by_id(id)
    }
}
