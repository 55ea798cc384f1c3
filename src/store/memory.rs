use std::{
    collections::BTreeMap,
    sync::{PoisonError, RwLock},
};

use super::{AccountStore, CustomerStore};
use crate::{
    account::Account,
    customer::{Customer, CustomerDetails},
    CustomerID,
};

/// [`AccountStore`] kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<BTreeMap<String, Account>>,
}

impl AccountStore for InMemoryAccountStore {
    fn find_by_account_number(&self, account_number: &str) -> Option<Account> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        accounts.get(account_number).cloned()
    }

    fn save(&self, account: Account) -> Account {
        let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);
        accounts.insert(account.account_number().to_owned(), account.clone());
        account
    }

    fn find_all(&self) -> Vec<Account> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        accounts.values().cloned().collect()
    }
}

#[derive(Debug, Default)]
struct Customers {
    last_id: CustomerID,
    by_id: BTreeMap<CustomerID, Customer>,
}

/// [`CustomerStore`] kept in process memory. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    inner: RwLock<Customers>,
}

impl CustomerStore for InMemoryCustomerStore {
    fn find_by_id(&self, id: CustomerID) -> Option<Customer> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.by_id.get(&id).cloned()
    }

    fn find_all(&self) -> Vec<Customer> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.by_id.values().cloned().collect()
    }

    fn insert(&self, details: CustomerDetails) -> Customer {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.last_id += 1;
        let customer = Customer {
            id: inner.last_id,
            details,
        };
        inner.by_id.insert(customer.id, customer.clone());
        customer
    }

    fn save(&self, customer: Customer) -> Customer {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.last_id = inner.last_id.max(customer.id);
        inner.by_id.insert(customer.id, customer.clone());
        customer
    }

    fn delete_by_id(&self, id: CustomerID) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.by_id.remove(&id).is_some()
    }
}
