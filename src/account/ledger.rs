//! Rules deciding whether money may move in or out of an account, or whether it may be closed.
//!
//! Every operation reads the account, decides, and writes it back as separate store calls.
//! Two concurrent operations on the same account can therefore overwrite each other.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::{generate_account_number, Account, AccountType};
use crate::{
    amount::Amount,
    errors::LedgerErr,
    store::{AccountStore, CustomerStore},
    CustomerID,
};

/// Ledger rules over accounts kept in `A`, owned by customers kept in `C`
#[derive(Debug, Clone)]
pub struct Ledger<A, C> {
    accounts: A,
    customers: C,
}

impl<A: AccountStore, C: CustomerStore> Ledger<A, C> {
    #[allow(missing_docs)]
    pub fn new(accounts: A, customers: C) -> Self {
        Self {
            accounts,
            customers,
        }
    }

    /// Open new empty active account for existing customer
    pub fn open(
        &self,
        customer_id: CustomerID,
        account_type: AccountType,
    ) -> Result<Account, LedgerErr> {
        if self.customers.find_by_id(customer_id).is_none() {
            warn!(customer = customer_id, "open rejected: no such customer");
            return Err(LedgerErr::CustomerNotFound(customer_id));
        }

        let account_number = loop {
            let candidate = generate_account_number();
            if self.accounts.find_by_account_number(&candidate).is_none() {
                break candidate;
            }
        };

        let account = self
            .accounts
            .save(Account::new(account_number, customer_id, account_type));
        debug!(
            account = account.account_number(),
            customer = customer_id,
            %account_type,
            "account opened"
        );
        Ok(account)
    }

    /// Add `amount` to active account balance
    pub fn deposit(
        &self,
        account_number: &str,
        amount: Option<Decimal>,
    ) -> Result<Account, LedgerErr> {
        let amount = Amount::try_from(amount)?;
        let mut account = self.find(account_number)?;

        account
            .record_deposit(&amount)
            .inspect_err(|e| warn!(account = account_number, %e, "deposit rejected"))?;

        let account = self.accounts.save(account);
        debug!(
            account = account_number,
            amount = %Decimal::from(amount),
            balance = %account.balance(),
            "deposit"
        );
        Ok(account)
    }

    /// Take `amount` from active account having at least that much
    pub fn withdraw(
        &self,
        account_number: &str,
        amount: Option<Decimal>,
    ) -> Result<Account, LedgerErr> {
        let amount = Amount::try_from(amount)?;
        let mut account = self.find(account_number)?;

        account
            .record_withdraw(&amount)
            .inspect_err(|e| warn!(account = account_number, %e, "withdraw rejected"))?;

        let account = self.accounts.save(account);
        debug!(
            account = account_number,
            amount = %Decimal::from(amount),
            balance = %account.balance(),
            "withdraw"
        );
        Ok(account)
    }

    /// Close active account. Balance stays as it is.
    pub fn close(&self, account_number: Option<&str>) -> Result<Account, LedgerErr> {
        let account_number = account_number
            .filter(|n| !n.is_empty())
            .ok_or(LedgerErr::InvalidInput)?;
        let mut account = self.find(account_number)?;

        account
            .record_close()
            .inspect_err(|e| warn!(account = account_number, %e, "close rejected"))?;

        let account = self.accounts.save(account);
        debug!(account = account_number, "account closed");
        Ok(account)
    }

    /// Current state of account. Absence is not an error here.
    pub fn inquire(&self, account_number: &str) -> Option<Account> {
        self.accounts.find_by_account_number(account_number)
    }

    /// Every account ordered by account number
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.find_all()
    }

    fn find(&self, account_number: &str) -> Result<Account, LedgerErr> {
        self.accounts
            .find_by_account_number(account_number)
            .ok_or_else(|| LedgerErr::NotFound(account_number.to_owned()))
    }
}

#[cfg(test)]
mod test {
    use super::Ledger;
    use crate::{
        account::{Account, AccountStatus, AccountType},
        amount::NonPositiveAmountErr,
        customer::test_draft,
        errors::LedgerErr,
        store::{AccountStore, CustomerStore, InMemoryAccountStore, InMemoryCustomerStore},
    };
    use rand::Rng;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    /// Counts lookups to prove validation happens before the store is touched
    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryAccountStore,
        lookups: AtomicUsize,
        saves: AtomicUsize,
    }

    impl AccountStore for CountingStore {
        fn find_by_account_number(&self, account_number: &str) -> Option<Account> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_account_number(account_number)
        }

        fn save(&self, account: Account) -> Account {
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save(account)
        }

        fn find_all(&self) -> Vec<Account> {
            self.inner.find_all()
        }
    }

    type TestLedger = Ledger<Arc<CountingStore>, Arc<InMemoryCustomerStore>>;

    fn ledger_with(account: Option<Account>) -> (TestLedger, Arc<CountingStore>) {
        let store = Arc::new(CountingStore::default());
        if let Some(a) = account {
            store.inner.save(a);
        }
        let ledger = Ledger::new(store.clone(), Arc::new(InMemoryCustomerStore::default()));
        (ledger, store)
    }

    fn closed_account(balance: Decimal) -> Account {
        let mut a = Account::new_test_account(balance);
        a.set_status(AccountStatus::Closed);
        a
    }

    fn stored_balance(store: &CountingStore) -> Decimal {
        store.inner.find_by_account_number("AC12345678").unwrap().balance()
    }

    #[test]
    fn deposit_money() {
        let (ledger, store) = ledger_with(Some(Account::new_test_account(dec!(100.0))));

        let a = ledger.deposit("AC12345678", Some(dec!(50.0))).unwrap();
        assert_eq!(a.balance(), dec!(150.0));
        assert_eq!(a.status(), AccountStatus::Active);
        assert_eq!(stored_balance(&store), dec!(150.0));
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn withdraw_money() {
        let (ledger, store) = ledger_with(Some(Account::new_test_account(dec!(100.0))));

        let a = ledger.withdraw("AC12345678", Some(dec!(50.0))).unwrap();
        assert_eq!(a.balance(), dec!(50.0));
        assert_eq!(stored_balance(&store), dec!(50.0));
    }

    #[test]
    fn preventing_debt_withdraw() {
        let (ledger, store) = ledger_with(Some(Account::new_test_account(dec!(30.0))));

        let e = ledger.withdraw("AC12345678", Some(dec!(50.0))).unwrap_err();
        assert_eq!(e, LedgerErr::InsufficientFundsOrClosed);
        assert_eq!(e.to_string(), "Insufficient balance or account is closed.");
        assert_eq!(stored_balance(&store), dec!(30.0));
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn invalid_amount_is_rejected_before_lookup() {
        let (ledger, store) = ledger_with(Some(Account::new_test_account(dec!(100))));

        for amount in [None, Some(dec!(0)), Some(dec!(-1.0))] {
            let e = ledger.deposit("AC12345678", amount).unwrap_err();
            assert_eq!(e, LedgerErr::InvalidAmount(NonPositiveAmountErr));
            assert_eq!(e.to_string(), "Amount must be greater than zero.");

            let e = ledger.withdraw("AC12345678", amount).unwrap_err();
            assert_eq!(e, LedgerErr::InvalidAmount(NonPositiveAmountErr));
        }

        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
        assert_eq!(stored_balance(&store), dec!(100));
    }

    #[test]
    fn unknown_account() {
        let (ledger, _) = ledger_with(None);

        let e = ledger.deposit("AC12345678", Some(dec!(50))).unwrap_err();
        assert_eq!(e.to_string(), "Account with number 'AC12345678' not found");

        let e = ledger.withdraw("AC12345678", Some(dec!(50))).unwrap_err();
        assert_eq!(e, LedgerErr::NotFound("AC12345678".into()));

        let e = ledger.close(Some("AC12345678")).unwrap_err();
        assert_eq!(e, LedgerErr::NotFound("AC12345678".into()));

        assert!(ledger.inquire("AC12345678").is_none());
    }

    #[test]
    fn deposit_overflow_is_rejected() {
        let (ledger, store) = ledger_with(Some(Account::new_test_account(Decimal::MAX)));

        let e = ledger.deposit("AC12345678", Some(Decimal::ONE)).unwrap_err();
        assert_eq!(e, LedgerErr::BalanceOverflow("AC12345678".into()));
        assert_eq!(stored_balance(&store), Decimal::MAX);
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn closed_account_keeps_balance() {
        let (ledger, store) = ledger_with(Some(closed_account(dec!(100))));

        let e = ledger.deposit("AC12345678", Some(dec!(50))).unwrap_err();
        assert_eq!(e.to_string(), "Account with number 'AC12345678' is closed");

        let e = ledger.withdraw("AC12345678", Some(dec!(50))).unwrap_err();
        assert_eq!(e, LedgerErr::InsufficientFundsOrClosed);

        assert_eq!(stored_balance(&store), dec!(100));
    }

    #[test]
    fn close_once() {
        let (ledger, store) = ledger_with(Some(Account::new_test_account(dec!(100))));

        let a = ledger.close(Some("AC12345678")).unwrap();
        assert_eq!(a.status(), AccountStatus::Closed);
        assert_eq!(a.balance(), dec!(100));

        let e = ledger.close(Some("AC12345678")).unwrap_err();
        assert_eq!(e, LedgerErr::AlreadyClosed("AC12345678".into()));
        assert_eq!(e.to_string(), "Account with number 'AC12345678' is already closed");

        assert!(ledger.inquire("AC12345678").unwrap().is_closed());
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn close_without_number_is_rejected_before_lookup() {
        let (ledger, store) = ledger_with(Some(Account::new_test_account(dec!(100))));

        assert_eq!(ledger.close(None), Err(LedgerErr::InvalidInput));
        assert_eq!(ledger.close(Some("")), Err(LedgerErr::InvalidInput));
        assert_eq!(
            LedgerErr::InvalidInput.to_string(),
            "Account number cannot be null or empty"
        );
        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn open_for_known_customer_only() {
        let customers = Arc::new(InMemoryCustomerStore::default());
        let ledger = Ledger::new(Arc::new(InMemoryAccountStore::default()), customers.clone());

        let e = ledger.open(1, AccountType::Saving).unwrap_err();
        assert_eq!(e.to_string(), "Customer with ID 1 not found");

        let customer = customers.insert(test_draft().validate().unwrap());
        let a = ledger.open(customer.id, AccountType::Current).unwrap();

        assert!(a.account_number().starts_with("AC"));
        assert_eq!(a.balance(), Decimal::ZERO);
        assert_eq!(a.status(), AccountStatus::Active);
        assert_eq!(a.account_type(), AccountType::Current);
        assert_eq!(a.customer_id(), customer.id);
        assert_eq!(ledger.inquire(a.account_number()), Some(a));
    }

    #[test]
    fn deposit_then_withdraw_restores_balance() {
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let start = Decimal::new(rng.gen_range(0..1_000_000), 2);
            let x = Decimal::new(rng.gen_range(1..1_000_000), rng.gen_range(0..5));
            let (ledger, _) = ledger_with(Some(Account::new_test_account(start)));

            ledger.deposit("AC12345678", Some(x)).unwrap();
            let a = ledger.withdraw("AC12345678", Some(x)).unwrap();
            assert_eq!(a.balance(), start);
        }
    }

    #[test]
    fn withdraw_never_goes_negative() {
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let balance = Decimal::new(rng.gen_range(0..10_000), 2);
            let amount = Decimal::new(rng.gen_range(1..10_000), 2);
            let (ledger, store) = ledger_with(Some(Account::new_test_account(balance)));

            match ledger.withdraw("AC12345678", Some(amount)) {
                Ok(a) => {
                    assert!(balance >= amount);
                    assert_eq!(a.balance(), balance - amount);
                }
                Err(e) => {
                    assert!(balance < amount);
                    assert_eq!(e, LedgerErr::InsufficientFundsOrClosed);
                    assert_eq!(stored_balance(&store), balance);
                }
            }
        }
    }
}
