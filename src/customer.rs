//! Customers owning bank accounts, and their validated management

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{errors::CustomerErr, store::CustomerStore, CustomerID};

/// Validated personal details of a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
}

/// Stored customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// assigned by [`CustomerStore::insert`]
    pub id: CustomerID,
    #[serde(flatten)]
    #[allow(missing_docs)]
    pub details: CustomerDetails,
}

/// Unvalidated customer as it comes from a request. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[allow(missing_docs)]
pub struct CustomerDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl CustomerDraft {
    /// Check every field and report all violations at once
    pub fn validate(self) -> Result<CustomerDetails, CustomerErr> {
        let mut errors: Vec<&'static str> = Vec::new();

        let name = self.name.filter(|n| !n.trim().is_empty());
        match &name {
            None => errors.push("Name is required."),
            Some(n) if !is_valid_name(n) => {
                errors.push("Name must contain only alphabets and spaces.")
            }
            Some(_) => (),
        }

        let email = self.email.filter(|e| !e.trim().is_empty());
        match &email {
            None => errors.push("Email is required."),
            Some(e) if !is_valid_email(e) => errors.push("Please enter a valid email address."),
            Some(_) => (),
        }

        let phone = self.phone.filter(|p| !p.trim().is_empty());
        match &phone {
            None => errors.push("Phone number is required."),
            Some(p) if !is_valid_phone(p) => {
                errors.push("Phone number must be between 9 and 15 digits.")
            }
            Some(_) => (),
        }

        if self.date_of_birth.is_none() {
            errors.push("Date of birth is required.");
        }

        match (name, email, phone, self.date_of_birth) {
            (Some(name), Some(email), Some(phone), Some(date_of_birth)) if errors.is_empty() => {
                Ok(CustomerDetails {
                    name,
                    email,
                    phone,
                    date_of_birth,
                })
            }
            _ => Err(CustomerErr::Validation(errors.join(" "))),
        }
    }
}

fn is_valid_name(name: &str) -> bool {
    name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

// local@host.tld with a purely alphabetic tld of at least two letters
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    let host_ok = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    let tld_ok = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());

    local_ok && host_ok && tld_ok
}

fn is_valid_phone(phone: &str) -> bool {
    (9..=15).contains(&phone.len()) && phone.chars().all(|c| c.is_ascii_digit())
}

/// Create, read, update and delete customers kept in `S`
#[derive(Debug, Clone)]
pub struct CustomerService<S> {
    store: S,
}

impl<S: CustomerStore> CustomerService<S> {
    #[allow(missing_docs)]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate `draft` and store it under a fresh id
    pub fn create(&self, draft: CustomerDraft) -> Result<Customer, CustomerErr> {
        let details = draft.validate()?;
        let customer = self.store.insert(details);
        debug!(customer = customer.id, "customer created");
        Ok(customer)
    }

    #[allow(missing_docs)]
    pub fn get(&self, id: CustomerID) -> Option<Customer> {
        self.store.find_by_id(id)
    }

    /// All customers ordered by id
    pub fn list(&self) -> Vec<Customer> {
        self.store.find_all()
    }

    /// Replace every detail of existing customer `id`
    pub fn update(&self, id: CustomerID, draft: CustomerDraft) -> Result<Customer, CustomerErr> {
        let mut customer = self.store.find_by_id(id).ok_or(CustomerErr::NotFound(id))?;
        customer.details = draft.validate()?;
        let customer = self.store.save(customer);
        debug!(customer = id, "customer updated");
        Ok(customer)
    }

    /// Remove customer `id`. Accounts of the customer are kept.
    pub fn delete(&self, id: CustomerID) -> Result<(), CustomerErr> {
        if self.store.delete_by_id(id) {
            debug!(customer = id, "customer deleted");
            Ok(())
        } else {
            Err(CustomerErr::NotFound(id))
        }
    }
}

#[cfg(test)]
pub(crate) fn test_draft() -> CustomerDraft {
    CustomerDraft {
        name: Some("John Doe".into()),
        email: Some("john.doe@example.com".into()),
        phone: Some("0123456789".into()),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
    }
}
