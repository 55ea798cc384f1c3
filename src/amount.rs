//! Protect before using missing, zero or negative amount for deposits and withdraws.

use std::{borrow::Borrow, ops::Deref};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represent strictly positive financial amount of money
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create new amount from `num` with `scale` decimal places.
    ///
    /// Zero is rejected the same way as in [`TryFrom<Decimal>`].
    ///
    /// # Panics
    /// When `scale` is greater than 28.
    pub fn new(num: u64, scale: u32) -> Result<Amount, NonPositiveAmountErr> {
        Decimal::from_i128_with_scale(num.into(), scale).try_into()
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Amount must be greater than zero.")]
/// represent error when operation want to move zero, negative or no money at all
pub struct NonPositiveAmountErr;

impl TryFrom<Decimal> for Amount {
    type Error = NonPositiveAmountErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() || value.is_zero() {
            Err(NonPositiveAmountErr)
        } else {
            Ok(Self(value))
        }
    }
}

impl TryFrom<Option<Decimal>> for Amount {
    type Error = NonPositiveAmountErr;
    fn try_from(value: Option<Decimal>) -> Result<Self, Self::Error> {
        value.ok_or(NonPositiveAmountErr)?.try_into()
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <Decimal as Deserialize>::deserialize(deserializer)?;
        Amount::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl From<Amount> for Decimal {
    fn from(this: Amount) -> Self {
        this.0
    }
}

impl Borrow<Decimal> for Amount {
    fn borrow(&self) -> &Decimal {
        &self.0
    }
}

impl Deref for Amount {
    type Target = Decimal;
    fn deref(&self) -> &Self::Target {
        self.borrow()
    }
}
