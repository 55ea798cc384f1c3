use crate::{amount::Amount, errors::BalanceErr};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents current account balance. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Balance(Decimal);

impl Balance {
    /// Balance is left unchanged when the sum does not fit in [`Decimal`].
    pub fn deposit(&mut self, amount: &Amount) -> Result<(), BalanceErr> {
        self.0 = self
            .0
            .checked_add(**amount)
            .ok_or(BalanceErr::Overflow)?;
        Ok(())
    }

    pub fn try_withdraw(&mut self, amount: &Amount) -> Result<(), BalanceErr> {
        if self.0 < **amount {
            return Err(BalanceErr::NotEnoughAvailableFunds);
        }

        self.0 -= **amount;
        debug_assert!(self.0 >= Decimal::ZERO);
        Ok(())
    }

    pub fn available(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Balance {
    type Error = BalanceErr;
    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            Err(BalanceErr::Negative)
        } else {
            Ok(Self(value))
        }
    }
}

impl From<Balance> for Decimal {
    fn from(this: Balance) -> Self {
        this.0
    }
}

#[cfg(test)]
mod test {
    use super::Balance;
    use crate::{amount::Amount, errors::BalanceErr};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[test]
    fn withdraw_whole_balance() {
        let mut b = Balance::try_from(dec!(30.5)).unwrap();
        b.try_withdraw(&Amount::new(305, 1).unwrap()).unwrap();
        assert_eq!(b.available(), dec!(0));
    }

    #[test]
    fn preventing_debt_withdraw() {
        let mut b = Balance::default();
        b.deposit(&Amount::new(30, 0).unwrap()).unwrap();

        let e = b.try_withdraw(&Amount::new(50, 0).unwrap()).unwrap_err();
        assert_eq!(e, BalanceErr::NotEnoughAvailableFunds);
        assert_eq!(b.available(), dec!(30));
    }

    #[test]
    fn deposit_overflow_keeps_balance() {
        let mut b = Balance::try_from(Decimal::MAX).unwrap();

        let e = b.deposit(&Amount::new(1, 0).unwrap()).unwrap_err();
        assert_eq!(e, BalanceErr::Overflow);
        assert_eq!(b.available(), Decimal::MAX);
    }

    #[test]
    fn negative_balance_is_rejected() {
        assert_eq!(Balance::try_from(dec!(-5)), Err(BalanceErr::Negative));
        assert_eq!(Balance::try_from(dec!(-0.00)).unwrap().available(), dec!(0));

        serde_json::from_str::<Balance>("\"-5\"").unwrap_err();
        let b: Balance = serde_json::from_str("\"12.5\"").unwrap();
        assert_eq!(b.available(), dec!(12.5));
    }
}
