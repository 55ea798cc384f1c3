//! csv export of account states

use csv_async::{AsyncWriterBuilder, Terminator};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWrite;
use tokio_stream::{Stream, StreamExt};

use crate::{
    account::{Account, AccountStatus, AccountType},
    CustomerID,
};

/// summary of a single account state
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct AccountSummary {
    pub account: String,
    pub customer: CustomerID,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub status: AccountStatus,
    pub balance: Decimal,
}

impl From<&Account> for AccountSummary {
    fn from(acc: &Account) -> Self {
        let rp = 4; // round precision
        Self {
            account: acc.account_number().to_owned(),
            customer: acc.customer_id(),
            account_type: acc.account_type(),
            status: acc.status(),
            balance: acc.balance().round_dp(rp),
        }
    }
}

/// read items from `in_stream` and save them as [`AccountSummary`] into `wr`. Headers will be
/// included automatically. Terminator is `\r\n`.
pub async fn summarize_accounts(
    in_stream: impl Stream<Item = Account> + Unpin,
    wr: impl AsyncWrite + Unpin,
) -> anyhow::Result<()> {
    let mut in_stream = in_stream;

    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);

    let mut wr = builder.create_serializer(wr);

    while let Some(acc) = in_stream.next().await {
        let acc_summary = AccountSummary::from(&acc);
        wr.serialize(acc_summary).await?;
    }

    wr.flush().await?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::summarize_accounts;
    use crate::account::{Account, AccountStatus};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn ser_output_format() -> anyhow::Result<()> {
        let mut closed = Account::new_test_account(dec!(0.123456));
        closed.set_status(AccountStatus::Closed);
        let in_stream = tokio_stream::iter(vec![Account::new_test_account(dec!(150.0)), closed]);
        let output = Vec::with_capacity(8192);

        let mut wr = tokio::io::BufWriter::new(output);

        summarize_accounts(in_stream, &mut wr).await?;

        let expected = "account,customer,type,status,balance\r\n\
                        AC12345678,1,Saving,Active,150.0\r\n\
                        AC12345678,1,Saving,Closed,0.1235\r\n";

        let output_str = String::from_utf8(wr.into_inner()).unwrap();

        assert_eq!(output_str, expected);

        Ok(())
    }

    #[tokio::test]
    async fn empty_stream_writes_nothing() -> anyhow::Result<()> {
        let mut output = Vec::new();
        summarize_accounts(tokio_stream::iter(Vec::<Account>::new()), &mut output).await?;
        assert!(output.is_empty());
        Ok(())
    }
}
