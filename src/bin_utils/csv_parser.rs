use std::io::Read;

use crate::{amount::Amount, command::OperationKind, processor::AccountId};
use csv::{DeserializeRecordsIntoIter, Trim};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub account: AccountId,
    pub amount: Option<Amount>,
    pub destination: Option<AccountId>,
}

/// Parses operation list in CSV format, yielding each row with its line number.
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, Operation>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<Operation>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_rows_with_optional_fields() {
        let input = "type, account, amount, destination\n\
                     deposit, 1, 10.5\n\
                     transfer, 1, 6, 2\n\
                     withdrawal, 2, ,\n\
                     deposit, 3, 0.12345678901234567890123\n\
                     deposit, 3, 18446744073709551616\n";
        let rows: Vec<_> = CsvOperationParser::new(input.as_bytes())
            .map(|(line, row)| (line, row.unwrap()))
            .collect();
        assert_eq!(rows.len(), 5);

        let (line, deposit) = &rows[0];
        assert_eq!(*line, 2);
        assert_eq!(deposit.kind, OperationKind::Deposit);
        assert_eq!(deposit.account, 1);
        assert_eq!(deposit.amount, Some(Amount::new(dec!(10.5))));
        assert_eq!(deposit.destination, None);

        let (_, transfer) = &rows[1];
        assert_eq!(transfer.kind, OperationKind::Transfer);
        assert_eq!(transfer.destination, Some(2));

        let (_, withdrawal) = &rows[2];
        assert_eq!(withdrawal.amount, None);

        // amounts are read from their text, never through a float or an integer
        let (_, fraction) = &rows[3];
        assert_eq!(
            fraction.amount,
            Some(Amount::new(dec!(0.12345678901234567890123)))
        );
        assert_eq!(
            fraction.amount.unwrap().to_string(),
            "0.12345678901234567890123"
        );
        let (_, large) = &rows[4];
        assert_eq!(
            large.amount.unwrap().to_string(),
            "18446744073709551616"
        );
    }

    #[test]
    fn malformed_row_is_reported() {
        let input = "type,account,amount,destination\nrefund,1,3,\n";
        let (line, row) = CsvOperationParser::new(input.as_bytes()).next().unwrap();
        assert_eq!(line, 2);
        assert!(row.is_err());
    }
}
