use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::amount::Amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

/// A single balance-changing event, as recorded in an account history.
///
/// Fields are only readable: once recorded, a movement never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    kind: MovementKind,
    amount: Amount,
    date: DateTime<Utc>,
    balance: Amount,
}

impl Movement {
    pub(crate) fn new(
        kind: MovementKind,
        amount: Amount,
        date: DateTime<Utc>,
        balance: Amount,
    ) -> Self {
        Self {
            kind,
            amount,
            date,
            balance,
        }
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Account balance right after this movement was applied.
    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Amount as it affects the balance: positive for deposits, negative for withdrawals.
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            MovementKind::Deposit => self.amount,
            MovementKind::Withdrawal => -self.amount,
        }
    }
}
