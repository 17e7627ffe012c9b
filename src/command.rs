use serde::Deserialize;
use thiserror::Error;

use crate::{amount::Amount, processor::AccountId};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Deposit,
    Withdrawal,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCommand {
    Deposit {
        amount: Amount,
    },
    Withdraw {
        amount: Amount,
    },
    Transfer {
        destination: AccountId,
        amount: Amount,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountCommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Destination account is required for Transfer")]
    DestinationRequired,
}

impl AccountCommand {
    /// Amounts are taken as given: zero, negative and overdrawing amounts all pass.
    pub fn parse_command(
        kind: OperationKind,
        amount: Option<Amount>,
        destination: Option<AccountId>,
    ) -> Result<Self, AccountCommandError> {
        let amount = amount.ok_or(AccountCommandError::AmountRequired { kind })?;
        match kind {
            OperationKind::Deposit => Ok(Self::Deposit { amount }),
            OperationKind::Withdrawal => Ok(Self::Withdraw { amount }),
            OperationKind::Transfer => {
                let Some(destination) = destination else {
                    return Err(AccountCommandError::DestinationRequired);
                };
                Ok(Self::Transfer {
                    destination,
                    amount,
                })
            }
        }
    }
}
