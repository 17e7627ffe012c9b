use thiserror::Error;

use crate::{
    amount::Amount,
    command::{AccountCommandError, OperationKind},
};

pub mod in_memory_processor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OperationProcessError {
    #[error(transparent)]
    CommandErr(#[from] AccountCommandError),
    #[error("Balance of account {account_id} would overflow")]
    BalanceOverflow { account_id: AccountId },
}

pub type AccountId = u16;

pub trait OperationProcessor {
    fn process_operation(
        &mut self,
        account_id: AccountId,
        kind: OperationKind,
        amount: Option<Amount>,
        destination: Option<AccountId>,
    ) -> Result<(), OperationProcessError>;
}
