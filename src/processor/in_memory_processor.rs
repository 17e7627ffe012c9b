use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    account::Account,
    amount::Amount,
    clock::{Clock, SystemClock},
    command::{AccountCommand, OperationKind},
};

use super::{AccountId, OperationProcessError, OperationProcessor};

/// Accounts are opened with a zero balance the first time an operation names them.
#[derive(Debug, Default)]
pub struct InMemoryOperationProcessor<C = SystemClock> {
    clock: C,
    pub accounts: BTreeMap<AccountId, Account<C>>,
}

impl<C: Clock + Clone> InMemoryOperationProcessor<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            accounts: BTreeMap::new(),
        }
    }

    fn account_mut(&mut self, account_id: AccountId) -> &mut Account<C> {
        let clock = &self.clock;
        self.accounts
            .entry(account_id)
            .or_insert_with(|| Account::with_clock(clock.clone()))
    }

    fn balance_of(&self, account_id: AccountId) -> Amount {
        self.accounts
            .get(&account_id)
            .map_or(Amount::ZERO, |acc| acc.balance())
    }

    /// Rejects the command up front if any balance it touches would leave the `Decimal` range.
    fn check_overflow(
        &self,
        account_id: AccountId,
        cmd: &AccountCommand,
    ) -> Result<(), OperationProcessError> {
        let overflow = |account_id| OperationProcessError::BalanceOverflow { account_id };
        match *cmd {
            AccountCommand::Deposit { amount } => {
                self.balance_of(account_id)
                    .checked_add(amount)
                    .ok_or_else(|| overflow(account_id))?;
            }
            AccountCommand::Withdraw { amount } => {
                self.balance_of(account_id)
                    .checked_sub(amount)
                    .ok_or_else(|| overflow(account_id))?;
            }
            AccountCommand::Transfer {
                destination,
                amount,
            } => {
                let source_balance = self
                    .balance_of(account_id)
                    .checked_sub(amount)
                    .ok_or_else(|| overflow(account_id))?;
                let destination_balance = if destination == account_id {
                    source_balance
                } else {
                    self.balance_of(destination)
                };
                destination_balance
                    .checked_add(amount)
                    .ok_or_else(|| overflow(destination))?;
            }
        }
        Ok(())
    }

    fn transfer(&mut self, source: AccountId, destination: AccountId, amount: Amount) {
        if source == destination {
            let acc = self.account_mut(source);
            acc.withdrawal(amount);
            acc.deposit(amount);
            return;
        }
        let mut source_acc = self
            .accounts
            .remove(&source)
            .unwrap_or_else(|| Account::with_clock(self.clock.clone()));
        source_acc.transfer(self.account_mut(destination), amount);
        self.accounts.insert(source, source_acc);
    }
}

impl<C: Clock + Clone> OperationProcessor for InMemoryOperationProcessor<C> {
    fn process_operation(
        &mut self,
        account_id: AccountId,
        kind: OperationKind,
        amount: Option<Amount>,
        destination: Option<AccountId>,
    ) -> Result<(), OperationProcessError> {
        let cmd = AccountCommand::parse_command(kind, amount, destination)?;
        self.check_overflow(account_id, &cmd)?;
        debug!(account_id, ?cmd, "processing operation");
        match cmd {
            AccountCommand::Deposit { amount } => self.account_mut(account_id).deposit(amount),
            AccountCommand::Withdraw { amount } => {
                self.account_mut(account_id).withdrawal(amount)
            }
            AccountCommand::Transfer {
                destination,
                amount,
            } => self.transfer(account_id, destination, amount),
        };
        Ok(())
    }
}
