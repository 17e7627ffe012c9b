use tracing::debug;

use crate::{
    amount::Amount,
    clock::{Clock, SystemClock},
    movement::{Movement, MovementKind},
};

#[derive(Debug, Clone)]
pub struct Account<C = SystemClock> {
    opening_balance: Amount,
    balance: Amount,
    movements: Vec<Movement>,
    clock: C,
}

impl<C: Clock + Default> Default for Account<C> {
    fn default() -> Self {
        Self::with_clock(C::default())
    }
}

impl Account {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an account whose history starts from `balance` instead of zero.
    pub fn with_opening_balance(balance: Amount) -> Self {
        Self::with_clock_and_balance(SystemClock, balance)
    }
}

impl<C: Clock> Account<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_clock_and_balance(clock, Amount::ZERO)
    }

    pub fn with_clock_and_balance(clock: C, opening_balance: Amount) -> Self {
        Self {
            opening_balance,
            balance: opening_balance,
            movements: Vec::new(),
            clock,
        }
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn opening_balance(&self) -> Amount {
        self.opening_balance
    }

    /// Recorded movements, oldest first.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Balance rebuilt from the opening balance and the movement history.
    /// Always equal to [`Account::balance`].
    pub fn replayed_balance(&self) -> Amount {
        self.opening_balance + self.movements.iter().map(Movement::signed_amount).sum::<Amount>()
    }

    pub fn deposit(&mut self, amount: Amount) {
        let movement = self.record(MovementKind::Deposit, amount);
        self.apply(movement);
    }

    /// Withdraws unconditionally, the balance may go negative.
    pub fn withdrawal(&mut self, amount: Amount) {
        let movement = self.record(MovementKind::Withdrawal, amount);
        self.apply(movement);
    }

    /// Withdraws from `self`, then deposits the same amount into `destination`.
    pub fn transfer<D: Clock>(&mut self, destination: &mut Account<D>, amount: Amount) {
        self.withdrawal(amount);
        destination.deposit(amount);
    }

    fn record(&self, kind: MovementKind, amount: Amount) -> Movement {
        let balance = match kind {
            MovementKind::Deposit => self.balance + amount,
            MovementKind::Withdrawal => self.balance - amount,
        };
        Movement::new(kind, amount, self.clock.now(), balance)
    }

    fn apply(&mut self, movement: Movement) {
        debug!(
            kind = ?movement.kind(),
            amount = %movement.amount(),
            balance = %movement.balance(),
            "movement recorded"
        );
        self.balance = movement.balance();
        self.movements.push(movement);
    }
}
