/// Monetary amount used for balances and movements.
pub mod amount;

/// Bank account: balance plus an append-only history of movements.
/// Deposits and withdrawals record a movement, which is then applied to the balance.
pub mod account;

/// Movement records kept in an account history.
pub mod movement;

/// Where movement timestamps come from.
pub mod clock;

/// Operation commands that later are executed against an [`account`].
pub mod command;

/// Operation processor interface, plus "in memory" implementation.
/// Keeps accounts by id and routes commands to them.
pub mod processor;

/// Replays a CSV file of operations and prints the account statement.
/// Lives in the library so integration tests can drive it.
pub mod bin_utils;

pub use account::Account;
pub use amount::Amount;
pub use movement::{Movement, MovementKind};
