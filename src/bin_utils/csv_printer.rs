use std::io::Write;

use crate::{amount::Amount, movement::MovementKind, processor::AccountId};
use chrono::{DateTime, Utc};
use csv::Writer;
use serde::Serialize;

/// One statement line: a movement, tagged with the account it belongs to.
#[derive(Debug, Serialize)]
pub struct StatementLine {
    pub account: AccountId,
    #[serde(rename = "type")]
    pub kind: MovementKind,
    pub amount: Amount,
    pub date: DateTime<Utc>,
    pub balance: Amount,
}

pub fn print_statement<W>(
    output: &mut W,
    lines: impl Iterator<Item = StatementLine>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for line in lines {
        if let Err(err) = writer.serialize(line) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
