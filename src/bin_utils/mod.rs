//! Bootstraps [`bank_kata`](crate) for the binary: CSV operations in, CSV statement out.

use std::io::{Read, Write};

use crate::{
    clock::{Clock, SystemClock},
    processor::{
        OperationProcessError, OperationProcessor,
        in_memory_processor::InMemoryOperationProcessor,
    },
};
use anyhow::{Context, Result};
use csv_parser::CsvOperationParser;
use csv_printer::{StatementLine, print_statement};
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w, C = SystemClock> {
    pub input: R,
    pub output: &'w mut W,
    pub clock: C,
    pub error_printer: Box<dyn FnMut(u64, OperationProcessError)>,
}

impl<'w, R, W, C> Service<'w, R, W, C>
where
    R: Read,
    W: Write + 'w,
    C: Clock + Clone,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut processor = InMemoryOperationProcessor::with_clock(self.clock);

        for (line, row) in parser {
            let row = row.with_context(|| format!("Malformed operation at line {line}"))?;
            if let Err(err) =
                processor.process_operation(row.account, row.kind, row.amount, row.destination)
            {
                (self.error_printer)(line, err);
            }
        }

        print_statement(
            self.output,
            processor.accounts.iter().flat_map(|(account_id, acc)| {
                acc.movements().iter().map(|movement| StatementLine {
                    account: *account_id,
                    kind: movement.kind(),
                    amount: movement.amount(),
                    date: movement.date(),
                    balance: movement.balance(),
                })
            }),
        )
    }
}
