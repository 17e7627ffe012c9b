use std::{cell::RefCell, rc::Rc, str::from_utf8};

use bank_kata::{
    bin_utils::Service,
    clock::FixedClock,
    command::{AccountCommandError, OperationKind},
    processor::OperationProcessError,
};
use chrono::{TimeZone, Utc};

const TEST_FILE: &str = include_str!("operations.csv");

#[test]
fn replay_operations() {
    let date = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let errors = Rc::new(RefCell::new(Vec::<(u64, OperationProcessError)>::new()));
    let mut output = Vec::new();
    let service = Service {
        input: TEST_FILE.as_bytes(),
        output: &mut output,
        clock: FixedClock(date),
        error_printer: Box::new({
            let errors = Rc::clone(&errors);
            move |line: u64, err: OperationProcessError| errors.borrow_mut().push((line, err))
        }),
    };
    service.run().unwrap();

    let lines: Vec<&str> = from_utf8(&output).unwrap().lines().collect();
    assert_eq!(lines[0], "account,type,amount,date,balance");

    // date column dropped, it is checked separately
    let rows: Vec<(String, String)> = lines[1..]
        .iter()
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(
                chrono::DateTime::parse_from_rfc3339(fields[3]).unwrap(),
                date
            );
            (fields[..3].join(","), fields[4].to_owned())
        })
        .collect();
    let rows: Vec<(&str, &str)> = rows.iter().map(|(l, r)| (l.as_str(), r.as_str())).collect();
    assert_eq!(
        rows,
        vec![
            ("1,deposit,10", "10"),
            ("1,withdrawal,6", "4"),
            ("2,deposit,20", "20"),
            ("2,deposit,6", "26"),
            ("3,withdrawal,6", "-6"),
            ("4,deposit,6", "6"),
            ("5,deposit,9999999999999999999.99", "9999999999999999999.99"),
            ("6,deposit,0.12345678901234567890123", "0.12345678901234567890123"),
            ("6,deposit,0.00000000000000000000001", "0.12345678901234567890124"),
            ("7,deposit,18446744073709551616", "18446744073709551616"),
            (
                "8,deposit,50000000000000000000000000000",
                "50000000000000000000000000000"
            ),
        ]
    );

    assert_eq!(
        *errors.borrow(),
        vec![
            (
                6,
                OperationProcessError::CommandErr(AccountCommandError::AmountRequired {
                    kind: OperationKind::Deposit
                })
            ),
            (
                7,
                OperationProcessError::CommandErr(AccountCommandError::DestinationRequired)
            ),
            (13, OperationProcessError::BalanceOverflow { account_id: 8 }),
        ]
    );
}

#[test]
fn malformed_input_aborts() {
    let mut output = Vec::new();
    let service = Service {
        input: "type,account,amount,destination\ndeposit,not-a-number,1,\n".as_bytes(),
        output: &mut output,
        clock: FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        error_printer: Box::new(|_: u64, _: OperationProcessError| {}),
    };
    let err = service.run().unwrap_err();
    assert_eq!(err.to_string(), "Malformed operation at line 2");
    assert!(output.is_empty());
}
