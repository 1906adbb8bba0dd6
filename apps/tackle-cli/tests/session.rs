//! Scripted console sessions driven through `Shop` and `run_with`.

use std::io::Cursor;
use std::path::PathBuf;

use tackle_cli::{run_with, AppConfig, Console, ReportFormat, Shop};
use tackle_core::HireLedger;

fn run_script(script: &str, format: ReportFormat) -> (HireLedger, String) {
    let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut shop = Shop::new(console, HireLedger::new(), format);
    shop.run().unwrap();
    let (ledger, out) = shop.into_parts();
    (ledger, String::from_utf8(out).unwrap())
}

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/test_hires.csv")
}

#[test]
fn full_session_with_reprompts() {
    let script = "9\n\
                  1\n\
                  Jane Doe\n\
                  123\n\
                  07700 900123\n\
                  12\n\
                  ab1 2cd\n\
                  12345\n\
                  4321\n\
                  XXX, 1\n\
                  DCH\n\
                  \n\
                  DCH, 2\n\
                  ba1, 1\n\
                  \n\
                  0\n\
                  3\n\
                  maybe\n\
                  n\n\
                  n\n\
                  2\n\
                  3\n";
    let (ledger, out) = run_script(script, ReportFormat::Table);

    assert!(out.contains("Invalid option '9', choose 1, 2 or 3"));
    assert!(out.contains("Phone should contain at least 7 digits (found 3)"));
    assert!(out.contains("Card last 4 digits must be exactly 4 digits"));
    assert!(out.contains("Unknown code 'XXX'"));
    assert!(out.contains("Expected 2 fields: CODE, quantity, found 1 field(s)"));
    assert!(out.contains("You must enter at least one item."));
    assert!(out.contains("Number of nights must be at least 1 (got 0)"));
    assert!(out.contains("Please enter 'y' or 'n' (got 'maybe')"));

    assert_eq!(ledger.len(), 1);
    let record = &ledger.records()[0];
    assert_eq!(record.customer_id, 101);
    assert_eq!(record.customer.phone, "07700900123");
    assert_eq!(record.customer.postcode, "AB1 2CD");
    assert_eq!(record.customer.card_last4, "4321");
    // DCH x2 and BA1 x1 for 3 nights, late:
    // first 3500 + additional 3500 + late 1750
    assert_eq!(record.total().pence(), 8750);
    assert_eq!(record.late_penalty().pence(), 1750);

    assert!(out.contains("Customer ID: 101"));
    assert!(out.contains("Total cost:  £87.50"));
    assert!(out.contains("Total earnings: £87.50"));
    assert!(out.contains("Of which late-return charges: £17.50"));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn add_another_loops_and_ids_increase() {
    let script = "1\n\
                  Ann\n07000000001\n1\nA1 1AA\n1111\nDCH, 1\n\n1\ny\n\
                  y\n\
                  Bob\n07000000002\n2\nB2 2BB\n2222\nTNT, 1\n\n2\ny\n\
                  n\n\
                  3\n";
    let (ledger, _) = run_script(script, ReportFormat::Table);

    let ids: Vec<u32> = ledger.records().iter().map(|r| r.customer_id).collect();
    assert_eq!(ids, vec![101, 102]);
    assert_eq!(ledger.total_earnings().pence(), 1500 + 3000);
}

#[test]
fn blank_name_returns_to_menu_without_recording() {
    let (ledger, out) = run_script("1\n\n3\n", ReportFormat::Table);

    assert!(ledger.is_empty());
    assert!(out.contains("Returning to main menu."));
    assert_eq!(out.matches("=== Main Menu ===").count(), 2);
}

#[test]
fn report_before_any_hire() {
    let (_, out) = run_script("2\n3\n", ReportFormat::Table);
    assert!(out.contains("No hires recorded yet."));
}

#[test]
fn end_of_input_terminates_mid_hire() {
    let (ledger, out) = run_script("1\nJane Doe\n07700900123\n", ReportFormat::Table);

    assert!(ledger.is_empty());
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn end_of_input_at_menu_terminates() {
    let (_, out) = run_script("", ReportFormat::Table);
    assert!(out.contains("Select an option (1-3): "));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn invalid_utf8_at_menu_is_reprompted() {
    let console = Console::new(Cursor::new(vec![0xFF, b'\n', b'3', b'\n']), Vec::new());
    let mut shop = Shop::new(console, HireLedger::new(), ReportFormat::Table);
    shop.run().unwrap();
    let (_, out) = shop.into_parts();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Invalid option '\u{FFFD}', choose 1, 2 or 3"));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn invalid_utf8_in_name_keeps_earlier_hires() {
    let mut script = b"1\nAnn\n07000000001\n1\nA1 1AA\n1111\nDCH, 1\n\n1\ny\ny\n".to_vec();
    script.extend_from_slice(b"Ren\xE9e\n07000000002\n2\nB2 2BB\n2222\nTNT, 1\n\n2\ny\nn\n3\n");
    let console = Console::new(Cursor::new(script), Vec::new());
    let mut shop = Shop::new(console, HireLedger::new(), ReportFormat::Table);
    shop.run().unwrap();

    let ledger = shop.ledger();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.records()[1].customer.name, "Ren\u{FFFD}e");
    assert_eq!(ledger.total_earnings().pence(), 1500 + 3000);
}

#[test]
fn json_report_from_menu() {
    let script = "1\nAnn\n07000000001\n1\nA1 1AA\n1111\nDCH, 1\n\n1\ny\nn\n2\n3\n";
    let (_, out) = run_script(script, ReportFormat::Json);
    assert!(out.contains("\"total_earnings\": 1500"));
}

#[test]
fn report_only_run_over_fixture() {
    let config = AppConfig {
        load_path: Some(fixture_path()),
        report_only: true,
        ..AppConfig::default()
    };
    let mut out = Vec::new();
    run_with(&config, Cursor::new(Vec::new()), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("Loaded 10 hire(s) from "));
    assert!(out.contains("Total earnings: £682.50"));
    assert!(out.contains("Of which late-return charges: £75.00"));
    assert!(!out.contains("Main Menu"));
}

#[test]
fn loaded_hires_continue_numbering_in_menu() {
    let config = AppConfig {
        load_path: Some(fixture_path()),
        ..AppConfig::default()
    };
    let script = "1\nAnn\n07000000001\n1\nA1 1AA\n1111\nDCH, 1\n\n1\ny\nn\n3\n";
    let mut out = Vec::new();
    run_with(&config, Cursor::new(script.as_bytes().to_vec()), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Customer ID: 111"));
}

#[test]
fn missing_load_file_is_an_error() {
    let config = AppConfig {
        load_path: Some(PathBuf::from("no/such/file.csv")),
        ..AppConfig::default()
    };
    let result = run_with(&config, Cursor::new(Vec::new()), Vec::new());
    assert!(matches!(result, Err(tackle_cli::AppError::Load { .. })));
}
