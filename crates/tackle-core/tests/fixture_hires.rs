//! End-to-end checks over the ten reference hires in `data/test_hires.csv`.

use tackle_core::ingest::{is_skippable, parse_hire_row};
use tackle_core::report::EarningsReport;
use tackle_core::HireLedger;

const FIXTURE: &str = include_str!("../../../data/test_hires.csv");

fn load_fixture() -> HireLedger {
    let mut ledger = HireLedger::new();
    for line in FIXTURE.lines().filter(|l| !is_skippable(l)) {
        let request = parse_hire_row(line).unwrap_or_else(|e| panic!("{line}: {e}"));
        ledger.record(request).unwrap();
    }
    ledger
}

#[test]
fn fixture_loads_all_ten_hires() {
    let ledger = load_fixture();
    assert_eq!(ledger.len(), 10);

    let ids: Vec<u32> = ledger.records().iter().map(|r| r.customer_id).collect();
    assert_eq!(ids, (101..=110).collect::<Vec<_>>());
}

#[test]
fn fixture_per_hire_totals() {
    let ledger = load_fixture();
    let totals: Vec<(i64, i64)> = ledger
        .records()
        .iter()
        .map(|r| (r.total().pence(), r.late_penalty().pence()))
        .collect();

    assert_eq!(
        totals,
        vec![
            (3000, 0),     // Alice Smith: Day chairs x2, 1 night
            (5000, 1250),  // John Doe: Bed chairs, 2 nights, late
            (4000, 0),     // Mary Jones
            (1500, 0),     // Tom Brown
            (9000, 0),     // Sue Green
            (12000, 2000), // Ken White: tent x2, 4 nights, late
            (4000, 0),     // Liam Black
            (8000, 2000),  // Olivia Gray
            (6000, 0),     // Noah Blue
            (15750, 2250), // Emma King
        ]
    );
}

#[test]
fn fixture_cumulative_total_is_682_50() {
    let ledger = load_fixture();
    assert_eq!(ledger.total_earnings().pence(), 68250);
    assert_eq!(ledger.total_late_penalties().pence(), 7500);

    let report = EarningsReport::from_records(ledger.records());
    assert_eq!(report.total_earnings.pence(), 68250);

    let table = report.render_table();
    assert!(table.contains("Total earnings: £682.50\n"));
    assert!(table.contains("Of which late-return charges: £75.00\n"));
    assert_eq!(table, EarningsReport::from_records(ledger.records()).render_table());
}

#[test]
fn fixture_report_serializes_to_json() {
    let ledger = load_fixture();
    let report = EarningsReport::from_records(ledger.records());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_earnings"], 68250);
    assert_eq!(json["rows"].as_array().unwrap().len(), 10);
    assert_eq!(json["rows"][7]["equipment"][1], "Rods (Bait runners) x 2");
    assert_eq!(json["rows"][9]["on_time"], false);
}
