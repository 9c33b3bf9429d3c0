use commcalc_common::input::{CommissionInput, FormState};
use commcalc_core::{SummaryRow, compute, count_commission_rate, margin_commission_rate};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn row_for(toa: f64, avg: f64, gm: f64) -> SummaryRow {
    let form = FormState::new(Some(toa), Some(avg), Some(gm));
    let input = form.validate().expect("form should be valid");
    SummaryRow::compute(&input)
}

/// 15 TOA at 16% margin and $400/week lands in the 3.00 + 2.50 tiers.
#[test]
fn fifteen_toa_at_sixteen_percent() {
    let row = row_for(15.0, 16.0, 400.0);

    assert_close(row.monthly_gross_profit, 25800.0);
    assert_eq!(row.margin_commission_rate, 3.00);
    assert_eq!(row.toa_commission_rate, 2.50);
    assert_close(row.monthly_commission, 1419.0);
}

#[test]
fn ten_toa_at_twenty_percent() {
    let row = row_for(10.0, 20.0, 300.0);

    assert_close(row.monthly_gross_profit, 12900.0);
    assert_eq!(row.margin_commission_rate, 4.75);
    assert_eq!(row.toa_commission_rate, 2.00);
    assert_close(row.monthly_commission, 870.75);
}

#[test]
fn margin_of_exactly_twenty_opens_the_next_tier() {
    assert_eq!(row_for(10.0, 19.99, 300.0).margin_commission_rate, 4.50);
    assert_eq!(row_for(10.0, 20.0, 300.0).margin_commission_rate, 4.75);
}

#[test]
fn margin_of_exactly_twenty_five_uses_top_tier() {
    let row = row_for(15.0, 25.0, 400.0);
    assert_eq!(row.margin_commission_rate, 7.25);
    assert_close(row.monthly_commission, 25800.0 * (7.25 + 2.50) / 100.0);
}

#[test]
fn rate_lookups_match_engine() {
    let input = CommissionInput::new(27.0, 22.75, 350.0).unwrap();
    let result = compute(&input);
    assert_eq!(result.margin_commission_rate, margin_commission_rate(22.75));
    assert_eq!(result.toa_commission_rate, count_commission_rate(27.0));
    assert_eq!(result.margin_commission_rate, 6.00);
    assert_eq!(result.toa_commission_rate, 3.75);
}

#[test]
fn engine_has_no_hidden_state() {
    let input = CommissionInput::new(15.0, 16.0, 400.0).unwrap();
    let before = compute(&input);
    // Unrelated computation in between must not affect the result.
    let _ = compute(&CommissionInput::new(40.0, 30.0, 1000.0).unwrap());
    let after = compute(&input);

    assert_eq!(before.monthly_commission.to_bits(), after.monthly_commission.to_bits());
    assert_eq!(before, after);
}

#[test]
fn display_row_matches_expected_formatting() {
    let row = row_for(15.0, 16.0, 400.0);
    let cells = row.cells();

    assert_eq!(cells[0], ("TOA", "15.00".to_string()));
    assert_eq!(cells[1], ("AVG %", "16.00%".to_string()));
    assert_eq!(cells[2], ("GM $/Week", "$400.00".to_string()));
    assert_eq!(cells[3], ("Monthly GP ($)", "$25,800.00".to_string()));
    assert_eq!(cells[6], ("Monthly Commission ($)", "$1,419.00".to_string()));
}
