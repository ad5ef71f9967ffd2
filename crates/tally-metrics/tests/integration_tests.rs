//! Integration tests for tally-metrics.
//!
//! These tests exercise the public API end to end: the documented reference
//! values for each metric, determinism, and a month of shop data run through
//! a configured calculator.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tally_metrics::prelude::*;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn series_from(values: &[Decimal]) -> Vec<DataPoint> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| DataPoint::new(start + Days::new(i as u64), *v))
        .collect()
}

/// Thirty days of register totals for a bakery: weekdays steady, weekends
/// busier, second half of the month lifted by a promotion.
fn bakery_march() -> Vec<DataPoint> {
    let values: Vec<Decimal> = (0..30)
        .map(|day| {
            let base = if day % 7 >= 5 { dec!(620) } else { dec!(410) };
            if day >= 15 {
                base * dec!(1.12)
            } else {
                base
            }
        })
        .collect();
    series_from(&values)
}

// =============================================================================
// REFERENCE VALUES
// =============================================================================

#[test]
fn margin_reference_values() {
    let m = gross_margin(dec!(80), dec!(50));
    assert_eq!(m.margin, dec!(30));
    assert_eq!(m.percentage_points, dec!(37.5));

    assert_eq!(gross_margin(dec!(0), dec!(0)).percentage_points, Decimal::ZERO);
}

#[test]
fn bill_of_materials_reference_values() {
    assert_eq!(cost_from_bill_of_materials(&[], &[]), Decimal::ZERO);

    let ingredients = [
        LineItem::new(dec!(3.10), dec!(2)),
        LineItem::new(dec!(0.05), dec!(10)),
    ];
    let packaging = [LineItem::new(dec!(0.80), dec!(1))];
    assert_eq!(cost_from_bill_of_materials(&ingredients, &packaging), dec!(7.50));
}

#[test]
fn sales_reference_values() {
    assert_eq!(average_ticket(dec!(100), 4), dec!(25));
    assert_eq!(average_ticket(dec!(999), 0), Decimal::ZERO);

    assert_eq!(percent_variation(dec!(0), dec!(0)), Decimal::ZERO);
    assert_eq!(percent_variation(dec!(50), dec!(0)), dec!(100));
    assert_eq!(percent_variation(dec!(150), dec!(100)), dec!(50));
}

#[test]
fn profitability_reference_values() {
    assert_eq!(return_on_investment(dec!(200), dec!(1000)), dec!(20));
    assert_eq!(return_on_investment(dec!(123), dec!(0)), Decimal::ZERO);

    assert_eq!(
        break_even_point(dec!(1000), dec!(10), dec!(6)),
        BreakEven::Units(dec!(250))
    );
    assert_eq!(
        break_even_point(dec!(1000), dec!(5), dec!(5)).to_f64(),
        f64::INFINITY
    );

    let inputs = EbitdaInputs::new(dec!(5000), dec!(2000), dec!(1500))
        .with_depreciation(dec!(200))
        .with_amortization(dec!(100));
    assert_eq!(ebitda_with(&inputs), dec!(1800));
    assert_eq!(ebitda(dec!(5000), dec!(2000), dec!(1500)), dec!(1500));
}

#[test]
fn cash_flow_reference_values() {
    assert_eq!(
        cash_flow(dec!(500), dec!(300), dec!(100)),
        CashFlowResult {
            net_flow: dec!(200),
            ending_balance: dec!(300),
        }
    );
}

#[test]
fn trend_reference_values() {
    assert_eq!(trend_analysis(&[]), TrendResult::default());

    let rising: Vec<Decimal> = (1..=10).map(|i| Decimal::from(i * 10)).collect();
    let result = trend_analysis(&series_from(&rising));
    assert_eq!(result.direction, TrendDirection::Increasing);
    assert_eq!(result.average, dec!(55));
}

// =============================================================================
// CONFIGURED CALCULATOR
// =============================================================================

#[test]
fn bakery_month_with_configured_calculator() {
    let config = MetricsConfig::from_toml_str(
        r#"
        precision = 2
        rounding = "half_even"
        trend_threshold = 0.05
        "#,
    )
    .unwrap();
    let calc = MetricsCalculator::new(&config);
    let series = bakery_march();

    let trend = calc.trend_analysis(&series);
    assert_eq!(trend.direction, TrendDirection::Increasing);

    // A stricter threshold hides the 12% promotion lift.
    let strict = calc.with_trend_threshold(dec!(0.2));
    assert_eq!(strict.trend_analysis(&series).direction, TrendDirection::Stable);

    // Banker's rounding: 0.125 -> 0.12
    assert_eq!(calc.average_ticket(dec!(1), 8), dec!(0.12));
    assert_eq!(average_ticket(dec!(1), 8), dec!(0.13));
}

#[test]
fn report_over_bakery_month() {
    let series = bakery_march();
    let revenue: Decimal = series.iter().map(|p| p.value).sum();

    let current = PeriodFigures {
        label: Some("2024-03".into()),
        revenue,
        order_count: 1_200,
        cost_of_goods: revenue * dec!(0.45),
        ..PeriodFigures::default()
    };
    let report = FinancialReport::build(&current, None, &series, &MetricsCalculator::default());

    assert_eq!(report.gross_margin.percentage_points, dec!(55));
    assert_eq!(report.trend.direction, TrendDirection::Increasing);
    assert_eq!(report.average_ticket, average_ticket(revenue, 1_200));

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"increasing\""));
}

// =============================================================================
// DETERMINISM
// =============================================================================

fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000, 0u32..4).prop_map(|(m, s)| Decimal::new(m, s))
}

proptest! {
    #[test]
    fn every_metric_is_idempotent(a in amount(), b in amount(), c in amount(), n in 0u64..10_000) {
        prop_assert_eq!(gross_margin(a, b), gross_margin(a, b));
        prop_assert_eq!(average_ticket(a, n), average_ticket(a, n));
        prop_assert_eq!(percent_variation(a, b), percent_variation(a, b));
        prop_assert_eq!(return_on_investment(a, b), return_on_investment(a, b));
        prop_assert_eq!(ebitda(a, b, c), ebitda(a, b, c));
        prop_assert_eq!(break_even_point(a, b, c), break_even_point(a, b, c));
        prop_assert_eq!(cash_flow(a, b, c), cash_flow(a, b, c));

        let points = series_from(&[a, b, c]);
        let first = trend_analysis(&points);
        let second = trend_analysis(&points);
        prop_assert_eq!(first, second);
        // Bit-identical, not just numerically equal.
        prop_assert_eq!(first.average.serialize(), second.average.serialize());
    }

    #[test]
    fn zero_denominators_never_panic(a in amount()) {
        prop_assert_eq!(average_ticket(a, 0), Decimal::ZERO);
        prop_assert_eq!(return_on_investment(a, Decimal::ZERO), Decimal::ZERO);
        let v = percent_variation(a, Decimal::ZERO);
        prop_assert!(v == Decimal::ZERO || v == Decimal::ONE_HUNDRED);
        prop_assert!(break_even_point(a, Decimal::ONE, Decimal::ONE).is_infinite());
    }
}
