//! Property-based integration tests for portfolio allocation.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use bond_recommender_core::bonds::{Bond, BondType};
use bond_recommender_core::collections::Duration;
use bond_recommender_core::issuers::Issuer;
use bond_recommender_core::market_data::MarketSnapshot;
use bond_recommender_core::reports::{BondReport, Report};
use bond_recommender_core::suggest::{
    allocate, build_result, normalize_parts, Position, SuggestPart, SuggestRequest,
};

// =============================================================================
// Fixtures
// =============================================================================

fn report(bond_id: i64, open_value: Decimal) -> Report {
    Report {
        bond_id,
        days_till_maturity: 365,
        currency: "RUB".into(),
        open_price: dec!(100),
        open_accrued_interest: Decimal::ZERO,
        open_face_value: dec!(1000),
        open_fee: Decimal::ZERO,
        open_value,
        coupon_payments: Decimal::ZERO,
        amortization_payments: Decimal::ZERO,
        maturity_payment: dec!(1000),
        taxes: Decimal::ZERO,
        revenue: dec!(1000),
        profit_loss: dec!(1000) - open_value,
        relative_profit_loss: Decimal::ZERO,
        interest_rate: dec!(10),
    }
}

fn bond_report(report: Report) -> BondReport {
    let id = report.bond_id;
    BondReport {
        bond: Bond {
            id,
            issuer_id: 1,
            moex_id: id,
            security_id: format!("SEC{}", id),
            isin: format!("ISIN{}", id),
            short_name: format!("Bond {}", id),
            full_name: format!("Bond {}", id),
            is_traded: true,
            qualified_only: false,
            high_risk: false,
            bond_type: BondType::CorporateBond,
            primary_board_id: "TQCB".into(),
            market_price_board_id: "TQCB".into(),
            initial_face_value: dec!(1000),
            face_unit: "RUB".into(),
            issue_date: None,
            maturity_date: NaiveDate::from_ymd_opt(2026, 1, 1),
            listing_level: 2,
            coupon_frequency: 4,
        },
        issuer: Issuer {
            id: 1,
            moex_id: 1,
            name: "ПАО Эмитент".into(),
            inn: None,
            okpo: None,
        },
        market_data: MarketSnapshot {
            bond_id: id,
            time: NaiveDateTime::parse_from_str("2025-01-10 18:40:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            face_value: Some(dec!(1000)),
            currency: Some("RUB".into()),
            last: Some(dec!(100)),
            last_change: None,
            close_price: None,
            legal_close_price: None,
            accrued_interest: Some(Decimal::ZERO),
        },
        report,
        cash_flow: Vec::new(),
    }
}

fn spent(reports: &[Report], budget: Decimal) -> Decimal {
    let refs: Vec<&Report> = reports.iter().collect();
    let (_, remaining) = allocate(&refs, budget);
    budget - remaining
}

// =============================================================================
// Generators
// =============================================================================

/// Open values between 10.00 and 2000.00 with kopeck precision.
fn arb_open_value() -> impl Strategy<Value = Decimal> {
    (1_000i64..200_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_reports() -> impl Strategy<Value = Vec<Report>> {
    prop::collection::vec(arb_open_value(), 0..10).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| report(i as i64 + 1, v))
            .collect()
    })
}

fn arb_budget() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// The allocation never spends more than the budget.
    #[test]
    fn prop_allocation_conserves_budget(reports in arb_reports(), budget in arb_budget()) {
        let refs: Vec<&Report> = reports.iter().collect();
        let (lots, remaining) = allocate(&refs, budget);

        let bought: Decimal = lots
            .iter()
            .map(|lot| {
                let r = reports.iter().find(|r| r.bond_id == lot.bond_id).unwrap();
                r.open_value * Decimal::from(lot.quantity)
            })
            .sum();

        prop_assert!(remaining >= Decimal::ZERO);
        prop_assert!(bought <= budget);
        prop_assert_eq!(bought + remaining, budget);
        prop_assert!(lots.iter().all(|lot| lot.quantity > 0));
    }

    /// A larger budget never buys less.
    #[test]
    fn prop_allocation_is_monotonic(
        reports in arb_reports(),
        budget in arb_budget(),
        extra in arb_budget(),
    ) {
        prop_assert!(spent(&reports, budget) <= spent(&reports, budget + extra));
    }

    /// Position weights sum to one whenever anything is bought.
    #[test]
    fn prop_weights_sum_to_one(
        values in prop::collection::vec((arb_open_value(), 1i64..50), 1..10),
    ) {
        let positions: Vec<Position> = values
            .into_iter()
            .enumerate()
            .map(|(i, (open_value, quantity))| Position {
                report: bond_report(report(i as i64 + 1, open_value)).scaled(quantity),
                quantity,
                weight: Decimal::ZERO,
            })
            .collect();

        let result = build_result(positions);
        let total: Decimal = result.positions.iter().map(|p| p.weight).sum();

        prop_assert!((total - Decimal::ONE).abs() < dec!(0.000001));
        prop_assert!(result.amount > Decimal::ZERO);
    }

    /// Normalized part weights sum to one and come out ascending.
    #[test]
    fn prop_parts_normalized(weights in prop::collection::vec(1u32..1000, 1..5)) {
        let request = SuggestRequest {
            amount: dec!(100000),
            max_duration: Duration::ThreeYears,
            parts: Some(
                weights
                    .iter()
                    .enumerate()
                    .map(|(i, w)| SuggestPart {
                        collection_id: format!("c{}", i),
                        weight: Decimal::from(*w),
                    })
                    .collect(),
            ),
        };

        let parts = normalize_parts(&request).unwrap().unwrap();
        let total: Decimal = parts.iter().map(|p| p.weight).sum();

        prop_assert!((total - Decimal::ONE).abs() < dec!(0.000001));
        prop_assert!(parts.windows(2).all(|w| w[0].weight <= w[1].weight));
    }
}
