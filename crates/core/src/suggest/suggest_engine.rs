//! Candidate selection and greedy allocation.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::collections::{rank_by_rate, reject_outliers, Candidate, Duration};
use crate::constants::{
    DAYS_PER_YEAR, MAX_SUGGEST_AMOUNT, SUGGEST_CANDIDATE_LIMIT, SUGGEST_RATE_SPREAD,
};
use crate::errors::{Error, Result, ValidationError};
use crate::reports::Report;
use crate::utils::decimal_utils::round2;
use crate::utils::time_utils::{add_months, add_years};

use super::suggest_model::{Position, SuggestPart, SuggestRequest, SuggestResult};

/// Maturity window of a duration: from half the horizon to the full horizon.
pub fn maturity_window(duration: Duration, today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let years = duration.years();
    (add_months(today, 6 * years), add_years(today, years))
}

/// Global candidates: non-high-risk bonds with a positive rate maturing in the
/// window, outliers rejected, best rates first.
pub fn select_global_candidates<'a>(
    candidates: &[Candidate<'a>],
    duration: Duration,
    today: NaiveDate,
) -> Vec<Candidate<'a>> {
    let (from, till) = maturity_window(duration, today);
    let eligible: Vec<Candidate<'a>> = candidates
        .iter()
        .filter(|c| !c.bond.high_risk)
        .filter(|c| c.rate() > Decimal::ZERO && c.matures_within(from, till))
        .copied()
        .collect();

    let mut kept = reject_outliers(eligible, Candidate::rate);
    rank_by_rate(&mut kept);
    kept.truncate(SUGGEST_CANDIDATE_LIMIT);
    kept
}

/// Collection candidates: members with a positive rate maturing in the window,
/// within one rate point of the best member, best rates first.
pub fn select_collection_candidates<'a>(
    candidates: &[Candidate<'a>],
    members: &HashSet<i64>,
    duration: Duration,
    today: NaiveDate,
) -> Vec<Candidate<'a>> {
    let (from, till) = maturity_window(duration, today);
    let mut eligible: Vec<Candidate<'a>> = candidates
        .iter()
        .filter(|c| members.contains(&c.bond.id))
        .filter(|c| c.rate() > Decimal::ZERO && c.matures_within(from, till))
        .copied()
        .collect();

    let Some(best) = eligible.iter().map(Candidate::rate).max() else {
        return eligible;
    };
    eligible.retain(|c| best - c.rate() <= SUGGEST_RATE_SPREAD);
    rank_by_rate(&mut eligible);
    eligible.truncate(SUGGEST_CANDIDATE_LIMIT);
    eligible
}

/// A bought lot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lot {
    pub bond_id: i64,
    pub quantity: i64,
}

/// Buys as many whole bonds as the budget allows, walking candidates in order.
///
/// Returns the lots and the unspent budget.
pub fn allocate(reports: &[&Report], budget: Decimal) -> (Vec<Lot>, Decimal) {
    let mut remaining = budget;
    let mut lots = Vec::new();

    for report in reports {
        if report.open_value <= Decimal::ZERO {
            continue;
        }
        let quantity = (remaining / report.open_value).floor();
        if quantity <= Decimal::ZERO {
            continue;
        }
        remaining -= report.open_value * quantity;
        lots.push(Lot {
            bond_id: report.bond_id,
            quantity: i64::try_from(quantity).unwrap_or(i64::MAX),
        });
        if remaining <= Decimal::ZERO {
            break;
        }
    }

    (lots, remaining)
}

/// Checks the request and returns its parts with weights normalized to sum 1,
/// sorted ascending by weight. `None` when the request has no parts.
pub fn normalize_parts(request: &SuggestRequest) -> Result<Option<Vec<SuggestPart>>> {
    if request.amount <= Decimal::ZERO {
        return Err(invalid("amount must be positive"));
    }
    // Keeps position totals within Decimal range.
    if request.amount > MAX_SUGGEST_AMOUNT {
        return Err(invalid("amount is too large"));
    }

    let Some(parts) = request.parts.as_ref().filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    if parts.iter().any(|p| p.weight < Decimal::ZERO) {
        return Err(invalid("weights must not be negative"));
    }
    let total: Decimal = parts.iter().map(|p| p.weight).sum();
    if total <= Decimal::ZERO {
        return Err(invalid("weights must have a positive sum"));
    }

    let mut normalized: Vec<SuggestPart> = parts
        .iter()
        .map(|p| SuggestPart {
            collection_id: p.collection_id.clone(),
            weight: p.weight / total,
        })
        .collect();
    normalized.sort_by(|a, b| a.weight.cmp(&b.weight));
    Ok(Some(normalized))
}

/// Nominal budget of a part: its floored share of the amount plus the carry.
pub fn part_budget(amount: Decimal, weight: Decimal, carry: Decimal) -> Decimal {
    (amount * weight).floor() + carry
}

/// Assigns portfolio weights and computes the aggregate figures.
pub fn build_result(mut positions: Vec<Position>) -> SuggestResult {
    let amount: Decimal = positions.iter().map(|p| p.report.report.open_value).sum();
    let duration_days = positions
        .iter()
        .map(|p| p.report.report.days_till_maturity)
        .max()
        .unwrap_or(0);
    let profit_loss: Decimal = positions.iter().map(|p| p.report.report.profit_loss).sum();

    if amount > Decimal::ZERO {
        for p in &mut positions {
            p.weight = p.report.report.open_value / amount;
        }
    }

    let (relative_profit_loss, interest_rate) = if amount > Decimal::ZERO && duration_days > 0 {
        let relative = dec!(100) * profit_loss / amount;
        let rate = relative / (Decimal::from(duration_days) / DAYS_PER_YEAR);
        (round2(relative), round2(rate))
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    SuggestResult {
        positions,
        amount: round2(amount),
        duration_days,
        profit_loss: round2(profit_loss),
        relative_profit_loss,
        interest_rate,
    }
}

fn invalid(message: &str) -> Error {
    Error::Validation(ValidationError::InvalidInput(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonds::{Bond, BondType};
    use crate::constants::RUB;
    use crate::issuers::Issuer;
    use crate::market_data::MarketSnapshot;
    use crate::reports::{BondReport, CashFlowItem};
    use crate::payments::PaymentType;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    fn bond(id: i64, maturity: NaiveDate, high_risk: bool) -> Bond {
        Bond {
            id,
            issuer_id: 1,
            moex_id: id,
            security_id: format!("SEC{}", id),
            isin: format!("ISIN{}", id),
            short_name: format!("Bond {}", id),
            full_name: format!("Bond {}", id),
            is_traded: true,
            qualified_only: false,
            high_risk,
            bond_type: BondType::CorporateBond,
            primary_board_id: "TQCB".into(),
            market_price_board_id: "TQCB".into(),
            initial_face_value: dec!(1000),
            face_unit: RUB.into(),
            issue_date: None,
            maturity_date: Some(maturity),
            listing_level: 2,
            coupon_frequency: 4,
        }
    }

    fn report(bond_id: i64, rate: Decimal, open_value: Decimal) -> Report {
        Report {
            bond_id,
            days_till_maturity: 700,
            currency: RUB.into(),
            open_price: dec!(99),
            open_accrued_interest: dec!(5),
            open_face_value: dec!(1000),
            open_fee: dec!(0.5),
            open_value,
            coupon_payments: dec!(100),
            amortization_payments: dec!(0),
            maturity_payment: dec!(1000),
            taxes: dec!(13),
            revenue: dec!(1100),
            profit_loss: dec!(80),
            relative_profit_loss: dec!(8),
            interest_rate: rate,
        }
    }

    fn bond_report(bond_id: i64, open_value: Decimal) -> BondReport {
        BondReport {
            bond: bond(bond_id, today() + Days::new(700), false),
            issuer: Issuer {
                id: 1,
                moex_id: 1,
                name: "Issuer".into(),
                inn: None,
                okpo: None,
            },
            market_data: MarketSnapshot {
                bond_id,
                time: today().and_hms_opt(18, 0, 0).unwrap(),
                face_value: Some(dec!(1000)),
                currency: Some(RUB.into()),
                last: Some(dec!(99)),
                last_change: None,
                close_price: None,
                legal_close_price: None,
                accrued_interest: Some(dec!(5)),
            },
            report: report(bond_id, dec!(10), open_value),
            cash_flow: vec![CashFlowItem {
                bond_id,
                payment_type: PaymentType::Coupon,
                date: today() + Days::new(30),
                value_rub: dec!(25),
            }],
        }
    }

    #[test]
    fn test_maturity_window() {
        let (from, till) = maturity_window(Duration::ThreeYears, today());
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 7, 10).unwrap());
        assert_eq!(till, NaiveDate::from_ymd_opt(2027, 1, 10).unwrap());
    }

    #[test]
    fn test_global_candidates_exclude_high_risk_and_window() {
        let t = today();
        let bonds = vec![
            bond(1, t + Days::new(500), false),
            bond(2, t + Days::new(500), true),
            // Matures before half of the one-year horizon
            bond(3, t + Days::new(100), false),
            bond(4, t + Days::new(300), false),
        ];
        let reports = [
            report(1, dec!(9), dec!(1000)),
            report(2, dec!(20), dec!(1000)),
            report(3, dec!(12), dec!(1000)),
            report(4, dec!(11), dec!(1000)),
        ];
        let candidates: Vec<Candidate> = bonds
            .iter()
            .zip(reports.iter())
            .map(|(bond, report)| Candidate { bond, report })
            .collect();

        let one_year = select_global_candidates(&candidates, Duration::OneYear, t);
        assert_eq!(one_year.iter().map(|c| c.bond.id).collect::<Vec<_>>(), vec![4]);

        // Two years: maturity between 12 and 24 months from today
        let two_years = select_global_candidates(&candidates, Duration::TwoYears, t);
        assert_eq!(two_years.iter().map(|c| c.bond.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_collection_candidates_stay_near_best_rate() {
        let t = today();
        let bonds: Vec<Bond> = (1..=4).map(|id| bond(id, t + Days::new(300), false)).collect();
        let reports = [
            report(1, dec!(10), dec!(1000)),
            report(2, dec!(9.5), dec!(1000)),
            report(3, dec!(8.9), dec!(1000)),
            report(4, dec!(30), dec!(1000)),
        ];
        let candidates: Vec<Candidate> = bonds
            .iter()
            .zip(reports.iter())
            .map(|(bond, report)| Candidate { bond, report })
            .collect();
        let members = HashSet::from([1, 2, 3]);

        let picked = select_collection_candidates(&candidates, &members, Duration::OneYear, t);
        assert_eq!(picked.iter().map(|c| c.bond.id).collect::<Vec<_>>(), vec![1, 2]);

        let none = select_collection_candidates(&candidates, &HashSet::new(), Duration::OneYear, t);
        assert!(none.is_empty());
    }

    #[test]
    fn test_allocate_greedy() {
        let a = report(1, dec!(10), dec!(1030.5));
        let b = report(2, dec!(9), dec!(700));
        let c = report(3, dec!(8), dec!(50000));

        let (lots, remaining) = allocate(&[&c, &a, &b], dec!(5000));
        assert_eq!(
            lots,
            vec![
                Lot { bond_id: 1, quantity: 4 },
                Lot { bond_id: 2, quantity: 1 },
            ]
        );
        // 5000 - 4 * 1030.5 - 700
        assert_eq!(remaining, dec!(178));
    }

    #[test]
    fn test_allocate_unaffordable() {
        let a = report(1, dec!(10), dec!(150000));
        let (lots, remaining) = allocate(&[&a], dec!(100000));
        assert!(lots.is_empty());
        assert_eq!(remaining, dec!(100000));
    }

    #[test]
    fn test_normalize_parts() {
        let request = SuggestRequest {
            amount: dec!(100000),
            max_duration: Duration::ThreeYears,
            parts: Some(vec![
                SuggestPart { collection_id: "ofz".into(), weight: dec!(3) },
                SuggestPart { collection_id: "corporate".into(), weight: dec!(1) },
            ]),
        };
        let parts = normalize_parts(&request).unwrap().unwrap();
        assert_eq!(parts[0].collection_id, "corporate");
        assert_eq!(parts[0].weight, dec!(0.25));
        assert_eq!(parts[1].weight, dec!(0.75));
        assert_eq!(part_budget(request.amount, parts[1].weight, dec!(120)), dec!(75120));

        let empty = SuggestRequest { parts: Some(vec![]), ..request.clone() };
        assert!(normalize_parts(&empty).unwrap().is_none());
    }

    #[test]
    fn test_normalize_parts_rejects_bad_input() {
        let base = SuggestRequest {
            amount: dec!(100000),
            max_duration: Duration::OneYear,
            parts: None,
        };
        let zero_amount = SuggestRequest { amount: dec!(0), ..base.clone() };
        assert!(matches!(normalize_parts(&zero_amount), Err(Error::Validation(_))));

        let huge_amount = SuggestRequest { amount: Decimal::MAX, ..base.clone() };
        assert!(matches!(normalize_parts(&huge_amount), Err(Error::Validation(_))));
        let largest = SuggestRequest { amount: MAX_SUGGEST_AMOUNT, ..base.clone() };
        assert!(normalize_parts(&largest).is_ok());

        let negative = SuggestRequest {
            parts: Some(vec![SuggestPart { collection_id: "ofz".into(), weight: dec!(-1) }]),
            ..base.clone()
        };
        assert!(matches!(normalize_parts(&negative), Err(Error::Validation(_))));

        let zero_sum = SuggestRequest {
            parts: Some(vec![SuggestPart { collection_id: "ofz".into(), weight: dec!(0) }]),
            ..base
        };
        assert!(matches!(normalize_parts(&zero_sum), Err(Error::Validation(_))));
    }

    #[test]
    fn test_build_result_scales_and_weights() {
        let positions = vec![
            Position {
                report: bond_report(1, dec!(1000)).scaled(3),
                quantity: 3,
                weight: Decimal::ZERO,
            },
            Position {
                report: bond_report(2, dec!(1000)).scaled(1),
                quantity: 1,
                weight: Decimal::ZERO,
            },
        ];
        assert_eq!(positions[0].report.report.open_value, dec!(3000));
        assert_eq!(positions[0].report.cash_flow[0].value_rub, dec!(75));
        assert_eq!(positions[0].report.report.interest_rate, dec!(10));

        let result = build_result(positions);
        assert_eq!(result.amount, dec!(4000));
        assert_eq!(result.positions[0].weight, dec!(0.75));
        assert_eq!(result.positions[1].weight, dec!(0.25));
        assert_eq!(result.duration_days, 700);
        assert_eq!(result.profit_loss, dec!(320));
        assert_eq!(result.relative_profit_loss, dec!(8));
    }

    #[test]
    fn test_empty_portfolio_has_zero_aggregates() {
        let result = build_result(Vec::new());
        assert!(result.positions.is_empty());
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.interest_rate, Decimal::ZERO);
        assert_eq!(result.duration_days, 0);
    }
}
