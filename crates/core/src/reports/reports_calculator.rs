//! Pure report and cash-flow computation.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::bonds::Bond;
use crate::constants::{DAYS_PER_YEAR, OPEN_FEE_RATE, RUB, TAX_RATE};
use crate::market_data::MarketSnapshot;
use crate::payments::{Payment, PaymentType};
use crate::utils::decimal_utils::round2;

use super::reports_model::{CashFlowItem, Report};

/// Projects stored payments onto the future cash flow of every reportable bond.
///
/// Only RUB-denominated traded bonds contribute, and only payments dated after
/// `today` with a positive nominal value. Output is ordered by bond, then
/// date, then payment type code.
pub fn project_cash_flows(
    bonds: &[Bond],
    payments: &[Payment],
    today: NaiveDate,
) -> Vec<CashFlowItem> {
    let eligible: HashMap<i64, &Bond> = bonds
        .iter()
        .filter(|b| b.face_unit == RUB && b.is_traded)
        .map(|b| (b.id, b))
        .collect();

    let mut items: Vec<CashFlowItem> = payments
        .iter()
        .filter(|p| eligible.contains_key(&p.bond_id))
        .filter(|p| p.date > today && p.value > Decimal::ZERO)
        .map(|p| CashFlowItem {
            bond_id: p.bond_id,
            payment_type: p.payment_type,
            date: p.date,
            value_rub: p.value_rub,
        })
        .collect();

    items.sort_by(|a, b| {
        a.bond_id
            .cmp(&b.bond_id)
            .then(a.date.cmp(&b.date))
            .then(a.payment_type.as_str().cmp(b.payment_type.as_str()))
    });
    items
}

/// Computes the hold-to-maturity report of a bond.
///
/// Returns `None` when the bond is not reportable: not RUB-denominated, not
/// traded, already matured, or lacking a price, accrued interest, face value
/// or a RUB quote.
pub fn compute_report(
    bond: &Bond,
    snapshot: &MarketSnapshot,
    cash_flows: &[CashFlowItem],
    today: NaiveDate,
) -> Option<Report> {
    if bond.face_unit != RUB || !bond.is_traded {
        return None;
    }
    let maturity_date = bond.maturity_date.filter(|d| *d > today)?;
    if snapshot.currency.as_deref() != Some(RUB) {
        return None;
    }
    let price = snapshot.price()?;
    let accrued_interest = snapshot.accrued_interest?;
    let face_value = snapshot.face_value?;

    let days_till_maturity = (maturity_date - today).num_days();
    let open_value = price * face_value / dec!(100) + accrued_interest;
    if open_value <= Decimal::ZERO {
        return None;
    }
    let open_fee = round2(open_value * OPEN_FEE_RATE);

    let sum_of = |payment_type: PaymentType| -> Decimal {
        cash_flows
            .iter()
            .filter(|c| c.bond_id == bond.id && c.payment_type == payment_type)
            .map(|c| c.value_rub)
            .sum()
    };
    let coupon_payments = sum_of(PaymentType::Coupon);
    let amortization_payments = sum_of(PaymentType::Amortization);
    let maturity_payment = sum_of(PaymentType::Maturity);
    let revenue = coupon_payments + amortization_payments + maturity_payment;

    // Discount income is taxed; a premium is not deducted.
    let taxes = if price < dec!(100) {
        round2(
            (coupon_payments
                + amortization_payments
                + face_value * (Decimal::ONE - price / dec!(100)))
                * TAX_RATE,
        )
    } else {
        round2((coupon_payments + amortization_payments) * TAX_RATE)
    };

    let profit_loss = revenue - open_value - open_fee - taxes;
    let relative_profit_loss = dec!(100) * profit_loss / open_value;
    let years = Decimal::from(days_till_maturity) / DAYS_PER_YEAR;
    let interest_rate = relative_profit_loss / years;

    Some(Report {
        bond_id: bond.id,
        days_till_maturity,
        currency: RUB.to_string(),
        open_price: price,
        open_accrued_interest: accrued_interest,
        open_face_value: face_value,
        open_fee,
        open_value: round2(open_value),
        coupon_payments: round2(coupon_payments),
        amortization_payments: round2(amortization_payments),
        maturity_payment: round2(maturity_payment),
        taxes,
        revenue: round2(revenue),
        profit_loss: round2(profit_loss),
        relative_profit_loss: round2(relative_profit_loss),
        interest_rate: round2(interest_rate),
    })
}

/// Computes reports for every bond that has a snapshot, ordered by bond id.
pub fn compute_reports(
    bonds: &[Bond],
    snapshots: &[MarketSnapshot],
    cash_flows: &[CashFlowItem],
    today: NaiveDate,
) -> Vec<Report> {
    let snapshots: HashMap<i64, &MarketSnapshot> =
        snapshots.iter().map(|s| (s.bond_id, s)).collect();

    let mut by_bond: HashMap<i64, Vec<CashFlowItem>> = HashMap::new();
    for item in cash_flows {
        by_bond.entry(item.bond_id).or_default().push(item.clone());
    }

    let mut reports: Vec<Report> = bonds
        .iter()
        .filter_map(|bond| {
            let snapshot = snapshots.get(&bond.id)?;
            let flows = by_bond.get(&bond.id).map(Vec::as_slice).unwrap_or(&[]);
            compute_report(bond, snapshot, flows, today)
        })
        .collect();
    reports.sort_by_key(|r| r.bond_id);
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonds::BondType;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time() -> NaiveDateTime {
        date(2024, 1, 10).and_hms_opt(18, 45, 0).unwrap()
    }

    fn bond(id: i64, maturity: NaiveDate) -> Bond {
        Bond {
            id,
            issuer_id: 1,
            moex_id: 1000 + id,
            security_id: format!("SU{}", id),
            isin: format!("RU000{}", id),
            short_name: format!("Bond {}", id),
            full_name: format!("Bond {}", id),
            is_traded: true,
            qualified_only: false,
            high_risk: false,
            bond_type: BondType::CorporateBond,
            primary_board_id: "TQCB".into(),
            market_price_board_id: "TQCB".into(),
            initial_face_value: dec!(1000),
            face_unit: RUB.into(),
            issue_date: Some(date(2020, 1, 1)),
            maturity_date: Some(maturity),
            listing_level: 2,
            coupon_frequency: 2,
        }
    }

    fn snapshot(bond_id: i64, price: Decimal) -> MarketSnapshot {
        MarketSnapshot {
            bond_id,
            time: time(),
            face_value: Some(dec!(1000)),
            currency: Some(RUB.into()),
            last: Some(price),
            last_change: None,
            close_price: None,
            legal_close_price: None,
            accrued_interest: Some(dec!(10)),
        }
    }

    fn flow(bond_id: i64, payment_type: PaymentType, d: NaiveDate, v: Decimal) -> CashFlowItem {
        CashFlowItem {
            bond_id,
            payment_type,
            date: d,
            value_rub: v,
        }
    }

    #[test]
    fn test_discount_bond_report() {
        let today = date(2024, 1, 10);
        let bond = bond(1, date(2025, 1, 10));
        let flows = vec![
            flow(1, PaymentType::Coupon, date(2024, 7, 10), dec!(40)),
            flow(1, PaymentType::Coupon, date(2025, 1, 10), dec!(40)),
            flow(1, PaymentType::Maturity, date(2025, 1, 10), dec!(1000)),
        ];

        let report = compute_report(&bond, &snapshot(1, dec!(95)), &flows, today).unwrap();

        assert_eq!(report.days_till_maturity, 366);
        // 95 * 1000 / 100 + 10
        assert_eq!(report.open_value, dec!(960));
        assert_eq!(report.open_fee, dec!(0.48));
        assert_eq!(report.coupon_payments, dec!(80));
        assert_eq!(report.maturity_payment, dec!(1000));
        assert_eq!(report.revenue, dec!(1080));
        // (80 + 0 + 1000 * 0.05) * 0.13
        assert_eq!(report.taxes, dec!(16.90));
        // 1080 - 960 - 0.48 - 16.90
        assert_eq!(report.profit_loss, dec!(102.62));
        assert_eq!(report.relative_profit_loss, dec!(10.69));
        // 10.6895833.. / (366 / 356.25)
        assert_eq!(report.interest_rate, dec!(10.40));
    }

    #[test]
    fn test_premium_bond_is_taxed_on_coupons_only() {
        let today = date(2024, 1, 10);
        let bond = bond(1, date(2025, 1, 10));
        let flows = vec![
            flow(1, PaymentType::Coupon, date(2024, 7, 10), dec!(50)),
            flow(1, PaymentType::Amortization, date(2024, 7, 10), dec!(500)),
            flow(1, PaymentType::Maturity, date(2025, 1, 10), dec!(500)),
        ];

        let report = compute_report(&bond, &snapshot(1, dec!(102)), &flows, today).unwrap();
        // (50 + 500) * 0.13
        assert_eq!(report.taxes, dec!(71.50));
        assert_eq!(report.amortization_payments, dec!(500));
    }

    #[test]
    fn test_ineligible_bonds_have_no_report() {
        let today = date(2024, 1, 10);

        let mut matured = bond(1, today);
        assert!(compute_report(&matured, &snapshot(1, dec!(99)), &[], today).is_none());
        matured.maturity_date = None;
        assert!(compute_report(&matured, &snapshot(1, dec!(99)), &[], today).is_none());

        let mut foreign = bond(2, date(2026, 1, 1));
        foreign.face_unit = "USD".into();
        assert!(compute_report(&foreign, &snapshot(2, dec!(99)), &[], today).is_none());

        let mut delisted = bond(3, date(2026, 1, 1));
        delisted.is_traded = false;
        assert!(compute_report(&delisted, &snapshot(3, dec!(99)), &[], today).is_none());

        let live = bond(4, date(2026, 1, 1));
        let mut unpriced = snapshot(4, dec!(99));
        unpriced.last = None;
        assert!(compute_report(&live, &unpriced, &[], today).is_none());

        let mut no_accrued = snapshot(4, dec!(99));
        no_accrued.accrued_interest = None;
        assert!(compute_report(&live, &no_accrued, &[], today).is_none());

        let mut sur = snapshot(4, dec!(99));
        sur.currency = Some("USD".into());
        assert!(compute_report(&live, &sur, &[], today).is_none());
    }

    #[test]
    fn test_cash_flow_projection() {
        let today = date(2024, 1, 10);
        let rub = bond(1, date(2025, 1, 10));
        let mut usd = bond(2, date(2025, 1, 10));
        usd.face_unit = "USD".into();

        let payment = |id: i64, bond_id: i64, payment_type: PaymentType, d: NaiveDate, value: Decimal| Payment {
            id,
            bond_id,
            payment_type,
            date: d,
            value,
            value_percent: Decimal::ZERO,
            value_rub: value,
            record_date: None,
            start_date: None,
        };
        let payments = vec![
            payment(1, 1, PaymentType::Maturity, date(2025, 1, 10), dec!(1000)),
            payment(2, 1, PaymentType::Coupon, date(2025, 1, 10), dec!(40)),
            payment(3, 1, PaymentType::Coupon, date(2024, 1, 10), dec!(40)),
            payment(4, 1, PaymentType::Coupon, date(2024, 7, 10), dec!(0)),
            payment(5, 2, PaymentType::Coupon, date(2024, 7, 10), dec!(10)),
            payment(6, 1, PaymentType::Amortization, date(2025, 1, 10), dec!(100)),
        ];

        let items = project_cash_flows(&[rub, usd], &payments, today);
        let kinds: Vec<PaymentType> = items.iter().map(|i| i.payment_type).collect();
        assert_eq!(
            kinds,
            vec![PaymentType::Amortization, PaymentType::Coupon, PaymentType::Maturity]
        );
        assert!(items.iter().all(|i| i.bond_id == 1 && i.date > today));
    }

    #[test]
    fn test_compute_reports_skips_bonds_without_snapshot() {
        let today = date(2024, 1, 10);
        let bonds = vec![bond(2, date(2026, 1, 1)), bond(1, date(2026, 1, 1))];
        let snapshots = vec![snapshot(1, dec!(99)), snapshot(2, dec!(99))];

        let reports = compute_reports(&bonds, &snapshots, &[], today);
        assert_eq!(reports.iter().map(|r| r.bond_id).collect::<Vec<_>>(), vec![1, 2]);

        let reports = compute_reports(&bonds, &snapshots[..1], &[], today);
        assert_eq!(reports.len(), 1);
    }
}
