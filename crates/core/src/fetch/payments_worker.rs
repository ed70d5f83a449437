use std::time::Instant;

use bond_recommender_exchange::{
    AmortizationSource, BondizationQuery, Cursor, ExchangeProvider,
};
use chrono::NaiveDate;
use log::{info, warn};
use rust_decimal::Decimal;
use tokio_util::sync::CancellationToken;

use crate::errors::Result;
use crate::payments::{NewPayment, PaymentType};
use crate::store::StoreTx;

use super::check_cancelled;
use super::fetch_model::PaymentFetchStats;
use super::memo::BondIdMemo;

/// Fetches coupons, then amortizations and maturities, for known bonds.
pub async fn fetch_payments(
    cancel: &CancellationToken,
    tx: &mut dyn StoreTx,
    provider: &dyn ExchangeProvider,
    memo: &mut BondIdMemo,
    today: NaiveDate,
) -> Result<PaymentFetchStats> {
    let started = Instant::now();
    let mut stats = PaymentFetchStats::default();

    fetch_coupons(cancel, tx, provider, memo, today, &mut stats).await?;
    fetch_amortizations(cancel, tx, provider, memo, today, &mut stats).await?;

    info!(
        "fetch payments: completed, {} coupon(s), {} amortization(s), {} maturity(ies) in {:?}",
        stats.new_coupons,
        stats.new_amortizations,
        stats.new_maturities,
        started.elapsed()
    );
    Ok(stats)
}

/// Incremental start date for a payment type.
///
/// The latest stored date, except that a payment dated today restarts the
/// listing from the beginning.
pub fn watermark(
    tx: &mut dyn StoreTx,
    payment_type: PaymentType,
    today: NaiveDate,
) -> Result<Option<NaiveDate>> {
    Ok(tx
        .last_payment_date(payment_type)?
        .filter(|date| *date != today))
}

async fn fetch_coupons(
    cancel: &CancellationToken,
    tx: &mut dyn StoreTx,
    provider: &dyn ExchangeProvider,
    memo: &mut BondIdMemo,
    today: NaiveDate,
    stats: &mut PaymentFetchStats,
) -> Result<()> {
    let since = watermark(tx, PaymentType::Coupon, today)?;
    let mut cursor = Cursor::coupons(provider, BondizationQuery::since(since));
    let mut count = 0;

    loop {
        info!("fetch coupons: {} item(s) processed", count);
        let Some(coupons) = cursor.next().await? else {
            break;
        };

        for coupon in coupons {
            check_cancelled(cancel)?;
            count += 1;

            let Some(bond_id) = resolve_by_isin(tx, memo, coupon.isin.as_deref())? else {
                continue;
            };
            // An undated row has no place in the cash flow; it must not fail the pass.
            let Some(date) = coupon.payment_date() else {
                warn!(
                    "fetch coupons: a coupon on {} has no date",
                    coupon.isin.as_deref().unwrap_or_default()
                );
                continue;
            };

            let created = tx.create_payment(NewPayment {
                bond_id,
                payment_type: PaymentType::Coupon,
                date,
                value: coupon.value.unwrap_or_default(),
                value_percent: coupon.value_percent.unwrap_or_default(),
                value_rub: coupon.value_rub.unwrap_or_default(),
                record_date: coupon.record_date,
                start_date: coupon.start_date,
            });
            match created {
                Ok(_) => stats.new_coupons += 1,
                Err(e) if e.is_already_exists() => {}
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}

async fn fetch_amortizations(
    cancel: &CancellationToken,
    tx: &mut dyn StoreTx,
    provider: &dyn ExchangeProvider,
    memo: &mut BondIdMemo,
    today: NaiveDate,
    stats: &mut PaymentFetchStats,
) -> Result<()> {
    let since_amortization = watermark(tx, PaymentType::Amortization, today)?;
    let since_maturity = watermark(tx, PaymentType::Maturity, today)?;
    let since = match (since_amortization, since_maturity) {
        (Some(a), Some(m)) if m > a => Some(m),
        (a, _) => a,
    };

    let mut cursor = Cursor::amortizations(provider, BondizationQuery::since(since));
    let mut count = 0;

    loop {
        info!("fetch amortizations: {} item(s) processed", count);
        let Some(amortizations) = cursor.next().await? else {
            break;
        };

        for amortization in amortizations {
            check_cancelled(cancel)?;
            count += 1;

            let Some(bond_id) = resolve_by_isin(tx, memo, amortization.isin.as_deref())? else {
                continue;
            };
            // Same as for coupons: skipped, not fatal.
            let Some(date) = amortization.date else {
                warn!(
                    "fetch amortizations: an amortization on {} has no date",
                    amortization.isin.as_deref().unwrap_or_default()
                );
                continue;
            };
            let payment_type = match amortization.data_source {
                AmortizationSource::Maturity => PaymentType::Maturity,
                AmortizationSource::Amortization => PaymentType::Amortization,
            };

            let created = tx.create_payment(NewPayment {
                bond_id,
                payment_type,
                date,
                value: amortization.value.unwrap_or(Decimal::ZERO),
                value_percent: amortization.value_percent.unwrap_or(Decimal::ZERO),
                value_rub: amortization.value_rub.unwrap_or(Decimal::ZERO),
                record_date: None,
                start_date: None,
            });
            match created {
                Ok(_) if payment_type == PaymentType::Maturity => stats.new_maturities += 1,
                Ok(_) => stats.new_amortizations += 1,
                Err(e) if e.is_already_exists() => {}
                Err(e) => return Err(e),
            }
        }
    }
    Ok(())
}

/// Bond id for an ISIN, through the pass memo. Rows without an ISIN resolve to nothing.
pub(crate) fn resolve_by_isin(
    tx: &mut dyn StoreTx,
    memo: &mut BondIdMemo,
    isin: Option<&str>,
) -> Result<Option<i64>> {
    let Some(isin) = isin.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    memo.resolve(isin, |key| tx.get_bond_by_isin(key).map(|bond| bond.id))
}
