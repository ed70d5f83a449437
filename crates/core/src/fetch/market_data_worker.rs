use std::time::Instant;

use bond_recommender_exchange::ExchangeProvider;
use log::{debug, info};
use tokio_util::sync::CancellationToken;

use crate::errors::Result;
use crate::market_data::MarketSnapshot;
use crate::store::StoreTx;

use super::fetch_model::MarketDataFetchStats;
use super::memo::BondIdMemo;
use super::{check_cancelled, normalize_currency};

/// Overwrites the market snapshot of every known bond from one exchange snapshot.
pub async fn fetch_market_data(
    cancel: &CancellationToken,
    tx: &mut dyn StoreTx,
    provider: &dyn ExchangeProvider,
    memo: &mut BondIdMemo,
) -> Result<MarketDataFetchStats> {
    let started = Instant::now();
    let mut stats = MarketDataFetchStats::default();

    let items = provider.get_market_data().await?;
    info!("fetch market data: {} item(s) received", items.len());

    for item in items {
        check_cancelled(cancel)?;

        let Some(time) = item.time else {
            stats.skipped += 1;
            continue;
        };
        let bond_id = memo.resolve(&item.security_id, |key| {
            tx.get_bond_by_security_id(key).map(|bond| bond.id)
        })?;
        let Some(bond_id) = bond_id else {
            debug!("fetch market data: unknown security {}", item.security_id);
            stats.skipped += 1;
            continue;
        };

        tx.upsert_market_data(MarketSnapshot {
            bond_id,
            time,
            face_value: item.face_value,
            currency: item.currency.as_deref().map(normalize_currency),
            last: item.last,
            last_change: item.last_change,
            close_price: item.close_price,
            legal_close_price: item.legal_close_price,
            accrued_interest: item.accrued_interest,
        })?;
        stats.updated += 1;
    }

    info!(
        "fetch market data: completed, {} updated, {} skipped in {:?}",
        stats.updated,
        stats.skipped,
        started.elapsed()
    );
    Ok(stats)
}
