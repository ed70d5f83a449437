use std::time::Instant;

use bond_recommender_exchange::{BondizationQuery, Cursor, ExchangeProvider};
use log::info;
use tokio_util::sync::CancellationToken;

use crate::errors::Result;
use crate::offers::NewOffer;
use crate::store::StoreTx;

use super::check_cancelled;
use super::fetch_model::OfferFetchStats;
use super::memo::BondIdMemo;
use super::payments_worker::resolve_by_isin;

/// Fetches every offer of known bonds. Offers already stored are left as is.
pub async fn fetch_offers(
    cancel: &CancellationToken,
    tx: &mut dyn StoreTx,
    provider: &dyn ExchangeProvider,
    memo: &mut BondIdMemo,
) -> Result<OfferFetchStats> {
    let started = Instant::now();
    let mut stats = OfferFetchStats::default();
    let mut cursor = Cursor::offers(provider, BondizationQuery::default());
    let mut count = 0;

    loop {
        info!("fetch offers: {} item(s) processed", count);
        let Some(offers) = cursor.next().await? else {
            break;
        };

        for offer in offers {
            check_cancelled(cancel)?;
            count += 1;

            let Some(bond_id) = resolve_by_isin(tx, memo, offer.isin.as_deref())? else {
                continue;
            };

            let created = tx.create_offer(NewOffer {
                bond_id,
                issue_value: offer.issue_value,
                date: offer.representative_date(),
                start_date: offer.start_date,
                end_date: offer.end_date,
                face_value: offer.face_value,
                face_unit: offer.face_unit.clone(),
                price: offer.price,
                value: offer.value,
                agent: offer.agent.clone(),
                offer_type: offer.offer_type.clone().map(Into::into),
            });
            match created {
                Ok(_) => stats.new_offers += 1,
                Err(e) if e.is_already_exists() => {}
                Err(e) => return Err(e),
            }
        }
    }

    info!(
        "fetch offers: completed, {} item(s), {} new offer(s) in {:?}",
        count,
        stats.new_offers,
        started.elapsed()
    );
    Ok(stats)
}
