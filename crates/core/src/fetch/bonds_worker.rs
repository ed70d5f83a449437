use std::time::Instant;

use bond_recommender_exchange::{Cursor, ExchangeProvider, Security, SecurityListQuery};
use log::{debug, info};
use tokio_util::sync::CancellationToken;

use crate::bonds::{BondType, NewBond};
use crate::errors::Result;
use crate::issuers::{Issuer, NewIssuer};
use crate::store::StoreTx;

use super::fetch_model::BondFetchStats;
use super::memo::BondIdMemo;
use super::{check_cancelled, normalize_currency};

/// Registers issuers and bonds for every traded security not seen before.
///
/// Existing bonds are never updated. A description is fetched only for
/// securities that are about to be created.
pub async fn fetch_bonds(
    cancel: &CancellationToken,
    tx: &mut dyn StoreTx,
    provider: &dyn ExchangeProvider,
    memo: &mut BondIdMemo,
) -> Result<BondFetchStats> {
    let started = Instant::now();
    let mut stats = BondFetchStats::default();
    let mut cursor = Cursor::securities(provider, SecurityListQuery::default());
    let mut count = 0;

    loop {
        info!("fetch bonds: {} item(s) processed", count);
        let Some(securities) = cursor.next().await? else {
            break;
        };

        for security in securities {
            check_cancelled(cancel)?;
            count += 1;

            let Some(bond_type) = BondType::from_security_type(security.security_type) else {
                debug!("fetch bonds: skipping {}, not a bond", security.security_id);
                continue;
            };
            let Some(issuer) = resolve_issuer(tx, &security, &mut stats)? else {
                debug!("fetch bonds: skipping {}, no issuer", security.security_id);
                continue;
            };
            if bond_exists(tx, &security)? {
                continue;
            }

            let description = provider
                .get_security_description(&security.security_id)
                .await?;
            let props = description.bond_properties(&security.isin)?;

            let created = tx.create_bond(NewBond {
                issuer_id: issuer.id,
                moex_id: security.id,
                security_id: security.security_id.clone(),
                isin: security.isin.clone(),
                short_name: security.short_name.clone(),
                full_name: security.name.clone(),
                is_traded: security.is_traded,
                qualified_only: props.qualified_only,
                high_risk: props.high_risk,
                bond_type,
                primary_board_id: security.primary_board_id.clone(),
                market_price_board_id: security.market_price_board_id.clone(),
                initial_face_value: props.initial_face_value,
                face_unit: normalize_currency(&props.face_unit),
                issue_date: props.issue_date,
                maturity_date: props.maturity_date,
                listing_level: props.listing_level,
                coupon_frequency: props.coupon_frequency,
            });
            let bond = match created {
                Ok(bond) => bond,
                Err(e) if e.is_already_exists() => continue,
                Err(e) => return Err(e),
            };

            info!("new bond: #{} {} \"{}\"", bond.moex_id, bond.isin, bond.short_name);
            memo.insert(&bond.isin, bond.id);
            stats.new_bonds += 1;
        }
    }

    info!(
        "fetch bonds: completed, {} item(s), {} new issuer(s), {} new bond(s) in {:?}",
        count,
        stats.new_issuers,
        stats.new_bonds,
        started.elapsed()
    );
    Ok(stats)
}

/// Finds the issuer of a security by exchange id, creating it on first sight.
fn resolve_issuer(
    tx: &mut dyn StoreTx,
    security: &Security,
    stats: &mut BondFetchStats,
) -> Result<Option<Issuer>> {
    let Some(moex_id) = security.issuer_id else {
        return Ok(None);
    };

    match tx.get_issuer_by_moex_id(moex_id) {
        Ok(issuer) => return Ok(Some(issuer)),
        Err(e) if e.is_not_found() => {}
        Err(e) => return Err(e),
    }

    let issuer = tx.create_issuer(NewIssuer {
        moex_id,
        name: security.issuer_name.clone(),
        inn: security.issuer_inn.clone(),
        okpo: security.issuer_okpo.clone(),
    })?;
    info!("new issuer: #{} \"{}\"", issuer.moex_id, issuer.name);
    stats.new_issuers += 1;
    Ok(Some(issuer))
}

/// True if a bond with the same exchange id, ISIN or security id is stored.
fn bond_exists(tx: &mut dyn StoreTx, security: &Security) -> Result<bool> {
    Ok(found(tx.get_bond_by_moex_id(security.id))?
        || found(tx.get_bond_by_isin(&security.isin))?
        || found(tx.get_bond_by_security_id(&security.security_id))?)
}

fn found<T>(lookup: Result<T>) -> Result<bool> {
    match lookup {
        Ok(_) => Ok(true),
        Err(e) if e.is_not_found() => Ok(false),
        Err(e) => Err(e),
    }
}
