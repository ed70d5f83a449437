use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use log::info;

use crate::collections::{
    candidates, classify, Collection, CollectionListing, CollectionRegistry, Duration,
};
use crate::constants::COLLECTION_PAGE_SIZE;
use crate::errors::{Error, Result};
use crate::issuers::Issuer;
use crate::reports::{compute_reports, project_cash_flows, BondReport, Report};
use crate::store::{Store, StoreTx};

/// Loads a bond with its issuer, market data, report and cash flow.
///
/// Fails with `DatabaseError::NotFound` when any part is missing.
pub fn load_bond_report(tx: &mut dyn StoreTx, bond_id: i64) -> Result<BondReport> {
    let bond = tx.get_bond(bond_id)?;
    let issuer = tx.get_issuer(bond.issuer_id)?;
    let market_data = tx.get_market_data(bond_id)?;
    let report = tx.get_report(bond_id)?;
    let cash_flow = tx.list_bond_cash_flows(bond_id)?;

    Ok(BondReport {
        bond,
        issuer,
        market_data,
        report,
        cash_flow,
    })
}

/// Derived data (cash flows, reports, collections) and its read side
pub struct RecommenderService {
    store: Arc<dyn Store>,
    registry: Arc<CollectionRegistry>,
}

impl RecommenderService {
    pub fn new(store: Arc<dyn Store>, registry: Arc<CollectionRegistry>) -> Self {
        Self { store, registry }
    }

    pub fn registry(&self) -> &CollectionRegistry {
        &self.registry
    }

    /// Collections sorted by id.
    pub fn list_collections(&self) -> Vec<Collection> {
        self.registry.list()
    }

    pub fn get_collection(&self, id: &str) -> Result<Collection> {
        self.registry
            .get(id)
            .map(|c| c.summary())
            .ok_or_else(|| Error::NotFound(format!("collection \"{}\"", id)))
    }

    /// Top-ranked bonds of a collection for a duration.
    pub fn list_collection_bonds(&self, id: &str, duration: Duration) -> Result<CollectionListing> {
        let collection = self.get_collection(id)?;

        let mut tx = self.store.read()?;
        let bond_ids =
            tx.list_collection_bond_ids(id, duration, COLLECTION_PAGE_SIZE as i64)?;
        let bonds = bond_ids
            .into_iter()
            .map(|bond_id| load_bond_report(tx.as_mut(), bond_id))
            .collect::<Result<Vec<_>>>()?;

        Ok(CollectionListing {
            collection,
            duration,
            bonds,
        })
    }

    /// Report of a bond found by numeric id, ISIN or security id.
    pub fn get_bond_report(&self, key: &str) -> Result<BondReport> {
        let mut tx = self.store.read()?;

        let found = match key.parse::<i64>() {
            Ok(id) => tx.get_bond(id),
            Err(_) => match tx.get_bond_by_isin(key) {
                Err(e) if e.is_not_found() => tx.get_bond_by_security_id(key),
                other => other,
            },
        };
        let bond = found.map_err(|e| not_found(e, key))?;

        load_bond_report(tx.as_mut(), bond.id).map_err(|e| not_found(e, key))
    }

    /// Recomputes cash flows, reports and every collection inside `tx`.
    ///
    /// Each step replaces all rows written by the previous rebuild.
    pub fn rebuild(&self, tx: &mut dyn StoreTx, today: NaiveDate) -> Result<()> {
        let started = Instant::now();

        let bonds = tx.list_bonds()?;
        let payments = tx.list_payments()?;
        let cash_flows = project_cash_flows(&bonds, &payments, today);
        let cash_flow_count = tx.replace_cash_flows(&cash_flows)?;

        let snapshots = tx.list_market_data()?;
        let reports = compute_reports(&bonds, &snapshots, &cash_flows, today);
        let report_count = tx.replace_reports(&reports)?;

        let issuers: HashMap<i64, Issuer> = tx
            .list_issuers()?
            .into_iter()
            .map(|i| (i.id, i))
            .collect();
        let reports: HashMap<i64, Report> = reports.into_iter().map(|r| (r.bond_id, r)).collect();
        let all = candidates(&bonds, &reports);

        for definition in self.registry.definitions() {
            let rows = classify(definition, &all, &issuers, today);
            let count = tx.replace_collection_bonds(&definition.id, &rows)?;
            info!("rebuild: collection {}: {} row(s)", definition.id, count);
        }

        info!(
            "rebuild: {} cash flow item(s), {} report(s) in {:?}",
            cash_flow_count,
            report_count,
            started.elapsed()
        );
        Ok(())
    }
}

fn not_found(err: Error, key: &str) -> Error {
    if err.is_not_found() {
        Error::NotFound(format!("bond \"{}\"", key))
    } else {
        err
    }
}
