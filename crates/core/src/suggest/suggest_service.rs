use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use crate::collections::{candidates, Candidate, CollectionRegistry};
use crate::errors::Result;
use crate::recommender::load_bond_report;
use crate::reports::Report;
use crate::store::{Store, StoreTx};

use super::suggest_engine::{
    allocate, build_result, normalize_parts, part_budget, select_collection_candidates,
    select_global_candidates,
};
use super::suggest_model::{Position, SuggestRequest, SuggestResult};

/// Builds portfolio suggestions from the stored reports and collections
pub struct SuggestService {
    store: Arc<dyn Store>,
    registry: Arc<CollectionRegistry>,
}

impl SuggestService {
    pub fn new(store: Arc<dyn Store>, registry: Arc<CollectionRegistry>) -> Self {
        Self { store, registry }
    }

    /// Suggests a portfolio for `request` as of `today`.
    ///
    /// Parts are served smallest weight first; money a part cannot spend is
    /// carried into the next one. An empty portfolio is a valid result.
    pub fn suggest(&self, request: &SuggestRequest, today: NaiveDate) -> Result<SuggestResult> {
        let parts = normalize_parts(request)?;
        if let Some(parts) = &parts {
            for part in parts {
                self.registry.require(&part.collection_id)?;
            }
        }

        let mut tx = self.store.read()?;
        let bonds = tx.list_bonds()?;
        let reports: HashMap<i64, Report> = tx
            .list_reports()?
            .into_iter()
            .map(|r| (r.bond_id, r))
            .collect();
        let all = candidates(&bonds, &reports);

        let mut positions = Vec::new();
        match parts {
            Some(parts) => {
                let mut carry = Decimal::ZERO;
                for part in parts {
                    let members: HashSet<i64> = tx
                        .list_collection_members(&part.collection_id)?
                        .into_iter()
                        .collect();
                    let picked =
                        select_collection_candidates(&all, &members, request.max_duration, today);
                    let budget = part_budget(request.amount, part.weight, carry);
                    debug!(
                        "suggest {}: {} candidate(s), budget {}",
                        part.collection_id,
                        picked.len(),
                        budget
                    );
                    carry = buy(tx.as_mut(), &picked, budget, &mut positions)?;
                }
            }
            None => {
                let picked = select_global_candidates(&all, request.max_duration, today);
                debug!("suggest: {} candidate(s), budget {}", picked.len(), request.amount);
                buy(tx.as_mut(), &picked, request.amount, &mut positions)?;
            }
        }

        Ok(build_result(positions))
    }
}

/// Allocates `budget` over `picked` and appends the resulting positions.
/// Returns the unspent budget.
fn buy(
    tx: &mut dyn StoreTx,
    picked: &[Candidate<'_>],
    budget: Decimal,
    positions: &mut Vec<Position>,
) -> Result<Decimal> {
    let reports: Vec<&Report> = picked.iter().map(|c| c.report).collect();
    let (lots, remaining) = allocate(&reports, budget);

    for lot in lots {
        let report = load_bond_report(tx, lot.bond_id)?;
        positions.push(Position {
            report: report.scaled(lot.quantity),
            quantity: lot.quantity,
            weight: Decimal::ZERO,
        });
    }
    Ok(remaining)
}
