//! Ranks bonds into collections.

use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::bonds::Bond;
use crate::constants::MIN_DAYS_TILL_MATURITY;
use crate::issuers::Issuer;
use crate::reports::Report;
use crate::utils::decimal_utils::mean_and_std_dev;
use crate::utils::time_utils::add_years;

use super::collections_model::{CollectionBond, Duration};
use super::collections_registry::CollectionDefinition;

/// A bond paired with its report.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub bond: &'a Bond,
    pub report: &'a Report,
}

impl Candidate<'_> {
    pub fn rate(&self) -> Decimal {
        self.report.interest_rate
    }

    pub fn matures_within(&self, from: NaiveDate, till: NaiveDate) -> bool {
        self.bond
            .maturity_date
            .is_some_and(|d| d >= from && d <= till)
    }
}

/// Pairs bonds with their reports. Bonds without a report are left out.
pub fn candidates<'a>(bonds: &'a [Bond], reports: &'a HashMap<i64, Report>) -> Vec<Candidate<'a>> {
    bonds
        .iter()
        .filter_map(|bond| {
            reports
                .get(&bond.id)
                .map(|report| Candidate { bond, report })
        })
        .collect()
}

/// Drops items whose rate lies above `mean + 3σ` (population σ of the whole input).
pub fn reject_outliers<T>(items: Vec<T>, rate: impl Fn(&T) -> Decimal) -> Vec<T> {
    let rates: Vec<Decimal> = items.iter().map(&rate).collect();
    let Some((mean, std_dev)) = mean_and_std_dev(&rates) else {
        return items;
    };
    let ceiling = mean + Decimal::from(3) * std_dev;
    items.into_iter().filter(|i| rate(i) <= ceiling).collect()
}

/// Orders by rate descending, ties by bond id.
pub fn rank_by_rate(candidates: &mut [Candidate<'_>]) {
    candidates.sort_by(|a, b| b.rate().cmp(&a.rate()).then(a.bond.id.cmp(&b.bond.id)));
}

/// Ranks the members of one collection for every duration.
///
/// Members are bonds matching the collection rule that have a report with a
/// positive rate. Outliers are rejected over the whole member set, then each
/// duration keeps members maturing between `today + 3 days` and
/// `today + N years`, ranked best rate first.
pub fn classify(
    definition: &CollectionDefinition,
    candidates: &[Candidate<'_>],
    issuers: &HashMap<i64, Issuer>,
    today: NaiveDate,
) -> Vec<CollectionBond> {
    let members: Vec<Candidate<'_>> = candidates
        .iter()
        .filter(|c| c.rate() > Decimal::ZERO)
        .filter(|c| {
            issuers
                .get(&c.bond.issuer_id)
                .is_some_and(|issuer| definition.matches(c.bond, issuer))
        })
        .copied()
        .collect();
    let members = reject_outliers(members, Candidate::rate);

    let earliest = today + Days::new(MIN_DAYS_TILL_MATURITY as u64);
    let mut rows = Vec::new();
    for duration in Duration::ALL {
        let latest = add_years(today, duration.years());
        let mut ranked: Vec<Candidate<'_>> = members
            .iter()
            .filter(|c| c.matures_within(earliest, latest))
            .copied()
            .collect();
        rank_by_rate(&mut ranked);

        rows.extend(ranked.iter().enumerate().map(|(i, c)| CollectionBond {
            collection_id: definition.id.clone(),
            duration,
            bond_id: c.bond.id,
            index: i as i32 + 1,
        }));
    }
    rows
}
