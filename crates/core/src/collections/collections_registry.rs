use std::collections::BTreeMap;

use crate::bonds::{Bond, BondType};
use crate::constants::RUB;
use crate::errors::{Error, Result, ValidationError};
use crate::issuers::Issuer;

use super::collections_model::Collection;

/// Membership rule of a collection
pub type CollectionPredicate = fn(&Bond, &Issuer) -> bool;

/// A named bond filter the classifier ranks
#[derive(Clone)]
pub struct CollectionDefinition {
    pub id: String,
    pub name: String,
    pub predicate: CollectionPredicate,
}

impl CollectionDefinition {
    pub fn new(id: &str, name: &str, predicate: CollectionPredicate) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            predicate,
        }
    }

    /// Traded bonds with a maturity date that satisfy the rule.
    pub fn matches(&self, bond: &Bond, issuer: &Issuer) -> bool {
        bond.is_traded && bond.maturity_date.is_some() && (self.predicate)(bond, issuer)
    }

    pub fn summary(&self) -> Collection {
        Collection {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

impl std::fmt::Debug for CollectionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionDefinition")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// The set of collections known to the recommender, keyed by id
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    collections: BTreeMap<String, CollectionDefinition>,
}

impl CollectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the corporate, high-risk and OFZ collections.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for definition in [
            CollectionDefinition::new("corporate", "Корпоративные облигации", is_corporate),
            CollectionDefinition::new("highrisk", "Высокорисковые облигации", is_high_risk),
            CollectionDefinition::new("ofz", "ОФЗ", is_ofz),
        ] {
            registry
                .collections
                .insert(definition.id.clone(), definition);
        }
        registry
    }

    /// Adds a collection. Fails if the id is taken.
    pub fn register(&mut self, definition: CollectionDefinition) -> Result<()> {
        if self.collections.contains_key(&definition.id) {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "collection \"{}\" already exists",
                definition.id
            ))));
        }
        self.collections.insert(definition.id.clone(), definition);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&CollectionDefinition> {
        self.collections.get(id)
    }

    /// Like [`get`](Self::get), but an unknown id is a validation error.
    pub fn require(&self, id: &str) -> Result<&CollectionDefinition> {
        self.get(id)
            .ok_or_else(|| Error::Validation(ValidationError::UnknownCollection(id.to_string())))
    }

    /// Definitions sorted by id.
    pub fn definitions(&self) -> impl Iterator<Item = &CollectionDefinition> {
        self.collections.values()
    }

    /// Summaries sorted by id.
    pub fn list(&self) -> Vec<Collection> {
        self.definitions().map(CollectionDefinition::summary).collect()
    }
}

fn is_corporate(bond: &Bond, _issuer: &Issuer) -> bool {
    bond.bond_type == BondType::CorporateBond
        && !bond.qualified_only
        && !bond.high_risk
        && bond.face_unit == RUB
}

fn is_high_risk(bond: &Bond, _issuer: &Issuer) -> bool {
    bond.high_risk && !bond.qualified_only && bond.face_unit == RUB
}

/// Domestic OFZ only: foreign sovereign issues share the type but not the INN prefix.
fn is_ofz(bond: &Bond, issuer: &Issuer) -> bool {
    bond.bond_type == BondType::OfzBond
        && !bond.qualified_only
        && !bond.high_risk
        && bond.listing_level == 1
        && bond.face_unit == RUB
        && issuer.inn.as_deref().is_some_and(|inn| inn.starts_with("77"))
}
