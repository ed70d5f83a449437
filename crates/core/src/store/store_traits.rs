use crate::bonds::BondRepositoryTrait;
use crate::collections::CollectionRepositoryTrait;
use crate::errors::Result;
use crate::issuers::IssuerRepositoryTrait;
use crate::market_data::MarketDataRepositoryTrait;
use crate::offers::OfferRepositoryTrait;
use crate::payments::PaymentRepositoryTrait;
use crate::reports::{CashFlowRepositoryTrait, ReportRepositoryTrait};
use crate::search::SearchRepositoryTrait;

/// An open store transaction exposing every repository.
///
/// Dropping a transaction without calling [`commit`](StoreTx::commit) rolls it back.
pub trait StoreTx:
    IssuerRepositoryTrait
    + BondRepositoryTrait
    + PaymentRepositoryTrait
    + OfferRepositoryTrait
    + MarketDataRepositoryTrait
    + CashFlowRepositoryTrait
    + ReportRepositoryTrait
    + CollectionRepositoryTrait
    + SearchRepositoryTrait
    + Send
{
    fn commit(self: Box<Self>) -> Result<()>;
}

/// Transactional store
pub trait Store: Send + Sync {
    /// Opens a write transaction. Writers are serialized.
    fn begin(&self) -> Result<Box<dyn StoreTx>>;

    /// Opens a read transaction.
    fn read(&self) -> Result<Box<dyn StoreTx>>;
}
