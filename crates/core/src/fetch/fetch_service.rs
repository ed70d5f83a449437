use std::sync::Arc;
use std::time::{Duration, Instant};

use bond_recommender_exchange::ExchangeProvider;
use chrono::NaiveDate;
use log::{info, warn};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::errors::Result;
use crate::recommender::RecommenderService;
use crate::store::Store;

use super::bonds_worker::fetch_bonds;
use super::fetch_model::{MarketDataFetchStats, StaticFetchStats};
use super::market_data_worker::fetch_market_data;
use super::memo::BondIdMemo;
use super::offers_worker::fetch_offers;
use super::payments_worker::fetch_payments;

/// How long a market-data refresh waits for a running fetch before giving up.
const MARKET_DATA_LOCK_TIMEOUT: Duration = Duration::from_secs(1);

/// Serializes fetch passes and commits each one with a rebuild of the derived data.
pub struct FetchService {
    store: Arc<dyn Store>,
    provider: Arc<dyn ExchangeProvider>,
    recommender: Arc<RecommenderService>,
    lock: Mutex<()>,
    cancel: CancellationToken,
}

impl FetchService {
    pub fn new(
        store: Arc<dyn Store>,
        provider: Arc<dyn ExchangeProvider>,
        recommender: Arc<RecommenderService>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            store,
            provider,
            recommender,
            lock: Mutex::new(()),
            cancel,
        }
    }

    /// Fetches both data sets when the store holds no bond yet.
    pub async fn init(&self, today: NaiveDate) -> Result<()> {
        let bond_count = self.store.read()?.count_bonds()?;
        if bond_count > 0 {
            info!("static data is up to date: {} bond(s)", bond_count);
            return Ok(());
        }

        self.fetch_static_data(today).await?;
        self.fetch_market_data(today).await?;
        Ok(())
    }

    /// Securities, payments and offers in one transaction, followed by a rebuild.
    pub async fn fetch_static_data(&self, today: NaiveDate) -> Result<StaticFetchStats> {
        let _guard = self.lock.lock().await;
        let started = Instant::now();
        info!("fetch static data: started");

        let mut tx = self.store.begin()?;
        let mut memo = BondIdMemo::new();
        let provider = self.provider.as_ref();

        let bonds = fetch_bonds(&self.cancel, tx.as_mut(), provider, &mut memo).await?;
        let payments =
            fetch_payments(&self.cancel, tx.as_mut(), provider, &mut memo, today).await?;
        let offers = fetch_offers(&self.cancel, tx.as_mut(), provider, &mut memo).await?;

        self.recommender.rebuild(tx.as_mut(), today)?;
        tx.commit()?;

        info!("fetch static data: completed in {:?}", started.elapsed());
        Ok(StaticFetchStats {
            bonds,
            payments,
            offers,
        })
    }

    /// Market snapshots and a rebuild, skipped while another pass holds the lock.
    ///
    /// Returns `None` when skipped.
    pub async fn fetch_market_data(
        &self,
        today: NaiveDate,
    ) -> Result<Option<MarketDataFetchStats>> {
        let Ok(_guard) = tokio::time::timeout(MARKET_DATA_LOCK_TIMEOUT, self.lock.lock()).await
        else {
            warn!("fetch market data: another fetch is running, skipped");
            return Ok(None);
        };
        let started = Instant::now();
        info!("fetch market data: started");

        let mut tx = self.store.begin()?;
        let mut memo = BondIdMemo::new();

        let stats = fetch_market_data(
            &self.cancel,
            tx.as_mut(),
            self.provider.as_ref(),
            &mut memo,
        )
        .await?;

        self.recommender.rebuild(tx.as_mut(), today)?;
        tx.commit()?;

        info!("fetch market data: completed in {:?}", started.elapsed());
        Ok(Some(stats))
    }
}
