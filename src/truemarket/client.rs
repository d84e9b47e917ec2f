use std::future::Future;
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use futures_util::future::try_join_all;

use super::contract::IPolynanceTruemarketHelper::{self, IPolynanceTruemarketHelperInstance};
use super::convert::to_prediction_market_event;
use super::transport;
use crate::config::ClientConfig;
use crate::errors::TrueMarketError;
use crate::metrics::{record_events_converted, record_rpc_call};
use crate::models::{MarketDetail, PredictionMarketEvent};

/// Page size used by [`TrueMarketClient::get_active_markets`] unless overridden.
pub const DEFAULT_PAGE_SIZE: u64 = 50;

/// Raw reads exposed by the helper contract.
pub trait MarketSource: Send + Sync {
    fn active_market_addresses(
        &self,
    ) -> impl Future<Output = Result<Vec<Address>, TrueMarketError>> + Send;

    fn market_detail(
        &self,
        market: Address,
    ) -> impl Future<Output = Result<MarketDetail, TrueMarketError>> + Send;

    fn active_market_details(
        &self,
        page: u64,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<MarketDetail>, TrueMarketError>> + Send;
}

/// The helper contract reached through a shared provider.
#[derive(Clone)]
pub struct HelperContract {
    provider: Arc<DynProvider>,
    contract: IPolynanceTruemarketHelperInstance<DynProvider>,
}

impl HelperContract {
    pub fn new(provider: Arc<DynProvider>, address: Address) -> Self {
        let contract = IPolynanceTruemarketHelper::new(address, DynProvider::clone(&provider));
        Self { provider, contract }
    }

    pub fn address(&self) -> Address {
        *self.contract.address()
    }

    /// The shared provider this contract reads through.
    pub fn provider(&self) -> &Arc<DynProvider> {
        &self.provider
    }
}

impl MarketSource for HelperContract {
    async fn active_market_addresses(&self) -> Result<Vec<Address>, TrueMarketError> {
        record_rpc_call("getAllActiveMarketsAddress");
        let addresses = self.contract.getAllActiveMarketsAddress().call().await?;
        Ok(addresses)
    }

    async fn market_detail(&self, market: Address) -> Result<MarketDetail, TrueMarketError> {
        record_rpc_call("getMarketdetail");
        let detail = self.contract.getMarketdetail(market).call().await?;
        Ok(detail.into())
    }

    async fn active_market_details(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<MarketDetail>, TrueMarketError> {
        record_rpc_call("getAllActiveMarketDetails");
        let details = self
            .contract
            .getAllActiveMarketDetails(U256::from(page), U256::from(limit))
            .call()
            .await?;
        Ok(details.into_iter().map(MarketDetail::from).collect())
    }
}

/// Number of pages needed to cover `total` items.
pub fn page_count(total: u64, page_size: u64) -> Result<u64, TrueMarketError> {
    if page_size == 0 {
        return Err(TrueMarketError::InvalidPageSize);
    }
    Ok(total.div_ceil(page_size))
}

/// Reads TrueMarket markets and returns them as Polynance SDK events.
#[derive(Clone)]
pub struct TrueMarketClient<S = HelperContract> {
    source: S,
    page_size: u64,
}

impl TrueMarketClient<HelperContract> {
    /// Client for the helper at `helper_address`, sharing the provider of any
    /// other client built for the same `rpc_url`.
    ///
    /// Outside a tokio runtime this fails with [`TrueMarketError::MissingRuntime`].
    pub fn new(rpc_url: &str, helper_address: Address) -> Result<Self, TrueMarketError> {
        let provider = transport::provider_for(rpc_url)?;
        Ok(Self::with_source(HelperContract::new(provider, helper_address)))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, TrueMarketError> {
        Self::new(&config.rpc_url, config.helper_address)?.with_page_size(config.page_size)
    }
}

impl<S: MarketSource> TrueMarketClient<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size used by [`Self::get_active_markets`].
    pub fn with_page_size(mut self, page_size: u64) -> Result<Self, TrueMarketError> {
        if page_size == 0 {
            return Err(TrueMarketError::InvalidPageSize);
        }
        self.page_size = page_size;
        Ok(self)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub async fn get_all_active_markets_address(&self) -> Result<Vec<Address>, TrueMarketError> {
        self.source.active_market_addresses().await
    }

    pub async fn get_market_detail(&self, market: Address) -> Result<MarketDetail, TrueMarketError> {
        self.source.market_detail(market).await
    }

    pub async fn get_active_market_detail_page(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<MarketDetail>, TrueMarketError> {
        self.source.active_market_details(page, limit).await
    }

    pub async fn get_market_by_address(
        &self,
        market: Address,
    ) -> Result<PredictionMarketEvent, TrueMarketError> {
        let detail = self.source.market_detail(market).await?;
        record_events_converted(1);
        Ok(to_prediction_market_event(&detail))
    }

    /// One page of active markets, in contract order.
    pub async fn get_all_active_market_details(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<PredictionMarketEvent>, TrueMarketError> {
        let details = self.source.active_market_details(page, limit).await?;
        tracing::debug!(page, limit, returned = details.len(), "fetched market page");

        record_events_converted(details.len());
        Ok(details.iter().map(to_prediction_market_event).collect())
    }

    /// Every active market. Pages are requested concurrently and concatenated
    /// in page order; any failed read fails the whole call.
    pub async fn get_active_markets(&self) -> Result<Vec<PredictionMarketEvent>, TrueMarketError> {
        let addresses = self.source.active_market_addresses().await?;
        if addresses.is_empty() {
            tracing::debug!("no active markets");
            return Ok(Vec::new());
        }

        let total = addresses.len() as u64;
        let pages = page_count(total, self.page_size)?;
        tracing::debug!(total, pages, page_size = self.page_size, "fetching active market pages");

        let fetches =
            (0..pages).map(|page| self.get_all_active_market_details(page, self.page_size));
        let events: Vec<PredictionMarketEvent> =
            try_join_all(fetches).await?.into_iter().flatten().collect();

        tracing::info!(total, fetched = events.len(), "Fetched active markets");
        Ok(events)
    }
}
