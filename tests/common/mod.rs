use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::primitives::{Address, U256};
use metrics::{SharedString, Unit};
use metrics_util::debugging::DebugValue;
use metrics_util::CompositeKey;
use tokio::sync::Barrier;

use truemarket::{MarketDetail, MarketSource, TrueMarketError};

/// Build a market whose address and fields are derived from `n`.
#[allow(dead_code)]
pub fn make_detail(n: u32) -> MarketDetail {
    let mut id = [0u8; 20];
    id[..4].copy_from_slice(&n.to_be_bytes());
    id[19] = 0xaa;

    MarketDetail {
        id: Address::from(id),
        question: format!("Market #{n}?"),
        source: "test".into(),
        additional_info: format!("details for {n}"),
        status: U256::from(1),
        created_at: U256::from(1_700_000_000u64 + u64::from(n)),
        end_of_trading: U256::from(1_800_000_000u64 + u64::from(n)),
        winning_position: U256::ZERO,
        yes_token: Address::repeat_byte(0x01),
        no_token: Address::repeat_byte(0x02),
        bond_settled: false,
        yes_pool: Address::repeat_byte(0x03),
        no_pool: Address::repeat_byte(0x04),
        yes_price: U256::from(500_000u64),
        no_price: U256::from(500_000u64),
    }
}

pub type SnapshotEntry = (CompositeKey, Option<Unit>, Option<SharedString>, DebugValue);

/// Sum of every counter named `name` in a recorder snapshot.
#[allow(dead_code)]
pub fn counter_total(entries: &[SnapshotEntry], name: &str) -> u64 {
    entries
        .iter()
        .filter(|(key, _, _, _)| key.key().name() == name)
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(v) => *v,
            _ => 0,
        })
        .sum()
}

/// In-memory helper contract. Records every page request it serves.
#[derive(Default)]
pub struct InMemorySource {
    markets: Vec<MarketDetail>,
    page_requests: Mutex<Vec<(u64, u64)>>,
    address_requests: AtomicUsize,
    fail_page: Option<u64>,
    /// When set, every page read waits here, so sequential reads never finish.
    barrier: Option<Barrier>,
}

#[allow(dead_code)]
impl InMemorySource {
    pub fn with_markets(count: u32) -> Self {
        Self {
            markets: (0..count).map(make_detail).collect(),
            ..Default::default()
        }
    }

    pub fn failing_on_page(mut self, page: u64) -> Self {
        self.fail_page = Some(page);
        self
    }

    pub fn requiring_concurrent_pages(mut self, pages: usize) -> Self {
        self.barrier = Some(Barrier::new(pages));
        self
    }

    pub fn markets(&self) -> &[MarketDetail] {
        &self.markets
    }

    pub fn page_requests(&self) -> Vec<(u64, u64)> {
        let mut requests = self.page_requests.lock().unwrap().clone();
        requests.sort();
        requests
    }

    pub fn address_requests(&self) -> usize {
        self.address_requests.load(Ordering::SeqCst)
    }
}

impl MarketSource for InMemorySource {
    async fn active_market_addresses(&self) -> Result<Vec<Address>, TrueMarketError> {
        self.address_requests.fetch_add(1, Ordering::SeqCst);
        Ok(self.markets.iter().map(|m| m.id).collect())
    }

    async fn market_detail(&self, market: Address) -> Result<MarketDetail, TrueMarketError> {
        self.markets
            .iter()
            .find(|m| m.id == market)
            .cloned()
            .ok_or_else(|| {
                TrueMarketError::Contract(alloy::contract::Error::UnknownFunction(format!(
                    "no market {market}"
                )))
            })
    }

    async fn active_market_details(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<MarketDetail>, TrueMarketError> {
        self.page_requests.lock().unwrap().push((page, limit));

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        if self.fail_page == Some(page) {
            return Err(TrueMarketError::Contract(
                alloy::contract::Error::UnknownFunction("getAllActiveMarketDetails".into()),
            ));
        }

        let start = (page * limit) as usize;
        Ok(self
            .markets
            .iter()
            .skip(start)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
