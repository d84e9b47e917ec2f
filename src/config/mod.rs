use std::env;

use alloy::primitives::Address;

use crate::truemarket::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub helper_address: Address,
    pub page_size: u64,
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, so callers can layer CLI flags
    /// over the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let rpc_url = lookup("TRUEMARKET_RPC_URL")
            .ok_or_else(|| anyhow::anyhow!("TRUEMARKET_RPC_URL must be set"))?;

        let helper_address: Address = lookup("TRUEMARKET_HELPER_ADDRESS")
            .ok_or_else(|| anyhow::anyhow!("TRUEMARKET_HELPER_ADDRESS must be set"))?
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("TRUEMARKET_HELPER_ADDRESS is not an address: {e}"))?;

        let page_size: u64 = match lookup("TRUEMARKET_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("TRUEMARKET_PAGE_SIZE is not a number: {e}"))?,
            None => DEFAULT_PAGE_SIZE,
        };
        if page_size == 0 {
            anyhow::bail!("TRUEMARKET_PAGE_SIZE must be greater than zero");
        }

        Ok(Self {
            rpc_url,
            helper_address,
            page_size,
        })
    }
}
