//! Process-wide provider registry.
//!
//! One alloy provider per RPC URL, so every client pointed at the same
//! endpoint shares its HTTP connection pool and multicall batch window.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use alloy::providers::layers::CallBatchLayer;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use tokio::runtime::Handle;

use crate::errors::TrueMarketError;

static PROVIDERS: LazyLock<Mutex<HashMap<String, Arc<DynProvider>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Return the shared provider for `rpc_url`, building it on first use.
///
/// Entries are never evicted.
pub fn provider_for(rpc_url: &str) -> Result<Arc<DynProvider>, TrueMarketError> {
    let mut providers = PROVIDERS.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(provider) = providers.get(rpc_url) {
        tracing::trace!(rpc_url, "reusing cached provider");
        return Ok(Arc::clone(provider));
    }

    let provider = Arc::new(build_provider(rpc_url)?);
    providers.insert(rpc_url.to_string(), Arc::clone(&provider));
    tracing::debug!(rpc_url, cached = providers.len(), "created provider");

    Ok(provider)
}

/// Number of distinct RPC URLs with a live provider.
pub fn cached_provider_count() -> usize {
    PROVIDERS.lock().unwrap_or_else(PoisonError::into_inner).len()
}

/// The batching layer spawns its own task, so this needs a tokio runtime.
fn build_provider(rpc_url: &str) -> Result<DynProvider, TrueMarketError> {
    let url = Url::parse(rpc_url).map_err(|e| TrueMarketError::InvalidRpcUrl {
        url: rpc_url.to_string(),
        reason: e.to_string(),
    })?;

    if Handle::try_current().is_err() {
        return Err(TrueMarketError::MissingRuntime);
    }

    let provider = ProviderBuilder::new()
        .layer(CallBatchLayer::new())
        .connect_http(url)
        .erased();

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_same_url_reuses_provider() {
        let first = provider_for("http://127.0.0.1:18545/reuse").unwrap();
        let second = provider_for("http://127.0.0.1:18545/reuse").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_different_url_creates_new_provider() {
        let a = provider_for("http://127.0.0.1:18545/a").unwrap();
        let b = provider_for("http://127.0.0.1:18545/b").unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert!(cached_provider_count() >= 2);
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected_and_not_cached() {
        let err = provider_for("not a url").unwrap_err();

        assert!(matches!(err, TrueMarketError::InvalidRpcUrl { .. }));
        assert!(err.to_string().contains("not a url"));
        assert!(!PROVIDERS.lock().unwrap().contains_key("not a url"));
    }

    #[test]
    fn test_outside_runtime_is_an_error() {
        let err = provider_for("http://127.0.0.1:18545/no-runtime").unwrap_err();

        assert!(matches!(err, TrueMarketError::MissingRuntime));
        assert!(!PROVIDERS.lock().unwrap().contains_key("http://127.0.0.1:18545/no-runtime"));
    }
}
