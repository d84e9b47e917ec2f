use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A market as reported by the helper contract, field for field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDetail {
    /// Market contract address.
    pub id: Address,
    pub question: String,
    pub source: String,
    pub additional_info: String,
    pub status: U256,
    pub created_at: U256,
    pub end_of_trading: U256,
    pub winning_position: U256,
    pub yes_token: Address,
    pub no_token: Address,
    pub bond_settled: bool,
    pub yes_pool: Address,
    pub no_pool: Address,
    pub yes_price: U256,
    pub no_price: U256,
}

impl MarketDetail {
    /// Status code 1 is the only one the helper uses for a tradable market.
    pub fn is_active(&self) -> bool {
        self.status == U256::from(1)
    }

    /// A market is funded once both outcome pools have been deployed.
    pub fn is_funded(&self) -> bool {
        !self.yes_pool.is_zero() && !self.no_pool.is_zero()
    }
}
