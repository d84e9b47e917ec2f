pub mod client;
pub mod contract;
pub mod convert;
pub mod transport;

pub use client::{page_count, HelperContract, MarketSource, TrueMarketClient, DEFAULT_PAGE_SIZE};
pub use convert::to_prediction_market_event;
pub use transport::provider_for;
