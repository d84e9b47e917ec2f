pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod truemarket;

pub use errors::TrueMarketError;
pub use models::{MarketDetail, PositionToken, PredictionMarket, PredictionMarketEvent, Protocol};
pub use truemarket::{HelperContract, MarketSource, TrueMarketClient, DEFAULT_PAGE_SIZE};
