pub mod event;
pub mod market;

pub use event::{PositionToken, PredictionMarket, PredictionMarketEvent, Protocol};
pub use market::MarketDetail;
