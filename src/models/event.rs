//! Record shapes of the Polynance SDK.
//!
//! Field names serialize exactly as the SDK's JSON schema spells them, which
//! mixes camelCase and snake_case.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Polymarket,
    Limitless,
    Truemarket,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionToken {
    pub token_id: String,
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionMarket {
    pub id: u64,
    pub question: String,
    pub image: String,
    pub icon: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub end: String,
    pub spread: f64,
    pub funded: bool,
    pub active: bool,
    #[serde(rename = "rewardsMinSize", default, skip_serializing_if = "Option::is_none")]
    pub rewards_min_size: Option<f64>,
    #[serde(rename = "rewardsMaxSpread", default, skip_serializing_if = "Option::is_none")]
    pub rewards_max_spread: Option<f64>,
    pub position_tokens: Vec<PositionToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionMarketEvent {
    pub id: String,
    pub protocol: Protocol,
    pub region: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "creationDate")]
    pub creation_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    pub active: bool,
    pub image: String,
    pub icon: String,
    pub markets: Vec<PredictionMarket>,
}
