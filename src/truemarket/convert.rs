//! Reshape helper-contract records into Polynance SDK events.

use alloy::primitives::Address;

use crate::models::{MarketDetail, PositionToken, PredictionMarket, PredictionMarketEvent, Protocol};

const IMAGE_BASE: &str = "https://res.truemarkets.org/image/market";
const REGION: &str = "global";

/// Image (and icon) URL TrueMarkets serves for a market.
pub fn image_url(market: Address) -> String {
    format!("{IMAGE_BASE}/{}.png", lower_hex(market))
}

/// Numeric market id: the first four address bytes read as a big-endian integer.
pub fn synthetic_market_id(market: Address) -> u64 {
    let mut prefix = [0u8; 4];
    prefix.copy_from_slice(&market.as_slice()[..4]);
    u64::from(u32::from_be_bytes(prefix))
}

pub fn to_prediction_market_event(detail: &MarketDetail) -> PredictionMarketEvent {
    let address = detail.id;
    let slug = lower_hex(address);
    let image = image_url(address);
    let active = detail.is_active();

    let position_tokens = vec![
        PositionToken {
            token_id: detail.yes_token.to_string(),
            name: "Yes".into(),
            price: detail.yes_price.to_string(),
        },
        PositionToken {
            token_id: detail.no_token.to_string(),
            name: "No".into(),
            price: detail.no_price.to_string(),
        },
    ];

    let market = PredictionMarket {
        id: synthetic_market_id(address),
        question: detail.question.clone(),
        image: image.clone(),
        icon: image.clone(),
        slug: slug.clone(),
        name: detail.question.clone(),
        description: detail.additional_info.clone(),
        end: detail.end_of_trading.to_string(),
        // Not derivable from the helper's reads.
        spread: 0.0,
        funded: detail.is_funded(),
        active,
        rewards_min_size: None,
        rewards_max_spread: None,
        position_tokens,
    };

    PredictionMarketEvent {
        id: address.to_string(),
        protocol: Protocol::Truemarket,
        region: REGION.into(),
        slug,
        title: detail.question.clone(),
        description: detail.additional_info.clone(),
        creation_date: detail.created_at.to_string(),
        end_date: detail.end_of_trading.to_string(),
        active,
        image: image.clone(),
        icon: image,
        markets: vec![market],
    }
}

fn lower_hex(address: Address) -> String {
    format!("{address:#x}")
}
