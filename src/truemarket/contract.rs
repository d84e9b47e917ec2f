//! Bindings for the Polynance TrueMarket helper contract.

use alloy::sol;

use crate::models::MarketDetail;

sol! {
    #[sol(rpc)]
    interface IPolynanceTruemarketHelper {
        struct MarketDetail {
            address id;
            string question;
            string source;
            string additionalInfo;
            uint256 status;
            uint256 createdAt;
            uint256 endOfTrading;
            uint256 winningPosition;
            address yesToken;
            address noToken;
            bool bondSettled;
            address yesPool;
            address noPool;
            uint256 yesPrice;
            uint256 noPrice;
        }

        function getAllActiveMarketsAddress() external view returns (address[] memory);

        function getMarketdetail(address market) external view returns (MarketDetail memory);

        function getAllActiveMarketDetails(uint256 page, uint256 limit)
            external
            view
            returns (MarketDetail[] memory);
    }
}

impl From<IPolynanceTruemarketHelper::MarketDetail> for MarketDetail {
    fn from(d: IPolynanceTruemarketHelper::MarketDetail) -> Self {
        Self {
            id: d.id,
            question: d.question,
            source: d.source,
            additional_info: d.additionalInfo,
            status: d.status,
            created_at: d.createdAt,
            end_of_trading: d.endOfTrading,
            winning_position: d.winningPosition,
            yes_token: d.yesToken,
            no_token: d.noToken,
            bond_settled: d.bondSettled,
            yes_pool: d.yesPool,
            no_pool: d.noPool,
            yes_price: d.yesPrice,
            no_price: d.noPrice,
        }
    }
}
