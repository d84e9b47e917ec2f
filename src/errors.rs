#[derive(Debug, thiserror::Error)]
pub enum TrueMarketError {
    #[error("invalid RPC URL {url}: {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("page size must be greater than zero")]
    InvalidPageSize,

    #[error("no tokio runtime: providers must be created from within one")]
    MissingRuntime,

    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
}
