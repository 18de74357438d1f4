use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Native currency descriptor attached to a registry chain entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    /// Display name (e.g. `"Ether"`).
    pub name: String,
    /// Ticker symbol (e.g. `"ETH"`).
    pub symbol: String,
    /// Number of decimal places in the base unit.
    pub decimals: u8,
}

/// A published JSON-RPC endpoint for a chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcEndpoint {
    /// Endpoint URL.
    pub url: String,
    /// Whether the endpoint is operated on open-source infrastructure.
    /// Chainlist omits the flag for some entries; absent means false.
    #[serde(default)]
    pub is_open_source: bool,
}

/// A chain entry as served by a chainlist-style catalogue.
///
/// Read-only to this crate; the registry collaborator produces it and the
/// classifier only inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainInfo {
    /// Integer uniquely identifying the chain.
    pub chain_id: u64,
    /// Canonical display name as catalogued.
    pub name: String,
    /// Native currency of the chain.
    pub native_currency: NativeCurrency,
    /// Published endpoints, in the catalogue's preference order.
    #[serde(default)]
    pub rpc: Vec<RpcEndpoint>,
}

/// How many lookup attempts the registry client should make for one fetch.
/// Scheduling and backoff between attempts stay the client's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryPolicy {
    /// One attempt, fail fast.
    Single,
    /// The client retries per its own schedule before giving up.
    Retry,
}

/// Boundary to the external chain catalogue.
///
/// Implementations own all transport, caching and retry mechanics; the
/// classifier only sees results. Must be safe for concurrent use.
pub trait RegistryClient: Sync {
    /// Look up the catalogue entry for `chain_id`.
    fn chain_info(&self, chain_id: u64, retry: RetryPolicy) -> Result<ChainInfo, Error>;

    /// Check that `url` is reachable and well-formed.
    fn validate_rpc_endpoint(&self, url: &str) -> Result<(), Error>;

    /// Ask the endpoint which chain id it actually serves.
    fn chain_id_from_rpc(&self, url: &str) -> Result<u64, Error>;
}
