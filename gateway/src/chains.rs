//! Supported chain registry
//!
//! The set of networks the gateway knows how to route. The registry is fixed
//! at compile time and never changes while the process runs.

use serde::Serialize;
use utoipa::ToSchema;

/// A blockchain network exposed by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Chain {
    /// Human readable network name
    pub name: &'static str,
    /// Short code used in RPC paths, e.g. `eth`
    pub code: &'static str,
}

/// Every chain the gateway accepts, in display order
pub const SUPPORTED_CHAINS: [Chain; 5] = [
    Chain { name: "Ethereum", code: "eth" },
    Chain { name: "Bittensor", code: "bittensor" },
    Chain { name: "Sui", code: "sui" },
    Chain { name: "Polkadot", code: "dot" },
    Chain { name: "Solana", code: "sol" },
];

/// Look up a chain by its exact (case-sensitive) code
pub fn find(code: &str) -> Option<&'static Chain> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.code == code)
}

/// Whether `code` names a registered chain
pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}
