//! JSON-RPC method handlers
//!
//! Maps a `(chain, method)` pair to a canned result. Anything without a canned
//! result is echoed back to the caller instead of failing.

use serde_json::{json, Value};
use tracing::debug;

use super::types::{EchoFallback, EchoedCall, RpcRequest, RpcResponse};
use super::DispatchError;
use crate::chains;

/// Note attached to every echo fallback result
pub const MOCK_NOTE: &str = "Mock response. Connect real nodes/providers to enable live routing.";

/// Dispatch a request for `chain` to its canned result or the echo fallback
pub fn dispatch(chain: &str, request: RpcRequest) -> Result<RpcResponse, DispatchError> {
    if !chains::is_supported(chain) {
        return Err(DispatchError::UnsupportedChain(chain.to_string()));
    }

    let id = request.response_id();
    let method = request.method.to_lowercase();

    let result = match canned_result(chain, &method) {
        Some(result) => {
            debug!("rpc {}:{} answered from canned table", chain, request.method);
            result
        }
        None => {
            debug!("rpc {}:{} has no canned result, echoing", chain, request.method);
            echo_fallback(chain, &request)
        }
    };

    Ok(RpcResponse::result(id, result))
}

/// Canned results keyed by chain code and lowercased method name
fn canned_result(chain: &str, method: &str) -> Option<Value> {
    match (chain, method) {
        ("eth", "eth_blocknumber") => Some(json!("0x12ab34")),
        ("sui", "sui_getlatestcheckpointsequence") => Some(json!(123456)),
        ("bittensor", "subnet.get_state") => Some(json!({ "subnets": 32 })),
        _ => None,
    }
}

fn echo_fallback(chain: &str, request: &RpcRequest) -> Value {
    let fallback = EchoFallback {
        echo: EchoedCall {
            chain,
            method: &request.method,
            params: request.params.as_deref().unwrap_or_default(),
        },
        note: MOCK_NOTE,
    };

    json!(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::SUPPORTED_CHAINS;

    #[test]
    fn test_unknown_method_echoes_for_every_chain() {
        for chain in SUPPORTED_CHAINS.iter() {
            let resp = dispatch(chain.code, RpcRequest::new("net_version"))
                .expect("registered chain should dispatch");
            assert_eq!(resp.result["echo"]["chain"], chain.code);
            assert_eq!(resp.result["note"], MOCK_NOTE);
        }
    }

    #[test]
    fn test_unsupported_chain() {
        let err = dispatch("xrp", RpcRequest::new("eth_blockNumber")).unwrap_err();
        assert_eq!(err, DispatchError::UnsupportedChain("xrp".to_string()));
    }

    #[test]
    fn test_chain_code_is_not_lowercased() {
        assert!(dispatch("Eth", RpcRequest::new("eth_blockNumber")).is_err());
    }

    #[test]
    fn test_eth_block_number_ignores_method_case() {
        for method in ["eth_blockNumber", "ETH_BLOCKNUMBER", "eth_blocknumber"] {
            let resp = dispatch("eth", RpcRequest::new(method)).expect("eth is supported");
            assert_eq!(resp.result, json!("0x12ab34"));
        }
    }

    #[test]
    fn test_sui_checkpoint_sequence() {
        let resp = dispatch("sui", RpcRequest::new("sui_getLatestCheckpointSequence"))
            .expect("sui is supported");
        assert_eq!(resp.result, json!(123456));
    }

    #[test]
    fn test_bittensor_subnet_state() {
        let resp = dispatch("bittensor", RpcRequest::new("subnet.get_state"))
            .expect("bittensor is supported");
        assert_eq!(resp.result, json!({"subnets": 32}));
    }

    #[test]
    fn test_canned_results_are_chain_scoped() {
        let resp = dispatch("sol", RpcRequest::new("eth_blockNumber")).expect("sol is supported");
        assert_eq!(resp.result["echo"]["method"], "eth_blockNumber");
    }

    #[test]
    fn test_echo_keeps_method_casing_and_params() {
        let req = RpcRequest::new("Author_SubmitExtrinsic")
            .with_params(vec![json!("0xdead"), json!({"tip": 1})]);
        let resp = dispatch("dot", req).expect("dot is supported");
        assert_eq!(
            resp.result,
            json!({
                "echo": {
                    "chain": "dot",
                    "method": "Author_SubmitExtrinsic",
                    "params": ["0xdead", {"tip": 1}]
                },
                "note": MOCK_NOTE
            })
        );
    }

    #[test]
    fn test_echo_params_default_to_empty() {
        let resp = dispatch("sol", RpcRequest::new("getSlot")).expect("sol is supported");
        assert_eq!(resp.result["echo"]["params"], json!([]));
    }

    #[test]
    fn test_id_is_echoed_or_defaulted() {
        let resp = dispatch("eth", RpcRequest::new("eth_blockNumber").with_id(json!(42)))
            .expect("eth is supported");
        assert_eq!(resp.id, json!(42));

        let resp = dispatch("eth", RpcRequest::new("eth_blockNumber")).expect("eth is supported");
        assert_eq!(resp.id, json!(1));

        let resp = dispatch("eth", RpcRequest::new("eth_blockNumber").with_id(Value::Null))
            .expect("eth is supported");
        assert_eq!(resp.id, json!(1));
    }

    #[test]
    fn test_jsonrpc_version_is_always_2_0() {
        let mut req = RpcRequest::new("eth_blockNumber");
        req.jsonrpc = "1.0".to_string();
        let resp = dispatch("eth", req).expect("eth is supported");
        assert_eq!(resp.jsonrpc, "2.0");
    }
}
