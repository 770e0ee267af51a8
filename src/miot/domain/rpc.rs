use serde::{Deserialize, Serialize};
use serde_json::Value;

// MIoT JSON-RPC envelope as relayed by the gateway: {"id": 1, "method": "get_properties", "params": [...]}
#[derive(Debug, Serialize)]
pub struct RpcRequest<'a, T> {
    pub id: u64,
    pub method: &'static str,
    pub params: &'a [T],
}

#[derive(Debug, Serialize, PartialEq)]
pub struct GetPropertyParam {
    pub did: String,
    pub siid: u32,
    pub piid: u32,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct SetPropertyParam {
    pub did: String,
    pub siid: u32,
    pub piid: u32,
    pub value: Value,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    pub id: Option<u64>,
    pub result: Option<Vec<T>>,
    pub error: Option<RpcError>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// One entry of a `get_properties` or `set_properties` reply. `code` is 0 on success, `value` is only present on reads.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PropertyResult {
    pub did: String,
    pub siid: u32,
    pub piid: u32,
    pub code: i64,
    #[serde(default)]
    pub value: Value,
}

impl PropertyResult {
    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}
