mod rpc;

pub use rpc::{GetPropertyParam, PropertyResult, RpcRequest, RpcResponse, SetPropertyParam};
