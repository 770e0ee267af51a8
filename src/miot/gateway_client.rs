use crate::app_config::AppConfig;
use crate::miot::client::{MiotClient, MiotClientError};
use crate::miot::domain::{GetPropertyParam, PropertyResult, RpcRequest, RpcResponse, SetPropertyParam};
use crate::miot::mapping::PropertyMapping;
use async_trait::async_trait;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, instrument, warn};

pub const TOKEN_HEADER: &str = "x-miot-token";

pub fn new_client(config: &AppConfig) -> Result<Client, MiotClientError> {
    let mut headers = header::HeaderMap::new();
    if let Some(token) = config.gateway().token() {
        let mut token_value = HeaderValue::from_str(token)?;
        token_value.set_sensitive(true);
        headers.insert(TOKEN_HEADER, token_value);
    }

    let client = Client::builder().timeout(config.gateway().timeout()).default_headers(headers).build()?;
    Ok(client)
}

/// Speaks the MIoT `get_properties` / `set_properties` JSON-RPC calls to a gateway that relays them to the device.
#[derive(Debug)]
pub struct GatewayClient {
    client: Client,
    url: String,
    mapping: &'static PropertyMapping,
    max_properties: usize,
    next_id: AtomicU64,
}

impl GatewayClient {
    pub fn new(client: Client, config: &AppConfig, mapping: &'static PropertyMapping) -> Self {
        GatewayClient {
            client,
            url: config.gateway().url().to_string(),
            mapping,
            max_properties: config.gateway().max_properties().max(1),
            next_id: AtomicU64::new(1),
        }
    }

    async fn call<P: Serialize + Sync>(
        &self,
        method: &'static str,
        params: &[P],
    ) -> Result<Vec<PropertyResult>, MiotClientError> {
        let request = RpcRequest {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        debug!(id = request.id, "🔵 Calling '{}' with {} parameter(s)", method, params.len());

        let response = self.client.post(&self.url).json(&request).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status_code = %status, "⚠️ Gateway request '{}' failed. Response: {:?}", method, body);
            return Err(MiotClientError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let rpc_response = response.json::<RpcResponse<PropertyResult>>().await?;
        if let Some(error) = rpc_response.error {
            return Err(MiotClientError::DeviceError {
                code: error.code,
                message: error.message,
            });
        }

        rpc_response.result.ok_or(MiotClientError::MissingResult { method })
    }
}

#[async_trait]
impl MiotClient for GatewayClient {
    fn mapping(&self) -> &'static PropertyMapping {
        self.mapping
    }

    #[instrument(skip(self, value), fields(model = self.mapping.model()))]
    async fn set_property(&self, name: &str, value: Value) -> Result<(), MiotClientError> {
        let address = self.mapping.resolve(name)?;
        let params = [SetPropertyParam {
            did: name.to_string(),
            siid: address.siid,
            piid: address.piid,
            value,
        }];

        let results = self.call("set_properties", &params).await?;
        let result = results.into_iter().next().ok_or(MiotClientError::MissingResult { method: "set_properties" })?;
        if !result.is_success() {
            return Err(MiotClientError::PropertyRejected {
                name: name.to_string(),
                code: result.code,
            });
        }

        debug!(%address, "🟢 Property '{}' set", name);
        Ok(())
    }

    #[instrument(skip(self), fields(model = self.mapping.model()))]
    async fn get_properties_for_mapping(&self) -> Result<Vec<PropertyResult>, MiotClientError> {
        info!("Retrieving {} properties...", self.mapping.len());

        let params: Vec<GetPropertyParam> = self
            .mapping
            .iter()
            .map(|(name, address)| GetPropertyParam {
                did: name.to_string(),
                siid: address.siid,
                piid: address.piid,
            })
            .collect();

        let mut results = Vec::with_capacity(params.len());
        for chunk in params.chunks(self.max_properties) {
            results.extend(self.call("get_properties", chunk).await?);
        }

        info!("Retrieving {} properties... OK", results.len());
        Ok(results)
    }
}
