use crate::miot::domain::PropertyResult;
use crate::miot::mapping::{MappingError, PropertyMapping};
use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use std::fmt::Debug;
use thiserror::Error;

/// A client that can read and write the properties of one MIoT device by their logical names.
#[async_trait]
pub trait MiotClient: Debug + Send + Sync {
    fn mapping(&self) -> &'static PropertyMapping;

    /// Resolves `name` through the mapping and writes `value` to the device.
    async fn set_property(&self, name: &str, value: Value) -> Result<(), MiotClientError>;

    /// Reads every property of the mapping. Returns one result per mapped property, in mapping order.
    async fn get_properties_for_mapping(&self) -> Result<Vec<PropertyResult>, MiotClientError>;
}

#[derive(Error, Debug)]
pub enum MiotClientError {
    #[error(transparent)]
    UnknownProperty(#[from] MappingError),
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("gateway client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("gateway responded with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("device returned error {code}: {message}")]
    DeviceError { code: i64, message: String },
    #[error("device rejected property '{name}' with code {code}")]
    PropertyRejected { name: String, code: i64 },
    #[error("gateway sent no result for '{method}'")]
    MissingResult { method: &'static str },
}
