mod client;
mod domain;
mod gateway_client;
mod mapping;

pub use client::{MiotClient, MiotClientError};
pub use domain::PropertyResult;
pub use gateway_client::{GatewayClient, new_client};
pub use mapping::{MappingError, PropertyAddress, PropertyMapping};
