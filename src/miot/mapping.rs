use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Address of a single property on a MIoT device: the service id (`siid`) and the property id (`piid`) within that
/// service.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PropertyAddress {
    pub siid: u32,
    pub piid: u32,
}

impl PropertyAddress {
    pub const fn new(siid: u32, piid: u32) -> Self {
        PropertyAddress { siid, piid }
    }
}

impl Display for PropertyAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "siid={} piid={}", self.siid, self.piid)
    }
}

/// Maps the logical property names of one device model to their MIoT addresses.
///
/// Tables are static data, one per model. Nothing is inherited between models, a model that shares addresses with
/// another still spells out its own table.
#[derive(PartialEq, Debug)]
pub struct PropertyMapping {
    model: &'static str,
    entries: &'static [(&'static str, PropertyAddress)],
}

impl PropertyMapping {
    pub const fn new(model: &'static str, entries: &'static [(&'static str, PropertyAddress)]) -> Self {
        PropertyMapping { model, entries }
    }

    pub fn model(&self) -> &'static str {
        self.model
    }

    pub fn resolve(&self, name: &str) -> Result<PropertyAddress, MappingError> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, address)| *address)
            .ok_or_else(|| MappingError::UnknownProperty {
                name: name.to_string(),
                model: self.model,
            })
    }

    /// Iterates over the entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, PropertyAddress)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum MappingError {
    #[error("no such property '{name}' for model '{model}'")]
    UnknownProperty { name: String, model: &'static str },
}
